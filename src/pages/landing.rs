use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use stylist::GlobalStyle;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

use crate::components::contact::{AlertToast, ContactSection};
use crate::components::dropdowns::{AccountPanel, Backdrop, CategoriesPanel, LanguagesPanel};
use crate::components::navbar::Navbar;
use crate::components::sections::{Channels, Footer, Hero, Popcorn};
use crate::config;
use crate::state::contact::{AlertState, AlertTicket, ContactForm, FormField, LocalSink, SubmitOutcome};
use crate::state::menu::{Containment, HoverPart, MenuCoordinator, Overlay, OverlayHit, RegionHits};
use crate::state::theme::{LocalThemeStore, ThemeController};

const GLOBAL_CSS: &str = r#"
    *, *::before, *::after { box-sizing: border-box; }
    html { font-size: 16px; scroll-behavior: smooth; }
    img { max-width: 100%; height: auto; }
    body, main, footer, p, h1, ul, li { padding: 0; margin: 0; }
    ul { list-style: none; }
    a { text-decoration: none; }
    body { margin: 0; font-family: 'Lato', arial; }

    .light-theme { background-color: #ffffff; color: #111; }
    .dark-theme { background-color: #000000; color: #E1E1E1; }

    .search-input {
        width: 0; opacity: 0; margin-left: 12px;
        padding: 10px 14px; height: 40px; border-radius: 4px;
        border: none; outline: none; font-size: 16px;
        background-color: #ffffff;
        transition: width 0.3s ease, opacity 0.3s ease;
    }
    .search-input.active { width: 320px; opacity: 1; }

    .form-group { position: relative; margin-bottom: 25px; }
    .form-group label {
        position: absolute; left: 14px; top: 14px;
        color: #777; font-size: 14px; pointer-events: none; transition: 0.3s;
    }
    .form-group input:focus + label,
    .form-group textarea:focus + label,
    .form-group input:valid + label,
    .form-group textarea:valid + label {
        top: -10px; font-size: 12px; color: #0F79AF;
    }

    .custom-alert { position: fixed; top: 20px; right: -400px; width: 320px; z-index: 9999; transition: right 0.5s ease; }
    .custom-alert.show { right: 20px; }

    .channel:hover { transition: 0.3s; box-shadow: 0 0 1em black; }

    @media (max-width: 768px) {
        .search-input.active { width: 200px; }
    }
"#;

/// Elements an outside click is measured against. Search has a single wrapper that
/// holds both its icon and its input.
#[derive(Clone, Default, PartialEq)]
pub struct Regions {
    pub search: NodeRef,
    pub categories_trigger: NodeRef,
    pub categories_panel: NodeRef,
    pub languages_trigger: NodeRef,
    pub languages_panel: NodeRef,
    pub account_trigger: NodeRef,
    pub account_panel: NodeRef,
}

fn containment(node_ref: &NodeRef, target: &Node) -> Containment {
    match node_ref.get() {
        Some(node) => Containment::from_contains(true, node.contains(Some(target))),
        None => Containment::Unmounted,
    }
}

impl Regions {
    fn hits(&self, target: &Node) -> RegionHits {
        let search = containment(&self.search, target);
        RegionHits::default()
            .with(
                Overlay::Search,
                OverlayHit {
                    panel: search,
                    trigger: search,
                },
            )
            .with(
                Overlay::Categories,
                OverlayHit {
                    panel: containment(&self.categories_panel, target),
                    trigger: containment(&self.categories_trigger, target),
                },
            )
            .with(
                Overlay::Languages,
                OverlayHit {
                    panel: containment(&self.languages_panel, target),
                    trigger: containment(&self.languages_trigger, target),
                },
            )
            .with(
                Overlay::Account,
                OverlayHit {
                    panel: containment(&self.account_panel, target),
                    trigger: containment(&self.account_trigger, target),
                },
            )
    }
}

pub enum Msg {
    ToggleTheme,
    ToggleOverlay(Overlay),
    HoverEnter(HoverPart),
    HoverLeave(HoverPart),
    PointerDown(RegionHits),
    BackdropClicked,
    FieldChanged(FormField, String),
    Submit,
    AlertExpired(AlertTicket),
    DismissAlert,
}

pub struct Landing {
    theme: ThemeController<LocalThemeStore>,
    menu: MenuCoordinator,
    contact: ContactForm<LocalSink>,
    alert: AlertState,
    alert_timer: Option<Timeout>,
    regions: Regions,
    pointer_listener: Option<Closure<dyn Fn(MouseEvent)>>,
    _global_style: Option<GlobalStyle>,
}

impl Landing {
    fn install_pointer_listener(ctx: &Context<Self>, regions: &Regions) -> Option<Closure<dyn Fn(MouseEvent)>> {
        let window = web_sys::window()?;
        let link = ctx.link().clone();
        let regions = regions.clone();
        let listener = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
            let target = e.target().and_then(|target| target.dyn_into::<Node>().ok());
            if let Some(target) = target {
                link.send_message(Msg::PointerDown(regions.hits(&target)));
            }
        });
        if let Err(e) = window.add_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref()) {
            warn!("Could not listen for outside clicks: {:?}", e);
            return None;
        }
        Some(listener)
    }

    fn show_alert(&mut self, ctx: &Context<Self>) {
        // Dropping the old handle cancels its pending dismissal.
        self.alert_timer = None;
        let ticket = self.alert.trigger();
        let link = ctx.link().clone();
        self.alert_timer = Some(Timeout::new(config::ALERT_DISMISS_MS, move || {
            link.send_message(Msg::AlertExpired(ticket));
        }));
    }
}

impl Component for Landing {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(config::DOCUMENT_TITLE);
        }

        let global_style = match GlobalStyle::new(GLOBAL_CSS) {
            Ok(style) => Some(style),
            Err(e) => {
                warn!("Failed to register page styles: {}", e);
                None
            }
        };

        let regions = Regions::default();
        let pointer_listener = Self::install_pointer_listener(ctx, &regions);
        let theme = ThemeController::new(LocalThemeStore);
        info!("Landing page created with {} theme", theme.theme().as_str());

        Self {
            theme,
            menu: MenuCoordinator::default(),
            contact: ContactForm::new(LocalSink),
            alert: AlertState::default(),
            alert_timer: None,
            regions,
            pointer_listener,
            _global_style: global_style,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleTheme => {
                self.theme.toggle_theme();
                true
            }
            Msg::ToggleOverlay(overlay) => {
                self.menu.toggle(overlay);
                true
            }
            Msg::HoverEnter(part) => {
                let was_open = self.menu.is_open(Overlay::Categories);
                self.menu.pointer_enter(part);
                !was_open
            }
            Msg::HoverLeave(part) => {
                let was_open = self.menu.is_open(Overlay::Categories);
                self.menu.pointer_leave(part);
                was_open != self.menu.is_open(Overlay::Categories)
            }
            Msg::PointerDown(hits) => {
                let closed = self.menu.outside_click(&hits);
                if !closed.is_empty() {
                    debug!("Outside click closed {:?}", closed);
                }
                !closed.is_empty()
            }
            Msg::BackdropClicked => {
                self.menu.click_backdrop();
                true
            }
            Msg::FieldChanged(field, value) => {
                self.contact.update(field, value);
                true
            }
            Msg::Submit => {
                if self.contact.submit() == SubmitOutcome::Accepted {
                    info!("Contact form submitted");
                    self.show_alert(ctx);
                }
                true
            }
            Msg::AlertExpired(ticket) => {
                let hidden = self.alert.expire(ticket);
                if hidden {
                    self.alert_timer = None;
                }
                hidden
            }
            Msg::DismissAlert => {
                self.alert_timer = None;
                self.alert.dismiss();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let theme = self.theme.theme();
        let palette = theme.palette();
        let overlays = self.menu.overlays();

        let on_toggle = link.callback(Msg::ToggleOverlay);
        let on_hover_enter = link.callback(Msg::HoverEnter);
        let on_hover_leave = link.callback(Msg::HoverLeave);

        html! {
            <div
                class={theme.class_name()}
                style={format!("background: {}; color: {}; min-height: 100vh;", palette.background, palette.text)}
            >
                <Navbar
                    theme={theme}
                    search_active={overlays.search}
                    regions={self.regions.clone()}
                    on_toggle={on_toggle}
                    on_hover_enter={on_hover_enter.clone()}
                    on_hover_leave={on_hover_leave.clone()}
                    on_toggle_theme={link.callback(|_: ()| Msg::ToggleTheme)}
                />

                if overlays.categories {
                    <CategoriesPanel
                        node_ref={self.regions.categories_panel.clone()}
                        on_enter={on_hover_enter}
                        on_leave={on_hover_leave}
                    />
                }
                if overlays.languages {
                    <LanguagesPanel node_ref={self.regions.languages_panel.clone()} />
                }
                if overlays.account {
                    <AccountPanel node_ref={self.regions.account_panel.clone()} />
                }
                if self.menu.backdrop_visible() {
                    <Backdrop on_click={link.callback(|_: ()| Msg::BackdropClicked)} />
                }

                <Hero palette={palette} />
                <Channels />
                <Popcorn palette={palette} />
                <ContactSection
                    palette={palette}
                    fields={self.contact.fields().clone()}
                    status={self.contact.status().clone()}
                    on_change={link.callback(|(field, value): (FormField, String)| Msg::FieldChanged(field, value))}
                    on_submit={link.callback(|_: ()| Msg::Submit)}
                />
                <AlertToast
                    palette={palette}
                    visible={self.alert.is_visible()}
                    on_dismiss={link.callback(|_: ()| Msg::DismissAlert)}
                />
                <Footer palette={palette} />
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.pointer_listener.take()) {
            let _ = window.remove_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref());
        }
    }
}
