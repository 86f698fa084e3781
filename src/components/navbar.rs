use yew::prelude::*;

use crate::components::icons::{AccountIcon, ArrowDown, GlobeIcon, Logo, SearchIcon};
use crate::navigation::{scroll_callback, Section};
use crate::pages::landing::Regions;
use crate::state::menu::{HoverPart, Overlay};
use crate::state::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub search_active: bool,
    pub regions: Regions,
    pub on_toggle: Callback<Overlay>,
    pub on_hover_enter: Callback<HoverPart>,
    pub on_hover_leave: Callback<HoverPart>,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let palette = props.theme.palette();
    let text_style = format!("color: {};", palette.text);
    let toggle = |overlay: Overlay| props.on_toggle.reform(move |_: MouseEvent| overlay);

    let anchor = |section: Section, label: &'static str| {
        html! {
            <li style="padding: 0 10px;">
                <a href={section.href()} onclick={scroll_callback(section)} style={text_style.clone()}>{label}</a>
            </li>
        }
    };

    html! {
        <header style={format!(
            "display: flex; justify-content: space-between; position: fixed; width: 100%; height: 80px; \
             padding: 0 5vw; align-items: center; background-color: {}; z-index: 10; \
             box-shadow: 0 2px 10px rgba(0,0,0,0.3);",
            palette.nav_background
        )}>
            <ul style="display: flex; align-items: center; font-family: Lato; font-size: 18px;">
                <li style="padding: 0 30px; cursor: pointer;" onclick={scroll_callback(Section::Main)}>
                    <Logo />
                </li>
                { anchor(Section::Main, "Home") }
                { anchor(Section::Channels, "Movies") }
                { anchor(Section::Popcorn, "TV Shows") }
                <li
                    id="categories-trigger"
                    ref={props.regions.categories_trigger.clone()}
                    style={format!("padding: 0 10px; cursor: pointer; font-weight: bold; color: {}; display: flex; align-items: center;", palette.text)}
                    onmouseenter={props.on_hover_enter.reform(|_: MouseEvent| HoverPart::Trigger)}
                    onmouseleave={props.on_hover_leave.reform(|_: MouseEvent| HoverPart::Trigger)}
                >
                    {"Categories"}<ArrowDown />
                </li>
                <li style="padding: 0 10px;"><a href="#" style={text_style.clone()}>{"Live TV"}</a></li>
                <li style="padding: 0 10px;"><a href="#" style={text_style.clone()}>{"Subscriptions"}</a></li>
            </ul>

            <ul style="display: flex; align-items: center; gap: 20px;">
                <li ref={props.regions.search.clone()} style="display: flex; align-items: center;">
                    <span onclick={toggle(Overlay::Search)}>
                        <SearchIcon />
                    </span>
                    <input
                        type="text"
                        placeholder="Search movies, TV shows..."
                        class={classes!("search-input", props.search_active.then(|| "active"))}
                    />
                </li>
                <li
                    id="lang-trigger"
                    ref={props.regions.languages_trigger.clone()}
                    style={format!("display: flex; align-items: center; gap: 4px; cursor: pointer; color: {}; user-select: none;", palette.text)}
                    onclick={toggle(Overlay::Languages)}
                >
                    <GlobeIcon />{"\u{a0}EN"}<ArrowDown />
                </li>
                <li
                    id="acc-trigger"
                    ref={props.regions.account_trigger.clone()}
                    style="display: flex; align-items: center; gap: 2px; cursor: pointer;"
                    onclick={toggle(Overlay::Account)}
                >
                    <AccountIcon /><ArrowDown />
                </li>
                <li>
                    <button
                        onclick={props.on_toggle_theme.reform(|_: MouseEvent| ())}
                        style="width: 45px; height: 40px; border-radius: 5px; border: none; cursor: pointer; \
                               font-size: 18px; background-color: #0F79AF; color: white; transition: 0.3s;"
                    >
                        {props.theme.icon()}
                    </button>
                </li>
                <li>
                    <button style="width: 130px; height: 40px; background-color: #0F79AF; border: none; \
                                   border-radius: 4px; color: #E1E1E1; font-size: 16px; font-family: Lato; \
                                   font-weight: bold; cursor: pointer;">
                        {"Join Prime"}
                    </button>
                </li>
            </ul>
        </header>
    }
}
