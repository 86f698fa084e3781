use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::navigation::Section;
use crate::state::contact::{FormField, FormState, FormStatus};
use crate::state::theme::Palette;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub palette: Palette,
    pub fields: FormState,
    pub status: FormStatus,
    pub on_change: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let palette = props.palette;
    let input_style = format!(
        "width: 100%; padding: 14px; background: {}; border: 1px solid {}; color: {}; \
         font-size: 16px; border-radius: 5px; outline: none;",
        palette.input_background, palette.input_border, palette.input_text
    );

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let input_handler = |field: FormField| {
        props.on_change.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            (field, input.value())
        })
    };

    let on_message = props.on_change.reform(|e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        (FormField::Message, textarea.value())
    });

    let text_input = |id: &'static str, kind: &'static str, label: &'static str, field: FormField, value: &str| {
        html! {
            <div class="form-group">
                <input
                    type={kind}
                    id={id}
                    required={true}
                    value={value.to_string()}
                    oninput={input_handler(field)}
                    style={input_style.clone()}
                />
                <label for={id}>{label}</label>
            </div>
        }
    };

    html! {
        <section
            id={Section::Contact.id()}
            style={format!(
                "background-color: {}; padding: 80px 5vw; display: flex; justify-content: center;",
                palette.dark_section_background
            )}
        >
            <div style="width: 100%; max-width: 600px;">
                <h2 style="font-family: Lato; font-size: 36px; font-weight: 700; margin-bottom: 10px;">{"Contact Us"}</h2>
                <p style="font-family: Lato; font-size: 18px; margin-bottom: 40px;">{"Have questions? Send us a message."}</p>
                <form onsubmit={onsubmit} novalidate={true}>
                    { text_input("name", "text", "Full Name", FormField::Name, &props.fields.name) }
                    { text_input("email", "email", "Email Address", FormField::Email, &props.fields.email) }
                    <div class="form-group">
                        <textarea
                            id="message"
                            rows="5"
                            required={true}
                            value={props.fields.message.clone()}
                            oninput={on_message}
                            style={format!("{} resize: vertical;", input_style)}
                        />
                        <label for="message">{"Message"}</label>
                    </div>
                    <button
                        type="submit"
                        class="send-button"
                        style="width: 100%; height: 50px; border: none; color: white; font-size: 18px; \
                               cursor: pointer; border-radius: 5px; transition: 0.3s;"
                    >
                        {"Send Message"}
                    </button>
                    <style>
                        {".send-button { background-color: #0F79AF; } .send-button:hover { background-color: #1a9ada; }"}
                    </style>
                    if !props.status.message.is_empty() {
                        <p style={format!("color: {}; margin-top: 15px; font-family: Lato;", props.status.color())}>
                            {&props.status.message}
                        </p>
                    }
                </form>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertToastProps {
    pub palette: Palette,
    pub visible: bool,
    pub on_dismiss: Callback<()>,
}

/// "Message Sent!" notice that slides in from the right edge.
#[function_component(AlertToast)]
pub fn alert_toast(props: &AlertToastProps) -> Html {
    html! {
        <div id="custom-alert" class={classes!("custom-alert", props.visible.then(|| "show"))}>
            <div style={format!(
                "background: {}; border-left: 5px solid #0F79AF; padding: 15px; display: flex; align-items: center; \
                 gap: 12px; border-radius: 6px; box-shadow: 0 0 20px rgba(0,0,0,0.5); color: {}; font-family: Lato;",
                props.palette.alert_background, props.palette.alert_text
            )}>
                <span style="font-size: 24px; color: #0F79AF;">{"✓"}</span>
                <div>
                    <h3 style="margin: 0 0 5px; font-size: 16px;">{"Message Sent!"}</h3>
                    <p style="margin: 0; font-size: 14px;">
                        {"Thank you for contacting us. We'll get back to you soon."}
                    </p>
                </div>
                <span
                    onclick={props.on_dismiss.reform(|_: MouseEvent| ())}
                    style="margin-left: auto; cursor: pointer; font-size: 22px;"
                >
                    {"×"}
                </span>
            </div>
        </div>
    }
}
