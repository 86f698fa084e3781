use yew::prelude::*;

use crate::components::icons::FooterLogo;
use crate::navigation::{scroll_callback, Section};
use crate::state::theme::Palette;

const CTA_BUTTON: &str = "display: block; width: 340px; height: 70px; background-color: #0F79AF; border: none; \
                          border-radius: 4px; font-size: 20px; font-family: Lato; font-weight: bold; color: #E1E1E1; \
                          cursor: pointer;";

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub palette: Palette,
}

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    let rule = html! {
        <svg width="140" height="1" viewBox="0 0 140 1">
            <rect width="140" height="1" fill={props.palette.rule} />
        </svg>
    };

    html! {
        <section
            id={Section::Main.id()}
            style={format!(
                "min-height: 100vh; padding: 100px 5vw 60px; display: flex; align-items: center; \
                 justify-content: space-between; flex-wrap: wrap; gap: 40px; background-color: {};",
                props.palette.section_background
            )}
        >
            <div style="flex: 1 1 420px; max-width: 600px;">
                <p style="font-family: Lato; font-size: 20px; margin-bottom: 20px;">
                    {"Unlimited movies, TV shows, and more"}
                </p>
                <h1 style="font-family: Lato; font-size: 48px; font-weight: 700;">
                    {"Welcome to Prime Video"}
                </h1>
                <p style="font-family: Lato; font-size: 20px; margin-top: 20px; line-height: 1.5;">
                    {"Join Prime to watch the latest movies, TV shows and award-winning Amazon Originals."}
                </p>
                <button style={format!("{} margin-top: 50px;", CTA_BUTTON)}>{"Prime Member? Sign in"}</button>
                <div style="display: flex; align-items: center; gap: 10px; margin-top: 30px; width: 340px;">
                    { rule.clone() }
                    <span style="font-family: Lato;">{"or"}</span>
                    { rule }
                </div>
                <button style={format!("{} margin-top: 30px;", CTA_BUTTON)}>{"Start your 30-day free trial*"}</button>
            </div>
            <div style="flex: 1 1 420px; display: flex; justify-content: center;">
                <img src="/assets/mainbackground-en.png" alt="Prime Video" style="width: 100%; max-width: 700px;" />
            </div>
        </section>
    }
}

struct Channel {
    name: &'static str,
    logo: &'static str,
    background: &'static str,
}

const CHANNELS: [Channel; 9] = [
    Channel { name: "HBO", logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/d/de/HBO_logo.svg/400px-HBO_logo.svg.png", background: "#1a1a2e" },
    Channel { name: "Showtime", logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/22/Showtime.svg/400px-Showtime.svg.png", background: "#c0392b" },
    Channel { name: "Starz", logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5f/Starz_2016.svg/400px-Starz_2016.svg.png", background: "#000" },
    Channel { name: "Discovery+", logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/3/34/Discovery%2B_logo.svg/400px-Discovery%2B_logo.svg.png", background: "#0d47a1" },
    Channel { name: "Paramount+", logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4e/Paramount_Network_logo.svg/400px-Paramount_Network_logo.svg.png", background: "#003087" },
    Channel { name: "ESPN+", logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/2f/ESPN%2B_logo.svg/400px-ESPN%2B_logo.svg.png", background: "#cc0000" },
    Channel { name: "AMC+", logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6e/AMC_Networks_logo.svg/400px-AMC_Networks_logo.svg.png", background: "#111" },
    Channel { name: "Cinemax", logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5e/Cinemax_logo_2014.svg/400px-Cinemax_logo_2014.svg.png", background: "#1a1a1a" },
    Channel { name: "BritBox", logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/3/35/BritBox_logo.svg/400px-BritBox_logo.svg.png", background: "#003087" },
];

#[derive(Properties, PartialEq)]
struct ChannelCardProps {
    name: &'static str,
    logo: &'static str,
    background: &'static str,
}

#[function_component(ChannelCard)]
fn channel_card(props: &ChannelCardProps) -> Html {
    let logo_failed = use_state(|| false);

    let onerror = {
        let logo_failed = logo_failed.clone();
        Callback::from(move |_: Event| logo_failed.set(true))
    };

    html! {
        <div
            class="channel"
            style={format!(
                "width: 100%; max-width: 250px; aspect-ratio: 16/10; background: {}; border-radius: 8px; \
                 cursor: pointer; display: flex; align-items: center; justify-content: center; padding: 20px; \
                 overflow: hidden;",
                props.background
            )}
        >
            if *logo_failed {
                <span style="color: white; font-family: Lato; font-weight: bold; font-size: 18px;">{props.name}</span>
            } else {
                <img
                    src={props.logo}
                    alt={props.name}
                    style="max-width: 100%; max-height: 100%; object-fit: contain;"
                    onerror={onerror}
                />
            }
        </div>
    }
}

#[function_component(Channels)]
pub fn channels() -> Html {
    html! {
        <section id={Section::Channels.id()} style="padding: 80px 5vw 0;">
            <div>
                <h1 style="font-family: Lato; font-size: 40px; font-weight: 700;">
                    {"Your favorite channels all in one"}<br />{"place"}
                </h1>
                <p style="font-family: Lato; font-size: 20px; margin-top: 20px; max-width: 700px; line-height: 1.5;">
                    {"Customers can subscribe to get access to a variety of premium and specialty content, easily accessible within the Prime Video app"}
                </p>
            </div>
            <div style="margin-top: 60px; display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px;">
                { for CHANNELS.iter().map(|channel| html! {
                    <ChannelCard
                        key={channel.name}
                        name={channel.name}
                        logo={channel.logo}
                        background={channel.background}
                    />
                }) }
            </div>
        </section>
    }
}

#[function_component(Popcorn)]
pub fn popcorn(props: &SectionProps) -> Html {
    html! {
        <section
            id={Section::Popcorn.id()}
            style={format!(
                "margin-top: 50px; display: flex; padding: 60px 5vw; flex-wrap: wrap; gap: 40px; \
                 justify-content: space-between; background-color: {};",
                props.palette.dark_section_background
            )}
        >
            <div style="flex: 1 1 400px;">
                <img
                    src="https://images.unsplash.com/photo-1517604931442-7e0c8ed2963c?w=800&q=80"
                    alt="Prime Video Store"
                    style="width: 100%; border-radius: 8px;"
                />
            </div>
            <div style="flex: 1 1 400px; display: flex; flex-direction: column; justify-content: center;">
                <h2 style="font-family: Lato; font-size: 36px; font-weight: 700;">{"Introducing Prime Video Store"}</h2>
                <p style="font-family: Lato; font-size: 20px; margin-top: 20px; line-height: 1.5;">
                    {"Even more movies, now available to rent—no Prime membership required"}
                </p>
                <button
                    style="display: block; width: 280px; height: 54px; margin-top: 50px; background-color: #0F79AF; \
                           border: none; font-size: 20px; font-family: Lato; font-weight: 600; color: #E1E1E1; \
                           cursor: pointer; border-radius: 4px;"
                >
                    {"Rent movies"}
                </button>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer(props: &SectionProps) -> Html {
    html! {
        <footer style={format!("text-align: center; background-color: {}; width: 100%; padding: 30px 5vw;", props.palette.footer_background)}>
            <div onclick={scroll_callback(Section::Main)} style="cursor: pointer; display: inline-block;">
                <FooterLogo />
            </div>
            <p style="font-family: Lato; font-size: 14px; margin-top: 15px;">
                {"Terms and Privacy Notice \u{2003} Send us feedback \u{2003} Help"}
                <br /><br />
                <span style="font-size: 12px; color: #888;">{"©1996-2022, Amazon.com, Inc. or its affiliates"}</span>
            </p>
        </footer>
    }
}
