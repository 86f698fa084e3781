use yew::prelude::*;

use crate::state::menu::HoverPart;

const TOP_CATEGORIES: [&str; 6] = [
    "Included with Prime",
    "Amazon Originals and Exclusives",
    "Movies",
    "TV",
    "Kids",
    "Sports",
];
const GENRES_LEFT: [&str; 7] = [
    "Action and adventure",
    "Comedy",
    "Drama",
    "Documentary",
    "Kids and family",
    "Fantasy",
    "Horror",
];
const GENRES_RIGHT: [&str; 6] = [
    "Romance",
    "Science fiction",
    "Suspense",
    "Anime",
    "Military and war",
    "Crime",
];
const OTHER_CATEGORIES: [&str; 5] = [
    "Recently added movies",
    "Recently added TV",
    "Award winners",
    "Watch Party",
    "Only for a limited time on Prime",
];

const LANGUAGE_COLUMNS: [[&str; 10]; 3] = [
    [
        "Bahasa Indonesia", "Bahasa Melayu", "Deutsch", "English", "Español",
        "Français", "Italiano", "Magyar", "Nederlands", "Norsk",
    ],
    [
        "Polski", "Português (Brasil)", "Português (Portugal)", "Română", "Suomi",
        "Svenska", "Türkçe", "Wikang Filipino", "Čeština", "Ελληνικά",
    ],
    [
        "עברית", "العربية", "हिन्दी", "தமிழ்", "తెలుగు",
        "ไทย", "日本語", "简体中文", "繁體中文", "한국어",
    ],
];
const CURRENT_LANGUAGE: &str = "English";

const ACCOUNT_ITEMS: [&str; 3] = ["Sign In", "Watch Anywhere", "Help"];

fn genre_list(title: Option<&'static str>, genres: &[&'static str]) -> Html {
    html! {
        <div>
            if let Some(title) = title {
                <div style="font-family: Lato; margin-bottom: 10px; color: #aaa;">{title}</div>
            }
            { for genres.iter().map(|genre| html! {
                <div key={*genre} class="genre-link">{*genre}</div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoriesPanelProps {
    pub node_ref: NodeRef,
    pub on_enter: Callback<HoverPart>,
    pub on_leave: Callback<HoverPart>,
}

#[function_component(CategoriesPanel)]
pub fn categories_panel(props: &CategoriesPanelProps) -> Html {
    html! {
        <div
            ref={props.node_ref.clone()}
            onmouseenter={props.on_enter.reform(|_: MouseEvent| HoverPart::Panel)}
            onmouseleave={props.on_leave.reform(|_: MouseEvent| HoverPart::Panel)}
            style="position: fixed; top: 80px; left: 50%; transform: translateX(-50%); width: 1100px; max-width: 95vw; \
                   padding: 30px; display: grid; grid-template-columns: auto 1fr auto; gap: 40px; align-items: start; \
                   background: linear-gradient(163deg, #122739 23%, #0c1c2a 48%); color: white; border-radius: 6px; \
                   box-shadow: 0 10px 30px rgba(0,0,0,0.6); z-index: 5;"
        >
            <style>
                {r#"
                    .category-tile {
                        width: 175px; height: 90px; background-color: #144e77; border-radius: 4px; cursor: pointer;
                        display: flex; align-items: center; justify-content: center; text-align: center;
                        font-family: Lato; font-size: 16px; font-weight: 600; padding: 0 20px;
                        transition: box-shadow 0.2s;
                    }
                    .category-tile:hover { box-shadow: 0 0 0 2px white; }
                    .genre-link { font-family: Lato; font-size: 16px; color: #63758a; padding-top: 15px; cursor: pointer; }
                    .genre-link:hover { color: white; }
                "#}
            </style>
            <h2 style="font-family: Lato; font-size: 18px; font-weight: 400; margin-bottom: 20px; grid-column: 1 / -1;">
                {"Top Categories"}
            </h2>
            <div style="display: grid; grid-template-columns: repeat(3, 175px); gap: 20px;">
                { for TOP_CATEGORIES.iter().map(|category| html! {
                    <div key={*category} class="category-tile">{*category}</div>
                }) }
            </div>
            <div style="width: 1px; background: white; align-self: stretch;" />
            <div style="display: flex; gap: 40px;">
                { genre_list(Some("Genres"), &GENRES_LEFT) }
                <div style="margin-top: 3.3%;">{ genre_list(None, &GENRES_RIGHT) }</div>
                { genre_list(Some("Other categories"), &OTHER_CATEGORIES) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PanelProps {
    pub node_ref: NodeRef,
}

#[function_component(LanguagesPanel)]
pub fn languages_panel(props: &PanelProps) -> Html {
    html! {
        <div
            ref={props.node_ref.clone()}
            style="position: fixed; top: 80px; right: 40px; width: 480px; max-width: 90vw; max-height: 70vh; \
                   overflow-y: auto; display: grid; grid-template-columns: repeat(3, 1fr); background-color: #27323d; \
                   border-radius: 6px; box-shadow: 0 10px 30px rgba(0,0,0,0.6); z-index: 6;"
        >
            <style>
                {".menu-item:hover { background-color: #64778a; }"}
            </style>
            { for LANGUAGE_COLUMNS.iter().enumerate().map(|(index, column)| {
                let border = if index + 1 < LANGUAGE_COLUMNS.len() { "1px solid rgba(255,255,255,0.1)" } else { "none" };
                html! {
                    <div key={index} style={format!("border-right: {};", border)}>
                        { for column.iter().map(|language| {
                            let current = *language == CURRENT_LANGUAGE;
                            html! {
                                <div
                                    key={*language}
                                    class="menu-item"
                                    style={format!(
                                        "font-family: Lato; font-size: 16px; color: {}; padding: 12px 16px; cursor: pointer;",
                                        if current { "white" } else { "#c4cacf" }
                                    )}
                                >
                                    { if current { "✓ " } else { "" } }{*language}
                                </div>
                            }
                        }) }
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(AccountPanel)]
pub fn account_panel(props: &PanelProps) -> Html {
    html! {
        <div
            ref={props.node_ref.clone()}
            style="position: fixed; top: 80px; right: 40px; width: 200px; background-color: #27323d; \
                   box-shadow: 0 0 0.5em black; z-index: 4; border-radius: 4px;"
        >
            <style>
                {".menu-item:hover { background-color: #64778a; }"}
            </style>
            { for ACCOUNT_ITEMS.iter().map(|item| html! {
                <div
                    key={*item}
                    class="menu-item"
                    style="font-family: Lato; font-size: 14px; color: rgba(242,244,246,0.9); padding: 14px 22px; \
                           border-bottom: 1px solid #434f5d; cursor: pointer;"
                >
                    {*item}
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BackdropProps {
    pub on_click: Callback<()>,
}

/// Dims the page behind the language and account panels.
#[function_component(Backdrop)]
pub fn backdrop(props: &BackdropProps) -> Html {
    html! {
        <div
            onclick={props.on_click.reform(|_: MouseEvent| ())}
            style="position: fixed; top: 0; left: 0; width: 100%; height: 100vh; background: rgba(0,0,0,0.5); z-index: 3;"
        />
    }
}
