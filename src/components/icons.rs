use yew::prelude::*;

#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <svg width="120" height="40" viewBox="0 0 120 40" fill="none" xmlns="http://www.w3.org/2000/svg">
            <text x="0" y="28" font-family="Lato" font-weight="700" font-size="22" fill="#00A8E1">{"prime"}</text>
            <text x="62" y="28" font-family="Lato" font-weight="300" font-size="16" fill="#ffffff">{"video"}</text>
        </svg>
    }
}

#[function_component(FooterLogo)]
pub fn footer_logo() -> Html {
    html! {
        <svg width="150" height="50" viewBox="0 0 150 50" fill="none" xmlns="http://www.w3.org/2000/svg">
            <text x="0" y="35" font-family="Lato" font-weight="700" font-size="28" fill="#00A8E1">{"prime"}</text>
            <text x="78" y="35" font-family="Lato" font-weight="300" font-size="20" fill="#aaa">{"video"}</text>
        </svg>
    }
}

#[function_component(SearchIcon)]
pub fn search_icon() -> Html {
    html! {
        <svg width="22" height="22" fill="none" stroke="#E1E1E1" stroke-width="2" viewBox="0 0 24 24" style="cursor: pointer;">
            <circle cx="11" cy="11" r="8" />
            <line x1="21" y1="21" x2="16.65" y2="16.65" />
        </svg>
    }
}

#[function_component(GlobeIcon)]
pub fn globe_icon() -> Html {
    html! {
        <svg width="18" height="18" fill="none" stroke="#E1E1E1" stroke-width="2" viewBox="0 0 24 24">
            <circle cx="12" cy="12" r="10" />
            <line x1="2" y1="12" x2="22" y2="12" />
            <path d="M12 2a15.3 15.3 0 010 20M12 2a15.3 15.3 0 000 20" />
        </svg>
    }
}

#[function_component(ArrowDown)]
pub fn arrow_down() -> Html {
    html! {
        <svg width="12" height="12" fill="none" stroke="currentColor" stroke-width="2.5" viewBox="0 0 24 24" style="margin-left: 5px; vertical-align: middle;">
            <polyline points="6 9 12 15 18 9" />
        </svg>
    }
}

#[function_component(AccountIcon)]
pub fn account_icon() -> Html {
    html! {
        <svg width="25" height="25" fill="none" stroke="#E1E1E1" stroke-width="1.5" viewBox="0 0 24 24">
            <circle cx="12" cy="8" r="4" />
            <path d="M4 20c0-4 3.6-7 8-7s8 3 8 7" />
        </svg>
    }
}
