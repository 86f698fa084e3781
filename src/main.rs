use log::info;
use yew::prelude::*;

mod config;
mod error;
mod navigation;
mod state {
    pub mod contact;
    pub mod menu;
    pub mod theme;
}
mod components {
    pub mod contact;
    pub mod dropdowns;
    pub mod icons;
    pub mod navbar;
    pub mod sections;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    info!("Rendering landing page");
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
