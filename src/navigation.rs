use log::debug;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::Callback;

use crate::config;

/// In-page anchors. Other pages may deep-link to these ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Main,
    Channels,
    Popcorn,
    Contact,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Main => config::SECTION_MAIN,
            Section::Channels => config::SECTION_CHANNELS,
            Section::Popcorn => config::SECTION_POPCORN,
            Section::Contact => config::SECTION_CONTACT,
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Smooth-scrolls the element with `id` to the top of the viewport.
/// Returns false when there is no such element.
pub fn scroll_to_section(id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    let Some(element) = element else {
        debug!("No section #{} to scroll to", id);
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Click handler for anchors: swallows the default jump and scrolls smoothly instead.
pub fn scroll_callback(section: Section) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(section.id());
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_stable() {
        assert_eq!(Section::Main.id(), "main");
        assert_eq!(Section::Channels.id(), "channels");
        assert_eq!(Section::Popcorn.id(), "popcorn");
        assert_eq!(Section::Contact.id(), "contact-section");
        assert_eq!(Section::Channels.href(), "#channels");
    }
}
