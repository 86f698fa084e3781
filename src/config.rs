use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose state transitions while developing locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DOCUMENT_TITLE: &str = "Welcome to Prime Video";

/// How long the "Message Sent!" alert stays on screen.
pub const ALERT_DISMISS_MS: u32 = 4_000;

pub const SECTION_MAIN: &str = "main";
pub const SECTION_CHANNELS: &str = "channels";
pub const SECTION_POPCORN: &str = "popcorn";
pub const SECTION_CONTACT: &str = "contact-section";
