use log::{debug, info, warn};
use web_sys::Storage;

use crate::config;
use crate::error::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    /// Emoji shown on the toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: "#ffffff",
                nav_background: "#ffffff",
                text: "#111",
                section_background: "#f5f5f5",
                dark_section_background: "#e8e8e8",
                input_background: "#fff",
                input_border: "#ccc",
                input_text: "#111",
                alert_background: "#fff",
                alert_text: "#000",
                footer_background: "#eaeaea",
                rule: "#555",
            },
            Theme::Dark => Palette {
                background: "#000000",
                nav_background: "#000000",
                text: "#E1E1E1",
                section_background: "#000",
                dark_section_background: "#0D0D0D",
                input_background: "#1a1a1a",
                input_border: "#333",
                input_text: "#fff",
                alert_background: "#1a1a1a",
                alert_text: "#fff",
                footer_background: "#131414",
                rule: "#fff",
            },
        }
    }
}

/// Theme-dependent colours handed down to the page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub nav_background: &'static str,
    pub text: &'static str,
    pub section_background: &'static str,
    pub dark_section_background: &'static str,
    pub input_background: &'static str,
    pub input_border: &'static str,
    pub input_text: &'static str,
    pub alert_background: &'static str,
    pub alert_text: &'static str,
    pub footer_background: &'static str,
    pub rule: &'static str,
}

/// The single persisted slot holding the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&mut self, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` backed store.
#[derive(Debug, Default)]
pub struct LocalThemeStore;

fn local_storage() -> Result<Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::NoWindow)?;
    window
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(config::THEME_STORAGE_KEY)
            .map_err(|_| StorageError::Read {
                key: config::THEME_STORAGE_KEY.to_string(),
            })
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(config::THEME_STORAGE_KEY, value)
            .map_err(|_| StorageError::Write {
                key: config::THEME_STORAGE_KEY.to_string(),
            })
    }
}

pub fn get_initial_theme(store: &impl ThemeStore) -> Theme {
    match store.load() {
        Ok(Some(value)) => Theme::from_stored(&value).unwrap_or_else(|| {
            debug!("Ignoring unknown stored theme {:?}", value);
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            warn!("Could not read theme preference: {}", e);
            Theme::default()
        }
    }
}

pub struct ThemeController<S: ThemeStore> {
    theme: Theme,
    store: S,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        let theme = get_initial_theme(&store);
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and writes it through to the store before returning.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.save(self.theme.as_str()) {
            warn!("Could not persist theme preference: {}", e);
        }
        info!("Theme switched to {}", self.theme.as_str());
        self.theme
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryThemeStore {
        value: Option<String>,
        broken: bool,
        writes: usize,
    }

    impl ThemeStore for MemoryThemeStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            if self.broken {
                return Err(StorageError::Unavailable);
            }
            Ok(self.value.clone())
        }

        fn save(&mut self, value: &str) -> Result<(), StorageError> {
            if self.broken {
                return Err(StorageError::Write {
                    key: config::THEME_STORAGE_KEY.to_string(),
                });
            }
            self.writes += 1;
            self.value = Some(value.to_string());
            Ok(())
        }
    }

    fn store_with(value: &str) -> MemoryThemeStore {
        MemoryThemeStore {
            value: Some(value.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_to_dark_when_nothing_stored() {
        assert_eq!(get_initial_theme(&MemoryThemeStore::default()), Theme::Dark);
    }

    #[test]
    fn defaults_to_dark_on_garbage_or_broken_storage() {
        assert_eq!(get_initial_theme(&store_with("sepia")), Theme::Dark);
        assert_eq!(get_initial_theme(&store_with("")), Theme::Dark);

        let broken = MemoryThemeStore {
            broken: true,
            ..Default::default()
        };
        assert_eq!(get_initial_theme(&broken), Theme::Dark);
    }

    #[test]
    fn restores_stored_light_theme() {
        let controller = ThemeController::new(store_with("light"));
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn double_toggle_returns_to_start() {
        let mut controller = ThemeController::new(store_with("light"));
        controller.toggle_theme();
        controller.toggle_theme();
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn every_toggle_is_persisted() {
        let mut controller = ThemeController::new(MemoryThemeStore::default());
        for expected_writes in 1..=3 {
            let theme = controller.toggle_theme();
            assert_eq!(controller.store().value.as_deref(), Some(theme.as_str()));
            assert_eq!(controller.store().writes, expected_writes);
        }
    }

    #[test]
    fn toggle_still_flips_when_storage_fails() {
        let mut controller = ThemeController::new(MemoryThemeStore {
            broken: true,
            ..Default::default()
        });
        assert_eq!(controller.toggle_theme(), Theme::Light);
        assert_eq!(controller.store().value, None);
    }

    #[test]
    fn palettes_follow_theme() {
        assert_eq!(Theme::Dark.palette().background, "#000000");
        assert_eq!(Theme::Light.palette().background, "#ffffff");
        assert_eq!(Theme::Light.icon(), "☀️");
        assert_eq!(Theme::Dark.class_name(), "dark-theme");
    }
}
