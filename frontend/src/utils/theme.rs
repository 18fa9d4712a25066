use std::fmt;
use std::str::FromStr;

use super::storage::PreferenceStore;
use crate::config::THEME_KEY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Font Awesome class for the toggle icon: the icon shows the theme
    /// you would switch to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq)]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Theme saved by a previous visit, or light.
pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    match store.get(THEME_KEY).map(|raw| raw.parse::<Theme>()) {
        Some(Ok(theme)) => theme,
        Some(Err(UnknownTheme(raw))) => {
            log::warn!("Ignoring unknown stored theme {:?}", raw);
            Theme::default()
        }
        None => Theme::default(),
    }
}

/// Flips the theme currently on the document and persists the result.
/// `current` is whatever the root attribute holds; anything other than
/// "dark" counts as light.
pub fn toggle_theme(current: Option<&str>, store: &impl PreferenceStore) -> Theme {
    let current: Theme = current.and_then(|raw| raw.parse().ok()).unwrap_or_default();
    let next = current.toggled();
    store.set(THEME_KEY, next.as_str());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::memory::MemoryStore;

    #[test]
    fn defaults_to_light_when_nothing_saved() {
        assert_eq!(load_theme(&MemoryStore::default()), Theme::Light);
    }

    #[test]
    fn loads_saved_dark() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "dark");
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn garbage_in_storage_falls_back_to_light() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "sepia");
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn toggling_twice_restores_document_and_storage() {
        let store = MemoryStore::default();
        let mut attribute = Theme::Light.as_str().to_string();

        let first = toggle_theme(Some(attribute.as_str()), &store);
        attribute = first.as_str().to_string();
        assert_eq!(attribute, "dark");
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        let second = toggle_theme(Some(attribute.as_str()), &store);
        attribute = second.as_str().to_string();
        assert_eq!(attribute, "light");
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn missing_attribute_toggles_to_dark() {
        assert_eq!(toggle_theme(None, &MemoryStore::default()), Theme::Dark);
    }

    #[test]
    fn icon_tracks_theme() {
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
    }
}
