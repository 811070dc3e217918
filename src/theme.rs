//! Theme Preference
//!
//! A two-valued display preference persisted independently of the
//! session. Applied as a `dark-theme` class on `<body>`; works with no
//! network and no authentication.

use crate::storage::{KeyValueStore, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only the exact stored value "dark" selects the dark theme;
    /// anything else (including absence) is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub fn load_theme(store: &impl KeyValueStore) -> Theme {
    Theme::from_stored(store.get(THEME_KEY).as_deref())
}

pub fn store_theme(store: &impl KeyValueStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

/// Sets or clears the `dark-theme` class on `<body>`.
pub fn apply_theme(theme: Theme) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let classes = body.class_list();
        let _ = match theme {
            Theme::Dark => classes.add_1("dark-theme"),
            Theme::Light => classes.remove_1("dark-theme"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_from_stored() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("blue")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn test_persists_across_reload() {
        let store = MemoryStore::default();
        store_theme(&store, Theme::Dark);

        // A fresh read sees the persisted preference
        assert_eq!(load_theme(&store), Theme::Dark);

        store_theme(&store, load_theme(&store).toggled());
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
