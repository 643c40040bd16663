use std::fmt;

/// `localStorage` key holding the theme flag.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Class toggled on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parses a stored flag. Anything other than the two known values counts
    /// as "no preference stored".
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// The value written under [`THEME_STORAGE_KEY`]. Both themes are stored
    /// explicitly, so choosing light overrides a dark system preference on the
    /// next visit. An absent or unknown value means "follow the system".
    pub fn flag(self) -> &'static str {
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

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// A stored flag always wins; the platform `prefers-color-scheme` signal is
/// only consulted when nothing usable is stored.
pub fn resolve_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::from_flag) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_stored_flag_wins() {
        assert_eq!(resolve_theme(Some("dark"), false), Theme::Dark);
        assert_eq!(resolve_theme(Some("light"), true), Theme::Light);
    }

    #[test]
    fn test_falls_back_to_platform() {
        assert_eq!(resolve_theme(None, true), Theme::Dark);
        assert_eq!(resolve_theme(None, false), Theme::Light);
        // empty string is what an unset storage signal reads as
        assert_eq!(resolve_theme(Some(""), true), Theme::Dark);
        assert_eq!(resolve_theme(Some("solarized"), false), Theme::Light);
    }

    #[test]
    fn test_flag_survives_reload() {
        let mut storage = HashMap::new();

        // first visit, platform prefers light, user toggles to dark
        let first = resolve_theme(storage.get(THEME_STORAGE_KEY).map(String::as_str), false);
        assert_eq!(first, Theme::Light);
        storage.insert(THEME_STORAGE_KEY, first.toggled().flag().to_string());

        // reload: platform preference no longer matters
        for prefers_dark in [false, true] {
            let reloaded =
                resolve_theme(storage.get(THEME_STORAGE_KEY).map(String::as_str), prefers_dark);
            assert_eq!(reloaded, Theme::Dark);
        }
    }

    #[test]
    fn test_light_is_stored_explicitly() {
        let flag = Theme::Dark.toggled().flag();
        assert_eq!(flag, "light");
        // an explicit light choice beats a dark platform preference
        assert_eq!(resolve_theme(Some(flag), true), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert!(Theme::Dark.is_dark());
        assert_eq!(Theme::from_flag(Theme::Dark.flag()), Some(Theme::Dark));
    }
}
