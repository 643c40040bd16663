use std::{fmt, str::FromStr};

use thiserror::Error;

/// Page regions in the order they are stacked on the page.
///
/// Both the `id` attribute of each `<section>` and every navigation link are
/// generated from this enum, so an anchor cannot be renamed without its links
/// following along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Playground,
    Blog,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
}

impl Section {
    pub const ALL: &'static [Section] = &[
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Playground,
        Section::Blog,
        Section::Contact,
    ];

    /// The DOM anchor id.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Playground => "playground",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }

    /// Navbar link text.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Playground => "Playground",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.id() == id)
            .ok_or_else(|| SectionError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_page_order() {
        let ids = Section::ALL.iter().map(|s| s.id()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["home", "about", "skills", "projects", "playground", "blog", "contact"]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let ids = Section::ALL.iter().map(|s| s.id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn test_parse_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(*section));
            assert_eq!(section.href().parse::<Section>(), Ok(*section));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "pricing".parse::<Section>(),
            Err(SectionError::UnknownSection("pricing".to_string()))
        );
        assert!("".parse::<Section>().is_err());
        // ids are case sensitive, same as DOM ids
        assert!("About".parse::<Section>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Section::Playground.label(), "Playground");
        assert_eq!(Section::Home.to_string(), "home");
    }
}
