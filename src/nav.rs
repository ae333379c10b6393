//! Navigation state: which dashboard section is showing.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section '{0}' (expected categories, products or about-data)")]
pub struct ParseSectionError(String);

/// The three dashboard sections. Any section can follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Categories,
    Products,
    AboutData,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Categories, Section::Products, Section::AboutData];

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Categories => "📂 Categories",
            Section::Products => "🛍 Products",
            Section::AboutData => "ℹ About Data",
        }
    }

    /// Page header.
    pub fn heading(self) -> &'static str {
        match self {
            Section::Categories => "📂 Main Categories",
            Section::Products => "🛍 Products",
            Section::AboutData => "ℹ About Data",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Section::Categories => "categories",
            Section::Products => "products",
            Section::AboutData => "about-data",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "categories" => Ok(Section::Categories),
            "products" => Ok(Section::Products),
            "about-data" | "about" => Ok(Section::AboutData),
            _ => Err(ParseSectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_categories() {
        assert_eq!(Section::default(), Section::Categories);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn parsing_is_lenient_about_case_and_separators() {
        assert_eq!("About_Data".parse::<Section>(), Ok(Section::AboutData));
        assert_eq!(" PRODUCTS ".parse::<Section>(), Ok(Section::Products));
        assert!("charts".parse::<Section>().is_err());
    }
}
