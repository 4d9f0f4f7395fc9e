//! Form color themes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Color theme chosen by the form author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Blue,
    Dark,
}

impl Theme {
    /// Lenient conversion for backend data: anything unrecognised renders
    /// with the default palette.
    pub fn from_wire(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    pub fn background_color(self) -> &'static str {
        match self {
            Theme::Default => "#ffffff",
            Theme::Blue => "#508C9B",
            Theme::Dark => "#171923",
        }
    }

    pub fn text_color(self) -> &'static str {
        match self {
            Theme::Default => "#000000",
            Theme::Blue => "black",
            Theme::Dark => "#ffffff",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Blue => "blue",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "" => Ok(Theme::Default),
            "blue" => Ok(Theme::Blue),
            "dark" => Ok(Theme::Dark),
            other => Err(DomainError::parse(format!("Unknown theme: {}", other))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
