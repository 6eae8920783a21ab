use crate::{BaseColor, Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Color scheme for unselected regions and the wrapper border.
///
/// The host resolves this once per render; nothing in this crate samples the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Fill for unselected body regions, and for the masked half of a single-sided selection.
    pub const fn default_color(self) -> &'static str {
        match self {
            Theme::Light => "#3f3f3f",
            Theme::Dark => "#6a7282",
        }
    }

    pub const fn face_color(self) -> &'static str {
        match self {
            Theme::Light => "#6b7280",
            Theme::Dark => "#99a1af",
        }
    }

    pub const fn hair_color(self) -> &'static str {
        match self {
            Theme::Light => "#2a2627",
            Theme::Dark => "#525252",
        }
    }

    pub const fn border_color(self) -> &'static str {
        match self {
            Theme::Light => "#dfdfdf",
            Theme::Dark => "#99a1af",
        }
    }

    pub const fn resolve(self, base: BaseColor) -> &'static str {
        match base {
            BaseColor::Body => self.default_color(),
            BaseColor::Face => self.face_color(),
            BaseColor::Hair => self.hair_color(),
            BaseColor::Fixed(color) => color,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::unknown("theme", other)),
        }
    }
}
