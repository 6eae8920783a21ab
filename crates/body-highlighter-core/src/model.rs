use crate::{Error, Result, Slug};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(Error::unknown("side", other)),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(Error::unknown("gender", other)),
        }
    }
}

/// Which face of the silhouette is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Front,
    Back,
}

impl View {
    pub const fn as_str(self) -> &'static str {
        match self {
            View::Front => "front",
            View::Back => "back",
        }
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "front" => Ok(View::Front),
            "back" => Ok(View::Back),
            other => Err(Error::unknown("view", other)),
        }
    }
}

/// 1-based selection level indexing into a caller palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Intensity(NonZeroU32);

impl Intensity {
    pub const ONE: Intensity = Intensity(NonZeroU32::MIN);

    /// Returns `None` for zero, which callers treat as "no intensity".
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for Intensity {
    type Error = String;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        Intensity::new(value).ok_or_else(|| "intensity must be >= 1".to_string())
    }
}

impl From<Intensity> for u32 {
    fn from(value: Intensity) -> Self {
        value.get()
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Fill used for a region when it is not selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BaseColor {
    Body,
    Face,
    Hair,
    Fixed(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathGroupKind {
    Common,
    Left,
    Right,
}

impl PathGroupKind {
    pub const ALL: [PathGroupKind; 3] = [
        PathGroupKind::Common,
        PathGroupKind::Left,
        PathGroupKind::Right,
    ];

    pub const fn side(self) -> Option<Side> {
        match self {
            PathGroupKind::Common => None,
            PathGroupKind::Left => Some(Side::Left),
            PathGroupKind::Right => Some(Side::Right),
        }
    }
}

impl From<Side> for PathGroupKind {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => PathGroupKind::Left,
            Side::Right => PathGroupKind::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PathGroups {
    pub common: &'static [&'static str],
    pub left: &'static [&'static str],
    pub right: &'static [&'static str],
}

impl PathGroups {
    pub fn group(&self, kind: PathGroupKind) -> &'static [&'static str] {
        match kind {
            PathGroupKind::Common => self.common,
            PathGroupKind::Left => self.left,
            PathGroupKind::Right => self.right,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.common.is_empty() && self.left.is_empty() && self.right.is_empty()
    }

    pub fn is_bilateral(&self) -> bool {
        !self.left.is_empty() || !self.right.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BodyPartDescriptor {
    pub slug: Slug,
    pub base: BaseColor,
    pub path: PathGroups,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// One (gender, view) variant of the anatomical path data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub gender: Gender,
    pub view: View,
    pub view_box: ViewBox,
    pub parts: &'static [BodyPartDescriptor],
}

impl Dataset {
    pub fn find(&self, slug: Slug) -> Option<&'static BodyPartDescriptor> {
        self.parts.iter().find(|p| p.slug == slug)
    }

    pub fn slugs(&self) -> impl Iterator<Item = Slug> + '_ {
        self.parts.iter().map(|p| p.slug)
    }
}
