//! Caller-owned selection state.
//!
//! The JSON shape is the one web hosts of the widget already store:
//! `{ "slug": "biceps", "intensity": 2, "side": "left", "leftSideIntensity": 3 }`, with every
//! field except `slug` optional.

use crate::{Error, Intensity, Result, Side, Slug};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::Deref;

/// Which bilateral halves an entry covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Coverage {
    /// Both sides, or a region without left/right distinction.
    #[default]
    Both,
    Only(Side),
}

impl Coverage {
    pub const fn side(self) -> Option<Side> {
        match self {
            Coverage::Both => None,
            Coverage::Only(side) => Some(side),
        }
    }

    /// Whether the half drawn for `side` is masked out by a single-sided selection.
    pub fn masks(self, side: Side) -> bool {
        matches!(self, Coverage::Only(only) if only != side)
    }
}

/// Per-side intensity overrides, independent of each other and of the entry intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SideIntensity {
    pub left: Option<Intensity>,
    pub right: Option<Intensity>,
}

impl SideIntensity {
    pub fn get(&self, side: Side) -> Option<Intensity> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set(&mut self, side: Side, intensity: Option<Intensity>) {
        match side {
            Side::Left => self.left = intensity,
            Side::Right => self.right = intensity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "RawSelectionEntry", try_from = "RawSelectionEntry")]
pub struct SelectionEntry {
    pub slug: Slug,
    pub intensity: Option<Intensity>,
    pub coverage: Coverage,
    pub side_intensity: SideIntensity,
}

impl SelectionEntry {
    pub fn new(slug: Slug) -> Self {
        Self {
            slug,
            intensity: None,
            coverage: Coverage::Both,
            side_intensity: SideIntensity::default(),
        }
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn only(mut self, side: Side) -> Self {
        self.coverage = Coverage::Only(side);
        self
    }

    pub fn with_side_intensity(mut self, side: Side, intensity: Intensity) -> Self {
        self.side_intensity.set(side, Some(intensity));
        self
    }

    pub fn side(&self) -> Option<Side> {
        self.coverage.side()
    }
}

/// Wire shape of an entry. Everything but `slug` is read as a raw JSON value so one bad
/// optional field degrades to "unset" instead of failing the whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSelectionEntry {
    #[serde(default)]
    slug: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    intensity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    side: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    left_side_intensity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    right_side_intensity: Option<Value>,
}

impl TryFrom<RawSelectionEntry> for SelectionEntry {
    type Error = Error;

    fn try_from(raw: RawSelectionEntry) -> Result<Self> {
        let slug = match &raw.slug {
            Value::String(slug) => slug.parse()?,
            other => return Err(Error::unknown("slug", &other.to_string())),
        };
        Ok(Self {
            slug,
            intensity: intensity_field(slug, "intensity", raw.intensity),
            coverage: side_field(slug, raw.side).map_or(Coverage::Both, Coverage::Only),
            side_intensity: SideIntensity {
                left: intensity_field(slug, "leftSideIntensity", raw.left_side_intensity),
                right: intensity_field(slug, "rightSideIntensity", raw.right_side_intensity),
            },
        })
    }
}

/// Reads a 1-based intensity. Zero and `null` are "unset", mirroring the falsy checks hosts
/// rely on; negative, fractional and non-numeric values are ignored.
fn intensity_field(slug: Slug, field: &'static str, value: Option<Value>) -> Option<Intensity> {
    let value = value?;
    let whole = match &value {
        Value::Null => return None,
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        }),
        _ => None,
    };
    if whole == Some(0) {
        return None;
    }
    let intensity = whole
        .and_then(|n| u32::try_from(n).ok())
        .and_then(Intensity::new);
    if intensity.is_none() {
        tracing::debug!(%slug, field, %value, "ignoring invalid intensity");
    }
    intensity
}

/// Reads `side`; anything but `"left"`/`"right"` leaves the entry covering both sides.
fn side_field(slug: Slug, value: Option<Value>) -> Option<Side> {
    let value = value?;
    let side = match &value {
        Value::Null => return None,
        Value::String(s) => s.parse::<Side>().ok(),
        _ => None,
    };
    if side.is_none() {
        tracing::debug!(%slug, %value, "ignoring invalid side; entry covers both sides");
    }
    side
}

impl From<SelectionEntry> for RawSelectionEntry {
    fn from(entry: SelectionEntry) -> Self {
        let intensity = |i: Option<Intensity>| i.map(|i| Value::from(i.get()));
        Self {
            slug: Value::from(entry.slug.as_str()),
            intensity: intensity(entry.intensity),
            side: entry.coverage.side().map(|s| Value::from(s.as_str())),
            left_side_intensity: intensity(entry.side_intensity.left),
            right_side_intensity: intensity(entry.side_intensity.right),
        }
    }
}

/// An ordered selection list.
///
/// Operations that change a selection return a new value and leave the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection(Vec<SelectionEntry>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.0
    }

    pub fn into_entries(self) -> Vec<SelectionEntry> {
        self.0
    }

    /// The first entry for `slug`. Later duplicates never influence coloring.
    pub fn first_for(&self, slug: Slug) -> Option<&SelectionEntry> {
        self.0.iter().find(|e| e.slug == slug)
    }

    pub fn contains(&self, slug: Slug) -> bool {
        self.first_for(slug).is_some()
    }

    /// Parses a JSON array of entries, dropping entries whose slug is unknown.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: Vec<Value> =
            serde_json::from_str(text).map_err(|e| Error::InvalidSelectionJson {
                message: e.to_string(),
            })?;
        Ok(Self::from_raw(raw))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidSelectionJson {
            message: e.to_string(),
        })
    }

    /// Keeps every entry that names a known slug; anything else is dropped.
    fn from_raw(raw: Vec<Value>) -> Self {
        let entries = raw
            .into_iter()
            .filter_map(|value| {
                let parsed = RawSelectionEntry::deserialize(value)
                    .map_err(|e| Error::InvalidSelectionJson {
                        message: e.to_string(),
                    })
                    .and_then(SelectionEntry::try_from);
                match parsed {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        tracing::debug!(%err, "dropping selection entry");
                        None
                    }
                }
            })
            .collect();
        Self(entries)
    }
}

impl Deref for Selection {
    type Target = [SelectionEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<SelectionEntry>> for Selection {
    fn from(entries: Vec<SelectionEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<SelectionEntry> for Selection {
    fn from_iter<T: IntoIterator<Item = SelectionEntry>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a SelectionEntry;
    type IntoIter = std::slice::Iter<'a, SelectionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = Vec::<Value>::deserialize(deserializer)?;
        Ok(Self::from_raw(raw))
    }
}

/// Sets every entry's intensity, leaving slugs and coverage untouched.
pub fn rebroadcast_intensity(selection: &Selection, intensity: Intensity) -> Selection {
    selection
        .iter()
        .map(|entry| SelectionEntry {
            intensity: Some(intensity),
            ..*entry
        })
        .collect()
}
