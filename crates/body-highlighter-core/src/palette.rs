use crate::{Error, Intensity, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_COLORS: [&str; 2] = ["#0984e3", "#74b9ff"];

/// How bilateral paths without a side-specific override index the palette.
///
/// `Legacy` reproduces the widget this crate models, where the whole-entry fallback for
/// left/right paths reads `palette[intensity]` instead of `palette[intensity - 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaletteIndexing {
    #[default]
    OneBased,
    Legacy,
}

impl FromStr for PaletteIndexing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "oneBased" | "one-based" => Ok(Self::OneBased),
            "legacy" => Ok(Self::Legacy),
            other => Err(Error::unknown("palette indexing", other)),
        }
    }
}

/// Ordered, non-empty list of colors addressed by 1-based [`Intensity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette(Vec<String>);

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_COLORS.iter().map(|c| c.to_string()).collect())
    }
}

impl Palette {
    /// Builds a palette from colors ordered by intensity. Position `n` is intensity `n`, so a
    /// blank entry is an error rather than a gap.
    pub fn new<I, S>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors = colors
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                let c = c.into();
                match c.trim() {
                    "" => Err(Error::BlankColor { position: i + 1 }),
                    trimmed => Ok(trimmed.to_string()),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self(colors))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }

    /// Color for a 1-based intensity. Indices past the end clamp to the last color.
    pub fn color(&self, intensity: Intensity) -> &str {
        self.at_index(intensity.get() as usize - 1)
    }

    /// Color for the whole-entry fallback on a left/right path.
    pub fn bilateral_color(&self, intensity: Intensity, indexing: PaletteIndexing) -> &str {
        match indexing {
            PaletteIndexing::OneBased => self.color(intensity),
            PaletteIndexing::Legacy => self.at_index(intensity.get() as usize),
        }
    }

    fn at_index(&self, index: usize) -> &str {
        let last = self.0.len().saturating_sub(1);
        if index > last {
            tracing::debug!(index, last, "palette index out of range; clamping");
        }
        self.0
            .get(index.min(last))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let colors = Vec::<String>::deserialize(deserializer)?;
        Palette::new(colors).map_err(serde::de::Error::custom)
    }
}
