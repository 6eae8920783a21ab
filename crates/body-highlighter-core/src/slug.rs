//! Anatomical region identifiers.
//!
//! A slug names one region and stays the same across all four dataset variants; a region that
//! is not visible from a given view (e.g. `abs` from the back) is simply absent from that
//! variant.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slug {
    Abs,
    Adductors,
    Ankles,
    Biceps,
    Calves,
    Chest,
    Deltoids,
    Feet,
    Forearm,
    Gluteal,
    Hamstring,
    Hands,
    Hair,
    Head,
    Knees,
    LowerBack,
    Neck,
    Obliques,
    Quadriceps,
    Tibialis,
    Trapezius,
    Triceps,
    UpperBack,
}

impl Slug {
    pub const ALL: [Slug; 23] = [
        Slug::Abs,
        Slug::Adductors,
        Slug::Ankles,
        Slug::Biceps,
        Slug::Calves,
        Slug::Chest,
        Slug::Deltoids,
        Slug::Feet,
        Slug::Forearm,
        Slug::Gluteal,
        Slug::Hamstring,
        Slug::Hands,
        Slug::Hair,
        Slug::Head,
        Slug::Knees,
        Slug::LowerBack,
        Slug::Neck,
        Slug::Obliques,
        Slug::Quadriceps,
        Slug::Tibialis,
        Slug::Trapezius,
        Slug::Triceps,
        Slug::UpperBack,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Slug::Abs => "abs",
            Slug::Adductors => "adductors",
            Slug::Ankles => "ankles",
            Slug::Biceps => "biceps",
            Slug::Calves => "calves",
            Slug::Chest => "chest",
            Slug::Deltoids => "deltoids",
            Slug::Feet => "feet",
            Slug::Forearm => "forearm",
            Slug::Gluteal => "gluteal",
            Slug::Hamstring => "hamstring",
            Slug::Hands => "hands",
            Slug::Hair => "hair",
            Slug::Head => "head",
            Slug::Knees => "knees",
            Slug::LowerBack => "lower-back",
            Slug::Neck => "neck",
            Slug::Obliques => "obliques",
            Slug::Quadriceps => "quadriceps",
            Slug::Tibialis => "tibialis",
            Slug::Trapezius => "trapezius",
            Slug::Triceps => "triceps",
            Slug::UpperBack => "upper-back",
        }
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Slug::ALL
            .into_iter()
            .find(|slug| slug.as_str() == s)
            .ok_or_else(|| Error::unknown("slug", s))
    }
}

impl Serialize for Slug {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
