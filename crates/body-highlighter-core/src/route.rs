//! Click routing: maps a path click to the next selection list.
//!
//! Per slug, a click moves between "unselected", "both sides selected" and "one side selected":
//!
//! | current            | click without side | click on side `S`        |
//! |--------------------|--------------------|--------------------------|
//! | unselected         | add whole entry    | add entry for `S` only   |
//! | both sides         | remove             | keep only the other side |
//! | only the other side| remove             | select both sides        |
//! | only `S`           | remove             | remove                   |

use crate::{
    BodyPartDescriptor, Coverage, Dataset, Intensity, PathGroupKind, Result, Selection,
    SelectionEntry, Side, Slug,
};
use serde::{Deserialize, Serialize};

/// What a rendered path reports back when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClickTarget {
    pub slug: Slug,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

impl ClickTarget {
    pub fn new(slug: Slug, side: Option<Side>) -> Self {
        Self { slug, side }
    }

    /// Rebuilds a target from the `data-slug`/`data-side` attributes emitted on SVG paths.
    pub fn from_attributes(slug: &str, side: Option<&str>) -> Result<Self> {
        let side = match side.map(str::trim) {
            None | Some("") => None,
            Some(side) => Some(side.parse()?),
        };
        Ok(Self {
            slug: slug.parse()?,
            side,
        })
    }

    /// The descriptor this target belongs to in `dataset`, if the region is drawn there.
    pub fn descriptor<'d>(&self, dataset: &'d Dataset) -> Option<&'d BodyPartDescriptor> {
        dataset
            .parts
            .iter()
            .find(|p| p.slug == self.slug && !p.path.is_empty())
    }

    /// Checks the target against what `dataset` actually draws.
    ///
    /// `None` when the region is absent. A side is dropped when the region has no paths on that
    /// side, so a click on a common-only region always toggles the whole entry.
    pub fn resolve(self, dataset: &Dataset) -> Option<ClickTarget> {
        let part = self.descriptor(dataset)?;
        let side = self.side.filter(|&side| {
            let drawn = !part.path.group(PathGroupKind::from(side)).is_empty();
            if !drawn {
                tracing::debug!(slug = %self.slug, %side, "region has no paths on that side");
            }
            drawn
        });
        Some(ClickTarget { side, ..self })
    }
}

/// Host callback invoked once per path click.
pub trait BodyPartClickHandler {
    fn on_body_part_click(&mut self, part: &BodyPartDescriptor, side: Option<Side>);
}

impl<F> BodyPartClickHandler for F
where
    F: FnMut(&BodyPartDescriptor, Option<Side>),
{
    fn on_body_part_click(&mut self, part: &BodyPartDescriptor, side: Option<Side>) {
        self(part, side)
    }
}

/// Resolves `target` against `dataset` and forwards it to `handler`.
///
/// Returns `false` (and does not call the handler) when the region is not part of `dataset`.
/// The side handed to the handler is dropped when the region is not drawn on that side.
pub fn dispatch_click(
    dataset: &Dataset,
    target: ClickTarget,
    handler: &mut dyn BodyPartClickHandler,
) -> bool {
    let Some(part) = target.descriptor(dataset) else {
        tracing::debug!(slug = %target.slug, "click on a region outside the active dataset");
        return false;
    };
    let side = target.resolve(dataset).and_then(|t| t.side);
    handler.on_body_part_click(part, side);
    true
}

/// Selection state of one slug, as seen by a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugState {
    Unselected,
    Both,
    Only(Side),
}

impl SlugState {
    /// Classifies the entries for `target.slug`.
    ///
    /// When several entries share the slug, a single-sided entry on the opposite side wins over
    /// a both-sides entry, which wins over a same-side entry.
    pub fn classify(selection: &Selection, target: ClickTarget) -> Self {
        let mut both = false;
        let mut same = false;
        let mut any = false;
        for entry in selection.iter().filter(|e| e.slug == target.slug) {
            any = true;
            match (entry.coverage, target.side) {
                (Coverage::Only(side), Some(clicked)) if side != clicked => {
                    return SlugState::Only(side);
                }
                (Coverage::Only(_), Some(_)) => same = true,
                (Coverage::Both, _) => both = true,
                (Coverage::Only(_), None) => {}
            }
        }

        match (both, same, target.side) {
            (true, _, _) => SlugState::Both,
            (false, true, Some(clicked)) => SlugState::Only(clicked),
            _ if any => selection
                .first_for(target.slug)
                .and_then(SelectionEntry::side)
                .map_or(SlugState::Both, SlugState::Only),
            _ => SlugState::Unselected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Add(SelectionEntry),
    Remove(Slug),
    SetCoverage(Slug, Coverage),
}

/// Decides what a click does without applying it.
pub fn plan(selection: &Selection, target: ClickTarget, intensity: Intensity) -> Transition {
    let state = SlugState::classify(selection, target);
    match (state, target.side) {
        (SlugState::Unselected, None) => {
            Transition::Add(SelectionEntry::new(target.slug).with_intensity(intensity))
        }
        (SlugState::Unselected, Some(side)) => Transition::Add(
            SelectionEntry::new(target.slug)
                .only(side)
                .with_intensity(intensity),
        ),
        (_, None) => Transition::Remove(target.slug),
        (SlugState::Both, Some(side)) => {
            Transition::SetCoverage(target.slug, Coverage::Only(side.opposite()))
        }
        (SlugState::Only(selected), Some(side)) if selected != side => {
            Transition::SetCoverage(target.slug, Coverage::Both)
        }
        (SlugState::Only(_), Some(_)) => Transition::Remove(target.slug),
    }
}

/// Applies a transition, returning a new selection.
pub fn apply(selection: &Selection, transition: Transition) -> Selection {
    match transition {
        Transition::Add(entry) => selection
            .iter()
            .copied()
            .chain(std::iter::once(entry))
            .collect(),
        Transition::Remove(slug) => selection
            .iter()
            .filter(|e| e.slug != slug)
            .copied()
            .collect(),
        Transition::SetCoverage(slug, coverage) => selection
            .iter()
            .map(|e| {
                if e.slug == slug {
                    SelectionEntry { coverage, ..*e }
                } else {
                    *e
                }
            })
            .collect(),
    }
}

/// Computes the selection that follows a click on `target` at the given active intensity.
pub fn route(selection: &Selection, target: ClickTarget, intensity: Intensity) -> Selection {
    let transition = plan(selection, target, intensity);
    tracing::debug!(slug = %target.slug, side = ?target.side, ?transition, "routing click");
    apply(selection, transition)
}
