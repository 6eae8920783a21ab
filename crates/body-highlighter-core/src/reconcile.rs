//! Selection reconciliation: merges a sparse selection with a dataset variant and resolves the
//! fill of every path.

use crate::route::ClickTarget;
use crate::{
    BodyPartDescriptor, Dataset, Intensity, Palette, PaletteIndexing, PathGroupKind, Selection,
    SelectionEntry, Side, Slug, Theme,
};
use rustc_hash::FxHashSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    pub theme: Theme,
    pub indexing: PaletteIndexing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupFills {
    pub common: String,
    pub left: String,
    pub right: String,
}

impl GroupFills {
    fn uniform(color: &str) -> Self {
        Self {
            common: color.to_string(),
            left: color.to_string(),
            right: color.to_string(),
        }
    }

    pub fn get(&self, kind: PathGroupKind) -> &str {
        match kind {
            PathGroupKind::Common => &self.common,
            PathGroupKind::Left => &self.left,
            PathGroupKind::Right => &self.right,
        }
    }
}

/// A descriptor reconciled against the selection for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEntry {
    pub descriptor: BodyPartDescriptor,
    /// `false` for backdrop shapes (no selection entry for the slug).
    pub selected: bool,
    /// Whole-entry color: the palette color for selected entries, the base color otherwise.
    pub color: String,
    pub fills: GroupFills,
}

impl RenderEntry {
    pub fn slug(&self) -> Slug {
        self.descriptor.slug
    }
}

/// One drawable path with its resolved fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPath {
    pub slug: Slug,
    pub group: PathGroupKind,
    pub d: &'static str,
    pub fill: String,
    pub selected: bool,
}

impl RenderPath {
    pub fn click_target(&self) -> ClickTarget {
        ClickTarget {
            slug: self.slug,
            side: self.group.side(),
        }
    }
}

/// Reconciles `selection` against `dataset`.
///
/// The result holds every descriptor without a selection entry (backdrop, dataset order),
/// followed by one entry per selection entry whose slug exists in the dataset (selection
/// order). Entries for slugs missing from the dataset are dropped.
pub fn reconcile(
    dataset: &Dataset,
    selection: &Selection,
    palette: &Palette,
    options: ReconcileOptions,
) -> Vec<RenderEntry> {
    let selected_slugs: FxHashSet<Slug> = selection.iter().map(|e| e.slug).collect();

    let mut out: Vec<RenderEntry> = dataset
        .parts
        .iter()
        .filter(|part| !selected_slugs.contains(&part.slug))
        .map(|part| backdrop_entry(part, options.theme))
        .collect();

    for entry in selection {
        let Some(part) = dataset.find(entry.slug) else {
            tracing::debug!(
                slug = %entry.slug,
                gender = dataset.gender.as_str(),
                view = dataset.view.as_str(),
                "selection entry has no path data in this view"
            );
            continue;
        };
        // `selection` contains `entry`, so a first entry always exists.
        let first = selection.first_for(entry.slug).unwrap_or(entry);
        out.push(selected_entry(part, entry, first, palette, options));
    }

    out
}

/// Flattens reconciled entries into drawable paths: common, then left, then right per entry.
pub fn render_paths(entries: &[RenderEntry]) -> Vec<RenderPath> {
    let mut out = Vec::new();
    for entry in entries {
        for kind in PathGroupKind::ALL {
            let fill = entry.fills.get(kind);
            for &d in entry.descriptor.path.group(kind) {
                out.push(RenderPath {
                    slug: entry.slug(),
                    group: kind,
                    d,
                    fill: fill.to_string(),
                    selected: entry.selected,
                });
            }
        }
    }
    out
}

/// [`reconcile`] followed by [`render_paths`].
pub fn resolve_paths(
    dataset: &Dataset,
    selection: &Selection,
    palette: &Palette,
    options: ReconcileOptions,
) -> Vec<RenderPath> {
    render_paths(&reconcile(dataset, selection, palette, options))
}

fn backdrop_entry(part: &BodyPartDescriptor, theme: Theme) -> RenderEntry {
    let color = theme.resolve(part.base);
    RenderEntry {
        descriptor: *part,
        selected: false,
        color: color.to_string(),
        fills: GroupFills::uniform(color),
    }
}

fn selected_entry(
    part: &BodyPartDescriptor,
    own: &SelectionEntry,
    first: &SelectionEntry,
    palette: &Palette,
    options: ReconcileOptions,
) -> RenderEntry {
    let color = palette.color(first.intensity.unwrap_or(Intensity::ONE));

    let side_fill = |side: Side| -> String {
        if first.coverage.masks(side) {
            return options.theme.default_color().to_string();
        }
        if let Some(intensity) = own.side_intensity.get(side) {
            return palette.color(intensity).to_string();
        }
        match first.intensity {
            Some(intensity) => palette
                .bilateral_color(intensity, options.indexing)
                .to_string(),
            None => color.to_string(),
        }
    };

    RenderEntry {
        descriptor: *part,
        selected: true,
        color: color.to_string(),
        fills: GroupFills {
            common: color.to_string(),
            left: side_fill(Side::Left),
            right: side_fill(Side::Right),
        },
    }
}
