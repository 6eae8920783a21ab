use crate::bounds::{Bounds, paths_bounds};
use body_highlighter_core::{
    Dataset, Gender, Palette, ReconcileOptions, RenderPath, Selection, View, ViewBox,
    resolve_paths,
};
use serde::Serialize;

/// Resolved paths for one render pass, plus the geometry the wrapper needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyLayout {
    pub gender: Gender,
    pub view: View,
    /// Native viewBox of the dataset variant.
    pub view_box: ViewBox,
    /// Hull of all path data; `None` when no path could be parsed.
    pub content_bounds: Option<Bounds>,
    pub paths: Vec<RenderPath>,
}

impl BodyLayout {
    pub fn selected_paths(&self) -> impl Iterator<Item = &RenderPath> {
        self.paths.iter().filter(|p| p.selected)
    }
}

pub fn layout_body(
    dataset: &Dataset,
    selection: &Selection,
    palette: &Palette,
    options: ReconcileOptions,
) -> BodyLayout {
    let paths = resolve_paths(dataset, selection, palette, options);
    let content_bounds = paths_bounds(paths.iter().map(|p| p.d));
    BodyLayout {
        gender: dataset.gender,
        view: dataset.view,
        view_box: dataset.view_box,
        content_bounds,
        paths,
    }
}
