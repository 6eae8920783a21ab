#![forbid(unsafe_code)]

//! Headless SVG output for body-highlighter: turns a reconciled selection into a standalone
//! SVG document whose paths carry their click-target metadata (`data-slug`, `data-side`).

pub mod bounds;
pub mod model;
pub mod svg;

use crate::model::layout_body;
use crate::svg::{SvgRenderOptions, render_body_svg};
use body_highlighter_core::{ResolvedConfig, Selection, dataset};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] body_highlighter_core::Error),
    #[error("invalid render scale: {scale}")]
    InvalidScale { scale: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Lays out and renders `selection` with fully resolved settings.
pub fn render_selection_svg(selection: &Selection, config: &ResolvedConfig) -> Result<String> {
    let layout = layout_body(
        dataset(config.gender, config.view),
        selection,
        &config.palette,
        config.reconcile_options(),
    );
    render_body_svg(&layout, &SvgRenderOptions::from_resolved(config))
}
