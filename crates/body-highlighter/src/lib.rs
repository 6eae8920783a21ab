#![forbid(unsafe_code)]

//! `body-highlighter` is a headless anatomical body highlighter in Rust.
//!
//! It reconciles a sparse selection of body parts against compiled-in male/female
//! front/back datasets, resolves per-path fills from an intensity palette, and routes path
//! clicks back into the next selection.
//!
//! # Features
//!
//! - `render`: enable SVG rendering (`body_highlighter::render`)
//! - `raster`: enable PNG/JPG output via pure-Rust SVG rasterization

pub use body_highlighter_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use body_highlighter_render::bounds::{Bounds, path_bounds};
    pub use body_highlighter_render::model::{BodyLayout, layout_body};
    pub use body_highlighter_render::svg::{
        DEFAULT_DIAGRAM_ID, SvgRenderOptions, sanitize_diagram_id,
    };

    #[cfg(feature = "raster")]
    pub mod raster;

    use body_highlighter_core::{HighlighterConfig, ResolvedConfig, Selection};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Config(#[from] body_highlighter_core::Error),
        #[error(transparent)]
        Render(#[from] body_highlighter_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Synchronous layout helper (executor-free).
    pub fn layout_selection_sync(selection: &Selection, config: &ResolvedConfig) -> BodyLayout {
        layout_body(
            body_highlighter_core::dataset(config.gender, config.view),
            selection,
            &config.palette,
            config.reconcile_options(),
        )
    }

    pub async fn layout_selection(selection: &Selection, config: &ResolvedConfig) -> BodyLayout {
        layout_selection_sync(selection, config)
    }

    pub fn render_layout_svg(
        layout: &BodyLayout,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        Ok(body_highlighter_render::svg::render_body_svg(layout, svg_options)?)
    }

    /// Synchronous SVG render helper (executor-free).
    pub fn render_svg_sync(selection: &Selection, config: &ResolvedConfig) -> Result<String> {
        let layout = layout_selection_sync(selection, config);
        render_layout_svg(&layout, &SvgRenderOptions::from_resolved(config))
    }

    pub async fn render_svg(selection: &Selection, config: &ResolvedConfig) -> Result<String> {
        render_svg_sync(selection, config)
    }

    /// Convenience wrapper that bundles resolved settings for repeated headless renders.
    ///
    /// It stays runtime-agnostic: all work is CPU-bound and does not perform I/O.
    #[derive(Debug, Clone, Default)]
    pub struct HeadlessRenderer {
        pub config: ResolvedConfig,
    }

    impl HeadlessRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        /// Deep-merges `overrides` onto the site defaults and resolves the result.
        pub fn from_config(overrides: &HighlighterConfig) -> Result<Self> {
            let mut merged = HighlighterConfig::site_defaults();
            merged.merge(overrides.as_value());
            Ok(Self {
                config: merged.resolve()?,
            })
        }

        pub fn layout_sync(&self, selection: &Selection) -> BodyLayout {
            layout_selection_sync(selection, &self.config)
        }

        pub fn render_svg_sync(&self, selection: &Selection) -> Result<String> {
            render_svg_sync(selection, &self.config)
        }

        pub fn render_svg_sync_with(
            &self,
            selection: &Selection,
            svg: &SvgRenderOptions,
        ) -> Result<String> {
            render_layout_svg(&self.layout_sync(selection), svg)
        }

        pub fn render_svg_sync_with_diagram_id(
            &self,
            selection: &Selection,
            diagram_id: &str,
        ) -> Result<String> {
            let mut svg = SvgRenderOptions::from_resolved(&self.config);
            svg.diagram_id = Some(diagram_id.to_string());
            self.render_svg_sync_with(selection, &svg)
        }

        #[cfg(feature = "raster")]
        pub fn render_png_sync(
            &self,
            selection: &Selection,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            raster::render_png_sync(selection, &self.config, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_jpeg_sync(
            &self,
            selection: &Selection,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            raster::render_jpeg_sync(selection, &self.config, raster)
        }
    }
}
