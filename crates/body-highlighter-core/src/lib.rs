#![forbid(unsafe_code)]

//! Body highlighter core: anatomical datasets, caller-owned selections, color reconciliation
//! and click routing (headless).
//!
//! The widget is stateless. A host keeps a [`Selection`], asks [`reconcile`] what to draw, and
//! feeds every click through [`route`] to get the next selection.
//!
//! ```
//! use body_highlighter_core::{
//!     ClickTarget, Intensity, Palette, ReconcileOptions, Selection, Side, Slug, dataset, reconcile,
//!     route,
//! };
//!
//! let data = dataset(Default::default(), Default::default());
//! let selection = route(
//!     &Selection::new(),
//!     ClickTarget::new(Slug::Biceps, Some(Side::Left)),
//!     Intensity::ONE,
//! );
//! let entries = reconcile(data, &selection, &Palette::default(), ReconcileOptions::default());
//! assert_eq!(entries.len(), data.parts.len());
//! ```

pub mod config;
pub mod error;
pub mod generated;
pub mod model;
pub mod palette;
pub mod reconcile;
pub mod route;
pub mod selection;
pub mod slug;
mod theme;

pub use config::{Border, ConfigKey, HighlighterConfig, ResolvedConfig};
pub use error::{Error, Result};
pub use generated::dataset;
pub use model::{
    BaseColor, BodyPartDescriptor, Dataset, Gender, Intensity, PathGroupKind, PathGroups, Side,
    View, ViewBox,
};
pub use palette::{Palette, PaletteIndexing};
pub use reconcile::{
    GroupFills, ReconcileOptions, RenderEntry, RenderPath, reconcile, render_paths, resolve_paths,
};
pub use route::{BodyPartClickHandler, ClickTarget, SlugState, Transition, dispatch_click, route};
pub use selection::{Coverage, Selection, SelectionEntry, SideIntensity, rebroadcast_intensity};
pub use slug::Slug;
pub use theme::Theme;

/// Bundles resolved settings with the active intensity used for new selections.
///
/// This is the demo-application loop in library form: it never stores the selection itself.
#[derive(Debug, Clone)]
pub struct Highlighter {
    config: ResolvedConfig,
    intensity: Intensity,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self {
            config: ResolvedConfig::default(),
            intensity: Intensity::ONE,
        }
    }
}

impl Highlighter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `overrides` on top of the site defaults.
    pub fn from_config(overrides: &HighlighterConfig) -> Result<Self> {
        let mut config = HighlighterConfig::site_defaults();
        config.merge(overrides.as_value());
        Ok(Self {
            config: config.resolve()?,
            intensity: Intensity::ONE,
        })
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.config.gender = gender;
        self
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.config.view = view;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.config.palette = palette;
        self
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn dataset(&self) -> &'static Dataset {
        dataset(self.config.gender, self.config.view)
    }

    pub fn reconcile(&self, selection: &Selection) -> Vec<RenderEntry> {
        reconcile(
            self.dataset(),
            selection,
            &self.config.palette,
            self.config.reconcile_options(),
        )
    }

    pub fn paths(&self, selection: &Selection) -> Vec<RenderPath> {
        render_paths(&self.reconcile(selection))
    }

    /// Routes a click at the active intensity.
    ///
    /// Clicks on regions the active view does not draw leave `selection` unchanged.
    pub fn click(&self, selection: &Selection, target: ClickTarget) -> Selection {
        match target.resolve(self.dataset()) {
            Some(target) => route(selection, target, self.intensity),
            None => {
                tracing::debug!(
                    slug = %target.slug,
                    gender = self.config.gender.as_str(),
                    view = self.config.view.as_str(),
                    "ignoring click on a region this view does not draw"
                );
                selection.clone()
            }
        }
    }

    /// Changes the active intensity and applies it to every entry of `selection`.
    pub fn set_intensity(&mut self, selection: &Selection, intensity: Intensity) -> Selection {
        self.intensity = intensity;
        rebroadcast_intensity(selection, intensity)
    }
}

#[cfg(test)]
mod tests;
