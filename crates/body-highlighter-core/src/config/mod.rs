use crate::{Error, Gender, Palette, PaletteIndexing, ReconcileOptions, Result, Theme, View};
use serde_json::{Map, Value, json};
use std::fmt;
use std::str::FromStr;

/// Settings a config object may carry. Every key is top-level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Gender,
    View,
    Theme,
    Scale,
    Border,
    Colors,
    PaletteIndexing,
    FitToContent,
    Id,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 9] = [
        ConfigKey::Gender,
        ConfigKey::View,
        ConfigKey::Theme,
        ConfigKey::Scale,
        ConfigKey::Border,
        ConfigKey::Colors,
        ConfigKey::PaletteIndexing,
        ConfigKey::FitToContent,
        ConfigKey::Id,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ConfigKey::Gender => "gender",
            ConfigKey::View => "view",
            ConfigKey::Theme => "theme",
            ConfigKey::Scale => "scale",
            ConfigKey::Border => "border",
            ConfigKey::Colors => "colors",
            ConfigKey::PaletteIndexing => "paletteIndexing",
            ConfigKey::FitToContent => "fitToContent",
            ConfigKey::Id => "id",
        }
    }

    /// Parses `value` for this key into `resolved`. `null` restores the default.
    fn apply(self, value: &Value, resolved: &mut ResolvedConfig) -> Result<()> {
        if value.is_null() {
            let defaults = ResolvedConfig::default();
            match self {
                ConfigKey::Gender => resolved.gender = defaults.gender,
                ConfigKey::View => resolved.view = defaults.view,
                ConfigKey::Theme => resolved.theme = defaults.theme,
                ConfigKey::Scale => resolved.scale = defaults.scale,
                ConfigKey::Border => resolved.border = defaults.border,
                ConfigKey::Colors => resolved.palette = defaults.palette,
                ConfigKey::PaletteIndexing => resolved.indexing = defaults.indexing,
                ConfigKey::FitToContent => resolved.fit_to_content = defaults.fit_to_content,
                ConfigKey::Id => resolved.id = defaults.id,
            }
            return Ok(());
        }

        match self {
            ConfigKey::Gender => resolved.gender = self.parse_str(value)?,
            ConfigKey::View => resolved.view = self.parse_str(value)?,
            ConfigKey::Theme => resolved.theme = self.parse_str(value)?,
            ConfigKey::PaletteIndexing => resolved.indexing = self.parse_str(value)?,
            ConfigKey::Scale => {
                resolved.scale = value
                    .as_f64()
                    .filter(|s| s.is_finite() && *s > 0.0)
                    .ok_or_else(|| self.invalid("expected a positive number"))?;
            }
            ConfigKey::Border => {
                resolved.border = match self.as_text(value)?.trim() {
                    "" => Border::Theme,
                    "none" => Border::None,
                    color => Border::Color(color.to_string()),
                };
            }
            ConfigKey::Colors => {
                let colors = value
                    .as_array()
                    .and_then(|items| items.iter().map(Value::as_str).collect::<Option<Vec<_>>>())
                    .ok_or_else(|| self.invalid("expected an array of strings"))?;
                resolved.palette = Palette::new(colors)?;
            }
            ConfigKey::FitToContent => {
                resolved.fit_to_content =
                    value.as_bool().ok_or_else(|| self.invalid("expected a boolean"))?;
            }
            ConfigKey::Id => {
                let id = self.as_text(value)?.trim();
                resolved.id = (!id.is_empty()).then(|| id.to_string());
            }
        }
        Ok(())
    }

    fn as_text(self, value: &Value) -> Result<&str> {
        value.as_str().ok_or_else(|| self.invalid("expected a string"))
    }

    fn parse_str<T: FromStr<Err = Error>>(self, value: &Value) -> Result<T> {
        self.as_text(value)?.parse()
    }

    fn invalid(self, message: &str) -> Error {
        invalid(self.as_str(), message)
    }
}

impl FromStr for ConfigKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| invalid(s, "unknown config key"))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON-shaped configuration: a flat object keyed by [`ConfigKey`].
///
/// Hosts layer their overrides on top of [`HighlighterConfig::site_defaults`] with
/// [`HighlighterConfig::merge`], then call [`HighlighterConfig::resolve`] once per render.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlighterConfig(Value);

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self::site_defaults()
    }
}

impl HighlighterConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn site_defaults() -> Self {
        Self(json!({
            "gender": "male",
            "view": "front",
            "theme": "light",
            "scale": 1,
            "colors": crate::palette::DEFAULT_COLORS,
            "paletteIndexing": "oneBased",
            "fitToContent": false,
        }))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| invalid("<root>", &e.to_string()))?;
        if !value.is_object() {
            return Err(invalid("<root>", "expected a JSON object"));
        }
        Ok(Self(value))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn get(&self, key: ConfigKey) -> Option<&Value> {
        self.0.get(key.as_str()).filter(|v| !v.is_null())
    }

    /// Validates and stores one setting. `null` removes it so the default applies again.
    pub fn set_value(&mut self, key: &str, value: Value) -> Result<()> {
        let key: ConfigKey = key.parse()?;
        key.apply(&value, &mut ResolvedConfig::default())?;
        self.ensure_object();
        let Value::Object(map) = &mut self.0 else {
            return Ok(());
        };
        if value.is_null() {
            map.remove(key.as_str());
        } else {
            map.insert(key.as_str().to_string(), value);
        }
        Ok(())
    }

    /// Overlays every key of `overrides`. A `null` value removes the key.
    ///
    /// Values are checked later by [`HighlighterConfig::resolve`].
    pub fn merge(&mut self, overrides: &Value) {
        let Some(overrides) = overrides.as_object() else {
            tracing::debug!("ignoring non-object config overrides");
            return;
        };
        self.ensure_object();
        let Value::Object(map) = &mut self.0 else {
            return;
        };
        for (key, value) in overrides {
            if value.is_null() {
                map.remove(key);
            } else {
                map.insert(key.clone(), value.clone());
            }
        }
    }

    // Configs are objects; coerce anything else so writes never fail on a bad root.
    fn ensure_object(&mut self) {
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }
    }

    /// Resolves the typed settings. Missing keys fall back to site defaults; unknown keys and
    /// ill-typed values are errors naming their key.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let map = self
            .0
            .as_object()
            .ok_or_else(|| invalid("<root>", "expected a JSON object"))?;
        let mut resolved = ResolvedConfig::default();
        for (key, value) in map {
            key.parse::<ConfigKey>()?.apply(value, &mut resolved)?;
        }
        Ok(resolved)
    }
}

fn invalid(key: &str, message: &str) -> Error {
    Error::InvalidConfig {
        key: key.to_string(),
        message: message.to_string(),
    }
}

/// Outline drawn around the silhouette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Border {
    /// The theme's border color.
    #[default]
    Theme,
    None,
    Color(String),
}

impl Border {
    pub fn color(&self, theme: Theme) -> Option<&str> {
        match self {
            Border::Theme => Some(theme.border_color()),
            Border::None => None,
            Border::Color(c) => Some(c.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub gender: Gender,
    pub view: View,
    pub theme: Theme,
    pub palette: Palette,
    pub indexing: PaletteIndexing,
    pub scale: f64,
    pub border: Border,
    pub fit_to_content: bool,
    pub id: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            gender: Gender::default(),
            view: View::default(),
            theme: Theme::default(),
            palette: Palette::default(),
            indexing: PaletteIndexing::default(),
            scale: 1.0,
            border: Border::Theme,
            fit_to_content: false,
            id: None,
        }
    }
}

impl ResolvedConfig {
    pub fn reconcile_options(&self) -> ReconcileOptions {
        ReconcileOptions {
            theme: self.theme,
            indexing: self.indexing,
        }
    }
}
