use crate::model::BodyLayout;
use crate::{Error, Result};
use body_highlighter_core::{Border, PathGroupKind, RenderPath, ResolvedConfig, Slug, Theme};
use rustc_hash::FxHashMap;
use ryu_js::Buffer;
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Root `id`; also prefixes every path id. Passed through [`sanitize_diagram_id`].
    pub diagram_id: Option<String>,
    /// Multiplier applied to the viewBox size for the root `width`/`height`.
    pub scale: f64,
    pub theme: Theme,
    pub border: Border,
    /// Crop the viewBox to the path hull instead of the dataset's native viewBox.
    pub fit_to_content: bool,
    /// Extra space around the cropped viewBox. Ignored unless `fit_to_content` is set.
    pub viewbox_padding: f64,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            diagram_id: None,
            scale: 1.0,
            theme: Theme::default(),
            border: Border::default(),
            fit_to_content: false,
            viewbox_padding: 4.0,
        }
    }
}

impl SvgRenderOptions {
    pub fn from_resolved(config: &ResolvedConfig) -> Self {
        Self {
            diagram_id: config.id.clone(),
            scale: config.scale,
            theme: config.theme,
            border: config.border.clone(),
            fit_to_content: config.fit_to_content,
            ..Default::default()
        }
    }
}

/// Root id used when none is configured.
pub const DEFAULT_DIAGRAM_ID: &str = "body-highlighter";

/// Turns a caller-supplied diagram id into a token that is valid both as an XML `id` and as a
/// bare CSS `#id` selector.
///
/// Only ASCII letters, digits, `-` and `_` survive; every other run of characters becomes a
/// single `-`. Ids that would not start with a letter get a `body-` prefix, and ids with nothing
/// left fall back to [`DEFAULT_DIAGRAM_ID`].
pub fn sanitize_diagram_id(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 5);
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    let out = out.trim_matches('-');
    match out.chars().next() {
        None => DEFAULT_DIAGRAM_ID.to_string(),
        Some(c) if c.is_ascii_alphabetic() => out.to_string(),
        Some(_) => format!("body-{out}"),
    }
}

pub fn render_body_svg(layout: &BodyLayout, options: &SvgRenderOptions) -> Result<String> {
    if !(options.scale.is_finite() && options.scale > 0.0) {
        return Err(Error::InvalidScale {
            scale: options.scale,
        });
    }

    let diagram_id = sanitize_diagram_id(options.diagram_id.as_deref().unwrap_or_default());

    let (vb_x, vb_y, vb_w, vb_h) = match (options.fit_to_content, layout.content_bounds) {
        (true, Some(b)) => {
            let pad = options.viewbox_padding.max(0.0);
            (
                b.min_x - pad,
                b.min_y - pad,
                (b.width() + pad * 2.0).max(1.0),
                (b.height() + pad * 2.0).max(1.0),
            )
        }
        _ => (
            layout.view_box.min_x,
            layout.view_box.min_y,
            layout.view_box.width.max(1.0),
            layout.view_box.height.max(1.0),
        ),
    };

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{id}" xmlns="http://www.w3.org/2000/svg" viewBox="{x} {y} {w} {h}" width="{sw}" height="{sh}" role="img" aria-roledescription="body-highlighter" data-gender="{gender}" data-view="{view}">"#,
        id = diagram_id,
        x = fmt(vb_x),
        y = fmt(vb_y),
        w = fmt(vb_w),
        h = fmt(vb_h),
        sw = fmt(vb_w * options.scale),
        sh = fmt(vb_h * options.scale),
        gender = layout.gender.as_str(),
        view = layout.view.as_str(),
    );
    let _ = write!(
        &mut out,
        "<style>#{id} .body-part{{cursor:pointer;}}</style>",
        id = diagram_id
    );

    match options.border.color(options.theme) {
        Some(stroke) => {
            let _ = write!(
                &mut out,
                r#"<g class="body-parts" stroke="{stroke}" stroke-width="0.75" stroke-linejoin="round">"#,
                stroke = escape_xml(stroke)
            );
        }
        None => out.push_str(r#"<g class="body-parts">"#),
    }

    let mut seen: FxHashMap<(Slug, PathGroupKind), usize> = FxHashMap::default();
    for path in &layout.paths {
        let index = seen.entry((path.slug, path.group)).or_insert(0);
        render_path(&mut out, &diagram_id, path, *index);
        *index += 1;
    }

    out.push_str("</g></svg>");
    Ok(out)
}

fn render_path(out: &mut String, diagram_id: &str, path: &RenderPath, index: usize) {
    let side_attr = match path.group.side() {
        Some(side) => format!(r#" data-side="{}""#, side.as_str()),
        None => String::new(),
    };
    let _ = write!(
        out,
        r#"<path id="{id}-{slug}-{group}-{index}" class="body-part" data-slug="{slug}"{side} data-selected="{selected}" fill="{fill}" d="{d}"/>"#,
        id = diagram_id,
        slug = path.slug.as_str(),
        group = group_name(path),
        index = index,
        side = side_attr,
        selected = path.selected,
        fill = escape_xml(&path.fill),
        d = escape_xml(path.d),
    );
}

fn group_name(path: &RenderPath) -> &'static str {
    match path.group.side() {
        None => "common",
        Some(side) => side.as_str(),
    }
}

fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let v = (v * 1e6).round() / 1e6;
    let v = if v == -0.0 { 0.0 } else { v };
    let mut b = Buffer::new();
    b.format_finite(v).to_string()
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_matches_js_number_strings() {
        assert_eq!(fmt(200.0), "200");
        assert_eq!(fmt(1.5), "1.5");
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(f64::NAN), "0");
        assert_eq!(fmt(0.1 + 0.2), "0.3");
    }

    #[test]
    fn diagram_ids_become_css_safe_tokens() {
        assert_eq!(sanitize_diagram_id("  front view  "), "front-view");
        assert_eq!(sanitize_diagram_id("front<1>"), "front-1");
        assert_eq!(sanitize_diagram_id("a.b:c{}d"), "a-b-c-d");
        assert_eq!(sanitize_diagram_id("left_arm--2"), "left_arm-2");
        assert_eq!(sanitize_diagram_id("1st"), "body-1st");
        assert_eq!(sanitize_diagram_id("_x"), "body-_x");
        assert_eq!(sanitize_diagram_id(""), DEFAULT_DIAGRAM_ID);
        assert_eq!(sanitize_diagram_id("<>"), DEFAULT_DIAGRAM_ID);
    }

    #[test]
    fn escape_xml_escapes_attribute_breakers() {
        assert_eq!(escape_xml(r#"a"b<c>&'"#), "a&quot;b&lt;c&gt;&amp;&#39;");
    }
}
