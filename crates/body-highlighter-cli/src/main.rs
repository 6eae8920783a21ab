use body_highlighter::render::raster::{self, RasterError, RasterOptions};
use body_highlighter::render::{HeadlessError, HeadlessRenderer, layout_selection, render_svg};
use body_highlighter::{
    ClickTarget, Gender, Highlighter, HighlighterConfig, Intensity, Selection, Side, Slug, View,
    dataset, rebroadcast_intensity,
};
use futures::executor::block_on;
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Highlighter(body_highlighter::Error),
    Render(HeadlessError),
    Raster(RasterError),
    Json(serde_json::Error),
    NotInView { slug: Slug, gender: Gender, view: View },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Highlighter(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::NotInView { slug, gender, view } => write!(
                f,
                "`{slug}` is not drawn in the {} {} view",
                gender.as_str(),
                view.as_str()
            ),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<body_highlighter::Error> for CliError {
    fn from(value: body_highlighter::Error) -> Self {
        Self::Highlighter(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        Self::Render(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Layout,
    Click,
    Intensity,
    Slugs,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    positional: Vec<String>,
    config_path: Option<String>,
    /// Command-line overrides, applied on top of `--config`.
    overrides: Vec<(&'static str, Value)>,
    side: Option<Side>,
    intensity: Option<Intensity>,
    pretty: bool,
    render_format: RenderFormat,
    background: Option<String>,
    out: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlugsOut {
    gender: Gender,
    view: View,
    slugs: Vec<Slug>,
}

fn usage() -> &'static str {
    "body-highlighter-cli\n\
\n\
USAGE:\n\
  body-highlighter-cli [render] [OPTIONS] [--format svg|png|jpg] [--background <css-color>] [--out <path>] [<selection.json>|-]\n\
  body-highlighter-cli layout [OPTIONS] [--pretty] [<selection.json>|-]\n\
  body-highlighter-cli click <slug> [--side left|right] [--intensity <n>] [--pretty] [<selection.json>|-]\n\
  body-highlighter-cli intensity <n> [--pretty] [<selection.json>|-]\n\
  body-highlighter-cli slugs [--gender male|female] [--view front|back] [--pretty]\n\
\n\
OPTIONS:\n\
  --config <path>          JSON config merged onto the defaults\n\
  --gender male|female\n\
  --view front|back\n\
  --theme light|dark\n\
  --scale <n>              size multiplier for the root width/height\n\
  --border none|<color>\n\
  --colors <c1,c2,...>     intensity palette, lightest first\n\
  --legacy-indexing        bilateral parts read palette[intensity]\n\
  --fit                    crop the viewBox to the drawn paths\n\
  --id <diagram-id>\n\
\n\
NOTES:\n\
  - If the selection path is omitted or '-', the selection JSON is read from stdin.\n\
  - Empty input is an empty selection.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG/JPG output defaults to writing next to the input file (or ./out.png / ./out.jpg for stdin).\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    let mut saw_command = false;
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" | "layout" | "click" | "intensity" | "slugs" if !saw_command => {
                saw_command = true;
                args.command = match a.as_str() {
                    "layout" => Command::Layout,
                    "click" => Command::Click,
                    "intensity" => Command::Intensity,
                    "slugs" => Command::Slugs,
                    _ => Command::Render,
                };
            }
            "--pretty" => args.pretty = true,
            "--config" => args.config_path = Some(next_value(&mut it)?.clone()),
            "--gender" => {
                let v = next_value(&mut it)?;
                args.overrides.push(("gender", Value::from(v.trim())));
            }
            "--view" => {
                let v = next_value(&mut it)?;
                args.overrides.push(("view", Value::from(v.trim())));
            }
            "--theme" => {
                let v = next_value(&mut it)?;
                args.overrides.push(("theme", Value::from(v.trim())));
            }
            "--scale" => {
                let scale = next_value(&mut it)?
                    .parse::<f64>()
                    .map_err(|_| CliError::Usage(usage()))?;
                if !(scale.is_finite() && scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
                args.overrides.push(("scale", Value::from(scale)));
            }
            "--border" => {
                let v = next_value(&mut it)?;
                args.overrides.push(("border", Value::from(v.trim())));
            }
            "--colors" => {
                let colors: Vec<Value> = next_value(&mut it)?
                    .split(',')
                    .map(|c| Value::from(c.trim()))
                    .collect();
                args.overrides.push(("colors", Value::Array(colors)));
            }
            "--legacy-indexing" => {
                args.overrides.push(("paletteIndexing", Value::from("legacy")));
            }
            "--fit" => args.overrides.push(("fitToContent", Value::Bool(true))),
            "--id" => {
                let v = next_value(&mut it)?;
                args.overrides.push(("id", Value::from(v.trim())));
            }
            "--side" => {
                let side = next_value(&mut it)?
                    .parse::<Side>()
                    .map_err(|_| CliError::Usage(usage()))?;
                args.side = Some(side);
            }
            "--intensity" => {
                args.intensity = Some(parse_intensity(next_value(&mut it)?)?);
            }
            "--format" => {
                args.render_format = next_value(&mut it)?
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--background" => {
                let bg = next_value(&mut it)?;
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--" => {
                args.positional.extend(it.by_ref().cloned());
            }
            "-" => args.positional.push(a.clone()),
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            value => args.positional.push(value.to_string()),
        }
    }

    let max_positional = match args.command {
        Command::Render | Command::Layout => 1,
        Command::Click | Command::Intensity => 2,
        Command::Slugs => 0,
    };
    let min_positional = match args.command {
        Command::Click | Command::Intensity => 1,
        _ => 0,
    };
    if args.positional.len() > max_positional || args.positional.len() < min_positional {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn parse_intensity(raw: &str) -> Result<Intensity, CliError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .and_then(Intensity::new)
        .ok_or(CliError::Usage(usage()))
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn read_selection(input: Option<&str>) -> Result<Selection, CliError> {
    let text = read_input(input)?;
    if text.trim().is_empty() {
        return Ok(Selection::new());
    }
    Ok(Selection::from_json_str(&text)?)
}

fn build_config(args: &Args) -> Result<HighlighterConfig, CliError> {
    let mut cfg = match args.config_path.as_deref() {
        Some(path) => HighlighterConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => HighlighterConfig::empty_object(),
    };
    for (key, value) in &args.overrides {
        cfg.set_value(key, value.clone())?;
    }
    Ok(cfg)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_bytes(bytes: &[u8], out: &str) -> Result<(), CliError> {
    if out == "-" {
        use std::io::Write;
        std::io::stdout().lock().write_all(bytes)?;
    } else {
        std::fs::write(out, bytes)?;
    }
    Ok(())
}

fn default_raster_out_path(input: Option<&str>, ext: &str) -> std::path::PathBuf {
    match input {
        Some(path) if path != "-" => std::path::PathBuf::from(path).with_extension(ext),
        _ => std::path::PathBuf::from(format!("out.{ext}")),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let cfg = build_config(&args)?;

    match args.command {
        Command::Slugs => {
            let resolved = HeadlessRenderer::from_config(&cfg)?.config;
            let ds = dataset(resolved.gender, resolved.view);
            let out = SlugsOut {
                gender: ds.gender,
                view: ds.view,
                slugs: ds.slugs().collect(),
            };
            write_json(&out, args.pretty)
        }
        Command::Click => {
            let slug = args.positional[0].parse::<Slug>()?;
            let selection = read_selection(args.positional.get(1).map(String::as_str))?;
            let mut highlighter = Highlighter::from_config(&cfg)?;
            if let Some(intensity) = args.intensity {
                highlighter = highlighter.with_intensity(intensity);
            }
            let target = ClickTarget::new(slug, args.side);
            let ds = highlighter.dataset();
            if target.resolve(ds).is_none() {
                return Err(CliError::NotInView {
                    slug,
                    gender: ds.gender,
                    view: ds.view,
                });
            }
            let next = highlighter.click(&selection, target);
            write_json(&next, args.pretty)
        }
        Command::Intensity => {
            let intensity = parse_intensity(&args.positional[0])?;
            let selection = read_selection(args.positional.get(1).map(String::as_str))?;
            write_json(&rebroadcast_intensity(&selection, intensity), args.pretty)
        }
        Command::Layout => {
            let input = args.positional.first().map(String::as_str);
            let renderer = HeadlessRenderer::from_config(&cfg)?;
            let selection = read_selection(input)?;
            let layout = block_on(layout_selection(&selection, &renderer.config));
            write_json(&layout, args.pretty)
        }
        Command::Render => {
            let input = args.positional.first().map(String::as_str);
            let renderer = HeadlessRenderer::from_config(&cfg)?;
            let selection = read_selection(input)?;

            let raster_options = RasterOptions {
                background: args.background.clone(),
                ..Default::default()
            };
            match args.render_format {
                RenderFormat::Svg => {
                    let svg = block_on(render_svg(&selection, &renderer.config))?;
                    write_text(&svg, args.out.as_deref())?;
                }
                RenderFormat::Png => {
                    let bytes =
                        raster::render_png_sync(&selection, &renderer.config, &raster_options)?;
                    let out = args.out.clone().unwrap_or_else(|| {
                        default_raster_out_path(input, "png")
                            .to_string_lossy()
                            .to_string()
                    });
                    write_bytes(&bytes, &out)?;
                }
                RenderFormat::Jpeg => {
                    let bytes = renderer.render_jpeg_sync(&selection, &raster_options)?;
                    let out = args.out.clone().unwrap_or_else(|| {
                        default_raster_out_path(input, "jpg")
                            .to_string_lossy()
                            .to_string()
                    });
                    write_bytes(&bytes, &out)?;
                }
            }
            Ok(())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
