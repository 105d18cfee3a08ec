use serde::Serialize;
use std::io::Read;
use std::str::FromStr;
use topograph::render::raster::{RasterError, RasterOptions, svg_to_png};
use topograph::render::{
    HeadlessError, LayoutOptions, SvgRenderOptions, configuration_from_json, layout_graph,
    layout_options_from_json, render_scene_svg,
};
use topograph::{Configuration, synthesize};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Headless(HeadlessError),
    Raster(RasterError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Headless(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        Self::Headless(value)
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
    Synthesize,
    Layout,
    Render,
    Sample,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    options: Option<String>,
    pretty: bool,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    diagram_id: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "topograph-cli\n\
\n\
USAGE:\n\
  topograph-cli [synthesize] [--pretty] [<path>|-]\n\
  topograph-cli layout [--pretty] [--options <path>] [<path>|-]\n\
  topograph-cli render [--format svg|png] [--options <path>] [--id <diagram-id>] [--background <css-color>] [--scale <n>] [--out <path>] [<path>|-]\n\
  topograph-cli sample [--pretty]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is a configuration or a saved topology document (JSON).\n\
  - synthesize prints the topology graph; layout prints the positioned scene.\n\
  - --options reads layout options JSON (canvas size, placement fractions, radii).\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG output defaults to writing next to the input file (or ./out.png for stdin).\n\
  - sample prints the reference five-gateway configuration.\n\
  - Set RUST_LOG=debug to see dropped links on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        command: Command::Synthesize,
        render_format: RenderFormat::Svg,
        render_scale: 1.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "synthesize" => args.command = Command::Synthesize,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "sample" => args.command = Command::Sample,
            "--pretty" => args.pretty = true,
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_format = fmt
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                let Some(scale) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_scale = scale.parse::<f32>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--options" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.options = Some(path.clone());
            }
            "--id" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.diagram_id = Some(id.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
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

fn read_layout_options(path: Option<&str>) -> Result<LayoutOptions, CliError> {
    match path {
        None => Ok(LayoutOptions::default()),
        Some(path) => Ok(layout_options_from_json(&std::fs::read_to_string(path)?)?),
    }
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

fn default_raster_out_path(input: Option<&str>, ext: &str) -> std::path::PathBuf {
    match input {
        Some(path) if path != "-" => std::path::PathBuf::from(path).with_extension(ext),
        _ => std::path::PathBuf::from(format!("out.{ext}")),
    }
}

fn load_configuration(input: Option<&str>) -> Result<Configuration, CliError> {
    let text = read_input(input)?;
    Ok(configuration_from_json(&text)?)
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Sample => write_json(&Configuration::reference_topology(), args.pretty),
        Command::Synthesize => {
            let config = load_configuration(args.input.as_deref())?;
            write_json(&synthesize(&config), args.pretty)
        }
        Command::Layout => {
            let layout = read_layout_options(args.options.as_deref())?;
            let config = load_configuration(args.input.as_deref())?;
            let scene = layout_graph(&synthesize(&config), &layout);
            write_json(&scene, args.pretty)
        }
        Command::Render => {
            let layout = read_layout_options(args.options.as_deref())?;
            let config = load_configuration(args.input.as_deref())?;
            let scene = layout_graph(&synthesize(&config), &layout);
            tracing::debug!(
                nodes = scene.nodes.len(),
                edges = scene.edges.len(),
                "rendering scene"
            );

            let svg_options = SvgRenderOptions {
                diagram_id: args.diagram_id.clone(),
                // The raster pass paints the PNG background.
                background: match args.render_format {
                    RenderFormat::Svg => args.background.clone(),
                    RenderFormat::Png => None,
                },
            };
            let svg = render_scene_svg(&scene, &svg_options);

            match args.render_format {
                RenderFormat::Svg => write_text(&svg, args.out.as_deref()),
                RenderFormat::Png => {
                    let raster = RasterOptions {
                        scale: args.render_scale,
                        background: args.background.clone(),
                    };
                    let bytes = svg_to_png(&svg, &raster)?;
                    let out = args.out.map(std::path::PathBuf::from).unwrap_or_else(|| {
                        default_raster_out_path(args.input.as_deref(), "png")
                    });
                    std::fs::write(&out, bytes)?;
                    tracing::debug!(path = %out.display(), "wrote png");
                    Ok(())
                }
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

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

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
