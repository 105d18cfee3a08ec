#![forbid(unsafe_code)]

use crate::render::{HeadlessError, LayoutOptions, SvgRenderOptions};
use topograph_core::Configuration;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error(transparent)]
    Headless(#[from] HeadlessError),
    #[error("failed to parse SVG")]
    SvgParse,
    #[error("failed to allocate pixmap for raster rendering")]
    PixmapAlloc,
    #[error("failed to encode PNG")]
    PngEncode,
    #[error("invalid raster scale {0}")]
    InvalidScale(f32),
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone)]
pub struct RasterOptions {
    pub scale: f32,
    /// Fill painted before the SVG; `None` keeps the pixmap transparent.
    pub background: Option<String>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
        }
    }
}

pub fn render_png(
    config: &Configuration,
    layout_options: &LayoutOptions,
    svg_options: &SvgRenderOptions,
    raster: &RasterOptions,
) -> Result<Vec<u8>> {
    let svg = super::render_svg(config, layout_options, svg_options);
    svg_to_png(&svg, raster)
}

pub fn render_png_from_json(
    text: &str,
    layout_options: &LayoutOptions,
    svg_options: &SvgRenderOptions,
    raster: &RasterOptions,
) -> Result<Vec<u8>> {
    let svg = super::render_svg_from_json(text, layout_options, svg_options)?;
    svg_to_png(&svg, raster)
}

pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let pixmap = svg_to_pixmap(svg, options.scale, options.background.as_deref())?;
    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

fn svg_to_pixmap(svg: &str, scale: f32, background: Option<&str>) -> Result<tiny_skia::Pixmap> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(RasterError::InvalidScale(scale));
    }

    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = "Arial".to_string();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    // The scene writer always emits a `0 0 w h` viewBox, which usvg maps onto the tree size.
    let size = tree.size();
    let width_px = (size.width() * scale).ceil().max(1.0) as u32;
    let height_px = (size.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px).ok_or(RasterError::PixmapAlloc)?;

    if let Some(color) = background.and_then(parse_tiny_skia_color) {
        pixmap.fill(color);
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

/// Named colors the CLI documents, plus `#rgb` / `#rrggbb`.
fn parse_tiny_skia_color(text: &str) -> Option<tiny_skia::Color> {
    let text = text.trim().to_ascii_lowercase();
    let (r, g, b, a) = match text.as_str() {
        "transparent" => (0, 0, 0, 0),
        "white" => (255, 255, 255, 255),
        "black" => (0, 0, 0, 255),
        other => {
            let hex = other.strip_prefix('#')?;
            let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
            match hex.len() {
                3 => {
                    let mut it = hex.chars().map(|c| c.to_digit(16).map(|v| (v * 17) as u8));
                    (it.next()??, it.next()??, it.next()??, 255)
                }
                6 if hex.is_ascii() => (
                    channel(&hex[0..2])?,
                    channel(&hex[2..4])?,
                    channel(&hex[4..6])?,
                    255,
                ),
                _ => return None,
            }
        }
    };
    Some(tiny_skia::Color::from_rgba8(r, g, b, a))
}
