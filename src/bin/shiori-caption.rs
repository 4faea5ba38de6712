use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use shiori::{
    BackgroundStyle, FaceConfig, Fixed, FontStorage, FontdueFace, ParagraphConfig,
    codec::{self, DEFAULT_JPEG_QUALITY},
    fontdb::{self, Family, Query},
    render_paragraph,
    renderer::new_dot_pattern_canvas,
};

const CANVAS_SIZE: [u32; 2] = [500, 500];
const TEXT_ORIGIN: [i32; 2] = [10, 0];
const WRAP_WIDTH: i32 = 250;
const POINT_SIZE: f32 = 20.0;
const OUTPUT: &str = "output.jpg";
const FONT_ENV: &str = "SHIORI_FONT";

const TEXT: &str = "瓦亚格岛是印度尼西亚西巴布亚省拉贾安帕特群岛的一部分。\
这些无人居住的小岛很受潜水者和浮潜者的欢迎，他们渴望探索周围巨大而多样的珊瑚礁系统。\
瓦亚格岛是珊瑚礁三角区的一部分，虽然它只覆盖了地球上1.6%的海洋区域，\
但却包含了地球上所有已知的珊瑚物种的76%。";

/// Usage: `shiori-caption [FONT] [BASE_IMAGE]`
///
/// The font falls back to `$SHIORI_FONT`, then to a system sans-serif face.
/// Without a base image the text is drawn on a dot-pattern canvas.
fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let font_path = args.next().or_else(|| env::var(FONT_ENV).ok());
    let base_image = args.next().map(PathBuf::from);

    let face = load_face(font_path.as_deref())?;

    let mut canvas = match &base_image {
        Some(path) => codec::load_image(path)
            .with_context(|| format!("loading base image {}", path.display()))?,
        None => new_dot_pattern_canvas(CANVAS_SIZE[0], CANVAS_SIZE[1]),
    };

    let config = ParagraphConfig {
        origin: shiori::euclid::point2(
            Fixed::from_int(TEXT_ORIGIN[0]),
            Fixed::from_int(TEXT_ORIGIN[1]),
        ),
        max_width: Fixed::from_int(WRAP_WIDTH),
        background: Some(BackgroundStyle::default()),
        ..Default::default()
    };

    let paragraph = render_paragraph(&mut canvas, TEXT, &face, &config);
    log::info!(
        "painted {} lines in a {}x{} box",
        paragraph.lines.len(),
        paragraph.paragraph_box.width,
        paragraph.paragraph_box.height
    );

    codec::save_jpeg(OUTPUT, &canvas, DEFAULT_JPEG_QUALITY)
        .with_context(|| format!("writing {OUTPUT}"))?;
    log::info!("saved {OUTPUT}");

    Ok(())
}

fn load_face(path: Option<&str>) -> Result<FontdueFace> {
    if let Some(path) = path {
        let data = std::fs::read(path).with_context(|| format!("reading font {path}"))?;
        let face = FontdueFace::new(&FaceConfig::new(data, POINT_SIZE))
            .with_context(|| format!("parsing font {path}"))?;
        log::info!("using font {path}");
        return Ok(face);
    }

    let mut font_storage = FontStorage::new();
    font_storage.load_system_fonts();

    const FAMILIES: &[Family<'_>] = &[Family::SansSerif];
    let query = Query {
        families: FAMILIES,
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };

    let id = font_storage
        .query(&query)
        .or_else(|| font_storage.faces().next().map(|face| face.id))
        .with_context(|| format!("no font given and no system font found; set {FONT_ENV}"))?;

    if let Some(info) = font_storage.faces().find(|face| face.id == id) {
        log::info!("using system font {:?}", info.families);
    }

    font_storage
        .face(id, POINT_SIZE)
        .context("loading system font")
}
