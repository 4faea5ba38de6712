use image::Rgba;
use shiori::{
    BackgroundStyle, Fixed, FontStorage, ParagraphConfig,
    fontdb::{self, Family, Query},
    layout_paragraph, render_paragraph,
    renderer::{ComposeMode, new_canvas},
};

const CARD_WIDTH: i32 = 100;
const PADDING: i32 = 6;

#[allow(clippy::unwrap_used)]
fn main() {
    env_logger::init();

    // 1. Setup font storage
    let mut font_storage = FontStorage::new();
    match std::env::var("SHIORI_FONT") {
        Ok(path) => font_storage.load_font_file(path).unwrap(),
        Err(_) => font_storage.load_system_fonts(),
    }

    const FAMILIES: &[Family<'_>] = &[Family::SansSerif];
    let query = Query {
        families: FAMILIES,
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    let font_id = font_storage
        .query(&query)
        .or_else(|| font_storage.faces().next().map(|face| face.id))
        .expect("no usable fonts registered in FontStorage");
    let face = font_storage.face(font_id, 18.0).unwrap();

    // 2. A narrow card with a long unbroken word and a hard break
    let text = "HardWrap:\n\
                SuperCalifoRagiListicExpoaliDocious\n\
                (the word above is broken rune by rune)";

    let config = ParagraphConfig {
        origin: shiori::euclid::point2(Fixed::from_int(PADDING), Fixed::from_int(PADDING)),
        max_width: Fixed::from_int(CARD_WIDTH),
        spacing: Fixed::from_int(2),
        text_color: Rgba([235, 235, 240, 255]),
        background: Some(BackgroundStyle {
            color: Rgba([40, 40, 90, 200]),
            mode: ComposeMode::Over,
            padding: PADDING,
        }),
        ..Default::default()
    };

    // 3. Measure first so the canvas fits the card
    let measured = layout_paragraph(text, &face, &config);
    println!(
        "Result Size: {}x{} lines={}",
        measured.paragraph_box.width,
        measured.paragraph_box.height,
        measured.lines.len()
    );

    let width = (CARD_WIDTH + 2 * PADDING) as u32;
    let height = (measured.paragraph_box.height.ceil() + 2 * PADDING) as u32;

    // 4. Render
    let mut canvas = new_canvas(width, height);
    render_paragraph(&mut canvas, text, &face, &config);

    // 5. Save Output
    std::fs::create_dir_all("debug").expect("failed to create debug directory");
    let output_path = "debug/paragraph_card.png";
    canvas.save(output_path).expect("failed to save image");

    println!("Saved debug image to: {}", output_path);
}
