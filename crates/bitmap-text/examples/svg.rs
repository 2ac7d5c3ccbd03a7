use svg::Document;
use svg::node::element::Rectangle;

use bitmap_text::{Canvas, FONT_HEIGHT, TextStyle, render_lines, wrap_text};

/// Draw every pixel of the canvas that differs from `background` as a
/// `scale`-sized square.
fn canvas_to_rects(canvas: &Canvas, background: u8, scale: f32) -> Vec<Rectangle> {
    let mut rects = Vec::new();

    for (row, line) in canvas.rows().enumerate() {
        for (col, &px) in line.iter().enumerate() {
            if px == background {
                continue;
            }

            rects.push(
                Rectangle::new()
                    .set("x", col as f32 * scale)
                    .set("y", row as f32 * scale)
                    .set("width", scale)
                    .set("height", scale)
                    .set("fill", format!("rgb({px},{px},{px})")),
            );
        }
    }

    rects
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let panel_width = 296;
    let panel_height = 128;
    let margin = 4;
    let scale = 3.0;

    let mut canvas = Canvas::filled(panel_width, panel_height, 255);

    let title = TextStyle::default().at(margin, margin).with_font_size(2);
    let title_lines = wrap_text("SHELF 12 - AISLE B", (panel_width - 2 * margin as usize) / 2);
    render_lines(&title_lines, &mut canvas, &title)?;

    let body_top = margin + (title_lines.len() * FONT_HEIGHT * 2) as i32 + margin;
    let body = TextStyle::default().at(margin, body_top);
    let body_lines = wrap_text(
        "Restocked: 14:30. Price per unit = 2.49 (incl. tax)! Questions? Ask staff; \
         unknown glyphs like lowercase render blank.",
        panel_width - 2 * margin as usize,
    );
    render_lines(&body_lines, &mut canvas, &body)?;

    let width = panel_width as f32 * scale;
    let height = panel_height as f32 * scale;

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", "white");

    let mut document = Document::new().add(background);

    for rect in canvas_to_rects(&canvas, 255, scale) {
        document = document.add(rect);
    }

    let document = document
        .set("viewBox", (0, 0, width, height))
        .set("width", format!("{width}px"))
        .set("height", format!("{height}px"));

    svg::save("output_label.svg", &document)?;
    println!("Wrote output_label.svg");

    Ok(())
}
