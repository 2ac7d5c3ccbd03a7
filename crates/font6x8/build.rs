use std::{fs, path::PathBuf};

const NUM_GLYPHS: usize = 128; // ASCII only
const FONT_HEIGHT: usize = 8;
type FontFile = [Option<Glyph>; NUM_GLYPHS];

#[derive(Debug, Clone)]
struct Glyph {
    pub rows: Vec<u8>,
}

/// Generate the glyph table Rust code that will be included in the crate.
fn generate_rust(font: &[Option<Glyph>]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "static FONT_6X8: [Option<Glyph>; {}] = [\n",
        font.len()
    ));

    for glyph in font {
        match glyph {
            None => out.push_str("    None,\n"),
            Some(g) => {
                let rows: Vec<String> = g.rows.iter().map(|row| format!("0x{row:02X}")).collect();
                out.push_str(&format!(
                    "    Some(Glyph {{ rows: &[{}] }}),\n",
                    rows.join(", ")
                ));
            }
        }
    }

    out.push_str("];\n");

    out
}

impl Glyph {
    /// Parse a single `'<char>' <hex rows...>` line into a glyph.
    fn from_line(line: &str) -> Result<(char, Self), String> {
        let mut chars = line.chars();

        let (Some('\''), Some(character), Some('\'')) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(format!("expected a quoted character: {line:?}"));
        };

        let rows = chars
            .as_str()
            .split_whitespace()
            .map(|byte| u8::from_str_radix(byte, 16).map_err(|e| format!("{byte:?}: {e}")))
            .collect::<Result<Vec<u8>, _>>()?;

        if rows.len() != FONT_HEIGHT {
            return Err(format!(
                "glyph {character:?} has {} rows, expected {FONT_HEIGHT}",
                rows.len()
            ));
        }

        Ok((character, Self { rows }))
    }
}

/// Load a file of glyph definitions.
fn load_file(file: &str) -> Result<FontFile, String> {
    let mut result = [const { None }; NUM_GLYPHS];

    for line in file.lines() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let (character, glyph) = Glyph::from_line(line)?;
        let code = character as usize;

        if code >= NUM_GLYPHS {
            return Err(format!("glyph {character:?} is outside the ASCII range"));
        }

        result[code] = Some(glyph);
    }

    if result[' ' as usize].is_none() {
        return Err("the space glyph is required as the fallback".to_owned());
    }

    Ok(result)
}

fn main() {
    let source = fs::read_to_string("data/font6x8.txt").unwrap();

    let glyphs = load_file(&source).unwrap_or_else(|e| panic!("data/font6x8.txt: {e}"));

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let out_file = out_dir.join("font6x8.rs");

    fs::write(out_file, generate_rust(&glyphs)).unwrap();

    println!("cargo:rerun-if-changed=data/font6x8.txt");
}
