//! Static character-width table for the built-in Helvetica face.
//!
//! Widths are in 1/1000 em (standard AFM units) and cover ASCII
//! 0x20..=0x7E; anything outside that range falls back to an average
//! width. Static tables are an approximation, but line wrapping only has
//! to match what a viewer renders to within a character or two.

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_LEFT_MM: f32 = 10.0;
pub const MARGIN_RIGHT_MM: f32 = 10.0;
pub const MARGIN_TOP_MM: f32 = 10.0;
/// Bottom margin at which a new page starts.
pub const PAGE_BREAK_MARGIN_MM: f32 = 15.0;
pub const FONT_SIZE_PT: f32 = 12.0;
pub const LINE_HEIGHT_MM: f32 = 10.0;

const PT_TO_MM: f32 = 25.4 / 72.0;

/// Width of each printable ASCII character, indexed by `(char - 0x20)`.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // 0x20 space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0x30 digits 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // 0x3A : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // 0x41 A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // 0x5B [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // 0x61 a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // 0x7B { | } ~
    334, 260, 334, 584,
];

const AVERAGE_WIDTH: u16 = 556;

/// Rendered width of one character in millimeters at `FONT_SIZE_PT`.
pub fn char_width_mm(c: char) -> f32 {
    let code = c as usize;
    let units = if (0x20..=0x7E).contains(&code) {
        HELVETICA_WIDTHS[code - 0x20]
    } else {
        AVERAGE_WIDTH
    };
    f32::from(units) / 1000.0 * FONT_SIZE_PT * PT_TO_MM
}

pub fn measure_mm(s: &str) -> f32 {
    s.chars().map(char_width_mm).sum()
}

/// Usable text width between the side margins.
pub fn text_width_mm() -> f32 {
    PAGE_WIDTH_MM - MARGIN_LEFT_MM - MARGIN_RIGHT_MM
}

/// Greedy wrap of one source line against `max_width_mm`. Breaks at the
/// most recent space; a single word wider than the line is hard-broken.
/// Always yields at least one (possibly empty) line, so blank source
/// lines still advance the cursor.
pub fn wrap_line(line: &str, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut width = 0.0_f32;
    let mut last_space: Option<usize> = None;

    for c in line.chars() {
        let w = char_width_mm(c);
        if !current.is_empty() && width + w > max_width_mm {
            if let Some(space_at) = last_space {
                let remainder = current[space_at + 1..].to_string();
                current.truncate(space_at);
                lines.push(current);
                current = remainder;
            } else {
                lines.push(current);
                current = String::new();
            }
            width = measure_mm(&current);
            last_space = None;
        }
        if c == ' ' {
            last_space = Some(current.len());
        }
        current.push(c);
        width += w;
    }

    lines.push(current);
    lines
}
