/// Colors the chat transport can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Yellow,
}

/// Text styling seam. Formatters only ever see this trait; the binary picks
/// the concrete renderer for its transport.
pub trait Style {
    fn bold(&self, text: &str) -> String;
    fn color(&self, text: &str, color: Color) -> String;
}

/// Classic mIRC control codes, understood by IRC and the chat bridges that
/// relay webhook lines into it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mirc;

impl Style for Mirc {
    fn bold(&self, text: &str) -> String {
        format!("\x02{}\x02", text)
    }

    fn color(&self, text: &str, color: Color) -> String {
        // Two-digit codes so a leading digit in the text cannot bleed into
        // the color number.
        let code = match color {
            Color::Green => "03",
            Color::Red => "04",
            Color::Yellow => "08",
        };
        format!("\x03{}{}\x03", code, text)
    }
}
