//! Colour theme loaded from a `key = value` file.
use ratatui::style::Color;
use std::path::Path;

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub focus: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

/// Keys understood in the theme file, in the order they are written.
const KEYS: [&str; 11] = [
    "text",
    "muted",
    "title",
    "border",
    "focus",
    "header_bg",
    "header_fg",
    "status_bg",
    "status_fg",
    "highlight_fg",
    "highlight_bg",
];

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Plain terminal colours.
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            focus: Color::Yellow,
            header_bg: Color::Black,
            header_fg: Color::Cyan,
            status_bg: Color::DarkGray,
            status_fg: Color::Black,
            highlight_fg: Color::Yellow,
            highlight_bg: Color::Reset,
        }
    }

    /// Catppuccin Mocha.
    pub fn mocha() -> Self {
        // https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            muted: Color::Rgb(0x7f, 0x84, 0x9c),
            title: Color::Rgb(0xcb, 0xa6, 0xf7),
            border: Color::Rgb(0x58, 0x5b, 0x70),
            focus: Color::Rgb(0xf9, 0xe2, 0xaf),
            header_bg: Color::Rgb(0x31, 0x32, 0x44),
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf),
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a),
        }
    }

    fn slot(&mut self, key: &str) -> Option<&mut Color> {
        Some(match key {
            "text" => &mut self.text,
            "muted" => &mut self.muted,
            "title" => &mut self.title,
            "border" => &mut self.border,
            "focus" => &mut self.focus,
            "header_bg" => &mut self.header_bg,
            "header_fg" => &mut self.header_fg,
            "status_bg" => &mut self.status_bg,
            "status_fg" => &mut self.status_fg,
            "highlight_fg" => &mut self.highlight_fg,
            "highlight_bg" => &mut self.highlight_bg,
            _ => return None,
        })
    }

    /// Parse theme text. Unknown keys and bad colours keep the `mocha` value.
    pub fn parse(contents: &str) -> Self {
        let mut theme = Self::mocha();
        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                continue;
            };
            match (parse_color(val), theme.slot(key.trim())) {
                (Some(color), Some(slot)) => *slot = color,
                _ => tracing::debug!(line, "skipping theme line"),
            }
        }
        theme
    }

    pub fn from_file(path: impl AsRef<Path>) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::parse(&contents))
    }

    pub fn to_config_string(&self) -> String {
        let mut copy = *self;
        let mut buf = String::from("# users-ui theme\n# Colors: #RRGGBB, RRGGBB, or 'reset'\n\n");
        for key in KEYS {
            if let Some(color) = copy.slot(key) {
                buf.push_str(&format!("{key} = {}\n", color_to_str(*color)));
            }
        }
        buf
    }

    pub fn write_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::write(path, self.to_config_string())
    }

    /// Load the theme at `path`, writing the default palette there first if it is missing.
    pub fn load_or_init(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path).unwrap_or_default();
        }
        let theme = Self::default();
        if let Err(e) = theme.write_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "could not write default theme");
        }
        theme
    }
}

fn parse_color(s: &str) -> Option<Color> {
    let lower = s.trim().to_ascii_lowercase();
    if lower == "reset" {
        return Some(Color::Reset);
    }
    let hex = lower.strip_prefix('#').unwrap_or(lower.as_str());
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn color_to_str(c: Color) -> String {
    let (r, g, b) = match c {
        Color::Reset => return "reset".to_string(),
        Color::Rgb(r, g, b) => (r, g, b),
        // Named colours are written as an approximate hex value.
        Color::Black => (0x00, 0x00, 0x00),
        Color::Red => (0xff, 0x00, 0x00),
        Color::Green => (0x00, 0xff, 0x00),
        Color::Yellow => (0xff, 0xff, 0x00),
        Color::Blue => (0x00, 0x00, 0xff),
        Color::Magenta => (0xff, 0x00, 0xff),
        Color::Cyan => (0x00, 0xff, 0xff),
        Color::Gray => (0xb3, 0xb3, 0xb3),
        Color::DarkGray => (0x4d, 0x4d, 0x4d),
        Color::White => (0xff, 0xff, 0xff),
        _ => (0x80, 0x80, 0x80),
    };
    format!("#{r:02X}{g:02X}{b:02X}")
}
