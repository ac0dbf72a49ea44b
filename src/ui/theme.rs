use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const KEY_FACE: Color = Color::Rgb(0x1e, 0x3a, 0x8a);
pub const INPUT_BACKGROUND: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const DISABLED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
