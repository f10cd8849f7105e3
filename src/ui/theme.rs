use ratatui::style::Color;

/// Colors for one theme. Chosen by [`Palette::for_theme`] on every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub star: Color,
    pub error: Color,
    pub highlight: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xff, 0xff, 0xff),
    text: Color::Rgb(0x1f, 0x23, 0x28),
    muted: Color::Rgb(0x65, 0x6d, 0x76),
    border: Color::Rgb(0xd0, 0xd7, 0xde),
    accent: Color::Rgb(0x09, 0x69, 0xda),
    star: Color::Rgb(0x9a, 0x67, 0x00),
    error: Color::Rgb(0xcf, 0x22, 0x2e),
    highlight: Color::Rgb(0xf6, 0xf8, 0xfa),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x0d, 0x11, 0x17),
    text: Color::Rgb(0xe6, 0xed, 0xf3),
    muted: Color::Rgb(0x7d, 0x85, 0x90),
    border: Color::Rgb(0x30, 0x36, 0x3d),
    accent: Color::Rgb(0x58, 0xa6, 0xff),
    star: Color::Rgb(0xe3, 0xb3, 0x41),
    error: Color::Rgb(0xf8, 0x51, 0x49),
    highlight: Color::Rgb(0x16, 0x1b, 0x22),
};

impl Palette {
    pub fn for_theme(dark: bool) -> Self {
        if dark {
            DARK
        } else {
            LIGHT
        }
    }
}
