use crossterm::style::Color;

use crate::field::SuffixStyle;

// 一段文字在终端上的显示属性
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Attribute {
    pub foreground: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub dim: bool,
}

impl Attribute {
    pub const fn plain(foreground: Color) -> Self {
        Self {
            foreground: Some(foreground),
            bold: false,
            italic: false,
            dim: false,
        }
    }
}

impl From<SuffixStyle> for Attribute {
    fn from(style: SuffixStyle) -> Self {
        Self {
            foreground: Some(style.color),
            bold: style.font.is_bold(),
            italic: style.font.is_italic(),
            dim: style.font.is_dim(),
        }
    }
}
