use crossterm::style::Color;

// 终端可表达的字体变体
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Font {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
    Dim,
}

impl Font {
    /// 返回此字体的粗体变体。
    /// `Dim` 没有粗体变体：SGR 22 会同时重置粗体和暗淡，多数终端无法组合二者。
    pub const fn bold(self) -> Option<Self> {
        match self {
            Self::Regular | Self::Bold => Some(Self::Bold),
            Self::Italic | Self::BoldItalic => Some(Self::BoldItalic),
            Self::Dim => None,
        }
    }

    pub const fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    pub const fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }

    pub const fn is_dim(self) -> bool {
        matches!(self, Self::Dim)
    }
}

// 后缀的显示样式：字体 + 前景色
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SuffixStyle {
    pub font: Font,
    pub color: Color,
}

impl SuffixStyle {
    // 从输入框当前的字体和文字颜色推导默认样式：
    // 有粗体变体就用粗体，否则沿用原字体；颜色沿用文字颜色。
    pub fn derive_from(font: Font, text_color: Color) -> Self {
        Self {
            font: font.bold().unwrap_or(font),
            color: text_color,
        }
    }
}

impl Default for SuffixStyle {
    fn default() -> Self {
        Self::derive_from(Font::default(), Color::Reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(Font::Regular, Font::Bold)]
    #[test_case(Font::Bold, Font::Bold)]
    #[test_case(Font::Italic, Font::BoldItalic)]
    #[test_case(Font::BoldItalic, Font::BoldItalic)]
    #[test_case(Font::Dim, Font::Dim ; "dim has no bold variant")]
    fn derives_bold_variant_or_falls_back(font: Font, expected: Font) {
        let style = SuffixStyle::derive_from(font, Color::Cyan);
        assert_eq!(style.font, expected);
        assert_eq!(style.color, Color::Cyan);
    }

    #[test]
    fn default_style_is_bold_in_terminal_color() {
        assert_eq!(
            SuffixStyle::default(),
            SuffixStyle {
                font: Font::Bold,
                color: Color::Reset
            }
        );
    }
}
