use super::text::suffix_start;
use super::{AnnotatedString, SuffixStyle};

// 对文本末尾的后缀应用后缀样式。
// 文本不以后缀结尾时不加任何样式。
pub fn styled_with_suffix(text: &str, suffix: &str, style: SuffixStyle) -> AnnotatedString {
    let mut result = AnnotatedString::from(text);
    if let Some(start) = suffix_start(text, suffix) {
        result.add_annotation(style, start, text.len());
    }
    result
}

/// 组合占位符：提示文本 + 后缀，仅后缀部分带样式。
/// 没有提示文本时占位符只有后缀本身。
pub fn compose_placeholder(hint: Option<&str>, suffix: &str, style: SuffixStyle) -> AnnotatedString {
    let placeholder = format!("{}{suffix}", hint.unwrap_or_default());
    styled_with_suffix(&placeholder, suffix, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Font;
    use crossterm::style::Color;
    use pretty_assertions::assert_eq;

    const STYLE: SuffixStyle = SuffixStyle {
        font: Font::Bold,
        color: Color::Green,
    };

    #[test]
    fn hint_plus_suffix_styles_only_the_suffix() {
        let placeholder = compose_placeholder(Some("Amount "), "kr", STYLE);
        assert_eq!(placeholder.as_str(), "Amount kr");
        assert_eq!(placeholder.annotations().len(), 1);
        let annotation = placeholder.annotations()[0];
        assert_eq!(&placeholder.as_str()[annotation.start..annotation.end], "kr");
        assert_eq!(annotation.style, STYLE);
    }

    #[test]
    fn missing_hint_leaves_styled_suffix() {
        let placeholder = compose_placeholder(None, "kr", STYLE);
        assert_eq!(placeholder.as_str(), "kr");
        assert_eq!(
            (placeholder.annotations()[0].start, placeholder.annotations()[0].end),
            (0, 2)
        );
    }

    #[test]
    fn empty_suffix_degenerates_to_plain_hint() {
        let placeholder = compose_placeholder(Some("Amount"), "", STYLE);
        assert_eq!(placeholder.as_str(), "Amount");
        assert!(placeholder.annotations().is_empty());
    }

    #[test]
    fn short_text_is_left_unstyled() {
        let styled = styled_with_suffix("r", "kr", STYLE);
        assert_eq!(styled.as_str(), "r");
        assert!(styled.annotations().is_empty());
    }

    #[test]
    fn combining_suffix_styles_only_its_own_bytes() {
        let styled = styled_with_suffix("e\u{301}kr", "\u{301}kr", STYLE);
        let annotation = styled.annotations()[0];
        assert_eq!(&styled.as_str()[annotation.start..annotation.end], "\u{301}kr");
    }
}
