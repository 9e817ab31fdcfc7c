use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use std::{
    fmt::{self, Display},
    ops::{Deref, Range},
};
use crate::field::AnnotatedString;
use crate::prelude::*;

mod textfragment;
use textfragment::{GraphemeWidth, TextFragment};

// 单行文本：带样式的字符串 + 按字素切分的片段
#[derive(Default, Clone, Debug)]
pub struct Line {
    fragments: Vec<TextFragment>,
    string: AnnotatedString,
}

impl Line {
    pub fn from(line_str: &str) -> Self {
        Self::from_annotated(AnnotatedString::from(line_str))
    }

    pub fn from_annotated(string: AnnotatedString) -> Self {
        Self {
            fragments: Self::str_to_fragments(string.as_str()),
            string,
        }
    }

    fn str_to_fragments(line_str: &str) -> Vec<TextFragment> {
        line_str
            .grapheme_indices(true)
            .map(|(byte_idx, grapheme)| {
                let (replacement, rendered_width) = Self::get_replacement_character(grapheme)
                    .map_or_else(
                        || {
                            let rendered_width = match grapheme.width() {
                                0 | 1 => GraphemeWidth::Half,
                                _ => GraphemeWidth::Full,
                            };
                            (None, rendered_width)
                        },
                        |replacement| (Some(replacement), GraphemeWidth::Half),
                    );

                TextFragment {
                    grapheme: grapheme.to_string(),
                    rendered_width,
                    replacement,
                    start: byte_idx,
                }
            })
            .collect()
    }

    fn rebuild_fragments(&mut self) {
        self.fragments = Self::str_to_fragments(self.string.as_str());
    }

    // 控制字符和不可见空白在终端中用替代字符显示
    fn get_replacement_character(for_str: &str) -> Option<char> {
        let width = for_str.width();
        match for_str {
            " " => None,
            "\t" => Some(' '),
            // 换行只占一列显示，保证内容始终在一行内
            "\n" | "\r" | "\r\n" => Some('↵'),
            _ if width > 0 && for_str.trim().is_empty() => Some('␣'),
            _ if width == 0 => {
                let mut chars = for_str.chars();
                if let Some(ch) = chars.next() {
                    if ch.is_control() && chars.next().is_none() {
                        return Some('▯');
                    }
                }
                Some('·')
            }
            _ => None,
        }
    }

    // 取出列范围内完整可见的字素（保留样式），并替换不可见字符。
    // 只露出一半的宽字符不显示。
    pub fn get_visible_annotated(&self, range: Range<ColIdx>) -> AnnotatedString {
        if range.start >= range.end {
            return AnnotatedString::default();
        }
        let mut result = self.string.clone();
        let mut fragment_start = self.width();
        // 从右往左处理，保证替换和截断不影响尚未处理的字节索引
        for fragment in self.fragments.iter().rev() {
            let fragment_end = fragment_start;
            fragment_start = fragment_start.saturating_sub(fragment.rendered_width.columns());

            if fragment_end > range.end {
                result.truncate_right_from(fragment.start);
                continue;
            }
            if fragment_start < range.start {
                result.truncate_left_until(fragment.end());
                break;
            }
            if let Some(replacement) = fragment.replacement {
                result.replace(fragment.start, fragment.end(), &replacement.to_string());
            }
        }
        result
    }

    pub fn grapheme_count(&self) -> GraphemeIdx {
        self.fragments.len()
    }

    // 计算直到指定字素的列宽
    pub fn width_until(&self, grapheme_idx: GraphemeIdx) -> ColIdx {
        self.fragments
            .iter()
            .take(grapheme_idx)
            .map(|fragment| fragment.rendered_width.columns())
            .sum()
    }

    pub fn width(&self) -> ColIdx {
        self.width_until(self.grapheme_count())
    }

    // 在指定字素索引处插入字符；at == grapheme_count 时追加到末尾
    pub fn insert_char(&mut self, character: char, at: GraphemeIdx) {
        debug_assert!(at <= self.grapheme_count());
        let byte_idx = self
            .fragments
            .get(at)
            .map_or(self.string.as_str().len(), |fragment| fragment.start);
        self.string
            .replace(byte_idx, byte_idx, character.encode_utf8(&mut [0; 4]));
        self.rebuild_fragments();
    }

    // 删除指定字素索引处的字素
    pub fn delete(&mut self, at: GraphemeIdx) {
        if let Some(fragment) = self.fragments.get(at) {
            let (start, end) = (fragment.start, fragment.end());
            self.string.replace(start, end, "");
            self.rebuild_fragments();
        }
    }
}

impl Display for Line {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.string)
    }
}

impl Deref for Line {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.string.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{styled_with_suffix, Font, SuffixStyle};
    use crossterm::style::Color;
    use pretty_assertions::assert_eq;

    const STYLE: SuffixStyle = SuffixStyle {
        font: Font::Bold,
        color: Color::Magenta,
    };

    #[test]
    fn counts_graphemes_and_columns() {
        let line = Line::from("a你e\u{301}");
        assert_eq!(line.grapheme_count(), 3);
        assert_eq!(line.width_until(2), 3);
        assert_eq!(line.width(), 4);
    }

    #[test]
    fn insert_before_styled_suffix_keeps_suffix_style() {
        let mut line = Line::from_annotated(styled_with_suffix("5kr", "kr", STYLE));
        line.insert_char('0', 1);
        assert_eq!(&*line, "50kr");
        let annotated = line.get_visible_annotated(0..line.width());
        let annotation = annotated.annotations()[0];
        assert_eq!(&line[annotation.start..annotation.end], "kr");
    }

    #[test]
    fn line_breaks_are_shown_on_one_row() {
        let line = Line::from_annotated(styled_with_suffix("5a\nb", "a\nb", STYLE));
        assert_eq!(line.grapheme_count(), 4);
        assert_eq!(line.width(), 4);
        let annotated = line.get_visible_annotated(0..line.width());
        assert_eq!(annotated.as_str(), "5a↵b");
        let annotation = annotated.annotations()[0];
        assert_eq!(&annotated.as_str()[annotation.start..annotation.end], "a↵b");
    }

    #[test]
    fn insert_and_delete_multibyte_characters() {
        let mut line = Line::from("ab");
        line.insert_char('€', 1);
        line.insert_char('!', 3);
        assert_eq!(line.to_string(), "a€b!");
        line.delete(1);
        assert_eq!(line.to_string(), "ab!");
        line.delete(7);
        assert_eq!(line.to_string(), "ab!");
    }

    #[test]
    fn visible_window_keeps_partial_suffix_style() {
        let line = Line::from_annotated(styled_with_suffix("12345kr", "kr", STYLE));
        let visible = line.get_visible_annotated(3..6);
        assert_eq!(visible.as_str(), "45k");
        let annotation = visible.annotations()[0];
        assert_eq!(&visible.as_str()[annotation.start..annotation.end], "k");
    }

    #[test]
    fn visible_window_replaces_tabs_and_hides_half_wide_chars() {
        let line = Line::from("a\t你");
        assert_eq!(line.get_visible_annotated(0..3).as_str(), "a ");
        assert_eq!(line.get_visible_annotated(0..4).as_str(), "a 你");
        assert_eq!(line.get_visible_annotated(2..2).as_str(), "");
    }
}
