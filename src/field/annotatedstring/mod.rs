use std::{
    cmp::{max, min},
    fmt::{self, Display},
};
use crate::prelude::*;

use super::{Annotation, SuffixStyle};

mod annotatedstringiterator;
use annotatedstringiterator::AnnotatedStringIterator;

mod annotatedstringpart;
pub use annotatedstringpart::AnnotatedStringPart;

// 文本 + 若干 (范围, 样式) 注解，与具体渲染接口无关
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct AnnotatedString {
    string: String,
    annotations: Vec<Annotation>,
}

impl AnnotatedString {
    pub fn from(string: &str) -> Self {
        Self {
            string: String::from(string),
            annotations: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn is_empty(&self) -> bool {
        self.string.is_empty()
    }

    // 添加注解；空范围不记录
    pub fn add_annotation(&mut self, style: SuffixStyle, start: ByteIdx, end: ByteIdx) {
        debug_assert!(start <= end);
        let end = min(end, self.string.len());
        if start >= end {
            return;
        }
        self.annotations.push(Annotation { style, start, end });
    }

    // 从左侧截断字符串直到指定索引
    pub fn truncate_left_until(&mut self, until: ByteIdx) {
        self.replace(0, until, "");
    }

    // 从指定索引开始向右截断字符串
    pub fn truncate_right_from(&mut self, from: ByteIdx) {
        self.replace(from, self.string.len(), "");
    }

    // 替换 [start, end) 并平移受影响的注解。
    // 在注解起点处插入的文本不继承该注解的样式。
    pub fn replace(&mut self, start: ByteIdx, end: ByteIdx, new_string: &str) {
        let end = min(end, self.string.len());
        debug_assert!(start <= end);
        if start > end {
            return;
        }
        self.string.replace_range(start..end, new_string);

        let replaced_range_len = end - start;
        let shortened = new_string.len() < replaced_range_len;
        let len_difference = new_string.len().abs_diff(replaced_range_len);

        if len_difference == 0 {
            return;
        }

        let adjust_annotation = |idx: &mut ByteIdx| {
            if *idx >= end {
                if shortened {
                    *idx = idx.saturating_sub(len_difference);
                } else {
                    *idx = idx.saturating_add(len_difference);
                }
            } else if *idx > start {
                if shortened {
                    *idx = max(start, idx.saturating_sub(len_difference));
                } else {
                    *idx = min(end, idx.saturating_add(len_difference));
                }
            }
        };

        self.annotations.iter_mut().for_each(|annotation| {
            adjust_annotation(&mut annotation.start);
            adjust_annotation(&mut annotation.end);
        });

        let len = self.string.len();
        self.annotations
            .retain(|annotation| annotation.start < annotation.end && annotation.start < len);
    }
}

impl Display for AnnotatedString {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.string)
    }
}

impl<'a> IntoIterator for &'a AnnotatedString {
    type Item = AnnotatedStringPart<'a>;
    type IntoIter = AnnotatedStringIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        AnnotatedStringIterator {
            annotated_string: self,
            current_idx: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Font;
    use crossterm::style::Color;
    use pretty_assertions::assert_eq;

    const STYLE: SuffixStyle = SuffixStyle {
        font: Font::Bold,
        color: Color::Yellow,
    };

    fn suffixed(text: &str, start: ByteIdx) -> AnnotatedString {
        let mut result = AnnotatedString::from(text);
        result.add_annotation(STYLE, start, text.len());
        result
    }

    #[test]
    fn iterates_plain_and_styled_parts() {
        let string = suffixed("50kr", 2);
        let parts: Vec<_> = string.into_iter().collect();
        assert_eq!(
            parts,
            vec![
                AnnotatedStringPart {
                    string: "50",
                    style: None
                },
                AnnotatedStringPart {
                    string: "kr",
                    style: Some(STYLE)
                },
            ]
        );
    }

    #[test]
    fn empty_range_is_not_recorded() {
        let string = suffixed("50", 2);
        assert!(string.annotations().is_empty());
        assert_eq!(string.into_iter().count(), 1);
    }

    #[test]
    fn insert_before_suffix_shifts_annotation() {
        let mut string = suffixed("5kr", 1);
        string.replace(1, 1, "0");
        assert_eq!(string.as_str(), "50kr");
        assert_eq!((string.annotations()[0].start, string.annotations()[0].end), (2, 4));
    }

    #[test]
    fn delete_inside_suffix_shrinks_annotation() {
        let mut string = suffixed("5kr", 1);
        string.replace(2, 3, "");
        assert_eq!(string.as_str(), "5k");
        assert_eq!((string.annotations()[0].start, string.annotations()[0].end), (1, 2));
    }

    #[test]
    fn truncation_drops_annotations_outside_window() {
        let mut string = suffixed("12345kr", 5);
        string.truncate_right_from(4);
        assert_eq!(string.as_str(), "1234");
        assert!(string.annotations().is_empty());
    }
}
