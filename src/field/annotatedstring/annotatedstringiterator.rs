use crate::prelude::*;
use std::cmp::min;

use super::{AnnotatedString, AnnotatedStringPart};

// 按样式边界依次切分 AnnotatedString
pub struct AnnotatedStringIterator<'a> {
    pub annotated_string: &'a AnnotatedString,
    pub current_idx: ByteIdx,
}

impl<'a> Iterator for AnnotatedStringIterator<'a> {
    type Item = AnnotatedStringPart<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let string = self.annotated_string.as_str();
        if self.current_idx >= string.len() {
            return None;
        }

        let annotations = self.annotated_string.annotations();
        let current_idx = self.current_idx;

        // 当前位置落在某个样式范围内
        if let Some(annotation) = annotations
            .iter()
            .find(|annotation| annotation.start <= current_idx && annotation.end > current_idx)
        {
            let end_idx = min(annotation.end, string.len());
            self.current_idx = end_idx;
            return Some(AnnotatedStringPart {
                string: &string[current_idx..end_idx],
                style: Some(annotation.style),
            });
        }

        // 否则一直走到下一个样式范围的起点
        let end_idx = annotations
            .iter()
            .filter(|annotation| annotation.start > current_idx)
            .map(|annotation| annotation.start)
            .min()
            .unwrap_or(string.len());
        self.current_idx = end_idx;

        Some(AnnotatedStringPart {
            string: &string[current_idx..end_idx],
            style: None,
        })
    }
}
