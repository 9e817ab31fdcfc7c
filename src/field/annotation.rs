use crate::prelude::*;

use super::SuffixStyle;

// 一段带样式的字节范围 [start, end)
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Annotation {
    pub style: SuffixStyle,
    pub start: ByteIdx,
    pub end: ByteIdx,
}
