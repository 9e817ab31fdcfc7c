use crate::prelude::*;

// 字素在终端中的宽度：Half 占一列，Full 占两列
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GraphemeWidth {
    Half,
    Full,
}

impl GraphemeWidth {
    pub const fn columns(self) -> ColIdx {
        match self {
            Self::Half => 1,
            Self::Full => 2,
        }
    }
}

// 一个字素及其显示信息：渲染宽度、替代字符、起始字节
#[derive(Clone, Debug)]
pub struct TextFragment {
    pub grapheme: String,
    pub rendered_width: GraphemeWidth,
    pub replacement: Option<char>,
    pub start: ByteIdx,
}

impl TextFragment {
    pub fn end(&self) -> ByteIdx {
        self.start.saturating_add(self.grapheme.len())
    }
}
