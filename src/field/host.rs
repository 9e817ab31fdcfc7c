//! 宿主输入控件需要提供的能力。
//!
//! ParkedTextField 只依赖这个 trait，不依赖具体的 UI 工具包。
//! 宿主在每次用户编辑文本后调用 `ParkedTextField::text_changed`，
//! 在光标移动后调用 `ParkedTextField::selection_changed`。

use crossterm::style::Color;

use crate::prelude::*;

use super::{AnnotatedString, Font};

// 以字素索引表示的选区；start == end 时为光标
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    pub start: GraphemeIdx,
    pub end: GraphemeIdx,
}

impl Selection {
    pub const fn caret(at: GraphemeIdx) -> Self {
        Self { start: at, end: at }
    }
}

pub trait TextHost {
    // 完整的文本内容
    fn text(&self) -> &str;
    // 设置纯文本，清除所有样式
    fn set_text(&mut self, text: &str);
    // 设置带样式的文本
    fn set_attributed_text(&mut self, text: AnnotatedString);
    // 设置带样式的占位符
    fn set_attributed_placeholder(&mut self, placeholder: AnnotatedString);

    fn selection(&self) -> Selection;
    fn set_selection(&mut self, selection: Selection);

    /// 距文档末尾 `offset` 个字素处的位置。
    /// 文档末尾无效或偏移越过文档开头时返回 `None`。
    fn position_from_end(&self, offset: GraphemeIdx) -> Option<GraphemeIdx>;

    // 输入框当前的字体与文字颜色，用于推导后缀的默认样式
    fn font(&self) -> Font;
    fn text_color(&self) -> Color;
}
