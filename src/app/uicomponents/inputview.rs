use crossterm::style::Color;
use std::{cmp::min, io::Error};

use crate::field::{AnnotatedString, Font, Selection, SuffixStyle, TextHost};
use crate::prelude::*;

use super::super::{
    command::{Edit, Move},
    Line, Terminal,
};
use super::super::terminal::Attribute;
use super::UIComponent;

const PLACEHOLDER_COLOR: Color = Color::DarkGrey;

// 终端中的单行输入框，实现 TextHost 供 ParkedTextField 使用
pub struct InputView {
    line: Line,
    placeholder: AnnotatedString,
    caret: GraphemeIdx,
    scroll_offset: ColIdx,
    font: Font,
    text_color: Color,
    needs_redraw: bool,
    size: Size,
}

impl Default for InputView {
    fn default() -> Self {
        Self::new(Font::default(), Color::Reset)
    }
}

impl InputView {
    pub fn new(font: Font, text_color: Color) -> Self {
        Self {
            line: Line::default(),
            placeholder: AnnotatedString::default(),
            caret: 0,
            scroll_offset: 0,
            font,
            text_color,
            needs_redraw: true,
            size: Size::default(),
        }
    }

    // 命令处理
    pub fn handle_edit_command(&mut self, command: Edit) {
        match command {
            Edit::Insert(character) => self.insert_char(character),
            Edit::Delete => self.line.delete(self.caret),
            Edit::DeleteBackward => {
                if self.caret > 0 {
                    self.caret -= 1;
                    self.line.delete(self.caret);
                }
            }
        }
        self.scroll_caret_into_view();
        self.set_needs_redraw(true);
    }

    pub fn handle_move_command(&mut self, command: Move) {
        match command {
            Move::Left => self.caret = self.caret.saturating_sub(1),
            Move::Right => self.caret = min(self.caret.saturating_add(1), self.line.grapheme_count()),
            Move::StartOfLine => self.caret = 0,
            Move::EndOfLine => self.caret = self.line.grapheme_count(),
        }
        self.scroll_caret_into_view();
    }

    fn insert_char(&mut self, character: char) {
        let old_len = self.line.grapheme_count();
        self.line.insert_char(character, self.caret);
        // 组合字符会并入前一个字素，此时光标不动
        if self.line.grapheme_count() > old_len {
            self.caret += 1;
        }
    }

    // 光标相对于输入框左边缘的列
    pub fn caret_position_col(&self) -> ColIdx {
        self.line
            .width_until(self.caret)
            .saturating_sub(self.scroll_offset)
    }

    fn scroll_caret_into_view(&mut self) {
        let Size { width, .. } = self.size;
        let to = self.line.width_until(self.caret);
        let offset_changed = if to < self.scroll_offset {
            self.scroll_offset = to;
            true
        } else if to >= self.scroll_offset.saturating_add(width) {
            self.scroll_offset = to.saturating_sub(width).saturating_add(1);
            true
        } else {
            false
        };
        if offset_changed {
            self.set_needs_redraw(true);
        }
    }

    // 与常见输入控件一致：替换文本后光标移到末尾
    fn replace_line(&mut self, line: Line) {
        self.line = line;
        self.caret = self.line.grapheme_count();
        self.scroll_caret_into_view();
        self.set_needs_redraw(true);
    }

    fn base_attribute(&self) -> Attribute {
        Attribute::from(SuffixStyle {
            font: self.font,
            color: self.text_color,
        })
    }
}

impl TextHost for InputView {
    fn text(&self) -> &str {
        &self.line
    }

    fn set_text(&mut self, text: &str) {
        self.replace_line(Line::from(text));
    }

    fn set_attributed_text(&mut self, text: AnnotatedString) {
        self.replace_line(Line::from_annotated(text));
    }

    fn set_attributed_placeholder(&mut self, placeholder: AnnotatedString) {
        self.placeholder = placeholder;
        self.set_needs_redraw(true);
    }

    fn selection(&self) -> Selection {
        Selection::caret(self.caret)
    }

    // 终端输入框只有光标，没有选区：取选区的 end 作为光标
    fn set_selection(&mut self, selection: Selection) {
        self.caret = min(selection.end, self.line.grapheme_count());
        self.scroll_caret_into_view();
    }

    fn position_from_end(&self, offset: GraphemeIdx) -> Option<GraphemeIdx> {
        self.line.grapheme_count().checked_sub(offset)
    }

    fn font(&self) -> Font {
        self.font
    }

    fn text_color(&self) -> Color {
        self.text_color
    }
}

impl UIComponent for InputView {
    fn set_needs_redraw(&mut self, value: bool) {
        self.needs_redraw = value;
    }

    fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
        self.scroll_caret_into_view();
    }

    fn draw(&mut self, origin_row: RowIdx) -> Result<(), Error> {
        let width = self.size.width;
        if self.line.is_empty() {
            let placeholder = Line::from_annotated(self.placeholder.clone());
            return Terminal::print_annotated_row(
                origin_row,
                &placeholder.get_visible_annotated(0..width),
                Attribute::plain(PLACEHOLDER_COLOR),
            );
        }
        let left = self.scroll_offset;
        let right = self.scroll_offset.saturating_add(width);
        Terminal::print_annotated_row(
            origin_row,
            &self.line.get_visible_annotated(left..right),
            self.base_attribute(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{ParkedTextField, TypingState};
    use pretty_assertions::assert_eq;

    fn field(width: usize) -> ParkedTextField<InputView> {
        let mut view = InputView::new(Font::Italic, Color::White);
        view.resize(Size { height: 1, width });
        let mut field = ParkedTextField::new(view);
        field.set_suffix("kr");
        field
    }

    fn edit(field: &mut ParkedTextField<InputView>, command: Edit) {
        field.host_mut().handle_edit_command(command);
        field.text_changed();
    }

    fn move_caret(field: &mut ParkedTextField<InputView>, command: Move) {
        field.host_mut().handle_move_command(command);
        field.selection_changed();
    }

    #[test]
    fn first_keystroke_parks_caret_before_suffix() {
        let mut field = field(20);
        edit(&mut field, Edit::Insert('5'));
        assert_eq!(field.text(), "5kr");
        assert_eq!(field.host().caret_position_col(), 1);
        assert_eq!(field.suffix_style().font, Font::BoldItalic);
        assert_eq!(field.suffix_style().color, Color::White);
    }

    #[test]
    fn arrow_keys_cannot_enter_the_suffix() {
        let mut field = field(20);
        edit(&mut field, Edit::Insert('5'));
        move_caret(&mut field, Move::Right);
        assert_eq!(field.host().selection(), Selection::caret(1));
        move_caret(&mut field, Move::EndOfLine);
        assert_eq!(field.host().selection(), Selection::caret(1));
        move_caret(&mut field, Move::StartOfLine);
        assert_eq!(field.host().selection(), Selection::caret(0));
    }

    #[test]
    fn delete_at_suffix_is_undone() {
        let mut field = field(20);
        edit(&mut field, Edit::Insert('5'));
        edit(&mut field, Edit::Delete);
        assert_eq!(field.text(), "5kr");
        assert_eq!(field.host().selection(), Selection::caret(1));
    }

    #[test]
    fn backspacing_everything_empties_the_field() {
        let mut field = field(20);
        edit(&mut field, Edit::Insert('1'));
        edit(&mut field, Edit::Insert('2'));
        assert_eq!(field.text(), "12kr");
        edit(&mut field, Edit::DeleteBackward);
        edit(&mut field, Edit::DeleteBackward);
        assert_eq!(field.text(), "");
        assert_eq!(field.typing_state(), TypingState::Start);
        edit(&mut field, Edit::DeleteBackward);
        assert_eq!(field.text(), "");
    }

    #[test]
    fn narrow_field_scrolls_to_keep_caret_visible() {
        let mut field = field(4);
        for character in "123456".chars() {
            edit(&mut field, Edit::Insert(character));
        }
        assert_eq!(field.text(), "123456kr");
        assert_eq!(field.host().selection(), Selection::caret(6));
        assert_eq!(field.host().caret_position_col(), 3);
    }

    #[test]
    fn suffix_keeps_its_style_while_typing() {
        let mut field = field(20);
        edit(&mut field, Edit::Insert('5'));
        edit(&mut field, Edit::Insert('0'));
        let annotated = field.host().line.get_visible_annotated(0..20);
        assert_eq!(annotated.annotations().len(), 1);
        let annotation = annotated.annotations()[0];
        assert_eq!(&annotated.as_str()[annotation.start..annotation.end], "kr");
    }
}
