use super::host::{Selection, TextHost};
use super::text::suffix_grapheme_len;

// 把光标放到距文档末尾 offset 个字素处；宿主无法给出该位置时不做任何事
pub fn go_to_offset_from_end<H: TextHost + ?Sized>(host: &mut H, offset: usize) {
    if let Some(position) = host.position_from_end(offset) {
        host.set_selection(Selection::caret(position));
    }
}

// 把光标放到后缀的第一个字符之前
pub fn go_to_beginning_of_suffix<H: TextHost + ?Sized>(host: &mut H, suffix: &str) {
    let offset = suffix_grapheme_len(host.text(), suffix);
    go_to_offset_from_end(host, offset);
}

// 选区的任一端进入后缀区域时，把它收回到后缀之前。返回是否做了调整。
pub fn clamp_before_suffix<H: TextHost + ?Sized>(host: &mut H, suffix: &str) -> bool {
    let offset = suffix_grapheme_len(host.text(), suffix);
    let Some(limit) = host.position_from_end(offset) else {
        return false;
    };
    let selection = host.selection();
    if selection.start <= limit && selection.end <= limit {
        return false;
    }
    host.set_selection(Selection {
        start: selection.start.min(limit),
        end: selection.end.min(limit),
    });
    true
}
