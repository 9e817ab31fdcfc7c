// 输入状态：Start 表示输入框为空、尚未附加后缀；Typed 表示文本已带后缀
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TypingState {
    #[default]
    Start,
    Typed,
}
