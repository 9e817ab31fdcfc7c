use log::{debug, trace};

use super::text::{ends_with_suffix, suffix_start};
use super::TypingState;

// 一次文本变化的处理结果，由 ParkedTextField 应用到宿主上
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reconciliation {
    // 仍为空，什么都不做
    Idle,
    // 输入了第一个字符：文本变为 C + S，光标停在后缀前
    Park(String),
    // 只剩下后缀：清空输入框
    Clear,
    // 后缀完好，接受本次编辑
    Accept,
    // 编辑破坏了后缀：恢复为上一次有效的文本，光标停在后缀前
    Restore(String),
}

// 保证“文本要么为空，要么以后缀结尾”的状态机
#[derive(Clone, Debug, Default)]
pub struct Reconciler {
    typing_state: TypingState,
    previous_text: String,
}

impl Reconciler {
    pub const fn typing_state(&self) -> TypingState {
        self.typing_state
    }

    pub fn previous_text(&self) -> &str {
        &self.previous_text
    }

    pub fn reset(&mut self) {
        self.typing_state = TypingState::Start;
        self.previous_text.clear();
    }

    // 处理一次文本变化
    pub fn text_changed(&mut self, text: &str, suffix: &str) -> Reconciliation {
        match self.typing_state {
            TypingState::Start if text.is_empty() => Reconciliation::Idle,
            TypingState::Start => {
                let parked = format!("{text}{suffix}");
                debug!("first input {text:?}, parking suffix {suffix:?}");
                self.previous_text.clone_from(&parked);
                self.typing_state = TypingState::Typed;
                Reconciliation::Park(parked)
            }
            // 只剩后缀视为用户想清空输入框，因此无法得到“仅有后缀”的文本
            TypingState::Typed if text == suffix => {
                debug!("only the suffix is left, clearing");
                self.typing_state = TypingState::Start;
                Reconciliation::Clear
            }
            TypingState::Typed if ends_with_suffix(text, suffix) => {
                trace!("accepted {text:?}");
                self.previous_text = text.to_string();
                Reconciliation::Accept
            }
            TypingState::Typed => {
                debug!("suffix damaged in {text:?}, restoring {:?}", self.previous_text);
                Reconciliation::Restore(self.previous_text.clone())
            }
        }
    }

    // 后缀从 old 改为 new 时，替换上一次有效文本末尾的后缀
    pub fn replace_suffix(&mut self, old: &str, new: &str) {
        if self.typing_state == TypingState::Typed {
            self.previous_text = swap_suffix(&self.previous_text, old, new);
        }
    }
}

// 把 text 末尾的 old 换成 new；text 不以 old 结尾时直接附加 new
pub fn swap_suffix(text: &str, old: &str, new: &str) -> String {
    let prefix = suffix_start(text, old).map_or(text, |start| &text[..start]);
    format!("{prefix}{new}")
}
