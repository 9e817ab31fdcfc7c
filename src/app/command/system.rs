use crate::prelude::*;
use crossterm::event::{
    KeyCode::{self, Char},
    KeyEvent, KeyModifiers,
};

// 系统命令：调整大小、退出
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum System {
    Resize(Size),
    Quit,
}

impl TryFrom<KeyEvent> for System {
    type Error = String;

    fn try_from(event: KeyEvent) -> Result<Self, Self::Error> {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        match (code, modifiers) {
            (Char('q'), KeyModifiers::CONTROL)
            | (KeyCode::Esc | KeyCode::Enter, KeyModifiers::NONE) => Ok(Self::Quit),
            _ => Err(format!(
                "Unsupported key code {code:?} or modifier {modifiers:?}"
            )),
        }
    }
}
