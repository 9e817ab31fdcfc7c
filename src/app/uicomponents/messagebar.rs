use std::{
    io::Error,
    time::{Duration, Instant},
};

use crate::prelude::*;
use super::super::Terminal;
use super::UIComponent;

const DEFAULT_DURATION: Duration = Duration::new(3, 0);

// 临时消息
struct Message {
    text: String,
    time: Instant,
}

impl Message {
    fn is_expired(&self) -> bool {
        Instant::now().duration_since(self.time) > DEFAULT_DURATION
    }
}

// 底部消息栏：平时显示帮助信息，临时消息过期后恢复为帮助信息
#[derive(Default)]
pub struct MessageBar {
    help: String,
    current_message: Option<Message>,
    needs_redraw: bool,
}

impl MessageBar {
    pub fn set_help(&mut self, help: &str) {
        self.help = help.to_string();
        self.set_needs_redraw(true);
    }

    pub fn update_message(&mut self, new_message: &str) {
        self.current_message = Some(Message {
            text: new_message.to_string(),
            time: Instant::now(),
        });
        self.set_needs_redraw(true);
    }

    fn visible_text(&self) -> &str {
        match &self.current_message {
            Some(message) if !message.is_expired() => &message.text,
            _ => &self.help,
        }
    }
}

impl UIComponent for MessageBar {
    fn set_needs_redraw(&mut self, value: bool) {
        self.needs_redraw = value;
    }

    fn needs_redraw(&self) -> bool {
        self.needs_redraw
            || self
                .current_message
                .as_ref()
                .is_some_and(Message::is_expired)
    }

    fn set_size(&mut self, _: Size) {}

    fn draw(&mut self, origin: RowIdx) -> Result<(), Error> {
        // 过期消息只需清除一次
        if self
            .current_message
            .as_ref()
            .is_some_and(Message::is_expired)
        {
            self.current_message = None;
        }
        Terminal::print_row(origin, self.visible_text())
    }
}
