use crossterm::event::{read, Event, KeyEvent, KeyEventKind};
use crossterm::style::Color;
use log::{debug, info};
use std::{
    io::Error,
    panic::{set_hook, take_hook},
};

use crate::config::Config;
use crate::field::{Font, ParkedTextField};
use crate::prelude::*;

mod command;
use command::{
    Command::{self, Edit, Move, System},
    System::{Quit, Resize},
};

mod line;
use line::Line;

mod terminal;
use terminal::Terminal;

mod uicomponents;
use uicomponents::{InputView, MessageBar, UIComponent};

const HELP: &str = "帮助信息: 输入内容 | ←/→/Home/End 移动 | Esc、Enter 或 Ctrl + Q = 退出";

// 在终端第一行运行一个带固定后缀的输入框
pub struct App {
    should_quit: bool,
    field: ParkedTextField<InputView>,
    message_bar: MessageBar,
    terminal_size: Size,
}

impl App {
    fn initialize_panic_hook() {
        let current_hook = take_hook();
        set_hook(Box::new(move |panic_info| {
            let _ = Terminal::terminate();
            current_hook(panic_info);
        }));
    }

    pub fn new(config: &Config) -> Result<Self, Error> {
        Self::initialize_panic_hook();
        Terminal::initialize()?;

        let mut field = ParkedTextField::new(InputView::new(Font::Regular, Color::Reset));
        config.apply(&mut field);

        let mut app = Self {
            should_quit: false,
            field,
            message_bar: MessageBar::default(),
            terminal_size: Size::default(),
        };
        let size = Terminal::size().unwrap_or_default();
        app.handle_resize_command(size);
        app.message_bar.set_help(HELP);
        Terminal::set_title(&format!("{NAME} - {VERSION}"))?;
        info!("terminal initialized with {size:?}");
        Ok(app)
    }

    // 事件循环
    pub fn run(&mut self) {
        loop {
            self.refresh_screen();
            if self.should_quit {
                break;
            }
            match read() {
                Ok(event) => self.evaluate_event(event),
                Err(err) => {
                    #[cfg(debug_assertions)]
                    {
                        panic!("Could not read event: {err:?}");
                    }
                    #[cfg(not(debug_assertions))]
                    {
                        log::warn!("could not read event: {err:?}");
                        self.message_bar.update_message("读取事件时发生错误，请重试。");
                    }
                }
            }
        }
    }

    // 最终输入的值
    pub fn value(&self) -> &str {
        self.field.text()
    }

    fn refresh_screen(&mut self) {
        let Size { height, width } = self.terminal_size;
        if height == 0 || width == 0 {
            return;
        }
        let _ = Terminal::hide_caret();
        if height > 1 {
            self.message_bar.render(height.saturating_sub(1));
        }
        self.field.host_mut().render(0);

        let new_caret_pos = Position {
            row: 0,
            col: self.field.host().caret_position_col(),
        };
        debug_assert!(new_caret_pos.col <= width);
        let _ = Terminal::move_caret_to(new_caret_pos);
        let _ = Terminal::show_caret();
        let _ = Terminal::execute();
    }

    fn evaluate_event(&mut self, event: Event) {
        let should_process = match &event {
            Event::Key(KeyEvent { kind, .. }) => kind == &KeyEventKind::Press,
            Event::Resize(_, _) => true,
            _ => false,
        };

        if should_process {
            if let Ok(command) = Command::try_from(event) {
                self.process_command(command);
            }
        }
    }

    fn process_command(&mut self, command: Command) {
        match command {
            System(Resize(size)) => self.handle_resize_command(size),
            System(Quit) => self.should_quit = true,
            Edit(edit_command) => {
                let before = self.field.text().to_string();
                self.field.host_mut().handle_edit_command(edit_command);
                let edited = self.field.text().to_string();
                self.field.text_changed();
                // 编辑被撤回时提示用户
                if edited != before && self.field.text() == before && !before.is_empty() {
                    debug!("edit {edit_command:?} rejected");
                    self.message_bar.update_message("后缀不可编辑");
                }
            }
            Move(move_command) => {
                self.field.host_mut().handle_move_command(move_command);
                self.field.selection_changed();
            }
        }
    }

    fn handle_resize_command(&mut self, size: Size) {
        self.terminal_size = size;
        let row_size = Size {
            height: 1,
            width: size.width,
        };
        self.field.host_mut().resize(row_size);
        self.message_bar.resize(row_size);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = Terminal::terminate();
        if self.should_quit {
            let _ = Terminal::print(&format!("{}\r\n", self.value()));
            let _ = Terminal::execute();
        }
    }
}
