//! 带固定后缀的输入框。
//!
//! 后缀（例如货币单位）附加在用户输入之后，不可编辑、样式独立，
//! 光标不会停在后缀内部。破坏后缀的编辑会被撤回为上一次的有效文本。

use crossterm::style::Color;
use log::{debug, info};

mod annotatedstring;
pub use annotatedstring::{AnnotatedString, AnnotatedStringPart};

mod annotation;
pub use annotation::Annotation;

mod caret;

mod host;
pub use host::{Selection, TextHost};

mod placeholder;
pub use placeholder::{compose_placeholder, styled_with_suffix};

mod reconciler;
pub use reconciler::{Reconciler, Reconciliation};

mod style;
pub use style::{Font, SuffixStyle};

mod text;
pub use text::{ends_with_suffix, grapheme_count};

mod typingstate;
pub use typingstate::TypingState;

pub struct ParkedTextField<H: TextHost> {
    host: H,
    suffix: String,
    style: SuffixStyle,
    hint: Option<String>,
    placeholder: AnnotatedString,
    reconciler: Reconciler,
}

impl<H: TextHost> ParkedTextField<H> {
    pub fn new(host: H) -> Self {
        let mut field = Self {
            host,
            suffix: String::new(),
            style: SuffixStyle::default(),
            hint: None,
            placeholder: AnnotatedString::default(),
            reconciler: Reconciler::default(),
        };
        field.common_init();
        field
    }

    // 从宿主推导默认样式，并把文本和状态重置为空
    fn common_init(&mut self) {
        self.style = SuffixStyle::derive_from(self.host.font(), self.host.text_color());
        self.host.set_text("");
        self.reconciler.reset();
        self.update_placeholder();
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn text(&self) -> &str {
        self.host.text()
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn placeholder(&self) -> &AnnotatedString {
        &self.placeholder
    }

    pub const fn suffix_style(&self) -> SuffixStyle {
        self.style
    }

    pub const fn typing_state(&self) -> TypingState {
        self.reconciler.typing_state()
    }

    pub fn previous_text(&self) -> &str {
        self.reconciler.previous_text()
    }

    // 设置后缀。已有带后缀的文本时，把旧后缀换成新后缀。
    pub fn set_suffix(&mut self, suffix: &str) {
        if suffix != self.suffix && self.typing_state() == TypingState::Typed {
            let text = reconciler::swap_suffix(self.host.text(), &self.suffix, suffix);
            info!("suffix changed {:?} -> {suffix:?}", self.suffix);
            self.reconciler.replace_suffix(&self.suffix, suffix);
            self.suffix = suffix.to_string();
            self.render_text(&text);
            caret::go_to_beginning_of_suffix(&mut self.host, &self.suffix);
        } else {
            self.suffix = suffix.to_string();
            self.restyle_text();
        }
        self.update_placeholder();
    }

    pub fn set_suffix_font(&mut self, font: Font) {
        self.set_suffix_style(SuffixStyle { font, ..self.style });
    }

    pub fn set_suffix_color(&mut self, color: Color) {
        self.set_suffix_style(SuffixStyle { color, ..self.style });
    }

    pub fn set_suffix_style(&mut self, style: SuffixStyle) {
        debug!("suffix style {style:?}");
        self.style = style;
        self.update_placeholder();
        self.restyle_text();
    }

    // 设置提示文本；宿主实际显示的占位符为 提示 + 后缀
    pub fn set_hint(&mut self, hint: Option<&str>) {
        self.hint = hint.map(str::to_string);
        self.update_placeholder();
    }

    /// 宿主在每次用户编辑后调用。
    /// 执行后文本要么为空，要么以后缀结尾。
    pub fn text_changed(&mut self) {
        match self.reconciler.text_changed(self.host.text(), &self.suffix) {
            Reconciliation::Idle | Reconciliation::Accept => {}
            Reconciliation::Park(text) | Reconciliation::Restore(text) => {
                self.render_text(&text);
                caret::go_to_beginning_of_suffix(&mut self.host, &self.suffix);
            }
            Reconciliation::Clear => self.host.set_text(""),
        }
    }

    // 宿主在光标移动后调用：光标不得进入后缀
    pub fn selection_changed(&mut self) {
        if self.typing_state() == TypingState::Typed
            && caret::clamp_before_suffix(&mut self.host, &self.suffix)
        {
            debug!("caret moved out of the suffix");
        }
    }

    fn update_placeholder(&mut self) {
        self.placeholder = compose_placeholder(self.hint.as_deref(), &self.suffix, self.style);
        self.host.set_attributed_placeholder(self.placeholder.clone());
    }

    fn render_text(&mut self, text: &str) {
        self.host
            .set_attributed_text(styled_with_suffix(text, &self.suffix, self.style));
    }

    // 用当前样式重新渲染已输入的文本，保留光标位置
    fn restyle_text(&mut self) {
        if self.typing_state() != TypingState::Typed {
            return;
        }
        let selection = self.host.selection();
        let text = self.host.text().to_string();
        self.render_text(&text);
        self.host.set_selection(selection);
        caret::clamp_before_suffix(&mut self.host, &self.suffix);
    }
}
