use crate::prelude::*;
use std::io::Error;

pub trait UIComponent {
    // 标记此 UI 组件需要重绘（或不需要）
    fn set_needs_redraw(&mut self, value: bool);
    fn needs_redraw(&self) -> bool;

    // 更新尺寸并标记为需要重绘
    fn resize(&mut self, size: Size) {
        self.set_size(size);
        self.set_needs_redraw(true);
    }
    fn set_size(&mut self, size: Size);

    // 需要重绘时绘制此组件
    fn render(&mut self, origin_row: RowIdx) {
        if !self.needs_redraw() {
            return;
        }
        match self.draw(origin_row) {
            Ok(()) => self.set_needs_redraw(false),
            Err(err) => {
                #[cfg(debug_assertions)]
                {
                    panic!("无法渲染组件: {err:?}");
                }
                #[cfg(not(debug_assertions))]
                {
                    log::warn!("无法渲染组件: {err:?}");
                }
            }
        }
    }
    fn draw(&mut self, origin_row: RowIdx) -> Result<(), Error>;
}
