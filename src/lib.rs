//! 带固定后缀（“停靠文本”）的单行输入框。
//!
//! [`field`] 是与 UI 工具包无关的核心：状态机、带样式文本和占位符的构造、
//! 光标控制，宿主通过实现 [`field::TextHost`] 接入。[`app`] 提供基于
//! crossterm 的终端宿主和演示程序。

pub mod app;
pub mod config;
pub mod field;
pub mod prelude;
