use std::{ops::Range, path::PathBuf};

use clap::Parser;
use crossterm::style::Color;
use log::info;
use thiserror::Error;

use crate::field::{Font, ParkedTextField, TextHost};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("未知颜色: {0}（可用颜色名或 #rrggbb）")]
    UnknownColor(String),

    #[error("无效的十六进制颜色: {0}")]
    InvalidHexColor(String),

    #[error("未知字体: {0}（regular|bold|italic|bold-italic|dim）")]
    UnknownFont(String),

    #[error("输入框只有一行，不能包含换行: {0:?}")]
    LineBreak(String),
}

/// 在终端中运行一个带固定后缀的输入框
#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct Config {
    /// 固定在输入内容之后的后缀，例如 "kr"
    #[arg(long, short = 's', default_value = "", value_parser = parse_single_line)]
    pub suffix: String,

    /// 提示文本，显示为 提示 + 后缀
    #[arg(long, value_parser = parse_single_line)]
    pub hint: Option<String>,

    /// 后缀颜色：颜色名或 #rrggbb，默认与文字颜色相同
    #[arg(long, value_parser = parse_color)]
    pub suffix_color: Option<Color>,

    /// 后缀字体：regular|bold|italic|bold-italic|dim，默认为粗体
    #[arg(long, value_parser = parse_font)]
    pub suffix_font: Option<Font>,

    /// 日志文件；日志级别由 RUST_LOG 控制
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    // 把配置应用到输入框上，未指定的样式保留默认值
    pub fn apply<H: TextHost>(&self, field: &mut ParkedTextField<H>) {
        info!("configuring field with {self:?}");
        field.set_suffix(&self.suffix);
        field.set_hint(self.hint.as_deref());
        if let Some(font) = self.suffix_font {
            field.set_suffix_font(font);
        }
        if let Some(color) = self.suffix_color {
            field.set_suffix_color(color);
        }
    }
}

pub fn parse_single_line(value: &str) -> Result<String, ConfigError> {
    if value.contains(['\n', '\r']) {
        return Err(ConfigError::LineBreak(value.to_string()));
    }
    Ok(value.to_string())
}

pub fn parse_font(name: &str) -> Result<Font, ConfigError> {
    match name.to_ascii_lowercase().as_str() {
        "regular" => Ok(Font::Regular),
        "bold" => Ok(Font::Bold),
        "italic" => Ok(Font::Italic),
        "bold-italic" => Ok(Font::BoldItalic),
        "dim" => Ok(Font::Dim),
        _ => Err(ConfigError::UnknownFont(name.to_string())),
    }
}

pub fn parse_color(name: &str) -> Result<Color, ConfigError> {
    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex_color(hex).ok_or_else(|| ConfigError::InvalidHexColor(name.to_string()));
    }
    let color = match name.to_ascii_lowercase().replace('_', "-").as_str() {
        "reset" => Color::Reset,
        "black" => Color::Black,
        "dark-grey" | "dark-gray" => Color::DarkGrey,
        "red" => Color::Red,
        "dark-red" => Color::DarkRed,
        "green" => Color::Green,
        "dark-green" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "dark-yellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "dark-blue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "dark-magenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "dark-cyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        _ => return Err(ConfigError::UnknownColor(name.to_string())),
    };
    Ok(color)
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("green", Ok(Color::Green))]
    #[test_case("Dark_Grey", Ok(Color::DarkGrey))]
    #[test_case("#ff8000", Ok(Color::Rgb { r: 255, g: 128, b: 0 }))]
    #[test_case("#ff80", Err(ConfigError::InvalidHexColor("#ff80".to_string())))]
    #[test_case("#gg0000", Err(ConfigError::InvalidHexColor("#gg0000".to_string())))]
    #[test_case("mauve", Err(ConfigError::UnknownColor("mauve".to_string())))]
    fn parses_colors(name: &str, expected: Result<Color, ConfigError>) {
        assert_eq!(parse_color(name), expected);
    }

    #[test]
    fn parses_fonts() {
        assert_eq!(parse_font("bold-italic"), Ok(Font::BoldItalic));
        assert_eq!(parse_font("DIM"), Ok(Font::Dim));
        assert_eq!(
            parse_font("heavy"),
            Err(ConfigError::UnknownFont("heavy".to_string()))
        );
    }

    #[test]
    fn parses_command_line() {
        let config = Config::try_parse_from([
            "parked-text-field",
            "--suffix",
            "kr",
            "--hint",
            "Amount ",
            "--suffix-color",
            "cyan",
            "--suffix-font",
            "italic",
        ])
        .unwrap();
        assert_eq!(config.suffix, "kr");
        assert_eq!(config.hint.as_deref(), Some("Amount "));
        assert_eq!(config.suffix_color, Some(Color::Cyan));
        assert_eq!(config.suffix_font, Some(Font::Italic));
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn rejects_unknown_font_on_command_line() {
        let result = Config::try_parse_from(["parked-text-field", "--suffix-font", "heavy"]);
        assert!(result.is_err());
    }

    #[test_case("kr", Ok("kr".to_string()))]
    #[test_case("", Ok(String::new()))]
    #[test_case("a\nb", Err(ConfigError::LineBreak("a\nb".to_string())) ; "newline")]
    #[test_case("a\r", Err(ConfigError::LineBreak("a\r".to_string())) ; "carriage return")]
    fn accepts_only_single_line_text(value: &str, expected: Result<String, ConfigError>) {
        assert_eq!(parse_single_line(value), expected);
    }

    #[test]
    fn rejects_multi_line_suffix_on_command_line() {
        let result = Config::try_parse_from(["parked-text-field", "--suffix", "a\nb"]);
        assert!(result.is_err());
        let result = Config::try_parse_from(["parked-text-field", "--hint", "x\ny"]);
        assert!(result.is_err());
    }
}
