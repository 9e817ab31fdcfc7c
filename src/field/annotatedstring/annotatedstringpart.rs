use super::super::SuffixStyle;

// 带样式字符串的一部分，style 为 None 表示按输入框默认样式显示
#[derive(Debug, Eq, PartialEq)]
pub struct AnnotatedStringPart<'a> {
    pub string: &'a str,
    pub style: Option<SuffixStyle>,
}
