use unicode_segmentation::UnicodeSegmentation;

use crate::prelude::*;

// 字符串中的字素簇数量
pub fn grapheme_count(string: &str) -> GraphemeIdx {
    string.graphemes(true).count()
}

// 文本是否以 suffix 结尾。按字节比较：后缀开头的组合字符会和前一个字符
// 并成同一个字素，按字素截取末尾会得到错误的结果。
pub fn ends_with_suffix(text: &str, suffix: &str) -> bool {
    text.ends_with(suffix)
}

// 文本末尾后缀的起始字节索引；文本不以 suffix 结尾时返回 None
pub fn suffix_start(text: &str, suffix: &str) -> Option<ByteIdx> {
    text.strip_suffix(suffix).map(str::len)
}

// 光标需要避开的末尾字素数。后缀开头并入前一个字素时，该字素算作输入内容。
pub fn suffix_grapheme_len(text: &str, suffix: &str) -> GraphemeIdx {
    match suffix_start(text, suffix) {
        Some(start) => grapheme_count(text).saturating_sub(grapheme_count(&text[..start])),
        None => grapheme_count(suffix),
    }
}
