//! Утилиты для sqltoken

use crate::common::constants::*;

/// Закрывающая кавычка для открывающей
///
/// `[` закрывается `]`, остальные кавычки закрываются сами собой.
pub fn matching_end_quote(open: char) -> char {
    match open {
        '[' => ']',
        other => other,
    }
}

/// Ширина символа в визуальных колонках
pub fn visual_width(ch: char) -> usize {
    if ch == '\t' {
        TAB_WIDTH
    } else {
        1
    }
}
