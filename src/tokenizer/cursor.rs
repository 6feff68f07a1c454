//! Курсор позиции
//!
//! Отслеживает визуальную позицию (строка, колонка) по мере потребления
//! символов. `\r\n` и одиночный `\r` считаются одним переводом строки.

use crate::common::utils::visual_width;
use crate::tokenizer::token::Position;

/// Текущая позиция токенизатора
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    position: Position,
    /// Последний потребленный символ был `\r`
    after_cr: bool,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Текущая позиция
    pub fn position(&self) -> Position {
        self.position
    }

    /// Учитывает потребленный символ
    pub fn advance(&mut self, ch: char) {
        let after_cr = std::mem::replace(&mut self.after_cr, ch == '\r');

        match ch {
            '\n' if after_cr => {}
            '\n' | '\r' => {
                self.position.line += 1;
                self.position.column = 0;
            }
            other => self.position.column += visual_width(other),
        }
    }

    /// Учитывает последовательность потребленных символов
    pub fn advance_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.advance(ch);
        }
    }
}
