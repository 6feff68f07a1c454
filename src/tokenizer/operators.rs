//! Операторы и пунктуация
//!
//! Выбор по самому длинному совпадению: сначала проверяются двухсимвольные
//! операторы, затем одиночные символы. `--` и `/*` сюда не попадают,
//! их раньше перехватывают читатели комментариев.

use crate::tokenizer::token::TokenKind;

/// Двухсимвольные операторы в порядке проверки
const TWO_CHAR_OPERATORS: &[(char, char, TokenKind)] = &[
    ('<', '=', TokenKind::LtEq),
    ('<', '>', TokenKind::Neq),
    ('>', '=', TokenKind::GtEq),
    ('!', '=', TokenKind::Neq),
    (':', ':', TokenKind::DoubleColon),
];

/// Односимвольные операторы и разделители
const SINGLE_CHAR_OPERATORS: &[(char, TokenKind)] = &[
    ('<', TokenKind::Lt),
    ('>', TokenKind::Gt),
    ('=', TokenKind::Eq),
    ('+', TokenKind::Plus),
    ('-', TokenKind::Minus),
    ('*', TokenKind::Mult),
    ('/', TokenKind::Div),
    ('%', TokenKind::Mod),
    (':', TokenKind::Colon),
    (';', TokenKind::Semicolon),
    (',', TokenKind::Comma),
    ('.', TokenKind::Period),
    ('\\', TokenKind::Backslash),
    ('(', TokenKind::LParen),
    (')', TokenKind::RParen),
    ('[', TokenKind::LBracket),
    (']', TokenKind::RBracket),
    ('{', TokenKind::LBrace),
    ('}', TokenKind::RBrace),
    ('&', TokenKind::Ampersand),
];

/// Подбирает оператор по текущему и следующему символу
///
/// Возвращает вид токена и число символов, которые он занимает (1 или 2).
pub fn match_operator(first: char, second: Option<char>) -> Option<(TokenKind, usize)> {
    if let Some(second) = second {
        let two = TWO_CHAR_OPERATORS
            .iter()
            .find(|(a, b, _)| *a == first && *b == second);
        if let Some((_, _, kind)) = two {
            return Some((*kind, 2));
        }
    }

    SINGLE_CHAR_OPERATORS
        .iter()
        .find(|(ch, _)| *ch == first)
        .map(|(_, kind)| (*kind, 1))
}
