//! Общие утилиты для тестирования

use crate::dialect::{Dialect, GenericSqlDialect};
use crate::tokenizer::{Position, Token, TokenKind, Tokenizer, Word};

/// Включает логирование в тестах (повторный вызов безопасен)
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Разбирает SQL обобщенным диалектом, ошибки приводят к панике
pub fn tokenize(sql: &str) -> Vec<Token> {
    tokenize_with(sql, &GenericSqlDialect)
}

/// Разбирает SQL заданным диалектом, ошибки приводят к панике
pub fn tokenize_with(sql: &str, dialect: &dyn Dialect) -> Vec<Token> {
    init_test_logger();
    match Tokenizer::new(sql, dialect).tokenize() {
        Ok(tokens) => tokens,
        Err(err) => panic!("tokenize({:?}) failed: {}", sql, err),
    }
}

/// Токен с текстовым значением
pub fn text(kind: TokenKind, value: &str, from: (usize, usize), to: (usize, usize)) -> Token {
    Token::new(kind, value, pos(from), pos(to))
}

/// Токен-слово
pub fn word(
    value: &str,
    keyword: Option<&str>,
    quote_style: Option<char>,
    from: (usize, usize),
    to: (usize, usize),
) -> Token {
    let word = Word {
        value: value.to_string(),
        keyword: keyword.map(str::to_string),
        quote_style,
    };
    Token::new(TokenKind::Word, word, pos(from), pos(to))
}

pub fn pos((line, column): (usize, usize)) -> Position {
    Position::new(line, column)
}

/// Виды токенов без пробелов
pub fn kinds_without_whitespace(tokens: &[Token]) -> Vec<TokenKind> {
    tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .map(|t| t.kind)
        .collect()
}

/// Проверяет, что токены идут подряд без разрывов
pub fn assert_contiguous(tokens: &[Token], end: Position) {
    let mut expected = Position::start();
    for token in tokens {
        assert_eq!(token.from, expected, "gap before {}", token);
        assert!(token.from <= token.to, "token goes backwards: {}", token);
        expected = token.to;
    }
    assert_eq!(expected, end, "last token does not end at the final position");
}
