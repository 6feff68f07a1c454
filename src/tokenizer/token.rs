//! Токены SQL токенизатора
//!
//! Определяет позицию в исходном тексте, виды токенов и их значения.
//! Ключевые слова и идентификаторы представлены одним видом `Word`:
//! отличить их можно по наличию нормализованного ключевого слова.

use crate::common::constants::{FIRST_COLUMN, FIRST_LINE, STRING_QUOTE};
use crate::common::utils::matching_end_quote;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Позиция в исходном тексте
///
/// `line` начинается с 1, `column` - визуальная колонка, начинается с 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn start() -> Self {
        Self::new(FIRST_LINE, FIRST_COLUMN)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Слово: идентификатор или ключевое слово
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Текст как в исходнике (регистр сохранен, без кавычек)
    pub value: String,
    /// Каноническое написание ключевого слова в верхнем регистре
    pub keyword: Option<String>,
    /// Символ открывающей кавычки, если слово было в кавычках
    pub quote_style: Option<char>,
}

impl Word {
    pub fn is_keyword(&self) -> bool {
        self.keyword.is_some()
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn is_quoted(&self) -> bool {
        self.quote_style.is_some()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quote_style {
            Some(open) => {
                let close = matching_end_quote(open);
                write!(f, "{}{}{}", open, self.value, close)
            }
            None => write!(f, "{}", self.value),
        }
    }
}

/// Значение токена
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenValue {
    /// Литералы, пунктуация, операторы, пробелы и комментарии
    Text(String),
    /// Идентификаторы и ключевые слова
    Word(Word),
}

impl TokenValue {
    pub fn as_str(&self) -> &str {
        match self {
            TokenValue::Text(text) => text,
            TokenValue::Word(word) => &word.value,
        }
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            TokenValue::Word(word) => Some(word),
            TokenValue::Text(_) => None,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(text: &str) -> Self {
        TokenValue::Text(text.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(text: String) -> Self {
        TokenValue::Text(text)
    }
}

impl From<Word> for TokenValue {
    fn from(word: Word) -> Self {
        TokenValue::Word(word)
    }
}

/// Токен с диапазоном позиций и значением
///
/// `from` - позиция перед первым символом токена, `to` - позиция сразу
/// после последнего. `to` каждого токена совпадает с `from` следующего.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub from: Position,
    pub to: Position,
    /// Символ экранирования, с которым была прочитана строка
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escape: Option<char>,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<TokenValue>, from: Position, to: Position) -> Self {
        Self {
            kind,
            value: value.into(),
            from,
            to,
            escape: None,
        }
    }

    /// Помечает строку как прочитанную с экранированием обратной косой чертой
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = Some(escape);
        self
    }

    pub fn word(&self) -> Option<&Word> {
        self.value.as_word()
    }

    /// Является ли токен заданным ключевым словом (без учета регистра)
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.word()
            .and_then(Word::keyword)
            .map_or(false, |kw| kw.eq_ignore_ascii_case(keyword))
    }

    /// Пробелы и комментарии
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Текст токена в том виде, в каком он записан в SQL
    ///
    /// Для строк и слов в кавычках восстанавливаются кавычки. Кавычка внутри
    /// строки удваивается, а если строка прочитана с экранированием, то
    /// экранируются и кавычка, и сам символ экранирования. Повторный разбор
    /// результата тем же диалектом дает то же значение. Комментарии
    /// возвращаются без разделителей.
    pub fn text(&self) -> String {
        match (&self.kind, &self.value) {
            (_, TokenValue::Word(word)) => word.to_string(),
            (TokenKind::SingleQuotedString, TokenValue::Text(s)) => {
                format!("'{}'", self.quote_literal(s))
            }
            (TokenKind::NationalStringLiteral, TokenValue::Text(s)) => {
                format!("N'{}'", self.quote_literal(s))
            }
            (_, TokenValue::Text(s)) => s.clone(),
        }
    }

    fn quote_literal(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        for ch in value.chars() {
            match self.escape {
                Some(escape) if ch == escape || ch == STRING_QUOTE => {
                    out.push(escape);
                    out.push(ch);
                }
                None if ch == STRING_QUOTE => {
                    out.push(STRING_QUOTE);
                    out.push(STRING_QUOTE);
                }
                _ => out.push(ch),
            }
        }
        out
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({:?}) at {}-{}",
            self.kind,
            self.value.as_str(),
            self.from,
            self.to
        )
    }
}

/// Виды токенов SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // === Пробелы и комментарии ===
    Whitespace,
    Comment,

    // === Слова и литералы ===
    /// Идентификатор или ключевое слово
    Word,
    SingleQuotedString,
    NationalStringLiteral,
    Number,

    // === Разделители ===
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Colon,
    DoubleColon,
    Period,

    // === Операторы ===
    Plus,
    Minus,
    Mult,
    Div,
    Mod,
    Eq,
    /// `!=` или `<>`
    Neq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Backslash,
    Ampersand,
}

impl TokenKind {
    /// Символ пунктуации или оператора; `None` для слов, литералов и пробелов
    ///
    /// Возвращает каноническое написание: для `Neq` это `!=`, даже если в
    /// исходном тексте было `<>`. Исходное написание хранится в `Token::value`.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::DoubleColon => "::",
            TokenKind::Period => ".",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Mult => "*",
            TokenKind::Div => "/",
            TokenKind::Mod => "%",
            TokenKind::Eq => "=",
            TokenKind::Neq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Backslash => "\\",
            TokenKind::Ampersand => "&",
            TokenKind::Whitespace
            | TokenKind::Comment
            | TokenKind::Word
            | TokenKind::SingleQuotedString
            | TokenKind::NationalStringLiteral
            | TokenKind::Number => return None,
        };
        Some(symbol)
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Mult
                | TokenKind::Div
                | TokenKind::Mod
                | TokenKind::Eq
                | TokenKind::Neq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
                | TokenKind::Backslash
                | TokenKind::Ampersand
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Comment => "COMMENT",
            TokenKind::Word => "WORD",
            TokenKind::SingleQuotedString => "STRING",
            TokenKind::NationalStringLiteral => "NATIONAL_STRING",
            TokenKind::Number => "NUMBER",
            other => match other.symbol() {
                Some(symbol) => symbol,
                None => "UNKNOWN",
            },
        };
        write!(f, "{}", name)
    }
}
