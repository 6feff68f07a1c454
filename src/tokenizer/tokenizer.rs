//! Токенизатор SQL
//!
//! Преобразует поток символов в упорядоченную последовательность токенов.
//! Пробелы и комментарии не отбрасываются: токены идут подряд и полностью
//! покрывают входные данные. При ошибке разбор останавливается, а уже
//! разобранные токены возвращаются вместе с ошибкой.

use crate::common::constants::STRING_QUOTE;
use crate::common::{Result, TokenizeError};
use crate::dialect::Dialect;
use crate::tokenizer::cursor::Cursor;
use crate::tokenizer::source::{
    iter_chars, str_chars, CharSource, IterChars, ReadChars, StrChars,
};
use crate::tokenizer::token::{Position, Token, TokenKind, TokenValue};
use std::io::Read;

/// Состояние токенизатора
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    Done,
}

/// Лексический анализатор SQL
///
/// Экземпляр владеет источником символов и курсором; один экземпляр
/// выполняет ровно один проход по входным данным.
pub struct Tokenizer<'d, I> {
    /// Диалект: символы идентификаторов и ключевые слова
    pub(crate) dialect: &'d dyn Dialect,
    /// Входные символы
    pub(crate) source: CharSource<I>,
    /// Текущая позиция
    pub(crate) cursor: Cursor,
    state: ScanState,
}

impl<'a, 'd> Tokenizer<'d, StrChars<'a>> {
    /// Создает токенизатор для строки
    pub fn new(input: &'a str, dialect: &'d dyn Dialect) -> Self {
        Self::with_source(str_chars(input), dialect)
    }
}

impl<'d, R: Read> Tokenizer<'d, ReadChars<R>> {
    /// Создает токенизатор, читающий UTF-8 из потока
    pub fn from_reader(reader: R, dialect: &'d dyn Dialect) -> Self {
        Self::with_source(ReadChars::new(reader), dialect)
    }
}

impl<'d, C: Iterator<Item = char>> Tokenizer<'d, IterChars<C>> {
    /// Создает токенизатор для произвольной последовательности символов
    pub fn from_chars<T>(chars: T, dialect: &'d dyn Dialect) -> Self
    where
        T: IntoIterator<IntoIter = C, Item = char>,
    {
        Self::with_source(iter_chars(chars.into_iter()), dialect)
    }
}

impl<'d, I> Tokenizer<'d, I>
where
    I: Iterator<Item = Result<char>>,
{
    /// Создает токенизатор для источника, который может вернуть ошибку чтения
    pub fn with_source(chars: I, dialect: &'d dyn Dialect) -> Self {
        Self {
            dialect,
            source: CharSource::new(chars),
            cursor: Cursor::new(),
            state: ScanState::Scanning,
        }
    }

    /// Первая еще не потребленная позиция
    ///
    /// После успешного разбора - позиция конца входных данных.
    pub fn pos(&self) -> Position {
        self.cursor.position()
    }

    /// Разбор завершен (конец входных данных или ошибка)
    pub fn is_done(&self) -> bool {
        self.state == ScanState::Done
    }

    /// Разбирает все оставшиеся входные данные
    pub fn tokenize(&mut self) -> std::result::Result<Vec<Token>, TokenizeError> {
        log::debug!("Начало токенизации (диалект: {})", self.dialect.name());
        let mut tokens = Vec::new();

        loop {
            match self.next_token() {
                Ok(Some(token)) => tokens.push(token),
                Ok(None) => break,
                Err(error) => {
                    log::debug!(
                        "Токенизация остановлена на {}: {} (разобрано токенов: {})",
                        self.pos(),
                        error,
                        tokens.len()
                    );
                    return Err(TokenizeError::new(error, tokens));
                }
            }
        }

        log::debug!(
            "Токенизация завершена: {} токенов, конечная позиция {}",
            tokens.len(),
            self.pos()
        );
        Ok(tokens)
    }

    /// Возвращает следующий токен или `None` в конце входных данных
    ///
    /// После ошибки токенизатор переходит в завершенное состояние и больше
    /// не возвращает токенов.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        if self.state == ScanState::Done {
            return Ok(None);
        }

        match self.scan_token() {
            Ok(Some(token)) => {
                log::trace!("{}", token);
                Ok(Some(token))
            }
            Ok(None) => {
                self.state = ScanState::Done;
                Ok(None)
            }
            Err(error) => {
                self.state = ScanState::Done;
                Err(error)
            }
        }
    }

    fn scan_token(&mut self) -> Result<Option<Token>> {
        let ch = match self.source.peek()? {
            Some(ch) => ch,
            None => return Ok(None),
        };

        let token = match ch {
            ' ' | '\t' | '\n' | '\r' => self.read_whitespace()?,
            STRING_QUOTE => self.read_string(TokenKind::SingleQuotedString)?,
            'N' | 'n' if self.source.peek_nth(1)? == Some(STRING_QUOTE) => {
                self.read_string(TokenKind::NationalStringLiteral)?
            }
            ch if self.dialect.is_delimited_identifier_start(ch) => {
                self.read_delimited_identifier(ch)?
            }
            ch if self.dialect.is_identifier_start(ch) => self.read_word()?,
            '0'..='9' => self.read_number()?,
            '-' if self.source.peek_nth(1)? == Some('-') => self.read_line_comment()?,
            '/' if self.source.peek_nth(1)? == Some('*') => self.read_block_comment()?,
            ch => self.read_operator(ch)?,
        };

        Ok(Some(token))
    }

    /// Потребляет символ и сдвигает курсор
    pub(crate) fn consume(&mut self) -> Result<Option<char>> {
        let next = self.source.next_char()?;
        if let Some(ch) = next {
            self.cursor.advance(ch);
        }
        Ok(next)
    }

    /// Потребляет символ, если он равен ожидаемому
    pub(crate) fn consume_if(&mut self, expected: char) -> Result<bool> {
        if self.source.peek()? == Some(expected) {
            self.consume()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Токен от `from` до текущей позиции
    pub(crate) fn finish(&self, kind: TokenKind, value: impl Into<TokenValue>, from: Position) -> Token {
        Token::new(kind, value, from, self.pos())
    }
}

impl<'d, I> Iterator for Tokenizer<'d, I>
where
    I: Iterator<Item = Result<char>>,
{
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
