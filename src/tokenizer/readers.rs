// Методы чтения отдельных видов токенов
//
// Каждый метод вызывается, когда курсор стоит на первом символе токена,
// и возвращает готовый токен либо ошибку.

use crate::common::constants::{ESCAPE_CHAR, STRING_QUOTE};
use crate::common::utils::matching_end_quote;
use crate::common::{Error, Result};
use crate::tokenizer::operators::match_operator;
use crate::tokenizer::token::{Token, TokenKind};
use crate::tokenizer::tokenizer::Tokenizer;
use crate::tokenizer::word::classify_word;

/// Категория пробельных символов; серия пробелов не смешивает категории
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Whitespace {
    Space,
    Tab,
    Newline,
}

impl Whitespace {
    fn of(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Whitespace::Space),
            '\t' => Some(Whitespace::Tab),
            '\n' | '\r' => Some(Whitespace::Newline),
            _ => None,
        }
    }
}

impl<'d, I> Tokenizer<'d, I>
where
    I: Iterator<Item = Result<char>>,
{
    /// Читает серию пробельных символов одной категории
    ///
    /// `\r\n` и одиночный `\r` записываются в значение как `\n`.
    pub(crate) fn read_whitespace(&mut self) -> Result<Token> {
        let from = self.pos();
        let mut value = String::new();
        let mut category = None;
        let mut prev = None;

        while let Some(ch) = self.source.peek()? {
            let current = Whitespace::of(ch);
            if current.is_none() || (category.is_some() && current != category) {
                break;
            }
            category = current;
            self.consume()?;

            match ch {
                '\r' => value.push('\n'),
                '\n' if prev == Some('\r') => {}
                other => value.push(other),
            }
            prev = Some(ch);
        }

        Ok(self.finish(TokenKind::Whitespace, value, from))
    }

    /// Читает строку в одинарных кавычках или национальную строку `N'...'`
    ///
    /// `''` внутри строки означает одну кавычку. Если диалект поддерживает
    /// экранирование, `\'` и `\\` дают `'` и `\`, прочие `\x` остаются как есть.
    pub(crate) fn read_string(&mut self, kind: TokenKind) -> Result<Token> {
        let from = self.pos();
        if kind == TokenKind::NationalStringLiteral {
            // N или n
            self.consume()?;
        }
        self.consume()?;

        let mut value = String::new();
        loop {
            match self.consume()? {
                None => return Err(Error::UnterminatedString { from, to: self.pos() }),
                Some(STRING_QUOTE) => {
                    if self.consume_if(STRING_QUOTE)? {
                        value.push(STRING_QUOTE);
                    } else {
                        break;
                    }
                }
                Some(ESCAPE_CHAR) if self.dialect.supports_backslash_escape() => match self.consume()? {
                    None => return Err(Error::UnterminatedString { from, to: self.pos() }),
                    Some(escaped @ (STRING_QUOTE | ESCAPE_CHAR)) => value.push(escaped),
                    Some(other) => {
                        value.push(ESCAPE_CHAR);
                        value.push(other);
                    }
                },
                Some(ch) => value.push(ch),
            }
        }

        let token = self.finish(kind, value, from);
        if self.dialect.supports_backslash_escape() {
            return Ok(token.with_escape(ESCAPE_CHAR));
        }
        Ok(token)
    }

    /// Читает идентификатор в кавычках (`"..."`, `` `...` ``, `[...]`)
    pub(crate) fn read_delimited_identifier(&mut self, open: char) -> Result<Token> {
        let from = self.pos();
        let close = matching_end_quote(open);
        self.consume()?;

        let mut value = String::new();
        loop {
            match self.consume()? {
                None => return Err(Error::UnterminatedQuotedIdentifier { from, to: self.pos() }),
                Some(ch) if ch == close => break,
                Some(ch) => value.push(ch),
            }
        }

        let word = classify_word(self.dialect, value, Some(open));
        Ok(self.finish(TokenKind::Word, word, from))
    }

    /// Читает идентификатор или ключевое слово
    pub(crate) fn read_word(&mut self) -> Result<Token> {
        let from = self.pos();
        let mut value = String::new();

        if let Some(first) = self.consume()? {
            value.push(first);
        }
        while let Some(ch) = self.source.peek()? {
            if !self.dialect.is_identifier_part(ch) {
                break;
            }
            self.consume()?;
            value.push(ch);
        }

        let word = classify_word(self.dialect, value, None);
        Ok(self.finish(TokenKind::Word, word, from))
    }

    /// Читает число: цифры и, возможно, дробную часть
    ///
    /// Точка входит в число только если за ней следует цифра. Знак и
    /// экспонента не поддерживаются.
    pub(crate) fn read_number(&mut self) -> Result<Token> {
        let from = self.pos();
        let mut value = String::new();

        self.read_digits(&mut value)?;
        let has_fraction = self.source.peek()? == Some('.')
            && self.source.peek_nth(1)?.map_or(false, |ch| ch.is_ascii_digit());
        if has_fraction {
            self.consume()?;
            value.push('.');
            self.read_digits(&mut value)?;
        }

        Ok(self.finish(TokenKind::Number, value, from))
    }

    fn read_digits(&mut self, value: &mut String) -> Result<()> {
        while let Some(ch) = self.source.peek()? {
            if !ch.is_ascii_digit() {
                break;
            }
            self.consume()?;
            value.push(ch);
        }
        Ok(())
    }

    /// Читает однострочный комментарий `--` до конца строки
    ///
    /// Перевод строки в комментарий не входит.
    pub(crate) fn read_line_comment(&mut self) -> Result<Token> {
        let from = self.pos();
        self.consume()?;
        self.consume()?;

        let mut value = String::new();
        while let Some(ch) = self.source.peek()? {
            if ch == '\n' || ch == '\r' {
                break;
            }
            self.consume()?;
            value.push(ch);
        }

        Ok(self.finish(TokenKind::Comment, value, from))
    }

    /// Читает блочный комментарий до первого `*/`
    ///
    /// Комментарии не вкладываются.
    pub(crate) fn read_block_comment(&mut self) -> Result<Token> {
        let from = self.pos();
        self.consume()?;
        self.consume()?;

        let mut value = String::new();
        loop {
            match self.consume()? {
                None => return Err(Error::UnterminatedComment { from, to: self.pos() }),
                Some('*') if self.consume_if('/')? => break,
                Some(ch) => value.push(ch),
            }
        }

        Ok(self.finish(TokenKind::Comment, value, from))
    }

    /// Читает оператор или разделитель по самому длинному совпадению
    pub(crate) fn read_operator(&mut self, first: char) -> Result<Token> {
        let from = self.pos();
        let second = self.source.peek_nth(1)?;

        let (kind, width) = match_operator(first, second).ok_or(Error::InvalidCharacter {
            ch: first,
            position: from,
        })?;

        let mut value = String::with_capacity(width);
        for _ in 0..width {
            if let Some(ch) = self.consume()? {
                value.push(ch);
            }
        }

        Ok(self.finish(kind, value, from))
    }
}
