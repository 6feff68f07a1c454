//! Источник символов для токенизатора
//!
//! Читает символы последовательно, без перемотки, с заглядыванием вперед
//! не более чем на `MAX_LOOKAHEAD` символов.

use crate::common::constants::MAX_LOOKAHEAD;
use crate::common::{Error, Result};
use std::collections::VecDeque;
use std::io::{self, BufReader, Read};

/// Символы строки в виде источника
pub type StrChars<'a> = std::iter::Map<std::str::Chars<'a>, fn(char) -> Result<char>>;

/// Произвольный итератор символов в виде источника
pub type IterChars<I> = std::iter::Map<I, fn(char) -> Result<char>>;

pub(crate) fn str_chars(input: &str) -> StrChars<'_> {
    input.chars().map(Ok as fn(char) -> Result<char>)
}

pub(crate) fn iter_chars<I: Iterator<Item = char>>(chars: I) -> IterChars<I> {
    chars.map(Ok as fn(char) -> Result<char>)
}

/// Последовательный источник символов с ограниченным заглядыванием вперед
#[derive(Debug)]
pub struct CharSource<I> {
    chars: I,
    lookahead: VecDeque<char>,
}

impl<I> CharSource<I>
where
    I: Iterator<Item = Result<char>>,
{
    pub fn new(chars: I) -> Self {
        Self {
            chars,
            lookahead: VecDeque::with_capacity(MAX_LOOKAHEAD),
        }
    }

    /// Следующий символ без потребления
    pub fn peek(&mut self) -> Result<Option<char>> {
        self.peek_nth(0)
    }

    /// Символ на расстоянии `n` от текущего без потребления
    pub fn peek_nth(&mut self, n: usize) -> Result<Option<char>> {
        debug_assert!(n < MAX_LOOKAHEAD, "lookahead of {} exceeds {}", n + 1, MAX_LOOKAHEAD);

        while self.lookahead.len() <= n {
            match self.chars.next() {
                Some(ch) => self.lookahead.push_back(ch?),
                None => return Ok(None),
            }
        }
        Ok(self.lookahead.get(n).copied())
    }

    /// Потребляет следующий символ
    pub fn next_char(&mut self) -> Result<Option<char>> {
        match self.lookahead.pop_front() {
            Some(ch) => Ok(Some(ch)),
            None => self.chars.next().transpose(),
        }
    }
}

/// Декодирует UTF-8 из потока байтов по одному символу
pub struct ReadChars<R> {
    bytes: io::Bytes<BufReader<R>>,
}

impl<R: Read> ReadChars<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        self.bytes.next().transpose().map_err(Error::from)
    }

    fn decode(&mut self, first: u8) -> Result<char> {
        let width = utf8_width(first);
        if width == 0 {
            return Err(invalid_utf8(first));
        }

        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self.next_byte()?.ok_or_else(|| invalid_utf8(first))?;
        }

        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| invalid_utf8(first))
    }
}

impl<R: Read> Iterator for ReadChars<R> {
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_byte() {
            Ok(Some(first)) => Some(self.decode(first)),
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

/// Длина последовательности UTF-8 по первому байту; 0 для недопустимого байта
fn utf8_width(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn invalid_utf8(first: u8) -> Error {
    Error::Io(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid UTF-8 sequence starting with byte 0x{:02x}", first),
    ))
}
