// SPDX-License-Identifier: MIT
// Project: decomment
// Description: A program to remove comments from source files.
// File: src/strip.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::stream::Filter;

/// Lexical context of the current input position.
///
/// The pending `/` of a possible comment opener and the pending `*` of a
/// possible block-comment closer are states of their own, so the machine
/// never buffers characters and every (state, char) pair has a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Normal,
    Slash,
    LineComment,
    BlockComment,
    BlockStar,
    StringLiteral,
    StringEscape,
    CharLiteral,
    CharEscape,
}

/// Characters produced by a single transition. Never more than two: the
/// held `/` of a false comment opener plus the character that disproved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    Nothing,
    One(char),
    Two(char, char),
}

/// The transition function. Total over all inputs; consuming a character
/// never fails and never rewinds.
pub fn step(state: State, c: char) -> (State, Emit) {
    use Emit::{Nothing, One, Two};
    match state {
        State::Normal => match c {
            '/' => (State::Slash, Nothing),
            '"' => (State::StringLiteral, One(c)),
            '\'' => (State::CharLiteral, One(c)),
            _ => (State::Normal, One(c)),
        },
        State::Slash => match c {
            '/' => (State::LineComment, Nothing),
            '*' => (State::BlockComment, Nothing),
            '"' => (State::StringLiteral, Two('/', c)),
            '\'' => (State::CharLiteral, Two('/', c)),
            _ => (State::Normal, Two('/', c)),
        },
        State::LineComment => match c {
            '\n' => (State::Normal, One('\n')),
            _ => (State::LineComment, Nothing),
        },
        State::BlockComment => match c {
            '*' => (State::BlockStar, Nothing),
            _ => (State::BlockComment, Nothing),
        },
        State::BlockStar => match c {
            '/' => (State::Normal, Nothing),
            '*' => (State::BlockStar, Nothing),
            _ => (State::BlockComment, Nothing),
        },
        State::StringLiteral => match c {
            '\\' => (State::StringEscape, One(c)),
            '"' => (State::Normal, One(c)),
            _ => (State::StringLiteral, One(c)),
        },
        State::StringEscape => (State::StringLiteral, One(c)),
        State::CharLiteral => match c {
            '\\' => (State::CharEscape, One(c)),
            '\'' => (State::Normal, One(c)),
            _ => (State::CharLiteral, One(c)),
        },
        State::CharEscape => (State::CharLiteral, One(c)),
    }
}

/// Streaming comment stripper. Feed it any number of chunks, then call
/// [`finish`](Stripper::finish) once the input is exhausted so a trailing
/// `/` that never became a comment is written out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stripper {
    state: State,
    line_comments: usize,
    block_comments: usize,
}

impl Stripper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of `//` comments removed so far.
    pub fn line_comments(&self) -> usize {
        self.line_comments
    }

    /// Number of `/* */` comments removed so far (an unterminated one counts).
    pub fn block_comments(&self) -> usize {
        self.block_comments
    }

    pub fn feed_char(&mut self, c: char, out: &mut String) {
        if self.state == State::Slash {
            match c {
                '/' => self.line_comments += 1,
                '*' => self.block_comments += 1,
                _ => {}
            }
        }
        let (next, emit) = step(self.state, c);
        self.state = next;
        match emit {
            Emit::Nothing => {}
            Emit::One(a) => out.push(a),
            Emit::Two(a, b) => {
                out.push(a);
                out.push(b);
            }
        }
    }

    pub fn feed_str(&mut self, input: &str, out: &mut String) {
        for c in input.chars() {
            self.feed_char(c, out);
        }
    }

    /// End-of-input flush. A pending `/` is emitted verbatim since no
    /// comment was formed; every other state ends silently.
    pub fn end(&mut self, out: &mut String) {
        if self.state == State::Slash {
            out.push('/');
            self.state = State::Normal;
        }
    }
}

impl Filter for Stripper {
    fn feed(&mut self, c: char, out: &mut String) {
        self.feed_char(c, out);
    }

    fn finish(&mut self, out: &mut String) {
        self.end(out);
    }
}

/// Strip comments from a whole in-memory buffer.
pub fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut stripper = Stripper::new();
    stripper.feed_str(input, &mut out);
    stripper.end(&mut out);
    out
}

/// Lazy character-by-character form: pulls from `input` only as output is
/// demanded, and flushes the pending slash when `input` runs dry.
pub fn strip_chars<I>(input: I) -> StripChars<I::IntoIter>
where
    I: IntoIterator<Item = char>,
{
    StripChars {
        input: input.into_iter(),
        state: State::Normal,
        pending: None,
        exhausted: false,
    }
}

#[derive(Debug, Clone)]
pub struct StripChars<I> {
    input: I,
    state: State,
    pending: Option<char>,
    exhausted: bool,
}

impl<I: Iterator<Item = char>> Iterator for StripChars<I> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if let Some(c) = self.pending.take() {
            return Some(c);
        }
        loop {
            match self.input.next() {
                Some(c) => {
                    let (next, emit) = step(self.state, c);
                    self.state = next;
                    match emit {
                        Emit::Nothing => continue,
                        Emit::One(a) => return Some(a),
                        Emit::Two(a, b) => {
                            self.pending = Some(b);
                            return Some(a);
                        }
                    }
                }
                None => {
                    if !self.exhausted {
                        self.exhausted = true;
                        if self.state == State::Slash {
                            self.state = State::Normal;
                            return Some('/');
                        }
                    }
                    return None;
                }
            }
        }
    }
}
