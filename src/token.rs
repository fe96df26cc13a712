// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::range::Range;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Integer(i64),
    Punctuator(Punctuator),
    ParenthesisOpen,  // '('
    ParenthesisClose, // ')'

    // Always the last token of a stream, positioned just past the last character.
    End,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Punctuator {
    // Arithmetic operators
    Add,      // '+'
    Subtract, // '-', also the unary `Minus` operator
    Multiply, // '*'
    Divide,   // '/'
    Modulo,   // '%'

    // Bitwise operators
    BitwiseAnd, // '&'
    BitwiseOr,  // '|'
    BitwiseXor, // '^'
    BitwiseNot, // '~'
    ShiftLeft,  // '<<'
    ShiftRight, // '>>'
}

impl Punctuator {
    /// Maps a single-character lexeme to its punctuator.
    ///
    /// The shift operators are two characters long and are matched by the lexer.
    pub fn from_char(c: char) -> Option<Self> {
        let punctuator = match c {
            '+' => Punctuator::Add,
            '-' => Punctuator::Subtract,
            '*' => Punctuator::Multiply,
            '/' => Punctuator::Divide,
            '%' => Punctuator::Modulo,
            '&' => Punctuator::BitwiseAnd,
            '|' => Punctuator::BitwiseOr,
            '^' => Punctuator::BitwiseXor,
            '~' => Punctuator::BitwiseNot,
            _ => return None,
        };
        Some(punctuator)
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Punctuator::Add => "+",
            Punctuator::Subtract => "-",
            Punctuator::Multiply => "*",
            Punctuator::Divide => "/",
            Punctuator::Modulo => "%",
            Punctuator::BitwiseAnd => "&",
            Punctuator::BitwiseOr => "|",
            Punctuator::BitwiseXor => "^",
            Punctuator::BitwiseNot => "~",
            Punctuator::ShiftLeft => "<<",
            Punctuator::ShiftRight => ">>",
        };
        write!(f, "{}", symbol)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Integer(value) => write!(f, "{}", value),
            Token::Punctuator(punctuator) => write!(f, "{}", punctuator),
            Token::ParenthesisOpen => write!(f, "("),
            Token::ParenthesisClose => write!(f, ")"),
            Token::End => write!(f, "<end>"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct TokenWithRange {
    pub token: Token,
    pub range: Range,
}

impl TokenWithRange {
    pub fn new(token: Token, range: Range) -> Self {
        Self { token, range }
    }
}
