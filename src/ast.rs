// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::{range::Range, token::Punctuator};

/// Expression tree of the calculator.
///
/// Grouping parentheses are not kept in the tree, the nesting of the
/// nodes alone determines the evaluation order.
///
/// The `Range` of `Binary` and `Unary` nodes is the range of the operator token.
#[derive(Debug, PartialEq)]
pub enum Expression {
    Number(i64, Range),
    Binary(BinaryOperator, Range, Box<Expression>, Box<Expression>),
    Unary(UnaryOperator, Range, Box<Expression>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BinaryOperator {
    // Arithmetic operators
    Add,      // '+'
    Subtract, // '-'
    Multiply, // '*'
    Divide,   // '/'
    Modulo,   // '%'

    // Bitwise operators
    BitwiseAnd, // '&'
    BitwiseOr,  // '|'
    BitwiseXor, // '^'
    ShiftLeft,  // '<<'
    ShiftRight, // '>>' (arithmetic shift)
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum UnaryOperator {
    Minus,      // '-', negation
    BitwiseNot, // '~'
}

impl TryFrom<Punctuator> for BinaryOperator {
    type Error = Punctuator;

    fn try_from(punctuator: Punctuator) -> Result<Self, Self::Error> {
        let operator = match punctuator {
            Punctuator::Add => BinaryOperator::Add,
            Punctuator::Subtract => BinaryOperator::Subtract,
            Punctuator::Multiply => BinaryOperator::Multiply,
            Punctuator::Divide => BinaryOperator::Divide,
            Punctuator::Modulo => BinaryOperator::Modulo,
            Punctuator::BitwiseAnd => BinaryOperator::BitwiseAnd,
            Punctuator::BitwiseOr => BinaryOperator::BitwiseOr,
            Punctuator::BitwiseXor => BinaryOperator::BitwiseXor,
            Punctuator::ShiftLeft => BinaryOperator::ShiftLeft,
            Punctuator::ShiftRight => BinaryOperator::ShiftRight,
            Punctuator::BitwiseNot => return Err(punctuator),
        };
        Ok(operator)
    }
}

impl TryFrom<Punctuator> for UnaryOperator {
    type Error = Punctuator;

    fn try_from(punctuator: Punctuator) -> Result<Self, Self::Error> {
        match punctuator {
            Punctuator::Subtract => Ok(UnaryOperator::Minus),
            Punctuator::BitwiseNot => Ok(UnaryOperator::BitwiseNot),
            _ => Err(punctuator),
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            // Arithmetic operators
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            // Bitwise operators
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::BitwiseXor => "^",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
        };
        f.write_str(symbol)
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            UnaryOperator::Minus => "-",
            UnaryOperator::BitwiseNot => "~",
        };
        f.write_str(symbol)
    }
}
