// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{Display, Write};

use crate::ast::{Expression, UnaryOperator};

/// Writes the fully parenthesized text of the expression,
/// e.g. `2+3*4` is written as `(2 + (3 * 4))`.
pub fn print_expression<W: Write>(writer: &mut W, expression: &Expression) -> std::fmt::Result {
    match expression {
        Expression::Number(number, _) => write!(writer, "{number}"),
        Expression::Binary(operator, _, left, right) => {
            write!(writer, "(")?;
            print_expression(writer, left)?;
            write!(writer, " {operator} ")?;
            print_expression(writer, right)?;
            write!(writer, ")")
        }
        Expression::Unary(operator, _, exp) => {
            write!(writer, "({operator}")?;
            print_expression(writer, exp)?;
            write!(writer, ")")
        }
    }
}

/// Writes the expression in postfix (reverse Polish) notation,
/// e.g. `2+3*4` is written as `2 3 4 * +`.
///
/// Unary minus is written as `neg` so that it can not be confused with subtraction.
pub fn print_postfix<W: Write>(writer: &mut W, expression: &Expression) -> std::fmt::Result {
    match expression {
        Expression::Number(number, _) => write!(writer, "{number}"),
        Expression::Binary(operator, _, left, right) => {
            print_postfix(writer, left)?;
            write!(writer, " ")?;
            print_postfix(writer, right)?;
            write!(writer, " {operator}")
        }
        Expression::Unary(operator, _, exp) => {
            print_postfix(writer, exp)?;
            match operator {
                UnaryOperator::Minus => write!(writer, " neg"),
                UnaryOperator::BitwiseNot => write!(writer, " {operator}"),
            }
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        print_expression(f, self)
    }
}

pub fn print_to_string(expression: &Expression) -> String {
    expression.to_string()
}

/// Displays the wrapped expression in postfix notation, see `print_postfix`.
pub struct Postfix<'a>(pub &'a Expression);

impl Display for Postfix<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        print_postfix(f, self.0)
    }
}

pub fn print_postfix_to_string(expression: &Expression) -> String {
    Postfix(expression).to_string()
}
