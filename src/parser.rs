// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::{BinaryOperator, Expression, UnaryOperator},
    error::ParseError,
    position::Position,
    range::Range,
    token::{Punctuator, Token, TokenWithRange},
};

/// Deepest nesting of parentheses and operators accepted by the parser.
///
/// Both the number of open parentheses and unary operators around a token
/// and the depth of the resulting tree are limited, so that evaluating and
/// printing the tree stays within a small, fixed amount of stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Builds the expression tree from the output of `lex_from_str`.
///
/// The token list is expected to end with `Token::End`. A list without it
/// is treated as if it ended right after its last token.
pub fn parse_from_tokens(token_with_ranges: &[TokenWithRange]) -> Result<Expression, ParseError> {
    let mut parser = ExpressionParser::new(token_with_ranges);

    let (expression, _) = parser.parse_expression()?;

    match parser.peek_token_with_range() {
        None
        | Some(TokenWithRange {
            token: Token::End, ..
        }) => Ok(expression),
        Some(TokenWithRange {
            token: Token::ParenthesisClose,
            range,
        }) => Err(ParseError::UnmatchedParenthesis(*range)),
        Some(TokenWithRange { range, .. }) => Err(ParseError::UnexpectedToken(*range)),
    }
}

// An expression and the depth of its tree, a number has depth 0.
type ExpressionWithDepth = (Expression, usize);

struct ExpressionParser<'a> {
    upstream: Peekable<Iter<'a, TokenWithRange>>,

    // The range of the last consumed token.
    last_range: Option<Range>,

    // Open parentheses and unary operators around the current token.
    nesting: usize,
}

impl<'a> ExpressionParser<'a> {
    fn new(token_with_ranges: &'a [TokenWithRange]) -> Self {
        Self {
            upstream: token_with_ranges.iter().peekable(),
            last_range: None,
            nesting: 0,
        }
    }

    fn next_token_with_range(&mut self) -> Option<&'a TokenWithRange> {
        let token_with_range = self.upstream.next()?;
        self.last_range = Some(token_with_range.range);
        Some(token_with_range)
    }

    fn peek_token_with_range(&mut self) -> Option<&'a TokenWithRange> {
        self.upstream.peek().copied()
    }

    fn peek_punctuator(&mut self) -> Option<Punctuator> {
        match self.peek_token_with_range() {
            Some(TokenWithRange {
                token: Token::Punctuator(punctuator),
                ..
            }) => Some(*punctuator),
            _ => None,
        }
    }

    fn unexpected_end_of_input(&self) -> ParseError {
        // The same position the lexer gives `Token::End`, just past the last token.
        let index = match self.last_range {
            Some(range) => range.end_included.index + 1,
            None => 0,
        };
        ParseError::UnexpectedEndOfInput(Position::new(index))
    }

    fn enter_nesting(&mut self, range: Range) -> Result<(), ParseError> {
        if self.nesting == MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep(range));
        }
        self.nesting += 1;
        Ok(())
    }

    fn leave_nesting(&mut self) {
        self.nesting -= 1;
    }
}

/**
 * Calculator Operator Precedence
 * ------------------------------
 *
 * Operators are listed top to bottom, in descending precedence.
 * All binary operators are left-to-right associative.
 *
 * 1: `()` Grouping, integer literal
 * 2: `- ~` Unary minus and bitwise NOT (right-to-left)
 * 3: `* / %` Multiplication, division, and remainder
 * 4: `+ -` Addition and subtraction
 * 5: `<< >>` Bitwise left shift and right shift
 * 6: `&` Bitwise AND
 * 7: `^` Bitwise XOR (exclusive or)
 * 8: `|` Bitwise OR (inclusive or)
 *
 * This matches the C language with the relational and logical levels removed, see:
 * https://en.cppreference.com/w/c/language/operator_precedence.html
 */

impl ExpressionParser<'_> {
    fn parse_expression(&mut self) -> Result<ExpressionWithDepth, ParseError> {
        self.parse_bitwise_or_expression()
    }

    fn parse_bitwise_or_expression(&mut self) -> Result<ExpressionWithDepth, ParseError> {
        self.parse_binary_expression(
            &[BinaryOperator::BitwiseOr],
            ExpressionParser::parse_bitwise_xor_expression,
        )
    }

    fn parse_bitwise_xor_expression(&mut self) -> Result<ExpressionWithDepth, ParseError> {
        self.parse_binary_expression(
            &[BinaryOperator::BitwiseXor],
            ExpressionParser::parse_bitwise_and_expression,
        )
    }

    fn parse_bitwise_and_expression(&mut self) -> Result<ExpressionWithDepth, ParseError> {
        self.parse_binary_expression(
            &[BinaryOperator::BitwiseAnd],
            ExpressionParser::parse_shift_expression,
        )
    }

    fn parse_shift_expression(&mut self) -> Result<ExpressionWithDepth, ParseError> {
        self.parse_binary_expression(
            &[BinaryOperator::ShiftLeft, BinaryOperator::ShiftRight],
            ExpressionParser::parse_additive_expression,
        )
    }

    fn parse_additive_expression(&mut self) -> Result<ExpressionWithDepth, ParseError> {
        self.parse_binary_expression(
            &[BinaryOperator::Add, BinaryOperator::Subtract],
            ExpressionParser::parse_multiplicative_expression,
        )
    }

    fn parse_multiplicative_expression(&mut self) -> Result<ExpressionWithDepth, ParseError> {
        self.parse_binary_expression(
            &[
                BinaryOperator::Multiply,
                BinaryOperator::Divide,
                BinaryOperator::Modulo,
            ],
            ExpressionParser::parse_unary_expression,
        )
    }

    fn parse_binary_expression(
        &mut self,
        expected_operators: &[BinaryOperator],
        next_parse_function: fn(&mut Self) -> Result<ExpressionWithDepth, ParseError>,
    ) -> Result<ExpressionWithDepth, ParseError> {
        let (mut left_expression, mut left_depth) = next_parse_function(self)?;

        while let Some(punctuator) = self.peek_punctuator() {
            let operator = match BinaryOperator::try_from(punctuator) {
                Ok(operator) if expected_operators.contains(&operator) => operator,
                _ => break, // Not an operator of this level.
            };

            // Consume the operator token.
            let Some(TokenWithRange { range, .. }) = self.next_token_with_range() else {
                return Err(self.unexpected_end_of_input());
            };

            // Left-to-right associative: the right-hand side is parsed at the
            // next (higher) level, and the loop folds `a - b - c` into `((a - b) - c)`.
            let (right_expression, right_depth) = next_parse_function(self)?;

            // A long chain such as `1 + 1 + ... + 1` builds a deep tree
            // without any parentheses.
            let depth = left_depth.max(right_depth) + 1;
            if depth > MAX_NESTING_DEPTH {
                return Err(ParseError::NestingTooDeep(*range));
            }

            left_expression = Expression::Binary(
                operator,
                *range,
                Box::new(left_expression),
                Box::new(right_expression),
            );
            left_depth = depth;
        }

        Ok((left_expression, left_depth))
    }

    fn parse_unary_expression(&mut self) -> Result<ExpressionWithDepth, ParseError> {
        if let Some(punctuator) = self.peek_punctuator() {
            if let Ok(operator) = UnaryOperator::try_from(punctuator) {
                // Consume the unary operator.
                let Some(TokenWithRange { range, .. }) = self.next_token_with_range() else {
                    return Err(self.unexpected_end_of_input());
                };

                // Unary operators nest, e.g. `-~1` is `(-(~1))`.
                self.enter_nesting(*range)?;
                let (operand, operand_depth) = self.parse_unary_expression()?;
                self.leave_nesting();

                let depth = operand_depth + 1;
                if depth > MAX_NESTING_DEPTH {
                    return Err(ParseError::NestingTooDeep(*range));
                }

                return Ok((
                    Expression::Unary(operator, *range, Box::new(operand)),
                    depth,
                ));
            }
        }

        self.parse_primary_expression()
    }

    fn parse_primary_expression(&mut self) -> Result<ExpressionWithDepth, ParseError> {
        let Some(TokenWithRange { token, range }) = self.peek_token_with_range() else {
            return Err(self.unexpected_end_of_input());
        };

        match token {
            Token::Integer(value) => {
                self.next_token_with_range(); // consume the number
                Ok((Expression::Number(*value, *range), 0))
            }
            Token::ParenthesisOpen => {
                let opening_range = *range;
                self.next_token_with_range(); // consume '('

                self.enter_nesting(opening_range)?;
                let inner_expression = self.parse_expression()?;
                self.leave_nesting();

                match self.next_token_with_range() {
                    Some(TokenWithRange {
                        token: Token::ParenthesisClose,
                        ..
                    }) => Ok(inner_expression),
                    None
                    | Some(TokenWithRange {
                        token: Token::End, ..
                    }) => Err(ParseError::UnmatchedParenthesis(opening_range)),
                    Some(TokenWithRange { range, .. }) => {
                        Err(ParseError::UnexpectedToken(*range))
                    }
                }
            }
            Token::End => Err(ParseError::UnexpectedEndOfInput(range.start)),
            Token::ParenthesisClose | Token::Punctuator(_) => {
                Err(ParseError::MissingOperand(*range))
            }
        }
    }
}
