// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::iter::Peekable;

use crate::{
    error::LexError,
    position::Position,
    range::Range,
    token::{Punctuator, Token, TokenWithRange},
};

/// Splits the expression text into tokens.
///
/// The returned list always ends with a `Token::End` whose position is the
/// character count of `source_text`.
pub fn lex_from_str(source_text: &str) -> Result<Vec<TokenWithRange>, LexError> {
    let mut chars = source_text.chars().enumerate();
    let lexer = Lexer::new(&mut chars);
    lexer.lex()
}

struct Lexer<'a> {
    // Yields `(character index, character)`.
    upstream: Peekable<&'a mut dyn Iterator<Item = (usize, char)>>,

    // The index following the last consumed character.
    next_index: usize,
}

impl<'a> Lexer<'a> {
    fn new(upstream: &'a mut dyn Iterator<Item = (usize, char)>) -> Self {
        Self {
            upstream: upstream.peekable(),
            next_index: 0,
        }
    }

    fn next_char(&mut self) -> Option<char> {
        match self.upstream.next() {
            Some((index, c)) => {
                self.next_index = index + 1;
                Some(c)
            }
            None => None,
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.upstream.peek().map(|(_, c)| *c)
    }

    fn lex(mut self) -> Result<Vec<TokenWithRange>, LexError> {
        let mut token_with_ranges = vec![];

        while let Some(&(index, current_char)) = self.upstream.peek() {
            match current_char {
                ' ' | '\t' | '\r' | '\n' | '\u{0b}' | '\u{0c}' => {
                    self.next_char(); // consume whitespace
                }
                '0'..='9' => {
                    token_with_ranges.push(self.lex_integer(index)?);
                }
                '<' | '>' => {
                    token_with_ranges.push(self.lex_shift(current_char, index)?);
                }
                '(' => {
                    self.next_char();
                    token_with_ranges.push(TokenWithRange::new(
                        Token::ParenthesisOpen,
                        Range::from_index_and_length(index, 1),
                    ));
                }
                ')' => {
                    self.next_char();
                    token_with_ranges.push(TokenWithRange::new(
                        Token::ParenthesisClose,
                        Range::from_index_and_length(index, 1),
                    ));
                }
                _ => match Punctuator::from_char(current_char) {
                    Some(punctuator) => {
                        self.next_char();
                        token_with_ranges.push(TokenWithRange::new(
                            Token::Punctuator(punctuator),
                            Range::from_index_and_length(index, 1),
                        ));
                    }
                    None => {
                        return Err(LexError::UnexpectedCharacter(
                            current_char,
                            Position::new(index),
                        ));
                    }
                },
            }
        }

        token_with_ranges.push(TokenWithRange::new(
            Token::End,
            Range::from_position(&Position::new(self.next_index)),
        ));

        Ok(token_with_ranges)
    }

    fn lex_integer(&mut self, start_index: usize) -> Result<TokenWithRange, LexError> {
        // 123456T  //
        // ^     ^__// to here
        // |________// current char, validated
        let mut digits = String::new();

        while let Some(current_char) = self.peek_char() {
            if current_char.is_ascii_digit() {
                digits.push(current_char);
                self.next_char();
            } else {
                break;
            }
        }

        let range = Range::from_index_and_length(start_index, digits.len());

        // The text contains only digits, so parsing fails on overflow only.
        match digits.parse::<i64>() {
            Ok(value) => Ok(TokenWithRange::new(Token::Integer(value), range)),
            Err(_) => Err(LexError::IntegerOverflow(digits, range)),
        }
    }

    fn lex_shift(
        &mut self,
        first_char: char,
        start_index: usize,
    ) -> Result<TokenWithRange, LexError> {
        // <<?  //
        // ^ ^__// to here
        // |____// current char, validated

        self.next_char(); // consume the first '<' or '>'

        if self.peek_char() != Some(first_char) {
            // A single '<' or '>' is not an operator of the calculator.
            return Err(LexError::UnexpectedCharacter(
                first_char,
                Position::new(start_index),
            ));
        }

        self.next_char(); // consume the second '<' or '>'

        let punctuator = if first_char == '<' {
            Punctuator::ShiftLeft
        } else {
            Punctuator::ShiftRight
        };

        Ok(TokenWithRange::new(
            Token::Punctuator(punctuator),
            Range::from_index_and_length(start_index, 2),
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        error::LexError,
        lexer::lex_from_str,
        position::Position,
        range::Range,
        token::{Punctuator, Token, TokenWithRange},
    };

    fn lex_tokens(s: &str) -> Vec<Token> {
        lex_from_str(s)
            .unwrap()
            .into_iter()
            .map(|TokenWithRange { token, .. }| token)
            .collect()
    }

    #[test]
    fn test_lex_integer() {
        assert_eq!(lex_tokens("42"), vec![Token::Integer(42), Token::End]);
        assert_eq!(lex_tokens("007"), vec![Token::Integer(7), Token::End]);
        assert_eq!(
            lex_tokens("9223372036854775807"),
            vec![Token::Integer(i64::MAX), Token::End]
        );

        assert_eq!(
            lex_from_str("1 9223372036854775808"),
            Err(LexError::IntegerOverflow(
                "9223372036854775808".to_owned(),
                Range::from_index_and_length(2, 19)
            ))
        );
    }

    #[test]
    fn test_lex_punctuators() {
        assert_eq!(
            lex_tokens("<< >> & | ^ ~ + - * / %"),
            vec![
                Token::Punctuator(Punctuator::ShiftLeft),
                Token::Punctuator(Punctuator::ShiftRight),
                Token::Punctuator(Punctuator::BitwiseAnd),
                Token::Punctuator(Punctuator::BitwiseOr),
                Token::Punctuator(Punctuator::BitwiseXor),
                Token::Punctuator(Punctuator::BitwiseNot),
                Token::Punctuator(Punctuator::Add),
                Token::Punctuator(Punctuator::Subtract),
                Token::Punctuator(Punctuator::Multiply),
                Token::Punctuator(Punctuator::Divide),
                Token::Punctuator(Punctuator::Modulo),
                Token::End,
            ]
        );

        // shift operators are matched before anything else
        assert_eq!(
            lex_tokens("1<<<<2"),
            vec![
                Token::Integer(1),
                Token::Punctuator(Punctuator::ShiftLeft),
                Token::Punctuator(Punctuator::ShiftLeft),
                Token::Integer(2),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_lex_ranges() {
        assert_eq!(
            lex_from_str("(81 & (1 << 3))").unwrap(),
            vec![
                TokenWithRange::new(Token::ParenthesisOpen, Range::from_index_and_length(0, 1)),
                TokenWithRange::new(Token::Integer(81), Range::from_index_and_length(1, 2)),
                TokenWithRange::new(
                    Token::Punctuator(Punctuator::BitwiseAnd),
                    Range::from_index_and_length(4, 1)
                ),
                TokenWithRange::new(Token::ParenthesisOpen, Range::from_index_and_length(6, 1)),
                TokenWithRange::new(Token::Integer(1), Range::from_index_and_length(7, 1)),
                TokenWithRange::new(
                    Token::Punctuator(Punctuator::ShiftLeft),
                    Range::from_index_and_length(9, 2)
                ),
                TokenWithRange::new(Token::Integer(3), Range::from_index_and_length(12, 1)),
                TokenWithRange::new(Token::ParenthesisClose, Range::from_index_and_length(13, 1)),
                TokenWithRange::new(Token::ParenthesisClose, Range::from_index_and_length(14, 1)),
                TokenWithRange::new(Token::End, Range::from_position(&Position::new(15))),
            ]
        );
    }

    #[test]
    fn test_lex_whitespace() {
        assert_eq!(
            lex_tokens(" \t1\n+ 2  "),
            vec![
                Token::Integer(1),
                Token::Punctuator(Punctuator::Add),
                Token::Integer(2),
                Token::End,
            ]
        );

        // the end token is placed after trailing whitespace
        assert_eq!(
            lex_from_str("1  ").unwrap().last(),
            Some(&TokenWithRange::new(
                Token::End,
                Range::from_position(&Position::new(3))
            ))
        );

        assert_eq!(lex_tokens(""), vec![Token::End]);
    }

    #[test]
    fn test_lex_error() {
        assert_eq!(
            lex_from_str("1 + a"),
            Err(LexError::UnexpectedCharacter('a', Position::new(4)))
        );

        // single '<' and '>'
        assert_eq!(
            lex_from_str("1 < 2"),
            Err(LexError::UnexpectedCharacter('<', Position::new(2)))
        );
        assert_eq!(
            lex_from_str("1 >"),
            Err(LexError::UnexpectedCharacter('>', Position::new(2)))
        );

        // positions count characters, not bytes
        assert_eq!(
            lex_from_str("λ2 § 1"),
            Err(LexError::UnexpectedCharacter('λ', Position::new(0)))
        );
        assert_eq!(
            lex_from_str("2 § 1"),
            Err(LexError::UnexpectedCharacter('§', Position::new(2)))
        );
    }
}
