// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::{
    ast::{BinaryOperator, Expression, UnaryOperator},
    ast_printer::print_to_string,
    bits::{select_width, to_binary_string},
    error::EvaluationError,
    range::Range,
};

/// The result of evaluating an expression tree.
#[derive(Debug, PartialEq)]
pub struct Evaluation {
    pub value: i64,

    /// One step per operator node, in evaluation order (post-order,
    /// left operand before right operand), the root's step last.
    pub steps: Vec<EvaluationStep>,
}

/// One operator application of the trace.
#[derive(Debug, PartialEq)]
pub struct EvaluationStep {
    /// The canonical (fully parenthesized) text of the subtree.
    pub text: String,
    pub operator: StepOperator,

    /// The left operand of a binary step, or the only operand of a unary step.
    pub left: Operand,
    pub right: Option<Operand>,
    pub result: Operand,

    /// Bit width of all the bit strings of this step.
    pub width: u32,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum StepOperator {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

#[derive(Debug, PartialEq)]
pub struct Operand {
    pub value: i64,
    pub bits: String,
}

impl Operand {
    fn new(value: i64, width: u32) -> Self {
        Self {
            value,
            bits: to_binary_string(value, width),
        }
    }
}

impl EvaluationStep {
    fn binary(
        expression: &Expression,
        operator: BinaryOperator,
        left: i64,
        right: i64,
        result: i64,
    ) -> Self {
        let width = select_width(&[left, right, result]);
        Self {
            text: print_to_string(expression),
            operator: StepOperator::Binary(operator),
            left: Operand::new(left, width),
            right: Some(Operand::new(right, width)),
            result: Operand::new(result, width),
            width,
        }
    }

    fn unary(expression: &Expression, operator: UnaryOperator, operand: i64, result: i64) -> Self {
        let width = select_width(&[operand, result]);
        Self {
            text: print_to_string(expression),
            operator: StepOperator::Unary(operator),
            left: Operand::new(operand, width),
            right: None,
            result: Operand::new(result, width),
            width,
        }
    }
}

impl Display for StepOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepOperator::Binary(operator) => write!(f, "{}", operator),
            StepOperator::Unary(operator) => write!(f, "{}", operator),
        }
    }
}

pub fn evaluate_expression(expression: &Expression) -> Result<Evaluation, EvaluationError> {
    let mut steps = vec![];
    let value = evaluate(expression, &mut steps)?;
    Ok(Evaluation { value, steps })
}

fn evaluate(
    expression: &Expression,
    steps: &mut Vec<EvaluationStep>,
) -> Result<i64, EvaluationError> {
    match expression {
        Expression::Number(value, _) => Ok(*value),
        Expression::Binary(operator, operator_range, left_exp, right_exp) => {
            let left = evaluate(left_exp, steps)?;
            let right = evaluate(right_exp, steps)?;
            let result = evaluate_binary_operation(operator, operator_range, left, right)?;
            steps.push(EvaluationStep::binary(
                expression, *operator, left, right, result,
            ));
            Ok(result)
        }
        Expression::Unary(operator, operator_range, exp) => {
            let value = evaluate(exp, steps)?;
            let result = evaluate_unary_operation(operator, operator_range, value)?;
            steps.push(EvaluationStep::unary(expression, *operator, value, result));
            Ok(result)
        }
    }
}

fn evaluate_binary_operation(
    operator: &BinaryOperator,
    operator_range: &Range,
    left: i64,
    right: i64,
) -> Result<i64, EvaluationError> {
    let result = match operator {
        // Arithmetic operators
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Subtract => left.checked_sub(right),
        BinaryOperator::Multiply => left.checked_mul(right),
        BinaryOperator::Divide => {
            if right == 0 {
                return Err(EvaluationError::DivisionByZero(*operator_range));
            }
            // Truncates toward zero.
            left.checked_div(right)
        }
        BinaryOperator::Modulo => {
            if right == 0 {
                return Err(EvaluationError::ModuloByZero(*operator_range));
            }
            // The result has the sign of the dividend.
            left.checked_rem(right)
        }
        // Bitwise operators
        BinaryOperator::BitwiseAnd => Some(left & right),
        BinaryOperator::BitwiseOr => Some(left | right),
        BinaryOperator::BitwiseXor => Some(left ^ right),
        BinaryOperator::ShiftLeft => {
            let amount = check_shift_amount(right, operator_range)?;
            let shifted = left << amount;
            // Reject shifts that drop significant bits, including the sign bit.
            if shifted >> amount == left {
                Some(shifted)
            } else {
                None
            }
        }
        BinaryOperator::ShiftRight => {
            let amount = check_shift_amount(right, operator_range)?;
            Some(left >> amount)
        }
    };

    result.ok_or(EvaluationError::Overflow(*operator_range))
}

fn evaluate_unary_operation(
    operator: &UnaryOperator,
    operator_range: &Range,
    value: i64,
) -> Result<i64, EvaluationError> {
    match operator {
        UnaryOperator::Minus => value
            .checked_neg()
            .ok_or(EvaluationError::Overflow(*operator_range)),
        UnaryOperator::BitwiseNot => Ok(!value),
    }
}

fn check_shift_amount(amount: i64, operator_range: &Range) -> Result<u32, EvaluationError> {
    if (0..i64::BITS as i64).contains(&amount) {
        Ok(amount as u32)
    } else {
        Err(EvaluationError::InvalidShiftAmount(amount, *operator_range))
    }
}
