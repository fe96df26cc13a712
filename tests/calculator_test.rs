// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use pretty_assertions::assert_eq;

use bitcalc::{
    ast_printer::print_postfix_to_string,
    calculate,
    error::{CalcError, EvaluationError, LexError, ParseError},
    evaluator::{Evaluation, EvaluationStep},
    parse_from_str,
    position::Position,
    range::Range,
    render,
};

/// Help function to list the canonical text of every step.
fn step_texts(evaluation: &Evaluation) -> Vec<&str> {
    evaluation
        .steps
        .iter()
        .map(|EvaluationStep { text, .. }| text.as_str())
        .collect()
}

#[test]
fn test_single_step() {
    let evaluation = calculate("(1 | 10)").unwrap();
    assert_eq!(evaluation.value, 11);
    assert_eq!(step_texts(&evaluation), vec!["(1 | 10)"]);

    let step = &evaluation.steps[0];
    assert_eq!(step.operator.to_string(), "|");
    assert_eq!(step.left.bits, "00000001");
    assert_eq!(step.right.as_ref().map(|r| r.bits.as_str()), Some("00001010"));
    assert_eq!(step.result.bits, "00001011");
}

#[test]
fn test_nested_steps() {
    let evaluation = calculate("(81 & (1 << 3))").unwrap();
    assert_eq!(evaluation.value, 0);
    assert_eq!(step_texts(&evaluation), vec!["(1 << 3)", "(81 & (1 << 3))"]);
    assert_eq!(evaluation.steps[0].result.bits, "00001000");
    assert_eq!(evaluation.steps[0].result.value, 8);
    assert_eq!(evaluation.steps[1].left.bits, "01010001");
    assert_eq!(
        evaluation.steps[1].right.as_ref().map(|r| r.bits.as_str()),
        Some("00001000")
    );
    assert_eq!(evaluation.steps[1].result.bits, "00000000");

    let evaluation = calculate("(81 & (1 << 3)) | (45 ^ (3 << 2))").unwrap();
    assert_eq!(evaluation.value, 33);
    assert_eq!(
        step_texts(&evaluation),
        vec![
            "(1 << 3)",
            "(81 & (1 << 3))",
            "(3 << 2)",
            "(45 ^ (3 << 2))",
            "((81 & (1 << 3)) | (45 ^ (3 << 2)))",
        ]
    );
}

#[test]
fn test_precedence_steps() {
    let evaluation = calculate("2+3*4").unwrap();
    assert_eq!(evaluation.value, 14);
    assert_eq!(step_texts(&evaluation), vec!["(3 * 4)", "(2 + (3 * 4))"]);
    assert_eq!(evaluation.steps[0].result.value, 12);
    assert_eq!(evaluation.steps[1].result.value, 14);
}

#[test]
fn test_steps_follow_their_operands() {
    // Every step appears after the steps of its operands, so each step's
    // operand values were produced by an earlier step or are literals.
    let evaluation = calculate("((1 + 2) * (3 - ~4)) ^ -(5 << 1) | 6 % 4").unwrap();
    let texts = step_texts(&evaluation);

    for (index, text) in texts.iter().enumerate() {
        for earlier in &texts[index + 1..] {
            assert!(
                !text.contains(earlier),
                "step {text} is listed before its sub-step {earlier}"
            );
        }
    }

    assert_eq!(
        evaluation.steps.last().map(|step| step.result.value),
        Some(evaluation.value)
    );
    assert_eq!(evaluation.value, ((1 + 2) * (3 - !4)) ^ -(5 << 1) | 6 % 4);
}

#[test]
fn test_bare_literal() {
    let evaluation = calculate("42").unwrap();
    assert_eq!(evaluation.value, 42);
    assert!(evaluation.steps.is_empty());
    assert_eq!(render("42").unwrap(), "42");
}

#[test]
fn test_render() {
    assert_eq!(
        render("2+3*4").unwrap(),
        "\
(3 * 4)
    00000011
*   00000100
------------
    00001100

(2 + (3 * 4))
    00000010
+   00001100
------------
    00001110
14"
    );
}

#[test]
fn test_render_is_repeatable() {
    let source = "(81 & (1 << 3)) | (45 ^ (3 << 2))";
    assert_eq!(render(source).unwrap(), render(source).unwrap());
    assert_eq!(calculate(source), calculate(source));
}

#[test]
fn test_postfix() {
    let expression = parse_from_str("(81 & (1 << 3)) | -(45 ^ ~2)").unwrap();
    assert_eq!(
        print_postfix_to_string(&expression),
        "81 1 3 << & 45 2 ~ ^ neg |"
    );
}

#[test]
fn test_errors() {
    assert_eq!(
        calculate("(5 / 0)"),
        Err(CalcError::Evaluation(EvaluationError::DivisionByZero(
            Range::from_index_and_length(3, 1)
        )))
    );
    assert_eq!(
        calculate("5 % 0"),
        Err(CalcError::Evaluation(EvaluationError::ModuloByZero(
            Range::from_index_and_length(2, 1)
        )))
    );
    assert_eq!(
        calculate("(1 + )"),
        Err(CalcError::Parse(ParseError::MissingOperand(
            Range::from_index_and_length(5, 1)
        )))
    );
    assert_eq!(
        calculate("1 # 2"),
        Err(CalcError::Lex(LexError::UnexpectedCharacter(
            '#',
            Position::new(2)
        )))
    );
    assert!(matches!(
        render("(1 << 3"),
        Err(CalcError::Parse(ParseError::UnmatchedParenthesis(_)))
    ));
    assert!(matches!(
        render("1 << 70"),
        Err(CalcError::Evaluation(EvaluationError::InvalidShiftAmount(
            70,
            _
        )))
    ));

    assert_eq!(
        calculate("(5 / 0)").unwrap_err().with_source("(5 / 0)"),
        "Error at column: 4
| (5 / 0)
|    ^___ Division by zero."
    );
}
