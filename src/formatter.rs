// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::evaluator::{Evaluation, EvaluationStep};

// Width of the column to the left of the bit strings, which holds the operator.
const OPERATOR_COLUMN_WIDTH: usize = 4;

/// Renders one step as aligned binary columns.
///
/// ```text
/// (1 | 10)
///     00000001
/// |   00001010
/// ------------
///     00001011
/// ```
///
/// A unary step has a single operator line and no left operand line.
pub fn format_step(step: &EvaluationStep) -> String {
    let line_width = step.width as usize + OPERATOR_COLUMN_WIDTH;
    let mut lines = vec![step.text.clone()];

    match &step.right {
        Some(right) => {
            lines.push(format!("{:>line_width$}", step.left.bits));
            lines.push(format!(
                "{:<column$}{}",
                step.operator.to_string(),
                right.bits,
                column = OPERATOR_COLUMN_WIDTH
            ));
        }
        None => {
            lines.push(format!(
                "{:<column$}{}",
                step.operator.to_string(),
                step.left.bits,
                column = OPERATOR_COLUMN_WIDTH
            ));
        }
    }

    lines.push("-".repeat(line_width));
    lines.push(format!("{:>line_width$}", step.result.bits));

    lines.join("\n")
}

/// Renders all steps separated by blank lines, followed by the decimal value
/// on its own line. An evaluation without steps renders as the value alone.
pub fn format_evaluation(evaluation: &Evaluation) -> String {
    let mut output = evaluation
        .steps
        .iter()
        .map(format_step)
        .collect::<Vec<_>>()
        .join("\n\n");

    if !output.is_empty() {
        output.push('\n');
    }

    output.push_str(&evaluation.value.to_string());
    output
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        evaluator::evaluate_expression,
        formatter::format_evaluation,
        lexer::lex_from_str,
        parser::parse_from_tokens,
    };

    fn render(s: &str) -> String {
        let tokens = lex_from_str(s).unwrap();
        let expression = parse_from_tokens(&tokens).unwrap();
        let evaluation = evaluate_expression(&expression).unwrap();
        format_evaluation(&evaluation)
    }

    #[test]
    fn test_format_literal() {
        assert_eq!(render("42"), "42");
        assert_eq!(render("(0)"), "0");
    }

    #[test]
    fn test_format_binary_step() {
        assert_eq!(
            render("(1 | 10)"),
            "\
(1 | 10)
    00000001
|   00001010
------------
    00001011
11"
        );

        assert_eq!(
            render("(81 & (1 << 3))"),
            "\
(1 << 3)
    00000001
<<  00000011
------------
    00001000

(81 & (1 << 3))
    01010001
&   00001000
------------
    00000000
0"
        );
    }

    #[test]
    fn test_format_unary_step() {
        assert_eq!(
            render("~5"),
            "\
(~5)
~   00000101
------------
    11111010
-6"
        );

        assert_eq!(
            render("-5"),
            "\
(-5)
-   00000101
------------
    11111011
-5"
        );
    }

    #[test]
    fn test_format_wide_step() {
        assert_eq!(
            render("200 + 100"),
            "\
(200 + 100)
    0000000011001000
+   0000000001100100
--------------------
    0000000100101100
300"
        );

        // the width of each step is chosen independently
        assert_eq!(
            render("(200 + 100) - 299"),
            "\
(200 + 100)
    0000000011001000
+   0000000001100100
--------------------
    0000000100101100

((200 + 100) - 299)
    0000000100101100
-   0000000100101011
--------------------
    0000000000000001
1"
        );

        assert_eq!(
            render("-129 & 255"),
            "\
(-129)
-   0000000010000001
--------------------
    1111111101111111

((-129) & 255)
    1111111101111111
&   0000000011111111
--------------------
    0000000001111111
127"
        );
    }
}
