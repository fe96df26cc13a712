// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::error::CalcError;

// The visible part of the expression text.
//
// ```diagram
//                 /-- snippet offset in the expression text
//                 |
//                 |            |-- snippet length
//                 v            v
// prefix -->   ...sni[ppet]_text...  <-- suffix
//                     ^^^^
//                     |  |-- highlight length
//                     |
//                     \----- highlight offset in snippet text
// ```
struct Snippet {
    prefix_ellipsis: bool,
    suffix_ellipsis: bool,
    offset_in_source: usize,
    length: usize,
    highlight_offset: usize,
    highlight_length: usize,
}

// Characters kept in front of the highlight when the text has to be cut.
const LEADING_LENGTH: usize = 15;
const SNIPPET_LENGTH: usize = 40;

fn locate_snippet(
    highlight_start: usize,
    highlight_length: usize,
    source_length: usize,
) -> Snippet {
    let (prefix_ellipsis, offset_in_source, highlight_offset) =
        if source_length <= SNIPPET_LENGTH || highlight_start < LEADING_LENGTH {
            (false, 0, highlight_start)
        } else if highlight_start + SNIPPET_LENGTH > source_length {
            // Close to the end, show the last `SNIPPET_LENGTH` characters.
            let offset_in_source = source_length - SNIPPET_LENGTH;
            (true, offset_in_source, highlight_start - offset_in_source)
        } else {
            (true, highlight_start - LEADING_LENGTH, LEADING_LENGTH)
        };

    let (suffix_ellipsis, length) = if offset_in_source + SNIPPET_LENGTH >= source_length {
        (false, source_length - offset_in_source)
    } else {
        (true, SNIPPET_LENGTH)
    };

    // The highlight may point just past the end of the text, e.g. at a missing operand.
    let highlight_length = highlight_length.min(length.saturating_sub(highlight_offset));

    Snippet {
        prefix_ellipsis,
        suffix_ellipsis,
        offset_in_source,
        length,
        highlight_offset,
        highlight_length,
    }
}

fn render_snippet(source_text: &str, snippet: &Snippet, message: &str) -> (String, String) {
    let mut snippet_line = String::from("| ");
    if snippet.prefix_ellipsis {
        snippet_line.push_str("...");
    }

    snippet_line.extend(
        source_text
            .chars()
            .skip(snippet.offset_in_source)
            .take(snippet.length)
            .map(|c| match c {
                '\n' | '\r' | '\t' => ' ',
                _ => c,
            }),
    );

    if snippet.suffix_ellipsis {
        snippet_line.push_str("...");
    }

    let mut indication_line = String::from("| ");
    if snippet.prefix_ellipsis {
        indication_line.push_str("   ");
    }

    indication_line.push_str(&" ".repeat(snippet.highlight_offset));
    indication_line.push('^');
    if snippet.highlight_length > 1 {
        indication_line.push_str(&"^".repeat(snippet.highlight_length - 1));
    }
    indication_line.push_str("___ ");
    indication_line.push_str(message);

    (snippet_line, indication_line)
}

impl CalcError {
    /// Renders the error with the offending part of `source_text` highlighted, e.g.
    ///
    /// ```text
    /// Error at column: 6
    /// | (1 + )
    /// |      ^___ Missing operand.
    /// ```
    pub fn with_source(&self, source_text: &str) -> String {
        let range = self.range();
        let snippet = locate_snippet(
            range.start.index,
            range.length(),
            source_text.chars().count(),
        );
        let (snippet_line, indication_line) =
            render_snippet(source_text, &snippet, &self.to_string());

        format!(
            "Error at column: {}\n{}\n{}",
            range.start.column(),
            snippet_line,
            indication_line
        )
    }
}
