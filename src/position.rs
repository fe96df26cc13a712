// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

/// A location in the expression text.
///
/// Expressions are single-line, so only the character index is tracked.
/// The index counts characters (not bytes) from the start of the text.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Position {
    pub index: usize,
}

impl Position {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// The 1-based column used in user-facing messages.
    pub fn column(&self) -> usize {
        self.index + 1
    }
}
