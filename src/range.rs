// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::position::Position;

#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Range {
    pub start: Position,
    pub end_included: Position,
}

impl Range {
    pub fn new(start: &Position, end_included: &Position) -> Self {
        Self {
            start: *start,
            end_included: *end_included,
        }
    }

    pub fn from_position(pos: &Position) -> Self {
        Self {
            start: *pos,
            end_included: *pos,
        }
    }

    /// `length` must be at least 1.
    pub fn from_index_and_length(index: usize, length: usize) -> Self {
        Self {
            start: Position::new(index),
            end_included: Position::new(index + length - 1),
        }
    }

    /// Number of characters covered by this range.
    pub fn length(&self) -> usize {
        self.end_included.index - self.start.index + 1
    }
}

#[cfg(test)]
mod tests {
    use crate::{position::Position, range::Range};

    #[test]
    fn test_range_length() {
        assert_eq!(Range::from_position(&Position::new(3)).length(), 1);
        assert_eq!(Range::from_index_and_length(3, 2).length(), 2);
        assert_eq!(
            Range::from_index_and_length(4, 3),
            Range::new(&Position::new(4), &Position::new(6))
        );
    }
}
