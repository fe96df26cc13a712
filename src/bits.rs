// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

pub const MIN_BIT_WIDTH: u32 = 8;
pub const MAX_BIT_WIDTH: u32 = i64::BITS;

/// Number of bits needed to hold `value` in two's complement, sign bit included.
///
/// e.g. `0` and `-1` need 1 bit, `127` and `-128` need 8 bits, `128` needs 9 bits.
pub fn required_bits(value: i64) -> u32 {
    // A negative value needs as many bits as its complement, which is non-negative.
    let magnitude = if value < 0 { !value } else { value };
    i64::BITS - magnitude.leading_zeros() + 1
}

/// The smallest multiple of 8 (at least `MIN_BIT_WIDTH`) that holds all of `values`.
pub fn select_width(values: &[i64]) -> u32 {
    let bits = values
        .iter()
        .map(|value| required_bits(*value))
        .max()
        .unwrap_or(1);

    (bits.div_ceil(8) * 8).clamp(MIN_BIT_WIDTH, MAX_BIT_WIDTH)
}

/// Renders `value` as a two's complement bit string of exactly `width` digits.
///
/// Negative values are sign extended to the width, the caller is expected to
/// choose a width that holds the value (see `select_width`).
pub fn to_binary_string(value: i64, width: u32) -> String {
    let pattern = value as u64;
    let masked = if width >= u64::BITS {
        pattern
    } else {
        pattern & ((1u64 << width) - 1)
    };
    format!("{:0width$b}", masked, width = width as usize)
}
