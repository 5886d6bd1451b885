/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Labels for numbered parts of the paper.
//!
//! - Section headings are lettered `A`, `B`, ... `Z`, then continue
//!   spreadsheet-style with `AA`, `AB`, ... `AZ`, `BA`, ...
//! - Tables are numbered with Roman numerals (`TABLE IV`).

const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const UNITS: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Subtractive Roman numeral for `n`.
///
/// The thousands digit is written as repeated `M`; zero yields an empty
/// string.
pub fn romanize(n: u32) -> String {
    let n = n as usize;
    let mut out = "M".repeat(n / 1000);
    out.push_str(HUNDREDS[(n / 100) % 10]);
    out.push_str(TENS[(n / 10) % 10]);
    out.push_str(UNITS[n % 10]);
    out
}

/// Letter label for the section at zero-based `index`.
pub fn section_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}
