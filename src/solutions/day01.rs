use anyhow::{bail, Result};

use crate::input::first_line;

pub fn day1(input: &str) -> Result<(i64, i64)> {
    let line = first_line(input)?.trim_end().as_bytes();

    let up = memchr::memchr_iter(b'(', line).count();
    let down = memchr::memchr_iter(b')', line).count();
    if up + down != line.len() {
        bail!("instructions may only contain '(' and ')'");
    }
    let floor = up as i64 - down as i64;

    // Position is 1-based, -1 when the basement is never reached.
    let mut first_basement = -1;
    let mut current = 0i64;
    for (i, &b) in line.iter().enumerate() {
        current += if b == b'(' { 1 } else { -1 };
        if current < 0 {
            first_basement = i as i64 + 1;
            break;
        }
    }

    Ok((floor, first_basement))
}
