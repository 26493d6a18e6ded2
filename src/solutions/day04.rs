use anyhow::{Context, Result};

use crate::input::first_line;

pub fn day4(input: &str) -> Result<(i64, i64)> {
    let secret = first_line(input)?.trim();

    let five = mine(secret, 5, 1)?;
    // A hash with six leading zeros also has five, so the search resumes from there.
    let six = mine(secret, 6, five)?;

    Ok((five as i64, six as i64))
}

/// Lowest number `n >= start` such that the hex MD5 digest of `secret` followed by `n`
/// starts with `zeros` zero digits.
fn mine(secret: &str, zeros: usize, start: u64) -> Result<u64> {
    let mut prefix = md5::Context::new();
    prefix.consume(secret);

    (start..)
        .find(|&n| {
            let mut hasher = prefix.clone();
            hasher.consume(n.to_string());
            leading_zero_nibbles(&hasher.compute().0) >= zeros
        })
        .context("search space exhausted")
}

fn leading_zero_nibbles(digest: &[u8]) -> usize {
    let mut count = 0;
    for &b in digest {
        if b == 0 {
            count += 2;
            continue;
        }
        if b >> 4 == 0 {
            count += 1;
        }
        break;
    }
    count
}
