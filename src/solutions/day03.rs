use anyhow::Result;
use rustc_hash::FxHashSet;

use crate::{input::first_line, Error};

pub fn day3(input: &str) -> Result<(i64, i64)> {
    let moves = first_line(input)?.as_bytes();

    let alone = visit(moves, 0, 1)?;

    let mut together = visit(moves, 0, 2)?;
    together.extend(visit(moves, 1, 2)?);

    Ok((alone.len() as i64, together.len() as i64))
}

/// Houses visited when following every `step`-th move beginning at `start`.
fn visit(moves: &[u8], start: usize, step: usize) -> Result<FxHashSet<(i32, i32)>> {
    let mut pos = (0, 0);
    let mut visited = FxHashSet::default();
    visited.insert(pos);
    for &m in moves.iter().skip(start).step_by(step) {
        match m {
            b'^' => pos.1 -= 1,
            b'v' => pos.1 += 1,
            b'>' => pos.0 += 1,
            b'<' => pos.0 -= 1,
            other => {
                return Err(Error::Format(format!("unknown move {:?}", other as char)).into())
            }
        }
        visited.insert(pos);
    }
    Ok(visited)
}
