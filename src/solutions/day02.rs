use anyhow::{Context, Result};

use crate::{input::parse_ints, Error};

pub fn day2(input: &str) -> Result<(i64, i64)> {
    let mut paper = 0;
    let mut ribbon = 0;

    for (i, line) in input.lines().enumerate() {
        let [l, w, h]: [i64; 3] = parse_ints(line)?
            .try_into()
            .map_err(|_| Error::Format(format!("expected three dimensions, found {line:?}")))
            .with_context(|| format!("failure parsing line {}", i + 1))?;

        let too_large = || Error::Format(format!("box too large: {line:?}"));
        let (box_paper, box_ribbon) = wrapping(l, w, h).ok_or_else(too_large)?;
        paper = i64::checked_add(paper, box_paper).ok_or_else(too_large)?;
        ribbon = i64::checked_add(ribbon, box_ribbon).ok_or_else(too_large)?;
    }

    Ok((paper, ribbon))
}

/// Paper and ribbon for one box, `None` on overflow.
fn wrapping(l: i64, w: i64, h: i64) -> Option<(i64, i64)> {
    let sides = [l.checked_mul(w)?, w.checked_mul(h)?, h.checked_mul(l)?];
    let smallest_side = sides.iter().min().copied()?;
    let area = sides.iter().try_fold(0i64, |acc, &side| acc.checked_add(side))?;
    let paper = area.checked_mul(2)?.checked_add(smallest_side)?;

    let half_perimeters = [l.checked_add(w)?, w.checked_add(h)?, h.checked_add(l)?];
    let smallest_perimeter = half_perimeters.iter().min().copied()?.checked_mul(2)?;
    let volume = l.checked_mul(w)?.checked_mul(h)?;
    let ribbon = smallest_perimeter.checked_add(volume)?;

    Some((paper, ribbon))
}
