use anyhow::{Context, Result};

use crate::{scan::Scanner, Error};

const SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    TurnOn,
    TurnOff,
    Toggle,
}

pub fn day6(input: &str) -> Result<(i64, i64)> {
    let scanner = Scanner::new("%s %d,%d through %d,%d")?;

    let mut lit = vec![false; SIZE * SIZE];
    let mut brightness = vec![0u32; SIZE * SIZE];

    for (i, line) in input.lines().enumerate() {
        let (command, (x1, y1), (x2, y2)) = parse_instruction(&scanner, line)
            .with_context(|| format!("failure parsing line {}", i + 1))?;

        for y in y1..=y2 {
            let row = y * SIZE;
            for idx in row + x1..=row + x2 {
                match command {
                    Command::TurnOn => {
                        lit[idx] = true;
                        brightness[idx] += 1;
                    }
                    Command::TurnOff => {
                        lit[idx] = false;
                        brightness[idx] = brightness[idx].saturating_sub(1);
                    }
                    Command::Toggle => {
                        lit[idx] = !lit[idx];
                        brightness[idx] += 2;
                    }
                }
            }
        }
    }

    let count = lit.iter().filter(|&&on| on).count() as i64;
    let total = brightness.iter().map(|&b| i64::from(b)).sum();
    Ok((count, total))
}

type Corner = (usize, usize);

fn parse_instruction(scanner: &Scanner, line: &str) -> Result<(Command, Corner, Corner)> {
    let fields = scanner.scan(line)?;
    let command = match fields[0].as_str()? {
        "turn on" => Command::TurnOn,
        "turn off" => Command::TurnOff,
        "toggle" => Command::Toggle,
        other => return Err(Error::Format(format!("unknown command: {other}")).into()),
    };

    let mut coords = [0; 4];
    for (coord, field) in coords.iter_mut().zip(&fields[1..]) {
        let value = field.as_int()?;
        *coord = usize::try_from(value)
            .ok()
            .filter(|&v| v < SIZE)
            .ok_or_else(|| Error::Format(format!("coordinate out of the grid: {value}")))?;
    }
    let [x1, y1, x2, y2] = coords;
    if x1 > x2 || y1 > y2 {
        return Err(Error::Format(format!("corners out of order: {line:?}")).into());
    }

    Ok((command, (x1, y1), (x2, y2)))
}
