//! Runs the registered days and checks their answers against the known ones.

use std::{
    any::Any,
    fmt,
    io::{self, Write},
    panic::{self, AssertUnwindSafe},
    time::{Duration, Instant},
};

use anyhow::Result;

use crate::solutions::*;

/// A registered puzzle solution with the answers expected for the puzzle input.
#[derive(Clone, Copy)]
pub struct Day {
    pub number: usize,
    pub name: &'static str,
    pub solve: Solver,
    pub expected: [&'static str; 2],
}

pub static DAYS: &[Day] = &[
    Day {
        number: 1,
        name: "Day 01",
        solve: day1,
        expected: ["280", "1797"],
    },
    Day {
        number: 2,
        name: "Day 02",
        solve: day2,
        expected: ["1606483", "3842356"],
    },
    Day {
        number: 3,
        name: "Day 03",
        solve: day3,
        expected: ["2592", "2360"],
    },
    Day {
        number: 4,
        name: "Day 04",
        solve: day4,
        expected: ["254575", "1038736"],
    },
    Day {
        number: 5,
        name: "Day 05",
        solve: day5,
        expected: ["258", "53"],
    },
    Day {
        number: 6,
        name: "Day 06",
        solve: day6,
        expected: ["377891", "14110788"],
    },
    Day {
        number: 7,
        name: "Day 07",
        solve: day7,
        expected: ["956", "40149"],
    },
];

/// Loads the puzzle input for a day number.
pub type InputLoader = fn(usize) -> Result<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "\u{2714}"),
            Verdict::Fail => write!(f, "FAILED"),
        }
    }
}

/// What running one day produced. `answers` is `None` when loading the input or
/// solving failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub answers: Option<[String; 2]>,
    pub elapsed: Duration,
}

impl Outcome {
    pub fn verdicts(&self, day: &Day) -> [Verdict; 2] {
        let check = |part: usize| match &self.answers {
            Some(answers) if answers[part] == day.expected[part] => Verdict::Pass,
            _ => Verdict::Fail,
        };
        [check(0), check(1)]
    }

    pub fn passed(&self, day: &Day) -> bool {
        self.verdicts(day) == [Verdict::Pass; 2]
    }
}

/// Runs a single day. Errors and panics are logged and turned into an outcome without
/// answers, so one broken day never stops the others.
pub fn run_day(day: &Day, input_loader: InputLoader) -> Outcome {
    let input = match input_loader(day.number) {
        Ok(input) => input,
        Err(err) => {
            tracing::warn!(day = day.name, "could not load input: {err:#}");
            return Outcome {
                answers: None,
                elapsed: Duration::ZERO,
            };
        }
    };

    let start = Instant::now();
    let result = panic::catch_unwind(AssertUnwindSafe(|| (day.solve)(&input)));
    let elapsed = start.elapsed();

    let answers = match result {
        Ok(Ok((part1, part2))) => Some([part1.to_string(), part2.to_string()]),
        Ok(Err(err)) => {
            tracing::warn!(day = day.name, "solver failed: {err:#}");
            None
        }
        Err(payload) => {
            tracing::warn!(day = day.name, "solver panicked: {}", panic_message(&*payload));
            None
        }
    };
    Outcome { answers, elapsed }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

/// Writes the answers of one day with their verdicts.
pub fn report(out: &mut impl Write, day: &Day, outcome: &Outcome) -> io::Result<()> {
    writeln!(out, "{}:", day.name)?;
    for (part, verdict) in outcome.verdicts(day).into_iter().enumerate() {
        let answer = outcome.answers.as_ref().map_or("-", |answers| answers[part].as_str());
        match verdict {
            Verdict::Pass => writeln!(out, "  Part {}: {} {}", part + 1, answer, verdict)?,
            Verdict::Fail => writeln!(
                out,
                "  Part {}: {} {} (expected {})",
                part + 1,
                answer,
                verdict,
                day.expected[part]
            )?,
        }
    }
    writeln!(out, "  Finished in {}", format_duration(outcome.elapsed))?;
    writeln!(out, "---------------------")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub total: Duration,
}

/// Runs `days` in order and reports each of them to `out`.
pub fn run_all(
    days: &[Day],
    input_loader: InputLoader,
    out: &mut impl Write,
) -> io::Result<Summary> {
    let mut summary = Summary::default();
    for day in days {
        let outcome = run_day(day, input_loader);
        report(out, day, &outcome)?;

        summary.total += outcome.elapsed;
        if outcome.passed(day) {
            summary.passed += 1;
        } else {
            summary.failed += 1;
        }
    }
    writeln!(out, "Total processing time: {}", format_duration(summary.total))?;
    Ok(summary)
}

pub fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::bail;
    use indoc::indoc;

    fn example_input(n: usize) -> Result<String> {
        Ok(match n {
            1 => "))(((((\n",
            2 => "3000000x3000000x3000000\n",
            7 => indoc! {"
                123 -> b
                b LSHIFT 2 -> a
            "},
            _ => bail!("no input for day {n}"),
        }
        .to_string())
    }

    fn broken(_: &str) -> Result<(i64, i64)> {
        bail!("nope")
    }

    fn panicking(_: &str) -> Result<(i64, i64)> {
        panic!("index out of bounds")
    }

    fn output_of(days: &[Day]) -> Result<(Summary, String)> {
        let mut out = Vec::new();
        let summary = run_all(days, example_input, &mut out)?;
        Ok((summary, String::from_utf8(out)?))
    }

    #[test]
    fn passing_day() -> Result<()> {
        let day = Day {
            number: 1,
            name: "Day 01",
            solve: day1,
            expected: ["3", "1"],
        };
        let outcome = run_day(&day, example_input);
        assert_eq!(outcome.answers, Some(["3".to_string(), "1".to_string()]));
        assert!(outcome.passed(&day));

        let (summary, output) = output_of(&[day])?;
        assert_eq!((summary.passed, summary.failed), (1, 0));
        assert!(output.starts_with("Day 01:\n  Part 1: 3 \u{2714}\n  Part 2: 1 \u{2714}\n"));
        assert!(output.contains("Total processing time: "));
        Ok(())
    }

    #[test]
    fn wrong_answer_fails_only_that_part() -> Result<()> {
        let day = Day {
            number: 7,
            name: "Day 07",
            solve: day7,
            expected: ["492", "0"],
        };
        let outcome = run_day(&day, example_input);
        assert_eq!(outcome.verdicts(&day), [Verdict::Pass, Verdict::Fail]);

        let (summary, output) = output_of(&[day])?;
        assert_eq!((summary.passed, summary.failed), (0, 1));
        assert!(output.contains("  Part 1: 492 \u{2714}\n"));
        assert!(output.contains("  Part 2: 1968 FAILED (expected 0)\n"));
        Ok(())
    }

    #[test]
    fn errors_fail_both_parts_without_stopping_the_run() -> Result<()> {
        let days = [
            Day {
                number: 1,
                name: "Broken",
                solve: broken,
                expected: ["3", "1"],
            },
            Day {
                number: 3,
                name: "Missing input",
                solve: day3,
                expected: ["0", "0"],
            },
            Day {
                number: 1,
                name: "Day 01",
                solve: day1,
                expected: ["3", "1"],
            },
        ];

        let outcome = run_day(&days[0], example_input);
        assert_eq!(outcome.answers, None);
        assert_eq!(outcome.verdicts(&days[0]), [Verdict::Fail; 2]);
        assert_eq!(run_day(&days[1], example_input).answers, None);

        let (summary, output) = output_of(&days)?;
        assert_eq!((summary.passed, summary.failed), (1, 2));
        assert!(output.contains("Broken:\n  Part 1: - FAILED (expected 3)\n"));
        assert!(output.contains("Missing input:\n  Part 1: - FAILED"));
        assert!(output.contains("Day 01:\n  Part 1: 3 \u{2714}"));
        Ok(())
    }

    #[test]
    fn panics_are_contained() -> Result<()> {
        let days = [
            Day {
                number: 1,
                name: "Panicking",
                solve: panicking,
                expected: ["3", "1"],
            },
            Day {
                number: 2,
                name: "Day 02",
                solve: day2,
                expected: ["0", "0"],
            },
            Day {
                number: 1,
                name: "Day 01",
                solve: day1,
                expected: ["3", "1"],
            },
        ];

        let outcome = run_day(&days[0], example_input);
        assert_eq!(outcome.answers, None);
        assert_eq!(outcome.verdicts(&days[0]), [Verdict::Fail; 2]);

        let (summary, output) = output_of(&days)?;
        assert_eq!((summary.passed, summary.failed), (1, 2));
        assert!(output.contains("Panicking:\n  Part 1: - FAILED (expected 3)\n"));
        assert!(output.contains("Day 02:\n  Part 1: - FAILED"));
        assert!(output.contains("Day 01:\n  Part 1: 3 \u{2714}"));
        Ok(())
    }

    #[test]
    fn registry_is_ordered() {
        let numbers: Vec<usize> = DAYS.iter().map(|day| day.number).collect();
        assert_eq!(numbers, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250 us");
        assert_eq!(format_duration(Duration::from_millis(12)), "12 ms");
    }

    #[test]
    #[ignore = "needs the personal puzzle inputs in inputs/"]
    fn registered_days_match_expected_answers() {
        for day in DAYS {
            let outcome = run_day(day, crate::default_input);
            assert!(outcome.passed(day), "{}: {:?}", day.name, outcome.answers);
        }
    }
}
