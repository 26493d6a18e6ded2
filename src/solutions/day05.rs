use aho_corasick::AhoCorasick;
use anyhow::Result;

pub fn day5(input: &str) -> Result<(i64, i64)> {
    let naughty = AhoCorasick::new(["ab", "cd", "pq", "xy"])?;

    let mut nice_part1 = 0;
    let mut nice_part2 = 0;
    for line in input.lines() {
        let s = line.as_bytes();
        if is_nice_part1(s, &naughty) {
            nice_part1 += 1;
        }
        if is_nice_part2(s) {
            nice_part2 += 1;
        }
    }

    Ok((nice_part1, nice_part2))
}

fn is_nice_part1(s: &[u8], naughty: &AhoCorasick) -> bool {
    let vowels = s.iter().filter(|&&b| b"aeiou".contains(&b)).count();
    let has_double = s.windows(2).any(|w| w[0] == w[1]);
    vowels >= 3 && has_double && !naughty.is_match(s)
}

fn is_nice_part2(s: &[u8]) -> bool {
    // A pair at i and its repeat at j must not overlap, hence j >= i + 2.
    let repeated_pair = (0..s.len().saturating_sub(3)).any(|i| {
        (i + 2..s.len() - 1).any(|j| s[i] == s[j] && s[i + 1] == s[j + 1])
    });
    let sandwich = s.windows(3).any(|w| w[0] == w[2]);
    repeated_pair && sandwich
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day5() -> Result<()> {
        let part1 = indoc! {"
            ugknbfddgicrmopn
            aaa
            jchzalrnumimnmhp
            haegwjzuvuyypxyu
            dvszwmarrgswjxmb
        "};
        assert_eq!(day5(part1)?.0, 2);

        let part2 = indoc! {"
            qjhvhtzxzqqjkmpb
            xxyxx
            uurcxstgmygtbstg
            ieodomkazucvgmuy
            aaa
        "};
        assert_eq!(day5(part2)?.1, 2);
        Ok(())
    }

    #[test]
    fn short_strings_are_not_nice() -> Result<()> {
        assert_eq!(day5("a\n\nab\n")?, (0, 0));
        Ok(())
    }
}
