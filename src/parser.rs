use crate::error::ParseError;
use crate::TestCase;
use nom::{
    character::complete::{digit1, space0, space1},
    combinator::{all_consuming, map_res},
    multi::separated_list0,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

/// Parse a single unsigned 64-bit integer
fn parse_u64(input: &str) -> IResult<&str, u64> {
    map_res(digit1, |s: &str| s.parse::<u64>())(input)
}

/// Parse a single unsigned integer
fn parse_usize(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

/// A line holding exactly one count, e.g. the number of test cases
fn count_line(input: &str) -> IResult<&str, usize> {
    all_consuming(delimited(space0, parse_usize, space0))(input)
}

/// A line holding two counts: item count N and subset size K
fn pair_line(input: &str) -> IResult<&str, (usize, usize)> {
    all_consuming(delimited(
        space0,
        pair(parse_usize, preceded(space1, parse_usize)),
        space0,
    ))(input)
}

/// A row of space-separated integers (possibly empty)
fn row_line(input: &str) -> IResult<&str, Vec<u64>> {
    all_consuming(terminated(
        preceded(space0, separated_list0(space1, parse_u64)),
        space0,
    ))(input)
}

/// Non-blank lines paired with their 1-based line numbers
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Self {
        Lines {
            inner: input.lines().enumerate(),
            last: 0,
        }
    }

    /// Next non-blank line, or an end-of-input error describing what was expected
    fn expect(&mut self, what: &str) -> Result<(usize, &'a str), ParseError> {
        for (index, line) in self.inner.by_ref() {
            self.last = index + 1;
            if !line.trim().is_empty() {
                return Ok((index + 1, line));
            }
        }
        Err(ParseError::new(
            self.last + 1,
            format!("unexpected end of input, expected {}", what),
        ))
    }

    fn remaining(&mut self) -> Option<(usize, &'a str)> {
        self.inner
            .by_ref()
            .find(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| (index + 1, line))
    }
}

fn describe(line: &str) -> String {
    const MAX_SHOWN: usize = 40;
    let trimmed = line.trim();
    if trimmed.chars().count() > MAX_SHOWN {
        format!("`{}...`", trimmed.chars().take(MAX_SHOWN).collect::<String>())
    } else {
        format!("`{}`", trimmed)
    }
}

/// Parse a card-game batch: a case count, then per case an `N K` line and a line of N weights.
///
/// Blank lines are ignored. A case with N = 0 has no weights line.
pub fn parse_test_cases(input: &str) -> Result<Vec<TestCase>, ParseError> {
    let mut lines = Lines::new(input);

    let (line_no, line) = lines.expect("the number of test cases")?;
    let (_, count) = count_line(line).map_err(|_| {
        ParseError::new(
            line_no,
            format!("expected the number of test cases, found {}", describe(line)),
        )
    })?;

    // The count is untrusted; grow as cases actually parse.
    let mut cases = Vec::new();
    for case in 1..=count {
        let (line_no, line) = lines.expect(&format!("`N K` for case #{}", case))?;
        let (_, (n, k)) = pair_line(line).map_err(|_| {
            ParseError::new(
                line_no,
                format!("expected `N K` for case #{}, found {}", case, describe(line)),
            )
        })?;

        let weights = if n == 0 {
            Vec::new()
        } else {
            let (line_no, line) = lines.expect(&format!("{} weights for case #{}", n, case))?;
            let (_, weights) = row_line(line).map_err(|_| {
                ParseError::new(
                    line_no,
                    format!(
                        "expected non-negative integer weights for case #{}, found {}",
                        case,
                        describe(line)
                    ),
                )
            })?;
            if weights.len() != n {
                return Err(ParseError::new(
                    line_no,
                    format!(
                        "expected {} weights for case #{}, found {}",
                        n,
                        case,
                        weights.len()
                    ),
                ));
            }
            weights
        };

        cases.push(TestCase { weights, k });
    }

    if let Some((line_no, line)) = lines.remaining() {
        return Err(ParseError::new(
            line_no,
            format!(
                "unexpected input after {} test cases: {}",
                count,
                describe(line)
            ),
        ));
    }

    Ok(cases)
}

/// Parse a max-subarray batch: a case count, then per case an `N M` line and a line of
/// N values. As in the card-game format, N = 0 has no values line.
pub fn parse_subarray_cases(input: &str) -> Result<Vec<(Vec<u64>, u64)>, ParseError> {
    let mut lines = Lines::new(input);

    let (line_no, line) = lines.expect("the number of test cases")?;
    let (_, count) = count_line(line).map_err(|_| {
        ParseError::new(
            line_no,
            format!("expected the number of test cases, found {}", describe(line)),
        )
    })?;

    let mut cases = Vec::new();
    for case in 1..=count {
        let (line_no, line) = lines.expect(&format!("`N M` for case #{}", case))?;
        let (_, (n, m)) = pair_line(line).map_err(|_| {
            ParseError::new(
                line_no,
                format!("expected `N M` for case #{}, found {}", case, describe(line)),
            )
        })?;

        let values = if n == 0 {
            Vec::new()
        } else {
            let (line_no, line) = lines.expect(&format!("{} values for case #{}", n, case))?;
            match row_line(line) {
                Ok((_, values)) if values.len() == n => values,
                _ => {
                    return Err(ParseError::new(
                        line_no,
                        format!(
                            "expected {} non-negative integers for case #{}, found {}",
                            n,
                            case,
                            describe(line)
                        ),
                    ))
                }
            }
        };
        cases.push((values, m as u64));
    }

    if let Some((line_no, line)) = lines.remaining() {
        return Err(ParseError::new(
            line_no,
            format!("unexpected input after {} test cases: {}", count, describe(line)),
        ));
    }

    Ok(cases)
}

/// Parse a whole line of exactly two integers, used by the puzzle front-ends
pub fn parse_pair(line: &str) -> Option<(usize, usize)> {
    pair_line(line).ok().map(|(_, pair)| pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_batch() {
        let input = "2\n5 3\n1 2 3 4 5\n4 2\n3 1 4 1\n";
        let cases = parse_test_cases(input).unwrap();
        assert_eq!(
            cases,
            vec![
                TestCase {
                    weights: vec![1, 2, 3, 4, 5],
                    k: 3
                },
                TestCase {
                    weights: vec![3, 1, 4, 1],
                    k: 2
                },
            ]
        );
    }

    #[test]
    fn tolerates_blank_lines_crlf_and_padding() {
        let input = "1\r\n\r\n  3 1 \r\n 7\t8   9 \r\n\r\n";
        let cases = parse_test_cases(input).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].weights, vec![7, 8, 9]);
        assert_eq!(cases[0].k, 1);
    }

    #[test]
    fn empty_case_has_no_weights_line() {
        let cases = parse_test_cases("2\n0 0\n1 1\n42\n").unwrap();
        assert!(cases[0].weights.is_empty());
        assert_eq!(cases[1].weights, vec![42]);
    }

    #[test]
    fn keeps_oversized_k_for_the_engine_to_reject() {
        let cases = parse_test_cases("1\n2 5\n1 2\n").unwrap();
        assert_eq!(cases[0].k, 5);
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = parse_test_cases("1\n3 2\n1 x 3\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.message.contains("weights"));
    }

    #[test]
    fn rejects_wrong_weight_count() {
        let err = parse_test_cases("1\n3 2\n1 2\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.message.contains("expected 3 weights"));
    }

    #[test]
    fn rejects_truncated_input() {
        let err = parse_test_cases("2\n1 1\n5\n").unwrap_err();
        assert_eq!(err.line, 4);
        assert!(err.message.contains("unexpected end of input"));
    }

    #[test]
    fn rejects_trailing_garbage() {
        let err = parse_test_cases("1\n1 1\n5\n6 6\n").unwrap_err();
        assert_eq!(err.line, 4);
    }

    #[test]
    fn rejects_negative_and_overflowing_numbers() {
        assert!(parse_test_cases("1\n1 1\n-5\n").is_err());
        assert!(parse_test_cases("1\n1 1\n99999999999999999999999\n").is_err());
        assert!(parse_test_cases("x\n").is_err());
        assert!(parse_test_cases("").is_err());
    }

    #[test]
    fn huge_case_count_is_a_parse_error() {
        let err = parse_test_cases("18446744073709551615\n1 1\n5\n").unwrap_err();
        assert_eq!(err.line, 4);
        assert!(err.message.contains("unexpected end of input"));

        let err = parse_test_cases("1000000000000\n").unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn subarray_batch_skips_values_line_for_empty_case() {
        let cases = parse_subarray_cases("2\n0 7\n3 5\n1 2 3\n").unwrap();
        assert_eq!(cases, vec![(vec![], 7), (vec![1, 2, 3], 5)]);

        let err = parse_subarray_cases("1\n3 5\n1 2\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(parse_subarray_cases("1\n1 5\n1\n9\n").is_err());
    }

    #[test]
    fn pair_helper() {
        assert_eq!(parse_pair("10 4"), Some((10, 4)));
        assert_eq!(parse_pair("10"), None);
    }
}
