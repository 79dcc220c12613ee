use {
    crate::*,
    nom::{
        character::complete::digit0,
        combinator::{map, verify},
        error::Error,
        Err, IResult,
    },
    num::Integer,
};

/* --- Day 1: Inverse Captcha ---

You're standing in a room with "digitization quarantine" written in LEDs along one wall. The only
door is locked, but it includes a small interface. "Restricted Area - Strictly No Digitized Users
Allowed."

It goes on to explain that you may only leave by solving a captcha to prove you're not a human.

The captcha requires you to review a sequence of digits (your puzzle input) and find the sum of
all digits that match the next digit in the list. The list is circular, so the digit after the
last digit is the first digit in the list.

For example:

    1122 produces a sum of 3 (1 + 2) because the first digit (1) matches the second digit and the
    third digit (2) matches the fourth digit.
    1111 produces 4 because each digit (all 1) matches the next.
    1234 produces 0 because no digit matches the next.
    91212129 produces 9 because the only digit that matches the next one is the last digit, 9.

What is the solution to your captcha?

--- Part Two ---

Now, instead of considering the next digit, it wants you to consider the digit halfway around the
circular list. That is, if your list contains 10 items, only include a digit in your sum if the
digit 10/2 = 5 steps forward matches it. Fortunately, your list has an even number of elements.

For example:

    1212 produces 6: the list contains 4 items, and all four digits match the digit 2 items ahead.
    1221 produces 0, because every comparison is between a 1 and a 2.
    123425 produces 4, because both 2s match each other, but no other digit has a match.
    123123 produces 12.
    12131415 produces 4.

What is the solution to your new captcha? */

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u8>);

impl Solution {
    /// Sums the digits that match the digit `offset` places ahead, treating the sequence as
    /// circular
    fn captcha_sum(&self, offset: usize) -> u32 {
        if self.0.is_empty() {
            return 0_u32;
        }

        (0_usize..self.0.len())
            .filter(|index: &usize| self.0[*index] == self.0[(*index + offset) % self.0.len()])
            .map(|index: usize| self.0[index] as u32)
            .sum()
    }

    fn next_digit_sum(&self) -> u32 {
        self.captcha_sum(1_usize)
    }

    fn halfway_digit_sum(&self) -> u32 {
        self.captcha_sum(self.0.len() / 2_usize)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            verify(digit0, |digits: &str| digits.len().is_even()),
            |digits: &str| Self(digits.bytes().map(|byte: u8| byte - ZERO_OFFSET).collect()),
        )(input)
    }
}

impl RunParts for Solution {
    /// Trivial, no comment.
    fn part_one_internal(&mut self, _args: &PartArgs) {
        println!("{}", self.next_digit_sum());
    }

    /// The same sum with the offset bumped to half the sequence length.
    fn part_two_internal(&mut self, _args: &PartArgs) {
        println!("{}", self.halfway_digit_sum());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLES: &[(&str, u32, u32)] = &[
        ("1122", 3_u32, 0_u32),
        ("1111", 4_u32, 4_u32),
        ("1234", 0_u32, 0_u32),
        ("91212129", 9_u32, 6_u32),
        ("1212", 0_u32, 6_u32),
        ("1221", 3_u32, 0_u32),
        ("123425", 0_u32, 4_u32),
        ("123123", 0_u32, 12_u32),
        ("12131415", 0_u32, 4_u32),
    ];

    fn solution(solution_str: &str) -> Solution {
        Solution::try_from(solution_str).unwrap()
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(
            Solution::try_from("1122"),
            Ok(Solution(vec![1_u8, 1_u8, 2_u8, 2_u8]))
        );
        assert_eq!(Solution::try_from(""), Ok(Solution(Vec::new())));

        // Odd-length sequences are rejected at the parse boundary
        assert!(Solution::try_from("123").is_err());
    }

    #[test]
    fn test_next_digit_sum() {
        for (solution_str, next_digit_sum, _) in EXAMPLES {
            assert_eq!(
                solution(solution_str).next_digit_sum(),
                *next_digit_sum,
                "input {solution_str:?}"
            );
        }
    }

    #[test]
    fn test_halfway_digit_sum() {
        for (solution_str, _, halfway_digit_sum) in EXAMPLES {
            assert_eq!(
                solution(solution_str).halfway_digit_sum(),
                *halfway_digit_sum,
                "input {solution_str:?}"
            );
        }
    }

    #[test]
    fn test_empty_sequence_sums_to_zero() {
        let empty: Solution = solution("");

        assert_eq!(empty.next_digit_sum(), 0_u32);
        assert_eq!(empty.halfway_digit_sum(), 0_u32);
    }

    #[test]
    fn test_rotation_invariance() {
        for (solution_str, _, halfway_digit_sum) in EXAMPLES {
            let original: Solution = solution(solution_str);

            for rotation in 1_usize..original.0.len() {
                let mut digits: Vec<u8> = original.0.clone();

                digits.rotate_left(rotation);

                assert_eq!(
                    Solution(digits).halfway_digit_sum(),
                    *halfway_digit_sum,
                    "input {solution_str:?} rotated by {rotation}"
                );
            }
        }
    }
}
