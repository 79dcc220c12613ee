use {
    crate::*,
    nom::{
        character::complete::space1,
        combinator::map,
        error::Error,
        multi::separated_list1,
        Err, IResult,
    },
    std::{cmp::Reverse, collections::HashMap},
};

/* --- Day 6: Memory Reallocation ---

A debugger program here is having an issue: it is trying to repair a memory reallocation routine,
but it keeps getting stuck in an infinite loop.

In this area, there are sixteen memory banks; each memory bank can hold any number of blocks. The
goal of the reallocation routine is to balance the blocks between the memory banks.

The reallocation routine operates in cycles. In each cycle, it finds the memory bank with the
most blocks (ties won by the lowest-numbered memory bank) and redistributes those blocks among
the banks. To do this, it removes all of the blocks from the selected bank, then moves to the
next (by index) memory bank and inserts one of the blocks. It continues doing this until it runs
out of blocks; if it reaches the last memory bank, it wraps around to the first one.

The debugger would like to know how many redistributions can be done before a blocks-in-banks
configuration is produced that has been seen before.

For example, imagine a scenario with only four memory banks:

    The banks start with 0, 2, 7, and 0 blocks. The third bank has the most blocks, so it is
    chosen for redistribution. The 7 blocks are spread out over the memory banks, starting with
    the fourth: 2 4 1 2.
    Then the second bank is chosen: 3 1 2 3.
    The first bank wins the three-way tie: 0 2 3 4.
    The fourth bank is chosen: 1 3 4 1.
    The third bank is chosen: 2 4 1 2.

At this point, we've reached a state we've seen before: 2 4 1 2 was already seen. The infinite
loop is detected after the fifth block redistribution cycle, and so the answer in this example is
5.

Given the initial block counts in your puzzle input, how many redistribution cycles must be
completed before a configuration is produced that has been seen before?

--- Part Two ---

Out of curiosity, the debugger would also like to know the size of the loop: starting from a
state that has already been seen, how many block redistribution cycles must be performed before
that same state is seen again?

In the example above, 2 4 1 2 is seen again after four cycles, and so the answer in that example
would be 4.

How many cycles are in the infinite loop that arises from the configuration in your puzzle
input? */

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone)]
pub struct Solution(Vec<u32>);

struct LoopStats {
    steps_until_repeat: usize,
    loop_len: usize,
    repeated_banks: Vec<u32>,
}

impl Solution {
    /// Empties the fullest bank (ties won by the lowest index) and deals its blocks out one at a
    /// time to the banks after it, wrapping as often as needed
    fn redistribute(banks: &mut [u32]) {
        let index: usize = (0_usize..banks.len())
            .max_by_key(|index: &usize| (banks[*index], Reverse(*index)))
            .unwrap();
        let blocks: u32 = banks[index];

        banks[index] = 0_u32;

        let mut cursor: usize = index;

        for _ in 0_u32..blocks {
            cursor = (cursor + 1_usize) % banks.len();
            banks[cursor] += 1_u32;
        }
    }

    /// Redistributes until a configuration produced by an earlier step comes back around
    ///
    /// Only post-step configurations enter the history, so a fixed-point configuration is
    /// detected on the second step, not the first.
    fn detect_loop(&self) -> LoopStats {
        let mut banks: Vec<u32> = self.0.clone();
        let mut seen_configurations: HashMap<Vec<u32>, usize> = HashMap::new();
        let mut steps: usize = 0_usize;

        loop {
            Self::redistribute(&mut banks);
            steps += 1_usize;

            if let Some(first_seen) = seen_configurations.get(&banks) {
                return LoopStats {
                    steps_until_repeat: steps,
                    loop_len: steps - first_seen,
                    repeated_banks: banks,
                };
            }

            seen_configurations.insert(banks.clone(), steps);
        }
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list1(space1, parse_integer), Self)(input)
    }
}

impl RunParts for Solution {
    /// The "cycles" the puzzle counts are redistribution steps; the loop we're detecting is a
    /// cycle in the configuration graph.
    fn part_one_internal(&mut self, args: &PartArgs) {
        let stats: LoopStats = self.detect_loop();

        if args.verbose {
            eprintln!("first repeated configuration: {:?}", stats.repeated_banks);
        }

        println!("{}", stats.steps_until_repeat);
    }

    /// Same search, keyed on when the repeated configuration was first produced.
    fn part_two_internal(&mut self, _args: &PartArgs) {
        println!("{}", self.detect_loop().loop_len);
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

    #[test]
    fn test_try_from_str() {
        assert_eq!(
            Solution::try_from("0 2 7 0"),
            Ok(Solution(vec![0_u32, 2_u32, 7_u32, 0_u32]))
        );

        // Real inputs are tab-separated
        assert_eq!(
            Solution::try_from("0\t2\t7\t0\n"),
            Ok(Solution(vec![0_u32, 2_u32, 7_u32, 0_u32]))
        );
        assert!(Solution::try_from("").is_err());
    }

    #[test]
    fn test_redistribute() {
        let mut banks: Vec<u32> = vec![0_u32, 2_u32, 7_u32, 0_u32];

        for expected_banks in [
            [2_u32, 4_u32, 1_u32, 2_u32],
            [3_u32, 1_u32, 2_u32, 3_u32],
            [0_u32, 2_u32, 3_u32, 4_u32],
            [1_u32, 3_u32, 4_u32, 1_u32],
            [2_u32, 4_u32, 1_u32, 2_u32],
        ] {
            Solution::redistribute(&mut banks);

            assert_eq!(banks, expected_banks);
        }
    }

    #[test]
    fn test_redistribute_conserves_blocks() {
        for mut banks in [
            vec![0_u32, 2_u32, 7_u32, 0_u32],
            vec![1_u32, 1_u32, 1_u32],
            vec![10_u32, 0_u32, 0_u32, 0_u32, 0_u32],
        ] {
            let total: u32 = banks.iter().sum();

            Solution::redistribute(&mut banks);

            assert_eq!(banks.iter().sum::<u32>(), total);
        }
    }

    #[test]
    fn test_redistribute_is_deterministic() {
        let banks: Vec<u32> = vec![3_u32, 1_u32, 2_u32, 3_u32];
        let mut first: Vec<u32> = banks.clone();
        let mut second: Vec<u32> = banks;

        Solution::redistribute(&mut first);
        Solution::redistribute(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_detect_loop() {
        let stats: LoopStats = Solution(vec![0_u32, 2_u32, 7_u32, 0_u32]).detect_loop();

        assert_eq!(stats.steps_until_repeat, 5_usize);
        assert_eq!(stats.loop_len, 4_usize);
        assert_eq!(
            stats.repeated_banks,
            vec![2_u32, 4_u32, 1_u32, 2_u32]
        );
    }

    #[test]
    fn test_detect_loop_fixed_points() {
        // Redistributing zero blocks (or one bank's blocks back to itself) changes nothing, so
        // the first step's configuration repeats on the second step
        for banks in [vec![0_u32, 0_u32, 0_u32, 0_u32], vec![5_u32]] {
            let stats: LoopStats = Solution(banks).detect_loop();

            assert_eq!(stats.steps_until_repeat, 2_usize);
            assert_eq!(stats.loop_len, 1_usize);
        }
    }
}
