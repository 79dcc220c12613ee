use {
    crate::*,
    glam::IVec2,
    nom::{
        combinator::{map, verify},
        error::Error,
        Err, IResult,
    },
    std::collections::HashMap,
};

/* --- Day 3: Spiral Memory ---

You come across an experimental new kind of memory stored on an infinite two-dimensional grid.

Each square on the grid is allocated in a spiral pattern starting at a location marked 1 and then
counting up while spiraling outward. For example, the first few squares are allocated like this:

17  16  15  14  13
18   5   4   3  12
19   6   1   2  11
20   7   8   9  10
21  22  23---> ...

While this is very space-efficient (no squares are skipped), requested data must be carried back
to square 1 (the location of the only access port for this memory system) by programs that can
only move up, down, left, or right. They always take the shortest path: the Manhattan Distance
between the location of the data and square 1.

For example:

    Data from square 1 is carried 0 steps, since it's at the access port.
    Data from square 12 is carried 3 steps, such as: down, left, left.
    Data from square 23 is carried only 2 steps: up twice.
    Data from square 1024 must be carried 31 steps.

How many steps are required to carry the data from the square identified in your puzzle input all
the way to the access port?

--- Part Two ---

As a stress test on the system, the programs here clear the grid and then store the value 1 in
square 1. Then, in the same allocation order as shown above, they store the sum of the values in
all adjacent squares, including diagonals.

So, the first few squares' values are chosen as follows:

    Square 1 starts with the value 1.
    Square 2 has only one adjacent filled square (with value 1), so it also stores 1.
    Square 3 has both of the above squares as neighbors and stores the sum of their values, 2.
    Square 4 has all three of the aforementioned squares as neighbors and stores the sum of their
    values, 4.
    Square 5 only has the first and fourth squares as neighbors, so it gets the value 5.

Once a square is written, its value does not change. Therefore, the first few squares would
receive the following values:

147  142  133  122   59
304    5    4    2   57
330   10    1    1   54
351   11   23   25   26
362  747  806--->   ...

What is the first value written that is larger than your puzzle input? */

/// Walks the square spiral outward from the origin, one grid cell per step
///
/// The run length grows by one after every second left turn, which closes each ring one cell
/// before the next ring's first corner.
struct SpiralIter {
    pos: IVec2,
    dir: Direction,
    run_len: i32,
    steps_remaining: i32,
    grow_on_turn: bool,
}

impl Default for SpiralIter {
    fn default() -> Self {
        Self {
            pos: IVec2::ZERO,

            // One left turn short of east, so the first step heads east
            dir: Direction::South,
            run_len: 0_i32,
            steps_remaining: 0_i32,
            grow_on_turn: true,
        }
    }
}

impl Iterator for SpiralIter {
    type Item = IVec2;

    fn next(&mut self) -> Option<Self::Item> {
        let pos: IVec2 = self.pos;

        if self.steps_remaining == 0_i32 {
            self.dir = self.dir.turn_left();

            if self.grow_on_turn {
                self.run_len += 1_i32;
            }

            self.grow_on_turn = !self.grow_on_turn;
            self.steps_remaining = self.run_len;
        }

        self.pos += self.dir.vec();
        self.steps_remaining -= 1_i32;

        Some(pos)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
pub struct Solution(u32);

impl Solution {
    fn carry_distance(self) -> i32 {
        manhattan_magnitude(
            SpiralIter::default()
                .nth(self.0 as usize - 1_usize)
                .unwrap(),
        )
    }

    /// The first value written that strictly exceeds the puzzle input
    fn stress_test(self) -> u32 {
        let mut values: HashMap<IVec2, u32> = HashMap::new();

        for pos in SpiralIter::default() {
            let value: u32 = if pos == IVec2::ZERO {
                1_u32
            } else {
                iter_neighbors(pos)
                    .filter_map(|neighbor: IVec2| values.get(&neighbor))
                    .sum()
            };

            // Write-once: the spiral never revisits a cell
            values.insert(pos, value);

            if value > self.0 {
                return value;
            }
        }

        unreachable!();
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(verify(parse_integer, |square: &u32| *square > 0_u32), Self)(input)
    }
}

impl RunParts for Solution {
    /// One lookup only, so walking the spiral out to the square beats working out the closed-form
    /// ring arithmetic.
    fn part_one_internal(&mut self, _args: &PartArgs) {
        println!("{}", self.carry_distance());
    }

    /// The accumulated values grow without bound, so this always terminates.
    fn part_two_internal(&mut self, _args: &PartArgs) {
        println!("{}", self.stress_test());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
