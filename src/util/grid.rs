use {
    glam::IVec2,
    static_assertions::const_assert,
    std::mem::transmute,
    strum::{EnumCount, EnumIter},
};

/// Cardinal travel directions, ordered counterclockwise so that incrementing the discriminant
/// turns left
#[derive(Clone, Copy, Debug, EnumCount, EnumIter, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

// This guarantees we can safely convert from `u8` to `Direction` by masking the smallest 2 bits,
// which is the same as masking by `MASK`
const_assert!(Direction::COUNT == 4_usize);

impl Direction {
    const MASK: u8 = Self::COUNT as u8 - 1_u8;

    /// The unit step for this direction, with north as +Y
    #[inline]
    pub const fn vec(self) -> IVec2 {
        match self {
            Self::East => IVec2::X,
            Self::North => IVec2::Y,
            Self::West => IVec2::NEG_X,
            Self::South => IVec2::NEG_Y,
        }
    }

    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        // SAFETY: See `const_assert` above
        unsafe { transmute(value & Self::MASK) }
    }

    #[inline]
    pub const fn turn_left(self) -> Self {
        Self::from_u8(self as u8 + 1_u8)
    }
}

impl From<Direction> for IVec2 {
    fn from(value: Direction) -> Self {
        value.vec()
    }
}

pub fn manhattan_magnitude(pos: IVec2) -> i32 {
    let abs: IVec2 = pos.abs();

    abs.x + abs.y
}

/// Iterates the eight cells surrounding `pos`, diagonals included
pub fn iter_neighbors(pos: IVec2) -> impl Iterator<Item = IVec2> {
    (-1_i32..=1_i32)
        .flat_map(|y: i32| (-1_i32..=1_i32).map(move |x: i32| IVec2::new(x, y)))
        .filter(|delta: &IVec2| *delta != IVec2::ZERO)
        .map(move |delta: IVec2| pos + delta)
}

#[cfg(test)]
mod tests {
    use {super::*, strum::IntoEnumIterator};

    #[test]
    fn test_turn_left() {
        for dir in Direction::iter() {
            assert_eq!(dir.turn_left().vec(), dir.vec().perp());
        }

        assert_eq!(
            Direction::East
                .turn_left()
                .turn_left()
                .turn_left()
                .turn_left(),
            Direction::East
        );
    }

    #[test]
    fn test_manhattan_magnitude() {
        assert_eq!(manhattan_magnitude(IVec2::ZERO), 0_i32);
        assert_eq!(manhattan_magnitude(IVec2::new(2_i32, -1_i32)), 3_i32);
        assert_eq!(manhattan_magnitude(IVec2::new(-15_i32, -16_i32)), 31_i32);
    }

    #[test]
    fn test_iter_neighbors() {
        let neighbors: Vec<IVec2> = iter_neighbors(IVec2::ZERO).collect();

        assert_eq!(neighbors.len(), 8_usize);
        assert!(neighbors
            .iter()
            .all(|neighbor: &IVec2| *neighbor != IVec2::ZERO
                && neighbor.abs().max_element() == 1_i32));
    }
}
