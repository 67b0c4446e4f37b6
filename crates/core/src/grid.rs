//! Coordinates, cardinal orientation, and the fixed destination region.

use std::fmt;

/// A robot's position on the integer plane, as reported by `OK <x> <y>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Horizontal coordinate. Increases east.
    pub x: i32,
    /// Vertical coordinate. Increases north.
    pub y: i32,
}

impl Position {
    /// Builds a position from its two axis values.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step in `direction` from this one.
    #[must_use]
    pub const fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.x, self.y + 1),
            Direction::South => Self::new(self.x, self.y - 1),
            Direction::East => Self::new(self.x + 1, self.y),
            Direction::West => Self::new(self.x - 1, self.y),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A cardinal facing. The original reference encodes this as a sign on a
/// single axis; this crate models it as its own type so the navigator's
/// turn logic reads as facing arithmetic instead of sign-flip tricks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Facing toward increasing `y`.
    North,
    /// Facing toward decreasing `y`.
    South,
    /// Facing toward increasing `x`.
    East,
    /// Facing toward decreasing `x`.
    West,
}

impl Direction {
    /// The facing 90 degrees clockwise from this one.
    #[must_use]
    pub const fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The facing 90 degrees counter-clockwise from this one.
    #[must_use]
    pub const fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The facing 180 degrees from this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        self.right().right()
    }

    /// The single turn that, applied to `self`, produces `target`.
    #[must_use]
    pub const fn turn_toward(self, target: Self) -> Turn {
        if self as u8 == target as u8 {
            Turn::None
        } else if self.opposite() as u8 == target as u8 {
            Turn::Reverse
        } else if self.right() as u8 == target as u8 {
            Turn::Right
        } else {
            Turn::Left
        }
    }
}

/// One of the four single-command turns the navigator can issue; `Reverse`
/// is not itself a wire command but a signal that two `TURN` commands (in
/// either rotational direction) are required to face `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Already facing the target direction.
    None,
    /// A single `TURN LEFT` suffices.
    Left,
    /// A single `TURN RIGHT` suffices.
    Right,
    /// Facing directly away; two turns are needed, in either order.
    Reverse,
}

/// The fixed 5x5 region the sweeper scans once the navigator delivers the
/// robot to [`DestinationRegion::ENTRY`].
#[derive(Debug, Clone, Copy)]
pub struct DestinationRegion;

impl DestinationRegion {
    /// The corner the navigator routes to and the sweeper starts from.
    pub const ENTRY: Position = Position::new(-2, 2);

    /// Side length of the square region, in cells.
    pub const SIDE: i32 = 5;

    /// Whether `position` falls within the 5x5 region anchored at
    /// [`Self::ENTRY`].
    #[must_use]
    pub fn contains(position: Position) -> bool {
        let min_x = Self::ENTRY.x;
        let max_x = Self::ENTRY.x + Self::SIDE - 1;
        let min_y = Self::ENTRY.y - Self::SIDE + 1;
        let max_y = Self::ENTRY.y;
        (min_x..=max_x).contains(&position.x) && (min_y..=max_y).contains(&position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_is_a_full_clockwise_cycle_of_four() {
        let mut facing = Direction::North;
        for _ in 0..4 {
            facing = facing.right();
        }
        assert_eq!(facing, Direction::North);
    }

    #[test]
    fn opposite_is_involutive() {
        for facing in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ] {
            assert_eq!(facing.opposite().opposite(), facing);
        }
    }

    #[test]
    fn turn_toward_same_direction_is_none() {
        assert_eq!(Direction::East.turn_toward(Direction::East), Turn::None);
    }

    #[test]
    fn turn_toward_opposite_direction_is_reverse() {
        assert_eq!(Direction::North.turn_toward(Direction::South), Turn::Reverse);
        assert_eq!(Direction::East.turn_toward(Direction::West), Turn::Reverse);
    }

    #[test]
    fn turn_toward_right_neighbor_is_right() {
        assert_eq!(Direction::North.turn_toward(Direction::East), Turn::Right);
    }

    #[test]
    fn turn_toward_left_neighbor_is_left() {
        assert_eq!(Direction::North.turn_toward(Direction::West), Turn::Left);
    }

    #[test]
    fn stepped_moves_one_cell_in_facing_direction() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.stepped(Direction::North), Position::new(0, 1));
        assert_eq!(origin.stepped(Direction::East), Position::new(1, 0));
    }

    #[test]
    fn destination_region_contains_entry_corner() {
        assert!(DestinationRegion::contains(DestinationRegion::ENTRY));
    }

    #[test]
    fn destination_region_excludes_one_cell_outside_each_edge() {
        assert!(!DestinationRegion::contains(Position::new(-3, 2)));
        assert!(!DestinationRegion::contains(Position::new(2, 2)));
        assert!(!DestinationRegion::contains(Position::new(-2, 3)));
        assert!(!DestinationRegion::contains(Position::new(-2, -3)));
    }
}
