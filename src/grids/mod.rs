pub mod wall_grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

/// Directions are numbered in the order the generator scans them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl From<usize> for Direction {
    // wraps, so `d + i` can be fed straight in while rotating
    fn from(dir: usize) -> Self {
        match dir & 3 {
            0 => Direction::Left,
            1 => Direction::Right,
            2 => Direction::Up,
            3 => Direction::Down,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod test_direction {
    use super::*;

    #[test]
    fn from_wraps_around() {
        assert_eq!(Direction::from(0), Direction::Left);
        assert_eq!(Direction::from(3), Direction::Down);
        assert_eq!(Direction::from(4), Direction::Left);
        assert_eq!(Direction::from(6), Direction::Up);
    }

    #[test]
    fn neg_is_opposite() {
        for dir in Direction::ALL.iter() {
            assert_ne!(-*dir, *dir);
            assert_eq!(-(-*dir), *dir);
        }
        assert_eq!(-Direction::Up, Direction::Down);
        assert_eq!(-Direction::Left, Direction::Right);
    }
}
