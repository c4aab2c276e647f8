use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Legacy encoding of "no food on the board".
    pub const SENTINEL: Point = Point { x: -1, y: -1 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn translated(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Grid offset of one step; y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallCollisionMode {
    Death,
    WrapAround,
}

impl WallCollisionMode {
    pub fn from_wrap_edges(wrap_edges: bool) -> Self {
        if wrap_edges {
            WallCollisionMode::WrapAround
        } else {
            WallCollisionMode::Death
        }
    }

    pub fn wraps(&self) -> bool {
        matches!(self, WallCollisionMode::WrapAround)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_pairs() {
        for direction in Direction::ALL {
            assert!(direction.is_opposite(&direction.opposite()));
            assert!(!direction.is_opposite(&direction));
        }
        assert!(!Direction::Up.is_opposite(&Direction::Left));
    }

    #[test]
    fn test_translated_moves_one_cell() {
        let p = Point::new(3, 3);
        assert_eq!(p.translated(Direction::Up), Point::new(3, 2));
        assert_eq!(p.translated(Direction::Down), Point::new(3, 4));
        assert_eq!(p.translated(Direction::Left), Point::new(2, 3));
        assert_eq!(p.translated(Direction::Right), Point::new(4, 3));
    }

    #[test]
    fn test_wall_mode_from_flag() {
        assert!(WallCollisionMode::from_wrap_edges(true).wraps());
        assert_eq!(
            WallCollisionMode::from_wrap_edges(false),
            WallCollisionMode::Death
        );
    }
}
