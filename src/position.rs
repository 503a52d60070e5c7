use std::fmt;
use std::ops::{Add, Sub};

/// An integer Position on the Grid.
///
/// `x` addresses the row and `y` the column. The same type is used for relative offsets,
/// which is why both components are signed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
	/// the row
	pub x: isize,
	/// the column
	pub y: isize,
}

impl Position {
	/// Creates a new Position
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use fuel_pathfinding::Position;
	/// let a = Position::new(3, 4);
	/// let b = Position::new(1, 1);
	///
	/// assert_eq!(a - b, Position::new(2, 3));
	/// ```
	pub const fn new(x: isize, y: isize) -> Position {
		Position { x, y }
	}

	/// Returns `(row, col)` if neither component is negative
	pub fn to_index(self) -> Option<(usize, usize)> {
		if self.x < 0 || self.y < 0 {
			None
		} else {
			Some((self.x as usize, self.y as usize))
		}
	}
}

impl Sub for Position {
	type Output = Position;
	fn sub(self, rhs: Position) -> Position {
		Position::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Add for Position {
	type Output = Position;
	fn add(self, rhs: Position) -> Position {
		Position::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl From<(isize, isize)> for Position {
	fn from((x, y): (isize, isize)) -> Position {
		Position::new(x, y)
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// A [`HashMap`](hashbrown::HashMap) keyed by Positions
pub type PositionMap<V> = hashbrown::HashMap<Position, V>;
/// A [`HashSet`](hashbrown::HashSet) of Positions
pub type PositionSet = hashbrown::HashSet<Position>;
