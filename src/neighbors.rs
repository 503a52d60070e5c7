//! Direction sets and neighbor enumeration

use crate::{Grid, Node, Position};

/// Offsets for moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
pub const MOORE_DIRECTIONS: [Position; 8] = [
	Position::new(-1, -1),
	Position::new(-1, 0),
	Position::new(-1, 1),
	Position::new(0, -1),
	Position::new(0, 1),
	Position::new(1, -1),
	Position::new(1, 0),
	Position::new(1, 1),
];

/// Offsets for moving along the 4 cardinal directions only.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
pub const MANHATTAN_DIRECTIONS: [Position; 4] = [
	Position::new(1, 0),
	Position::new(-1, 0),
	Position::new(0, 1),
	Position::new(0, -1),
];

/// Lists the Nodes adjacent to `node`.
///
/// Each neighbor is found at `node.position - offset` for every offset in `directions`.
/// Candidates outside of the Grid are skipped; the remaining ones are yielded in the order of
/// `directions`.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use fuel_pathfinding::{Grid, Position, neighbors::{neighbors, MANHATTAN_DIRECTIONS}};
/// let grid = Grid::from_fn(3, 3, |_| 1.0)?;
///
/// let corner: Vec<Position> = neighbors(&grid, &grid[(0, 0)], &MANHATTAN_DIRECTIONS)
/// 	.map(|node| node.position)
/// 	.collect();
///
/// assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);
/// # Ok::<(), fuel_pathfinding::Error>(())
/// ```
pub fn neighbors<'a>(
	grid: &'a Grid,
	node: &Node,
	directions: &'static [Position],
) -> impl Iterator<Item = &'a Node> + 'a {
	let position = node.position;
	directions
		.iter()
		.filter_map(move |&offset| grid.get(position - offset))
}
