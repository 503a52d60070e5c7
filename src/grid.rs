use crate::{Error, Node, Position};
use std::ops::Index;

/// A rectangular Grid of [`Node`]s, stored row-major in a flat Vec.
///
/// A Grid is validated once on construction and never changes afterwards, so it can be shared
/// between any number of searches, including ones running on different threads.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use fuel_pathfinding::{Grid, Position};
/// let grid = Grid::from_fn(2, 3, |pos| 1.0 + pos.y as f64)?;
///
/// assert_eq!((grid.rows(), grid.cols()), (2, 3));
/// assert_eq!(grid[(1, 2)].weight, 3.0);
/// assert!(grid.get(Position::new(2, 0)).is_none());
/// # Ok::<(), fuel_pathfinding::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
	nodes: Vec<Node>,
	rows: usize,
	cols: usize,
}

impl Grid {
	/// Creates a Grid from rows of Nodes.
	///
	/// Every row must have the same length, every Node must sit in the slot matching its
	/// Position and every weight must be finite and greater than zero.
	pub fn new(rows: Vec<Vec<Node>>) -> Result<Grid, Error> {
		let row_count = rows.len();
		let col_count = rows.first().map_or(0, Vec::len);
		if row_count == 0 || col_count == 0 {
			return Err(Error::EmptyGrid);
		}

		let mut nodes = Vec::with_capacity(row_count * col_count);
		for (x, row) in rows.into_iter().enumerate() {
			if row.len() != col_count {
				return Err(Error::RaggedRow {
					row: x,
					expected: col_count,
					found: row.len(),
				});
			}
			for (y, node) in row.into_iter().enumerate() {
				let slot = Position::new(x as isize, y as isize);
				if node.position != slot {
					return Err(Error::MisplacedNode {
						expected: slot,
						found: node.position,
					});
				}
				if !node.weight.is_finite() || node.weight <= 0.0 {
					return Err(Error::InvalidWeight {
						position: slot,
						weight: node.weight,
					});
				}
				nodes.push(node);
			}
		}

		Ok(Grid {
			nodes,
			rows: row_count,
			cols: col_count,
		})
	}

	/// Creates a `rows` x `cols` Grid, asking `get_weight` for the weight of every Position.
	pub fn from_fn(
		rows: usize,
		cols: usize,
		mut get_weight: impl FnMut(Position) -> f64,
	) -> Result<Grid, Error> {
		let rows = (0..rows)
			.map(|x| {
				(0..cols)
					.map(|y| {
						let position = Position::new(x as isize, y as isize);
						Node::new(position, get_weight(position))
					})
					.collect()
			})
			.collect();
		Grid::new(rows)
	}

	/// The number of rows (valid `x` are `0..rows`)
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// The number of columns (valid `y` are `0..cols`)
	pub fn cols(&self) -> usize {
		self.cols
	}

	/// The total number of Nodes
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Always `false`, a Grid cannot be constructed without Nodes
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	fn index_of(&self, position: Position) -> Option<usize> {
		let (x, y) = position.to_index()?;
		if x < self.rows && y < self.cols {
			Some(x * self.cols + y)
		} else {
			None
		}
	}

	/// Returns the Node at `position`, or `None` if it is out of bounds
	pub fn get(&self, position: Position) -> Option<&Node> {
		self.index_of(position).map(|index| &self.nodes[index])
	}

	/// Checks if `node` belongs to this Grid.
	///
	/// The Position has to be in bounds and the weight has to match the stored Node, which
	/// catches Nodes taken from a different Grid.
	pub fn contains(&self, node: &Node) -> bool {
		self.get(node.position)
			.map_or(false, |stored| stored.weight == node.weight)
	}

	/// Iterates over all Nodes in row-major order
	pub fn iter(&self) -> std::slice::Iter<'_, Node> {
		self.nodes.iter()
	}
}

/// Grids are equal if they have the same shape and every Node has the same weight.
impl PartialEq for Grid {
	fn eq(&self, rhs: &Self) -> bool {
		self.rows == rhs.rows
			&& self.cols == rhs.cols
			&& self
				.nodes
				.iter()
				.zip(&rhs.nodes)
				.all(|(a, b)| a.position == b.position && a.weight == b.weight)
	}
}

impl Index<(usize, usize)> for Grid {
	type Output = Node;
	fn index(&self, (x, y): (usize, usize)) -> &Node {
		assert!(
			x < self.rows && y < self.cols,
			"({}, {}) is outside of a {}x{} Grid",
			x,
			y,
			self.rows,
			self.cols
		);
		&self.nodes[x * self.cols + y]
	}
}

impl Index<Position> for Grid {
	type Output = Node;
	fn index(&self, position: Position) -> &Node {
		match self.index_of(position) {
			Some(index) => &self.nodes[index],
			None => panic!("{} is outside of a {}x{} Grid", position, self.rows, self.cols),
		}
	}
}

impl<'a> IntoIterator for &'a Grid {
	type Item = &'a Node;
	type IntoIter = std::slice::Iter<'a, Node>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
