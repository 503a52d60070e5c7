use crate::Position;

/// Errors caused by invalid arguments.
///
/// An unreachable goal is not an error; planners report it as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
	/// the Grid has no rows or no columns
	#[error("grid must have at least one row and one column")]
	EmptyGrid,

	/// a row has a different length than the first one
	#[error("row {row} has {found} nodes, expected {expected}")]
	RaggedRow {
		/// index of the offending row
		row: usize,
		/// length of the first row
		expected: usize,
		/// length of the offending row
		found: usize,
	},

	/// a Node is stored in a slot that does not match its Position
	#[error("node at {found} was placed in slot {expected}")]
	MisplacedNode {
		/// the `(row, col)` slot the Node was found in
		expected: Position,
		/// the Position the Node claims
		found: Position,
	},

	/// weights have to be finite and strictly positive
	#[error("node at {position} has invalid weight {weight}")]
	InvalidWeight {
		/// Position of the Node
		position: Position,
		/// the rejected weight
		weight: f64,
	},

	/// `start` or `end` do not belong to the Grid being searched
	#[error("node at {position} is not part of the grid")]
	NodeNotInGrid {
		/// Position of the foreign Node
		position: Position,
	},
}
