use crate::Position;
use std::hash::{Hash, Hasher};

/// A single Cell of the Grid.
///
/// `weight` is the Cost of entering the Cell. Two Nodes are considered equal if they share a
/// Position, regardless of their weight.
#[derive(Clone, Copy, Debug)]
pub struct Node {
	/// where the Node is
	pub position: Position,
	/// how expensive it is to step onto the Node. Always positive inside a [`Grid`](crate::Grid)
	pub weight: f64,
}

impl Node {
	/// Creates a new Node
	pub const fn new(position: Position, weight: f64) -> Node {
		Node { position, weight }
	}
}

impl PartialEq for Node {
	fn eq(&self, rhs: &Self) -> bool {
		self.position == rhs.position
	}
}
impl Eq for Node {}

impl Hash for Node {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.position.hash(state);
	}
}
