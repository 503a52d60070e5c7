use crate::{Cost, Node, Position};
use std::ops::{Deref, Index};

/// A Path found by one of the planners
///
/// Derefs to the Nodes stepped onto on the way to the goal, in order. The start is not part of
/// them, so a Path from a Node to itself is empty. [`cost`](Path::cost) is the total Cost of the
/// steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
	nodes: Vec<Node>,
	cost: Cost,
}

impl Path {
	/// creates a new Path with the given sequence of Nodes and total Cost
	pub fn new(nodes: Vec<Node>, cost: Cost) -> Path {
		Path { nodes, cost }
	}

	/// the total Cost of the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The Positions of the Nodes along the Path
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use fuel_pathfinding::{Node, Path, Position};
	/// let path = Path::new(
	/// 	vec![
	/// 		Node::new(Position::new(0, 1), 1.0),
	/// 		Node::new(Position::new(1, 1), 2.0),
	/// 	],
	/// 	3.0,
	/// );
	///
	/// assert_eq!(path.positions(), vec![Position::new(0, 1), Position::new(1, 1)]);
	/// ```
	pub fn positions(&self) -> Vec<Position> {
		self.nodes.iter().map(|node| node.position).collect()
	}
}

impl Deref for Path {
	type Target = [Node];
	fn deref(&self) -> &[Node] {
		&self.nodes
	}
}

impl Index<usize> for Path {
	type Output = Node;
	fn index(&self, index: usize) -> &Node {
		&self.nodes[index]
	}
}

impl IntoIterator for Path {
	type Item = Node;
	type IntoIter = std::vec::IntoIter<Node>;
	fn into_iter(self) -> Self::IntoIter {
		self.nodes.into_iter()
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a Node;
	type IntoIter = std::slice::Iter<'a, Node>;
	fn into_iter(self) -> Self::IntoIter {
		self.nodes.iter()
	}
}
