use crate::{Cost, Grid, Node, Position, PositionMap};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry of the Frontier.
///
/// `cost` is the accumulated Cost of reaching `position`, `priority` the key the heap is ordered
/// by. Equal priorities are popped in insertion order.
#[derive(Debug, Clone, Copy)]
pub struct Element {
	pub position: Position,
	pub cost: Cost,
	priority: Cost,
	sequence: u64,
}

impl PartialEq for Element {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl Eq for Element {}
impl PartialOrd for Element {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for Element {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.priority
			.total_cmp(&self.priority)
			.then_with(|| rhs.sequence.cmp(&self.sequence))
	}
}

/// A min-priority-queue of Positions
#[derive(Debug, Default)]
pub struct Frontier {
	heap: BinaryHeap<Element>,
	pushed: u64,
}

impl Frontier {
	pub fn with_capacity(capacity: usize) -> Frontier {
		Frontier {
			heap: BinaryHeap::with_capacity(capacity),
			pushed: 0,
		}
	}

	pub fn push(&mut self, position: Position, cost: Cost, priority: Cost) {
		self.heap.push(Element {
			position,
			cost,
			priority,
			sequence: self.pushed,
		});
		self.pushed += 1;
	}

	pub fn pop(&mut self) -> Option<Element> {
		self.heap.pop()
	}
}

/// Looks up the best known Cost of `position`, `INFINITY` if it was never reached.
pub fn best_cost(costs: &PositionMap<Cost>, position: Position) -> Cost {
	costs.get(&position).copied().unwrap_or(Cost::INFINITY)
}

/// Follows the predecessor links from `end` back to `start`.
///
/// The returned Nodes are in walking order and exclude `start`.
pub fn reconstruct(
	grid: &Grid,
	previous: &PositionMap<Position>,
	start: Position,
	end: Position,
) -> Vec<Node> {
	let mut steps = vec![];
	let mut current = end;

	while current != start {
		steps.push(grid[current]);
		current = previous[&current];
	}
	steps.reverse();
	steps
}
