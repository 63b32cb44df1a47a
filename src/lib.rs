//! Indexed priority queue for cost-based routing
//!
//! This crate provides a binary min-heap keyed by priority that stores one
//! identifier per entry and can re-prioritize an entry in place. It is the
//! "pick the cheapest next" container that Dijkstra/A*-style routing needs:
//! nodes are pushed as they are discovered, their priority is lowered as
//! shorter routes are found, and they are popped in ascending cost order.
//!
//! # Example
//!
//! ```rust
//! use ordered_float::OrderedFloat;
//! use routing_pq::{QueueError, RoutingQueue};
//!
//! let mut queue = RoutingQueue::new();
//! queue.push(1, OrderedFloat(5.0));
//! queue.push(2, OrderedFloat(3.0));
//! queue.push(3, OrderedFloat(8.0));
//! queue.update(&3, OrderedFloat(1.0));
//!
//! assert_eq!(queue.pop().map(|e| e.identifier), Ok(3));
//! assert_eq!(queue.pop().map(|e| e.identifier), Ok(2));
//! assert_eq!(queue.pop().map(|e| e.identifier), Ok(1));
//! assert_eq!(queue.pop(), Err(QueueError::Empty));
//! ```

pub mod error;
pub mod queue;

pub use error::QueueError;
pub use queue::{Entry, IndexedPriorityQueue};

/// The queue as routing uses it: 64-bit node identifiers ordered by a
/// floating-point cost.
pub type RoutingQueue = IndexedPriorityQueue<i64, ordered_float::OrderedFloat<f64>>;
