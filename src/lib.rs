// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A minimum priority queue implemented with a binary heap.
//!
//! A `PriorityQueue` stores `i32` items in a contiguous buffer laid out as an implicit binary
//! tree, so the smallest item is always at the front. The buffer starts with room for
//! [`INITIAL_CAPACITY`] items and doubles whenever the next insertion would push the ratio of
//! length to capacity to [`LOAD_FACTOR`] or beyond.
//!
//! Insertion has amortized `O(log n)` time complexity. Popping the smallest item is
//! `O(log n)`. Retrieving the smallest item is `O(1)`.
//!
//! ```
//! use min_priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new().unwrap();
//! for &item in &[20, 15, 5, 10, 1] {
//!     queue.push(item).unwrap();
//! }
//!
//! assert_eq!(queue.to_string(), "Priority Queue (5/10): [1, 5, 15, 20, 10]");
//! assert_eq!(queue.pop_min(), Ok(1));
//! assert_eq!(queue.peek(), Ok(5));
//! ```

use thiserror::Error;

mod buffer;
mod heap;

pub use crate::buffer::GrowableBuffer;
pub use crate::heap::{left_child, parent, right_child, Iter, PriorityQueue};

/// Number of slots a queue allocates on construction.
pub const INITIAL_CAPACITY: usize = 5;

/// Length-to-capacity ratio that triggers doubling before an insertion.
pub const LOAD_FACTOR: f64 = 0.75;

/// Errors produced by queue operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QueueError {
    /// Storage for `capacity` slots could not be obtained.
    #[error("failed to allocate storage for {capacity} items")]
    Allocation { capacity: usize },
    /// The queue holds no items.
    #[error("priority queue is empty")]
    EmptyQueue,
    /// A growth policy was built from unusable parameters.
    #[error("invalid growth policy (initial capacity {initial_capacity}, load factor {load_factor})")]
    InvalidPolicy { initial_capacity: usize, load_factor: f64 },
}

/// Controls the initial allocation and the point at which the buffer doubles.
///
/// # Examples
///
/// ```
/// use min_priority_queue::{GrowthPolicy, PriorityQueue};
///
/// let policy = GrowthPolicy::new(2, 1.0).unwrap();
/// let mut queue = PriorityQueue::with_policy(policy).unwrap();
/// queue.push(7).unwrap();
/// assert_eq!(queue.capacity(), 2);
/// queue.push(3).unwrap();
/// assert_eq!(queue.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPolicy {
    initial_capacity: usize,
    load_factor: f64,
}

impl GrowthPolicy {
    /// Returns a policy with the given initial capacity and load factor.
    ///
    /// The capacity must be non-zero and the load factor must lie in `(0, 1]`, otherwise
    /// `QueueError::InvalidPolicy` is returned. A load factor above one would let the length
    /// outrun the capacity.
    pub fn new(initial_capacity: usize, load_factor: f64) -> Result<GrowthPolicy, QueueError> {
        // `!(x > 0.0)` also rejects NaN
        if initial_capacity == 0 || !(load_factor > 0.0) || load_factor > 1.0 {
            return Err(QueueError::InvalidPolicy { initial_capacity, load_factor });
        }
        Ok(GrowthPolicy { initial_capacity, load_factor })
    }

    /// Returns the number of slots allocated on construction.
    pub fn initial_capacity(&self) -> usize { self.initial_capacity }

    /// Returns the length-to-capacity ratio at which storage doubles.
    pub fn load_factor(&self) -> f64 { self.load_factor }

    /// Returns `true` if a buffer of `capacity` slots must grow before holding `pending` items.
    pub fn needs_growth(&self, pending: usize, capacity: usize) -> bool {
        pending as f64 / capacity as f64 >= self.load_factor
    }
}

impl Default for GrowthPolicy {
    fn default() -> GrowthPolicy {
        GrowthPolicy { initial_capacity: INITIAL_CAPACITY, load_factor: LOAD_FACTOR }
    }
}
