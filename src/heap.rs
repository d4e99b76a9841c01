// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt::{self, Debug, Display};
use std::mem;
use std::slice;

use compare::{Compare, Natural, natural};
use tracing::trace;

use crate::buffer::GrowableBuffer;
use crate::{GrowthPolicy, QueueError};

// The heap is a complete binary tree stored level by level. Here's the
// layout of a tree with 10 items, numbers being offsets in the buffer:
//
//             0
//          /     \
//         1       2
//        / \     / \
//       3   4   5   6
//      / \  |
//     7  8  9
//
// Every item is less than or equal to both of its children, so the
// smallest item sits at offset 0.

/// Returns the index of the parent of the item at `i`.
pub fn parent(i: usize) -> usize {
    debug_assert!(i > 0);
    (i - 1) / 2
}

/// Returns the index of the left child of the item at `i`.
pub fn left_child(i: usize) -> usize { 2 * i + 1 }

/// Returns the index of the right child of the item at `i`.
pub fn right_child(i: usize) -> usize { 2 * i + 2 }

/// The first `v.len() - 1` items form a valid heap and the last item
/// has just been appended.
fn sift_up<C: Compare<i32>>(v: &mut [i32], cmp: &C) {
    debug_assert!(!v.is_empty());
    let mut i = v.len() - 1;
    while i > 0 {
        let p = parent(i);
        if !cmp.compares_lt(&v[i], &v[p]) { return; }
        v.swap(i, p);
        i = p;
    }
}

/// The root of an otherwise valid heap has been replaced with some other
/// value. Moves it down until both children are no smaller.
fn sift_down<C: Compare<i32>>(v: &mut [i32], cmp: &C) {
    let mut i = 0;
    loop {
        let l = left_child(i);
        let r = right_child(i);
        if v.len() <= l { return; } // No children. We're done.
        let smaller = if v.len() <= r || cmp.compares_le(&v[l], &v[r]) { l } else { r };
        if cmp.compares_le(&v[i], &v[smaller]) { return; }
        v.swap(i, smaller);
        i = smaller;
    }
}

/// A minimum priority queue of `i32` items backed by a binary heap.
///
/// The queue exclusively owns its storage. Growth reallocates, so no reference into the queue
/// survives a mutation; the borrow checker enforces this for `as_slice` and `iter`.
#[derive(Clone)]
pub struct PriorityQueue {
    buf: GrowableBuffer,
    cmp: Natural<i32>,
}

impl PriorityQueue {
    /// Returns an empty queue with room for five items.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_priority_queue::PriorityQueue;
    ///
    /// let queue = PriorityQueue::new().unwrap();
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.capacity(), 5);
    /// ```
    pub fn new() -> Result<PriorityQueue, QueueError> {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Returns an empty queue whose storage is sized and grown according to `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Result<PriorityQueue, QueueError> {
        Ok(PriorityQueue { buf: GrowableBuffer::with_policy(policy)?, cmp: natural() })
    }

    /// Pushes an item onto the queue.
    ///
    /// Storage grows before the item is written, so on `QueueError::Allocation` the queue is
    /// left exactly as it was.
    pub fn push(&mut self, item: i32) -> Result<(), QueueError> {
        debug_assert!(self.is_valid());
        let pending = self.buf.len() + 1;
        self.buf.ensure_capacity_for(pending)?;
        self.buf.append_raw(item);
        sift_up(self.buf.as_mut_slice(), &self.cmp);
        trace!(item, len = self.buf.len(), "pushed");
        debug_assert!(self.is_valid());
        Ok(())
    }

    /// Removes the smallest item from the queue and returns it.
    ///
    /// Returns `QueueError::EmptyQueue` if the queue was empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_priority_queue::{PriorityQueue, QueueError};
    ///
    /// let mut queue = PriorityQueue::new().unwrap();
    /// assert_eq!(queue.pop_min(), Err(QueueError::EmptyQueue));
    ///
    /// queue.push(4).unwrap();
    /// queue.push(2).unwrap();
    /// assert_eq!(queue.pop_min(), Ok(2));
    /// assert_eq!(queue.pop_min(), Ok(4));
    /// assert!(queue.is_empty());
    /// ```
    pub fn pop_min(&mut self) -> Result<i32, QueueError> {
        debug_assert!(self.is_valid());
        let last = self.buf.pop_last().ok_or(QueueError::EmptyQueue)?;
        let min = if self.buf.is_empty() {
            last
        } else {
            let v = self.buf.as_mut_slice();
            let min = mem::replace(&mut v[0], last);
            sift_down(v, &self.cmp);
            min
        };
        trace!(item = min, len = self.buf.len(), "popped min");
        debug_assert!(self.is_valid());
        Ok(min)
    }

    /// Returns the smallest item in the queue without removing it.
    ///
    /// Returns `QueueError::EmptyQueue` if the queue is empty.
    pub fn peek(&self) -> Result<i32, QueueError> {
        self.buf.as_slice().first().cloned().ok_or(QueueError::EmptyQueue)
    }

    /// Returns the number of items in the queue.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the queue contains no items.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the number of items the queue can hold before its storage is reallocated.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the policy governing storage growth.
    pub fn policy(&self) -> GrowthPolicy {
        self.buf.policy()
    }

    /// Returns the items in heap order, which is not sorted order.
    pub fn as_slice(&self) -> &[i32] {
        self.buf.as_slice()
    }

    /// Returns an iterator visiting all items in heap order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.buf.as_slice().iter())
    }

    /// Renders the queue as `Priority Queue (<len>/<capacity>): [<items>]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_priority_queue::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::new().unwrap();
    /// assert_eq!(queue.display_text(), "Priority Queue (0/5): []");
    ///
    /// queue.push(3).unwrap();
    /// queue.push(1).unwrap();
    /// assert_eq!(queue.display_text(), "Priority Queue (2/5): [1, 3]");
    /// ```
    pub fn display_text(&self) -> String {
        self.to_string()
    }

    /// Removes all items from the queue. Capacity is kept.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Consumes the queue and returns its items as a vector in heap order.
    pub fn into_vec(self) -> Vec<i32> { self.buf.into_vec() }

    /// Consumes the queue and returns its items as a vector in sorted (ascending) order.
    pub fn into_sorted_vec(self) -> Vec<i32> {
        let cmp = self.cmp;
        let mut vec = self.buf.into_vec();
        let mut sorted = Vec::with_capacity(vec.len());
        while let Some(last) = vec.pop() {
            if vec.is_empty() {
                sorted.push(last);
            } else {
                sorted.push(mem::replace(&mut vec[0], last));
                sift_down(&mut vec, &cmp);
            }
        }
        sorted
    }

    /// Checks if the queue is valid.
    ///
    /// The queue is valid if every item other than the root is greater than
    /// or equal to its parent.
    fn is_valid(&self) -> bool {
        let v = self.buf.as_slice();
        v.len() <= self.buf.capacity() &&
        (1..v.len()).all(|i| self.cmp.compares_ge(&v[i], &v[parent(i)]))
    }
}

impl Display for PriorityQueue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Priority Queue ({}/{}): [", self.len(), self.capacity())?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 { f.write_str(", ")?; }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

impl Debug for PriorityQueue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// An iterator over a `PriorityQueue` in heap order.
///
/// Acquire through [`PriorityQueue::iter`](struct.PriorityQueue.html#method.iter).
pub struct Iter<'a>(slice::Iter<'a, i32>);

impl<'a> Clone for Iter<'a> {
    fn clone(&self) -> Iter<'a> { Iter(self.0.clone()) }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;
    #[inline] fn next(&mut self) -> Option<&'a i32> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<&'a i32> { self.0.next_back() }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a PriorityQueue {
    type Item = &'a i32;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> { self.iter() }
}
