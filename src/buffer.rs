// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Contiguous item storage with load-factor driven doubling.

use tracing::debug;

use crate::{GrowthPolicy, QueueError};

/// Allocates a vector able to hold exactly `capacity` items without reallocating.
fn allocate(capacity: usize) -> Result<Vec<i32>, QueueError> {
    let mut data = Vec::new();
    data.try_reserve_exact(capacity).map_err(|_| QueueError::Allocation { capacity })?;
    Ok(data)
}

/// Growable item storage without any ordering of its own.
///
/// The logical capacity is tracked separately from the vector's, since the allocator may hand
/// out more room than requested and growth has to follow the policy exactly.
#[derive(Clone, Debug)]
pub struct GrowableBuffer {
    data: Vec<i32>,
    capacity: usize,
    policy: GrowthPolicy,
}

impl GrowableBuffer {
    /// Returns an empty buffer with the default initial capacity.
    pub fn new() -> Result<GrowableBuffer, QueueError> {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Returns an empty buffer sized and grown according to `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Result<GrowableBuffer, QueueError> {
        let capacity = policy.initial_capacity();
        Ok(GrowableBuffer { data: allocate(capacity)?, capacity, policy })
    }

    /// Doubles the capacity if holding `pending` items would reach the load factor.
    ///
    /// On failure the buffer is left untouched.
    pub fn ensure_capacity_for(&mut self, pending: usize) -> Result<(), QueueError> {
        if !self.policy.needs_growth(pending, self.capacity) {
            return Ok(());
        }
        let new_capacity = self.capacity.checked_mul(2)
            .ok_or(QueueError::Allocation { capacity: usize::MAX })?;
        let mut data = allocate(new_capacity)?;
        data.extend_from_slice(&self.data);
        debug!(old_capacity = self.capacity, new_capacity, len = self.data.len(),
               "growing queue storage");
        self.data = data;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Writes `item` just past the last valid slot.
    ///
    /// The caller must have made room with `ensure_capacity_for`.
    ///
    /// # Panics
    ///
    /// Panics if every slot is already in use.
    pub fn append_raw(&mut self, item: i32) {
        assert!(self.data.len() < self.capacity,
                "append past capacity ({}/{})", self.data.len(), self.capacity);
        self.data.push(item);
    }

    /// Removes and returns the last valid item.
    pub fn pop_last(&mut self) -> Option<i32> {
        self.data.pop()
    }

    /// Returns the number of valid items.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no valid items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of slots allocated under the growth policy.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the policy governing growth.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Forgets every item. Capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.data
    }
}

#[cfg(test)]
mod test {
    use super::GrowableBuffer;
    use crate::{GrowthPolicy, QueueError};

    fn push(buf: &mut GrowableBuffer, item: i32) {
        let pending = buf.len() + 1;
        buf.ensure_capacity_for(pending).unwrap();
        buf.append_raw(item);
    }

    #[test]
    fn test_new() {
        let buf = GrowableBuffer::new().unwrap();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 5);
        assert!(buf.is_empty());
        assert_eq!(buf.as_slice(), &[] as &[i32]);
    }

    #[test]
    fn test_growth_sequence() {
        let mut buf = GrowableBuffer::new().unwrap();
        let mut capacities = vec![];
        for i in 0..16 {
            push(&mut buf, i);
            capacities.push(buf.capacity());
        }
        assert_eq!(capacities, vec![5, 5, 5, 10, 10, 10, 10, 20, 20, 20, 20,
                                    20, 20, 20, 40, 40]);
        assert_eq!(buf.as_slice(), &(0..16).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn test_growth_preserves_order() {
        let mut buf = GrowableBuffer::new().unwrap();
        for &i in &[9, -3, 7] {
            push(&mut buf, i);
        }
        buf.ensure_capacity_for(4).unwrap();
        assert_eq!(buf.capacity(), 10);
        assert_eq!(buf.as_slice(), &[9, -3, 7]);
    }

    #[test]
    fn test_no_growth_below_load_factor() {
        let mut buf = GrowableBuffer::new().unwrap();
        buf.ensure_capacity_for(3).unwrap();
        assert_eq!(buf.capacity(), 5);
    }

    #[test]
    fn test_pop_last_and_clear() {
        let mut buf = GrowableBuffer::new().unwrap();
        assert_eq!(buf.pop_last(), None);
        for i in 0..6 {
            push(&mut buf, i);
        }
        assert_eq!(buf.pop_last(), Some(5));
        assert_eq!(buf.len(), 5);
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 10);
    }

    #[test]
    fn test_append_raw_fills_to_capacity() {
        let mut buf = GrowableBuffer::new().unwrap();
        for i in 0..5 {
            buf.append_raw(i);
        }
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.capacity(), 5);
    }

    #[test]
    #[should_panic(expected = "append past capacity (5/5)")]
    fn test_append_raw_past_capacity() {
        let mut buf = GrowableBuffer::new().unwrap();
        for i in 0..7 {
            buf.append_raw(i);
        }
    }

    #[test]
    fn test_allocation_failure() {
        let policy = GrowthPolicy::new(usize::MAX, 0.75).unwrap();
        assert_eq!(GrowableBuffer::with_policy(policy).unwrap_err(),
                   QueueError::Allocation { capacity: usize::MAX });
    }
}
