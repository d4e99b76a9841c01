//! Pushes a fixed sequence onto a queue, printing it after each step, then drains it.

use min_priority_queue::{PriorityQueue, QueueError};

fn main() -> Result<(), QueueError> {
    let mut queue = PriorityQueue::new()?;
    println!("{}", queue);

    for &item in &[20, 15, 5, 10, 1] {
        queue.push(item)?;
        println!("{}", queue);
    }

    while !queue.is_empty() {
        let min = queue.pop_min()?;
        println!("popped {}: {}", min, queue);
    }

    Ok(())
}
