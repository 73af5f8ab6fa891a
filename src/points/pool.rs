use std::collections::{HashSet, VecDeque};

use super::class::{PointClass, Strategy, ALL_CLASSES};

// Per-container candidate placement origins, partitioned into the ten
// named classes, each a FIFO queue with insertion-order dedup.
#[derive(Clone, Debug)]
pub struct PointsPool {
    queues: [VecDeque<(u32, u32)>; 10],
    seen: [HashSet<(u32, u32)>; 10],
}

impl PointsPool {
    pub fn new() -> Self {
        Self {
            queues: Default::default(),
            seen: Default::default(),
        }
    }

    fn index(class: PointClass) -> usize {
        ALL_CLASSES.iter().position(|c| *c == class).expect("exhaustive class list")
    }

    /// Inserts `(0,0)` into class `A`, the container's origin.
    pub fn seed(&mut self) {
        self.push(PointClass::A, 0, 0);
    }

    /// Appends `(x, y)` to `class`'s queue if not already present there.
    pub fn push(&mut self, class: PointClass, x: u32, y: u32) {
        let idx = Self::index(class);
        if self.seen[idx].insert((x, y)) {
            self.queues[idx].push_back((x, y));
        }
    }

    /// Iterates classes in `strategy`'s order; returns and removes the
    /// front of the first non-empty class. `None` if every class is empty.
    pub fn pop_next(&mut self, strategy: &Strategy) -> Option<(PointClass, u32, u32)> {
        for class in strategy.order() {
            let idx = Self::index(*class);
            if let Some((x, y)) = self.queues[idx].pop_front() {
                return Some((*class, x, y));
            }
        }
        None
    }

    pub fn clear(&mut self) {
        for q in self.queues.iter_mut() {
            q.clear();
        }
        for s in self.seen.iter_mut() {
            s.clear();
        }
    }

    #[cfg(test)]
    pub fn len_of(&self, class: PointClass) -> usize {
        self.queues[Self::index(class)].len()
    }
}

impl Default for PointsPool {
    fn default() -> Self {
        Self::new()
    }
}
