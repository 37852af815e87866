//! Open lists. All three variants share the [`Frontier`] interface; only the
//! priority queue honours the key passed to [`Frontier::push`].

use crate::search::{FrontierError, HeuristicValue};
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::VecDeque, fmt::Debug, hash::Hash};

pub trait Frontier<T>: Debug {
    /// Insert an item. FIFO and LIFO frontiers ignore `key`.
    fn push(&mut self, item: T, key: HeuristicValue);

    fn pop(&mut self) -> Option<T>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Lower the key of an item already in the frontier. Returns whether the
    /// item was found with a larger key.
    fn decrease_key(&mut self, _item: &T, _key: HeuristicValue) -> Result<bool, FrontierError> {
        Err(FrontierError::Unsupported)
    }
}

/// First in, first out.
#[derive(Debug)]
pub struct FifoFrontier<T> {
    queue: VecDeque<T>,
}

impl<T> FifoFrontier<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Frontier<T> for FifoFrontier<T> {
    fn push(&mut self, item: T, _key: HeuristicValue) {
        self.queue.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Debug)]
pub struct LifoFrontier<T> {
    stack: Vec<T>,
}

impl<T> LifoFrontier<T> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<T> Default for LifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Frontier<T> for LifoFrontier<T> {
    fn push(&mut self, item: T, _key: HeuristicValue) {
        self.stack.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Min-priority queue. Items with equal keys come out in the order they were
/// pushed; a decreased key counts as a fresh insertion.
#[derive(Debug)]
pub struct PriorityFrontier<T: Hash + Eq> {
    queue: PriorityQueue<T, Reverse<(HeuristicValue, u64)>>,
    insertions: u64,
}

impl<T: Hash + Eq> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            insertions: 0,
        }
    }

    fn next_priority(&mut self, key: HeuristicValue) -> Reverse<(HeuristicValue, u64)> {
        self.insertions += 1;
        Reverse((key, self.insertions))
    }

    /// Lower the key of a queued item. Returns `false`, leaving the queue
    /// untouched, if the item is not queued or `key` is not smaller.
    pub fn lower_key(&mut self, item: &T, key: HeuristicValue) -> bool {
        let improves = matches!(
            self.queue.get_priority(item),
            Some(Reverse((current, _))) if key < *current
        );
        if !improves {
            return false;
        }
        let priority = self.next_priority(key);
        self.queue.change_priority(item, priority);
        true
    }
}

impl<T: Hash + Eq> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Debug> Frontier<T> for PriorityFrontier<T> {
    /// Pushing an item that is already queued replaces its key.
    fn push(&mut self, item: T, key: HeuristicValue) {
        let priority = self.next_priority(key);
        self.queue.push(item, priority);
    }

    fn pop(&mut self) -> Option<T> {
        self.queue.pop().map(|(item, _)| item)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn decrease_key(&mut self, item: &T, key: HeuristicValue) -> Result<bool, FrontierError> {
        Ok(self.lower_key(item, key))
    }
}
