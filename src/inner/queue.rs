use std::fmt;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Multi-producer/multi-consumer queue holding the items and partial
/// results of a reduction.
///
/// Clones share the same underlying queue, so a producer can keep a handle
/// and feed items while the reduction is already running.
pub struct WorkQueue<T> {
    sender: Sender<T>,
    receiver: Receiver<T>,
}

impl<T> WorkQueue<T> {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();

        Self { sender, receiver }
    }

    pub fn put(&self, item: T) {
        // Both ends live in `self`, so the channel can not be disconnected.
        let _ = self.sender.send(item);
    }

    /// Take one item, waiting at most `timeout` for it to arrive.
    #[inline]
    pub fn get(&self, timeout: Duration) -> Option<T> {
        self.receiver.recv_timeout(timeout).ok()
    }

    #[inline]
    pub fn try_get(&self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// Take exactly `count` items. If any draw times out, every item taken
    /// so far is put back unchanged and `None` is returned.
    pub fn get_many(&self, count: usize, timeout: Duration) -> Option<Vec<T>> {
        let mut items = Vec::with_capacity(count);

        while items.len() < count {
            match self.get(timeout) {
                Some(item) => items.push(item),
                None => {
                    for item in items {
                        self.put(item);
                    }

                    return None;
                }
            }
        }

        Some(items)
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Remove everything currently in the queue.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }
}

impl<T> Default for WorkQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for WorkQueue<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            receiver: self.receiver.clone(),
        }
    }
}

impl<T> fmt::Debug for WorkQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkQueue").field("len", &self.len()).finish()
    }
}

impl<T> Extend<T> for WorkQueue<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            self.put(item);
        }
    }
}

impl<T> FromIterator<T> for WorkQueue<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = Self::new();
        queue.extend(iter);

        queue
    }
}
