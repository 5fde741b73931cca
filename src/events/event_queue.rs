use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use log::trace;

/// Single-threaded FIFO shared between toolkit callbacks that push events and
/// the frame loop that drains them once per frame.
pub struct EventQueue<T: std::fmt::Debug> {
    pending: Rc<RefCell<VecDeque<T>>>,
}

impl<T: std::fmt::Debug> Clone for EventQueue<T> {
    fn clone(&self) -> Self {
        Self {
            pending: Rc::clone(&self.pending),
        }
    }
}

pub struct EventSender<T: std::fmt::Debug> {
    queue: EventQueue<T>,
}

impl<T: std::fmt::Debug> Clone for EventSender<T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
        }
    }
}

pub struct EventReceiver<T: std::fmt::Debug> {
    queue: EventQueue<T>,
}

impl<T: std::fmt::Debug> EventQueue<T> {
    pub fn new() -> (EventSender<T>, EventReceiver<T>) {
        let queue = EventQueue {
            pending: Rc::new(RefCell::new(VecDeque::new())),
        };
        (
            EventSender {
                queue: queue.clone(),
            },
            EventReceiver { queue },
        )
    }

    fn push(&self, event: T) {
        trace!(target: "events", "Queueing event: {:?}", event);
        self.pending.borrow_mut().push_back(event);
    }

    fn drain(&self) -> Vec<T> {
        self.pending.borrow_mut().drain(..).collect()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl<T: std::fmt::Debug> EventSender<T> {
    pub fn send(&self, event: T) {
        self.queue.push(event);
    }
}

impl<T: std::fmt::Debug> EventReceiver<T> {
    /// Takes every event queued since the previous call, oldest first.
    pub fn poll(&self) -> Vec<T> {
        self.queue.drain()
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_returns_events_in_order() {
        let (sender, receiver) = EventQueue::<i32>::new();
        sender.send(1);
        sender.send(2);
        sender.send(3);

        assert_eq!(receiver.pending(), 3);
        assert_eq!(receiver.poll(), vec![1, 2, 3]);
    }

    #[test]
    fn test_poll_empties_the_queue() {
        let (sender, receiver) = EventQueue::<i32>::new();
        sender.send(42);

        assert_eq!(receiver.poll(), vec![42]);
        assert!(receiver.poll().is_empty());
        assert_eq!(receiver.pending(), 0);
    }

    #[test]
    fn test_cloned_senders_share_one_queue() {
        let (sender1, receiver) = EventQueue::<i32>::new();
        let sender2 = sender1.clone();

        sender1.send(1);
        sender2.send(2);
        sender1.send(3);

        assert_eq!(receiver.poll(), vec![1, 2, 3]);
    }
}
