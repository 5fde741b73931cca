mod event_queue;

pub use event_queue::{EventQueue, EventReceiver, EventSender};
