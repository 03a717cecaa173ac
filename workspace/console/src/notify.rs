//! Transient user notifications.
//!
//! The console only queues toasts; the UI layer renders and dismisses them.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Debug, Default)]
struct Queue {
    toasts: Vec<Toast>,
    next_id: usize,
}

/// Cheap to clone; clones share one queue.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    queue: Arc<Mutex<Queue>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_success(&self, message: impl Into<String>) -> usize {
        self.push(message.into(), ToastKind::Success)
    }

    pub fn show_error(&self, message: impl Into<String>) -> usize {
        self.push(message.into(), ToastKind::Error)
    }

    fn push(&self, message: String, kind: ToastKind) -> usize {
        let mut queue = self.queue.lock();
        let id = queue.next_id;
        queue.next_id += 1;
        debug!(id, ?kind, %message, "toast queued");
        queue.toasts.push(Toast { id, message, kind });
        id
    }

    /// Toasts currently on screen, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.lock().toasts.clone()
    }

    pub fn dismiss(&self, id: usize) {
        self.queue.lock().toasts.retain(|toast| toast.id != id);
    }

    /// Takes every pending toast, leaving the queue empty.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut self.queue.lock().toasts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_queue() {
        let notifier = Notifier::new();
        let other = notifier.clone();

        let first = notifier.show_success("saved");
        let second = other.show_error("failed");
        assert_ne!(first, second);

        let toasts = notifier.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[1].kind, ToastKind::Error);

        notifier.dismiss(first);
        assert_eq!(other.toasts().len(), 1);

        let drained = other.drain();
        assert_eq!(drained[0].message, "failed");
        assert!(notifier.toasts().is_empty());
    }
}
