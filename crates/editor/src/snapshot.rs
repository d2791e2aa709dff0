//! Snapshot events and their multi-subscriber stream.

use std::sync::mpsc::{self, Receiver, Sender};

use caret_buffer::Position;

/// State of the engine after one handled key.
///
/// `start` and `end` are already normalized to document order; which endpoint
/// was the moving one is internal to the engine and not part of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// All rows of the buffer, in order.
    pub data: Vec<String>,
    pub start: Position,
    pub end: Position,
}

/// Push stream of snapshots with any number of subscribers.
///
/// Subscribers may join or drop at any time; late subscribers only receive
/// future snapshots (no replay). Dropped receivers are pruned on the next
/// publish.
#[derive(Debug, Default)]
pub struct SnapshotBus {
    senders: Vec<Sender<Snapshot>>,
}

impl SnapshotBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber.
    pub fn subscribe(&mut self) -> Receiver<Snapshot> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    /// Whether any subscriber is currently registered.
    ///
    /// Publishing with zero subscribers would be a no-op; the engine uses
    /// this to skip building the snapshot at all.
    pub fn has_subscribers(&self) -> bool {
        !self.senders.is_empty()
    }

    /// Send a snapshot to every live subscriber.
    pub fn publish(&mut self, snapshot: Snapshot) {
        self.senders
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}
