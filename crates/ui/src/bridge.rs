use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use engine::{Command, Event};

/// Channel-backed bridge between the UI loop and a session worker thread.
///
/// The UI pushes commands and polls events each frame; the worker applies
/// commands to the [`engine::Session`] and sends the emitted events back.
#[derive(Debug)]
pub struct SessionBridge {
    command_tx: Sender<Command>,
    event_rx: Receiver<Event>,
}

impl SessionBridge {
    /// Creates a bridge from a command sender and an event receiver.
    pub fn new(command_tx: Sender<Command>, event_rx: Receiver<Event>) -> Self {
        Self {
            command_tx,
            event_rx,
        }
    }

    /// Sends one command to the session worker.
    pub fn send_command(&self, command: Command) -> Result<(), BridgeError> {
        self.command_tx
            .send(command)
            .map_err(|_| BridgeError::Disconnected)
    }

    /// Receives all currently queued events without blocking.
    pub fn drain_events(&self) -> Result<Vec<Event>, BridgeError> {
        let mut events = Vec::new();
        loop {
            match self.event_rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => return Ok(events),
                Err(TryRecvError::Disconnected) => return Err(BridgeError::Disconnected),
            }
        }
    }
}

/// Error raised when the session worker has gone away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeError {
    Disconnected,
}
