//! In-memory duplex channel

use crate::transport::{Transport, TransportError};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use twin_proto::Message;

/// A pair of cross-wired message queues forming one duplex channel
///
/// Stands in for whatever carries bytes between the two processes in a
/// deployment; what matters to the protocol is ordered, reliable, framed
/// delivery and a non-blocking poll, which mpsc provides.
pub struct DuplexChannel;

impl DuplexChannel {
    /// Creates both endpoints of a duplex channel
    pub fn pair() -> (ChannelEndpoint, ChannelEndpoint) {
        let (near_tx, far_rx) = mpsc::channel();
        let (far_tx, near_rx) = mpsc::channel();
        (
            ChannelEndpoint {
                sender: near_tx,
                receiver: near_rx,
            },
            ChannelEndpoint {
                sender: far_tx,
                receiver: far_rx,
            },
        )
    }
}

/// One endpoint of a [`DuplexChannel`]
pub struct ChannelEndpoint {
    sender: Sender<Message>,
    receiver: Receiver<Message>,
}

impl Transport for ChannelEndpoint {
    fn send(&mut self, message: Message) -> Result<(), TransportError> {
        self.sender
            .send(message)
            .map_err(|_| TransportError::Disconnected)
    }

    fn try_recv(&mut self) -> Result<Option<Message>, TransportError> {
        match self.receiver.try_recv() {
            Ok(message) => Ok(Some(message)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(TransportError::Disconnected),
        }
    }
}
