//! Transport abstraction over the duplex channel

use thiserror::Error;
use twin_proto::Message;

/// Transport errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The counterpart endpoint is gone
    #[error("Channel disconnected")]
    Disconnected,
}

/// One endpoint of an ordered, reliable, framed duplex channel
///
/// The transport is assumed to deliver messages in send order and to keep
/// queued messages available until consumed, even after the sender is gone.
/// `try_recv` is the non-blocking poll the command loop is built around.
pub trait Transport: Send {
    /// Sends one message; never blocks on the receiver
    fn send(&mut self, message: Message) -> Result<(), TransportError>;

    /// Receives one pending message, if any, without blocking
    fn try_recv(&mut self) -> Result<Option<Message>, TransportError>;
}
