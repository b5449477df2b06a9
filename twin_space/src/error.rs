//! Space error types

use crate::transport::TransportError;
use thiserror::Error;
use twin_base::{ClassError, InvokeError};
use twin_proto::CodecError;
use twin_registry::RegistryError;

/// Errors raised by space controllers and command loops
///
/// Two severities matter to the loop: protocol violations are fatal and
/// halt the receiving space, resolution failures are surfaced through the
/// log and the loop continues. [`SpaceError::is_fatal`] draws that line.
#[derive(Debug, Error)]
pub enum SpaceError {
    /// Wire-level decode failure: unknown tag, bad payload, schema drift
    #[error("Protocol violation: {0}")]
    Codec(#[from] CodecError),

    /// Object registry failure
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Class registry failure
    #[error("Class error: {0}")]
    Class(#[from] ClassError),

    /// Method invocation failure
    #[error("Invoke error: {0}")]
    Invoke(#[from] InvokeError),

    /// Channel failure
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Argument encoding failure on the sending side
    #[error("Argument encoding failed: {0}")]
    ArgEncoding(#[from] serde_json::Error),

    /// The run space thread could not be started
    #[error("Failed to start run space: {0}")]
    Spawn(String),

    /// The run space thread panicked
    #[error("Run space panicked")]
    RunSpacePanicked,
}

impl SpaceError {
    /// Whether a receiving loop must halt on this error
    ///
    /// Unknown commands, schema drift, duplicate identities and unknown
    /// classes mean the two spaces have diverged; continuing would silently
    /// desynchronize them. Unknown identities or methods on a single invoke
    /// are resolution failures: logged, then the loop carries on.
    pub fn is_fatal(&self) -> bool {
        match self {
            SpaceError::Codec(_) => true,
            SpaceError::Registry(RegistryError::Duplicate(_)) => true,
            SpaceError::Registry(RegistryError::NotFound(_)) => false,
            SpaceError::Class(_) => true,
            SpaceError::Invoke(_) => false,
            SpaceError::ArgEncoding(_) => false,
            SpaceError::Transport(_) => true,
            SpaceError::Spawn(_) | SpaceError::RunSpacePanicked => true,
        }
    }
}
