//! Wire message envelope and the pack/unpack codec

use crate::descriptor::{InvocationDescriptor, TwinDescriptor};
use crate::version::SchemaVersion;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Twin protocol schema version (v1.0).
pub const TWIN_SCHEMA_VERSION: SchemaVersion = SchemaVersion::new(1, 0);

/// Command tag: stop the receiving loop.
pub const EXIT_ACTION: &str = "space.exit";

/// Command tag: record an arbitrary payload on the receiving side.
pub const LOG_ACTION: &str = "space.log";

/// Command tag: reserved, not supported.
pub const EVAL_ACTION: &str = "space.eval";

/// Command tag: construct and register a twin counterpart.
pub const INSTANTIATE_ACTION: &str = "twin.instantiate";

/// Command tag: invoke a method on a registered twin.
pub const INVOKE_ACTION: &str = "twin.invoke";

/// Command tag: dump the receiver's object registry.
pub const INVENTORY_ACTION: &str = "space.inventory";

/// A decoded protocol command with its typed payload
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Stop the receiving loop
    Exit,
    /// Record an arbitrary payload
    Log(Value),
    /// Reserved; receivers report it as unsupported without crashing
    Eval(Value),
    /// Construct and register a counterpart object
    Instantiate(TwinDescriptor),
    /// Invoke a method on a registered object, discarding the result
    Invoke(InvocationDescriptor),
    /// Emit one human-readable line per registry entry
    Inventory,
}

impl Command {
    /// Returns the wire tag for this command
    pub fn action(&self) -> &'static str {
        match self {
            Command::Exit => EXIT_ACTION,
            Command::Log(_) => LOG_ACTION,
            Command::Eval(_) => EVAL_ACTION,
            Command::Instantiate(_) => INSTANTIATE_ACTION,
            Command::Invoke(_) => INVOKE_ACTION,
            Command::Inventory => INVENTORY_ACTION,
        }
    }
}

/// Wire message envelope
///
/// The command tag alone determines the payload shape; commands without a
/// payload carry `null`. The envelope is what crosses the channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Command tag (one of the `*_ACTION` constants)
    pub command: String,
    /// Protocol schema version of the sender
    pub version: SchemaVersion,
    /// Command-specific payload
    pub payload: Value,
}

/// Errors produced by the codec
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Unknown command tag: {0}")]
    UnknownCommand(String),

    #[error("Payload does not match command {command}: {source}")]
    Payload {
        command: String,
        source: serde_json::Error,
    },

    #[error("Incompatible schema version: received {received}, expected {expected}")]
    SchemaMismatch {
        received: SchemaVersion,
        expected: SchemaVersion,
    },
}

/// Packs a command into a wire message
pub fn pack(command: Command) -> Result<Message, CodecError> {
    let action = command.action();
    let payload = match command {
        Command::Exit | Command::Inventory => Value::Null,
        Command::Log(value) | Command::Eval(value) => value,
        Command::Instantiate(descriptor) => {
            serde_json::to_value(&descriptor).map_err(|source| CodecError::Payload {
                command: action.to_string(),
                source,
            })?
        }
        Command::Invoke(invocation) => {
            serde_json::to_value(&invocation).map_err(|source| CodecError::Payload {
                command: action.to_string(),
                source,
            })?
        }
    };
    Ok(Message {
        command: action.to_string(),
        version: TWIN_SCHEMA_VERSION,
        payload,
    })
}

/// Unpacks a wire message into a typed command
///
/// An unknown tag or incompatible schema version is a decode failure; the
/// receiving loop escalates it to a protocol violation.
pub fn unpack(message: &Message) -> Result<Command, CodecError> {
    if !message.version.is_compatible_with(&TWIN_SCHEMA_VERSION) {
        return Err(CodecError::SchemaMismatch {
            received: message.version,
            expected: TWIN_SCHEMA_VERSION,
        });
    }
    match message.command.as_str() {
        EXIT_ACTION => Ok(Command::Exit),
        LOG_ACTION => Ok(Command::Log(message.payload.clone())),
        EVAL_ACTION => Ok(Command::Eval(message.payload.clone())),
        INSTANTIATE_ACTION => {
            let descriptor = decode_payload(message)?;
            Ok(Command::Instantiate(descriptor))
        }
        INVOKE_ACTION => {
            let invocation = decode_payload(message)?;
            Ok(Command::Invoke(invocation))
        }
        INVENTORY_ACTION => Ok(Command::Inventory),
        other => Err(CodecError::UnknownCommand(other.to_string())),
    }
}

fn decode_payload<T: for<'de> Deserialize<'de>>(message: &Message) -> Result<T, CodecError> {
    serde_json::from_value(message.payload.clone()).map_err(|source| CodecError::Payload {
        command: message.command.clone(),
        source,
    })
}
