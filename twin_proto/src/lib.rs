//! # Twin Wire Protocol
//!
//! This crate defines the messages exchanged between the design space and
//! the run space, and the codec that packs and unpacks them.
//!
//! ## Philosophy
//!
//! - **Tagged, not polymorphic**: the command tag alone determines the
//!   payload shape. Receivers never inspect a payload to discover its type.
//! - **Versionable**: every message carries a schema version so the two
//!   spaces can detect drift instead of misinterpreting each other.
//! - **Pure codec**: [`pack`] and [`unpack`] are side-effect free; what a
//!   receiver does with a malformed message is the receiver's concern.

pub mod descriptor;
pub mod message;
pub mod version;

pub use descriptor::{ArgValue, InvocationDescriptor, TwinDescriptor};
pub use message::{
    pack, unpack, CodecError, Command, Message, EVAL_ACTION, EXIT_ACTION, INSTANTIATE_ACTION,
    INVENTORY_ACTION, INVOKE_ACTION, LOG_ACTION, TWIN_SCHEMA_VERSION,
};
pub use version::SchemaVersion;
