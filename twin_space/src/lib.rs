//! # Space Controllers
//!
//! This crate drives the twin protocol: the design-side controller that
//! mirrors object lifecycles and forwards calls, the run-side command loop
//! that applies them, and the duplex channel that connects the two.
//!
//! ## Philosophy
//!
//! - **One loop, one message at a time**: each space is a single-threaded
//!   cooperative loop. Handlers get exclusive registry access for free.
//! - **Fire-and-forget**: sends never wait for a reply; a call's remote
//!   effect is unobservable to the caller by design.
//! - **Explicit context**: twins are constructed and dispatched through a
//!   [`DesignSpace`] value. There is no global singleton; "exactly one
//!   active space per process" holds because exactly one is constructed.

pub mod channel;
pub mod config;
pub mod design;
pub mod error;
pub mod launch;
pub mod run;
pub mod transport;
pub mod twin;

pub use channel::{ChannelEndpoint, DuplexChannel};
pub use config::SpaceConfig;
pub use design::DesignSpace;
pub use error::SpaceError;
pub use launch::{launch, RunSpaceHandle};
pub use run::{LoopState, RunSpace};
pub use transport::{Transport, TransportError};
pub use twin::Twin;
