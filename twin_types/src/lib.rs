//! # Core Types
//!
//! This crate defines the fundamental types shared by every part of the
//! twin proxy: twin identities and the two space kinds.
//!
//! ## Philosophy
//!
//! - **Opaque identities**: a [`TwinId`] is a stable token, not an address.
//!   It is minted once, in the design space, and only ever compared by value.
//! - **Explicit sides**: code that behaves differently per space receives a
//!   [`SpaceKind`] instead of consulting ambient state.

pub mod ids;
pub mod space;

pub use ids::TwinId;
pub use space::SpaceKind;
