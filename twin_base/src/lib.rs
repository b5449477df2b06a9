//! # Twin Base
//!
//! This crate defines what it means to be a twin: a class with a stable
//! name, a zero-argument constructor, and an explicit table of mirrored
//! methods, each tagged with a dispatch policy.
//!
//! ## Philosophy
//!
//! - **Tables, not reflection**: method and class lookup go through
//!   registration tables built at init time, never through runtime name
//!   scraping.
//! - **Policies are data**: where a method executes is a value attached to
//!   its table entry, and the decision procedure is a pure function over
//!   (policy, space kind) that can be tested as a truth table.

pub mod args;
pub mod class;
pub mod classes;
pub mod object;
pub mod policy;

pub use args::{CallArg, ObjectArg};
pub use class::{InvokeError, MethodEntry, MethodHandler, MethodTable, TwinClass};
pub use classes::{ClassError, ClassRegistry};
pub use object::{shared, SharedObject, TwinCell, TwinObject};
pub use policy::{decide, DispatchDecision, DispatchPolicy};
