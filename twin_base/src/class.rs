//! Twin classes and their method tables

use crate::args::CallArg;
use crate::policy::DispatchPolicy;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Errors raised while invoking a mirrored method
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("Class {class} has no method {method}")]
    UnknownMethod { class: String, method: String },

    #[error("Bad arguments for {method}: {reason}")]
    BadArguments { method: String, reason: String },
}

impl InvokeError {
    /// Creates a bad-arguments error for a handler
    pub fn bad_arguments(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BadArguments {
            method: method.into(),
            reason: reason.into(),
        }
    }
}

/// Handler function for one mirrored method
///
/// Handlers receive the twin's state and the translated arguments, excluding
/// the receiver slot. Return values are never observed across the channel,
/// so handlers only report success or failure.
pub type MethodHandler<T> = fn(&mut T, &[CallArg]) -> Result<(), InvokeError>;

/// One entry of a method table
pub struct MethodEntry<T> {
    /// Where this method executes
    pub policy: DispatchPolicy,
    /// The method body
    pub handler: MethodHandler<T>,
}

/// Method-name-to-handler table for a twin class
///
/// Built once per class at init time; lookup by name is the only dynamic
/// step in dispatch.
pub struct MethodTable<T> {
    entries: HashMap<&'static str, MethodEntry<T>>,
}

impl<T> MethodTable<T> {
    /// Creates an empty method table
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Adds a method, builder style
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn with_method(
        mut self,
        name: &'static str,
        policy: DispatchPolicy,
        handler: MethodHandler<T>,
    ) -> Self {
        self.entries.insert(name, MethodEntry { policy, handler });
        self
    }

    /// Looks up a method entry by name
    pub fn entry(&self, name: &str) -> Option<&MethodEntry<T>> {
        self.entries.get(name)
    }

    /// Returns the dispatch policy of a method, if it exists
    pub fn policy(&self, name: &str) -> Option<DispatchPolicy> {
        self.entries.get(name).map(|entry| entry.policy)
    }

    /// Iterates over registered method names (order unspecified)
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Returns the number of registered methods
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for MethodTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A type that can live as a twin in both spaces
///
/// Implementors provide a stable class name, a zero-argument constructor
/// (the run space constructs counterparts with no other information), and
/// the table of mirrored methods. The `Debug` bound supplies the
/// human-readable form used by inventory dumps.
pub trait TwinClass: fmt::Debug + Sized + 'static {
    /// Stable class name carried in twin descriptors
    const CLASS_NAME: &'static str;

    /// Constructs a fresh instance with no arguments
    fn create() -> Self;

    /// Builds the method table for this class
    fn methods() -> MethodTable<Self>;
}
