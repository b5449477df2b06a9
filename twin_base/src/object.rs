//! Type-erased twin objects

use crate::args::CallArg;
use crate::class::{InvokeError, MethodTable, TwinClass};
use crate::policy::DispatchPolicy;
use std::cell::RefCell;
use std::rc::Rc;

/// Object-safe view of a registered twin
///
/// This is what registries and command loops work with; the concrete class
/// behind it is recovered only through its method table, never by downcast.
pub trait TwinObject {
    /// Stable class name of the underlying twin class
    fn class_name(&self) -> &'static str;

    /// Returns the dispatch policy of a method, if the class defines it
    fn method_policy(&self, method: &str) -> Option<DispatchPolicy>;

    /// Invokes a mirrored method with translated arguments
    fn invoke(&mut self, method: &str, args: &[CallArg]) -> Result<(), InvokeError>;

    /// Human-readable one-line form for inventory dumps
    fn summary(&self) -> String;
}

/// Shared handle to a twin object
///
/// Spaces are single-threaded cooperative loops, so plain `Rc`/`RefCell`
/// sharing is sufficient; no lock is ever taken.
pub type SharedObject = Rc<RefCell<dyn TwinObject>>;

/// Pairs a twin's state with its class's method table
pub struct TwinCell<T: TwinClass> {
    state: T,
    table: MethodTable<T>,
}

impl<T: TwinClass> TwinCell<T> {
    /// Creates a cell around a freshly constructed instance
    pub fn new() -> Self {
        Self::from_state(T::create())
    }

    /// Creates a cell around existing state
    pub fn from_state(state: T) -> Self {
        Self {
            state,
            table: T::methods(),
        }
    }

    /// Returns the twin's state
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Returns the twin's state mutably
    pub fn state_mut(&mut self) -> &mut T {
        &mut self.state
    }
}

impl<T: TwinClass> Default for TwinCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TwinClass> TwinObject for TwinCell<T> {
    fn class_name(&self) -> &'static str {
        T::CLASS_NAME
    }

    fn method_policy(&self, method: &str) -> Option<DispatchPolicy> {
        self.table.policy(method)
    }

    fn invoke(&mut self, method: &str, args: &[CallArg]) -> Result<(), InvokeError> {
        let entry = self
            .table
            .entry(method)
            .ok_or_else(|| InvokeError::UnknownMethod {
                class: T::CLASS_NAME.to_string(),
                method: method.to_string(),
            })?;
        (entry.handler)(&mut self.state, args)
    }

    fn summary(&self) -> String {
        format!("{:?}", self.state)
    }
}

/// Wraps a fresh instance of a twin class in a shared handle
pub fn shared<T: TwinClass>() -> SharedObject {
    Rc::new(RefCell::new(TwinCell::<T>::new()))
}
