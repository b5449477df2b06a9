//! Class registry: class-name strings to factories

use crate::class::TwinClass;
use crate::object::{shared, SharedObject};
use std::collections::HashMap;
use thiserror::Error;

/// Factory producing a fresh shared instance of one twin class
pub type ClassFactory = fn() -> SharedObject;

/// Errors for class registry operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassError {
    #[error("Class already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Unknown class: {0}")]
    Unknown(String),
}

/// Registry of constructible twin classes
///
/// The run space can only mirror classes that were registered here before
/// its loop started; an instantiate message naming anything else means the
/// two processes disagree about the class set. Factories are plain function
/// pointers, so a registry can be handed to another thread at launch.
pub struct ClassRegistry {
    factories: HashMap<String, ClassFactory>,
}

impl ClassRegistry {
    /// Creates an empty class registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a twin class under its class name
    pub fn register<T: TwinClass>(&mut self) -> Result<(), ClassError> {
        if self.factories.contains_key(T::CLASS_NAME) {
            return Err(ClassError::AlreadyRegistered(T::CLASS_NAME.to_string()));
        }
        self.factories.insert(T::CLASS_NAME.to_string(), shared::<T>);
        Ok(())
    }

    /// Constructs a fresh instance of a registered class
    pub fn construct(&self, class_name: &str) -> Result<SharedObject, ClassError> {
        let factory = self
            .factories
            .get(class_name)
            .ok_or_else(|| ClassError::Unknown(class_name.to_string()))?;
        Ok(factory())
    }

    /// Checks whether a class name is registered
    pub fn contains(&self, class_name: &str) -> bool {
        self.factories.contains_key(class_name)
    }

    /// Iterates over registered class names (order unspecified)
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.factories.keys().map(String::as_str)
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}
