//! # Object Registry
//!
//! This crate implements the per-space table that translates twin
//! identities into local object instances.
//!
//! ## Philosophy
//!
//! The registry is the receiving side's half of object identity: entries
//! are created only when an instantiate message is processed, they are
//! never read across the process boundary, and only the single-threaded
//! command loop of the owning space mutates them. Entries live for the
//! space's lifetime; the protocol defines no destruction message.

use std::collections::HashMap;
use thiserror::Error;
use twin_base::SharedObject;
use twin_types::TwinId;

/// Errors for object registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The same identity was instantiated twice; a protocol violation
    #[error("Twin already registered: {0}")]
    Duplicate(TwinId),

    /// No object is registered under the identity
    #[error("Twin not found: {0}")]
    NotFound(TwinId),
}

/// Identity-to-object table for one space
pub struct ObjectRegistry {
    objects: HashMap<TwinId, SharedObject>,
}

impl ObjectRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }

    /// Registers an object under an imported identity
    pub fn register(&mut self, id: TwinId, object: SharedObject) -> Result<(), RegistryError> {
        if self.objects.contains_key(&id) {
            return Err(RegistryError::Duplicate(id));
        }
        self.objects.insert(id, object);
        Ok(())
    }

    /// Resolves an identity to its registered object
    pub fn resolve(&self, id: TwinId) -> Result<&SharedObject, RegistryError> {
        self.objects.get(&id).ok_or(RegistryError::NotFound(id))
    }

    /// Iterates over `(identity, object)` pairs (order unspecified)
    ///
    /// Used only for inventory dumps.
    pub fn iter(&self) -> impl Iterator<Item = (TwinId, &SharedObject)> + '_ {
        self.objects.iter().map(|(id, object)| (*id, object))
    }

    /// Returns the number of registered twins
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Checks if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Checks whether an identity is registered
    pub fn contains(&self, id: TwinId) -> bool {
        self.objects.contains_key(&id)
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
