//! # Contract Tests
//!
//! These tests freeze the twin wire protocol. A message produced by one
//! build of the design space must stay decodable by any other build of the
//! run space, so the serialized shapes asserted here may only change with a
//! schema version bump.

pub mod wire;
