//! Command payload structures

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use twin_types::TwinId;

/// Payload of an `Instantiate` command
///
/// Carries enough information for the run space to construct a same-class
/// counterpart: the class name, which must be registered in the receiver's
/// class registry, and the identity the design space assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TwinDescriptor {
    /// Name of a zero-argument-constructible twin class
    pub class_name: String,
    /// Identity minted by the design space
    pub id: TwinId,
}

impl TwinDescriptor {
    /// Creates a new twin descriptor
    pub fn new(class_name: impl Into<String>, id: TwinId) -> Self {
        Self {
            class_name: class_name.into(),
            id,
        }
    }
}

impl fmt::Display for TwinDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.class_name, self.id)
    }
}

/// One argument position of a forwarded invocation
///
/// Plain values travel by value; twin-typed arguments travel as reference
/// markers and are substituted for the object registered under the carried
/// identity on the receiving side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ArgValue {
    /// Pass-through value, representable by the payload serialization
    Data(Value),
    /// Reference marker: substitute the local object registered under this id
    TwinRef(TwinId),
}

/// Payload of an `Invoke` command
///
/// The target identity must already exist in the receiver's object registry
/// before this message is processed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvocationDescriptor {
    /// Identity of the twin the method is invoked on
    pub id: TwinId,
    /// Method name, resolved against the twin class's method table
    pub method: String,
    /// Ordered arguments, excluding the receiver slot
    pub args: Vec<ArgValue>,
}

impl InvocationDescriptor {
    /// Creates a new invocation descriptor
    pub fn new(id: TwinId, method: impl Into<String>, args: Vec<ArgValue>) -> Self {
        Self {
            id,
            method: method.into(),
            args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_twin_descriptor_roundtrip() {
        let descriptor = TwinDescriptor::new("Probe", TwinId::new());
        let json = serde_json::to_value(&descriptor).unwrap();
        let back: TwinDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(descriptor, back);
    }

    #[test]
    fn test_twin_descriptor_display() {
        let id = TwinId::new();
        let descriptor = TwinDescriptor::new("Probe", id);
        assert_eq!(descriptor.to_string(), format!("Probe@{}", id));
    }

    #[test]
    fn test_invocation_descriptor_preserves_arg_order() {
        let descriptor = InvocationDescriptor::new(
            TwinId::new(),
            "print_test",
            vec![
                ArgValue::Data(json!("Hello")),
                ArgValue::Data(json!("World")),
            ],
        );
        let json = serde_json::to_value(&descriptor).unwrap();
        let back: InvocationDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back.args[0], ArgValue::Data(json!("Hello")));
        assert_eq!(back.args[1], ArgValue::Data(json!("World")));
    }

    #[test]
    fn test_twin_ref_roundtrip() {
        let id = TwinId::new();
        let arg = ArgValue::TwinRef(id);
        let json = serde_json::to_value(&arg).unwrap();
        let back: ArgValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, ArgValue::TwinRef(id));
    }
}
