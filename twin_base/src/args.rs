//! Call arguments and their wire translation

use crate::object::SharedObject;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;
use twin_proto::ArgValue;
use twin_types::TwinId;

/// A twin-typed argument, resolved to a local object
///
/// The id and class name are captured at translation time so handlers can
/// describe the argument without borrowing its cell; the target of an
/// invocation may be passed to itself as an argument, and its cell is
/// already mutably borrowed while the handler runs.
#[derive(Clone)]
pub struct ObjectArg {
    id: TwinId,
    class_name: String,
    shared: SharedObject,
}

impl ObjectArg {
    /// Creates an object argument from a resolved shared handle
    pub fn new(id: TwinId, class_name: impl Into<String>, shared: SharedObject) -> Self {
        Self {
            id,
            class_name: class_name.into(),
            shared,
        }
    }

    /// Identity of the referenced twin
    pub fn id(&self) -> TwinId {
        self.id
    }

    /// Class name of the referenced twin
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The underlying shared object handle
    pub fn shared(&self) -> &SharedObject {
        &self.shared
    }

    /// Checks whether this argument refers to exactly the given instance
    pub fn is_same_instance(&self, other: &SharedObject) -> bool {
        Rc::ptr_eq(&self.shared, other)
    }
}

impl fmt::Debug for ObjectArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectArg")
            .field("id", &self.id)
            .field("class_name", &self.class_name)
            .finish()
    }
}

impl fmt::Display for ObjectArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.class_name, self.id)
    }
}

/// One in-memory argument of a mirrored call
///
/// Both spaces use this form: the design side builds it directly and lowers
/// it to [`ArgValue`] before sending; the run side raises received wire
/// arguments back by resolving reference markers against its registry.
#[derive(Debug, Clone)]
pub enum CallArg {
    /// Plain value, passed through by value
    Data(Value),
    /// Twin reference, resolved to the local counterpart
    Object(ObjectArg),
}

impl CallArg {
    /// Builds a data argument from any serializable value
    pub fn data<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::Data(serde_json::to_value(value)?))
    }

    /// Builds a data argument from a string (the common case)
    pub fn text(value: impl Into<String>) -> Self {
        Self::Data(Value::String(value.into()))
    }

    /// Lowers this argument to its wire form
    ///
    /// Objects become reference markers carrying only their identity; no
    /// object state ever crosses the channel.
    pub fn to_wire(&self) -> ArgValue {
        match self {
            CallArg::Data(value) => ArgValue::Data(value.clone()),
            CallArg::Object(object) => ArgValue::TwinRef(object.id()),
        }
    }

    /// Returns the plain value, if this is a data argument
    pub fn as_data(&self) -> Option<&Value> {
        match self {
            CallArg::Data(value) => Some(value),
            CallArg::Object(_) => None,
        }
    }

    /// Returns the object reference, if this is a twin argument
    pub fn as_object(&self) -> Option<&ObjectArg> {
        match self {
            CallArg::Data(_) => None,
            CallArg::Object(object) => Some(object),
        }
    }
}

impl fmt::Display for CallArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallArg::Data(Value::String(text)) => write!(f, "{}", text),
            CallArg::Data(value) => write!(f, "{}", value),
            CallArg::Object(object) => write!(f, "{}", object),
        }
    }
}
