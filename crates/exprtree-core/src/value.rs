//! Runtime values.
//!
//! [`Value`] is what the interpreter produces and what native functions
//! consume. Heap objects are shared through [`ObjectRef`]; two refs are equal
//! only when they point at the same object.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use ordered_float::OrderedFloat;
use parking_lot::RwLock;

use crate::{TypeHash, primitives};

/// A runtime value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Value {
    /// Result of a procedure call.
    #[default]
    Void,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    String(Arc<str>),
    Object(ObjectRef),
}

impl Value {
    /// The runtime type of this value.
    pub fn type_hash(&self) -> TypeHash {
        match self {
            Value::Void => primitives::VOID,
            Value::Bool(_) => primitives::BOOL,
            Value::Int(_) => primitives::INT,
            Value::Float(_) => primitives::FLOAT,
            Value::String(_) => primitives::STRING,
            Value::Object(obj) => obj.type_hash(),
        }
    }

    /// Short name of the value's variant, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Void => "void",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Object(_) => "object",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(f.into_inner()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "void"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Object(obj) => write!(f, "object@{}", obj.type_hash()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(OrderedFloat(x))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<ObjectRef> for Value {
    fn from(obj: ObjectRef) -> Self {
        Value::Object(obj)
    }
}

struct ScriptObject {
    type_hash: TypeHash,
    payload: RwLock<Box<dyn Any + Send + Sync>>,
}

/// Shared handle to a heap object with a type-erased payload.
#[derive(Clone)]
pub struct ObjectRef(Arc<ScriptObject>);

impl ObjectRef {
    /// Allocate an object of runtime type `type_hash` holding `payload`.
    pub fn new<T: Any + Send + Sync>(type_hash: TypeHash, payload: T) -> Self {
        ObjectRef(Arc::new(ScriptObject {
            type_hash,
            payload: RwLock::new(Box::new(payload)),
        }))
    }

    pub fn type_hash(&self) -> TypeHash {
        self.0.type_hash
    }

    /// Read the payload as `T`. Returns `None` if the payload has another type.
    pub fn with<T: Any, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let guard = self.0.payload.read();
        guard.downcast_ref::<T>().map(f)
    }

    /// Mutate the payload as `T`. Returns `None` if the payload has another type.
    pub fn with_mut<T: Any, R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut guard = self.0.payload.write();
        guard.downcast_mut::<T>().map(f)
    }

    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ObjectRef {}

impl Hash for ObjectRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("type_hash", &self.0.type_hash)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_type_hashes() {
        assert_eq!(Value::from(1).type_hash(), primitives::INT);
        assert_eq!(Value::from("a").type_hash(), primitives::STRING);
        assert_eq!(Value::from(1.5).type_hash(), primitives::FLOAT);
        assert_eq!(Value::Void.type_hash(), primitives::VOID);
    }

    #[test]
    fn object_payload_roundtrip() {
        let ty = TypeHash::from_name("Counter");
        let obj = ObjectRef::new(ty, 0i64);
        obj.with_mut(|n: &mut i64| *n += 5).unwrap();
        assert_eq!(obj.with(|n: &i64| *n), Some(5));
        assert_eq!(obj.with(|s: &String| s.len()), None);
        assert_eq!(Value::Object(obj).type_hash(), ty);
    }

    #[test]
    fn objects_compare_by_identity() {
        let ty = TypeHash::from_name("Counter");
        let a = ObjectRef::new(ty, 1i64);
        let b = ObjectRef::new(ty, 1i64);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn floats_are_hashable() {
        let mut set = std::collections::HashSet::new();
        set.insert(Value::from(0.5));
        set.insert(Value::from(0.5));
        assert_eq!(set.len(), 1);
    }
}
