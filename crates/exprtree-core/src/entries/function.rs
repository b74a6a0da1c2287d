//! Function entry for the registry.
//!
//! [`FunctionEntry`] combines a [`FunctionDef`] with its implementation. The
//! registry hands entries out as `Arc<FunctionEntry>`, which is what expression
//! nodes hold as their method reference.

use crate::{FunctionDef, NativeFn};

/// A registered callable: signature plus body.
#[derive(Debug, Clone)]
pub struct FunctionEntry {
    pub def: FunctionDef,
    pub implementation: FunctionImpl,
}

impl FunctionEntry {
    /// Create an entry backed by a native function.
    pub fn native(def: FunctionDef, native_fn: NativeFn) -> Self {
        Self {
            def,
            implementation: FunctionImpl::Native(native_fn),
        }
    }

    /// Create an entry with no body (interface members).
    pub fn abstract_method(def: FunctionDef) -> Self {
        Self {
            def,
            implementation: FunctionImpl::Abstract,
        }
    }


    /// The native body, unless the entry is abstract.
    pub fn native_fn(&self) -> Option<&NativeFn> {
        match &self.implementation {
            FunctionImpl::Native(f) => Some(f),
            FunctionImpl::Abstract => None,
        }
    }

    /// Unqualified name.
    pub fn name(&self) -> &str {
        &self.def.name
    }
}

impl PartialEq for FunctionEntry {
    fn eq(&self, other: &Self) -> bool {
        // NativeFn has no meaningful equality
        self.def == other.def
    }
}

/// Body of a [`FunctionEntry`].
#[derive(Debug, Clone)]
pub enum FunctionImpl {
    Native(NativeFn),
    /// Declared without a body; calls resolve through the receiver's type.
    Abstract,
}
