//! Variable scopes.
//!
//! A stack of maps keyed by variable identity. Block variables start unbound
//! and are bound by the first assignment.

use exprtree_core::{TypeHash, Value};
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
struct Scope {
    bindings: FxHashMap<TypeHash, Option<Value>>,
}

#[derive(Debug)]
pub(crate) struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    pub(crate) fn new() -> Self {
        Self {
            scopes: vec![Scope::default()],
        }
    }

    pub(crate) fn push_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Pop the innermost scope. The global scope is never popped.
    pub(crate) fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Declare an unbound variable in the innermost scope.
    pub(crate) fn declare(&mut self, id: TypeHash) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.bindings.insert(id, None);
        }
    }

    /// Bind the nearest declaration of `id`, or a global if none exists.
    pub(crate) fn assign(&mut self, id: TypeHash, value: Value) {
        let slot = self
            .scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.bindings.get_mut(&id));
        match slot {
            Some(slot) => *slot = Some(value),
            None => self.define_global(id, value),
        }
    }

    pub(crate) fn define_global(&mut self, id: TypeHash, value: Value) {
        if let Some(global) = self.scopes.first_mut() {
            global.bindings.insert(id, Some(value));
        }
    }

    /// The value of the nearest declaration of `id`, if bound.
    pub(crate) fn lookup(&self, id: TypeHash) -> Option<&Value> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.bindings.get(&id))
            .and_then(Option::as_ref)
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.scopes.len()
    }
}
