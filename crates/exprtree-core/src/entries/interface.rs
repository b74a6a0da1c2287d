//! Interfaces such as `IEnumerable`.

use crate::TypeHash;

/// A registered interface. Classes list the interfaces they implement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceEntry {
    pub name: String,
    pub type_hash: TypeHash,
    /// Directly extended interfaces.
    pub base_interfaces: Vec<TypeHash>,
    /// Member hashes, attached at function registration.
    pub methods: Vec<TypeHash>,
}

impl InterfaceEntry {
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self {
            type_hash: TypeHash::from_name(&name),
            name,
            base_interfaces: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Add `base` to the extended interfaces.
    pub fn with_base(mut self, base: TypeHash) -> Self {
        self.base_interfaces.push(base);
        self
    }
}
