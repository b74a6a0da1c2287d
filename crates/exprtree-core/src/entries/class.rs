//! Classes: the types list initializers construct.

use crate::TypeHash;

/// A registered class with single inheritance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    pub name: String,
    pub type_hash: TypeHash,
    pub base_class: Option<TypeHash>,
    /// Directly implemented interfaces; inherited ones live on the bases.
    pub interfaces: Vec<TypeHash>,
    /// Static and instance members. The registry fills this in.
    pub methods: Vec<TypeHash>,
    pub constructors: Vec<TypeHash>,
    /// Abstract classes have no usable constructors.
    pub is_abstract: bool,
}

impl ClassEntry {
    /// A class named `name`, hashed with [`TypeHash::from_name`].
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            base_class: None,
            interfaces: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            is_abstract: false,
        }
    }

    /// Derive from `base`.
    pub fn with_base(mut self, base: TypeHash) -> Self {
        self.base_class = Some(base);
        self
    }

    /// Implement `interface`.
    pub fn with_interface(mut self, interface: TypeHash) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Mark the class abstract.
    pub fn as_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Whether `interface` is listed on this class itself (bases are not searched).
    pub fn declares_interface(&self, interface: TypeHash) -> bool {
        self.interfaces.contains(&interface)
    }
}
