//! Function signatures.
//!
//! [`FunctionDef`] describes a callable: its identity, owner, parameters,
//! return type, traits and visibility. It carries no implementation; see
//! [`FunctionEntry`](crate::FunctionEntry) for that.

use bitflags::bitflags;

use crate::TypeHash;

bitflags! {
    /// Traits of a function declaration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FunctionTraits: u8 {
        /// Member function without a receiver.
        const STATIC = 1 << 0;
        /// Object constructor.
        const CONSTRUCTOR = 1 << 1;
        /// Does not modify the receiver.
        const CONST = 1 << 2;
        /// Dispatched through the receiver's runtime type.
        const VIRTUAL = 1 << 3;
    }
}

/// Member accessibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Accessible from anywhere.
    #[default]
    Public,
    /// Accessible from the declaring type and derived types.
    Protected,
    /// Accessible only from the declaring type.
    Private,
}

/// A formal parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name, used in diagnostics only.
    pub name: String,
    /// Declared type.
    pub data_type: TypeHash,
}

impl Param {
    /// Create a parameter.
    pub fn new(name: impl Into<String>, data_type: TypeHash) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Definition of a function, method or constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// Identity of this overload.
    pub func_hash: TypeHash,
    /// Unqualified name. Constructors use the owner's name.
    pub name: String,
    /// Declaring type for methods and constructors.
    pub object_type: Option<TypeHash>,
    /// Formal parameters in order.
    pub params: Vec<Param>,
    /// Return type (`void` for procedures and constructors).
    pub return_type: TypeHash,
    /// Declaration traits.
    pub traits: FunctionTraits,
    /// Accessibility.
    pub visibility: Visibility,
}

impl FunctionDef {
    /// Create a public instance method on `owner`.
    ///
    /// The hash is derived from owner, name and parameter types.
    pub fn method(
        owner: TypeHash,
        name: impl Into<String>,
        params: Vec<Param>,
        return_type: TypeHash,
    ) -> Self {
        let name = name.into();
        let param_hashes: Vec<TypeHash> = params.iter().map(|p| p.data_type).collect();
        Self {
            func_hash: TypeHash::from_method(owner, &name, &param_hashes),
            name,
            object_type: Some(owner),
            params,
            return_type,
            traits: FunctionTraits::empty(),
            visibility: Visibility::Public,
        }
    }

    /// Create a public static method on `owner`.
    pub fn static_method(
        owner: TypeHash,
        name: impl Into<String>,
        params: Vec<Param>,
        return_type: TypeHash,
    ) -> Self {
        Self::method(owner, name, params, return_type).with_traits(FunctionTraits::STATIC)
    }

    /// Create a public constructor for `owner`.
    pub fn constructor(owner: TypeHash, owner_name: impl Into<String>, params: Vec<Param>) -> Self {
        let param_hashes: Vec<TypeHash> = params.iter().map(|p| p.data_type).collect();
        Self {
            func_hash: TypeHash::from_constructor(owner, &param_hashes),
            name: owner_name.into(),
            object_type: Some(owner),
            params,
            return_type: owner,
            traits: FunctionTraits::CONSTRUCTOR,
            visibility: Visibility::Public,
        }
    }

    /// Add declaration traits.
    pub fn with_traits(mut self, traits: FunctionTraits) -> Self {
        self.traits |= traits;
        self
    }

    /// Set the accessibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Check if this is a static member.
    pub fn is_static(&self) -> bool {
        self.traits.contains(FunctionTraits::STATIC)
    }

    /// Check if this is a constructor.
    pub fn is_constructor(&self) -> bool {
        self.traits.contains(FunctionTraits::CONSTRUCTOR)
    }

    /// Check if this is an instance method (has a receiver).
    pub fn is_instance_method(&self) -> bool {
        self.object_type.is_some() && !self.is_static() && !self.is_constructor()
    }

    /// Check if this method is callable from outside its declaring type.
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Number of formal parameters.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Parameter types in order.
    pub fn param_types(&self) -> impl Iterator<Item = TypeHash> + '_ {
        self.params.iter().map(|p| p.data_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives;

    fn list() -> TypeHash {
        TypeHash::from_name("List<int>")
    }

    #[test]
    fn method_is_instance() {
        let def = FunctionDef::method(list(), "Add", vec![Param::new("item", primitives::INT)], primitives::VOID);
        assert!(def.is_instance_method());
        assert!(!def.is_static());
        assert!(def.is_public());
        assert_eq!(def.param_count(), 1);
        assert_eq!(def.func_hash, TypeHash::from_method(list(), "Add", &[primitives::INT]));
    }

    #[test]
    fn static_method_is_not_instance() {
        let def = FunctionDef::static_method(list(), "Add", vec![Param::new("item", primitives::INT)], primitives::VOID);
        assert!(def.is_static());
        assert!(!def.is_instance_method());
    }

    #[test]
    fn constructor_traits() {
        let def = FunctionDef::constructor(list(), "List<int>", vec![]);
        assert!(def.is_constructor());
        assert!(!def.is_instance_method());
        assert_eq!(def.return_type, list());
    }

    #[test]
    fn visibility_builder() {
        let def = FunctionDef::method(list(), "Add", vec![], primitives::VOID)
            .with_visibility(Visibility::Private);
        assert!(!def.is_public());
    }
}
