//! The registry's per-type record.

use crate::TypeHash;

use super::{ClassEntry, InterfaceEntry, PrimitiveEntry};

/// Any registered type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeEntry {
    Primitive(PrimitiveEntry),
    Class(ClassEntry),
    Interface(InterfaceEntry),
}

impl TypeEntry {
    pub fn type_hash(&self) -> TypeHash {
        match self {
            TypeEntry::Primitive(p) => p.type_hash,
            TypeEntry::Class(c) => c.type_hash,
            TypeEntry::Interface(i) => i.type_hash,
        }
    }

    /// Name as written in source, e.g. `List<int>`.
    pub fn name(&self) -> &str {
        match self {
            TypeEntry::Primitive(p) => p.name(),
            TypeEntry::Class(c) => &c.name,
            TypeEntry::Interface(i) => &i.name,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeEntry::Primitive(_))
    }

    pub fn as_class(&self) -> Option<&ClassEntry> {
        match self {
            TypeEntry::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceEntry> {
        match self {
            TypeEntry::Interface(iface) => Some(iface),
            _ => None,
        }
    }

}

macro_rules! impl_from_entry {
    ($($entry:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$entry> for TypeEntry {
                fn from(entry: $entry) -> Self {
                    TypeEntry::$variant(entry)
                }
            }
        )*
    };
}

impl_from_entry! {
    PrimitiveEntry => Primitive,
    ClassEntry => Class,
    InterfaceEntry => Interface,
}
