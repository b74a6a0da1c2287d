//! Primitive type entry.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{TypeHash, primitives};

/// Built-in primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PrimitiveKind {
    Void = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    String = 4,
    Object = 5,
}

impl PrimitiveKind {
    /// All primitive kinds, in registration order.
    pub const ALL: [PrimitiveKind; 6] = [
        PrimitiveKind::Void,
        PrimitiveKind::Bool,
        PrimitiveKind::Int,
        PrimitiveKind::Float,
        PrimitiveKind::String,
        PrimitiveKind::Object,
    ];

    /// The source-level name.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Void => "void",
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Float => "float",
            PrimitiveKind::String => "string",
            PrimitiveKind::Object => "object",
        }
    }

    /// The type hash of this primitive.
    pub fn type_hash(self) -> TypeHash {
        match self {
            PrimitiveKind::Void => primitives::VOID,
            PrimitiveKind::Bool => primitives::BOOL,
            PrimitiveKind::Int => primitives::INT,
            PrimitiveKind::Float => primitives::FLOAT,
            PrimitiveKind::String => primitives::STRING,
            PrimitiveKind::Object => primitives::OBJECT,
        }
    }
}

/// Registry entry for a primitive type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveEntry {
    /// The primitive kind.
    pub kind: PrimitiveKind,
    /// Type hash for identity.
    pub type_hash: TypeHash,
}

impl PrimitiveEntry {
    /// Create a new primitive entry.
    pub fn new(kind: PrimitiveKind) -> Self {
        Self {
            kind,
            type_hash: kind.type_hash(),
        }
    }

    /// Get the name of this primitive type.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}
