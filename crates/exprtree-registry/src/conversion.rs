//! Implicit conversions between types.
//!
//! Conversions are checked in this order:
//! 1. Identity (exact match)
//! 2. Derived class to base class
//! 3. Class or interface to an implemented interface
//! 4. Anything but `void` to `object`
//!
//! Each conversion carries a cost so overload resolution can prefer the
//! closest match.

use exprtree_core::{TypeHash, primitives};

use crate::TypeRegistry;

/// An implicit conversion with its overload-resolution cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The kind of conversion.
    pub kind: ConversionKind,
    /// Lower is better.
    pub cost: u32,
}

/// The kind of conversion being performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionKind {
    /// No conversion needed.
    Identity,
    /// Derived class to one of its base classes.
    DerivedToBase {
        /// The base class.
        base: TypeHash,
        /// Number of inheritance steps.
        depth: u32,
    },
    /// Type to an interface it implements.
    ToInterface {
        /// The interface.
        interface: TypeHash,
    },
    /// Type to the `object` root.
    ToObject,
}

impl Conversion {
    pub const COST_EXACT: u32 = 0;
    /// Per inheritance step.
    pub const COST_BASE_STEP: u32 = 1;
    pub const COST_INTERFACE: u32 = 50;
    pub const COST_OBJECT: u32 = 100;

    pub fn identity() -> Self {
        Self {
            kind: ConversionKind::Identity,
            cost: Self::COST_EXACT,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self.kind, ConversionKind::Identity)
    }
}

/// Find the implicit conversion from `source` to `target`, if any.
pub fn find_conversion(
    source: TypeHash,
    target: TypeHash,
    registry: &TypeRegistry,
) -> Option<Conversion> {
    if source == target {
        return Some(Conversion::identity());
    }

    if let Some(depth) = base_depth(source, target, registry) {
        return Some(Conversion {
            kind: ConversionKind::DerivedToBase {
                base: target,
                depth,
            },
            cost: Conversion::COST_BASE_STEP.saturating_mul(depth),
        });
    }

    if registry.implements_interface(source, target) {
        return Some(Conversion {
            kind: ConversionKind::ToInterface { interface: target },
            cost: Conversion::COST_INTERFACE,
        });
    }

    if target == primitives::OBJECT && source != primitives::VOID {
        return Some(Conversion {
            kind: ConversionKind::ToObject,
            cost: Conversion::COST_OBJECT,
        });
    }

    None
}

/// Number of inheritance steps from `derived` up to `base`.
fn base_depth(derived: TypeHash, base: TypeHash, registry: &TypeRegistry) -> Option<u32> {
    registry
        .base_class_chain(derived)
        .iter()
        .position(|class| class.type_hash == base)
        .and_then(|pos| u32::try_from(pos + 1).ok())
}
