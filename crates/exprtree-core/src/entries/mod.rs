//! What the registry stores: one [`TypeEntry`] per type and one
//! [`FunctionEntry`] per callable.

mod class;
mod function;
mod interface;
mod primitive;
mod type_entry;

pub use class::ClassEntry;
pub use function::{FunctionEntry, FunctionImpl};
pub use interface::InterfaceEntry;
pub use primitive::{PrimitiveEntry, PrimitiveKind};
pub use type_entry::TypeEntry;
