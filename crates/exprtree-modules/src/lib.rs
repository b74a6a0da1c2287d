//! Standard collection types.
//!
//! - **list** - `List<int>` and `List<string>`
//! - **dictionary** - `Dictionary<string,int>`
//!
//! All of them implement `IEnumerable` and expose an `Add` method, so they can
//! be targets of list initializers.
//!
//! ```ignore
//! let mut registry = TypeRegistry::with_builtins();
//! exprtree_modules::install(&mut registry)?;
//! ```

pub mod dictionary;
pub mod list;

use exprtree_core::RegistrationError;
use exprtree_registry::TypeRegistry;

pub use dictionary::{STRING_INT_DICTIONARY, ScriptDict, dictionary_entries};
pub use list::{INT_LIST, STRING_LIST, ScriptList, list_items};

/// Register every collection type with `registry`.
pub fn install(registry: &mut TypeRegistry) -> Result<(), RegistrationError> {
    list::register(registry)?;
    dictionary::register(registry)?;
    tracing::debug!(types = registry.type_count(), "installed collection modules");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprtree_core::TypeContext;

    #[test]
    fn install_registers_enumerable_collections() {
        let mut registry = TypeRegistry::with_builtins();
        install(&mut registry).unwrap();
        for ty in [INT_LIST, STRING_LIST, STRING_INT_DICTIONARY] {
            assert!(registry.get_class(ty).is_some());
            assert!(registry.is_enumerable(ty));
        }
    }

    #[test]
    fn install_twice_fails() {
        let mut registry = TypeRegistry::with_builtins();
        install(&mut registry).unwrap();
        assert!(matches!(
            install(&mut registry),
            Err(RegistrationError::DuplicateType(_))
        ));
    }
}
