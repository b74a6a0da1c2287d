//! TypeRegistry - unified type and function registry.
//!
//! # Storage Model
//!
//! - **Types**: all type entries stored in one map by `TypeHash`, with a name
//!   index for lookups by qualified name.
//! - **Functions**: free functions, methods and constructors stored in one map
//!   as `Arc<FunctionEntry>`. Classes and interfaces list their members by hash.
//!
//! # Registration Order
//!
//! A type's base class and interfaces must be registered before the type, and
//! a function's owner and parameter types before the function. This keeps the
//! inheritance graph acyclic without a separate validation pass.
//!
//! # Thread Safety
//!
//! The registry is populated single-threaded and read-only afterwards; share it
//! behind an `Arc` once registration is complete.
//!
//! # Example
//!
//! ```
//! use exprtree_registry::TypeRegistry;
//! use exprtree_core::primitives;
//!
//! let registry = TypeRegistry::with_builtins();
//! assert!(registry.get(primitives::INT).is_some());
//! assert!(registry.get_by_name("IEnumerable").is_some());
//! ```

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use exprtree_core::{
    ClassEntry, FunctionEntry, InterfaceEntry, LookupError, PrimitiveEntry, PrimitiveKind,
    RegistrationError, TypeContext, TypeEntry, TypeHash, primitives,
};

use crate::conversion::find_conversion;
use crate::overload::resolve_overload;

/// Unified type and function registry.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    /// Types by hash (primary storage).
    types: FxHashMap<TypeHash, TypeEntry>,

    /// Name index: qualified name -> hash.
    types_by_name: FxHashMap<String, TypeHash>,

    /// Functions, methods and constructors by hash.
    functions: FxHashMap<TypeHash, Arc<FunctionEntry>>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the primitives and `IEnumerable` registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_all_primitives();
        registry.insert_type(InterfaceEntry::new("IEnumerable").into());
        registry
    }

    // ==========================================================================
    // Type Lookup
    // ==========================================================================

    /// Get a type by hash.
    pub fn get(&self, hash: TypeHash) -> Option<&TypeEntry> {
        self.types.get(&hash)
    }

    /// Get a type by qualified name.
    pub fn get_by_name(&self, name: &str) -> Option<&TypeEntry> {
        self.types_by_name
            .get(name)
            .and_then(|hash| self.types.get(hash))
    }

    /// Get a class entry by hash.
    pub fn get_class(&self, hash: TypeHash) -> Option<&ClassEntry> {
        self.get(hash)?.as_class()
    }

    /// Get an interface entry by hash.
    pub fn get_interface(&self, hash: TypeHash) -> Option<&InterfaceEntry> {
        self.get(hash)?.as_interface()
    }

    pub fn contains_type(&self, hash: TypeHash) -> bool {
        self.types.contains_key(&hash)
    }

    /// Name of a type, or its hash if it is not registered.
    pub fn display_name(&self, hash: TypeHash) -> String {
        self.get(hash)
            .map(|entry| entry.name().to_string())
            .unwrap_or_else(|| hash.to_string())
    }

    // ==========================================================================
    // Function Lookup
    // ==========================================================================

    /// Get a function, method or constructor by hash.
    pub fn get_function(&self, hash: TypeHash) -> Option<&Arc<FunctionEntry>> {
        self.functions.get(&hash)
    }

    /// All members of `owner` (declared only, static and instance) named `name`.
    pub fn declared_methods(&self, owner: TypeHash, name: &str) -> Vec<Arc<FunctionEntry>> {
        let hashes: &[TypeHash] = match self.get(owner) {
            Some(TypeEntry::Class(class)) => &class.methods,
            Some(TypeEntry::Interface(iface)) => &iface.methods,
            _ => &[],
        };
        hashes
            .iter()
            .filter_map(|h| self.functions.get(h))
            .filter(|f| f.def.name == name)
            .cloned()
            .collect()
    }

    /// Instance methods named `name` callable on a value of type `owner`.
    ///
    /// Walks the class and its bases (most derived first). A base method is
    /// skipped when it is private or hidden by a derived method with the same
    /// parameter types. For interfaces, base interfaces are searched too.
    pub fn instance_methods(&self, owner: TypeHash, name: &str) -> Vec<Arc<FunctionEntry>> {
        let mut found: Vec<Arc<FunctionEntry>> = Vec::new();

        let mut collect = |hashes: &[TypeHash], inherited: bool| {
            for func in hashes.iter().filter_map(|h| self.functions.get(h)) {
                let def = &func.def;
                if def.name != name || !def.is_instance_method() {
                    continue;
                }
                if inherited && def.visibility == exprtree_core::Visibility::Private {
                    continue;
                }
                let hidden = found
                    .iter()
                    .any(|f| f.def.param_types().eq(def.param_types()));
                if !hidden {
                    found.push(Arc::clone(func));
                }
            }
        };

        match self.get(owner) {
            Some(TypeEntry::Class(class)) => {
                collect(&class.methods, false);
                for base in self.base_class_chain(owner) {
                    collect(&base.methods, true);
                }
            }
            Some(TypeEntry::Interface(iface)) => {
                collect(&iface.methods, false);
                for base in self.interface_closure(&iface.base_interfaces) {
                    if let Some(base) = self.get_interface(base) {
                        collect(&base.methods, true);
                    }
                }
            }
            _ => {}
        }

        found
    }

    /// Constructors declared by `owner`.
    pub fn constructors(&self, owner: TypeHash) -> Vec<Arc<FunctionEntry>> {
        self.get_class(owner)
            .map(|class| {
                class
                    .constructors
                    .iter()
                    .filter_map(|h| self.functions.get(h))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a type entry.
    ///
    /// The base class and every listed interface must already be registered.
    pub fn register_type(&mut self, entry: TypeEntry) -> Result<(), RegistrationError> {
        let hash = entry.type_hash();
        if self.types.contains_key(&hash) || self.types_by_name.contains_key(entry.name()) {
            return Err(RegistrationError::DuplicateType(entry.name().to_string()));
        }

        match &entry {
            TypeEntry::Class(class) => {
                if let Some(base) = class.base_class {
                    match self.get(base) {
                        Some(TypeEntry::Class(_)) => {}
                        Some(other) => {
                            return Err(RegistrationError::InvalidDeclaration(format!(
                                "base of '{}' must be a class, '{}' is not",
                                class.name,
                                other.name()
                            )));
                        }
                        None => return Err(RegistrationError::TypeNotFound(base.to_string())),
                    }
                }
                self.check_interfaces(&class.name, &class.interfaces)?;
            }
            TypeEntry::Interface(iface) => {
                self.check_interfaces(&iface.name, &iface.base_interfaces)?;
            }
            TypeEntry::Primitive(_) => {}
        }

        tracing::debug!(name = entry.name(), "registered type");
        self.insert_type(entry);
        Ok(())
    }

    fn check_interfaces(&self, owner: &str, interfaces: &[TypeHash]) -> Result<(), RegistrationError> {
        for &iface in interfaces {
            match self.get(iface) {
                Some(TypeEntry::Interface(_)) => {}
                Some(other) => {
                    return Err(RegistrationError::InvalidDeclaration(format!(
                        "'{owner}' lists '{}' as an interface",
                        other.name()
                    )));
                }
                None => return Err(RegistrationError::TypeNotFound(iface.to_string())),
            }
        }
        Ok(())
    }

    fn insert_type(&mut self, entry: TypeEntry) {
        let hash = entry.type_hash();
        self.types_by_name.insert(entry.name().to_string(), hash);
        self.types.insert(hash, entry);
    }

    /// Register a primitive type.
    pub fn register_primitive(&mut self, entry: PrimitiveEntry) {
        self.insert_type(TypeEntry::Primitive(entry));
    }

    /// Register all primitive types.
    pub fn register_all_primitives(&mut self) {
        for kind in PrimitiveKind::ALL {
            self.register_primitive(PrimitiveEntry::new(kind));
        }
    }

    /// Register a function, method or constructor.
    ///
    /// Methods and constructors are attached to their owner. Returns the shared
    /// entry that expression nodes hold.
    pub fn register_function(
        &mut self,
        entry: FunctionEntry,
    ) -> Result<Arc<FunctionEntry>, RegistrationError> {
        let def = &entry.def;
        let hash = def.func_hash;

        if self.functions.contains_key(&hash) {
            return Err(RegistrationError::DuplicateFunction {
                name: def.name.clone(),
            });
        }

        for ty in def.param_types().chain(std::iter::once(def.return_type)) {
            if !self.contains_type(ty) {
                return Err(RegistrationError::TypeNotFound(ty.to_string()));
            }
        }

        if let Some(owner) = def.object_type {
            let is_constructor = def.is_constructor();
            let name = def.name.clone();
            match self.types.get_mut(&owner) {
                Some(TypeEntry::Class(class)) if is_constructor => class.constructors.push(hash),
                Some(TypeEntry::Class(class)) => class.methods.push(hash),
                Some(TypeEntry::Interface(iface)) if !is_constructor => iface.methods.push(hash),
                Some(other) => {
                    return Err(RegistrationError::InvalidDeclaration(format!(
                        "'{name}' cannot be declared on '{}'",
                        other.name()
                    )));
                }
                None => return Err(RegistrationError::TypeNotFound(owner.to_string())),
            }
        }

        tracing::debug!(name = %entry.def.name, hash = %hash, "registered function");
        let entry = Arc::new(entry);
        self.functions.insert(hash, Arc::clone(&entry));
        Ok(entry)
    }

    // ==========================================================================
    // Iteration
    // ==========================================================================

    pub fn types(&self) -> impl Iterator<Item = &TypeEntry> {
        self.types.values()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    // ==========================================================================
    // Inheritance Helpers
    // ==========================================================================

    /// Base classes of `hash`, from immediate parent to root.
    pub fn base_class_chain(&self, hash: TypeHash) -> Vec<&ClassEntry> {
        let mut chain = Vec::new();
        let mut current = hash;

        while let Some(class) = self.get_class(current)
            && let Some(base) = class.base_class
            && let Some(base_class) = self.get_class(base)
        {
            chain.push(base_class);
            current = base;
        }

        chain
    }

    /// Whether `ty` (a class or interface) implements or extends `interface`.
    pub fn implements_interface(&self, ty: TypeHash, interface: TypeHash) -> bool {
        let roots: Vec<TypeHash> = match self.get(ty) {
            Some(TypeEntry::Class(class)) => std::iter::once(class)
                .chain(self.base_class_chain(ty))
                .flat_map(|c| c.interfaces.iter().copied())
                .collect(),
            Some(TypeEntry::Interface(iface)) => iface.base_interfaces.clone(),
            _ => return false,
        };
        self.interface_closure(&roots).contains(&interface)
    }

    /// `roots` plus every interface they extend, transitively.
    fn interface_closure(&self, roots: &[TypeHash]) -> FxHashSet<TypeHash> {
        let mut seen = FxHashSet::default();
        let mut pending = roots.to_vec();
        while let Some(hash) = pending.pop() {
            if seen.insert(hash)
                && let Some(iface) = self.get_interface(hash)
            {
                pending.extend(iface.base_interfaces.iter().copied());
            }
        }
        seen
    }
}

impl TypeContext for TypeRegistry {
    fn type_name(&self, hash: TypeHash) -> String {
        self.display_name(hash)
    }

    fn is_assignable(&self, from: TypeHash, to: TypeHash) -> bool {
        find_conversion(from, to, self).is_some()
    }

    fn find_method(
        &self,
        owner: TypeHash,
        name: &str,
        arg_types: &[TypeHash],
    ) -> Result<Arc<FunctionEntry>, LookupError> {
        let candidates = self.instance_methods(owner, name);
        tracing::trace!(
            owner = %self.display_name(owner),
            name,
            candidates = candidates.len(),
            "resolving method"
        );
        resolve_overload(&candidates, arg_types, self, name, owner).map(|m| m.function)
    }

    fn find_constructor(
        &self,
        owner: TypeHash,
        arg_types: &[TypeHash],
    ) -> Result<Arc<FunctionEntry>, LookupError> {
        let type_name = self.display_name(owner);
        let candidates = match self.get_class(owner) {
            Some(class) if !class.is_abstract => self.constructors(owner),
            _ => Vec::new(),
        };
        resolve_overload(&candidates, arg_types, self, &type_name, owner).map(|m| m.function)
    }

    fn is_enumerable(&self, ty: TypeHash) -> bool {
        ty == primitives::IENUMERABLE || self.implements_interface(ty, primitives::IENUMERABLE)
    }
}
