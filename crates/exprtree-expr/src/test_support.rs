//! Fixture registry for unit tests.

use std::sync::Arc;

use exprtree_core::{
    CallContext, ClassEntry, FunctionDef, FunctionEntry, NativeFn, Param, TypeHash, Value,
    Visibility, primitives,
};
use exprtree_registry::TypeRegistry;

fn noop() -> NativeFn {
    NativeFn::new(|_: &CallContext<'_>| Ok(Value::Void))
}

fn params(types: &[TypeHash]) -> Vec<Param> {
    types
        .iter()
        .enumerate()
        .map(|(i, &ty)| Param::new(format!("p{i}"), ty))
        .collect()
}

fn class(reg: &mut TypeRegistry, entry: ClassEntry) -> TypeHash {
    let hash = entry.type_hash;
    let name = entry.name.clone();
    reg.register_type(entry.into()).unwrap();
    reg.register_function(FunctionEntry::native(
        FunctionDef::constructor(hash, name, Vec::new()),
        noop(),
    ))
    .unwrap();
    hash
}

fn method(reg: &mut TypeRegistry, def: FunctionDef) -> Arc<FunctionEntry> {
    reg.register_function(FunctionEntry::native(def, noop())).unwrap()
}

pub fn bag() -> TypeHash {
    TypeHash::from_name("IntBag")
}

pub fn pairs() -> TypeHash {
    TypeHash::from_name("Pairs")
}

pub fn static_only() -> TypeHash {
    TypeHash::from_name("StaticAddOnly")
}

pub fn not_enumerable() -> TypeHash {
    TypeHash::from_name("NotEnumerable")
}

pub fn private_add() -> TypeHash {
    TypeHash::from_name("PrivateAdd")
}

pub fn derived_bag() -> TypeHash {
    TypeHash::from_name("DerivedBag")
}

pub fn zero_add() -> TypeHash {
    TypeHash::from_name("ZeroAdd")
}

/// Types exercising every list-initializer rule.
///
/// - `IntBag`: enumerable, `Add(int)`, `Remove(int)`
/// - `Pairs`: enumerable, `Add(string, int)` and `Add(int)`
/// - `StaticAddOnly`: enumerable, only a static `Add(int)`
/// - `NotEnumerable`: `Add(int)` but no `IEnumerable`
/// - `PrivateAdd`: enumerable, private `Add(int)`
/// - `DerivedBag`: derives from `IntBag`
/// - `ZeroAdd`: enumerable, `Add()`
pub fn registry() -> TypeRegistry {
    let mut reg = TypeRegistry::with_builtins();
    let int = primitives::INT;
    let void = primitives::VOID;

    let ty = class(&mut reg, ClassEntry::new("IntBag").with_interface(primitives::IENUMERABLE));
    method(&mut reg, FunctionDef::method(ty, "Add", params(&[int]), void));
    method(&mut reg, FunctionDef::method(ty, "Remove", params(&[int]), primitives::BOOL));

    let ty = class(&mut reg, ClassEntry::new("Pairs").with_interface(primitives::IENUMERABLE));
    method(&mut reg, FunctionDef::method(ty, "Add", params(&[primitives::STRING, int]), void));
    method(&mut reg, FunctionDef::method(ty, "Add", params(&[int]), void));

    let ty = class(&mut reg, ClassEntry::new("StaticAddOnly").with_interface(primitives::IENUMERABLE));
    method(&mut reg, FunctionDef::static_method(ty, "Add", params(&[int]), void));

    let ty = class(&mut reg, ClassEntry::new("NotEnumerable"));
    method(&mut reg, FunctionDef::method(ty, "Add", params(&[int]), void));

    let ty = class(&mut reg, ClassEntry::new("PrivateAdd").with_interface(primitives::IENUMERABLE));
    method(
        &mut reg,
        FunctionDef::method(ty, "Add", params(&[int]), void).with_visibility(Visibility::Private),
    );

    class(&mut reg, ClassEntry::new("DerivedBag").with_base(bag()));

    let ty = class(&mut reg, ClassEntry::new("ZeroAdd").with_interface(primitives::IENUMERABLE));
    method(&mut reg, FunctionDef::method(ty, "Add", Vec::new(), void));

    reg
}

/// The single member of `owner` named `name` (static or instance).
pub fn member(reg: &TypeRegistry, owner: TypeHash, name: &str, arity: usize) -> Arc<FunctionEntry> {
    reg.declared_methods(owner, name)
        .into_iter()
        .find(|f| f.def.param_count() == arity)
        .unwrap()
}

pub fn bag_add(reg: &TypeRegistry) -> Arc<FunctionEntry> {
    member(reg, bag(), "Add", 1)
}
