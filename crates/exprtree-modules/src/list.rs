//! `List<T>` for the primitive element types `int` and `string`.

use std::sync::Arc;

use exprtree_core::{
    CallContext, ClassEntry, FunctionDef, FunctionEntry, NativeError, NativeFn, ObjectRef, Param,
    PrimitiveKind, RegistrationError, TypeHash, Value, primitives,
};
use exprtree_registry::TypeRegistry;

/// `List<int>`.
pub const INT_LIST: TypeHash = TypeHash::from_name("List<int>");
/// `List<string>`.
pub const STRING_LIST: TypeHash = TypeHash::from_name("List<string>");

/// Payload of a list object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptList {
    items: Vec<Value>,
}

impl ScriptList {
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Copy of the items of a list value, or `None` if `value` is not a list.
pub fn list_items(value: &Value) -> Option<Vec<Value>> {
    value.as_object()?.with(|list: &ScriptList| list.items.clone())
}

pub(crate) fn register(registry: &mut TypeRegistry) -> Result<(), RegistrationError> {
    register_list(registry, "List<int>", PrimitiveKind::Int)?;
    register_list(registry, "List<string>", PrimitiveKind::String)
}

fn register_list(
    registry: &mut TypeRegistry,
    name: &str,
    element: PrimitiveKind,
) -> Result<(), RegistrationError> {
    let class = ClassEntry::new(name).with_interface(primitives::IENUMERABLE);
    let ty = class.type_hash;
    let element_ty = element.type_hash();
    registry.register_type(class.into())?;

    // =========================================================================
    // CONSTRUCTOR
    // =========================================================================

    registry.register_function(FunctionEntry::native(
        FunctionDef::constructor(ty, name, Vec::new()),
        NativeFn::new(move |_: &CallContext<'_>| {
            Ok(Value::Object(ObjectRef::new(ty, ScriptList::default())))
        }),
    ))?;

    // =========================================================================
    // METHODS
    // =========================================================================

    registry.register_function(FunctionEntry::native(
        FunctionDef::method(ty, "Add", vec![Param::new("item", element_ty)], primitives::VOID),
        NativeFn::new(move |ctx: &CallContext<'_>| {
            let item = element_arg(ctx, element)?;
            with_list(ctx, |list| list.items.push(item))?;
            Ok(Value::Void)
        }),
    ))?;

    registry.register_function(FunctionEntry::native(
        FunctionDef::method(ty, "Count", Vec::new(), primitives::INT),
        NativeFn::new(|ctx: &CallContext<'_>| {
            let len = with_list(ctx, |list| list.len())?;
            Ok(Value::Int(len as i64))
        }),
    ))?;

    registry.register_function(FunctionEntry::native(
        FunctionDef::method(ty, "Contains", vec![Param::new("item", element_ty)], primitives::BOOL),
        NativeFn::new(move |ctx: &CallContext<'_>| {
            let item = element_arg(ctx, element)?;
            let found = with_list(ctx, |list| list.items.contains(&item))?;
            Ok(Value::Bool(found))
        }),
    ))?;

    Ok(())
}

/// Argument 0, checked against the element type.
fn element_arg(ctx: &CallContext<'_>, element: PrimitiveKind) -> Result<Value, NativeError> {
    match element {
        PrimitiveKind::Int => ctx.arg_int(0).map(Value::Int),
        PrimitiveKind::String => ctx.arg_str(0).map(|s| Value::String(Arc::from(s))),
        _ => ctx.arg(0).cloned(),
    }
}

fn with_list<R>(ctx: &CallContext<'_>, f: impl FnOnce(&mut ScriptList) -> R) -> Result<R, NativeError> {
    ctx.this_object()?
        .with_mut(f)
        .ok_or(NativeError::PayloadType { expected: "list" })
}
