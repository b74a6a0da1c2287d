//! `Dictionary<string,int>`: string keys in insertion order.

use std::sync::Arc;

use exprtree_core::{
    CallContext, ClassEntry, FunctionDef, FunctionEntry, NativeError, NativeFn, ObjectRef, Param,
    RegistrationError, TypeHash, Value, primitives,
};
use exprtree_registry::TypeRegistry;
use rustc_hash::FxHashMap;

const NAME: &str = "Dictionary<string,int>";

/// `Dictionary<string,int>`.
pub const STRING_INT_DICTIONARY: TypeHash = TypeHash::from_name(NAME);

/// Payload of a dictionary object.
#[derive(Debug, Clone, Default)]
pub struct ScriptDict {
    entries: Vec<(Arc<str>, i64)>,
    index: FxHashMap<Arc<str>, usize>,
}

impl ScriptDict {
    /// Insert a new entry. Fails if `key` is already present.
    pub fn insert(&mut self, key: &str, value: i64) -> Result<(), NativeError> {
        if self.index.contains_key(key) {
            return Err(NativeError::Failed(format!(
                "an item with the key \"{key}\" has already been added"
            )));
        }
        let key: Arc<str> = Arc::from(key);
        self.index.insert(Arc::clone(&key), self.entries.len());
        self.entries.push((key, value));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(k, v)| (&**k, *v))
    }
}

/// Copy of the entries of a dictionary value, or `None` if `value` is not a
/// dictionary.
pub fn dictionary_entries(value: &Value) -> Option<Vec<(String, i64)>> {
    value.as_object()?.with(|dict: &ScriptDict| {
        dict.entries()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    })
}

pub(crate) fn register(registry: &mut TypeRegistry) -> Result<(), RegistrationError> {
    let ty = STRING_INT_DICTIONARY;
    registry.register_type(ClassEntry::new(NAME).with_interface(primitives::IENUMERABLE).into())?;

    registry.register_function(FunctionEntry::native(
        FunctionDef::constructor(ty, NAME, Vec::new()),
        NativeFn::new(move |_: &CallContext<'_>| {
            Ok(Value::Object(ObjectRef::new(ty, ScriptDict::default())))
        }),
    ))?;

    registry.register_function(FunctionEntry::native(
        FunctionDef::method(
            ty,
            "Add",
            vec![
                Param::new("key", primitives::STRING),
                Param::new("value", primitives::INT),
            ],
            primitives::VOID,
        ),
        NativeFn::new(|ctx: &CallContext<'_>| {
            let key = ctx.arg_str(0)?;
            let value = ctx.arg_int(1)?;
            with_dict(ctx, |dict| dict.insert(key, value))??;
            Ok(Value::Void)
        }),
    ))?;

    registry.register_function(FunctionEntry::native(
        FunctionDef::method(ty, "Count", Vec::new(), primitives::INT),
        NativeFn::new(|ctx: &CallContext<'_>| {
            let len = with_dict(ctx, |dict| dict.len())?;
            Ok(Value::Int(len as i64))
        }),
    ))?;

    registry.register_function(FunctionEntry::native(
        FunctionDef::method(
            ty,
            "ContainsKey",
            vec![Param::new("key", primitives::STRING)],
            primitives::BOOL,
        ),
        NativeFn::new(|ctx: &CallContext<'_>| {
            let key = ctx.arg_str(0)?;
            let found = with_dict(ctx, |dict| dict.contains_key(key))?;
            Ok(Value::Bool(found))
        }),
    ))?;

    Ok(())
}

fn with_dict<R>(ctx: &CallContext<'_>, f: impl FnOnce(&mut ScriptDict) -> R) -> Result<R, NativeError> {
    ctx.this_object()?
        .with_mut(f)
        .ok_or(NativeError::PayloadType { expected: "dictionary" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_order_and_rejects_duplicates() {
        let mut dict = ScriptDict::default();
        dict.insert("b", 2).unwrap();
        dict.insert("a", 1).unwrap();
        let err = dict.insert("b", 9).unwrap_err();
        assert!(matches!(err, NativeError::Failed(msg) if msg.contains("\"b\"")));

        assert_eq!(dict.get("b"), Some(2));
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.entries().collect::<Vec<_>>(), vec![("b", 2), ("a", 1)]);
    }

    #[test]
    fn native_add_and_read_back() {
        let mut registry = TypeRegistry::with_builtins();
        register(&mut registry).unwrap();

        let ctor = registry.constructors(STRING_INT_DICTIONARY).pop().unwrap();
        let dict = ctor.native_fn().unwrap().call(&CallContext::new(None, &[])).unwrap();

        let add = registry.declared_methods(STRING_INT_DICTIONARY, "Add").pop().unwrap();
        let args = [Value::from("k"), Value::Int(7)];
        add.native_fn().unwrap().call(&CallContext::new(Some(&dict), &args)).unwrap();
        assert!(add.native_fn().unwrap().call(&CallContext::new(Some(&dict), &args)).is_err());

        let contains = registry.declared_methods(STRING_INT_DICTIONARY, "ContainsKey").pop().unwrap();
        let found = contains
            .native_fn()
            .unwrap()
            .call(&CallContext::new(Some(&dict), &args[..1]))
            .unwrap();
        assert_eq!(found, Value::Bool(true));
        assert_eq!(dictionary_entries(&dict), Some(vec![("k".to_string(), 7)]));
    }
}
