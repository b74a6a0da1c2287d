//! Overload resolution.
//!
//! ## Algorithm
//!
//! 1. Filter candidates by argument count
//! 2. Check each argument converts implicitly to its parameter
//! 3. Sum the conversion costs of each viable candidate
//! 4. Pick the cheapest; on a tie prefer more exact matches
//! 5. Report ambiguity when the tie cannot be broken

use std::sync::Arc;

use exprtree_core::{FunctionEntry, LookupError, TypeHash};

use crate::conversion::{Conversion, find_conversion};
use crate::TypeRegistry;

/// Result of successful overload resolution.
#[derive(Debug, Clone)]
pub struct OverloadMatch {
    /// The selected function.
    pub function: Arc<FunctionEntry>,
    /// Conversion applied to each argument.
    pub arg_conversions: Vec<Conversion>,
    /// Total conversion cost (lower is better).
    pub total_cost: u32,
}

/// Select the best candidate for `arg_types`.
///
/// `name` and `owner` are only used to describe failures.
pub fn resolve_overload(
    candidates: &[Arc<FunctionEntry>],
    arg_types: &[TypeHash],
    registry: &TypeRegistry,
    name: &str,
    owner: TypeHash,
) -> Result<OverloadMatch, LookupError> {
    let viable: Vec<OverloadMatch> = candidates
        .iter()
        .filter_map(|func| try_match_candidate(func, arg_types, registry))
        .collect();

    if viable.is_empty() {
        return Err(LookupError::NotFound {
            name: name.to_string(),
            type_name: registry.display_name(owner),
        });
    }

    find_best_match(viable, registry, name, owner)
}

/// Match arguments against a single candidate.
fn try_match_candidate(
    func: &Arc<FunctionEntry>,
    arg_types: &[TypeHash],
    registry: &TypeRegistry,
) -> Option<OverloadMatch> {
    let params = &func.def.params;
    if params.len() != arg_types.len() {
        return None;
    }

    let mut arg_conversions = Vec::with_capacity(arg_types.len());
    let mut total_cost = 0u32;

    for (&arg, param) in arg_types.iter().zip(params) {
        let conv = find_conversion(arg, param.data_type, registry)?;
        total_cost = total_cost.saturating_add(conv.cost);
        arg_conversions.push(conv);
    }

    Some(OverloadMatch {
        function: Arc::clone(func),
        arg_conversions,
        total_cost,
    })
}

fn find_best_match(
    viable: Vec<OverloadMatch>,
    registry: &TypeRegistry,
    name: &str,
    owner: TypeHash,
) -> Result<OverloadMatch, LookupError> {
    let Some(min_cost) = viable.iter().map(|m| m.total_cost).min() else {
        return Err(LookupError::NotFound {
            name: name.to_string(),
            type_name: registry.display_name(owner),
        });
    };
    let cheapest: Vec<OverloadMatch> = viable
        .into_iter()
        .filter(|m| m.total_cost == min_cost)
        .collect();

    // All candidates at the minimum cost take part in the tie-break.
    let max_exact = cheapest.iter().map(count_exact_matches).max().unwrap_or(0);
    let mut best: Vec<OverloadMatch> = cheapest
        .into_iter()
        .filter(|m| count_exact_matches(m) == max_exact)
        .collect();

    if best.len() == 1
        && let Some(winner) = best.pop()
    {
        return Ok(winner);
    }

    let mut described: Vec<String> = best.iter().map(|m| format_candidate(m, registry)).collect();
    described.sort();
    Err(LookupError::Ambiguous {
        name: name.to_string(),
        type_name: registry.display_name(owner),
        candidates: described.join(" and "),
    })
}

fn count_exact_matches(m: &OverloadMatch) -> usize {
    m.arg_conversions.iter().filter(|c| c.is_exact()).count()
}

fn format_candidate(m: &OverloadMatch, registry: &TypeRegistry) -> String {
    let params: Vec<String> = m
        .function
        .def
        .param_types()
        .map(|ty| registry.display_name(ty))
        .collect();
    format!("{}({})", m.function.def.name, params.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprtree_core::{
        CallContext, ClassEntry, FunctionDef, InterfaceEntry, NativeFn, Param, Value, primitives,
    };

    fn noop() -> NativeFn {
        NativeFn::new(|_: &CallContext<'_>| Ok(Value::Void))
    }

    fn sink_registry() -> (TypeRegistry, TypeHash) {
        let mut registry = TypeRegistry::with_builtins();
        let sink = TypeHash::from_name("Sink");
        registry.register_type(ClassEntry::new("Sink").into()).unwrap();
        registry
            .register_type(InterfaceEntry::new("IShape").into())
            .unwrap();
        registry
            .register_type(
                ClassEntry::new("Circle")
                    .with_interface(TypeHash::from_name("IShape"))
                    .into(),
            )
            .unwrap();
        (registry, sink)
    }

    fn method(owner: TypeHash, params: Vec<TypeHash>) -> FunctionEntry {
        let params = params
            .into_iter()
            .enumerate()
            .map(|(i, ty)| Param::new(format!("p{i}"), ty))
            .collect();
        FunctionEntry::native(FunctionDef::method(owner, "Put", params, primitives::VOID), noop())
    }

    #[test]
    fn exact_beats_object() {
        let (mut registry, sink) = sink_registry();
        let by_int = registry.register_function(method(sink, vec![primitives::INT])).unwrap();
        let by_obj = registry.register_function(method(sink, vec![primitives::OBJECT])).unwrap();

        let m = resolve_overload(&[by_obj, Arc::clone(&by_int)], &[primitives::INT], &registry, "Put", sink)
            .unwrap();
        assert!(Arc::ptr_eq(&m.function, &by_int));
        assert_eq!(m.total_cost, 0);
    }

    #[test]
    fn interface_beats_object() {
        let (mut registry, sink) = sink_registry();
        let by_shape = registry
            .register_function(method(sink, vec![TypeHash::from_name("IShape")]))
            .unwrap();
        let by_obj = registry.register_function(method(sink, vec![primitives::OBJECT])).unwrap();

        let m = resolve_overload(
            &[by_obj, Arc::clone(&by_shape)],
            &[TypeHash::from_name("Circle")],
            &registry,
            "Put",
            sink,
        )
        .unwrap();
        assert!(Arc::ptr_eq(&m.function, &by_shape));
    }

    #[test]
    fn arity_mismatch_is_not_found() {
        let (mut registry, sink) = sink_registry();
        let one = registry.register_function(method(sink, vec![primitives::INT])).unwrap();

        let err = resolve_overload(&[one], &[primitives::INT, primitives::INT], &registry, "Put", sink)
            .unwrap_err();
        assert!(matches!(err, LookupError::NotFound { .. }));
    }

    #[test]
    fn equal_cost_is_ambiguous() {
        let (mut registry, sink) = sink_registry();
        let a = registry
            .register_function(method(sink, vec![primitives::INT, primitives::OBJECT]))
            .unwrap();
        let b = registry
            .register_function(method(sink, vec![primitives::OBJECT, primitives::INT]))
            .unwrap();

        let err = resolve_overload(&[a, b], &[primitives::INT, primitives::INT], &registry, "Put", sink)
            .unwrap_err();
        match err {
            LookupError::Ambiguous { candidates, .. } => {
                assert!(candidates.contains("Put(int, object)"));
                assert!(candidates.contains("Put(object, int)"));
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }

    fn put_circle_circle(order: &[usize]) -> Result<String, LookupError> {
        let (mut registry, sink) = sink_registry();
        let shape = TypeHash::from_name("IShape");
        let circle = TypeHash::from_name("Circle");
        let all = [
            registry.register_function(method(sink, vec![shape, shape])).unwrap(),
            registry.register_function(method(sink, vec![circle, primitives::OBJECT])).unwrap(),
            registry.register_function(method(sink, vec![primitives::OBJECT, circle])).unwrap(),
        ];
        let candidates: Vec<_> = order.iter().map(|&i| Arc::clone(&all[i])).collect();
        resolve_overload(&candidates, &[circle, circle], &registry, "Put", sink)
            .map(|m| format_candidate(&m, &registry))
    }

    #[test]
    fn three_way_tie_is_ambiguous_in_any_order() {
        let forward = put_circle_circle(&[0, 1, 2]).unwrap_err();
        let rotated = put_circle_circle(&[2, 0, 1]).unwrap_err();
        assert_eq!(forward, rotated);
        match forward {
            LookupError::Ambiguous { candidates, .. } => {
                assert!(candidates.contains("Put(Circle, object)"));
                assert!(candidates.contains("Put(object, Circle)"));
                assert!(!candidates.contains("IShape"));
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }

    #[test]
    fn exact_matches_break_a_three_way_tie() {
        let (mut registry, sink) = sink_registry();
        let shape = TypeHash::from_name("IShape");
        let circle = TypeHash::from_name("Circle");
        let a = registry.register_function(method(sink, vec![shape, shape])).unwrap();
        let b = registry.register_function(method(sink, vec![circle, primitives::OBJECT])).unwrap();
        let c = registry.register_function(method(sink, vec![primitives::OBJECT, primitives::INT])).unwrap();

        for order in [[&a, &b, &c], [&c, &a, &b], [&b, &c, &a]] {
            let candidates: Vec<_> = order.iter().map(|f| Arc::clone(f)).collect();
            let m = resolve_overload(&candidates, &[circle, circle], &registry, "Put", sink).unwrap();
            assert!(Arc::ptr_eq(&m.function, &b));
        }
    }
}
