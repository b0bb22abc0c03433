//! Eager resolver end-to-end tests

mod common;

use common::fixture_registry;
use modlink_core::{LoadError, MemorySink, Resolver, Value};
use std::sync::Arc;

#[test]
fn test_resolve_with_prefix_matches_direct_resolution() {
    let resolver = Resolver::new(fixture_registry());

    let prefixed = resolver.resolve_module("settings", Some("app.")).unwrap();
    let direct = resolver.resolve_module("app.settings", None).unwrap();
    let by_path = resolver.resolve_module_by_path("app.settings").unwrap();

    assert!(Arc::ptr_eq(&prefixed, &direct));
    assert!(Arc::ptr_eq(&prefixed, &by_path));
    assert_eq!(prefixed.name(), "app.settings");
}

#[test]
fn test_unresolvable_module_soft_fails_with_one_diagnostic() {
    let sink = Arc::new(MemorySink::new());
    let resolver = Resolver::new(fixture_registry()).with_sink(sink.clone());

    assert!(resolver.resolve_module("ghost.module", None).is_none());

    let lines = sink.drain();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("ghost.module"));
    assert!(lines[0].contains("could not be resolved"));
}

#[test]
fn test_get_attribute_returns_bound_value() {
    let resolver = Resolver::new(fixture_registry());

    let value = resolver
        .get_attribute("app.settings", "retries", None)
        .unwrap()
        .unwrap();
    assert_eq!(value, Value::Int(3));

    // Functions come back as values too; no type filtering is applied.
    let value = resolver
        .get_attribute("app.settings", "answer", None)
        .unwrap()
        .unwrap();
    assert_eq!(value.type_name(), "function");
}

#[test]
fn test_get_attribute_on_missing_module_is_none() {
    let sink = Arc::new(MemorySink::new());
    let resolver = Resolver::new(fixture_registry()).with_sink(sink.clone());

    let result = resolver.get_attribute("nonexistent_module", "x", None);
    assert!(matches!(result, Ok(None)));

    // The diagnostic comes from module resolution; no second line for the
    // skipped attribute lookup.
    assert_eq!(sink.drain().len(), 1);
}

#[test]
fn test_get_attribute_missing_attr_names_both_sides() {
    let resolver = Resolver::new(fixture_registry());

    let err = resolver
        .get_attribute("app.settings", "timeout", None)
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("timeout"));
    assert!(msg.contains("app.settings"));
}

#[test]
fn test_call_function_zero_arguments() {
    let resolver = Resolver::new(fixture_registry());

    let value = resolver
        .call_function("app.settings", "answer", None)
        .unwrap()
        .unwrap();
    assert_eq!(value, Value::Int(42));

    // Builtin with prefix: std. + env -> std.env
    let value = resolver
        .call_function("env", "cwd", Some("std."))
        .unwrap()
        .unwrap();
    assert_eq!(value.type_name(), "string");
}

#[test]
fn test_call_function_on_missing_module_is_none() {
    let resolver = Resolver::new(fixture_registry());

    let result = resolver.call_function("nonexistent_module", "f", None);
    assert!(matches!(result, Ok(None)));
}

#[test]
fn test_call_function_wraps_callee_error() {
    let resolver = Resolver::new(fixture_registry());

    // sqrt is 1-ary; the zero-argument call surfaces as CallFailed.
    let err = resolver.call_function("std.math", "sqrt", None).unwrap_err();
    match err {
        LoadError::CallFailed {
            function,
            module,
            message,
        } => {
            assert_eq!(function, "sqrt");
            assert_eq!(module, "std.math");
            assert!(message.contains("takes exactly 1 argument"));
        }
        other => panic!("expected CallFailed, got {other:?}"),
    }
}

#[test]
fn test_call_function_non_callable_attribute() {
    let resolver = Resolver::new(fixture_registry());

    let err = resolver.call_function("std.math", "PI", None).unwrap_err();
    assert!(matches!(
        err,
        LoadError::NotCallable { found: "float", .. }
    ));
}

#[test]
fn test_repeated_resolution_returns_equivalent_reference() {
    let resolver = Resolver::new(fixture_registry());

    let first = resolver.resolve_module("std.math", None).unwrap();
    let second = resolver.resolve_module("std.math", None).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}
