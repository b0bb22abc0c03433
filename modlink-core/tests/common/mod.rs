//! Test fixtures
//!
//! Builds a shared registry with the builtins plus a few fixture modules
//! exercised by the resolver and lazy-handle tests.

use modlink_core::{builtins, new_shared_registry, Module, SharedRegistry, Value};

fn answer_fn(_args: &[Value]) -> Result<Value, String> {
    Ok(Value::Int(42))
}

fn echo_fn(args: &[Value]) -> Result<Value, String> {
    match args {
        [single] => Ok(single.clone()),
        _ => Err(format!("echo() takes exactly 1 argument ({} given)", args.len())),
    }
}

/// Registry with builtins and fixture modules
pub fn fixture_registry() -> SharedRegistry {
    let registry = new_shared_registry();
    {
        let mut reg = registry.write().unwrap();
        builtins::install(&mut reg);
        reg.register(
            Module::new("app.settings")
                .with_description("Fixture settings module")
                .export("debug", Value::Bool(true))
                .export("retries", Value::Int(3))
                .export("answer", Value::function("answer", 0, answer_fn)),
        )
        .unwrap();
        // Module whose name tail matches an exported function, for the
        // lazy-handle call convention.
        reg.register(Module::new("pkg.sub.echo").export("echo", Value::variadic("echo", echo_fn)))
            .unwrap();
    }
    registry
}
