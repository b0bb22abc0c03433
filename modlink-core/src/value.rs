//! Attribute values exposed by modules
//!
//! Modules export plain scalar values and native functions. Native functions
//! are Rust function pointers wrapped with a name and an arity so invocation
//! errors carry usable context.

use std::sync::Arc;

/// Native function pointer type
pub type NativeFn = fn(&[Value]) -> Result<Value, String>;

/// A named native function with arity checking
#[derive(Debug)]
pub struct NativeFunction {
    /// Function name as exposed on the module
    pub name: String,
    /// Expected argument count; `None` means variadic
    pub arity: Option<u8>,
    func: NativeFn,
}

impl NativeFunction {
    /// Create a fixed-arity native function
    pub fn new(name: impl Into<String>, arity: u8, func: NativeFn) -> Self {
        Self {
            name: name.into(),
            arity: Some(arity),
            func,
        }
    }

    /// Create a variadic native function
    pub fn variadic(name: impl Into<String>, func: NativeFn) -> Self {
        Self {
            name: name.into(),
            arity: None,
            func,
        }
    }

    /// Invoke the function, checking arity first
    ///
    /// Errors are plain strings; callers wrap them with module context.
    pub fn invoke(&self, args: &[Value]) -> Result<Value, String> {
        if let Some(arity) = self.arity {
            if args.len() != arity as usize {
                return Err(format!(
                    "{}() takes exactly {} argument{} ({} given)",
                    self.name,
                    arity,
                    if arity == 1 { "" } else { "s" },
                    args.len()
                ));
            }
        }
        (self.func)(args)
    }
}

/// A value bound to a module attribute
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Function(Arc<NativeFunction>),
}

impl Value {
    /// Create a function value
    pub fn function(name: impl Into<String>, arity: u8, func: NativeFn) -> Self {
        Value::Function(Arc::new(NativeFunction::new(name, arity, func)))
    }

    /// Create a variadic function value
    pub fn variadic(name: impl Into<String>, func: NativeFn) -> Self {
        Value::Function(Arc::new(NativeFunction::variadic(name, func)))
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Function(_) => "function",
        }
    }

    /// Try to get as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Function(func) => write!(f, "<native fn {}>", func.name),
        }
    }
}
