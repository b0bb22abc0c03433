//! Modlink CLI - inspect and invoke registered modules
//!
//! Resolves identifiers against the global registry (builtins plus any
//! manifest-declared modules) and prints the result.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;
use tracing::Level;

mod config;
mod logging;
mod manifest;

use config::LogConfig;
use logging::LogFormat;
use modlink_api::{call_function, get_attribute, lazy, register_module, registry, resolve_module, Value};

#[derive(Parser)]
#[command(
    name = "modlink",
    about = "Modlink - dynamic module registry inspector",
    version = "0.1.0"
)]
struct Cli {
    /// JSON manifest of modules to register before running the command
    #[arg(long, value_name = "FILE", global = true)]
    manifest: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value = "compact", global = true)]
    log_format: LogFormatArg,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List registered modules
    List,
    /// Resolve a module and report whether it exists
    Resolve {
        /// Module identifier
        module: String,
        /// Prefix prepended to the identifier before resolution
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Print the value of a module attribute
    Get {
        /// Module identifier
        module: String,
        /// Attribute name
        attribute: String,
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Invoke a module function
    Call {
        /// Module identifier
        module: String,
        /// Function name
        function: String,
        /// Positional arguments (parsed as int, float, bool or string)
        args: Vec<String>,
        #[arg(long)]
        prefix: Option<String>,
        /// Resolve through a lazy handle (hard-fail path)
        #[arg(long)]
        lazy: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        global: parse_log_level(&cli.log_level),
        ..LogConfig::default()
    };
    logging::init_with_file(&log_config, cli.log_format.into(), cli.log_file.as_ref());

    if let Some(path) = &cli.manifest {
        if let Err(e) = load_manifest(path) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    let code = match cli.command {
        Command::List => run_list(),
        Command::Resolve { module, prefix } => run_resolve(&module, prefix.as_deref()),
        Command::Get {
            module,
            attribute,
            prefix,
        } => run_get(&module, &attribute, prefix.as_deref()),
        Command::Call {
            module,
            function,
            args,
            prefix,
            lazy,
        } => run_call(&module, &function, &args, prefix.as_deref(), lazy),
    };
    process::exit(code);
}

fn parse_log_level(s: &str) -> Level {
    match s.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::WARN,
    }
}

/// Register every module declared in the manifest
fn load_manifest(path: &std::path::Path) -> Result<(), String> {
    let manifest = manifest::read_manifest(path)?;
    for declared in &manifest.modules {
        let module = declared.to_module()?;
        register_module(module).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn run_list() -> i32 {
    let registry = registry();
    let reg = registry.read().unwrap_or_else(|e| e.into_inner());

    let mut names: Vec<&str> = reg.names().collect();
    names.sort_unstable();

    println!("Registered modules: {}", names.len());
    for name in names {
        if let Some(module) = reg.get(name) {
            match module.description() {
                Some(desc) => println!("  - {} ({} exports): {}", name, module.export_count(), desc),
                None => println!("  - {} ({} exports)", name, module.export_count()),
            }
        }
    }
    0
}

fn run_resolve(module: &str, prefix: Option<&str>) -> i32 {
    match resolve_module(module, prefix) {
        Some(resolved) => {
            println!("{}", resolved.name());
            0
        }
        // The soft-fail diagnostic has already been printed.
        None => 1,
    }
}

fn run_get(module: &str, attribute: &str, prefix: Option<&str>) -> i32 {
    match get_attribute(module, attribute, prefix) {
        Ok(Some(value)) => {
            println!("{value}");
            0
        }
        Ok(None) => 1,
        Err(e) => {
            eprintln!("Error [{}]: {}", e.stage(), e);
            1
        }
    }
}

fn run_call(module: &str, function: &str, raw_args: &[String], prefix: Option<&str>, use_lazy: bool) -> i32 {
    let args: Vec<Value> = raw_args.iter().map(|s| parse_value(s)).collect();

    if use_lazy {
        // Lazy path: hard-fail, arguments forwarded. The prefix flag does
        // not apply; lazy identifiers are always fully qualified.
        let full = match prefix {
            Some(p) => format!("{p}{module}"),
            None => module.to_string(),
        };
        let handle = lazy(full);
        match handle.call_named(function, &args) {
            Ok(value) => {
                println!("{value}");
                0
            }
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        }
    } else {
        if !args.is_empty() {
            eprintln!("Error: eager calls are zero-argument; pass --lazy to forward arguments");
            return 1;
        }
        match call_function(module, function, prefix) {
            Ok(Some(value)) => {
                println!("{value}");
                0
            }
            Ok(None) => 1,
            Err(e) => {
                eprintln!("Error [{}]: {}", e.stage(), e);
                1
            }
        }
    }
}

/// Parse a CLI argument into a value: int, then float, then bool, else string
fn parse_value(s: &str) -> Value {
    if let Ok(i) = s.parse::<i64>() {
        return Value::Int(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return Value::Float(f);
    }
    match s {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => Value::Str(s.to_string()),
    }
}
