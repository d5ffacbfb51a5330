//! `verbly` is an embeddable command dispatcher for Rust.
//!
//! A host program registers named commands, documents their options, and attaches a handler to each.
//! `verbly` then routes the process arguments to the selected command, handing its handler a [`Context`] of typed, fallible option values.
//! Specifically, `verbly` attempts to prioritize the following design concerns:
//! * *Fallible, typed option access*:
//! Handlers ask for the type they want via [`Context::get`], and a missing or malformed value is an error rather than a panic.
//! * *Errors are values*:
//! Every failure is returned from [`App::run`] as a [`DispatchError`]; `verbly` never exits the process on your behalf.
//! * *Built-in help & version*:
//! Every application answers to `help` & `version`, and every command answers to `--help`, without any configuration.
//! * *Small surface*:
//! There are no positional arguments, short names, or shell completions.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/hello.rs")]
//! ```
//!
//! ```console
//! $ hello
//! usage: hello COMMAND [--OPTION [VALUE] ...]
//!
//! Greet somebody, a few times over.
//!
//! commands:
//!  greet     Say hello.
//!  help      Show this help message and exit.
//!  version   Show the version and exit.
//!
//! $ hello greet --help
//! usage: hello greet [--help] [--name] [--shout] [--times]
//!
//! Say hello.
//!
//! options:
//!  --help    Show this help message and exit.
//!  --name    Who to greet.
//!  --shout   Greet in capitals.
//!  --times   How many greetings (default: 1).
//!
//! $ hello greet --name Ada --times 2
//! Hello, Ada.
//! Hello, Ada.
//!
//! $ hello greet --name Ada --times two
//! warning: Option 'times' cannot convert 'two' to integer.
//! Hello, Ada.
//!
//! $ hello greet
//! error: Missing required option 'name'.
//!
//! $ hello wave
//! error: Command 'wave' not found.
//!
//! $ hello version
//! hello 0.1.0
//! ```
//!
//! # Dispatch Semantics
//! [`App::run`] takes the process arguments, where the first is the program name (see [`App::run_env`]).
//! Only the token following the program name, the *selector*, is used to route the invocation.
//! * No selector, or the selector `help`: the application help is printed.
//! * The selector `version`: the application name & version are printed.
//! * Any other selector must exactly match a registered command, else [`DispatchError::CommandNotFound`].
//! The remaining tokens are parsed into a [`Context`].
//! If the context contains `--help`, the command help is printed and its handler is skipped.
//! Otherwise, the command's handler is invoked (or [`DispatchError::CommandHasNoHandler`], if it was never given one).
//!
//! Registering a command twice returns the originally registered command.
//! Commands named `help` or `version` may be registered, but are never reachable.
//!
//! # Option Semantics
//! The tokens following the selector are read left to right.
//! * `--NAME VALUE` assigns `VALUE` to `NAME`, as long as `VALUE` does not itself start with `--`.
//! * `--NAME` followed by another option (or nothing) is a flag, and holds the value `"true"`.
//! * Any other token is ignored.
//! * If an option is repeated, the last assignment wins.
//!
//! Notice, the options documented via [`Command::option`] only affect the command help.
//! Undocumented options are still accepted by the [`Context`].
//!
//! ### Conversions
//! ```console
//! Type                      | Accepts                         | Absent
//! --------------------------------------------------------------------------------------
//! String                    | any value                       | MissingRequired
//! bool                      | true/false, 1/0, yes/no, on/off | false
//! i32, i64, u32, u64        | decimal integers                | MissingRequired
//! f32, f64                  | decimal floats, inf, NaN        | MissingRequired
//! ```
//!
//! A value which does not convert is an [`OptionError::BadType`].
//! Use [`Context::get_or`] to fall back to a default instead; a malformed value is then reported as a warning on the [`UserInterface`].
//!
//! # Features
//! * `unit_test`: Exposes [`InMemoryInterface`](./struct.InMemoryInterface.html), for capturing output in unit tests.
//! * `tracing_debug`: Emits `tracing` debug events while dispatching.
pub use verbly_core::*;
