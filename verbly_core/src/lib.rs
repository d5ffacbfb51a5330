//! Core module for `verbly`.
//! See [documentation root](https://docs.rs/verbly/latest/verbly/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::{ConsoleInterface, Context, DispatchError, OptionError, UserInterface};

#[cfg(feature = "unit_test")]
pub use parser::InMemoryInterface;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
