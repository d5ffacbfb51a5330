mod base;
mod context;
mod interface;
mod middleware;
mod printer;

pub use base::*;
pub use context::*;
pub use interface::{ConsoleInterface, UserInterface};
pub(crate) use interface::{ColumnRenderer, LeftWidth, MiddleWidth, PaddingWidth, TotalWidth};
pub(crate) use middleware::*;
pub(crate) use printer::*;

#[cfg(any(test, feature = "unit_test"))]
pub use interface::InMemoryInterface;

#[cfg(test)]
pub(crate) use interface::util;
