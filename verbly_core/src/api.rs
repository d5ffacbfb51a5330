mod core;
mod option;
mod value;

pub use self::core::*;
pub use option::*;
pub use value::*;
