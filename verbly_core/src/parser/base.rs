use thiserror::Error;

use crate::model::ValueKind;

/// An error retrieving a typed option value from a [`Context`](crate::Context).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OptionError {
    /// The option was not specified, and its type has no absent value.
    #[error("Missing required option '{name}'.")]
    MissingRequired {
        /// The name of the option.
        name: String,
    },

    /// The option was specified, but its value cannot convert to the requested type.
    #[error("Option '{name}' cannot convert '{token}' to {expected}.")]
    BadType {
        /// The name of the option.
        name: String,
        /// The raw value which was specified.
        token: String,
        /// The kind of value requested.
        expected: ValueKind,
    },
}

/// An error dispatching the command line to a command.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The selector does not name a registered command.
    #[error("Command '{0}' not found.")]
    CommandNotFound(String),

    /// The command was selected, but it was never given a handler.
    #[error("Command '{0}' has no handler.")]
    CommandHasNoHandler(String),

    /// An option could not be retrieved inside the handler.
    #[error(transparent)]
    InvalidOption(#[from] OptionError),

    /// A failure raised by the handler itself.
    #[error("{0}")]
    Handler(Box<dyn std::error::Error + Send + Sync>),
}

impl DispatchError {
    /// Wrap an arbitrary handler failure.
    ///
    /// ### Example
    /// ```
    /// # use verbly_core as verbly;
    /// use verbly::DispatchError;
    ///
    /// let error = DispatchError::handler("disk is full");
    /// assert_eq!(error.to_string(), "disk is full");
    /// ```
    pub fn handler(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        DispatchError::Handler(error.into())
    }
}
