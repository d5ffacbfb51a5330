use crate::api::OptionValue;
use crate::matcher::RawOptions;
use crate::parser::{OptionError, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The options of a single command invocation.
///
/// Built from the tokens following the command name, and handed to the command's handler.
/// Options are specified as `--name value`, or as a flag `--name` (which holds the value `"true"`).
/// Tokens that are not options (nor option values) are ignored.
pub struct Context<'ui> {
    options: RawOptions,
    user_interface: &'ui dyn UserInterface,
}

impl<'ui> std::fmt::Debug for Context<'ui> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("options", &self.options)
            .finish()
    }
}

impl<'ui> Context<'ui> {
    /// Parse the tokens into a context.
    /// Warnings from [`Context::get_or`] are reported to `user_interface`.
    ///
    /// ### Example
    /// ```
    /// # use verbly_core as verbly;
    /// use verbly::{ConsoleInterface, Context};
    ///
    /// let interface = ConsoleInterface::default();
    /// let context = Context::parse(&["--a", "2", "--verbose"], &interface);
    ///
    /// assert_eq!(context.get::<i32>("a").unwrap(), 2);
    /// assert!(context.get::<bool>("verbose").unwrap());
    /// ```
    pub fn parse<S: AsRef<str>>(tokens: &[S], user_interface: &'ui dyn UserInterface) -> Self {
        Self {
            options: RawOptions::tokenize(tokens),
            user_interface,
        }
    }

    /// Whether the option was specified.
    pub fn has(&self, name: &str) -> bool {
        self.options.contains(name)
    }

    /// The raw (unconverted) value of the option, if specified.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.options.get(name)
    }

    /// Get the value of the option, converted to `T`.
    ///
    /// An absent `bool` option is `false`; any other absent option is an [`OptionError::MissingRequired`].
    /// A value which cannot convert is an [`OptionError::BadType`].
    ///
    /// ### Example
    /// ```
    /// # use verbly_core as verbly;
    /// use verbly::{ConsoleInterface, Context, OptionError};
    ///
    /// let interface = ConsoleInterface::default();
    /// let context = Context::parse(&["--n", "12x"], &interface);
    ///
    /// assert!(matches!(context.get::<i32>("n"), Err(OptionError::BadType { .. })));
    /// assert!(matches!(context.get::<i32>("m"), Err(OptionError::MissingRequired { .. })));
    /// assert_eq!(context.get::<bool>("m"), Ok(false));
    /// ```
    pub fn get<T: OptionValue>(&self, name: &str) -> Result<T, OptionError> {
        match self.options.get(name) {
            Some(raw) => T::convert(raw).ok_or_else(|| OptionError::BadType {
                name: name.to_string(),
                token: raw.to_string(),
                expected: T::KIND,
            }),
            None => T::absent().ok_or_else(|| OptionError::MissingRequired {
                name: name.to_string(),
            }),
        }
    }

    /// Get the value of the option converted to `T`, or `default` when that is not possible.
    ///
    /// An absent option silently falls back to `default`.
    /// A value which cannot convert also falls back, but first shows a warning on the user interface.
    pub fn get_or<T: OptionValue>(&self, name: &str, default: T) -> T {
        match self.get(name) {
            Ok(value) => value,
            Err(OptionError::MissingRequired { .. }) => default,
            Err(error @ OptionError::BadType { .. }) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Falling back to the default for '{name}': {error}");
                }

                self.user_interface.print_warning(error.to_string());
                default
            }
        }
    }

    pub(crate) fn user_interface(&self) -> &'ui dyn UserInterface {
        self.user_interface
    }
}
