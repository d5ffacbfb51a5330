// Tokens.
pub(crate) const OPTION_MARKER: &str = "--";
pub(crate) const FLAG_VALUE: &str = "true";
pub(crate) const TRUTHY: [&str; 4] = ["true", "1", "on", "yes"];
pub(crate) const FALSY: [&str; 4] = ["false", "0", "off", "no"];

// Built-in selectors & switches.
pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";
pub(crate) const VERSION_NAME: &str = "version";
pub(crate) const VERSION_MESSAGE: &str = "Show the version and exit.";

// Registration defaults.
pub(crate) const DEFAULT_VERSION: &str = "1.0";
pub(crate) const DESCRIPTION_PLACEHOLDER: &str = "-";
