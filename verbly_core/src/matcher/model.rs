use std::collections::HashMap;

use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Whether the token names an option (ex: `--name`).
pub(crate) fn is_option(token: &str) -> bool {
    token.starts_with(OPTION_MARKER)
}

/// The raw (unconverted) option values matched from a token stream.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RawOptions {
    values: HashMap<String, String>,
}

impl RawOptions {
    /// Match the tokens into `name -> value` pairs.
    ///
    /// An option token consumes the following token as its value, unless that token is itself an option.
    /// In that case (or at the end of the stream) the option is a flag with the value `"true"`.
    /// Tokens which are neither options nor values are skipped.
    /// A repeated option overwrites the earlier value.
    pub(crate) fn tokenize<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut values = HashMap::default();
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i].as_ref();

            let Some(name) = token.strip_prefix(OPTION_MARKER) else {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Skipping positional token '{token}' at {i}.");
                }

                i += 1;
                continue;
            };

            match tokens.get(i + 1).map(AsRef::<str>::as_ref) {
                Some(value) if !is_option(value) => {
                    values.insert(name.to_string(), value.to_string());
                    i += 2;
                }
                _ => {
                    values.insert(name.to_string(), FLAG_VALUE.to_string());
                    i += 1;
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched options: {values:?}.");
        }

        Self { values }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }
}
