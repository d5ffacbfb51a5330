use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Where the command line (sans program name) is routed to.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Selection<'t, S> {
    /// The application help: no tokens, or the `help` selector.
    Help,
    /// The `version` selector.
    Version,
    /// Any other selector, which must name a registered command.
    Command {
        selector: &'t str,
        remaining: &'t [S],
    },
}

/// Select the route for the tokens following the program name.
///
/// Only the first token is considered.
/// It is matched exactly: there is no abbreviation or case folding.
pub(crate) fn select<S: AsRef<str>>(tokens: &[S]) -> Selection<'_, S> {
    let selection = match tokens.split_first() {
        None => Selection::Help,
        Some((first, _)) if first.as_ref() == HELP_NAME => Selection::Help,
        Some((first, _)) if first.as_ref() == VERSION_NAME => Selection::Version,
        Some((first, remaining)) => Selection::Command {
            selector: first.as_ref(),
            remaining,
        },
    };

    #[cfg(feature = "tracing_debug")]
    {
        match &selection {
            Selection::Help => debug!("Selected the application help."),
            Selection::Version => debug!("Selected the application version."),
            Selection::Command { selector, remaining } => {
                debug!("Selected command '{selector}' with {} token(s).", remaining.len())
            }
        }
    }

    selection
}

/// Strip the program name (`argv[0]`) from the process arguments, if present.
pub(crate) fn strip_program<S>(args: &[S]) -> &[S] {
    args.get(1..).unwrap_or_default()
}
