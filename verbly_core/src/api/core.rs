use std::collections::HashMap;
use std::env;

use crate::api::OptionDescriptor;
use crate::constant::*;
use crate::parser::{
    select, strip_program, CommandEntry, ConsoleInterface, Context, DispatchError, Printer,
    Selection, UserInterface,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We need a (dyn ..) here so that commands with differing closures may live in a single registry.
type Handler<'a> = Box<dyn FnMut(&Context<'_>) -> Result<(), DispatchError> + 'a>;

/// The command registry & dispatcher.
///
/// ### Example
/// ```
/// # use verbly_core as verbly;
/// use verbly::App;
///
/// let mut total: i64 = 0;
/// let mut app = App::new("calc").about("A tiny calculator.").version("2.0");
/// app.command("sum", "Add two numbers.")
///     .option("a", "The first operand.")
///     .option("b", "The second operand.")
///     .handler(|context| {
///         total = context.get::<i64>("a")? + context.get::<i64>("b")?;
///         Ok(())
///     });
///
/// app.run(&["calc", "sum", "--a", "2", "--b", "3"]).unwrap();
/// drop(app);
/// assert_eq!(total, 5);
/// ```
pub struct App<'a> {
    name: String,
    about: String,
    version: String,
    commands: Vec<Command<'a>>,
    index: HashMap<String, usize>,
    user_interface: Box<dyn UserInterface + 'a>,
    printer: Printer,
}

impl<'a> std::fmt::Debug for App<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("name", &self.name)
            .field("about", &self.about)
            .field("version", &self.version)
            .field("commands", &self.commands)
            .finish()
    }
}

impl<'a> App<'a> {
    /// Create an application which prints to the console.
    ///
    /// ### Example
    /// ```
    /// # use verbly_core as verbly;
    /// use verbly::App;
    ///
    /// let mut app = App::new("program");
    /// app.run(&["program", "version"]).unwrap();
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_interface(name, Box::new(ConsoleInterface::default()))
    }

    /// Create an application which prints to the provided user interface.
    pub fn with_interface(
        name: impl Into<String>,
        user_interface: Box<dyn UserInterface + 'a>,
    ) -> Self {
        Self {
            name: name.into(),
            about: String::default(),
            version: DEFAULT_VERSION.to_string(),
            commands: Vec::default(),
            index: HashMap::default(),
            user_interface,
            printer: Printer::terminal(),
        }
    }

    #[cfg(test)]
    pub(crate) fn printer(mut self, printer: Printer) -> Self {
        self.printer = printer;
        self
    }

    /// Document the about message for this application.
    /// If repeated, only the final message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about = description.into();
        self
    }

    /// Set the version shown by the `version` selector (default: `1.0`).
    /// If repeated, only the final version will apply.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Register (or fetch) a command.
    ///
    /// If a command of the same name is already registered, that command is returned unchanged (the `description` is ignored).
    /// Commands named `help` or `version` may be registered, but are shadowed by the built-in selectors.
    ///
    /// ### Example
    /// ```
    /// # use verbly_core as verbly;
    /// use verbly::App;
    ///
    /// let mut app = App::new("program");
    /// app.command("sum", "Add numbers.").option("a", "");
    /// app.command("sum", "ignored").option("b", "");
    ///
    /// let sum = app.get("sum").unwrap();
    /// assert_eq!(sum.description(), "Add numbers.");
    /// assert_eq!(sum.options().len(), 2);
    /// ```
    pub fn command(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Command<'a> {
        let name = name.into();
        let position = match self.index.get(&name) {
            Some(position) => *position,
            None => {
                let position = self.commands.len();
                self.commands.push(Command::new(
                    self.name.clone(),
                    name.clone(),
                    description.into(),
                ));
                self.index.insert(name, position);
                position
            }
        };

        &mut self.commands[position]
    }

    /// Get a registered command.
    pub fn get(&self, name: &str) -> Option<&Command<'a>> {
        self.index
            .get(name)
            .map(|position| &self.commands[*position])
    }

    /// Dispatch the process arguments, where `args[0]` is the program name.
    ///
    /// * No further tokens, or the selector `help`: prints the application help.
    /// * The selector `version`: prints the application name & version.
    /// * Otherwise the selector names the command to execute, and the remaining tokens make its [`Context`].
    ///
    /// Any failure, from the dispatch itself or from the command handler, is returned unchanged.
    pub fn run<S: AsRef<str>>(&mut self, args: &[S]) -> Result<(), DispatchError> {
        match select(strip_program(args)) {
            Selection::Help => {
                let commands: Vec<CommandEntry<'_>> = self
                    .commands
                    .iter()
                    .map(|command| CommandEntry {
                        name: &command.name,
                        about: &command.about,
                    })
                    .collect();
                self.printer.print_app_help(
                    &self.name,
                    &self.about,
                    &commands,
                    &*self.user_interface,
                );
                Ok(())
            }
            Selection::Version => {
                self.printer
                    .print_version(&self.name, &self.version, &*self.user_interface);
                Ok(())
            }
            Selection::Command {
                selector,
                remaining,
            } => {
                let position = *self
                    .index
                    .get(selector)
                    .ok_or_else(|| DispatchError::CommandNotFound(selector.to_string()))?;

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Dispatching to command '{selector}'.");
                }

                let context = Context::parse(remaining, &*self.user_interface);
                self.commands[position].dispatch(&context, &self.printer)
            }
        }
    }

    /// Dispatch the Cli [`env::args`].
    /// See [`App::run`].
    ///
    /// The caller decides how to report a failure (and which exit code to use).
    pub fn run_env(&mut self) -> Result<(), DispatchError> {
        let args: Vec<String> = env::args().collect();
        self.run(&args)
    }
}

/// A command: its documented options, and the handler which executes it.
///
/// Configured via [`App::command`].
pub struct Command<'a> {
    program: String,
    name: String,
    about: String,
    options: Vec<OptionDescriptor>,
    handler: Option<Handler<'a>>,
}

impl<'a> std::fmt::Debug for Command<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("about", &self.about)
            .field("options", &self.options)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

impl<'a> Command<'a> {
    pub(crate) fn new(program: String, name: String, about: String) -> Self {
        Self {
            program,
            name,
            about,
            options: Vec::default(),
            handler: None,
        }
    }

    /// Document an option for this command.
    /// If repeated for the same `name`, only the first declaration is kept.
    ///
    /// The order of options does not affect parsing; the help lists them alphabetically.
    pub fn option(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        let name = name.into();

        if !self.options.iter().any(|option| option.name() == name) {
            self.options.push(OptionDescriptor::new(name, description));
        }

        self
    }

    /// Set the handler which executes this command.
    /// If repeated, only the final handler will apply.
    ///
    /// The handler may use `?` on [`Context::get`]; see [`DispatchError::handler`] for custom failures.
    pub fn handler(
        &mut self,
        handler: impl FnMut(&Context<'_>) -> Result<(), DispatchError> + 'a,
    ) -> &mut Self {
        self.handler.replace(Box::new(handler));
        self
    }

    /// Execute this command against the context.
    ///
    /// If the context contains `--help`, the command help is printed instead of invoking the handler.
    pub fn execute(&mut self, context: &Context<'_>) -> Result<(), DispatchError> {
        self.dispatch(context, &Printer::terminal())
    }

    pub(crate) fn dispatch(
        &mut self,
        context: &Context<'_>,
        printer: &Printer,
    ) -> Result<(), DispatchError> {
        if context.has(HELP_NAME) {
            printer.print_command_help(
                &self.program,
                &self.name,
                &self.about,
                &self.options,
                context.user_interface(),
            );
            return Ok(());
        }

        match self.handler.as_mut() {
            Some(handler) => handler(context),
            None => Err(DispatchError::CommandHasNoHandler(self.name.clone())),
        }
    }

    /// The command name, as selected on the command line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The description shown in the application help.
    pub fn description(&self) -> &str {
        &self.about
    }

    /// The documented options, in declaration order.
    pub fn options(&self) -> &[OptionDescriptor] {
        &self.options
    }
}
