use terminal_size::{terminal_size, Width};

use crate::api::OptionDescriptor;
use crate::constant::*;
use crate::parser::interface::UserInterface;
use crate::parser::{ColumnRenderer, LeftWidth, MiddleWidth, PaddingWidth, TotalWidth};

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const DEFAULT_MIDDLE_WIDTH: usize = 17;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

/// An entry of the application help `commands:` section.
#[derive(Debug)]
pub(crate) struct CommandEntry<'c> {
    pub(crate) name: &'c str,
    pub(crate) about: &'c str,
}

pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    /// Print the application help: every registered command (in registration order), followed by the built-ins.
    pub(crate) fn print_app_help(
        &self,
        program: &str,
        about: &str,
        commands: &[CommandEntry<'_>],
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        user_interface.print(format!("usage: {program} COMMAND [--OPTION [VALUE] ...]"));
        print_about(about, user_interface);

        let mut rows: Vec<(String, &str)> = commands
            .iter()
            .map(|CommandEntry { name, about }| (name.to_string(), describe(about)))
            .collect();
        rows.push((HELP_NAME.to_string(), HELP_MESSAGE));
        rows.push((VERSION_NAME.to_string(), VERSION_MESSAGE));

        self.print_section("commands:", rows, user_interface);
    }

    /// Print the help of a single command: every registered option, in lexicographic order.
    pub(crate) fn print_command_help(
        &self,
        program: &str,
        command: &str,
        about: &str,
        options: &[OptionDescriptor],
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let mut options: Vec<&OptionDescriptor> = options.iter().collect();
        options.sort_by(|a, b| a.name().cmp(b.name()));

        let mut summary = vec![format!("[{OPTION_MARKER}{HELP_NAME}]")];
        summary.extend(
            options
                .iter()
                .map(|option| format!("[{OPTION_MARKER}{}]", option.name())),
        );
        user_interface.print(format!(
            "usage: {program} {command} {s}",
            s = summary.join(" ")
        ));
        print_about(about, user_interface);

        let mut rows = vec![(format!("{OPTION_MARKER}{HELP_NAME}"), HELP_MESSAGE)];
        rows.extend(options.iter().map(|option| {
            (
                format!("{OPTION_MARKER}{}", option.name()),
                describe(option.description()),
            )
        }));

        self.print_section("options:", rows, user_interface);
    }

    pub(crate) fn print_version(
        &self,
        program: &str,
        version: &str,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        user_interface.print(format!("{program} {version}"));
    }

    fn print_section(
        &self,
        title: &str,
        rows: Vec<(String, &str)>,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let left_column_width = rows
            .iter()
            .map(|(left, _)| left.chars().count())
            .max()
            .unwrap_or(1)
            .max(1);
        let middle_column_width = rows
            .iter()
            .map(|(_, middle)| middle.chars().count() + MAIN_INDENT)
            .max()
            .unwrap_or(2)
            .max(2);

        let column_renderer = match &self.terminal_width {
            Some(tw) => ColumnRenderer::guided(
                PaddingWidth::new(PADDING_WIDTH).unwrap(),
                LeftWidth::new(left_column_width).unwrap(),
                MiddleWidth::new(middle_column_width).unwrap(),
                TotalWidth(*tw),
            ),
            None => ColumnRenderer::new(
                PaddingWidth::new(PADDING_WIDTH).unwrap(),
                LeftWidth::new(left_column_width).unwrap(),
                MiddleWidth::new(std::cmp::min(middle_column_width, DEFAULT_MIDDLE_WIDTH))
                    .unwrap(),
            ),
        };

        user_interface.print("".to_string());
        user_interface.print(title.to_string());

        for (left, middle) in rows {
            for line in column_renderer.render(MAIN_INDENT, &left, middle) {
                user_interface.print(line);
            }
        }
    }
}

fn print_about(about: &str, user_interface: &(impl UserInterface + ?Sized)) {
    if !about.trim().is_empty() {
        user_interface.print("".to_string());
        user_interface.print(about.to_string());
    }
}

fn describe(description: &str) -> &str {
    if description.trim().is_empty() {
        DESCRIPTION_PLACEHOLDER
    } else {
        description
    }
}
