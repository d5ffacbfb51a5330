#[cfg(any(test, feature = "unit_test"))]
use std::cell::RefCell;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug)]
pub(crate) struct PaddingWidth(usize);

impl PaddingWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // padding must be at least 1
        if width >= 1 {
            Ok(PaddingWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug)]
pub(crate) struct LeftWidth(usize);

impl LeftWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // left must be at least 1
        if width >= 1 {
            Ok(LeftWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug)]
pub(crate) struct MiddleWidth(usize);

impl MiddleWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // middle must be at least 2 (so we can hyphenate)
        if width >= 2 {
            Ok(MiddleWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug)]
pub(crate) struct TotalWidth(pub usize);

/// Renders a two column (name & description) layout.
/// Descriptions which overflow the middle column wrap onto subsequent lines.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    padding: PaddingWidth,
    left: LeftWidth,
    middle: MiddleWidth,
}

// Target 95% of the total width, so the rendering never runs flush against the terminal edge.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

impl ColumnRenderer {
    /// Produce a renderer whose middle column is chosen to fit the total width.
    pub(crate) fn guided(
        padding: PaddingWidth,
        left: LeftWidth,
        middle: MiddleWidth,
        total_width: TotalWidth,
    ) -> Self {
        let non_middle = left.0 + padding.0;
        let target_total_width = (total_width.0 as f64 * TARGET_TOTAL_FACTOR) as usize;
        let guided_middle = std::cmp::max(middle.0, MINIMUM_MIDDLE_WIDTH);

        let middle = if guided_middle + non_middle <= target_total_width {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} and middle fit within the target total {target_total_width}.  Selecting middle: {guided_middle}.");
            }

            guided_middle
        } else if non_middle < total_width.0 {
            let calculated_middle =
                std::cmp::max(total_width.0 - non_middle, MINIMUM_MIDDLE_WIDTH);

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} fit within the total {total_width:?}.  Selecting middle: {calculated_middle}.");
            }

            calculated_middle
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} do not fit within the total {total_width:?}.  Selecting middle: {MINIMUM_MIDDLE_WIDTH}.");
            }

            MINIMUM_MIDDLE_WIDTH
        };

        Self::new(padding, left, MiddleWidth(middle))
    }

    pub(crate) fn new(padding: PaddingWidth, left: LeftWidth, middle: MiddleWidth) -> Self {
        Self {
            padding,
            left,
            middle,
        }
    }

    pub(crate) fn render(&self, indent: usize, left: &str, middle: &str) -> Vec<String> {
        let left_column_width = self.left.0;
        assert!(left.chars().count() <= left_column_width);
        let padding = " ".repeat(self.padding.0);
        let middle_column_width = self.middle.0.saturating_sub(indent).max(2);
        let mut out = Vec::default();

        for (i, part) in chunk(middle, middle_column_width).iter().enumerate() {
            let label = if i == 0 { left } else { "" };
            out.push(format!(
                "{:indent$}{label:left_column_width$}{padding}{part}",
                ""
            ));
        }

        if out.is_empty() {
            out.push(format!("{:indent$}{left}", ""));
        }

        out
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let step = width - 1;
    let mut start = 0;

    while characters.len() - start > width {
        let piece: String = characters[start..start + step].iter().collect();
        lines.push(format!("{piece}-"));
        start += step;
    }

    current.extend(&characters[start..]);
}

/// The sink for everything `verbly` shows the user.
///
/// Help and version output go through [`UserInterface::print`].
/// Diagnostics go through the leveled [`UserInterface::print_error`] and [`UserInterface::print_warning`].
pub trait UserInterface {
    /// Show a line of regular output.
    fn print(&self, message: String);

    /// Show an error diagnostic.
    fn print_error(&self, message: String);

    /// Show a (non-fatal) warning diagnostic.
    fn print_warning(&self, message: String);
}

/// The default [`UserInterface`]: output to stdout, diagnostics to stderr.
#[derive(Debug, Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("error: {message}");
    }

    fn print_warning(&self, message: String) {
        eprintln!("warning: {message}");
    }
}

/// *Available using 'unit_test' crate feature only.*</br></br>
/// A [`UserInterface`] which records everything in memory.
///
/// ### Example
/// ```ignore
/// # use verbly_core as verbly;
/// use verbly::{Context, InMemoryInterface};
///
/// let interface = InMemoryInterface::default();
/// let context = Context::parse(&["--count", "many"], &interface);
/// assert_eq!(context.get_or("count", 1), 1);
///
/// let (_, _, warnings) = interface.consume();
/// assert_eq!(warnings.len(), 1);
/// ```
#[cfg(any(test, feature = "unit_test"))]
#[derive(Debug, Default)]
pub struct InMemoryInterface {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
}

#[cfg(any(test, feature = "unit_test"))]
impl UserInterface for InMemoryInterface {
    fn print(&self, message: String) {
        self.messages.borrow_mut().push(message);
    }

    fn print_error(&self, message: String) {
        self.errors.borrow_mut().push(message);
    }

    fn print_warning(&self, message: String) {
        self.warnings.borrow_mut().push(message);
    }
}

#[cfg(any(test, feature = "unit_test"))]
impl InMemoryInterface {
    /// Take the recorded output: `(messages, errors, warnings)`.
    /// The messages are joined by newlines, or `None` if nothing was printed.
    pub fn consume(self) -> (Option<String>, Vec<String>, Vec<String>) {
        let InMemoryInterface {
            messages,
            errors,
            warnings,
        } = self;
        let messages = messages.into_inner();

        (
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("\n"))
            },
            errors.into_inner(),
            warnings.into_inner(),
        )
    }

    /// Take the recorded messages, asserting no diagnostics were recorded.
    pub fn consume_message(self) -> String {
        let (message, errors, warnings) = self.consume();
        assert_eq!(errors, Vec::<String>::default());
        assert_eq!(warnings, Vec::<String>::default());
        message.unwrap_or_default()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn renderer(left: usize, middle: usize) -> ColumnRenderer {
        ColumnRenderer::new(
            PaddingWidth::new(3).unwrap(),
            LeftWidth::new(left).unwrap(),
            MiddleWidth::new(middle).unwrap(),
        )
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn widths_reject_zero(#[case] width: usize) {
        assert_eq!(PaddingWidth::new(width).is_ok(), width >= 1);
        assert_eq!(LeftWidth::new(width).is_ok(), width >= 1);
        assert_eq!(MiddleWidth::new(width).is_ok(), width >= 2);
    }

    #[test]
    fn column_renderer_single_line() {
        let cr = renderer(6, 20);

        assert_eq!(
            cr.render(0, "--a", "First operand."),
            vec!["--a      First operand.".to_string()]
        );
        assert_eq!(
            cr.render(0, "--a", "   First   operand.  "),
            vec!["--a      First operand.".to_string()]
        );
        assert_eq!(
            cr.render(0, "--help", "Exactly twenty chars"),
            vec!["--help   Exactly twenty chars".to_string()]
        );
    }

    #[test]
    fn column_renderer_wraps() {
        let cr = renderer(6, 20);

        assert_eq!(
            cr.render(0, "--a", "The first operand of the sum."),
            vec![
                "--a      The first operand of".to_string(),
                "         the sum.".to_string(),
            ]
        );
    }

    #[test]
    fn column_renderer_hyphenates() {
        let cr = renderer(3, 10);

        assert_eq!(
            cr.render(0, "--a", "abcdefghijklmnopqrstu"),
            vec![
                "--a   abcdefghi-".to_string(),
                "      jklmnopqr-".to_string(),
                "      stu".to_string(),
            ]
        );
        assert_eq!(
            cr.render(0, "--a", "abcdefghij"),
            vec!["--a   abcdefghij".to_string()]
        );
    }

    #[test]
    fn column_renderer_hyphenates_multibyte() {
        let cr = renderer(3, 4);

        assert_eq!(
            cr.render(0, "--a", "ééééé"),
            vec![
                "--a   ééé-".to_string(),
                "      éé".to_string(),
            ]
        );
    }

    #[test]
    fn column_renderer_indent() {
        let cr = renderer(6, 21);

        assert_eq!(
            cr.render(1, "--a", "First operand."),
            vec![" --a      First operand.".to_string()]
        );
        assert_eq!(
            cr.render(1, "--a", "The first operand of the sum."),
            vec![
                " --a      The first operand of".to_string(),
                "          the sum.".to_string(),
            ]
        );
    }

    #[test]
    fn column_renderer_middle_empty() {
        let cr = renderer(6, 20);
        assert_eq!(cr.render(1, "--a", ""), vec![" --a".to_string()]);
        assert_eq!(cr.render(1, "--a", "   "), vec![" --a".to_string()]);
    }

    #[test]
    #[should_panic]
    fn column_renderer_left_overflow() {
        let cr = renderer(3, 20);
        cr.render(0, "--help", "something");
    }

    #[test]
    fn column_renderer_guided() {
        // When the total width is too short (for even the non middle).
        let cr = ColumnRenderer::guided(
            PaddingWidth::new(2).unwrap(),
            LeftWidth::new(5).unwrap(),
            MiddleWidth::new(2).unwrap(),
            TotalWidth(7),
        );
        assert_eq!(cr.middle.0, MINIMUM_MIDDLE_WIDTH);

        // When the total width is too short (for it all).
        let cr = ColumnRenderer::guided(
            PaddingWidth::new(2).unwrap(),
            LeftWidth::new(5).unwrap(),
            MiddleWidth::new(MINIMUM_MIDDLE_WIDTH + 1).unwrap(),
            TotalWidth(15),
        );
        assert_eq!(cr.middle.0, MINIMUM_MIDDLE_WIDTH);

        // When the middle is just within the target total.
        let cr = ColumnRenderer::guided(
            PaddingWidth::new(2).unwrap(),
            LeftWidth::new(5).unwrap(),
            MiddleWidth::new(MINIMUM_MIDDLE_WIDTH + 1).unwrap(),
            TotalWidth(27),
        );
        assert_eq!(cr.middle.0, MINIMUM_MIDDLE_WIDTH + 1);

        // When the middle overflows the target total, but the remainder is still usable.
        let cr = ColumnRenderer::guided(
            PaddingWidth::new(2).unwrap(),
            LeftWidth::new(5).unwrap(),
            MiddleWidth::new(MINIMUM_MIDDLE_WIDTH + 2).unwrap(),
            TotalWidth(27),
        );
        assert_eq!(cr.middle.0, MINIMUM_MIDDLE_WIDTH + 3);

        // When the total width is plenty.
        let cr = ColumnRenderer::guided(
            PaddingWidth::new(2).unwrap(),
            LeftWidth::new(5).unwrap(),
            MiddleWidth::new(MINIMUM_MIDDLE_WIDTH + 10).unwrap(),
            TotalWidth(120),
        );
        assert_eq!(cr.middle.0, MINIMUM_MIDDLE_WIDTH + 10);
    }

    #[test]
    fn in_memory_interface() {
        let interface = InMemoryInterface::default();
        interface.print("a".to_string());
        interface.print("b".to_string());
        interface.print_warning("w".to_string());
        interface.print_error("e".to_string());

        let (message, errors, warnings) = interface.consume();
        assert_eq!(message, Some("a\nb".to_string()));
        assert_eq!(errors, vec!["e".to_string()]);
        assert_eq!(warnings, vec!["w".to_string()]);
    }

    #[test]
    fn channel_interface() {
        let (sender, receiver) = util::channel_interface();
        sender.print("a".to_string());
        sender.print_warning("w".to_string());
        drop(sender);

        let (message, errors, warnings) = receiver.consume();
        assert_eq!(message, Some("a".to_string()));
        assert!(errors.is_empty());
        assert_eq!(warnings, vec!["w".to_string()]);
    }
}
