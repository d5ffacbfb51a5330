/// The declaration of an option on a [`Command`](crate::Command): its name and description.
///
/// Descriptors only document the command (see `--help`); they do not restrict which options a [`Context`](crate::Context) accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    name: String,
    description: String,
}

impl OptionDescriptor {
    pub(crate) fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The option name, as specified after `--` on the command line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The description shown in the command help.
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let descriptor = OptionDescriptor::new("count", "How many times.");
        assert_eq!(descriptor.name(), "count");
        assert_eq!(descriptor.description(), "How many times.");
    }
}
