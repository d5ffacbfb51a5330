/// The kinds of value an option may be converted into.
///
/// The set is closed: every type accepted by [`Context::get`](crate::Context::get) maps onto exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The raw value, verbatim.
    String,
    /// One of `true`/`1`/`on`/`yes` or `false`/`0`/`off`/`no`.
    Bool,
    /// A base-10 integer.
    Integer,
    /// A base-10 floating-point number.
    Float,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
        };
        write!(f, "{name}")
    }
}
