use crate::constant::*;
use crate::model::ValueKind;

mod private {
    pub trait Sealed {}
}

/// Behaviour to convert a raw option value into a concrete type.
///
/// The set of implementations is closed (sealed): `String`, `bool`, the integer types `i32`, `i64`, `u32`, `u64`, and the floating-point types `f32`, `f64`.
pub trait OptionValue: private::Sealed + Sized {
    /// The kind of value this type converts into.
    const KIND: ValueKind;

    /// The value used when the option is absent, if any.
    ///
    /// Only `bool` has one (`false`); all others make the option required.
    fn absent() -> Option<Self> {
        None
    }

    /// Convert the raw value, returning `None` if it is malformed.
    fn convert(raw: &str) -> Option<Self>;
}

impl private::Sealed for String {}

impl OptionValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn convert(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl private::Sealed for bool {}

impl OptionValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn absent() -> Option<Self> {
        Some(false)
    }

    fn convert(raw: &str) -> Option<Self> {
        if TRUTHY.contains(&raw) {
            Some(true)
        } else if FALSY.contains(&raw) {
            Some(false)
        } else {
            None
        }
    }
}

// `str::parse` rejects any unconsumed trailing characters, so partial numbers never convert.
macro_rules! numeric_option_value {
    ($kind:expr, $($type:ty),+) => {
        $(
            impl private::Sealed for $type {}

            impl OptionValue for $type {
                const KIND: ValueKind = $kind;

                fn convert(raw: &str) -> Option<Self> {
                    raw.parse::<$type>().ok()
                }
            }
        )+
    };
}

numeric_option_value!(ValueKind::Integer, i32, i64, u32, u64);
numeric_option_value!(ValueKind::Float, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("true", Some(true))]
    #[case("1", Some(true))]
    #[case("on", Some(true))]
    #[case("yes", Some(true))]
    #[case("false", Some(false))]
    #[case("0", Some(false))]
    #[case("off", Some(false))]
    #[case("no", Some(false))]
    #[case("TRUE", None)]
    #[case("Yes", None)]
    #[case("y", None)]
    #[case("", None)]
    #[case(" true", None)]
    fn convert_bool(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(bool::convert(raw), expected);
    }

    #[rstest]
    #[case("12", Some(12))]
    #[case("-12", Some(-12))]
    #[case("+12", Some(12))]
    #[case("0", Some(0))]
    #[case("12x", None)]
    #[case("x12", None)]
    #[case("1.5", None)]
    #[case(" 12", None)]
    #[case("", None)]
    #[case("2147483648", None)]
    fn convert_i32(#[case] raw: &str, #[case] expected: Option<i32>) {
        assert_eq!(i32::convert(raw), expected);
    }

    #[rstest]
    #[case("2147483648", Some(2147483648))]
    #[case("-9", Some(-9))]
    #[case("9f", None)]
    fn convert_i64(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(i64::convert(raw), expected);
    }

    #[rstest]
    #[case("7", Some(7))]
    #[case("-7", None)]
    fn convert_unsigned(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(u32::convert(raw), expected);
        assert_eq!(u64::convert(raw), expected.map(u64::from));
    }

    #[rstest]
    #[case("1.5", Some(1.5))]
    #[case("-0.25", Some(-0.25))]
    #[case("3", Some(3.0))]
    #[case("1e3", Some(1000.0))]
    #[case("1.5f", None)]
    #[case("1,5", None)]
    #[case("", None)]
    fn convert_f64(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(f64::convert(raw), expected);
    }

    // Non-finite spellings are accepted as floats.
    #[rstest]
    #[case("NaN")]
    #[case("inf")]
    #[case("infinity")]
    #[case("-inf")]
    fn convert_f64_non_finite(#[case] raw: &str) {
        let value = f64::convert(raw).unwrap();
        assert!(!value.is_finite());
        assert!(!f32::convert(raw).unwrap().is_finite());
    }

    #[test]
    fn convert_f32() {
        assert_eq!(f32::convert("0.5"), Some(0.5));
        assert_eq!(f32::convert("half"), None);
    }

    #[rstest]
    #[case("")]
    #[case("anything at all")]
    #[case("--looks-like-an-option")]
    fn convert_string(#[case] raw: &str) {
        assert_eq!(String::convert(raw), Some(raw.to_string()));
    }

    #[test]
    fn absent() {
        assert_eq!(bool::absent(), Some(false));
        assert_eq!(String::absent(), None);
        assert_eq!(i32::absent(), None);
        assert_eq!(f64::absent(), None);
    }

    #[test]
    fn kinds() {
        assert_eq!(String::KIND, ValueKind::String);
        assert_eq!(bool::KIND, ValueKind::Bool);
        assert_eq!(i32::KIND, ValueKind::Integer);
        assert_eq!(u64::KIND, ValueKind::Integer);
        assert_eq!(f32::KIND, ValueKind::Float);
    }
}
