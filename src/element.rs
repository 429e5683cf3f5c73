use std::hash::{Hash, Hasher};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// An element kind a `RawList` can hold.
///
/// Each kind names its default capacity and the value written into slots
/// that are cleared or freshly allocated.
pub trait Element: Clone + PartialEq {
    /// Short kind name, used in log records.
    const KIND: &'static str;

    /// Capacity of `RawList::new` and of the first growth from an empty buffer.
    const DEFAULT_CAPACITY: usize;

    fn clear_value() -> Self;

    /// Structural equality used when comparing whole lists.
    #[inline(always)]
    fn same(&self, other: &Self) -> bool {
        self == other
    }

    /// Hashes the element consistently with `same`.
    fn hash_element<H: Hasher>(&self, state: &mut H);
}

/// Element kinds supporting in-place arithmetic.
pub trait NumericElement: Element + Copy + AddAssign + SubAssign + MulAssign + DivAssign {}

/// Element kinds that can be moved through a `Window`.
pub trait WindowElement: Element {
    /// Type stored in the window.
    type Raw: Copy;

    fn from_raw(raw: Self::Raw) -> Self;

    fn to_raw(&self) -> Self::Raw;
}

macro_rules! scalar_element {
    ($($ty:ty => $kind:expr),+ $(,)?) => {$(
        impl Element for $ty {
            const KIND: &'static str = $kind;
            const DEFAULT_CAPACITY: usize = 10;

            #[inline(always)]
            fn clear_value() -> Self {
                Default::default()
            }

            #[inline(always)]
            fn hash_element<H: Hasher>(&self, state: &mut H) {
                self.hash(state);
            }
        }

        impl WindowElement for $ty {
            type Raw = $ty;

            #[inline(always)]
            fn from_raw(raw: $ty) -> Self {
                raw
            }

            #[inline(always)]
            fn to_raw(&self) -> $ty {
                *self
            }
        }
    )+};
}

macro_rules! integer_element {
    ($($ty:ty => $kind:expr),+ $(,)?) => {$(
        scalar_element!($ty => $kind);

        impl NumericElement for $ty {}
    )+};
}

macro_rules! float_element {
    ($($ty:ty => $kind:expr),+ $(,)?) => {$(
        impl Element for $ty {
            const KIND: &'static str = $kind;
            const DEFAULT_CAPACITY: usize = 10;

            #[inline(always)]
            fn clear_value() -> Self {
                0.0
            }

            // NaN equals NaN and 0.0 differs from -0.0, so that equal lists hash equally.
            #[inline(always)]
            fn same(&self, other: &Self) -> bool {
                self.to_bits() == other.to_bits()
            }

            #[inline(always)]
            fn hash_element<H: Hasher>(&self, state: &mut H) {
                self.to_bits().hash(state);
            }
        }

        impl WindowElement for $ty {
            type Raw = $ty;

            #[inline(always)]
            fn from_raw(raw: $ty) -> Self {
                raw
            }

            #[inline(always)]
            fn to_raw(&self) -> $ty {
                *self
            }
        }

        impl NumericElement for $ty {}
    )+};
}

integer_element!(
    u8 => "byte",
    i8 => "i8",
    u16 => "u16",
    i16 => "short",
    u32 => "u32",
    i32 => "int",
    u64 => "u64",
    i64 => "long",
    usize => "usize",
    isize => "isize",
);

float_element!(
    f32 => "float",
    f64 => "double",
);

scalar_element!(char => "char");

impl Element for bool {
    const KIND: &'static str = "bool";
    const DEFAULT_CAPACITY: usize = 10;

    #[inline(always)]
    fn clear_value() -> Self {
        false
    }

    #[inline(always)]
    fn hash_element<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}

/// Booleans travel through byte windows; only the byte `1` reads as `true`.
impl WindowElement for bool {
    type Raw = u8;

    #[inline(always)]
    fn from_raw(raw: u8) -> Self {
        raw == 1
    }

    #[inline(always)]
    fn to_raw(&self) -> u8 {
        *self as u8
    }
}

impl Element for String {
    const KIND: &'static str = "string";
    const DEFAULT_CAPACITY: usize = 3;

    #[inline(always)]
    fn clear_value() -> Self {
        String::new()
    }

    #[inline(always)]
    fn hash_element<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}

#[cfg(test)]
mod element_tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Element>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash_element(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn clear_values() {
        assert_eq!(0, i32::clear_value());
        assert_eq!(0.0, f64::clear_value());
        assert_eq!('\0', char::clear_value());
        assert_eq!(false, bool::clear_value());
        assert_eq!("", String::clear_value());
    }

    #[test]
    fn default_capacities() {
        assert_eq!(10, <u8 as Element>::DEFAULT_CAPACITY);
        assert_eq!(10, <bool as Element>::DEFAULT_CAPACITY);
        assert_eq!(3, <String as Element>::DEFAULT_CAPACITY);
    }

    #[test]
    fn floats_compare_by_bits() {
        assert!(f32::NAN.same(&f32::NAN));
        assert!(!0.0f64.same(&-0.0));
        assert_eq!(hash_of(&f64::NAN), hash_of(&f64::NAN));
    }

    #[test]
    fn bool_reads_only_one_as_true() {
        assert!(bool::from_raw(1));
        assert!(!bool::from_raw(0));
        assert!(!bool::from_raw(2));
        assert!(!bool::from_raw(255));
        assert_eq!(1, true.to_raw());
        assert_eq!(0, false.to_raw());
    }
}
