//! Growable contiguous lists of primitive and text elements.
//!
//! One container, `RawList<T>`, serves every element kind. What a kind can
//! do beyond the common operations depends on the traits it implements:
//! `NumericElement` kinds get in-place arithmetic, `WindowElement` kinds move
//! through a `Window`, and `RawList<String>` implements `TextElementOps`.
//!
//! ```
//! use rawlist::IntList;
//!
//! let mut list = IntList::from([1, 2, 5]);
//! list.insert_slice(2, &[3, 4]).remove_range(0, 1);
//! assert_eq!(&[2, 3, 4, 5], list.as_slice());
//! ```

#[macro_use]
mod logging;
mod element;
mod error;
mod growth;
mod iter;
mod list;
mod text;
mod traits;
mod window;

pub use element::{Element, NumericElement, WindowElement};
pub use error::RawListError;
pub use growth::{GrowthPolicy, MAX_SAFE_LENGTH, max_safe_length};
pub use iter::UncheckedIter;
pub use list::RawList;
pub use text::TextElementOps;
pub use traits::RawListIterator;
pub use window::{Window, WindowBuffer, WindowMut};

/// Unsigned bytes, `0..=255`. Use `RawList<i8>` for signed bytes.
pub type ByteList = RawList<u8>;
pub type ShortList = RawList<i16>;
pub type IntList = RawList<i32>;
pub type LongList = RawList<i64>;
pub type FloatList = RawList<f32>;
pub type DoubleList = RawList<f64>;
pub type CharList = RawList<char>;
pub type BoolList = RawList<bool>;
pub type StringList = RawList<String>;
