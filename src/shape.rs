//! Structural unwrapping of collections into lines
//!
//! Values are sorted into a [`Shape`] at the call boundary. Sequences and mappings are written
//! one element per line (or flattened onto the current line), text is written as-is and anything
//! else is written as a single value.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::{Debug, Display};

use crate::accumulator::TextAccumulator;

/// The shape of a value, borrowed for the duration of one call
pub enum Shape<'a> {
    /// Ordered elements
    Sequence(Vec<&'a dyn Debug>),
    /// Key/value entries, in the collection's iteration order
    Mapping(Vec<(&'a dyn Debug, &'a dyn Debug)>),
    /// Plain text, written without quotes or escapes
    Text(&'a str),
    /// Anything that is written as one value
    Scalar(&'a dyn Debug),
}

/// Values that know their [`Shape`]
///
/// Implement this for your own collection types to make them unwrap like the std ones. Any other
/// [`Debug`] value can be passed through [`Scalar`].
pub trait Shaped {
    fn shape(&self) -> Shape<'_>;
}

/// Treats any [`Debug`] value as a scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar<T>(pub T);

impl<T: Debug> Shaped for Scalar<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(&self.0)
    }
}

fn sequence<'a, T: Debug + 'a>(items: impl IntoIterator<Item = &'a T>) -> Shape<'a> {
    Shape::Sequence(items.into_iter().map(|v| v as &dyn Debug).collect())
}

fn mapping<'a, K: Debug + 'a, V: Debug + 'a>(
    entries: impl IntoIterator<Item = (&'a K, &'a V)>,
) -> Shape<'a> {
    Shape::Mapping(
        entries
            .into_iter()
            .map(|(k, v)| (k as &dyn Debug, v as &dyn Debug))
            .collect(),
    )
}

impl<T: Debug> Shaped for [T] {
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }
}

impl<T: Debug, const N: usize> Shaped for [T; N] {
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }
}

impl<T: Debug> Shaped for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }
}

impl<T: Debug> Shaped for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }
}

impl<T: Debug, S> Shaped for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }
}

impl<T: Debug> Shaped for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }
}

impl<K: Debug, V: Debug, S> Shaped for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        mapping(self)
    }
}

impl<K: Debug, V: Debug> Shaped for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        mapping(self)
    }
}

impl<T: Shaped + ?Sized> Shaped for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Shaped + ?Sized> Shaped for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl Shaped for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

impl Shaped for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

impl<T: Debug> Shaped for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(self)
    }
}

macro_rules! scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Shaped for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(self)
                }
            }
        )*
    };
}

scalar!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, (),
);

impl TextAccumulator {
    /// Writes a collection one element per line, with a `[NN]` index on sequence elements
    ///
    /// * Sequences: `[00] first`, `[01] second`. An element whose representation spans several
    ///   lines is split so every line is indented, only the first carries the index
    /// * Mappings: `[key]: value`
    /// * Text: on its own line, as-is
    /// * Anything else: like [`Self::value`]
    pub fn indexed_values<S: Shaped + ?Sized>(&mut self, collection: &S) -> &mut Self {
        self.unwrap_lines(collection.shape(), true)
    }

    /// Like [`Self::indexed_values`], without the index on sequence elements
    pub fn values<S: Shaped + ?Sized>(&mut self, collection: &S) -> &mut Self {
        self.unwrap_lines(collection.shape(), false)
    }

    fn unwrap_lines(&mut self, shape: Shape<'_>, index: bool) -> &mut Self {
        match shape {
            Shape::Sequence(items) => {
                for (i, item) in items.into_iter().enumerate() {
                    let line = if index {
                        format!("[{i:02}] {item:?}")
                    } else {
                        format!("{item:?}")
                    };
                    self.push_split(&line);
                }
            }
            Shape::Mapping(entries) => {
                for (key, value) in entries {
                    self.push_line_fmt(format_args!("[{key:?}]: {value:?}"));
                }
            }
            Shape::Text(text) => self.push_line(text),
            Shape::Scalar(value) => {
                self.value(value);
            }
        }
        self
    }

    /// A single value on its own line, or several as `[0] a`, `[1] b`
    pub fn variadic_values(&mut self, values: &[&dyn Debug]) -> &mut Self {
        match values {
            [single] => self.push_line_fmt(format_args!("{single:?}")),
            many => {
                for (i, value) in many.iter().enumerate() {
                    self.push_line_fmt(format_args!("[{i}] {value:?}"));
                }
            }
        }
        self
    }

    /// Like [`Self::variadic_values`] with the [`Display`] representation
    pub fn stringable_list(&mut self, values: &[&dyn Display]) -> &mut Self {
        match values {
            [single] => self.push_line_fmt(format_args!("{single}")),
            many => {
                for (i, value) in many.iter().enumerate() {
                    self.push_line_fmt(format_args!("[{i}] {value}"));
                }
            }
        }
        self
    }

    /// Writes a collection onto the current line
    ///
    /// * Sequences: ` ( a, b, c,)`
    /// * Mappings: ` { k:v, k:v,}`
    /// * Text: as-is, on a new line
    /// * Anything else: like [`Self::value`], on a new line
    pub fn flattened<S: Shaped + ?Sized>(&mut self, collection: &S) -> &mut Self {
        self.flatten(collection.shape(), false)
    }

    /// Like [`Self::flattened`] with sequence elements written as `NN:value`
    pub fn flattened_indexed<S: Shaped + ?Sized>(&mut self, collection: &S) -> &mut Self {
        self.flatten(collection.shape(), true)
    }

    fn flatten(&mut self, shape: Shape<'_>, index: bool) -> &mut Self {
        match shape {
            Shape::Sequence(items) => {
                self.raw(" (");
                for (i, item) in items.into_iter().enumerate() {
                    if index {
                        self.formatted_raw(format_args!("{i:02}:{item:?},"));
                    } else {
                        self.formatted_raw(format_args!("{item:?},"));
                    }
                }
                self.raw(")")
            }
            Shape::Mapping(entries) => {
                self.raw(" {");
                for (key, value) in entries {
                    self.formatted_raw(format_args!("{key:?}:{value:?},"));
                }
                self.raw("}")
            }
            Shape::Text(text) => {
                self.push_line(text);
                self
            }
            Shape::Scalar(value) => self.value(value),
        }
    }
}
