//! # Labels
//!
//! A [`Label`] names an input signal either by its raw machine code
//! (`Label::Code(37)`) or by a symbolic alias (`Label::Name("left")`).
//!
//! Both forms share a single normalized key space: the code `37` and the
//! string `"37"` address the same table slot. Tables throughout keytrig are
//! keyed by [`Label::key`], and the tagged form is kept only so values can be
//! reported back the way the caller supplied them.

use crate::error::AliasError;
use std::{borrow::Cow, collections::BTreeMap, fmt};

/// An alias or raw code identifying an input signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Label {
    /// A raw numeric code, e.g. a key code or mouse button index.
    Code(i64),
    /// A symbolic name, e.g. `"left"` or `"fire"`.
    Name(String),
}

impl Label {
    /// Parse a label from text. Integer text becomes a [`Label::Code`].
    pub fn parse(text: &str) -> Self {
        match text.parse::<i64>() {
            Ok(code) => Label::Code(code),
            Err(_) => Label::Name(text.to_owned()),
        }
    }

    /// The normalized key shared by the numeric and textual forms.
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            Label::Code(code) => Cow::Owned(code.to_string()),
            Label::Name(name) => Cow::Borrowed(name),
        }
    }

    /// Whether two labels address the same slot.
    pub fn same_key(&self, other: &Label) -> bool {
        self.key() == other.key()
    }

    /// The numeric code, if this is a [`Label::Code`].
    pub fn as_code(&self) -> Option<i64> {
        match self {
            Label::Code(code) => Some(*code),
            Label::Name(_) => None,
        }
    }

    /// The symbolic name, if this is a [`Label::Name`].
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Label::Code(_) => None,
            Label::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Code(code) => write!(f, "{code}"),
            Label::Name(name) => f.write_str(name),
        }
    }
}

macro_rules! label_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Label {
                fn from(code: $ty) -> Self {
                    Label::Code(i64::from(code))
                }
            }
        )*
    };
}

label_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label::Name(name.to_owned())
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Label::Name(name)
    }
}

impl From<&String> for Label {
    fn from(name: &String) -> Self {
        Label::Name(name.clone())
    }
}

impl From<char> for Label {
    fn from(c: char) -> Self {
        Label::Name(c.to_string())
    }
}

impl From<&Label> for Label {
    fn from(label: &Label) -> Self {
        label.clone()
    }
}

/// The raw value supplied for one action in a bulk alias map.
///
/// Settings loaders hand over whatever shape the document had; only
/// [`AliasEntry::Sequence`] is accepted by bulk registration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum AliasEntry {
    /// An ordered sequence of aliases or codes.
    Sequence(Vec<Label>),
    /// A lone value where a sequence was expected.
    Single(Label),
    /// A keyed table where a sequence was expected.
    Table(BTreeMap<String, Label>),
}

impl AliasEntry {
    /// Unwrap the sequence, rejecting any other shape for action `name`.
    pub fn into_sequence(self, name: &str) -> Result<Vec<Label>, AliasError> {
        match self {
            AliasEntry::Sequence(values) => Ok(values),
            other => Err(AliasError::InvalidAlias {
                name: name.to_owned(),
                found: other.describe(),
            }),
        }
    }

    fn describe(&self) -> String {
        match self {
            AliasEntry::Sequence(values) => format!("a sequence of {}", values.len()),
            AliasEntry::Single(label) => format!("a single value `{label}`"),
            AliasEntry::Table(table) => format!("a table with {} keys", table.len()),
        }
    }
}

impl<L: Into<Label>> From<Vec<L>> for AliasEntry {
    fn from(values: Vec<L>) -> Self {
        AliasEntry::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<Label> for AliasEntry {
    fn from(label: Label) -> Self {
        AliasEntry::Single(label)
    }
}

/// Conversion from an event field into a dispatchable code.
///
/// Implemented for the integer, string and character types a raw event
/// usually carries, and for `Option` of those (`None` means "no code").
pub trait IntoCode {
    /// Read the field as a label.
    fn into_code(&self) -> Option<Label>;
}

macro_rules! into_code_int {
    ($($ty:ty),*) => {
        $(
            impl IntoCode for $ty {
                fn into_code(&self) -> Option<Label> {
                    Some(Label::from(*self))
                }
            }
        )*
    };
}

into_code_int!(i8, i16, i32, i64, u8, u16, u32);

/// Codes past `i64::MAX` keep their decimal text as the key.
fn wide_code<T>(code: T) -> Label
where
    T: Copy + fmt::Display,
    i64: TryFrom<T>,
{
    i64::try_from(code).map_or_else(|_| Label::Name(code.to_string()), Label::Code)
}

impl IntoCode for u64 {
    fn into_code(&self) -> Option<Label> {
        Some(wide_code(*self))
    }
}

impl IntoCode for usize {
    fn into_code(&self) -> Option<Label> {
        Some(wide_code(*self))
    }
}

impl IntoCode for char {
    fn into_code(&self) -> Option<Label> {
        Some(Label::from(*self))
    }
}

impl IntoCode for str {
    fn into_code(&self) -> Option<Label> {
        Some(Label::from(self))
    }
}

impl IntoCode for String {
    fn into_code(&self) -> Option<Label> {
        Some(Label::from(self))
    }
}

impl IntoCode for &str {
    fn into_code(&self) -> Option<Label> {
        Some(Label::from(*self))
    }
}

impl IntoCode for Label {
    fn into_code(&self) -> Option<Label> {
        Some(self.clone())
    }
}

impl<T: IntoCode> IntoCode for Option<T> {
    fn into_code(&self) -> Option<Label> {
        self.as_ref().and_then(IntoCode::into_code)
    }
}
