//! Heap objects.
//!
//! Only strings exist today. [`ObjString`] keeps short strings inline and
//! moves longer ones to a separate heap buffer; which one is used depends
//! solely on the length at construction.

use std::fmt;

use arrayvec::ArrayString;

/// Longest string stored inline, in bytes.
pub const SSO_THRESHOLD: usize = 23;

/// A heap-allocated object referenced by [`crate::Value::Object`].
#[derive(Debug, Clone, PartialEq)]
pub enum Obj {
    /// Immutable string
    String(ObjString),
}

impl Obj {
    /// Type name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Obj::String(_) => "string",
        }
    }
}

impl fmt::Display for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Obj::String(s) => f.write_str(s.as_str()),
        }
    }
}

#[derive(Clone)]
enum Repr {
    Inline(ArrayString<SSO_THRESHOLD>),
    Heap(Box<str>),
}

/// An immutable string with small-string optimization.
///
/// # Examples
///
/// ```
/// use core_types::ObjString;
///
/// let short = ObjString::new("abc");
/// assert!(short.is_inline());
///
/// let long = ObjString::new("a string well past the inline limit");
/// assert!(!long.is_inline());
///
/// assert_eq!(short.concat(&long).len(), 3 + long.len());
/// ```
#[derive(Clone)]
pub struct ObjString {
    repr: Repr,
}

impl ObjString {
    /// Creates a string, storing it inline when it fits.
    pub fn new(text: &str) -> Self {
        let repr = match ArrayString::from(text) {
            Ok(inline) => Repr::Inline(inline),
            Err(_) => Repr::Heap(Box::from(text)),
        };
        Self { repr }
    }

    /// Concatenates two strings into a new object.
    ///
    /// The representation is picked from the length of the result.
    pub fn concat(&self, other: &ObjString) -> ObjString {
        let len = self.len() + other.len();
        if len <= SSO_THRESHOLD {
            let mut inline = ArrayString::new();
            inline.push_str(self.as_str());
            inline.push_str(other.as_str());
            return Self {
                repr: Repr::Inline(inline),
            };
        }

        let mut joined = String::with_capacity(len);
        joined.push_str(self.as_str());
        joined.push_str(other.as_str());
        Self {
            repr: Repr::Heap(joined.into_boxed_str()),
        }
    }

    /// Read-only view of the contents
    pub fn as_str(&self) -> &str {
        match &self.repr {
            Repr::Inline(s) => s.as_str(),
            Repr::Heap(s) => s,
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Returns true for the empty string
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the contents live inside the object itself
    pub fn is_inline(&self) -> bool {
        matches!(self.repr, Repr::Inline(_))
    }
}

impl PartialEq for ObjString {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().as_bytes() == other.as_str().as_bytes()
    }
}

impl Eq for ObjString {}

impl fmt::Debug for ObjString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for ObjString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
