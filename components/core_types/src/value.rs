//! Runtime value representation.
//!
//! This module provides the core `Value` enum shared by the compiler (which
//! stores literals in the constant pool) and the VM (which computes with
//! them on its operand stack).

use std::fmt;
use std::rc::Rc;

use crate::object::{Obj, ObjString};

/// Represents any runtime value.
///
/// Scalars are stored inline. Heap objects are referenced through an `Rc`,
/// so cloning a `Value` never copies string contents.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let nil = Value::Nil;
/// let number = Value::Number(42.0);
/// let text = Value::string("hello");
///
/// assert!(nil.is_falsey());
/// assert!(!number.is_falsey());
/// assert_eq!(text.to_string(), "hello");
/// ```
#[derive(Clone)]
pub enum Value {
    /// Boolean `true` or `false`
    Boolean(bool),
    /// The unit value `nil`
    Nil,
    /// IEEE 754 double-precision floating point
    Number(f64),
    /// Heap-allocated object
    Object(Rc<Obj>),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Nil => write!(f, "Nil"),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Object(obj) => f.debug_tuple("Object").field(obj).finish(),
        }
    }
}

/// Equality of two values.
///
/// Values with different tags are never equal. Numbers compare by IEEE
/// value (so `NaN != NaN`), strings by content.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Allocates a new string object and wraps it in a value.
    pub fn string(text: &str) -> Self {
        Value::from(ObjString::new(text))
    }

    /// Returns whether this value is falsey.
    ///
    /// Only `nil` and `false` are falsey. Every other value, including the
    /// number zero and the empty string, is truthy.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(Value::Nil.is_falsey());
    /// assert!(Value::Boolean(false).is_falsey());
    ///
    /// assert!(!Value::Number(0.0).is_falsey());
    /// assert!(!Value::string("").is_falsey());
    /// ```
    pub fn is_falsey(&self) -> bool {
        matches!(self, Value::Nil | Value::Boolean(false))
    }

    /// Returns true for booleans
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Returns true for `nil`
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns true for numbers
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true for heap objects of any kind
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true for string objects
    pub fn is_string(&self) -> bool {
        matches!(self, Value::Object(obj) if matches!(**obj, Obj::String(_)))
    }

    /// Reads the boolean payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a boolean. Callers check the tag first.
    #[track_caller]
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            other => panic!("value is not a boolean: {:?}", other),
        }
    }

    /// Reads the number payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a number. Callers check the tag first.
    #[track_caller]
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => panic!("value is not a number: {:?}", other),
        }
    }

    /// Reads the string payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a string object.
    #[track_caller]
    pub fn as_string(&self) -> &ObjString {
        match self {
            Value::Object(obj) => match &**obj {
                Obj::String(s) => s,
            },
            other => panic!("value is not a string: {:?}", other),
        }
    }

    /// Returns the type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Nil => "nil",
            Value::Number(_) => "number",
            Value::Object(obj) => obj.type_name(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<ObjString> for Value {
    fn from(s: ObjString) -> Self {
        Value::Object(Rc::new(Obj::String(s)))
    }
}

/// Formats a number the way the language prints it.
///
/// Integral values below 1e15 print without a fractional part; everything
/// else uses the shortest representation that round-trips. Non-finite
/// values print as `inf`, `-inf` and `nan`.
///
/// # Examples
///
/// ```
/// use core_types::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(-0.5), "-0.5");
/// assert_eq!(format_number(1.0 / 0.0), "inf");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "nan".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "inf".to_string()
        } else {
            "-inf".to_string()
        }
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n)
    } else {
        let mut buffer = ryu::Buffer::new();
        buffer.format_finite(n).to_string()
    }
}

/// Prints booleans as `true`/`false`, nil as `nil`, numbers via
/// [`format_number`] and strings as their raw characters.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Nil => write!(f, "nil"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Object(obj) => write!(f, "{}", obj),
        }
    }
}
