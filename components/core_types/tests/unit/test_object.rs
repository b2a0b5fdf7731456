//! Unit tests for ObjString and the small-string optimization

use core_types::{Obj, ObjString, Value, SSO_THRESHOLD};

#[test]
fn test_threshold_is_23_bytes() {
    assert_eq!(SSO_THRESHOLD, 23);
}

#[test]
fn test_representation_selected_by_length() {
    for len in 0..=40 {
        let text = "s".repeat(len);
        let s = ObjString::new(&text);
        assert_eq!(s.is_inline(), len <= SSO_THRESHOLD, "length {}", len);
        assert_eq!(s.as_str(), text);
    }
}

#[test]
fn test_concat_two_inline_into_heap() {
    let left = ObjString::new("0123456789ab");
    let right = ObjString::new("cdefghijklmn");
    assert!(left.is_inline() && right.is_inline());

    let joined = left.concat(&right);
    assert_eq!(joined.as_str(), "0123456789abcdefghijklmn");
    assert!(!joined.is_inline());
}

#[test]
fn test_concat_with_empty_keeps_repr() {
    let empty = ObjString::new("");
    let short = ObjString::new("short");
    assert!(empty.concat(&short).is_inline());

    let long = ObjString::new("this is long enough to live on the heap");
    assert!(!long.concat(&empty).is_inline());
}

#[test]
fn test_obj_display_and_type_name() {
    let obj = Obj::String(ObjString::new("text"));
    assert_eq!(obj.to_string(), "text");
    assert_eq!(obj.type_name(), "string");
    assert_eq!(Value::string("text").type_name(), "string");
}

#[test]
fn test_moved_string_keeps_contents() {
    let original = ObjString::new("moved onto the heap and back out again");
    let moved = original;
    assert_eq!(moved.as_str(), "moved onto the heap and back out again");
}
