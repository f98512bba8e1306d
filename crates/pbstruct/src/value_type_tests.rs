use crate::value_type::ValueType;

#[test]
fn from_u8_valid() {
    assert_eq!(ValueType::from_u8(0), Some(ValueType::Double));
    assert_eq!(ValueType::from_u8(1), Some(ValueType::Float));
    assert_eq!(ValueType::from_u8(2), Some(ValueType::Int32));
    assert_eq!(ValueType::from_u8(3), Some(ValueType::Int64));
    assert_eq!(ValueType::from_u8(4), Some(ValueType::UInt32));
    assert_eq!(ValueType::from_u8(5), Some(ValueType::UInt64));
    assert_eq!(ValueType::from_u8(6), Some(ValueType::Bool));
    assert_eq!(ValueType::from_u8(7), Some(ValueType::String));
    assert_eq!(ValueType::from_u8(8), Some(ValueType::Bytes));
    assert_eq!(ValueType::from_u8(9), Some(ValueType::Message));
}

#[test]
fn from_u8_invalid() {
    assert_eq!(ValueType::from_u8(10), None);
    assert_eq!(ValueType::from_u8(255), None);
}

#[test]
fn scalar_sizes_match_native_types() {
    assert_eq!(ValueType::Double.size(), 8);
    assert_eq!(ValueType::Float.size(), 4);
    assert_eq!(ValueType::Int32.size(), 4);
    assert_eq!(ValueType::Int64.size(), 8);
    assert_eq!(ValueType::UInt32.size(), 4);
    assert_eq!(ValueType::UInt64.size(), 8);
    assert_eq!(ValueType::Bool.size(), 1);
}

#[test]
fn reference_kinds_are_pointer_sized() {
    let ptr = std::mem::size_of::<usize>();
    assert_eq!(ValueType::String.size(), ptr);
    assert_eq!(ValueType::Bytes.size(), ptr);
    assert_eq!(ValueType::Message.size(), ptr);
    assert_eq!(ValueType::Message.align(), std::mem::align_of::<usize>());
}

#[test]
fn is_reference() {
    assert!(ValueType::String.is_reference());
    assert!(ValueType::Bytes.is_reference());
    assert!(ValueType::Message.is_reference());
    assert!(!ValueType::Bool.is_reference());
    assert!(ValueType::Double.is_scalar());
    assert!(!ValueType::Message.is_scalar());
}

#[test]
fn names_match_schema_spelling() {
    assert_eq!(ValueType::UInt32.name(), "uint32");
    assert_eq!(ValueType::Message.to_string(), "message");

    let parsed: ValueType = serde_json::from_str("\"uint64\"").unwrap();
    assert_eq!(parsed, ValueType::UInt64);
}
