use crate::access::*;
use crate::instance::InstanceBuf;
use crate::presence::is_set;
use crate::test_utils::every_type;
use crate::views::{Array, PbString};

#[test]
fn scalar_round_trip_at_boundaries() {
    let def = every_type();
    let mut buf = InstanceBuf::for_definition(&def);
    let s = buf.as_mut_ptr();
    let field = |name: &str| def.find_field_by_name(name).unwrap();

    unsafe {
        for v in [i32::MIN, -1, 0, i32::MAX] {
            set_int32(s, field("f_int32"), v);
            assert_eq!(get_int32(s, field("f_int32")), v);
        }
        for v in [i64::MIN, i64::MAX] {
            set_int64(s, field("f_int64"), v);
            assert_eq!(get_int64(s, field("f_int64")), v);
        }
        for v in [0, u32::MAX] {
            set_uint32(s, field("f_uint32"), v);
            assert_eq!(get_uint32(s, field("f_uint32")), v);
        }
        for v in [0, u64::MAX] {
            set_uint64(s, field("f_uint64"), v);
            assert_eq!(get_uint64(s, field("f_uint64")), v);
        }
        for v in [true, false] {
            set_bool(s, field("f_bool"), v);
            assert_eq!(get_bool(s, field("f_bool")), v);
        }
    }
}

#[test]
fn floats_keep_exact_bits() {
    let def = every_type();
    let mut buf = InstanceBuf::for_definition(&def);
    let s = buf.as_mut_ptr();
    let double = def.find_field_by_name("f_double").unwrap();
    let float = def.find_field_by_name("f_float").unwrap();

    unsafe {
        for v in [-0.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN, f64::MIN_POSITIVE] {
            set_double(s, double, v);
            assert_eq!(get_double(s, double).to_bits(), v.to_bits());
        }
        for v in [-0.0, f32::INFINITY, f32::NAN, f32::MAX] {
            set_float(s, float, v);
            assert_eq!(get_float(s, float).to_bits(), v.to_bits());
        }
    }
}

#[test]
fn values_land_at_their_offsets() {
    let def = every_type();
    let mut buf = InstanceBuf::for_definition(&def);
    let int32 = def.find_field_by_name("f_int32").unwrap();

    unsafe { set_int32(buf.as_mut_ptr(), int32, 0x0102_0304) };

    let at = int32.byte_offset as usize;
    assert_eq!(buf[at..at + 4], 0x0102_0304i32.to_ne_bytes());
    let untouched = buf
        .iter()
        .enumerate()
        .filter(|(i, _)| !(at..at + 4).contains(i))
        .all(|(_, &b)| b == 0);
    assert!(untouched);
}

#[test]
fn writes_do_not_disturb_other_fields() {
    let def = every_type();
    let mut buf = InstanceBuf::for_definition(&def);
    let s = buf.as_mut_ptr();
    let field = |name: &str| def.find_field_by_name(name).unwrap();

    unsafe {
        set_bool(s, field("f_bool"), true);
        set_uint32(s, field("f_uint32"), u32::MAX);
        set_int32(s, field("f_int32"), -7);
        set_float(s, field("f_float"), 1.5);

        assert!(get_bool(s, field("f_bool")));
        assert_eq!(get_uint32(s, field("f_uint32")), u32::MAX);
        assert_eq!(get_int32(s, field("f_int32")), -7);
        assert_eq!(get_float(s, field("f_float")), 1.5);
    }
}

#[test]
fn setters_leave_presence_alone() {
    let def = every_type();
    let mut buf = InstanceBuf::for_definition(&def);
    let s = buf.as_mut_ptr();
    let field = |name: &str| def.find_field_by_name(name).unwrap();

    unsafe {
        set_double(s, field("f_double"), 1.0);
        set_float(s, field("f_float"), 1.0);
        set_int32(s, field("f_int32"), 1);
        set_int64(s, field("f_int64"), 1);
        set_uint32(s, field("f_uint32"), 1);
        set_uint64(s, field("f_uint64"), 1);
        set_bool(s, field("f_bool"), true);
        assert!(def.fields().iter().all(|f| !is_set(s, f)));
    }
    assert_eq!(buf[..def.set_flags_bytes()], [0, 0]);
}

#[test]
fn string_and_bytes_store_pointers() {
    let def = every_type();
    let mut buf = InstanceBuf::for_definition(&def);
    let s = buf.as_mut_ptr();
    let string = def.find_field_by_name("f_string").unwrap();
    let bytes = def.find_field_by_name("f_bytes").unwrap();

    let mut text = *b"hello";
    let mut hello = PbString::from_slice(&mut text);
    let mut raw = [0u8, 255, 7];
    let mut blob = PbString::from_slice(&mut raw);

    unsafe {
        set_string(s, string, &mut hello);
        set_bytes(s, bytes, &mut blob);

        let read = get_string(s, string);
        assert_eq!(read, &mut hello as *mut PbString);
        assert_eq!((*read).as_bytes(), b"hello");
        assert_eq!((*get_bytes(s, bytes)).as_bytes(), [0, 255, 7]);
        assert_eq!(*string_ptr(s, string), read);
    }
}

#[test]
fn substruct_points_at_nested_instance() {
    let def = every_type();
    let mut outer = InstanceBuf::for_definition(&def);
    let mut inner = InstanceBuf::for_definition(&def);
    let message = def.find_field_by_name("f_message").unwrap();
    let int32 = def.find_field_by_name("f_int32").unwrap();

    unsafe {
        set_int32(inner.as_mut_ptr(), int32, 99);
        set_substruct(outer.as_mut_ptr(), message, inner.as_mut_ptr());

        let nested = get_substruct(outer.as_ptr(), message);
        assert_eq!(nested, inner.as_mut_ptr());
        assert_eq!(get_int32(nested, int32), 99);
    }
}

#[test]
fn repeated_field_stores_array_pointer() {
    let def = every_type();
    let mut buf = InstanceBuf::for_definition(&def);
    let doubles = def.find_field_by_name("f_doubles").unwrap();

    let mut storage = [1.0f64, 2.5, -3.0];
    let mut array = Array::from_slice(&mut storage);

    unsafe {
        set_array(buf.as_mut_ptr(), doubles, &mut array);
        let arr = &mut *get_array(buf.as_ptr(), doubles);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get_double(1), 2.5);

        arr.set_double(2, 4.0);
        assert_eq!(*arr.double_ptr(2), 4.0);
    }
    assert_eq!(storage, [1.0, 2.5, 4.0]);
}

#[test]
fn generic_and_named_accessors_agree() {
    let def = every_type();
    let mut buf = InstanceBuf::for_definition(&def);
    let s = buf.as_mut_ptr();
    let uint64 = def.find_field_by_name("f_uint64").unwrap();

    unsafe {
        set::<u64>(s, uint64, 0xDEAD_BEEF_0000_0001);
        assert_eq!(get_uint64(s, uint64), 0xDEAD_BEEF_0000_0001);
        assert_eq!(field_ptr::<u64>(s, uint64), uint64_ptr(s, uint64));
    }
}
