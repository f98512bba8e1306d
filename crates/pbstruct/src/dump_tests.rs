//! Tests for layout dumps.

use crate::colors::Colors;
use crate::definition::{Label, LayoutBuilder};
use crate::dump::{dump, dump_field};
use crate::test_utils::person;
use crate::value_type::ValueType;

#[test]
#[cfg(target_pointer_width = "64")]
fn dump_person() {
    let res = dump(&person(), Colors::OFF);

    insta::assert_snapshot!(res, @r"
    [struct Person]
    size = 48
    flags_bytes = 1
    required = 2
    fields = 6

    [fields]
    #1  id      int32   required  @40  bit 0 = [0] & 0x01
    #2  name    string  required  @8   bit 1 = [0] & 0x02
    #3  email   string  optional  @16  bit 2 = [0] & 0x04
    #4  scores  int32   repeated  @24  bit 3 = [0] & 0x08
    #5  ratio   double  optional  @32  bit 4 = [0] & 0x10
    #6  active  bool    optional  @44  bit 5 = [0] & 0x20
    ");
}

#[test]
fn dump_spilled_presence_bits() {
    let mut builder = LayoutBuilder::new("Flags");
    for i in 0..10 {
        builder.push_field(format!("f{i}"), i + 1, ValueType::Bool, Label::Optional);
    }
    let res = dump(&builder.build().unwrap(), Colors::OFF);

    insta::assert_snapshot!(res, @r"
    [struct Flags]
    size = 12
    flags_bytes = 2
    required = 0
    fields = 10

    [fields]
    #1   f0  bool  optional  @2   bit 0 = [0] & 0x01
    #2   f1  bool  optional  @3   bit 1 = [0] & 0x02
    #3   f2  bool  optional  @4   bit 2 = [0] & 0x04
    #4   f3  bool  optional  @5   bit 3 = [0] & 0x08
    #5   f4  bool  optional  @6   bit 4 = [0] & 0x10
    #6   f5  bool  optional  @7   bit 5 = [0] & 0x20
    #7   f6  bool  optional  @8   bit 6 = [0] & 0x40
    #8   f7  bool  optional  @9   bit 7 = [0] & 0x80
    #9   f8  bool  optional  @10  bit 8 = [1] & 0x01
    #10  f9  bool  optional  @11  bit 9 = [1] & 0x02
    ");
}

#[test]
fn dump_empty_struct() {
    let def = LayoutBuilder::new("Empty").build().unwrap();

    insta::assert_snapshot!(dump(&def, Colors::OFF), @r"
    [struct Empty]
    size = 0
    flags_bytes = 0
    required = 0
    fields = 0

    [fields]
    ");
}

#[test]
fn dump_with_colors() {
    let res = dump(&person(), Colors::ON);
    assert!(res.starts_with("\x1b[34m[struct Person]\x1b[0m\n"));
    assert!(res.contains("\x1b[33mrequired\x1b[0m"));
    assert!(!dump(&person(), Colors::OFF).contains('\x1b'));
}

#[test]
fn colors_from_flag() {
    assert_eq!(Colors::new(true), Colors::ON);
    assert_eq!(Colors::new(false), Colors::OFF);
    assert_eq!(Colors::default(), Colors::OFF);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn dump_single_field() {
    let def = person();
    let scores = def.find_field_by_number(4).unwrap();

    insta::assert_snapshot!(dump_field(&def, scores, Colors::OFF), @r"
    [field Person.scores]
    number = 4
    type = int32
    label = repeated
    byte_offset = 24
    storage_size = 8
    isset_byte_offset = 0
    isset_byte_mask = 0x08
    presence_bit = 3
    ");
}
