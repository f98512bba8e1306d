//! Human-readable layout report for one struct definition.
//!
//! ```text
//! [struct Person]
//! size = 48
//! flags_bytes = 1
//! required = 2
//! fields = 6
//!
//! [fields]
//! #1  id      int32   required  @40  bit 0 = [0] & 0x01
//! ```
//!
//! One row per field in field number order: number, name, value type,
//! label, value offset, then the presence bit and its byte/mask location.

use crate::colors::Colors;
use crate::definition::{FieldDescriptor, StructDefinition};

/// Render the layout of `def`.
pub fn dump(def: &StructDefinition, colors: Colors) -> String {
    let c = &colors;
    let mut out = String::new();

    out.push_str(&format!("{}[struct {}]{}\n", c.blue, def.name(), c.reset));
    out.push_str(&format!("size = {}\n", def.size()));
    out.push_str(&format!("flags_bytes = {}\n", def.set_flags_bytes()));
    out.push_str(&format!("required = {}\n", def.num_required_fields()));
    out.push_str(&format!("fields = {}\n", def.num_fields()));
    out.push('\n');
    out.push_str(&format!("{}[fields]{}\n", c.blue, c.reset));

    let widths = Widths::new(def.fields());
    for field in def.fields() {
        out.push_str(&format_field(field, &widths, c));
        out.push('\n');
    }

    out
}

/// Render one field descriptor of `def` as a key/value block.
pub fn dump_field(def: &StructDefinition, field: &FieldDescriptor, colors: Colors) -> String {
    let c = &colors;
    let mut out = String::new();

    out.push_str(&format!(
        "{}[field {}.{}]{}\n",
        c.blue,
        def.name(),
        field.name,
        c.reset
    ));
    out.push_str(&format!("number = {}\n", field.number));
    out.push_str(&format!("type = {}\n", field.value_type));
    out.push_str(&format!("label = {}\n", field.label.name()));
    out.push_str(&format!("byte_offset = {}{}{}\n", c.green, field.byte_offset, c.reset));
    out.push_str(&format!("storage_size = {}\n", field.storage_size()));
    out.push_str(&format!(
        "{}isset_byte_offset = {}\nisset_byte_mask = 0x{:02x}\npresence_bit = {}{}\n",
        c.dim,
        field.isset_byte_offset,
        field.isset_byte_mask,
        field.presence_bit(),
        c.reset
    ));

    out
}

/// Column widths, so rows line up.
struct Widths {
    number: usize,
    name: usize,
    value_type: usize,
    offset: usize,
    bit: usize,
}

impl Widths {
    fn new(fields: &[FieldDescriptor]) -> Self {
        let max = |f: fn(&FieldDescriptor) -> usize| fields.iter().map(f).max().unwrap_or(0);
        Self {
            number: max(|f| digits(f.number as usize)),
            name: max(|f| f.name.len()),
            value_type: max(|f| f.value_type.name().len()),
            offset: max(|f| f.byte_offset.to_string().len()),
            bit: max(|f| digits(f.presence_bit() as usize)),
        }
    }
}

fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

fn format_field(field: &FieldDescriptor, w: &Widths, c: &Colors) -> String {
    let label = if field.is_required() {
        format!("{}{}{}", c.yellow, field.label.name(), c.reset)
    } else {
        field.label.name().to_string()
    };

    format!(
        "#{number:<nw$}  {blue}{name:<namew$}{reset}  {ty:<tw$}  {label}  {green}@{offset:<ow$}{reset}  {dim}bit {bit:<bw$} = [{byte}] & 0x{mask:02x}{reset}",
        number = field.number,
        name = field.name,
        ty = field.value_type.name(),
        offset = field.byte_offset,
        bit = field.presence_bit(),
        byte = field.isset_byte_offset,
        mask = field.isset_byte_mask,
        nw = w.number,
        namew = w.name,
        tw = w.value_type,
        ow = w.offset,
        bw = w.bit,
        blue = c.blue,
        green = c.green,
        dim = c.dim,
        reset = c.reset,
    )
}
