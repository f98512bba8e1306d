//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, value_parser};

/// Schema file (positional).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("SCHEMA")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("JSON schema file")
}

/// Message name (-m/--message).
pub fn message_arg() -> Arg {
    Arg::new("message")
        .short('m')
        .long("message")
        .value_name("MESSAGE")
        .help("Message to inspect")
}

/// Field name lookup (--name).
pub fn field_name_arg() -> Arg {
    Arg::new("name")
        .long("name")
        .value_name("NAME")
        .help("Find the field by name")
}

/// Field number lookup (--number).
pub fn field_number_arg() -> Arg {
    Arg::new("number")
        .long("number")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Find the field by number")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
