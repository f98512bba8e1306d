//! Command builders for the CLI.

use clap::{ArgGroup, Command};

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("pbstruct")
        .about("Inspect in-memory struct layouts computed from message schemas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(layout_command())
        .subcommand(find_command())
        .subcommand(check_command())
}

/// Print the computed layout of one or all messages.
pub fn layout_command() -> Command {
    Command::new("layout")
        .about("Show struct layouts")
        .after_help(
            r#"EXAMPLES:
  pbstruct layout schema.json              # every message
  pbstruct layout schema.json -m Person    # one message"#,
        )
        .arg(schema_path_arg())
        .arg(message_arg())
        .arg(color_arg())
}

/// Look up one field descriptor.
pub fn find_command() -> Command {
    Command::new("find")
        .about("Show one field descriptor")
        .after_help(
            r#"EXAMPLES:
  pbstruct find schema.json -m Person --name email
  pbstruct find schema.json -m Person --number 3"#,
        )
        .arg(schema_path_arg())
        .arg(message_arg().required(true))
        .arg(field_name_arg())
        .arg(field_number_arg())
        .group(
            ArgGroup::new("field")
                .args(["name", "number"])
                .required(true),
        )
        .arg(color_arg())
}

/// Validate every message layout.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Lay out every message and verify the result")
        .arg(schema_path_arg())
}
