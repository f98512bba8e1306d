//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::find::{FieldKey, FindArgs};
use crate::commands::layout::LayoutArgs;

pub struct LayoutParams {
    pub schema_path: PathBuf,
    pub message: Option<String>,
    pub color: ColorChoice,
}

impl LayoutParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            message: m.get_one::<String>("message").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<LayoutParams> for LayoutArgs {
    fn from(p: LayoutParams) -> Self {
        Self {
            schema_path: p.schema_path,
            message: p.message,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FindParams {
    pub schema_path: PathBuf,
    pub message: String,
    pub key: FieldKey,
    pub color: ColorChoice,
}

impl FindParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            message: m.get_one::<String>("message").cloned().unwrap_or_default(),
            key: field_key(m),
            color: parse_color(m),
        }
    }
}

impl From<FindParams> for FindArgs {
    fn from(p: FindParams) -> Self {
        Self {
            schema_path: p.schema_path,
            message: p.message,
            key: p.key,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub schema_path: PathBuf,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            schema_path: p.schema_path,
        }
    }
}

fn schema_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("schema_path")
        .cloned()
        .unwrap_or_default()
}

/// `--number` or `--name`; the arg group makes them exclusive.
fn field_key(m: &ArgMatches) -> FieldKey {
    match m.get_one::<u32>("number") {
        Some(&number) => FieldKey::Number(number),
        None => FieldKey::Name(m.get_one::<String>("name").cloned().unwrap_or_default()),
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
