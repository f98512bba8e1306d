use std::path::PathBuf;

use pbstruct::{Colors, dump, load_schema};

use super::{CommandError, finish};

pub struct LayoutArgs {
    pub schema_path: PathBuf,
    pub message: Option<String>,
    pub color: bool,
}

pub fn run(args: LayoutArgs) {
    finish(execute(&args));
}

/// Dump the requested message, or every message separated by blank lines.
pub fn execute(args: &LayoutArgs) -> Result<String, CommandError> {
    let schema = load_schema(&args.schema_path)?;
    let colors = Colors::new(args.color);

    let definitions = match &args.message {
        Some(name) => vec![schema.definition(name)?],
        None => schema.definitions()?,
    };
    tracing::debug!(count = definitions.len(), "dumping layouts");

    let dumps: Vec<String> = definitions.iter().map(|def| dump(def, colors)).collect();
    Ok(dumps.join("\n"))
}
