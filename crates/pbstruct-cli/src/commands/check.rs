use std::path::PathBuf;

use pbstruct::load_schema;

use super::{CommandError, finish};

pub struct CheckArgs {
    pub schema_path: PathBuf,
}

pub fn run(args: CheckArgs) {
    finish(execute(&args));
}

/// Lay out every message and verify each layout.
pub fn execute(args: &CheckArgs) -> Result<String, CommandError> {
    let schema = load_schema(&args.schema_path)?;

    let definitions = schema.definitions()?;
    for def in &definitions {
        def.check_layout().map_err(|source| CommandError::Layout {
            message: def.name().to_string(),
            source,
        })?;
        tracing::debug!(message = def.name(), size = def.size(), "layout ok");
    }

    Ok(format!("ok ({} messages)\n", definitions.len()))
}
