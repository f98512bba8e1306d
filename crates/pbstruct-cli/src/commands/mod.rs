pub mod check;
pub mod find;
pub mod layout;


use pbstruct::{DefinitionError, SchemaError};

/// Failure of a CLI command, reported as `error: ...` with exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("field not found: {field} in message `{message}`")]
    FieldNotFound { message: String, field: String },
    #[error("message `{message}`: {source}")]
    Layout {
        message: String,
        #[source]
        source: DefinitionError,
    },
}

/// Print the command output, or report the error and exit.
fn finish(result: Result<String, CommandError>) {
    match result {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
pub(crate) fn write_schema(json: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}
