use std::fmt;
use std::path::PathBuf;

use pbstruct::{Colors, dump_field, load_schema};

use super::{CommandError, finish};

/// How the field is identified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKey {
    Name(String),
    Number(u32),
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Name(name) => write!(f, "`{}`", name),
            FieldKey::Number(number) => write!(f, "#{}", number),
        }
    }
}

pub struct FindArgs {
    pub schema_path: PathBuf,
    pub message: String,
    pub key: FieldKey,
    pub color: bool,
}

pub fn run(args: FindArgs) {
    finish(execute(&args));
}

pub fn execute(args: &FindArgs) -> Result<String, CommandError> {
    let schema = load_schema(&args.schema_path)?;
    let def = schema.definition(&args.message)?;

    let field = match &args.key {
        FieldKey::Name(name) => def.find_field_by_name(name),
        FieldKey::Number(number) => def.find_field_by_number(*number),
    };
    let Some(field) = field else {
        return Err(CommandError::FieldNotFound {
            message: args.message.clone(),
            field: args.key.to_string(),
        });
    };

    Ok(dump_field(&def, field, Colors::new(args.color)))
}
