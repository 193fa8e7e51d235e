//! Request body parsing for `POST /memos`.
//!
//! The body is parsed as untyped JSON first so every failing field can be
//! reported with its location, rather than stopping at the first serde error.

use memo_types::{FieldError, FieldErrorKind, Memo};
use serde_json::{Map, Value};

/// Parse a raw request body into a `Memo`, collecting every field that fails.
pub fn parse_memo(body: &[u8]) -> Result<Memo, Vec<FieldError>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(vec![FieldError::new(&["body"], FieldErrorKind::Missing)]);
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        vec![FieldError::new(&["body"], FieldErrorKind::JsonInvalid).with_detail(e)]
    })?;

    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(vec![
                FieldError::new(&["body"], FieldErrorKind::ModelType).with_input(other),
            ]);
        }
    };

    match (string_field(&fields, "id"), string_field(&fields, "content")) {
        (Ok(id), Ok(content)) => Ok(Memo { id, content }),
        (id, content) => Err(id.err().into_iter().chain(content.err()).collect()),
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Result<String, FieldError> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(
            FieldError::new(&["body", name], FieldErrorKind::StringType).with_input(other.clone()),
        ),
        None => Err(FieldError::new(&["body", name], FieldErrorKind::Missing)),
    }
}
