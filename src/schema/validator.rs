use crate::models::ValidationError;
use crate::schema::{ResolvedSchema, Schema};
use crate::sheet::SheetTable;

/// Header comparison used everywhere: surrounding blanks and ASCII case are ignored.
pub fn header_matches(actual: &str, expected: &str) -> bool {
    actual.trim().eq_ignore_ascii_case(expected.trim())
}

/// Names from `required` that do not appear in `headers`, in `required` order.
pub fn missing_columns(headers: &[String], required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|name| !headers.iter().any(|h| header_matches(h, name)))
        .map(|name| name.to_string())
        .collect()
}

/// Check `table` against `schema` and resolve its column positions.
pub fn validate(table: &SheetTable, schema: &Schema) -> Result<ResolvedSchema, ValidationError> {
    let missing = missing_columns(&table.headers, &schema.required_headers());
    if !missing.is_empty() {
        return Err(ValidationError {
            file_name: table.file_name.clone(),
            missing_columns: missing.into_iter().collect(),
        });
    }
    Ok(schema.locate(&table.headers))
}
