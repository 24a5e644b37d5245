//! Input validation for the admin editor and the contact form.
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("name is required")]
    MissingName,
    #[error("company is required")]
    MissingCompany,
    #[error("email is required")]
    MissingEmail,
    #[error("message is required")]
    MissingMessage,
}

/// Parse the operator's editor text.
///
/// Only syntax is checked. The parsed value is what gets saved, incomplete or
/// not; the read path is responsible for filling gaps.
pub fn parse_editor_text(text: &str) -> Result<Value, ValidationError> {
    Ok(serde_json::from_str(text)?)
}

/// Pretty-print a document for the editor, four-space indented.
pub fn pretty_print(value: &Value) -> String {
    use serde::Serialize;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if value.serialize(&mut ser).is_err() {
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}

/// Validate that every contact form field carries text.
pub fn validate_lead_fields(
    name: &str,
    company: &str,
    email: &str,
    message: &str,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if company.trim().is_empty() {
        return Err(ValidationError::MissingCompany);
    }
    if email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if message.trim().is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn incomplete_document_parses_verbatim() {
        let value = parse_editor_text(r#"{ "hero": { "badge": "Only" } }"#).unwrap();
        assert_eq!(value, json!({ "hero": { "badge": "Only" } }));
    }

    #[test]
    fn malformed_text_is_rejected() {
        let err = parse_editor_text("{ \"hero\": ").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidJson(_)));
    }

    #[test]
    fn pretty_print_uses_four_spaces() {
        let text = pretty_print(&json!({ "contact_phone": "1" }));
        assert_eq!(text, "{\n    \"contact_phone\": \"1\"\n}");
        assert_eq!(parse_editor_text(&text).unwrap(), json!({ "contact_phone": "1" }));
    }

    #[test]
    fn lead_fields_must_be_non_blank() {
        assert!(validate_lead_fields("Ada", "Acme", "ada@acme.io", "Hi").is_ok());
        assert!(matches!(
            validate_lead_fields(" ", "Acme", "ada@acme.io", "Hi"),
            Err(ValidationError::MissingName)
        ));
        assert!(matches!(
            validate_lead_fields("Ada", "Acme", "ada@acme.io", ""),
            Err(ValidationError::MissingMessage)
        ));
    }
}
