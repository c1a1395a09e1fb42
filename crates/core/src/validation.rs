//! Boundary validation for game form data.
//!
//! Pure functions, independent of the HTTP layer. Text fields must be
//! non-blank; URL fields must parse, use `http` or `https` and consist of
//! visible ASCII only, since they end up in a `Location` header. The category
//! is only required to be non-blank because the store does not enforce the
//! suggested set.

use validator::ValidateUrl;

use crate::error::CoreError;
use crate::game::{GameDraft, GameUpdate};

pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_IMAGE_URL: &str = "image_url";
pub const FIELD_DOWNLOAD_URL: &str = "download_url";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_FILE_SIZE: &str = "file_size";

/// Validate that a required text field is not empty or whitespace-only.
pub fn validate_required_text(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate that a URL field is non-empty, well-formed and `http(s)`.
pub fn validate_http_url(value: &str, field: &str) -> Result<(), CoreError> {
    validate_required_text(value, field)?;
    // The URL parser silently strips tabs and newlines, so check the raw value.
    if !value.chars().all(|c| c.is_ascii_graphic()) {
        return Err(CoreError::Validation(format!(
            "{field} must not contain whitespace, control or non-ASCII characters"
        )));
    }
    let trimmed = value.trim();
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(CoreError::Validation(format!(
            "{field} must start with http:// or https://, got: '{trimmed}'"
        )));
    }
    if !trimmed.validate_url() {
        return Err(CoreError::Validation(format!(
            "{field} is not a valid URL: '{trimmed}'"
        )));
    }
    Ok(())
}

/// Validate a complete create form.
pub fn validate_draft(draft: &GameDraft) -> Result<(), CoreError> {
    validate_required_text(&draft.title, FIELD_TITLE)?;
    validate_required_text(&draft.description, FIELD_DESCRIPTION)?;
    validate_http_url(&draft.image_url, FIELD_IMAGE_URL)?;
    validate_http_url(&draft.download_url, FIELD_DOWNLOAD_URL)?;
    validate_required_text(&draft.category, FIELD_CATEGORY)?;
    validate_required_text(&draft.file_size, FIELD_FILE_SIZE)?;
    Ok(())
}

/// Validate a partial update. Present fields follow the create rules; an
/// update with no fields at all is rejected.
pub fn validate_update(update: &GameUpdate) -> Result<(), CoreError> {
    if update.is_empty() {
        return Err(CoreError::Validation(
            "update must set at least one field".to_string(),
        ));
    }
    if let Some(title) = &update.title {
        validate_required_text(title, FIELD_TITLE)?;
    }
    if let Some(description) = &update.description {
        validate_required_text(description, FIELD_DESCRIPTION)?;
    }
    if let Some(image_url) = &update.image_url {
        validate_http_url(image_url, FIELD_IMAGE_URL)?;
    }
    if let Some(download_url) = &update.download_url {
        validate_http_url(download_url, FIELD_DOWNLOAD_URL)?;
    }
    if let Some(category) = &update.category {
        validate_required_text(category, FIELD_CATEGORY)?;
    }
    if let Some(file_size) = &update.file_size {
        validate_required_text(file_size, FIELD_FILE_SIZE)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> GameDraft {
        GameDraft {
            title: "Alpha Quest".to_string(),
            description: "An epic journey".to_string(),
            image_url: "https://example.com/alpha.jpg".to_string(),
            download_url: "https://cdn.example.com/download/alpha.zip".to_string(),
            category: "RPG".to_string(),
            file_size: "2.5 GB".to_string(),
        }
    }

    fn message(err: CoreError) -> String {
        match err {
            CoreError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_complete_draft() {
        assert!(validate_draft(&draft()).is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let mut d = draft();
        d.title = "   ".to_string();
        let msg = message(validate_draft(&d).unwrap_err());
        assert!(msg.contains("title"), "message should name the field: {msg}");
    }

    #[test]
    fn rejects_empty_file_size() {
        let mut d = draft();
        d.file_size = String::new();
        assert!(validate_draft(&d).is_err());
    }

    #[test]
    fn accepts_unsuggested_category() {
        let mut d = draft();
        d.category = "Homebrew".to_string();
        assert!(validate_draft(&d).is_ok());
    }

    #[test]
    fn rejects_non_http_scheme() {
        let mut d = draft();
        d.download_url = "ftp://example.com/alpha.zip".to_string();
        let msg = message(validate_draft(&d).unwrap_err());
        assert!(msg.contains("download_url"));
    }

    #[test]
    fn rejects_malformed_url() {
        assert!(validate_http_url("https://", FIELD_IMAGE_URL).is_err());
        assert!(validate_http_url("not a url", FIELD_IMAGE_URL).is_err());
    }

    #[test]
    fn rejects_embedded_newline_and_tab() {
        let err = validate_http_url("https://example.com/a\nb.zip", FIELD_DOWNLOAD_URL).unwrap_err();
        assert!(message(err).contains("download_url"));
        assert!(validate_http_url("https://example.com/a\tb.zip", FIELD_DOWNLOAD_URL).is_err());
        assert!(validate_http_url("https://example.com/a\rb.zip", FIELD_DOWNLOAD_URL).is_err());
    }

    #[test]
    fn rejects_spaces_and_control_characters() {
        assert!(validate_http_url(" https://example.com/a.zip", FIELD_DOWNLOAD_URL).is_err());
        assert!(validate_http_url("https://example.com/a b.zip", FIELD_DOWNLOAD_URL).is_err());
        assert!(validate_http_url("https://example.com/a\u{7f}.zip", FIELD_DOWNLOAD_URL).is_err());
        assert!(validate_http_url("https://example.com/caf\u{e9}.zip", FIELD_DOWNLOAD_URL).is_err());
    }

    #[test]
    fn newline_in_update_url_rejected() {
        let patch = GameUpdate {
            download_url: Some("https://example.com/a\nb.zip".to_string()),
            ..Default::default()
        };
        assert!(validate_update(&patch).is_err());
    }

    #[test]
    fn accepts_plain_http_url() {
        assert!(validate_http_url("http://localhost:8080/cover.png", FIELD_IMAGE_URL).is_ok());
    }

    #[test]
    fn empty_update_rejected() {
        assert!(validate_update(&GameUpdate::default()).is_err());
    }

    #[test]
    fn partial_update_checks_present_fields_only() {
        let ok = GameUpdate {
            file_size: Some("3 GB".to_string()),
            ..Default::default()
        };
        assert!(validate_update(&ok).is_ok());

        let bad = GameUpdate {
            image_url: Some("cover.png".to_string()),
            ..Default::default()
        };
        assert!(validate_update(&bad).is_err());
    }
}
