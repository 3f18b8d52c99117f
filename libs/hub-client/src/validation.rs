//! Input validation utilities
//!
//! Everything here runs before any network call; a rejection never
//! touches the backend.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Maximum accepted image size (5 MiB)
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Accepted image file extensions
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate a national identity-document number
pub fn validate_cc(cc: &str) -> Result<(), String> {
    if cc.trim().is_empty() {
        return Err("Identity document number is required".to_string());
    }

    Ok(())
}

/// Validate a display name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().chars().count() < 2 {
        return Err("Name must be at least 2 characters long".to_string());
    }

    Ok(())
}

/// Password strength rules, in the order they are shown to the user
pub fn password_checklist(password: &str) -> [(&'static str, bool); 4] {
    [
        ("At least 8 characters", password.len() >= 8),
        (
            "One uppercase letter",
            password.chars().any(|c| c.is_ascii_uppercase()),
        ),
        (
            "One lowercase letter",
            password.chars().any(|c| c.is_ascii_lowercase()),
        ),
        ("One digit", password.chars().any(|c| c.is_ascii_digit())),
    ]
}

/// Validate a new password against all strength rules
pub fn validate_new_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    for (rule, passed) in password_checklist(password) {
        if !passed {
            return Err(format!("Password does not meet requirement: {rule}"));
        }
    }

    Ok(())
}

/// Validate a medical image file before upload
///
/// Checks extension, existence and the 5 MiB size limit.
pub fn validate_image_file(path: &Path) -> Result<(), String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(format!(
            "Unsupported image format '{}'; accepted formats are JPEG and PNG",
            path.display()
        ));
    }

    let metadata = std::fs::metadata(path)
        .map_err(|err| format!("Cannot read '{}': {}", path.display(), err))?;

    if !metadata.is_file() {
        return Err(format!("'{}' is not a regular file", path.display()));
    }

    if metadata.len() > MAX_IMAGE_BYTES {
        return Err(format!(
            "Image exceeds the 5MB limit ({} bytes)",
            metadata.len()
        ));
    }

    Ok(())
}

/// Validate a training dataset file before upload
pub fn validate_training_file(path: &Path) -> Result<(), String> {
    let metadata = std::fs::metadata(path)
        .map_err(|err| format!("Cannot read '{}': {}", path.display(), err))?;

    if !metadata.is_file() {
        return Err(format!("'{}' is not a regular file", path.display()));
    }

    if metadata.len() == 0 {
        return Err(format!("'{}' is empty", path.display()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn email_validation() {
        assert!(validate_email("ana@hospital.example").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn password_rules_each_fail_individually() {
        assert!(validate_new_password("Abcdef12").is_ok());
        // Too short
        assert!(validate_new_password("Abc12").is_err());
        // Missing uppercase
        assert!(validate_new_password("abcdefg1").is_err());
        // Missing lowercase
        assert!(validate_new_password("ABCDEFG1").is_err());
        // Missing digit
        assert!(validate_new_password("Abcdefgh").is_err());
        assert!(validate_new_password("").is_err());
    }

    #[test]
    fn checklist_reports_per_rule_state() {
        let checklist = password_checklist("abc");
        assert_eq!(checklist[0], ("At least 8 characters", false));
        assert_eq!(checklist[2], ("One lowercase letter", true));
    }

    #[test]
    fn image_file_must_have_accepted_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.gif");
        std::fs::write(&path, b"gif").unwrap();
        assert!(validate_image_file(&path).is_err());

        let path = dir.path().join("scan.PNG");
        std::fs::write(&path, b"png").unwrap();
        assert!(validate_image_file(&path).is_ok());
    }

    #[test]
    fn image_file_must_stay_under_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.jpg");
        let mut file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_IMAGE_BYTES + 1).unwrap();
        file.flush().unwrap();
        drop(file);

        let err = validate_image_file(&path).unwrap_err();
        assert!(err.contains("5MB"), "unexpected message: {err}");
    }

    #[test]
    fn missing_image_file_is_rejected() {
        assert!(validate_image_file(Path::new("/nonexistent/scan.jpg")).is_err());
    }

    #[test]
    fn training_file_must_be_non_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        std::fs::write(&path, b"").unwrap();
        assert!(validate_training_file(&path).is_err());

        std::fs::write(&path, b"a,b,c").unwrap();
        assert!(validate_training_file(&path).is_ok());
    }
}
