//! User-facing text produced by the form.

use maskcheck_core::types::{Role, ValidatedLink};

/// Title of the form.
pub const FORM_TITLE: &str = "Validate Masked Element";

/// Toast shown when submit is triggered without both files.
pub const MISSING_SELECTION: &str = "Please select both element and certificate.";

/// Toast shown when an upload to the pinning service fails.
pub const UPLOAD_FAILED: &str = "Error uploading files to IPFS.";

/// Banner text after a successful validation.
pub fn validation_success(role: Role, validated: &ValidatedLink) -> String {
    format!(
        "Validation successful for {}! Link: {}, Username: {}",
        role, validated.link, validated.username
    )
}

/// Toast text after a successful validation.
pub fn validated_toast(role: Role) -> String {
    format!("{} validated successfully!", role)
}

/// Banner and toast text after a failed validation.
pub fn validation_error(role: Role) -> String {
    format!("Error validating {}.", role)
}

/// Heading shown above a role's preview.
pub fn preview_heading(role: Role) -> &'static str {
    match role {
        Role::Element => "Preview:",
        Role::Certificate => "Certificate Preview:",
    }
}
