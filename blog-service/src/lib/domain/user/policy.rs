use serde::Serialize;

/// Field-level validation failure reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    /// Issue for a field below its minimum length.
    pub fn too_short(field: &str, min_chars: usize) -> Self {
        Self {
            field: field.to_string(),
            message: format!("String must contain at least {} character(s)", min_chars),
        }
    }

    /// Issue for a field missing from the request entirely.
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: "Required".to_string(),
        }
    }
}

/// Registration and login input policy.
///
/// Pure predicates over the raw credential strings; no storage access.
/// Length checks accumulate one issue per failing field so a response
/// can report all of them at once.
#[derive(Debug, Clone)]
pub struct CredentialPolicy {
    username_min_chars: usize,
    password_min_chars: usize,
    reserved_usernames: Vec<String>,
}

impl CredentialPolicy {
    /// Create a policy from configured limits.
    ///
    /// # Arguments
    /// * `username_min_chars` - Minimum username length
    /// * `password_min_chars` - Minimum password length
    /// * `reserved_usernames` - Names blocked from registration; matching
    ///   is case-insensitive
    pub fn new(
        username_min_chars: usize,
        password_min_chars: usize,
        reserved_usernames: Vec<String>,
    ) -> Self {
        let reserved_usernames = reserved_usernames
            .into_iter()
            .map(|name| name.to_lowercase())
            .collect();

        Self {
            username_min_chars,
            password_min_chars,
            reserved_usernames,
        }
    }

    /// Check both credential fields, accumulating every failure.
    ///
    /// # Returns
    /// One issue per failing field; empty when both pass
    pub fn validate(&self, username: &str, password: &str) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if username.chars().count() < self.username_min_chars {
            issues.push(ValidationIssue::too_short("username", self.username_min_chars));
        }

        if password.chars().count() < self.password_min_chars {
            issues.push(ValidationIssue::too_short("password", self.password_min_chars));
        }

        issues
    }

    /// Case-insensitive membership test against the reserved set.
    pub fn is_reserved(&self, username: &str) -> bool {
        let lowered = username.to_lowercase();
        self.reserved_usernames
            .iter()
            .any(|reserved| *reserved == lowered)
    }
}
