/// Command to register a new account.
///
/// Fields arrive unvalidated; the service applies the credential policy
/// before anything touches storage.
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub username: String,
    pub password: String,
}

impl RegisterCommand {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

/// Command to authenticate an existing account.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}
