use serde::Serialize;

/// The single recognized identity. Exists only inside token claims and the
/// decoded request context; nothing is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Principal {
    pub email: String,
    pub role: String,
}

/// Maps a credential pair to a principal. The shipped implementation is a
/// one-entry lookup; a real identity store slots in behind this trait.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> Option<Principal>;
}

const ADMIN_EMAIL: &str = "admin@b4you.dev";
const ADMIN_PASSWORD: &str = "123456";
const ADMIN_ROLE: &str = "admin";

/// Verifier recognizing exactly one fixed credential pair.
#[derive(Debug, Clone)]
pub struct FixedCredentials {
    email: String,
    password: String,
}

impl FixedCredentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// The built-in admin pair.
    pub fn admin() -> Self {
        Self::new(ADMIN_EMAIL, ADMIN_PASSWORD)
    }
}

impl CredentialVerifier for FixedCredentials {
    fn verify(&self, email: &str, password: &str) -> Option<Principal> {
        if email == self.email && password == self.password {
            Some(Principal {
                email: email.to_string(),
                role: ADMIN_ROLE.to_string(),
            })
        } else {
            None
        }
    }
}
