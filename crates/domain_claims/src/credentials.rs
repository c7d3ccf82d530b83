//! Login credentials

use core_kernel::{PortError, VendorType};
use secrecy::{ExposeSecret, SecretString};

/// Credentials submitted at login
///
/// The password is held behind `SecretString` so it never appears in debug
/// output, and the whole value is consumed by `authenticate` — after a
/// successful login the session retains only the vendor and username.
#[derive(Debug)]
pub struct UserCredentials {
    /// Vendor system the technician is signing in to
    pub vendor: VendorType,
    /// Technician username
    pub username: String,
    /// Password, redacted from Debug output
    pub password: SecretString,
}

impl UserCredentials {
    pub fn new(
        vendor: VendorType,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            vendor,
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Local pre-flight check: both fields must be non-empty
    ///
    /// Rejected submissions never reach the network.
    pub fn validate_for_login(&self) -> Result<(), PortError> {
        if self.username.trim().is_empty() {
            return Err(PortError::validation_field(
                "username is required",
                "username",
            ));
        }
        if self.password.expose_secret().is_empty() {
            return Err(PortError::validation_field(
                "password is required",
                "password",
            ));
        }
        Ok(())
    }
}
