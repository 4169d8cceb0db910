//! Account sign-up, sign-in and sign-out.
//!
//! Credentials are stored as salted argon2 hashes inside the user snapshot;
//! verification goes through `PasswordVerifier`, so comparison never touches
//! the raw bytes directly. Signing out clears the active-user pointer and
//! nothing else -- recorded history stays on disk.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AuthError, Result, ValidationError};
use crate::profile::UserProfile;
use crate::storage::Database;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Hash a plaintext password into a PHC string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

/// Verify a password against a stored PHC string. An unparseable hash counts
/// as a failed verification.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidEmail(email.to_string());
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || email.chars().any(char::is_whitespace)
    {
        return Err(invalid());
    }
    Ok(())
}

/// Account lookup and session pointer management over the snapshot store.
pub struct Authenticator<'a> {
    db: &'a Database,
}

impl<'a> Authenticator<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create an account and mark it active.
    pub fn sign_up(&self, email: &str, password: &str) -> Result<UserProfile> {
        validate_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            }
            .into());
        }
        if self.db.find_user_by_email(email)?.is_some() {
            return Err(AuthError::DuplicateEmail(email.to_string()).into());
        }

        let profile = UserProfile::new(email, hash_password(password)?);
        self.db.save_user(&profile)?;
        self.db.set_active_user(&profile.id)?;
        Ok(profile)
    }

    /// Sign in to an existing account. Unknown email and bad password are
    /// indistinguishable to the caller.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile> {
        let profile = self
            .db
            .find_user_by_email(email)?
            .ok_or(AuthError::InvalidCredentials)?;
        if !verify_password(password, &profile.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }
        self.db.set_active_user(&profile.id)?;
        Ok(profile)
    }

    /// Sign out of this device. Clears the active-user pointer only; the
    /// user's snapshot and full history stay persisted.
    pub fn sign_out(&self) -> Result<()> {
        self.db.clear_active_user()?;
        Ok(())
    }

    /// The signed-in user's snapshot, if anyone is signed in.
    pub fn current_user(&self) -> Result<Option<UserProfile>> {
        match self.db.active_user()? {
            Some(id) => Ok(self.db.load_user(&id)?),
            None => Ok(None),
        }
    }
}
