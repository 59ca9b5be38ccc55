use crate::core::error::CredentialError;
use crate::models::user::{PublicUser, User};
use crate::security::password::PasswordTransform;
use crate::stores::user_store::UserStore;
use chrono::Utc;
use std::sync::{Mutex, PoisonError};

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Registration and login rules on top of the user store
///
/// Owns the store and the password transform; nothing else mutates the
/// store. Registration holds `registration_lock` across the uniqueness check
/// and the insert, so concurrent sign-ups for the same username cannot both
/// succeed.
pub struct CredentialService {
    store: UserStore,
    transform: Box<dyn PasswordTransform>,
    registration_lock: Mutex<()>,
}

impl CredentialService {
    pub fn new(store: UserStore, transform: impl PasswordTransform + 'static) -> Self {
        Self {
            store,
            transform: Box::new(transform),
            registration_lock: Mutex::new(()),
        }
    }

    /// Create a new account.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// username present, username length, password present, password
    /// length, username free.
    pub fn register(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<PublicUser, CredentialError> {
        let username = validate_username(username)?;
        let password = validate_password(password)?;

        let _guard = self
            .registration_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.store.find_by_username(username).is_some() {
            return Err(CredentialError::Conflict);
        }

        let user = User::new(
            self.store.next_id(),
            username.to_string(),
            self.transform.obfuscate(password),
            Utc::now(),
        );
        let public = user.to_public();
        self.store.insert(user);

        Ok(public)
    }

    /// Check a username/password pair. Read-only.
    pub fn authenticate(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<PublicUser, CredentialError> {
        let user = username
            .and_then(|name| self.store.find_by_username(name))
            .ok_or(CredentialError::InvalidCredentials)?;

        if !self.transform.matches(password.unwrap_or_default(), &user.credential) {
            return Err(CredentialError::InvalidCredentials);
        }

        Ok(user.to_public())
    }

    pub fn find_user(&self, id: u32) -> Option<PublicUser> {
        self.store.find_by_id(id).map(|user| user.to_public())
    }

    pub fn registered_users(&self) -> usize {
        self.store.len()
    }
}

fn validate_username(username: Option<&str>) -> Result<&str, CredentialError> {
    let username = username
        .filter(|name| !name.trim().is_empty())
        .ok_or(CredentialError::Validation("username is required"))?;

    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(CredentialError::Validation(
            "username must be at least 3 characters long",
        ));
    }

    Ok(username)
}

fn validate_password(password: Option<&str>) -> Result<&str, CredentialError> {
    let password = password
        .filter(|pass| !pass.trim().is_empty())
        .ok_or(CredentialError::Validation("password is required"))?;

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CredentialError::Validation(
            "password must be at least 6 characters long",
        ));
    }

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::password::Base64Transform;
    use std::sync::Arc;
    use std::thread;

    fn service() -> CredentialService {
        CredentialService::new(UserStore::new(), Base64Transform)
    }

    fn validation(message: &'static str) -> CredentialError {
        CredentialError::Validation(message)
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let service = service();

        let alice = service.register(Some("alice"), Some("password123")).unwrap();
        let bob = service.register(Some("bob"), Some("password123")).unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(alice.username, "alice");
        assert_eq!(service.registered_users(), 2);
    }

    #[test]
    fn test_register_stores_obfuscated_credential() {
        let service = service();
        service.register(Some("alice"), Some("password123")).unwrap();

        let stored = service.store.find_by_username("alice").unwrap();
        assert_ne!(stored.credential, "password123");
        assert_eq!(stored.credential, "cGFzc3dvcmQxMjM=");
    }

    #[test]
    fn test_register_missing_username() {
        let err = service().register(None, Some("password123")).unwrap_err();
        assert_eq!(err, validation("username is required"));
    }

    #[test]
    fn test_register_blank_username() {
        let service = service();
        for username in ["", "   ", "\t\n"] {
            let err = service.register(Some(username), Some("password123")).unwrap_err();
            assert_eq!(err, validation("username is required"));
        }
    }

    #[test]
    fn test_username_length_boundary() {
        let service = service();

        let err = service.register(Some("ab"), Some("password123")).unwrap_err();
        assert_eq!(err, validation("username must be at least 3 characters long"));

        assert!(service.register(Some("abc"), Some("password123")).is_ok());
    }

    #[test]
    fn test_register_missing_or_blank_password() {
        let service = service();

        let err = service.register(Some("alice"), None).unwrap_err();
        assert_eq!(err, validation("password is required"));

        let err = service.register(Some("alice"), Some("      ")).unwrap_err();
        assert_eq!(err, validation("password is required"));
    }

    #[test]
    fn test_password_length_boundary() {
        let service = service();

        let err = service.register(Some("alice"), Some("12345")).unwrap_err();
        assert_eq!(err, validation("password must be at least 6 characters long"));

        assert!(service.register(Some("alice"), Some("123456")).is_ok());
    }

    #[test]
    fn test_username_checked_before_password() {
        let err = service().register(Some("ab"), Some("")).unwrap_err();
        assert_eq!(err, validation("username must be at least 3 characters long"));
    }

    #[test]
    fn test_validation_runs_before_conflict_check() {
        let service = service();
        service.register(Some("alice"), Some("password123")).unwrap();

        let err = service.register(Some("alice"), Some("short")).unwrap_err();
        assert_eq!(err, validation("password must be at least 6 characters long"));
    }

    #[test]
    fn test_failed_validation_does_not_consume_id() {
        let service = service();
        service.register(Some("ab"), Some("password123")).unwrap_err();

        let user = service.register(Some("alice"), Some("password123")).unwrap();
        assert_eq!(user.id, 1);
    }

    #[test]
    fn test_duplicate_username_conflicts_and_keeps_original() {
        let service = service();
        let original = service.register(Some("alice"), Some("password123")).unwrap();

        let err = service.register(Some("alice"), Some("different123")).unwrap_err();
        assert_eq!(err, CredentialError::Conflict);

        let stored = service.find_user(original.id).unwrap();
        assert_eq!(stored, original);
        assert_eq!(service.registered_users(), 1);

        // The original password still works, the rejected one does not
        assert!(service.authenticate(Some("alice"), Some("password123")).is_ok());
        assert!(service.authenticate(Some("alice"), Some("different123")).is_err());
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let service = service();
        service.register(Some("alice"), Some("password123")).unwrap();

        let other = service.register(Some("Alice"), Some("password123")).unwrap();
        assert_eq!(other.id, 2);
    }

    #[test]
    fn test_authenticate_success_returns_stored_record() {
        let service = service();
        let registered = service.register(Some("alice"), Some("password123")).unwrap();

        let user = service.authenticate(Some("alice"), Some("password123")).unwrap();
        assert_eq!(user, registered);
    }

    #[test]
    fn test_authenticate_unknown_user_and_wrong_password_look_the_same() {
        let service = service();
        service.register(Some("alice"), Some("password123")).unwrap();

        let unknown = service.authenticate(Some("mallory"), Some("password123")).unwrap_err();
        let wrong = service.authenticate(Some("alice"), Some("wrongpassword")).unwrap_err();

        assert_eq!(unknown, CredentialError::InvalidCredentials);
        assert_eq!(wrong, CredentialError::InvalidCredentials);
        assert_eq!(unknown.to_string(), wrong.to_string());
        assert_eq!(unknown.to_string(), "invalid username or password");
    }

    #[test]
    fn test_authenticate_missing_fields() {
        let service = service();
        service.register(Some("alice"), Some("password123")).unwrap();

        assert_eq!(
            service.authenticate(None, Some("password123")).unwrap_err(),
            CredentialError::InvalidCredentials
        );
        assert_eq!(
            service.authenticate(Some("alice"), None).unwrap_err(),
            CredentialError::InvalidCredentials
        );
    }

    #[test]
    fn test_authenticate_does_not_modify_store() {
        let service = service();
        service.register(Some("alice"), Some("password123")).unwrap();

        let _ = service.authenticate(Some("alice"), Some("password123"));
        let _ = service.authenticate(Some("nobody"), Some("password123"));

        assert_eq!(service.registered_users(), 1);
    }

    #[test]
    fn test_find_user_unknown_id() {
        assert!(service().find_user(42).is_none());
    }

    #[test]
    fn test_concurrent_registration_of_same_username() {
        let service = Arc::new(service());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    let password = format!("password{i}");
                    service.register(Some("racer"), Some(password.as_str())).is_ok()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(service.registered_users(), 1);
    }
}
