use crate::models::user::User;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// In-memory, insertion-ordered collection of registered users
///
/// Uniqueness of usernames is NOT enforced here; the credential service
/// checks before inserting.
pub struct UserStore {
    users: RwLock<Vec<Arc<User>>>,
    next_id: AtomicU32,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            next_id: AtomicU32::new(1),
        }
    }

    /// Hand out the next unused ID and advance the counter.
    /// IDs are never reused, even if the caller ends up not inserting.
    pub fn next_id(&self) -> u32 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// First user whose username matches exactly (case-sensitive)
    pub fn find_by_username(&self, username: &str) -> Option<Arc<User>> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|user| user.username == username)
            .map(Arc::clone)
    }

    pub fn find_by_id(&self, id: u32) -> Option<Arc<User>> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|user| user.id == id)
            .map(Arc::clone)
    }

    /// Append a user to the end of the collection
    pub fn insert(&self, user: User) {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(user));
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
