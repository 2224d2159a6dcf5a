//! In-memory user store.
//!
//! # Responsibilities
//! - Own the user collection and the monotonic id counter
//! - Enforce field presence, email shape, and email uniqueness
//! - Keep insertion order as the display order
//!
//! # Design Decisions
//! - One mutex around every logical operation: each read or
//!   read-modify-write runs as a single critical section, so email
//!   uniqueness and id monotonicity hold under concurrent requests
//! - Ids start at 1 and are never reused, even after deletion
//! - State is process-lifetime only; a restart resets it

use std::sync::Mutex;

use crate::users::error::UserError;
use crate::users::model::{is_valid_email, CreateUser, UpdateUser, User};

/// The user collection plus id counter, shared across handlers.
pub struct UserStore {
    inner: Mutex<StoreInner>,
}

struct StoreInner {
    users: Vec<User>,
    next_id: u64,
}

impl UserStore {
    /// Create an empty store. The first assigned id is 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// All users in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    /// Validate the candidate fields, assign the next id, and append.
    pub fn create(&self, req: CreateUser) -> Result<User, UserError> {
        let name = req.name.filter(|n| !n.trim().is_empty());
        let email = req.email.filter(|e| !e.is_empty());
        let (Some(name), Some(email)) = (name, email) else {
            return Err(UserError::MissingFields);
        };
        if !is_valid_email(&email) {
            return Err(UserError::InvalidEmail);
        }

        let mut inner = self.lock();
        let lowered = email.to_lowercase();
        if inner.users.iter().any(|u| u.email.to_lowercase() == lowered) {
            return Err(UserError::EmailTaken);
        }

        let user = User {
            id: inner.next_id,
            name,
            email,
        };
        inner.next_id += 1;
        inner.users.push(user.clone());
        Ok(user)
    }

    /// Look up a user by id.
    pub fn get(&self, id: u64) -> Result<User, UserError> {
        self.lock()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(UserError::NotFound)
    }

    /// Overwrite name and/or email on an existing user.
    ///
    /// Blank strings are treated as absent: the stored value is retained.
    /// A user may re-submit their own email (in any casing) without
    /// tripping the uniqueness check.
    pub fn update(&self, id: u64, req: UpdateUser) -> Result<User, UserError> {
        let name = req.name.filter(|n| !n.trim().is_empty());
        let email = req.email.filter(|e| !e.is_empty());

        let mut inner = self.lock();
        let pos = inner
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(UserError::NotFound)?;

        if let Some(email) = email {
            if !is_valid_email(&email) {
                return Err(UserError::InvalidEmail);
            }
            let lowered = email.to_lowercase();
            if inner
                .users
                .iter()
                .any(|u| u.id != id && u.email.to_lowercase() == lowered)
            {
                return Err(UserError::EmailTaken);
            }
            inner.users[pos].email = email;
        }
        if let Some(name) = name {
            inner.users[pos].name = name;
        }

        Ok(inner.users[pos].clone())
    }

    /// Remove a user by id, returning the removed record.
    pub fn delete(&self, id: u64) -> Result<User, UserError> {
        let mut inner = self.lock();
        let pos = inner
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(UserError::NotFound)?;
        Ok(inner.users.remove(pos))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        // Poisoning only occurs if a panic happened mid-operation; none of
        // the operations above can panic while holding the guard.
        self.inner.lock().expect("user store lock poisoned")
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(store: &UserStore, name: &str, email: &str) -> Result<User, UserError> {
        store.create(CreateUser {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
        })
    }

    #[test]
    fn create_then_get_roundtrips() {
        let store = UserStore::new();
        let created = create(&store, "Alice", "alice@x.com").unwrap();
        assert_eq!(created.id, 1);
        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn create_requires_name_and_email() {
        let store = UserStore::new();
        assert_eq!(
            store.create(CreateUser::default()),
            Err(UserError::MissingFields)
        );
        assert_eq!(create(&store, "", "a@b.co"), Err(UserError::MissingFields));
        assert_eq!(create(&store, "   ", "a@b.co"), Err(UserError::MissingFields));
        assert_eq!(create(&store, "Alice", ""), Err(UserError::MissingFields));
    }

    #[test]
    fn create_rejects_malformed_email() {
        let store = UserStore::new();
        assert_eq!(
            create(&store, "Alice", "not-an-email"),
            Err(UserError::InvalidEmail)
        );
        assert!(store.list().is_empty());
    }

    #[test]
    fn duplicate_email_differing_only_by_case_conflicts() {
        let store = UserStore::new();
        create(&store, "Alice", "alice@x.com").unwrap();
        assert_eq!(
            create(&store, "Bob", "ALICE@X.COM"),
            Err(UserError::EmailTaken)
        );
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn ids_strictly_increase_across_deletes() {
        let store = UserStore::new();
        let alice = create(&store, "Alice", "alice@x.com").unwrap();
        assert_eq!(alice.id, 1);
        store.delete(alice.id).unwrap();
        let carol = create(&store, "Carol", "carol@x.com").unwrap();
        assert_eq!(carol.id, 2, "deleted ids must not be reused");
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let store = UserStore::new();
        let alice = create(&store, "Alice", "alice@x.com").unwrap();
        let removed = store.delete(alice.id).unwrap();
        assert_eq!(removed, alice);
        assert_eq!(store.get(alice.id), Err(UserError::NotFound));
        assert_eq!(store.delete(alice.id), Err(UserError::NotFound));
    }

    #[test]
    fn update_with_no_fields_leaves_record_unchanged() {
        let store = UserStore::new();
        let alice = create(&store, "Alice", "alice@x.com").unwrap();
        let updated = store.update(alice.id, UpdateUser::default()).unwrap();
        assert_eq!(updated, alice);
    }

    #[test]
    fn update_treats_blank_fields_as_absent() {
        let store = UserStore::new();
        let alice = create(&store, "Alice", "alice@x.com").unwrap();
        let updated = store
            .update(
                alice.id,
                UpdateUser {
                    name: Some("   ".to_string()),
                    email: Some(String::new()),
                },
            )
            .unwrap();
        assert_eq!(updated, alice);
    }

    #[test]
    fn update_overwrites_provided_fields() {
        let store = UserStore::new();
        let alice = create(&store, "Alice", "alice@x.com").unwrap();
        let updated = store
            .update(
                alice.id,
                UpdateUser {
                    name: Some("Alicia".to_string()),
                    email: Some("alicia@x.com".to_string()),
                },
            )
            .unwrap();
        assert_eq!(updated.id, alice.id);
        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.email, "alicia@x.com");
        assert_eq!(store.get(alice.id).unwrap(), updated);
    }

    #[test]
    fn update_rejects_email_held_by_another_user() {
        let store = UserStore::new();
        create(&store, "Alice", "alice@x.com").unwrap();
        let bob = create(&store, "Bob", "bob@x.com").unwrap();
        assert_eq!(
            store.update(
                bob.id,
                UpdateUser {
                    name: None,
                    email: Some("ALICE@X.COM".to_string()),
                },
            ),
            Err(UserError::EmailTaken)
        );
        assert_eq!(store.get(bob.id).unwrap().email, "bob@x.com");
    }

    #[test]
    fn update_allows_re_submitting_own_email() {
        let store = UserStore::new();
        let alice = create(&store, "Alice", "alice@x.com").unwrap();
        let updated = store
            .update(
                alice.id,
                UpdateUser {
                    name: None,
                    email: Some("ALICE@X.COM".to_string()),
                },
            )
            .unwrap();
        assert_eq!(updated.email, "ALICE@X.COM");
    }

    #[test]
    fn update_rejects_malformed_email() {
        let store = UserStore::new();
        let alice = create(&store, "Alice", "alice@x.com").unwrap();
        assert_eq!(
            store.update(
                alice.id,
                UpdateUser {
                    name: None,
                    email: Some("broken".to_string()),
                },
            ),
            Err(UserError::InvalidEmail)
        );
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = UserStore::new();
        assert_eq!(
            store.update(42, UpdateUser::default()),
            Err(UserError::NotFound)
        );
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = UserStore::new();
        create(&store, "Alice", "alice@x.com").unwrap();
        create(&store, "Bob", "bob@x.com").unwrap();
        create(&store, "Carol", "carol@x.com").unwrap();
        let names: Vec<String> = store.list().into_iter().map(|u| u.name).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
    }
}
