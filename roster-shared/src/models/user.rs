/// User model and in-memory store
///
/// This module provides the `User` record and `UserStore`, the ordered
/// collection that backs the web directory. Records keep insertion order
/// and identifiers come from a monotonic counter, so an id is never handed
/// out twice even after the record holding it is deleted.
///
/// The store performs no validation. Callers decide whether a name or email
/// is acceptable before calling `create` or `update`.
///
/// # Example
///
/// ```
/// use roster_shared::models::user::UserStore;
///
/// let mut store = UserStore::new();
///
/// let user = store.create("Ann".to_string(), "ann@example.com".to_string()).unwrap();
/// assert_eq!(user.id, 1);
///
/// assert!(store.delete(1));
/// assert!(store.get(1).is_none());
///
/// // Identifiers are not reused
/// let next = store.create("Bob".to_string(), "bob@example.com".to_string()).unwrap();
/// assert_eq!(next.id, 2);
/// ```

use serde::{Deserialize, Serialize};

/// Identifier type for user records
pub type UserId = u64;

/// A single user entry in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, monotonically assigned identifier (starts at 1)
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Email address (not required to be unique)
    pub email: String,
}

impl User {
    /// Creates a user record from its parts
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Ordered in-memory collection of users
///
/// Owned by whoever runs the directory (the server's application state);
/// there is no global instance.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
    next_id: UserId,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Creates an empty store whose first record will get id 1
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store holding the two demo users shipped with the server
    ///
    /// The next created record gets id 3.
    pub fn seeded() -> Self {
        Self::with_records(
            vec![
                User::new(1, "Иван Иванов", "ivan@example.com"),
                User::new(2, "Мария Петрова", "maria@example.com"),
            ],
            3,
        )
    }

    /// Creates a store from existing records and an explicit id counter
    ///
    /// `next_id` is raised above the largest seeded id if needed, so seeding
    /// can never cause an identifier to be handed out twice.
    pub fn with_records(users: Vec<User>, next_id: UserId) -> Self {
        let floor = users
            .iter()
            .map(|u| u.id.saturating_add(1))
            .max()
            .unwrap_or(1);
        Self {
            users,
            next_id: next_id.max(floor),
        }
    }

    /// Returns all users in insertion order
    pub fn list_all(&self) -> &[User] {
        &self.users
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no users
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Identifier the next `create` call will assign
    pub fn next_id(&self) -> UserId {
        self.next_id
    }

    /// Finds a user by id
    ///
    /// Linear scan returning the first match; ids are unique so it is also
    /// the only match.
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Appends a new user and returns it
    ///
    /// Assigns the current `next_id` and advances the counter. Returns
    /// `None`, leaving the store untouched, once the counter has reached
    /// `UserId::MAX`; that value is never assigned.
    pub fn create(&mut self, name: String, email: String) -> Option<User> {
        let following = self.next_id.checked_add(1)?;
        let user = User {
            id: self.next_id,
            name,
            email,
        };
        self.users.push(user.clone());
        self.next_id = following;

        tracing::debug!(user_id = user.id, "user created");
        Some(user)
    }

    /// Overwrites name and email of an existing user in place
    ///
    /// Returns the updated record, or `None` when no user has this id (the
    /// store is left untouched in that case).
    pub fn update(&mut self, id: UserId, name: String, email: String) -> Option<&User> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        user.name = name;
        user.email = email;

        tracing::debug!(user_id = id, "user updated");
        Some(user)
    }

    /// Removes a user by id
    ///
    /// Returns `true` when a record was removed.
    pub fn delete(&mut self, id: UserId) -> bool {
        match self.users.iter().position(|u| u.id == id) {
            Some(index) => {
                self.users.remove(index);
                tracing::debug!(user_id = id, "user deleted");
                true
            }
            None => false,
        }
    }
}
