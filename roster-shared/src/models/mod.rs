/// In-memory models for Roster
///
/// Nothing here is persisted; every store lives exactly as long as the
/// process that owns it.
///
/// # Models
///
/// - `user`: User records backing the web directory
/// - `item`: Plain string items backing the console program
///
/// # Example
///
/// ```
/// use roster_shared::models::user::UserStore;
///
/// let mut store = UserStore::seeded();
/// let user = store.create("Ann".to_string(), "ann@example.com".to_string()).unwrap();
/// assert_eq!(user.id, 3);
/// ```

pub mod item;
pub mod user;
