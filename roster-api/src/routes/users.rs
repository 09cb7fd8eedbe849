/// User directory endpoints
///
/// Pages are rendered server-side; mutations come in as HTML form posts
/// and always answer with a redirect to the listing.
///
/// # Endpoints
///
/// - `GET  /users` - List users
/// - `GET  /users/new` - Creation form
/// - `POST /users/new` - Create user
/// - `GET  /users/:id` - User details
/// - `GET  /users/:id/edit` - Edit form
/// - `POST /users/:id/edit` - Update user
/// - `POST /users/:id/delete` - Delete user
///
/// Submitting a form with an empty or missing `name` or `email` changes
/// nothing; the client is redirected as if the write had succeeded. The
/// same holds for bodies that are not url-encoded forms at all. When a
/// field is repeated, its first value is used.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    views,
};
use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequestParts, Path, State},
    http::request::Parts,
    response::{Html, Redirect},
    Form,
};
use roster_shared::models::user::UserId;
use validator::Validate;

/// Listing route every mutation redirects to
pub const USERS_PATH: &str = "/users";

/// `:id` path segment parsed as a user id
///
/// Only plain ASCII digits are accepted. Anything else (signs, letters,
/// values overflowing `UserId`) is treated as an unmatched route and
/// answered with a 404, never with a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_string();

        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(_) => return Err(ApiError::RouteNotFound(path)),
        };

        match parse_user_id(&raw) {
            Some(id) => Ok(UserIdPath(id)),
            None => Err(ApiError::RouteNotFound(path)),
        }
    }
}

fn parse_user_id(raw: &str) -> Option<UserId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Raw create/edit form body as ordered key/value pairs
///
/// Extracted as pairs rather than a struct so that repeated keys and
/// unreadable bodies reach the handler instead of being rejected.
pub type FormPayload = Result<Form<Vec<(String, String)>>, FormRejection>;

/// Submitted create/edit form
///
/// Missing fields become empty strings so that they fail the same presence
/// check as empty ones.
#[derive(Debug, Default, PartialEq, Eq, Validate)]
pub struct UserForm {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub email: String,
}

impl UserForm {
    /// Builds the form from a request body, keeping the first value of each
    /// field
    pub fn from_payload(payload: FormPayload) -> Self {
        let pairs = match payload {
            Ok(Form(pairs)) => pairs,
            Err(rejection) => {
                tracing::debug!(%rejection, "unreadable user form");
                Vec::new()
            }
        };

        let mut name = None;
        let mut email = None;
        for (key, value) in pairs {
            match key.as_str() {
                "name" => {
                    name.get_or_insert(value);
                }
                "email" => {
                    email.get_or_insert(value);
                }
                _ => {}
            }
        }

        Self {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
        }
    }

    /// Returns `(name, email)` when both are present and non-empty
    fn into_fields(self) -> Option<(String, String)> {
        match self.validate() {
            Ok(()) => Some((self.name, self.email)),
            Err(errors) => {
                tracing::debug!(?errors, "ignoring incomplete user form");
                None
            }
        }
    }
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> Html<String> {
    let users = state.users.read().await;
    views::users_index_page(users.list_all())
}

/// Blank creation form
pub async fn new_user_form() -> Html<String> {
    views::new_user_page()
}

/// Create a user from the submitted form
///
/// # Endpoint
///
/// ```text
/// POST /users/new
/// Content-Type: application/x-www-form-urlencoded
///
/// name=Ann&email=ann%40example.com
/// ```
///
/// Always redirects to `/users`.
pub async fn create_user(State(state): State<AppState>, payload: FormPayload) -> Redirect {
    if let Some((name, email)) = UserForm::from_payload(payload).into_fields() {
        match state.users.write().await.create(name, email) {
            Some(user) => tracing::info!(user_id = user.id, "created user"),
            None => tracing::warn!("user ids exhausted, create ignored"),
        }
    }

    Redirect::to(USERS_PATH)
}

/// Show a single user
///
/// # Errors
///
/// - `404 Not Found`: no user with this id
pub async fn show_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> ApiResult<Html<String>> {
    let users = state.users.read().await;
    let user = users.get(id).ok_or(ApiError::UserNotFound(id))?;

    Ok(views::show_user_page(user))
}

/// Edit form pre-filled with the user's current values
///
/// # Errors
///
/// - `404 Not Found`: no user with this id
pub async fn edit_user_form(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> ApiResult<Html<String>> {
    let users = state.users.read().await;
    let user = users.get(id).ok_or(ApiError::UserNotFound(id))?;

    Ok(views::edit_user_page(user))
}

/// Update a user from the submitted form
///
/// Always redirects to `/users`, including when the id is unknown.
pub async fn update_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    payload: FormPayload,
) -> Redirect {
    if let Some((name, email)) = UserForm::from_payload(payload).into_fields() {
        let updated = state.users.write().await.update(id, name, email).is_some();
        if !updated {
            tracing::info!(user_id = id, "update for unknown user ignored");
        }
    }

    Redirect::to(USERS_PATH)
}

/// Delete a user
///
/// Always redirects to `/users`, including when the id is unknown.
pub async fn delete_user(State(state): State<AppState>, UserIdPath(id): UserIdPath) -> Redirect {
    if !state.users.write().await.delete(id) {
        tracing::info!(user_id = id, "delete for unknown user ignored");
    }

    Redirect::to(USERS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{http::StatusCode, response::IntoResponse};
    use roster_shared::models::user::{User, UserStore};

    fn state() -> AppState {
        let store = UserStore::with_records(
            vec![
                User::new(1, "Ivan", "ivan@x.com"),
                User::new(2, "Maria", "maria@x.com"),
            ],
            3,
        );
        AppState::new(store, Config::default())
    }

    fn pairs(fields: &[(&str, &str)]) -> FormPayload {
        Ok(Form(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    fn form(name: &str, email: &str) -> FormPayload {
        pairs(&[("name", name), ("email", email)])
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("42"), Some(42));
        assert_eq!(parse_user_id("007"), Some(7));
        assert_eq!(parse_user_id(""), None);
        assert_eq!(parse_user_id("abc"), None);
        assert_eq!(parse_user_id("+1"), None);
        assert_eq!(parse_user_id("-1"), None);
        assert_eq!(parse_user_id("99999999999999999999999"), None);
    }

    #[test]
    fn test_form_presence_check() {
        assert!(UserForm::default().into_fields().is_none());

        assert!(UserForm::from_payload(form("Ann", "")).into_fields().is_none());
        assert!(UserForm::from_payload(form("", "ann@x.com")).into_fields().is_none());

        assert_eq!(
            UserForm::from_payload(form("Ann", "ann@x.com")).into_fields(),
            Some(("Ann".to_string(), "ann@x.com".to_string()))
        );
    }

    #[test]
    fn test_form_first_value_wins() {
        let form = UserForm::from_payload(pairs(&[
            ("name", "Ann"),
            ("extra", "ignored"),
            ("name", "Bob"),
            ("email", "a@x.com"),
            ("email", ""),
        ]));

        assert_eq!(
            form,
            UserForm {
                name: "Ann".to_string(),
                email: "a@x.com".to_string(),
            }
        );
    }

    #[test]
    fn test_form_missing_fields_are_empty() {
        let form = UserForm::from_payload(pairs(&[("name", "Ann")]));

        assert_eq!(form.name, "Ann");
        assert!(form.email.is_empty());
        assert!(form.into_fields().is_none());
    }

    #[tokio::test]
    async fn test_create_user_appends_and_redirects() {
        let state = state();

        let response = create_user(State(state.clone()), form("Ann", "ann@x.com"))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let users = state.users.read().await;
        assert_eq!(users.len(), 3);
        assert_eq!(users.get(3), Some(&User::new(3, "Ann", "ann@x.com")));
    }

    #[tokio::test]
    async fn test_create_user_with_empty_field_is_noop() {
        let state = state();

        let response = create_user(State(state.clone()), form("", "ann@x.com"))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.users.read().await.len(), 2);
    }

    #[tokio::test]
    async fn test_show_missing_user() {
        let result = show_user(State(state()), UserIdPath(99)).await;
        assert!(matches!(result, Err(ApiError::UserNotFound(99))));
    }

    #[tokio::test]
    async fn test_update_user_in_place() {
        let state = state();

        update_user(
            State(state.clone()),
            UserIdPath(2),
            form("Maria P.", "mp@x.com"),
        )
        .await;

        let users = state.users.read().await;
        assert_eq!(users.len(), 2);
        assert_eq!(users.get(2), Some(&User::new(2, "Maria P.", "mp@x.com")));
    }

    #[tokio::test]
    async fn test_update_with_empty_email_keeps_values() {
        let state = state();

        update_user(State(state.clone()), UserIdPath(2), form("Maria P.", "")).await;

        let users = state.users.read().await;
        assert_eq!(users.get(2), Some(&User::new(2, "Maria", "maria@x.com")));
    }

    #[tokio::test]
    async fn test_delete_user() {
        let state = state();

        delete_user(State(state.clone()), UserIdPath(1)).await;
        delete_user(State(state.clone()), UserIdPath(1)).await;

        let users = state.users.read().await;
        assert_eq!(users.len(), 1);
        assert!(users.get(1).is_none());
    }
}
