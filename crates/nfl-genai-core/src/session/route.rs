//! Session routing.
//!
//! The UI transmits a session id of the form `<user>-<conversation>`. The
//! backend splits it on the first hyphen and files the conversation under a
//! storage prefix of `<user>/<model alias>`. Ids without a hyphen go under
//! the `default` user.

use serde::Serialize;

use crate::catalog::model_alias;

/// User segment used when a session id carries no user part.
pub const DEFAULT_ROUTE_USER: &str = "default";

/// Where a conversation lives in the conversation store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRoute {
    /// User segment, if the session id had one
    pub user: Option<String>,
    /// Conversation id used as the store key
    pub conversation_id: String,
    /// Store prefix: `<user>/<model alias>`
    pub storage_prefix: String,
}

impl SessionRoute {
    /// Resolves the route for `session_id` when talking to `model_id`.
    ///
    /// # Example
    /// ```
    /// use nfl_genai_core::session::SessionRoute;
    ///
    /// let route = SessionRoute::resolve("alice-PatMahomes123", "us.amazon.nova-pro-v1:0");
    /// assert_eq!(route.user.as_deref(), Some("alice"));
    /// assert_eq!(route.conversation_id, "PatMahomes123");
    /// assert_eq!(route.storage_prefix, "alice/nova-pro");
    /// ```
    pub fn resolve(session_id: &str, model_id: &str) -> Self {
        let alias = model_alias(model_id);

        match session_id.split_once('-') {
            Some((user, conversation)) => Self {
                user: Some(user.to_string()),
                conversation_id: conversation.to_string(),
                storage_prefix: format!("{}/{}", user, alias),
            },
            None => {
                tracing::debug!(
                    "No user segment in session id '{}', using '{}' prefix",
                    session_id,
                    DEFAULT_ROUTE_USER
                );
                Self {
                    user: None,
                    conversation_id: session_id.to_string(),
                    storage_prefix: format!("{}/{}", DEFAULT_ROUTE_USER, alias),
                }
            }
        }
    }

    /// Returns the user segment, falling back to [`DEFAULT_ROUTE_USER`].
    pub fn user_or_default(&self) -> &str {
        self.user.as_deref().unwrap_or(DEFAULT_ROUTE_USER)
    }
}
