use core::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Callback invoked when the user asks to log out.
pub type LogoutHandler = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl CurrentUser {
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
        }
    }
}

/// Authentication state as supplied by the surrounding application.
///
/// The header only reads this. Whatever `on_logout` does to the real auth
/// state is up to the caller that provided it.
#[derive(Clone, Default)]
pub struct AuthContext {
    pub is_authenticated: bool,
    pub current_user: Option<CurrentUser>,
    pub on_logout: Option<LogoutHandler>,
}

impl AuthContext {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn authenticated(current_user: Option<CurrentUser>) -> Self {
        Self {
            is_authenticated: true,
            current_user,
            on_logout: None,
        }
    }

    #[must_use]
    pub fn with_logout(mut self, on_logout: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_logout = Some(Arc::new(on_logout));
        self
    }

    /// Runs the logout callback. Without one this does nothing.
    pub fn request_logout(&self) {
        match &self.on_logout {
            Some(on_logout) => on_logout(),
            None => tracing::debug!("logout requested without a handler"),
        }
    }

    /// Name to display for the signed-in user, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        if !self.is_authenticated {
            return None;
        }
        self.current_user
            .as_ref()
            .map(|user| user.username.as_str())
            .filter(|name| !name.is_empty())
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("is_authenticated", &self.is_authenticated)
            .field("current_user", &self.current_user)
            .field("on_logout", &self.on_logout.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_requires_authentication() {
        let mut auth = AuthContext::authenticated(Some(CurrentUser::new("alex")));
        assert_eq!(auth.username(), Some("alex"));

        auth.is_authenticated = false;
        assert_eq!(auth.username(), None);
    }

    #[test]
    fn test_username_absent_without_user() {
        assert_eq!(AuthContext::authenticated(None).username(), None);
        assert_eq!(
            AuthContext::authenticated(Some(CurrentUser::new(""))).username(),
            None
        );
    }

    #[test]
    fn test_current_user_deserializes_without_email() {
        let user: CurrentUser = serde_json::from_str(r#"{"username":"alex"}"#).unwrap();
        assert_eq!(user, CurrentUser::new("alex"));
    }

    #[test]
    fn test_request_logout_without_handler_is_silent() {
        let auth = AuthContext::authenticated(Some(CurrentUser::new("alex")));
        auth.request_logout();
        assert!(auth.is_authenticated);
        assert_eq!(auth.username(), Some("alex"));
    }

    #[test]
    fn test_debug_hides_callback() {
        let auth = AuthContext::anonymous().with_logout(|| {});
        let debug = format!("{auth:?}");
        assert!(debug.contains("<callback>"));
        assert!(debug.contains("is_authenticated: false"));
    }
}
