use atbara_catalog::{fixtures, Role, User};

use crate::{CoreError, CoreResult};

/// Who is using the app. Only `role` and `name` are ever read by the booking views.
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<&User>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    fn login(&mut self, user: User);

    fn logout(&mut self);

    fn role(&self) -> Option<Role> {
        self.current_user().map(|u| u.role)
    }
}

/// Session held in memory for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
    user: Option<User>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self { user: None }
    }

    pub fn with_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Sign in as one of the fixture accounts
    pub fn login_as(&mut self, user_id: &str) -> CoreResult<&User> {
        let user = fixtures::find_user(user_id)
            .ok_or_else(|| CoreError::IdentityError(format!("no account '{}'", user_id)))?;
        tracing::info!(user_id = %user.id, role = ?user.role, "Signed in");
        self.login(user);
        self.user
            .as_ref()
            .ok_or_else(|| CoreError::InternalError("session lost after login".to_string()))
    }
}

impl SessionProvider for InMemorySession {
    fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn login(&mut self, user: User) {
        self.user = Some(user);
    }

    fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "Signed out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout() {
        let mut session = InMemorySession::new();
        assert!(!session.is_authenticated());

        let user = session.login_as("ahmed").unwrap();
        assert_eq!(user.role, Role::Customer);
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Customer));

        session.logout();
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_unknown_account() {
        let mut session = InMemorySession::new();
        assert!(matches!(session.login_as("mallory"), Err(CoreError::IdentityError(_))));
        assert!(!session.is_authenticated());
    }
}
