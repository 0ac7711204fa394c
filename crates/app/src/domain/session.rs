//! Sessions

use async_trait::async_trait;
use foodcart::uuids::UserUuid;
use mockall::automock;

/// Source of the signed-in user.
#[automock]
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The signed-in user, if any.
    async fn current_user(&self) -> Option<UserUuid>;
}

/// A session fixed at construction, e.g. from a command-line flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSession {
    user: Option<UserUuid>,
}

impl StaticSession {
    #[must_use]
    pub fn signed_in(user: UserUuid) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    async fn current_user(&self) -> Option<UserUuid> {
        self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_session_reports_its_user() {
        let user = UserUuid::new();

        assert_eq!(StaticSession::signed_in(user).current_user().await, Some(user));
        assert_eq!(StaticSession::anonymous().current_user().await, None);
    }
}
