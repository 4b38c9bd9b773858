//! # Session Client
//!
//! High-level API for the session's identity slot. Pins the id of the
//! session created at startup, the same way the cart client pins its cart.

use crate::model::{Session, SessionCreate, SessionId, User};
use crate::session_actor::{SessionAction, SessionError};
use resource_actor::{FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<Session>,
    id: SessionId,
}

impl SessionClient {
    pub fn new(inner: ResourceClient<Session>, id: SessionId) -> Self {
        Self { inner, id }
    }

    /// Creates a fresh anonymous session and returns a client pinned to it.
    pub async fn open(inner: ResourceClient<Session>) -> Result<Self, SessionError> {
        let id = inner.create(SessionCreate).await.map_err(Self::map_error)?;
        Ok(Self { inner, id })
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    fn map_error(e: FrameworkError) -> SessionError {
        match e {
            FrameworkError::NotFound(id) => SessionError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<SessionError>() {
                Ok(domain) => *domain,
                Err(other) => SessionError::ActorCommunicationError(other.to_string()),
            },
            other => SessionError::ActorCommunicationError(other.to_string()),
        }
    }

    /// Replace the session identity unconditionally.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn set_user(&self, user: User) -> Result<(), SessionError> {
        debug!("Sending request");
        self.inner
            .perform_action(self.id.clone(), SessionAction::SetUser(user))
            .await
            .map_err(Self::map_error)
    }

    /// Clear the session identity.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), SessionError> {
        debug!("Sending request");
        self.inner
            .perform_action(self.id.clone(), SessionAction::Logout)
            .await
            .map_err(Self::map_error)
    }

    pub async fn current_user(&self) -> Result<Option<User>, SessionError> {
        match self.inner.get(self.id.clone()).await.map_err(Self::map_error)? {
            Some(session) => Ok(session.user),
            None => Err(SessionError::NotFound(self.id.to_string())),
        }
    }

    /// True iff an identity is set.
    pub async fn is_logged_in(&self) -> Result<bool, SessionError> {
        Ok(self.current_user().await?.is_some())
    }
}
