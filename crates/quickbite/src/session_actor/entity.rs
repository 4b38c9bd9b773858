//! Entity trait implementation for the Session domain type.

use super::actions::SessionAction;
use super::error::SessionError;
use crate::model::{Session, SessionCreate, SessionId};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Session {
    type Id = SessionId;
    type Create = SessionCreate;
    type Update = ();
    type Action = SessionAction;
    type ActionResult = ();
    type Context = ();
    type Error = SessionError;

    /// Sessions start anonymous.
    fn from_create_params(id: SessionId, _params: SessionCreate) -> Result<Self, Self::Error> {
        Ok(Self { id, user: None })
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: SessionAction,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {
            SessionAction::SetUser(user) => {
                self.user = Some(user);
                Ok(())
            }
            SessionAction::Logout => {
                self.user = None;
                Ok(())
            }
        }
    }
}
