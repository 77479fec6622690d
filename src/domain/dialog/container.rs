//! DialogContainer - A whole sub-stack presented as one dialog.
//!
//! The container owns a private `DialogSet`. Its inner stack is kept inside
//! the container's own frame state and rebuilt into a fresh inner
//! `DialogContext` on every hook, so the outer stack only ever sees one
//! frame for the container, and inner and outer dialog ids never collide.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::{Dialog, DialogContext, DialogError, DialogSet, DialogStack, DialogTurnResult, DialogTurnStatus};
use crate::domain::foundation::DialogId;

const INNER_STACK_KEY: &str = "dialogStack";

/// Dialog that runs its own registry and stack.
pub struct DialogContainer {
    initial_dialog_id: DialogId,
    dialogs: Arc<DialogSet>,
}

impl DialogContainer {
    /// Wrap `dialogs`, starting at `initial_dialog_id` on begin.
    ///
    /// # Errors
    /// `DialogError::DialogNotFound` if the initial id is not in `dialogs`.
    pub fn new(initial_dialog_id: &str, dialogs: DialogSet) -> Result<Self, DialogError> {
        let initial_dialog_id = DialogId::new(initial_dialog_id)?;
        if !dialogs.contains(initial_dialog_id.as_str()) {
            return Err(DialogError::DialogNotFound(initial_dialog_id.to_string()));
        }
        Ok(Self {
            initial_dialog_id,
            dialogs: Arc::new(dialogs),
        })
    }

    pub fn initial_dialog_id(&self) -> &DialogId {
        &self.initial_dialog_id
    }

    pub fn dialogs(&self) -> &DialogSet {
        &self.dialogs
    }

    fn inner_context(&self, dc: &DialogContext) -> Result<DialogContext, DialogError> {
        let stack = dc.state()?.get::<DialogStack>(INNER_STACK_KEY)?.unwrap_or_default();
        Ok(DialogContext::new(self.dialogs.clone(), dc.turn_handle(), stack))
    }

    /// Map the inner outcome onto the outer frame.
    async fn settle(
        &self,
        dc: &mut DialogContext,
        inner: DialogContext,
        outcome: DialogTurnResult,
    ) -> Result<DialogTurnResult, DialogError> {
        match outcome.status {
            DialogTurnStatus::Waiting => {
                let stack = inner.into_stack();
                debug!(inner_depth = stack.len(), "container waiting");
                dc.state_mut()?.set(INNER_STACK_KEY, stack)?;
                Ok(DialogTurnResult::waiting())
            }
            DialogTurnStatus::Complete => dc.end(outcome.result).await,
            DialogTurnStatus::Empty | DialogTurnStatus::Cancelled => dc.end(None).await,
        }
    }
}

#[async_trait]
impl Dialog for DialogContainer {
    async fn begin(
        &self,
        dc: &mut DialogContext,
        args: Option<Value>,
    ) -> Result<DialogTurnResult, DialogError> {
        let mut inner = DialogContext::new(self.dialogs.clone(), dc.turn_handle(), DialogStack::new());
        let outcome = inner.begin(self.initial_dialog_id.as_str(), args).await?;
        self.settle(dc, inner, outcome).await
    }

    async fn continue_dialog(&self, dc: &mut DialogContext) -> Result<DialogTurnResult, DialogError> {
        let mut inner = self.inner_context(dc)?;
        let outcome = inner.continue_dialog().await?;
        self.settle(dc, inner, outcome).await
    }

    async fn resume(
        &self,
        dc: &mut DialogContext,
        _result: Option<Value>,
    ) -> Result<DialogTurnResult, DialogError> {
        self.continue_dialog(dc).await
    }

    async fn reprompt(&self, dc: &mut DialogContext) -> Result<DialogTurnResult, DialogError> {
        let mut inner = self.inner_context(dc)?;
        let outcome = inner.reprompt().await?;
        self.settle(dc, inner, outcome).await
    }

    async fn cancel(&self, dc: &mut DialogContext) -> Result<(), DialogError> {
        let mut inner = self.inner_context(dc)?;
        inner.cancel_all().await?;
        dc.state_mut()?.remove(INNER_STACK_KEY);
        Ok(())
    }
}
