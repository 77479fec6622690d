//! Waterfall - A dialog made of ordered steps.
//!
//! Each step receives the value produced by the previous one: the begin
//! args for step 0, a child's result after `resume`, or the raw reply text
//! when the step itself sent output and waited. A step either begins a
//! child (`dc.begin` / `dc.prompt`), waits, or ends the waterfall with
//! `dc.end`. Falling off the last step ends the waterfall with the value
//! that step was about to receive.

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde_json::Value;
use tracing::debug;

use super::{Dialog, DialogContext, DialogError, DialogTurnResult};

const STEP_INDEX_KEY: &str = "stepIndex";

/// Future returned by a waterfall step.
pub type StepFuture<'a> = BoxFuture<'a, Result<DialogTurnResult, DialogError>>;

/// One boxed step of a waterfall.
pub type WaterfallStep =
    Box<dyn for<'a> Fn(&'a mut DialogContext, Option<Value>) -> StepFuture<'a> + Send + Sync>;

/// Sequence of steps run one per completion.
///
/// ```ignore
/// let root = Waterfall::new()
///     .step(|dc, _| Box::pin(async move { dc.prompt("agePrompt", options).await }))
///     .step(|dc, age| Box::pin(async move { dc.end(age).await }));
/// ```
#[derive(Default)]
pub struct Waterfall {
    steps: Vec<WaterfallStep>,
}

impl Waterfall {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn step<F>(mut self, step: F) -> Self
    where
        F: for<'a> Fn(&'a mut DialogContext, Option<Value>) -> StepFuture<'a>
            + Send
            + Sync
            + 'static,
    {
        self.steps.push(Box::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    async fn run_step(
        &self,
        dc: &mut DialogContext,
        index: usize,
        value: Option<Value>,
    ) -> Result<DialogTurnResult, DialogError> {
        let step = match self.steps.get(index) {
            Some(step) => step,
            None => return dc.end(value).await,
        };

        dc.state_mut()?.set(STEP_INDEX_KEY, index)?;
        debug!(step = index, "running waterfall step");
        step(dc, value).await
    }

    async fn next_step(
        &self,
        dc: &mut DialogContext,
        value: Option<Value>,
    ) -> Result<DialogTurnResult, DialogError> {
        let index = dc
            .state()?
            .get::<usize>(STEP_INDEX_KEY)?
            .ok_or_else(|| DialogError::InvalidState("waterfall frame has no step index".to_string()))?;
        self.run_step(dc, index + 1, value).await
    }
}

#[async_trait]
impl Dialog for Waterfall {
    async fn begin(
        &self,
        dc: &mut DialogContext,
        args: Option<Value>,
    ) -> Result<DialogTurnResult, DialogError> {
        self.run_step(dc, 0, args).await
    }

    async fn continue_dialog(&self, dc: &mut DialogContext) -> Result<DialogTurnResult, DialogError> {
        let reply = Value::String(dc.turn().text().to_string());
        self.next_step(dc, Some(reply)).await
    }

    async fn resume(
        &self,
        dc: &mut DialogContext,
        result: Option<Value>,
    ) -> Result<DialogTurnResult, DialogError> {
        self.next_step(dc, result).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{NumberRecognizer, RecordingTurnContext, TextRecognizer};
    use crate::domain::dialog::{DialogSet, DialogStack, DialogTurnStatus, Prompt, PromptOptions};
    use serde_json::json;
    use std::sync::Arc;

    fn registry(root: Waterfall) -> Arc<DialogSet> {
        let mut set = DialogSet::new();
        set.add("root", root).unwrap();
        set.add("textPrompt", Prompt::new(TextRecognizer)).unwrap();
        set.add("numberPrompt", Prompt::new(NumberRecognizer)).unwrap();
        Arc::new(set)
    }

    async fn turn(
        set: &Arc<DialogSet>,
        stack: DialogStack,
        text: &str,
    ) -> (DialogTurnResult, DialogStack, Vec<String>) {
        let turn = Arc::new(RecordingTurnContext::new(text));
        let mut dc = DialogContext::new(set.clone(), turn.clone(), stack);
        let result = if dc.stack().is_empty() {
            dc.begin("root", None).await.unwrap()
        } else {
            dc.continue_dialog().await.unwrap()
        };
        (result, dc.into_stack(), turn.sent_texts())
    }

    #[tokio::test]
    async fn test_steps_chain_through_prompts() {
        let root = Waterfall::new()
            .step(|dc, _| {
                Box::pin(async move { dc.prompt("textPrompt", PromptOptions::new("Name?")).await })
            })
            .step(|dc, name| {
                Box::pin(async move {
                    dc.state_mut()?.set("name", name)?;
                    dc.prompt("numberPrompt", PromptOptions::new("Age?")).await
                })
            })
            .step(|dc, age| {
                Box::pin(async move {
                    let name = dc.state()?.get::<Value>("name")?;
                    dc.end(Some(json!({ "name": name, "age": age }))).await
                })
            });
        let set = registry(root);

        let (result, stack, sent) = turn(&set, DialogStack::new(), "").await;
        assert!(result.is_waiting());
        assert_eq!(sent, vec!["Name?"]);

        let (result, stack, sent) = turn(&set, stack, "Ada").await;
        assert!(result.is_waiting());
        assert_eq!(sent, vec!["Age?"]);
        assert_eq!(stack.len(), 2);

        let (result, stack, _) = turn(&set, stack, "36").await;
        assert_eq!(result.status, DialogTurnStatus::Complete);
        assert_eq!(result.result, Some(json!({ "name": "Ada", "age": 36 })));
        assert!(stack.is_empty());
    }

    #[tokio::test]
    async fn test_waiting_step_receives_reply_text() {
        let root = Waterfall::new()
            .step(|dc, _| {
                Box::pin(async move {
                    dc.turn().send_output("Say something", None).await?;
                    Ok(DialogTurnResult::waiting())
                })
            })
            .step(|dc, reply| Box::pin(async move { dc.end(reply).await }));
        let set = registry(root);

        let (_, stack, _) = turn(&set, DialogStack::new(), "").await;
        let (result, stack, _) = turn(&set, stack, "hello").await;

        assert_eq!(result.result, Some(json!("hello")));
        assert!(stack.is_empty());
    }

    #[tokio::test]
    async fn test_running_past_last_step_ends_with_value() {
        let root = Waterfall::new().step(|dc, _| {
            Box::pin(async move { dc.prompt("numberPrompt", PromptOptions::new("Count?")).await })
        });
        let set = registry(root);

        let (_, stack, _) = turn(&set, DialogStack::new(), "").await;
        let (result, stack, _) = turn(&set, stack, "3").await;

        assert!(result.is_complete());
        assert_eq!(result.result, Some(json!(3)));
        assert!(stack.is_empty());
    }

    #[tokio::test]
    async fn test_empty_waterfall_ends_with_begin_args() {
        let set = registry(Waterfall::new());
        let turn_ctx = Arc::new(RecordingTurnContext::new(""));
        let mut dc = DialogContext::new(set, turn_ctx, DialogStack::new());

        let result = dc.begin("root", Some(json!("passthrough"))).await.unwrap();

        assert_eq!(result.result, Some(json!("passthrough")));
        assert!(dc.stack().is_empty());
    }

    #[tokio::test]
    async fn test_step_index_is_persisted_in_frame_state() {
        let root = Waterfall::new()
            .step(|dc, _| {
                Box::pin(async move { dc.prompt("textPrompt", PromptOptions::new("First?")).await })
            })
            .step(|dc, _| {
                Box::pin(async move { dc.prompt("textPrompt", PromptOptions::new("Second?")).await })
            })
            .step(|dc, v| Box::pin(async move { dc.end(v).await }));
        let set = registry(root);

        let (_, stack, _) = turn(&set, DialogStack::new(), "").await;
        let (_, stack, _) = turn(&set, stack, "one").await;

        let root_frame = stack.iter().next().unwrap();
        assert_eq!(root_frame.state.get::<usize>(STEP_INDEX_KEY).unwrap(), Some(1));
    }
}
