//! Stub gateway and log capture for agent tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use async_trait::async_trait;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use verity_domain::ModelConfig;

/// A request the stub received.
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub model: String,
    pub temperature: f32,
    pub prompt: String,
}

/// Gateway that returns scripted replies (or errors) and records every call.
///
/// The n-th call gets the n-th reply; once the script runs out the last
/// reply repeats.
pub(crate) struct StubGateway {
    replies: Vec<Result<String, GatewayError>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubGateway {
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Self::scripted(vec![Ok(text.into())])
    }

    pub fn failing(error: GatewayError) -> Arc<Self> {
        Self::scripted(vec![Err(error)])
    }

    pub fn scripted(replies: Vec<Result<String, GatewayError>>) -> Arc<Self> {
        assert!(!replies.is_empty(), "stub needs at least one reply");
        Arc::new(Self {
            replies,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for StubGateway {
    async fn complete(&self, config: &ModelConfig, prompt: &str) -> Result<String, GatewayError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(RecordedCall {
            model: config.model_name().to_string(),
            temperature: config.temperature,
            prompt: prompt.to_string(),
        });
        let index = (calls.len() - 1).min(self.replies.len() - 1);
        self.replies[index].clone()
    }
}

/// Records `(level, message)` for every event on the current thread.
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl CapturedLogs {
    /// Install as the thread-local default subscriber until the guard drops.
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::set_default(subscriber)
    }

    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}

#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}
