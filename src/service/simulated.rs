//! Fixed-latency, fixed-response operations.
//!
//! Stand-ins for a language-processing backend: each call sleeps for the
//! configured latency and then returns a canned response. Runs on the tokio
//! timer, so tests driving a paused clock see exact timings.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::operation::{Operation, ServiceError, Services};
use super::types::{RewriteRequest, SuggestRequest, TranslateRequest, Translation};
use crate::core::config::ResolvedConfig;

pub struct SimulatedOperation<I, O> {
    name: String,
    latency: Duration,
    response: O,
    _input: PhantomData<fn(I)>,
}

impl<I, O> SimulatedOperation<I, O> {
    pub fn new(name: impl Into<String>, latency: Duration, response: O) -> Self {
        Self {
            name: name.into(),
            latency,
            response,
            _input: PhantomData,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl<I, O> Operation for SimulatedOperation<I, O>
where
    I: Send + 'static,
    O: Clone + Send + Sync + 'static,
{
    type Input = I;
    type Output = O;

    fn name(&self) -> &str {
        &self.name
    }

    async fn invoke(&self, _input: I) -> Result<O, ServiceError> {
        debug!(
            "Simulated {} started (latency={}ms)",
            self.name,
            self.latency.as_millis()
        );
        tokio::time::sleep(self.latency).await;
        Ok(self.response.clone())
    }
}

/// Builds the simulated service set from resolved timings and responses.
pub fn simulated_services(config: &ResolvedConfig) -> Services {
    let suggest: SimulatedOperation<SuggestRequest, String> = SimulatedOperation::new(
        "suggest",
        config.suggestion_latency,
        config.responses.suggestion.clone(),
    );
    let rewrite: SimulatedOperation<RewriteRequest, String> = SimulatedOperation::new(
        "rewrite",
        config.rewrite_latency,
        config.responses.rewrite.clone(),
    );
    let translate: SimulatedOperation<TranslateRequest, Translation> = SimulatedOperation::new(
        "translate",
        config.translation_latency,
        Translation {
            text: config.responses.translation.clone(),
            explanation: config.responses.explanation.clone(),
        },
    );

    Services {
        suggest: Arc::new(suggest),
        rewrite: Arc::new(rewrite),
        translate: Arc::new(translate),
    }
}
