//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::core::language::LanguageList;
use crate::core::state::App;
use crate::service::{
    Operation, RewriteRequest, ServiceError, Services, SimulatedOperation, SuggestRequest,
    TranslateRequest, Translation,
};

/// Creates a test App with the stock language lists.
pub fn test_app() -> App {
    App::new(LanguageList::writing(), LanguageList::translation())
}

/// An operation that counts calls and always fails after `latency`.
pub struct FailingOperation<I, O> {
    pub latency: Duration,
    pub calls: AtomicUsize,
    _marker: std::marker::PhantomData<fn(I) -> O>,
}

impl<I, O> FailingOperation<I, O> {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            calls: AtomicUsize::new(0),
            _marker: std::marker::PhantomData,
        }
    }
}

#[async_trait]
impl<I, O> Operation for FailingOperation<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    type Input = I;
    type Output = O;

    fn name(&self) -> &str {
        "failing"
    }

    async fn invoke(&self, _input: I) -> Result<O, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        Err(ServiceError::OperationFailed("backend unavailable".to_string()))
    }
}

/// Simulated services with the stock latencies and responses.
pub fn stock_services() -> Services {
    Services {
        suggest: Arc::new(SimulatedOperation::<SuggestRequest, String>::new(
            "suggest",
            Duration::from_millis(500),
            "This is a suggestion for your input.".to_string(),
        )),
        rewrite: Arc::new(SimulatedOperation::<RewriteRequest, String>::new(
            "rewrite",
            Duration::from_millis(800),
            "This is a rewritten version of your input.".to_string(),
        )),
        translate: Arc::new(SimulatedOperation::<TranslateRequest, Translation>::new(
            "translate",
            Duration::from_millis(1000),
            Translation {
                text: "This is the translated text.".to_string(),
                explanation: "Here's an explanation of the translation and any corrections made."
                    .to_string(),
            },
        )),
    }
}
