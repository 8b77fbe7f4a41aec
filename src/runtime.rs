//! # Runtime
//!
//! Executes the `Effect`s returned by `core::action::update()`.
//!
//! Timers and service calls run as tokio tasks. Tasks never touch state:
//! when they finish they send an `Action` back over a channel, and the owner
//! of the state (the event loop, or a test) applies it through `update()`.
//!
//! Each kind of work has one slot holding at most one abort handle. Filling
//! a slot aborts whatever was in it, so a debounce re-armed while another is
//! pending replaces it instead of stacking. Unmounting a view empties its
//! slots. Results that were already queued before an abort are discarded by
//! the state itself, because their ticket no longer matches.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::route::View;
use crate::core::state::App;
use crate::service::simulated::simulated_services;
use crate::service::{Operation, ServiceError, Services};

/// At most one live task.
#[derive(Default)]
struct Slot(Option<AbortHandle>);

impl Slot {
    fn replace(&mut self, handle: AbortHandle) {
        if let Some(previous) = self.0.replace(handle) {
            previous.abort();
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.abort();
        }
    }

    fn is_live(&self) -> bool {
        self.0.as_ref().is_some_and(|h| !h.is_finished())
    }
}

pub struct EffectRunner {
    services: Services,
    debounce_delay: Duration,
    tx: UnboundedSender<Action>,
    debounce: Slot,
    suggestion: Slot,
    rewrite: Slot,
    translation: Slot,
}

impl EffectRunner {
    pub fn new(services: Services, debounce_delay: Duration, tx: UnboundedSender<Action>) -> Self {
        Self {
            services,
            debounce_delay,
            tx,
            debounce: Slot::default(),
            suggestion: Slot::default(),
            rewrite: Slot::default(),
            translation: Slot::default(),
        }
    }

    /// Performs an effect. Must be called from inside a tokio runtime.
    pub fn run(&mut self, effect: Effect) {
        match effect {
            Effect::None | Effect::Quit => {}
            Effect::ArmDebounce(ticket) => {
                // A suggestion for the previous text is no longer wanted.
                self.suggestion.cancel();

                let tx = self.tx.clone();
                let delay = self.debounce_delay;
                let handle = tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if tx.send(Action::DebounceElapsed(ticket)).is_err() {
                        warn!("Debounce {:?} fired after receiver dropped", ticket);
                    }
                });
                self.debounce.replace(handle.abort_handle());
            }
            Effect::Suggest { ticket, request } => {
                let handle = spawn_operation(
                    self.services.suggest.clone(),
                    request,
                    self.tx.clone(),
                    move |result| Action::SuggestionReady { ticket, result },
                );
                self.suggestion.replace(handle);
            }
            Effect::Rewrite { ticket, request } => {
                let handle = spawn_operation(
                    self.services.rewrite.clone(),
                    request,
                    self.tx.clone(),
                    move |result| Action::RewriteReady { ticket, result },
                );
                self.rewrite.replace(handle);
            }
            Effect::Translate { ticket, request } => {
                let handle = spawn_operation(
                    self.services.translate.clone(),
                    request,
                    self.tx.clone(),
                    move |result| Action::TranslationReady { ticket, result },
                );
                self.translation.replace(handle);
            }
            Effect::Unmount(views) => {
                for view in views {
                    self.cancel_view(view);
                }
            }
        }
    }

    /// Aborts every task owned by `view`.
    pub fn cancel_view(&mut self, view: View) {
        info!("Cancelling pending work for {:?}", view);
        match view {
            View::Writing => {
                self.debounce.cancel();
                self.suggestion.cancel();
                self.rewrite.cancel();
            }
            View::Translation => self.translation.cancel(),
        }
    }

    pub fn shutdown(&mut self) {
        self.cancel_view(View::Writing);
        self.cancel_view(View::Translation);
    }

    /// Number of tasks that have not finished or been aborted.
    pub fn live_tasks(&self) -> usize {
        [
            &self.debounce,
            &self.suggestion,
            &self.rewrite,
            &self.translation,
        ]
        .iter()
        .filter(|slot| slot.is_live())
        .count()
    }
}

impl Drop for EffectRunner {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn spawn_operation<I, O, F>(
    operation: Arc<dyn Operation<Input = I, Output = O>>,
    input: I,
    tx: UnboundedSender<Action>,
    into_action: F,
) -> AbortHandle
where
    I: Send + 'static,
    O: Send + 'static,
    F: FnOnce(Result<O, ServiceError>) -> Action + Send + 'static,
{
    info!("Spawning {} operation", operation.name());
    let handle = tokio::spawn(async move {
        let result = operation.invoke(input).await;
        if let Err(e) = &result {
            warn!("{} operation failed: {}", operation.name(), e);
        }
        if tx.send(into_action(result)).is_err() {
            warn!("Failed to deliver {} result: receiver dropped", operation.name());
        }
    });
    handle.abort_handle()
}

/// State, effect runner and the channel joining them.
pub struct Controller {
    pub app: App,
    runner: EffectRunner,
    rx: UnboundedReceiver<Action>,
}

impl Controller {
    pub fn new(app: App, services: Services, debounce_delay: Duration) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            app,
            runner: EffectRunner::new(services, debounce_delay, tx),
            rx,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            App::from_config(config),
            simulated_services(config),
            config.debounce,
        )
    }

    /// Applies an action and runs its effect. Returns `false` once the
    /// application should quit.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let effect = update(&mut self.app, action);
        if effect == Effect::Quit {
            return false;
        }
        self.runner.run(effect);
        true
    }

    /// Applies every background action already queued without waiting.
    /// Returns `true` if anything was applied.
    pub fn drain(&mut self) -> bool {
        let mut applied = false;
        while let Ok(action) = self.rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            self.dispatch(action);
            applied = true;
        }
        applied
    }

    /// Waits for the next background action, applies it, and returns a copy.
    pub async fn next(&mut self) -> Option<Action> {
        let action = self.rx.recv().await?;
        self.dispatch(action.clone());
        Some(action)
    }

    pub fn live_tasks(&self) -> usize {
        self.runner.live_tasks()
    }

    /// Cancels all outstanding work (the root view is going away).
    pub fn shutdown(&mut self) {
        self.runner.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::route::Tab;
    use crate::test_support::{FailingOperation, stock_services, test_app};
    use crate::service::{RewriteRequest, SuggestRequest};
    use std::sync::atomic::Ordering;
    use tokio::time::Instant;

    fn controller() -> Controller {
        Controller::new(test_app(), stock_services(), Duration::from_millis(300))
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearming_replaces_pending_debounce() {
        let mut c = controller();
        c.dispatch(Action::TextChanged("a".to_string()));
        c.dispatch(Action::TextChanged("ab".to_string()));
        c.dispatch(Action::TextChanged("abc".to_string()));
        tokio::task::yield_now().await;
        assert_eq!(c.live_tasks(), 1);

        assert!(matches!(c.next().await, Some(Action::DebounceElapsed(_))));
        assert_eq!(c.app.writing.pending_debounce(), None);
        assert!(c.app.writing.is_suggestion_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_suggestion_arrives_after_debounce_plus_latency() {
        let mut c = controller();
        let started = Instant::now();
        c.dispatch(Action::TextChanged("hello".to_string()));

        assert!(matches!(c.next().await, Some(Action::DebounceElapsed(_))));
        assert!(matches!(c.next().await, Some(Action::SuggestionReady { .. })));

        assert!(started.elapsed() >= Duration::from_millis(800));
        assert!(started.elapsed() < Duration::from_millis(802));
        assert_eq!(c.app.writing.suggestion, "This is a suggestion for your input.");
        assert!(!c.app.writing.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_rewrite_surfaces_error() {
        let failing = Arc::new(FailingOperation::<RewriteRequest, String>::new(
            Duration::from_millis(800),
        ));
        let mut services = stock_services();
        services.rewrite = failing.clone();
        let mut c = Controller::new(test_app(), services, Duration::from_millis(300));
        c.app.writing.rewrite = "previous".to_string();

        c.dispatch(Action::RewriteRequested);
        assert!(c.app.writing.is_loading());
        assert!(matches!(c.next().await, Some(Action::RewriteReady { .. })));

        assert_eq!(failing.calls.load(Ordering::SeqCst), 1);
        assert!(!c.app.writing.is_loading());
        assert_eq!(c.app.writing.rewrite, "previous");
        assert!(!c.app.writing.is_result_visible);
        assert!(c.app.writing.rewrite_error.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_aborts_inflight_suggestion() {
        let counting = Arc::new(FailingOperation::<SuggestRequest, String>::new(
            Duration::from_millis(500),
        ));
        let mut services = stock_services();
        services.suggest = counting.clone();
        let mut c = Controller::new(test_app(), services, Duration::from_millis(300));

        c.dispatch(Action::TextChanged("h".to_string()));
        assert!(matches!(c.next().await, Some(Action::DebounceElapsed(_))));
        tokio::task::yield_now().await;
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);

        // New keystroke while the suggestion for "h" is in flight
        c.dispatch(Action::TextChanged("hi".to_string()));
        assert!(!c.app.writing.is_loading());

        // Past the point where the first suggestion would have failed
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(matches!(c.next().await, Some(Action::DebounceElapsed(_))));
        assert!(!c.drain(), "aborted suggestion must not deliver a result");
        assert!(c.app.writing.error().is_none());
        assert!(c.app.writing.is_suggestion_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tab_switch_cancels_translation() {
        let mut c = controller();
        c.dispatch(Action::SelectTab(Tab::Translation));
        c.dispatch(Action::SourceTextChanged("hello".to_string()));
        c.dispatch(Action::TranslateRequested);
        tokio::task::yield_now().await;
        assert_eq!(c.live_tasks(), 1);

        c.dispatch(Action::SelectTab(Tab::Writing));
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(c.live_tasks(), 0);
        assert!(!c.drain());
        assert!(c.app.translation.translated_text.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_stops_dispatch() {
        let mut c = controller();
        assert!(c.dispatch(Action::TextChanged("x".to_string())));
        assert!(!c.dispatch(Action::Quit));
    }
}
