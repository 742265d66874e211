use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::backend::GenerationClient;
use crate::config::Config;
use crate::ui::events::AppEvent;
use crate::ui::generator::{GeneratorIntent, GeneratorReducer, GeneratorState, RequestState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Generator screen state (MVI pattern).
    generator: GeneratorState,
    client: Arc<GenerationClient>,
    runtime: Handle,
    event_tx: Sender<AppEvent>,
    /// Advances on every tick; drives the loading spinner.
    tick: usize,
}

impl App {
    pub fn new(
        config: &Config,
        client: GenerationClient,
        runtime: Handle,
        event_tx: Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            generator: GeneratorState::with_defaults(&config.form),
            client: Arc::new(client),
            runtime,
            event_tx,
            tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn generator(&self) -> &GeneratorState {
        &self.generator
    }

    pub fn backend_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn tick_count(&self) -> usize {
        self.tick
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn dispatch(&mut self, intent: GeneratorIntent) {
        dispatch_mvi!(self, generator, GeneratorReducer, intent);
    }

    /// Submit the current form.
    ///
    /// The reducer decides the transition: invalid input lands in `Failed`
    /// with no network call, and a submission while a request is in flight
    /// leaves the state untouched. The HTTP task is spawned only when the
    /// transition actually entered `Loading`.
    pub fn submit(&mut self) {
        if self.generator.request.is_loading() {
            return;
        }

        self.dispatch(GeneratorIntent::Submit);
        if !self.generator.request.is_loading() {
            return;
        }

        // Validated above by the reducer; this captures the snapshot the
        // in-flight request operates on. Later edits do not affect it.
        let Some(request) = self.generator.form.validated() else {
            return;
        };

        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        self.runtime.spawn(async move {
            let outcome = match client.generate(&request).await {
                Ok(result) => Ok(result.draft),
                Err(err) => Err(err.user_message()),
            };
            // The UI thread may be gone during shutdown; nothing to do then.
            let _ = tx.send(AppEvent::GenerationComplete(outcome));
        });
    }

    pub fn on_generation_complete(&mut self, outcome: Result<String, String>) {
        if let Err(message) = &outcome {
            tracing::warn!(%message, "generation failed");
        }
        self.dispatch(GeneratorIntent::Complete(outcome));
    }

    /// True while the output panel should show the loading indicator.
    pub fn is_loading(&self) -> bool {
        matches!(self.generator.request, RequestState::Loading)
    }
}
