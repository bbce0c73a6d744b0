use chrono::Utc;
use tracing::{debug, error, info, warn};

use super::events::{EventManager, UiEvent};
use super::render::Renderer;
use super::state::AppState;
use super::tabs::{Tab, TabController, TabError};
use super::view::ViewBinding;
use crate::api::{self, ResultSource};
use crate::models::ScreenerResult;

/// Message shown in place of the tables when the document cannot be loaded
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load screening results. Please try again later.";

/// Screener page controller.
///
/// Constructed once per page session with the view it renders into and the
/// source it loads from. The document is loaded at most once and never
/// modified afterwards.
pub struct ScreenerApp<V: ViewBinding, S: ResultSource> {
    view: V,
    source: S,
    renderer: Renderer,
    tabs: TabController,
    state: AppState,
    data: Option<ScreenerResult>,
}

impl<V: ViewBinding, S: ResultSource> ScreenerApp<V, S> {
    pub fn new(view: V, source: S, renderer: Renderer) -> Self {
        Self {
            view,
            source,
            renderer,
            tabs: TabController::new(),
            state: AppState::Idle,
            data: None,
        }
    }

    /// setup_tabs → load_data → render_all
    pub async fn init(&mut self) {
        self.setup_tabs();
        self.load_data().await;
        self.render_all();
    }

    pub fn setup_tabs(&mut self) {
        let bound = self.tabs.setup(&self.view);
        debug!("Tabs ready: {:?}", bound);
    }

    pub fn switch_tab(&mut self, name: &str) -> Result<Tab, TabError> {
        self.tabs.switch_tab(&mut self.view, name)
    }

    /// Fetch and parse the result document. Failures are logged and turned
    /// into the error display; they never propagate.
    pub async fn load_data(&mut self) -> Option<&ScreenerResult> {
        if self.data.is_some() {
            debug!("Result document already loaded");
            return self.data.as_ref();
        }

        let location = self.source.location();
        info!("Loading screening results from {}", location);
        self.state = AppState::Loading {
            location: location.clone(),
            started_at: Utc::now(),
        };

        match api::load_results(&self.source).await {
            Ok(result) => {
                info!(
                    "Loaded results last updated {} ({} CANSL stocks, {} signals)",
                    result.last_updated,
                    result.cansl_passed.len(),
                    result.turtle_signals.len()
                );
                self.state = AppState::Loaded {
                    location,
                    loaded_at: Utc::now(),
                };
                self.data = Some(result);
            }
            Err(e) => {
                error!("Error loading data: {}", e);
                self.state = AppState::Failed {
                    message: e.to_string(),
                };
                self.view.show_error(LOAD_ERROR_MESSAGE);
            }
        }

        self.data.as_ref()
    }

    /// Render header, tables and counts from the loaded document, or the
    /// error display when nothing was loaded
    pub fn render_all(&mut self) {
        match &self.data {
            Some(result) => self.renderer.render_all(result, &mut self.view),
            None => self.view.show_error(LOAD_ERROR_MESSAGE),
        }
    }

    /// Apply UI events in order until shutdown or until every sender is gone
    pub async fn run_event_loop(&mut self, events: &mut EventManager) {
        while let Some(event) = events.receive().await {
            match event {
                UiEvent::TabClicked(name) => {
                    if let Err(e) = self.switch_tab(&name) {
                        warn!("Ignoring tab click: {}", e);
                    }
                }
                UiEvent::Shutdown => break,
            }
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn data(&self) -> Option<&ScreenerResult> {
        self.data.as_ref()
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.tabs.active()
    }
}
