use chrono::{DateTime, Utc};

/// Lifecycle of the single result document load
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Idle,
    Loading { location: String, started_at: DateTime<Utc> },
    Loaded { location: String, loaded_at: DateTime<Utc> },
    Failed { message: String },
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Idle
    }
}

impl AppState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, AppState::Loaded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, AppState::Failed { .. })
    }

    /// Get the current status text for display
    pub fn status_text(&self) -> String {
        match self {
            AppState::Idle => "Ready".to_string(),
            AppState::Loading { location, started_at } => {
                let duration = Utc::now() - *started_at;
                format!("Loading {}: {}s", location, duration.num_seconds())
            }
            AppState::Loaded { location, loaded_at } => {
                format!("Loaded {} at {}", location, loaded_at.format("%Y-%m-%d %H:%M:%S UTC"))
            }
            AppState::Failed { message } => format!("Error: {}", message),
        }
    }
}
