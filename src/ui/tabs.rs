use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use super::view::ViewBinding;

/// Result tabs shown on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tab {
    Cansl,
    Buy,
    Exit,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Cansl, Tab::Buy, Tab::Exit];

    /// Marker carried by the tab trigger (`data-tab`)
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Cansl => "cansl",
            Tab::Buy => "buy",
            Tab::Exit => "exit",
        }
    }

    /// Identifier of the panel shown for this tab
    pub fn panel_id(&self) -> String {
        format!("{}Tab", self.name())
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Cansl => "CANSLIM Passed",
            Tab::Buy => "Buy Signals",
            Tab::Exit => "Exit Signals",
        }
    }
}

impl FromStr for Tab {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.name() == s)
            .ok_or_else(|| TabError::Unknown(s.to_string()))
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TabError {
    #[error("unknown tab '{0}'")]
    Unknown(String),

    #[error("tab '{0}' has no trigger on this page")]
    Unbound(Tab),
}

/// Keeps exactly one tab trigger and one panel active
#[derive(Debug, Default)]
pub struct TabController {
    bound: Vec<Tab>,
    active: Option<Tab>,
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind every trigger the view exposes. Triggers with an unknown marker
    /// are skipped. Returns the bound tabs.
    pub fn setup<V: ViewBinding + ?Sized>(&mut self, view: &V) -> &[Tab] {
        self.bound.clear();
        for marker in view.tab_triggers() {
            match marker.parse::<Tab>() {
                Ok(tab) if !self.bound.contains(&tab) => self.bound.push(tab),
                Ok(_) => {}
                Err(e) => warn!("Ignoring tab trigger: {}", e),
            }
        }
        self.active = view.active_trigger().and_then(|m| m.parse().ok());
        debug!("Bound {} tab triggers", self.bound.len());
        &self.bound
    }

    /// Deactivate every trigger and panel on the page, then activate `name`.
    /// Unknown or unbound names leave the view untouched.
    pub fn switch_tab<V: ViewBinding + ?Sized>(&mut self, view: &mut V, name: &str) -> Result<Tab, TabError> {
        let tab: Tab = name.parse()?;
        if !self.bound.contains(&tab) {
            return Err(TabError::Unbound(tab));
        }

        for marker in view.tab_triggers() {
            view.set_trigger_active(&marker, false);
        }
        for panel in view.tab_panels() {
            view.set_panel_active(&panel, false);
        }
        view.set_trigger_active(tab.name(), true);
        view.set_panel_active(&tab.panel_id(), true);

        debug!("Switched to tab {}", tab);
        self.active = Some(tab);
        Ok(tab)
    }

    pub fn active(&self) -> Option<Tab> {
        self.active
    }
}
