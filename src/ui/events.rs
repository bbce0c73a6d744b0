use anyhow::Result;
use tokio::sync::mpsc;

use super::tabs::Tab;

/// Interactions delivered to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A tab trigger was clicked; carries the trigger's tab-name marker
    TabClicked(String),
    Shutdown,
}

/// Event manager for handling all UI events
pub struct EventManager {
    pub event_sender: mpsc::Sender<UiEvent>,
    pub event_receiver: mpsc::Receiver<UiEvent>,
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EventManager {
    /// Create a new event manager
    pub fn new() -> Self {
        let (event_sender, event_receiver) = mpsc::channel::<UiEvent>(100);
        Self {
            event_sender,
            event_receiver,
        }
    }

    /// Handle for producers living elsewhere
    pub fn sender(&self) -> mpsc::Sender<UiEvent> {
        self.event_sender.clone()
    }

    /// Send an event
    pub async fn send_event(&self, event: UiEvent) -> Result<()> {
        self.event_sender.send(event).await?;
        Ok(())
    }

    /// Send a click on the trigger for `tab`
    pub async fn send_tab_click(&self, tab: Tab) -> Result<()> {
        self.send_event(UiEvent::TabClicked(tab.name().to_string())).await
    }

    pub async fn send_shutdown(&self) -> Result<()> {
        self.send_event(UiEvent::Shutdown).await
    }

    /// Try to receive an event (non-blocking)
    pub fn try_receive(&mut self) -> Option<UiEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Receive an event
    pub async fn receive(&mut self) -> Option<UiEvent> {
        self.event_receiver.recv().await
    }
}
