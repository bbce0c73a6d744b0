use std::collections::BTreeMap;

/// Elements the controller writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    LastUpdated,
    CanslCount,
    BuyCount,
    ExitCount,
    CanslTableBody,
    BuyTableBody,
    ExitTableBody,
}

impl ElementId {
    /// Document id of the element
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::LastUpdated => "lastUpdated",
            ElementId::CanslCount => "canslCount",
            ElementId::BuyCount => "buyCount",
            ElementId::ExitCount => "exitCount",
            ElementId::CanslTableBody => "canslTableBody",
            ElementId::BuyTableBody => "buyTableBody",
            ElementId::ExitTableBody => "exitTableBody",
        }
    }
}

/// Contract between the controller and whatever document it renders into.
///
/// `set_text` content is literal text; `set_html` content is markup the
/// caller has already escaped.
pub trait ViewBinding {
    fn set_text(&mut self, element: ElementId, text: &str);

    fn set_html(&mut self, element: ElementId, html: &str);

    /// Tab-name markers of every tab trigger, in document order
    fn tab_triggers(&self) -> Vec<String>;

    /// Identifiers of every tab panel, in document order
    fn tab_panels(&self) -> Vec<String>;

    /// Marker of the trigger currently marked active, if any
    fn active_trigger(&self) -> Option<String>;

    fn set_trigger_active(&mut self, tab: &str, active: bool);

    fn set_panel_active(&mut self, panel_id: &str, active: bool);

    /// Replace the page content with an error display
    fn show_error(&mut self, message: &str);
}

/// Content written into an element
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    Html(String),
}

/// In-memory document: the binary renders into it and serialises it as a
/// static page, tests inspect it directly
#[derive(Debug, Clone)]
pub struct MemoryView {
    elements: BTreeMap<ElementId, Content>,
    triggers: Vec<(String, bool)>,
    panels: Vec<(String, bool)>,
    error: Option<String>,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::with_triggers(&["cansl", "buy", "exit"])
    }
}

impl MemoryView {
    /// Document with one trigger and one panel per marker. The first one
    /// starts active, as in the page markup.
    pub fn with_triggers(markers: &[&str]) -> Self {
        let triggers = markers
            .iter()
            .enumerate()
            .map(|(i, m)| (m.to_string(), i == 0))
            .collect();
        let mut panels: Vec<(String, bool)> = Vec::new();
        for (i, m) in markers.iter().enumerate() {
            let id = format!("{}Tab", m);
            if !panels.iter().any(|(p, _)| *p == id) {
                panels.push((id, i == 0));
            }
        }

        Self {
            elements: BTreeMap::new(),
            triggers,
            panels,
            error: None,
        }
    }

    pub fn content(&self, element: ElementId) -> Option<&Content> {
        self.elements.get(&element)
    }

    /// Text of an element set through `set_text`
    pub fn text(&self, element: ElementId) -> Option<&str> {
        match self.elements.get(&element) {
            Some(Content::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Markup of an element set through `set_html`
    pub fn html(&self, element: ElementId) -> Option<&str> {
        match self.elements.get(&element) {
            Some(Content::Html(html)) => Some(html),
            _ => None,
        }
    }

    pub fn triggers(&self) -> &[(String, bool)] {
        &self.triggers
    }

    pub fn panels(&self) -> &[(String, bool)] {
        &self.panels
    }

    pub fn active_triggers(&self) -> Vec<&str> {
        self.triggers.iter().filter(|(_, a)| *a).map(|(m, _)| m.as_str()).collect()
    }

    pub fn active_panels(&self) -> Vec<&str> {
        self.panels.iter().filter(|(_, a)| *a).map(|(p, _)| p.as_str()).collect()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True once any table body has been written
    pub fn has_tables(&self) -> bool {
        [ElementId::CanslTableBody, ElementId::BuyTableBody, ElementId::ExitTableBody]
            .iter()
            .any(|id| self.elements.contains_key(id))
    }
}

impl ViewBinding for MemoryView {
    fn set_text(&mut self, element: ElementId, text: &str) {
        self.elements.insert(element, Content::Text(text.to_string()));
    }

    fn set_html(&mut self, element: ElementId, html: &str) {
        self.elements.insert(element, Content::Html(html.to_string()));
    }

    fn tab_triggers(&self) -> Vec<String> {
        self.triggers.iter().map(|(m, _)| m.clone()).collect()
    }

    fn tab_panels(&self) -> Vec<String> {
        self.panels.iter().map(|(p, _)| p.clone()).collect()
    }

    fn active_trigger(&self) -> Option<String> {
        self.triggers.iter().find(|(_, a)| *a).map(|(m, _)| m.clone())
    }

    fn set_trigger_active(&mut self, tab: &str, active: bool) {
        for (marker, state) in self.triggers.iter_mut() {
            if marker == tab {
                *state = active;
            }
        }
    }

    fn set_panel_active(&mut self, panel_id: &str, active: bool) {
        for (id, state) in self.panels.iter_mut() {
            if id == panel_id {
                *state = active;
            }
        }
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}
