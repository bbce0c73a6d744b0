//! Screener page controller and the pieces it drives: tab switching,
//! table rendering, the view binding and the static page writer.

pub mod app;
pub mod escape;
pub mod events;
pub mod page;
pub mod render;
pub mod state;
pub mod tabs;
pub mod view;

pub use app::ScreenerApp;
pub use page::HtmlPage;
pub use render::{Renderer, SignalCounts};
pub use tabs::{Tab, TabController, TabError};
pub use view::{ElementId, MemoryView, ViewBinding};
