pub mod catalog;
pub mod config;
pub mod interactive;
pub mod schemas;
pub mod session;
pub mod telemetry;

pub use catalog::{LatencyIndex, SearchIndex, StaticCatalog, format_search_result, open_index};
pub use config::WidgetOptions;
pub use schemas::{Category, SearchResult};
pub use session::{Role, RouteGuard, Session, User};
