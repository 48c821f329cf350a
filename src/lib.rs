pub mod app;
pub mod assets;
pub mod bucket;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod humidity;
pub mod minmax;
pub mod models;
pub mod projection;
pub mod reverse;
pub mod state;
pub mod trendline;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::{Args, Config};
pub use state::AppState;
pub use view::{build_view, build_view_from_path, DashboardView};
