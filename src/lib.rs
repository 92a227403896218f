pub mod api;
pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod elapsed;
pub mod errors;
pub mod messages;
pub mod models;
pub mod ui;
pub mod widget;

pub use api::ApiClient;
pub use elapsed::{format_elapsed, growth_stage, ElapsedDisplay, ElapsedFrame, GrowthStage};
pub use widget::{Widget, WidgetView};
