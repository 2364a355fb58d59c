//! CLI command implementations

pub mod browse;
pub mod routes;
pub mod show;

pub use browse::browse_command;
pub use routes::routes_command;
pub use show::show_command;
