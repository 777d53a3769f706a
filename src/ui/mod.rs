// Module declarations
mod app;
pub mod dashboard;
pub mod navigation;
mod route;
// Re-exports for external use
pub use app::{App, UIConfig, run};
