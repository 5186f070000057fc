// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use error::{AppError, Result};

// App state for sharing across the application
use services::accessibility::AccessibilityService;
use services::route_planner::RoutePlanner;
use std::sync::Arc;
use store::CampusStore;

pub struct AppState {
    pub store: Arc<dyn CampusStore>,
    pub planner: RoutePlanner,
    pub accessibility: AccessibilityService,
}
