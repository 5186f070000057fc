pub mod location;
pub mod route;

pub use location::{BuildingAccessibility, Location};
pub use route::{NavigateRequest, NavigateResponse, RouteEdge, RoutePath, RouteSummary};
