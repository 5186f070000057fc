//! Stable application-wide constants.
//!
//! Values here are structural invariants, algorithm bounds, and default
//! fallbacks for env-var-based configuration. They should rarely change.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Data file defaults (used when env vars are absent) ---

/// Default directory holding the campus CSV files.
pub const DEFAULT_DATA_DIR: &str = "data";
/// Default locations file name inside the data directory.
pub const DEFAULT_LOCATIONS_FILE: &str = "locations.csv";
/// Default routes file name inside the data directory.
pub const DEFAULT_ROUTES_FILE: &str = "routes.csv";

// --- Routing engine structural limits ---

/// Floor assigned to locations whose floor field is missing or unparseable.
pub const DEFAULT_FLOOR: i32 = 1;
/// Number of alternative routes returned when a request does not ask for a
/// specific count.
pub const DEFAULT_ALTERNATIVES: usize = 2;
/// Hard upper bound on alternative routes returned, regardless of user
/// request. The diversified search is combinatorial, so large counts are
/// never honored.
pub const MAX_ALTERNATIVES_CLAMP: usize = 5;
/// Cap on total frontier pops during alternative-route search. Per-branch
/// edge sets let the frontier grow combinatorially on dense graphs before
/// `count` distinct paths complete; the cap bounds memory and time at the
/// cost of possibly returning fewer alternatives. Known scaling limit of
/// the diversified search, not a correctness issue.
pub const MAX_FRONTIER_EXPANSIONS: usize = 50_000;
