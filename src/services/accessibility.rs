use crate::constants::DEFAULT_FLOOR;
use crate::error::Result;
use crate::models::{BuildingAccessibility, Location, RoutePath};
use crate::services::route_planner::RoutePlanner;
use crate::store::CampusStore;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

/// Per-process lift operability table, keyed by building name.
///
/// Advisory only: a downed lift never removes an edge from the routing
/// graph, it only feeds warnings. One writer may update a single building's
/// flag while readers query concurrently; each entry is updated atomically
/// under the lock, with no ordering guarantee across buildings.
pub struct LiftStatusRegistry {
    status: RwLock<HashMap<String, bool>>,
}

impl LiftStatusRegistry {
    /// Registry covering the given buildings, all lifts operational.
    pub fn with_buildings<I>(buildings: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let status = buildings.into_iter().map(|b| (b, true)).collect();
        LiftStatusRegistry {
            status: RwLock::new(status),
        }
    }

    /// Registry seeded from the buildings present in location data.
    pub fn from_locations(locations: &[Location]) -> Self {
        Self::with_buildings(
            locations
                .iter()
                .filter(|loc| !loc.building.is_empty())
                .map(|loc| loc.building.clone()),
        )
    }

    pub fn snapshot(&self) -> HashMap<String, bool> {
        self.read_guard().clone()
    }

    /// Buildings absent from the registry read as operational: missing
    /// data is not an outage.
    pub fn is_operational(&self, building: &str) -> bool {
        self.read_guard().get(building).copied().unwrap_or(true)
    }

    /// Update one building's flag. Returns false for buildings the
    /// registry does not know, leaving the table untouched.
    pub fn set(&self, building: &str, operational: bool) -> bool {
        let mut status = self.status.write().unwrap_or_else(|e| e.into_inner());
        match status.get_mut(building) {
            Some(flag) => {
                *flag = operational;
                true
            }
            None => false,
        }
    }

    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, bool>> {
        self.status.read().unwrap_or_else(|e| e.into_inner())
    }
}

/// Accessibility overlay: accessible-only routing, lift status, and
/// warning generation for paths that cross problem spots.
#[derive(Clone)]
pub struct AccessibilityService {
    store: Arc<dyn CampusStore>,
    planner: RoutePlanner,
    lifts: Arc<LiftStatusRegistry>,
}

impl AccessibilityService {
    pub fn new(
        store: Arc<dyn CampusStore>,
        planner: RoutePlanner,
        lifts: Arc<LiftStatusRegistry>,
    ) -> Self {
        AccessibilityService {
            store,
            planner,
            lifts,
        }
    }

    /// Shortest path over the accessible-only graph. Edges and locations
    /// outside that sub-graph are simply unreachable; correctness falls out
    /// of graph construction, no post-filtering happens here.
    pub async fn accessible_path(&self, start: &str, end: &str) -> Result<Option<RoutePath>> {
        self.planner.shortest_path(start, end, true).await
    }

    pub fn lift_status(&self) -> HashMap<String, bool> {
        self.lifts.snapshot()
    }

    pub fn lift_status_for(&self, building: &str) -> bool {
        self.lifts.is_operational(building)
    }

    pub fn set_lift_status(&self, building: &str, operational: bool) -> bool {
        let updated = self.lifts.set(building, operational);
        if updated {
            tracing::info!(
                building = building,
                operational = operational,
                "Lift status updated"
            );
        } else {
            tracing::warn!(
                building = building,
                "Lift status update rejected for unknown building"
            );
        }
        updated
    }

    /// Accessibility summary for one building, or `None` when no locations
    /// carry that building name.
    pub async fn building_accessibility(
        &self,
        building: &str,
    ) -> Result<Option<BuildingAccessibility>> {
        let locations = self.store.locations().await?;
        let in_building: Vec<&Location> = locations
            .iter()
            .filter(|loc| loc.building == building)
            .collect();

        if in_building.is_empty() {
            return Ok(None);
        }

        let accessible_locations = in_building.iter().filter(|loc| loc.accessible).count();
        let percentage =
            (accessible_locations as f64 / in_building.len() as f64 * 1000.0).round() / 10.0;

        Ok(Some(BuildingAccessibility {
            building: building.to_string(),
            total_locations: in_building.len(),
            accessible_locations,
            lift_working: self.lifts.is_operational(building),
            accessibility_percentage: percentage,
        }))
    }

    /// True iff the path visits locations on more than one distinct floor.
    /// Locations missing from the table count as the default floor.
    pub async fn needs_lift(&self, path: &[String]) -> Result<bool> {
        if path.len() < 2 {
            return Ok(false);
        }

        let locations = self.location_index().await?;
        let floors: HashSet<i32> = path
            .iter()
            .map(|name| {
                locations
                    .get(name.as_str())
                    .map(|loc| loc.floor)
                    .unwrap_or(DEFAULT_FLOOR)
            })
            .collect();

        Ok(floors.len() > 1)
    }

    /// Warnings for every problem spot a path touches: locations not marked
    /// accessible (including locations the table does not know) and
    /// buildings whose lift is currently down. Duplicate messages are
    /// collapsed with set semantics, so ordering is not guaranteed.
    pub async fn accessibility_warnings(&self, path: &[String]) -> Result<Vec<String>> {
        let locations = self.location_index().await?;
        let mut warnings = HashSet::new();

        for name in path {
            let location = locations.get(name.as_str());

            if !location.map(|loc| loc.accessible).unwrap_or(false) {
                warnings.insert(format!("Warning: {} may not be wheelchair accessible", name));
            }

            if let Some(building) = location.map(|loc| loc.building.as_str()) {
                if !building.is_empty() && !self.lifts.is_operational(building) {
                    warnings.insert(format!(
                        "Warning: Lift in {} building is currently not working",
                        building
                    ));
                }
            }
        }

        Ok(warnings.into_iter().collect())
    }

    async fn location_index(&self) -> Result<HashMap<String, Location>> {
        let locations = self.store.locations().await?;
        Ok(locations
            .into_iter()
            .map(|loc| (loc.name.clone(), loc))
            .collect())
    }
}
