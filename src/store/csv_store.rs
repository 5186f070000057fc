use crate::constants::DEFAULT_FLOOR;
use crate::error::{AppError, Result};
use crate::models::{Location, RouteEdge};
use crate::store::CampusStore;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

// ---------------------------------------------------------------------------
// Raw record types: string fields as they appear in the CSV, validated into
// the typed models before anything downstream sees them.
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawLocationRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    building: String,
    #[serde(default)]
    floor: String,
    #[serde(default)]
    accessible: String,
}

impl RawLocationRecord {
    fn into_location(self) -> Option<Location> {
        if self.name.is_empty() {
            tracing::warn!("Skipping location record with empty name");
            return None;
        }

        let floor = self.floor.trim().parse().unwrap_or_else(|_| {
            if !self.floor.is_empty() {
                tracing::warn!(
                    "Unparseable floor '{}' for location '{}', defaulting to {}",
                    self.floor,
                    self.name,
                    DEFAULT_FLOOR
                );
            }
            DEFAULT_FLOOR
        });

        Some(Location {
            name: self.name,
            building: self.building,
            floor,
            accessible: parse_bool(&self.accessible),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawRouteRecord {
    #[serde(default)]
    id: String,
    #[serde(default)]
    start_location: String,
    #[serde(default)]
    end_location: String,
    #[serde(default)]
    distance_m: String,
    #[serde(default)]
    accessible: String,
}

impl RawRouteRecord {
    /// A route with no usable distance cannot participate in shortest-path
    /// math, so it is dropped rather than given a substitute weight.
    fn into_route_edge(self) -> Option<RouteEdge> {
        if self.start_location.is_empty() || self.end_location.is_empty() {
            tracing::warn!(
                route_id = %self.id,
                "Skipping route record with empty endpoint"
            );
            return None;
        }

        let distance_m = match self.distance_m.trim().parse::<u32>() {
            Ok(d) => d,
            Err(_) => {
                tracing::warn!(
                    route_id = %self.id,
                    distance = %self.distance_m,
                    "Skipping route record with unparseable distance"
                );
                return None;
            }
        };

        Some(RouteEdge {
            id: self.id,
            start: self.start_location,
            end: self.end_location,
            distance_m,
            accessible: parse_bool(&self.accessible),
        })
    }
}

fn parse_bool(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("true")
}

// ---------------------------------------------------------------------------
// CSV-backed store
// ---------------------------------------------------------------------------

/// Campus store reading flat CSV files on every call.
///
/// File access is serialized through a single async mutex so a concurrent
/// rewrite of the files by an admin tool never interleaves with a read.
/// A missing file reads as an empty data set rather than an error.
pub struct CsvCampusStore {
    locations_csv: PathBuf,
    routes_csv: PathBuf,
    io_lock: Mutex<()>,
}

impl CsvCampusStore {
    pub fn new(locations_csv: PathBuf, routes_csv: PathBuf) -> Self {
        CsvCampusStore {
            locations_csv,
            routes_csv,
            io_lock: Mutex::new(()),
        }
    }

    async fn read_file(&self, path: &Path) -> Result<Option<String>> {
        let _guard = self.io_lock.lock().await;

        if !path.exists() {
            tracing::warn!(path = %path.display(), "Data file missing, treating as empty");
            return Ok(None);
        }

        tokio::fs::read_to_string(path)
            .await
            .map(Some)
            .map_err(|e| AppError::Store(format!("Failed to read {}: {}", path.display(), e)))
    }
}

#[async_trait]
impl CampusStore for CsvCampusStore {
    async fn locations(&self) -> Result<Vec<Location>> {
        let Some(contents) = self.read_file(&self.locations_csv).await? else {
            return Ok(Vec::new());
        };

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(contents.as_bytes());

        let mut locations = Vec::new();
        for record in reader.deserialize::<RawLocationRecord>() {
            match record {
                Ok(raw) => {
                    if let Some(location) = raw.into_location() {
                        locations.push(location);
                    }
                }
                Err(e) => {
                    tracing::warn!("Skipping malformed location record: {}", e);
                }
            }
        }

        Ok(locations)
    }

    async fn route_edges(&self) -> Result<Vec<RouteEdge>> {
        let Some(contents) = self.read_file(&self.routes_csv).await? else {
            return Ok(Vec::new());
        };

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(contents.as_bytes());

        let mut edges = Vec::new();
        for record in reader.deserialize::<RawRouteRecord>() {
            match record {
                Ok(raw) => {
                    if let Some(edge) = raw.into_route_edge() {
                        edges.push(edge);
                    }
                }
                Err(e) => {
                    tracing::warn!("Skipping malformed route record: {}", e);
                }
            }
        }

        Ok(edges)
    }
}
