use crate::constants::*;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Locations CSV (name, building, floor, accessible).
    pub locations_csv: PathBuf,
    /// Routes CSV (id, start_location, end_location, distance_m, accessible).
    pub routes_csv: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()));

        // Full-path overrides win over DATA_DIR + default file name
        let locations_csv = env::var("LOCATIONS_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join(DEFAULT_LOCATIONS_FILE));
        let routes_csv = env::var("ROUTES_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join(DEFAULT_ROUTES_FILE));

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            locations_csv,
            routes_csv,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_address() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            locations_csv: PathBuf::from("data/locations.csv"),
            routes_csv: PathBuf::from("data/routes.csv"),
        };
        assert_eq!(config.server_address(), "127.0.0.1:8080");
    }
}
