use serde;
use toml;

/// Application configuration. Every section has defaults matching the
/// original hardcoded constants, so running without a config file tracks
/// the station over Indianapolis exactly like the upstream tool.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ApplicationConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub observer: ObserverConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub assets: AssetConfig,
}

impl ApplicationConfig {
    pub fn construct_from_path(
        path: &std::path::PathBuf,
    ) -> Result<ApplicationConfig, errors::ApplicationConfigError> {
        let string =
            std::fs::read_to_string(path).map_err(|error| errors::ApplicationConfigError::Io {
                source: error,
                path: path.clone(),
            })?;

        toml::from_str(&string).map_err(|error| errors::ApplicationConfigError::Parse {
            source: error,
            path: path.clone(),
        })
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: String::from("http://api.open-notify.org"),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        ObserverConfig {
            name: String::from("Indianapolis, IN"),
            longitude: -86.148003,
            latitude: 39.791,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 720.0,
            height: 360.0,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub map_image: std::path::PathBuf,
    pub station_icon: std::path::PathBuf,
    pub farewell_file: std::path::PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            map_image: std::path::PathBuf::from("assets/map.png"),
            station_icon: std::path::PathBuf::from("assets/iss.png"),
            farewell_file: std::path::PathBuf::from("poem.txt"),
        }
    }
}

pub mod errors {

    #[derive(Debug)]
    pub enum ApplicationConfigError {
        Parse {
            source: toml::de::Error,
            path: std::path::PathBuf,
        },
        Io {
            source: std::io::Error,
            path: std::path::PathBuf,
        },
    }

    impl std::fmt::Display for ApplicationConfigError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                ApplicationConfigError::Io {
                    source: error,
                    path,
                } => {
                    write!(
                        f,
                        "Failed to read config file '{}': {}",
                        path.display(),
                        error
                    )
                }
                ApplicationConfigError::Parse {
                    source: error,
                    path,
                } => {
                    write!(
                        f,
                        "Failed to parse config file '{}': {}",
                        path.display(),
                        error
                    )
                }
            }
        }
    }

    impl std::error::Error for ApplicationConfigError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                ApplicationConfigError::Io { source: error, .. } => Some(error),
                ApplicationConfigError::Parse { source: error, .. } => Some(error),
            }
        }
    }
}
