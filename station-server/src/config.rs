//! Server configuration.
//!
//! Everything has a default; `WEATHER_*` environment variables override it.

use std::env::VarError;
use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::FixedOffset;

use crate::deeplink::DEFAULT_SCHEME;
use crate::domain::{GeoPoint, StationId};
use crate::format::{FormatConfig, NumberFormat};
use crate::screens::WidgetConfig;
use crate::selection::DEFAULT_SELECTION_FILE;
use crate::source::DEFAULT_STATIONS_FILE;

pub const BIND_ADDR_VAR: &str = "WEATHER_BIND_ADDR";
pub const DEEPLINK_SCHEME_VAR: &str = "WEATHER_DEEPLINK_SCHEME";
pub const STATIONS_FILE_VAR: &str = "WEATHER_STATIONS_FILE";
pub const SELECTION_FILE_VAR: &str = "WEATHER_SELECTION_FILE";
pub const DEFAULT_STATION_VAR: &str = "WEATHER_DEFAULT_STATION";
pub const DEFAULT_LAT_VAR: &str = "WEATHER_DEFAULT_LAT";
pub const DEFAULT_LON_VAR: &str = "WEATHER_DEFAULT_LON";
pub const WIDGET_MAX_ITEMS_VAR: &str = "WEATHER_WIDGET_MAX_ITEMS";
pub const WIDGET_EXTENDED_VAR: &str = "WEATHER_WIDGET_EXTENDED";
pub const UTC_OFFSET_VAR: &str = "WEATHER_UTC_OFFSET_SECS";
pub const STATIC_DIR_VAR: &str = "WEATHER_STATIC_DIR";

/// Central European Time.
const DEFAULT_UTC_OFFSET_SECS: i32 = 3600;

/// A configuration value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },

    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime configuration, passed explicitly to whatever needs it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// URL scheme accepted by the deeplink parser.
    pub deeplink_scheme: String,
    /// JSON dump of the station feed.
    pub stations_file: PathBuf,
    /// Where the pinned station is persisted.
    pub selection_file: PathBuf,
    /// Stylesheets and other assets served under `/static`.
    pub static_dir: PathBuf,
    /// Station shown when nothing is requested or pinned.
    pub default_station: Option<StationId>,
    /// Reference point when the request carries no location.
    pub default_location: GeoPoint,
    pub widget: WidgetConfig,
    pub format: FormatConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            deeplink_scheme: DEFAULT_SCHEME.to_string(),
            stations_file: PathBuf::from(DEFAULT_STATIONS_FILE),
            selection_file: PathBuf::from(DEFAULT_SELECTION_FILE),
            static_dir: PathBuf::from("static"),
            default_station: None,
            default_location: GeoPoint::SOLINGEN,
            widget: WidgetConfig::default(),
            format: FormatConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| match std::env::var(var) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
        })
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<Option<String>, ConfigError>,
    {
        let get = |var: &'static str| -> Result<Option<String>, ConfigError> {
            Ok(lookup(var)?
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()))
        };

        let mut config = Self::default();

        if let Some(value) = get(BIND_ADDR_VAR)? {
            config.bind_addr = parse(BIND_ADDR_VAR, value)?;
        }
        if let Some(value) = get(DEEPLINK_SCHEME_VAR)? {
            config.deeplink_scheme = value;
        }
        if let Some(value) = get(STATIONS_FILE_VAR)? {
            config.stations_file = PathBuf::from(value);
        }
        if let Some(value) = get(SELECTION_FILE_VAR)? {
            config.selection_file = PathBuf::from(value);
        }
        if let Some(value) = get(STATIC_DIR_VAR)? {
            config.static_dir = PathBuf::from(value);
        }
        if let Some(value) = get(DEFAULT_STATION_VAR)? {
            let id = StationId::parse(&value).map_err(|e| invalid(DEFAULT_STATION_VAR, &value, e))?;
            config.default_station = Some(id);
        }

        let lat = get(DEFAULT_LAT_VAR)?;
        let lon = get(DEFAULT_LON_VAR)?;
        if lat.is_some() || lon.is_some() {
            let latitude = match lat {
                Some(value) => parse(DEFAULT_LAT_VAR, value)?,
                None => config.default_location.latitude(),
            };
            let longitude = match lon {
                Some(value) => parse(DEFAULT_LON_VAR, value)?,
                None => config.default_location.longitude(),
            };
            config.default_location = GeoPoint::new(latitude, longitude).map_err(|e| {
                invalid(DEFAULT_LAT_VAR, &format!("{latitude}, {longitude}"), e)
            })?;
        }

        if let Some(value) = get(WIDGET_MAX_ITEMS_VAR)? {
            let max_items: usize = parse(WIDGET_MAX_ITEMS_VAR, value.clone())?;
            if max_items == 0 {
                return Err(invalid(WIDGET_MAX_ITEMS_VAR, &value, "must be at least 1"));
            }
            config.widget.max_items = max_items;
        }
        if let Some(value) = get(WIDGET_EXTENDED_VAR)? {
            config.widget.allow_extended_layout = parse_bool(WIDGET_EXTENDED_VAR, &value)?;
        }

        let offset_secs = match get(UTC_OFFSET_VAR)? {
            Some(value) => parse(UTC_OFFSET_VAR, value)?,
            None => DEFAULT_UTC_OFFSET_SECS,
        };
        let utc_offset = FixedOffset::east_opt(offset_secs)
            .ok_or_else(|| invalid(UTC_OFFSET_VAR, &offset_secs.to_string(), "out of range"))?;
        config.format = FormatConfig::new(NumberFormat::german(), utc_offset);

        Ok(config)
    }
}

fn invalid(var: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: ToString,
{
    value.parse().map_err(|e: T::Err| invalid(var, &value, e))
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(var, value, "expected true or false")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&'static str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<&str, String> = vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        AppConfig::from_lookup(|var| Ok(vars.get(var).cloned()))
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.deeplink_scheme, "solingen");
        assert_eq!(config.stations_file, PathBuf::from("stations.json"));
        assert_eq!(config.selection_file, PathBuf::from("selected_station.json"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.default_station, None);
        assert_eq!(config.default_location, GeoPoint::SOLINGEN);
        assert_eq!(config.widget, WidgetConfig::default());
        assert_eq!(config.format.utc_offset.local_minus_utc(), 3600);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (DEEPLINK_SCHEME_VAR, "herne"),
            (DEFAULT_STATION_VAR, " O9ukYZqbSE "),
            (DEFAULT_LAT_VAR, "51.5"),
            (WIDGET_MAX_ITEMS_VAR, "5"),
            (WIDGET_EXTENDED_VAR, "TRUE"),
            (UTC_OFFSET_VAR, "7200"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.deeplink_scheme, "herne");
        assert_eq!(
            config.default_station,
            Some(StationId::parse("O9ukYZqbSE").unwrap())
        );
        assert_eq!(config.default_location.latitude(), 51.5);
        assert_eq!(config.default_location.longitude(), 7.0671);
        assert_eq!(config.widget.max_items, 5);
        assert!(config.widget.allow_extended_layout);
        assert_eq!(config.format.utc_offset.local_minus_utc(), 7200);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = config(&[(BIND_ADDR_VAR, "  "), (DEFAULT_STATION_VAR, "")]).unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.default_station, None);
    }

    #[test]
    fn invalid_values() {
        let err = config(&[(BIND_ADDR_VAR, "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: BIND_ADDR_VAR, .. }));

        let err = config(&[(DEFAULT_LAT_VAR, "95")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: DEFAULT_LAT_VAR, .. }));

        let err = config(&[(WIDGET_MAX_ITEMS_VAR, "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: WIDGET_MAX_ITEMS_VAR, .. }));

        let err = config(&[(WIDGET_EXTENDED_VAR, "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: WIDGET_EXTENDED_VAR, .. }));

        let err = config(&[(UTC_OFFSET_VAR, "100000")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: UTC_OFFSET_VAR, .. }));
    }

    #[test]
    fn lookup_errors_propagate() {
        let err = AppConfig::from_lookup(|var| Err(ConfigError::NotUnicode { var })).unwrap_err();
        assert!(matches!(err, ConfigError::NotUnicode { .. }));
    }
}
