use chrono_tz::Tz;
use serde::Deserialize;

#[derive(Deserialize, Clone, Default, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub debug: bool,
    pub scheduling: SchedulingSettings,
    pub storage: StorageSettings,
    pub store_api: StoreApiSettings,
}

impl Settings {
    pub fn base_settings() -> Self {
        Self {
            application: ApplicationSettings {
                max_log_files: 14,
                upcoming_days: 30,
            },
            scheduling: SchedulingSettings {
                reference_timezone: "America/New_York".to_string(),
                reference_timezone_label: "NYC".to_string(),
            },
            storage: StorageSettings {
                dir: "./storage".to_string(),
            },
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct ApplicationSettings {
    pub max_log_files: usize,
    pub upcoming_days: u32,
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct SchedulingSettings {
    /// IANA name of the zone store hours are written in.
    pub reference_timezone: String,
    /// Short name shown next to reference-zone times, e.g. "NYC".
    pub reference_timezone_label: String,
}

impl SchedulingSettings {
    pub fn reference_tz(&self) -> Result<Tz, String> {
        self.reference_timezone
            .parse::<Tz>()
            .map_err(|e| format!("Invalid REFERENCE_TIMEZONE: {}", e))
    }
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct StorageSettings {
    pub dir: String,
}

#[derive(Deserialize, Clone, Default)]
pub struct StoreApiSettings {
    pub base_url: String,
    pub token: Option<String>,
}

impl std::fmt::Debug for StoreApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreApiSettings")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

pub enum Environment {
    Testing,
    Development,
    Production,
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "testing" => Ok(Self::Testing),
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!("{} is not a supported environment.", other)),
        }
    }
}
