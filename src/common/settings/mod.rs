use std::env;

use crate::settings::types::{
    ApplicationSettings, Environment, SchedulingSettings, Settings, StorageSettings,
    StoreApiSettings,
};

pub mod types;

pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    dotenvy::from_filename(env_file_name)
        .map_err(|e| format!("Failed to fetch env file: {}", e.to_string()))?;

    match Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
    {
        Ok(env) => match env {
            Environment::Testing => merge_env(get_testing_settings()),
            Environment::Development => merge_env(get_development_settings()),
            Environment::Production => merge_env(get_production_settings()),
        },
        Err(e) => return Err(format!("Failed to parse APP_ENVIRONMENT: {}", e)),
    }
}

fn get_testing_settings() -> Settings {
    let b = Settings::base_settings();
    Settings {
        debug: true,
        storage: StorageSettings {
            dir: env::temp_dir()
                .join("store_scheduler")
                .to_string_lossy()
                .into_owned(),
        },
        ..b
    }
}

fn get_development_settings() -> Settings {
    let b = Settings::base_settings();
    Settings { debug: true, ..b }
}

fn get_production_settings() -> Settings {
    let b = Settings::base_settings();
    Settings {
        debug: false,
        application: ApplicationSettings {
            max_log_files: 30,
            ..b.application
        },
        ..b
    }
}

fn merge_env(s: Settings) -> Result<Settings, String> {
    let settings = Settings {
        application: ApplicationSettings {
            max_log_files: match env::var("MAX_LOG_FILES") {
                Ok(value) => value.parse::<usize>().map_err(|e| e.to_string())?,
                Err(_) => s.application.max_log_files,
            },
            upcoming_days: match env::var("UPCOMING_DAYS") {
                Ok(value) => value.parse::<u32>().map_err(|e| e.to_string())?,
                Err(_) => s.application.upcoming_days,
            },
        },
        debug: match env::var("APP_DEBUG") {
            Ok(debug) => &debug == "true",
            Err(_) => s.debug,
        },
        scheduling: SchedulingSettings {
            reference_timezone: env::var("REFERENCE_TIMEZONE")
                .unwrap_or(s.scheduling.reference_timezone),
            reference_timezone_label: env::var("REFERENCE_TIMEZONE_LABEL")
                .unwrap_or(s.scheduling.reference_timezone_label),
        },
        storage: StorageSettings {
            dir: env::var("STORAGE_DIR").unwrap_or(s.storage.dir),
        },
        store_api: StoreApiSettings {
            base_url: get_env_var("STORE_API_BASE_URL")?,
            token: env::var("STORE_API_TOKEN").ok().filter(|token| !token.is_empty()),
        },
    };
    settings.scheduling.reference_tz()?;
    Ok(settings)
}

fn get_env_var(key: &str) -> Result<String, String> {
    env::var(key).map_err(|e| format!("{}: {}", key, e))
}
