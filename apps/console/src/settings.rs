use std::{collections::HashMap, fs, time::Duration};

/// Stub collaborator delays. Defaults match the stub's built-in timings;
/// `auth.toml` in the working directory and environment variables override
/// them, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub login_delay_ms: u64,
    pub registration_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            login_delay_ms: auth_core::LOGIN_ATTEMPT_DELAY.as_millis() as u64,
            registration_delay_ms: auth_core::REGISTRATION_ATTEMPT_DELAY.as_millis() as u64,
        }
    }
}

impl Settings {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn registration_delay(&self) -> Duration {
        Duration::from_millis(self.registration_delay_ms)
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("auth.toml") {
        apply_file_overrides(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("AUTH_LOGIN_DELAY_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.login_delay_ms = parsed;
        }
    }
    if let Ok(v) = std::env::var("AUTH_REGISTRATION_DELAY_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.registration_delay_ms = parsed;
        }
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, u64>>(raw) {
        if let Some(v) = file_cfg.get("login_delay_ms") {
            settings.login_delay_ms = *v;
        }
        if let Some(v) = file_cfg.get("registration_delay_ms") {
            settings.registration_delay_ms = *v;
        }
    }
}
