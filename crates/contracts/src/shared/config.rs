use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub plans: PlanLimits,
    pub search: SearchConfig,
    pub timing: TimingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionConfig {
    /// Credits granted to a freshly created session.
    pub starting_credits: u32,
    pub referral_prefix: String,
    /// Phone number that logs in with the admin role.
    pub admin_phone: String,
    /// Prefilled on the login form.
    pub default_phone: String,
}

/// Connected GSTIN ceilings. CA is unlimited.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct PlanLimits {
    pub individual_gstins: usize,
    pub business_gstins: usize,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub max_results: usize,
}

/// Delays of the simulated operations, in milliseconds.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    pub report_ms: u32,
    pub report_message_ms: u32,
    pub export_ms: u32,
    pub ticket_ms: u32,
    pub otp_redirect_ms: u32,
    pub copied_reset_ms: u32,
    pub toast_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[session]
starting_credits = 5
referral_prefix = "PIN-"
admin_phone = "9999999999"
default_phone = "9999999999"

[plans]
individual_gstins = 1
business_gstins = 5

[search]
max_results = 8

[timing]
report_ms = 2000
report_message_ms = 3000
export_ms = 1500
ticket_ms = 1500
otp_redirect_ms = 1000
copied_reset_ms = 2000
toast_ms = 3000
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            plans: PlanLimits {
                individual_gstins: 1,
                business_gstins: 5,
            },
            search: SearchConfig { max_results: 8 },
            timing: TimingConfig {
                report_ms: 2000,
                report_message_ms: 3000,
                export_ms: 1500,
                ticket_ms: 1500,
                otp_redirect_ms: 1000,
                copied_reset_ms: 2000,
                toast_ms: 3000,
            },
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_credits: 5,
            referral_prefix: "PIN-".to_string(),
            admin_phone: "9999999999".to_string(),
            default_phone: "9999999999".to_string(),
        }
    }
}

/// Load configuration
///
/// Search order:
/// 1. An override document (the frontend reads it from local storage)
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    if let Some(contents) = override_toml {
        match toml::from_str::<AppConfig>(contents) {
            Ok(config) => {
                log::info!("Using configuration override");
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring invalid configuration override: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    let config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), AppConfig::default());
    }

    #[test]
    fn test_override_is_used() {
        let custom = DEFAULT_CONFIG.replace("starting_credits = 5", "starting_credits = 12");
        let config = load_config(Some(&custom)).unwrap();
        assert_eq!(config.session.starting_credits, 12);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = load_config(Some("[session]\nstarting_credits = \"many\"")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
