use contracts::dashboards::d400_catch_report::{EfficiencyThresholds, ReportPeriod};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Average catch per trip (kg) from which a vessel is labelled "Tinggi"
    pub efficiency_high: f64,
    /// Average catch per trip (kg) from which a vessel is labelled "Sedang"
    pub efficiency_medium: f64,
    pub default_period: ReportPeriod,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let thresholds = EfficiencyThresholds::default();
        Self {
            efficiency_high: thresholds.high,
            efficiency_medium: thresholds.medium,
            default_period: ReportPeriod::Quarterly,
        }
    }
}

impl ReportConfig {
    pub fn thresholds(&self) -> EfficiencyThresholds {
        EfficiencyThresholds {
            high: self.efficiency_high,
            medium: self.efficiency_medium,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub recent_logbooks_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_logbooks_limit: 3,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    pub directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: "exports".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[report]
efficiency_high = 130.0
efficiency_medium = 110.0
default_period = "quarterly"

[dashboard]
recent_logbooks_limit = 3

[export]
directory = "exports"
"#;

/// Parse and validate configuration text
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config
        .report
        .thresholds()
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid [report] section: {}", e))?;
    Ok(config)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Get the export directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_export_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.export.directory);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }

    dir.to_path_buf()
}
