//! Configuration management for meetcost.
//!
//! The configuration is a single JSON file in the application data
//! directory. Each section is optional; a missing section (or a missing
//! file) means "use the defaults", so a fresh install works without setup.
//!
//! ## Sections
//!
//! - **currency**: Symbol and ISO code used when displaying money
//! - **limits**: Maximum roster size and number of meetings kept in history
//! - **timer**: Refresh interval of the live display
//! - **rates**: Default role and per-role hourly rate overrides
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use meetcost::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("History keeps {} meetings", config.limits().max_history);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::history::DEFAULT_MAX_HISTORY;
use crate::libs::meeting::{RosterPolicy, DEFAULT_MAX_ATTENDEES};
use crate::libs::messages::Message;
use crate::libs::roles::{RateTable, Role, DEFAULT_ROLE};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default refresh interval of the live display, in milliseconds.
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 100;

/// Represents a configurable section during interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// How money is displayed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CurrencyConfig {
    /// Prefix placed before amounts, e.g. `$` or `€`.
    pub symbol: String,
    /// ISO 4217 code, informational only.
    pub code: String,
}

/// Upper bounds for the roster and the history.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LimitsConfig {
    /// Adding an attendee beyond this count is ignored.
    pub max_attendees: usize,
    /// Oldest meetings are evicted once history holds this many.
    pub max_history: usize,
}

/// Live display settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimerConfig {
    /// Minimum time between two redraws of the live display, in milliseconds.
    pub update_interval_ms: u64,
}

/// Hourly rate settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RatesConfig {
    /// Role used when an attendee is added without one.
    pub default_role: Role,
    /// Per-role hourly rates in cents that replace the built-in presets.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<Role, u64>,
}

/// Main configuration container.
///
/// `skip_serializing_if = "Option::is_none"` keeps unconfigured sections out
/// of the file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<LimitsConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<TimerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates: Option<RatesConfig>,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        CurrencyConfig {
            symbol: "$".to_string(),
            code: "USD".to_string(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        LimitsConfig {
            max_attendees: DEFAULT_MAX_ATTENDEES,
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig {
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
        }
    }
}

impl Default for RatesConfig {
    fn default() -> Self {
        RatesConfig {
            default_role: DEFAULT_ROLE,
            overrides: BTreeMap::new(),
        }
    }
}

impl TimerConfig {
    /// The refresh interval, never shorter than one millisecond.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms.max(1))
    }
}

impl Config {
    /// Default location of the configuration file.
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration from the data directory.
    ///
    /// A missing file yields the default configuration; a file that exists
    /// but can not be parsed is an error.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON to the data directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    pub fn currency(&self) -> CurrencyConfig {
        self.currency.clone().unwrap_or_default()
    }

    pub fn limits(&self) -> LimitsConfig {
        self.limits.clone().unwrap_or_default()
    }

    pub fn timer(&self) -> TimerConfig {
        self.timer.clone().unwrap_or_default()
    }

    pub fn rates(&self) -> RatesConfig {
        self.rates.clone().unwrap_or_default()
    }

    pub fn rate_table(&self) -> RateTable {
        let rates = self.rates();
        RateTable::new(rates.default_role, rates.overrides)
    }

    pub fn roster_policy(&self) -> RosterPolicy {
        RosterPolicy {
            rates: self.rate_table(),
            max_attendees: self.limits().max_attendees,
        }
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Starts from the existing configuration, lets the user pick the
    /// sections to edit and prompts for each field with the current value
    /// as default.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "currency".to_string(),
                name: Message::ConfigModuleCurrency.to_string(),
            },
            ConfigModule {
                key: "limits".to_string(),
                name: Message::ConfigModuleLimits.to_string(),
            },
            ConfigModule {
                key: "timer".to_string(),
                name: Message::ConfigModuleTimer.to_string(),
            },
            ConfigModule {
                key: "rates".to_string(),
                name: Message::ConfigModuleRates.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "currency" => {
                    let default = config.currency();
                    msg_print!(Message::ConfigModuleCurrency);
                    config.currency = Some(CurrencyConfig {
                        symbol: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCurrencySymbol.to_string())
                            .default(default.symbol)
                            .interact_text()?,
                        code: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCurrencyCode.to_string())
                            .default(default.code)
                            .interact_text()?,
                    });
                }
                "limits" => {
                    let default = config.limits();
                    msg_print!(Message::ConfigModuleLimits);
                    config.limits = Some(LimitsConfig {
                        max_attendees: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMaxAttendees.to_string())
                            .default(default.max_attendees)
                            .interact_text()?,
                        max_history: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMaxHistory.to_string())
                            .default(default.max_history)
                            .interact_text()?,
                    });
                }
                "timer" => {
                    let default = config.timer();
                    msg_print!(Message::ConfigModuleTimer);
                    config.timer = Some(TimerConfig {
                        update_interval_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptUpdateInterval.to_string())
                            .default(default.update_interval_ms)
                            .interact_text()?,
                    });
                }
                "rates" => {
                    let default = config.rates();
                    msg_print!(Message::ConfigModuleRates);
                    let roles: Vec<Role> = Role::all().filter(|r| *r != Role::Custom).collect();
                    let labels: Vec<&str> = roles.iter().map(|r| r.label()).collect();
                    let current = roles.iter().position(|r| *r == default.default_role).unwrap_or(0);
                    let choice = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultRole.to_string())
                        .items(&labels)
                        .default(current)
                        .interact()?;
                    config.rates = Some(RatesConfig {
                        default_role: roles[choice],
                        overrides: default.overrides,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
