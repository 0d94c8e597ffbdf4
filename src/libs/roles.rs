//! Attendee roles and their preset hourly rates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    JuniorEngineer,
    SeniorEngineer,
    EngineeringManager,
    ProductManager,
    Designer,
    Director,
    Vp,
    CSuite,
    Custom,
}

/// A role together with its display label and preset rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePreset {
    pub role: Role,
    pub label: &'static str,
    pub hourly_rate_cents: u64,
}

pub const DEFAULT_ROLE: Role = Role::SeniorEngineer;

pub const ROLE_PRESETS: [RolePreset; 9] = [
    RolePreset { role: Role::JuniorEngineer, label: "Junior Engineer", hourly_rate_cents: 7500 },
    RolePreset { role: Role::SeniorEngineer, label: "Senior Engineer", hourly_rate_cents: 9500 },
    RolePreset { role: Role::EngineeringManager, label: "Engineering Manager", hourly_rate_cents: 12000 },
    RolePreset { role: Role::ProductManager, label: "Product Manager", hourly_rate_cents: 11000 },
    RolePreset { role: Role::Designer, label: "Designer", hourly_rate_cents: 8500 },
    RolePreset { role: Role::Director, label: "Director", hourly_rate_cents: 15000 },
    RolePreset { role: Role::Vp, label: "VP", hourly_rate_cents: 20000 },
    RolePreset { role: Role::CSuite, label: "C-Suite", hourly_rate_cents: 35000 },
    RolePreset { role: Role::Custom, label: "Custom", hourly_rate_cents: 0 },
];

impl Role {
    pub fn preset(self) -> &'static RolePreset {
        // Every variant has exactly one entry in ROLE_PRESETS.
        ROLE_PRESETS.iter().find(|p| p.role == self).unwrap_or(&ROLE_PRESETS[1])
    }

    pub fn label(self) -> &'static str {
        self.preset().label
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::JuniorEngineer => "junior_engineer",
            Role::SeniorEngineer => "senior_engineer",
            Role::EngineeringManager => "engineering_manager",
            Role::ProductManager => "product_manager",
            Role::Designer => "designer",
            Role::Director => "director",
            Role::Vp => "vp",
            Role::CSuite => "c_suite",
            Role::Custom => "custom",
        }
    }

    pub fn all() -> impl Iterator<Item = Role> {
        ROLE_PRESETS.iter().map(|p| p.role)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Role::all().find(|role| role.as_str() == normalized).ok_or_else(|| s.to_string())
    }
}

/// Resolves hourly rates for roles, layering configured overrides on the presets.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    default_role: Option<Role>,
    overrides: BTreeMap<Role, u64>,
}

impl RateTable {
    pub fn new(default_role: Role, overrides: BTreeMap<Role, u64>) -> Self {
        Self {
            default_role: Some(default_role),
            overrides,
        }
    }

    pub fn default_role(&self) -> Role {
        self.default_role.unwrap_or(DEFAULT_ROLE)
    }

    /// Rate for `role`; a custom role with an explicit rate uses that rate.
    ///
    /// Returns `None` only for the custom role without a rate.
    pub fn rate_for(&self, role: Role, custom_rate: Option<u64>) -> Option<u64> {
        match (role, custom_rate) {
            (Role::Custom, Some(rate)) => Some(rate),
            (Role::Custom, None) => None,
            (role, _) => Some(self.overrides.get(&role).copied().unwrap_or_else(|| role.preset().hourly_rate_cents)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_role_names_loosely() {
        assert_eq!("senior_engineer".parse::<Role>(), Ok(Role::SeniorEngineer));
        assert_eq!("Product Manager".parse::<Role>(), Ok(Role::ProductManager));
        assert_eq!("c-suite".parse::<Role>(), Ok(Role::CSuite));
        assert!("intern".parse::<Role>().is_err());
    }

    #[test]
    fn overrides_replace_presets() {
        let mut overrides = BTreeMap::new();
        overrides.insert(Role::Designer, 9000);
        let table = RateTable::new(Role::Designer, overrides);

        assert_eq!(table.rate_for(Role::Designer, None), Some(9000));
        assert_eq!(table.rate_for(Role::Vp, None), Some(20000));
        assert_eq!(table.rate_for(Role::Custom, Some(4200)), Some(4200));
        assert_eq!(table.rate_for(Role::Custom, None), None);
        assert_eq!(table.default_role(), Role::Designer);
    }
}
