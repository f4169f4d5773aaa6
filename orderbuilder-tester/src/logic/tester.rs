use colored::Colorize;
use orderbuilder_catalog::{CatalogAssets, VendorCatalog};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::harness::SelectorHarness;
use super::scenarios::Scenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub vendor_id: String,
    pub passed: bool,
    /// Host callbacks the scenario triggered.
    pub callbacks: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

pub struct LogicTester<'a> {
    assets: &'a CatalogAssets,
    verbose: bool,
}

impl<'a> LogicTester<'a> {
    pub const fn new(assets: &'a CatalogAssets, verbose: bool) -> Self {
        Self { assets, verbose }
    }

    pub fn run_scenario(&self, scenario: &Scenario, vendors: &[&VendorCatalog]) -> Vec<ScenarioResult> {
        vendors
            .iter()
            .map(|vendor| self.run_single_scenario(scenario, vendor))
            .collect()
    }

    fn run_single_scenario(&self, scenario: &Scenario, vendor: &VendorCatalog) -> ScenarioResult {
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} (vendor: {})",
                scenario.key.bright_white(),
                vendor.vendor_id
            );
        }

        let start = Instant::now();
        let mut harness = SelectorHarness::new(self.assets, vendor);
        let outcome = (scenario.run)(&mut harness);
        let duration = start.elapsed();

        let failures = match outcome {
            Ok(()) => Vec::new(),
            Err(err) => {
                log::warn!("{} failed for {}: {err:#}", scenario.key, vendor.vendor_id);
                vec![format!("{err:#}")]
            }
        };

        if self.verbose {
            for record in harness.callbacks() {
                println!("   ↳ {record:?}");
            }
        }

        ScenarioResult {
            scenario_name: scenario.key.to_string(),
            vendor_id: vendor.vendor_id.clone(),
            passed: failures.is_empty(),
            callbacks: harness.callbacks().len(),
            failures,
            duration,
        }
    }

    /// Failed result for a scenario name nobody registered.
    pub fn unknown_scenario(name: &str) -> ScenarioResult {
        ScenarioResult {
            scenario_name: name.to_string(),
            vendor_id: String::new(),
            passed: false,
            callbacks: 0,
            failures: vec![format!("Unknown scenario: {name}")],
            duration: Duration::ZERO,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        u64::try_from(duration.as_micros())
            .unwrap_or(u64::MAX)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Duration::from_micros(u64::deserialize(deserializer)?))
    }
}
