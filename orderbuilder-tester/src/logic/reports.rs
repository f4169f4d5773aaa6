use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::ScenarioResult;

fn tally(results: &[ScenarioResult]) -> (usize, usize, f64) {
    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    #[allow(clippy::cast_precision_loss)]
    let success_rate = if total == 0 {
        0.0
    } else {
        (passed as f64 / total as f64) * 100.0
    };
    (total, passed, success_rate)
}

fn label(result: &ScenarioResult) -> String {
    if result.vendor_id.is_empty() {
        result.scenario_name.clone()
    } else {
        format!("{} [{}]", result.scenario_name, result.vendor_id)
    }
}

pub fn generate_console_report<W: Write>(
    out: &mut W,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    let (total, passed, success_rate) = tally(results);

    writeln!(out)?;
    writeln!(out, "{}", "📊 Selector Test Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "=================================".cyan())?;
    writeln!(out, "Total runs: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Success rate: {success_rate:.1}%")?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{} {}", status, label(result).bold())?;
        writeln!(out, "   Callbacks: {}", result.callbacks)?;
        writeln!(out, "   Time: {:?}", result.duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn generate_json_report<W: Write>(out: &mut W, results: &[ScenarioResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report<W: Write>(out: &mut W, results: &[ScenarioResult]) -> Result<()> {
    let (total, passed, success_rate) = tally(results);

    writeln!(out, "# Order Builder Selector Test Results\n")?;
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total runs**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", total - passed)?;
    writeln!(out, "- **Success rate**: {success_rate:.1}%\n")?;
    writeln!(out, "## Detailed Results\n")?;

    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(out, "### {} {}\n", status, label(result))?;
        writeln!(out, "- **Callbacks**: {}", result.callbacks)?;
        writeln!(out, "- **Time**: {:?}", result.duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::LogicTester;

    fn passing() -> ScenarioResult {
        ScenarioResult {
            scenario_name: "smoke".to_string(),
            vendor_id: "smokehaus".to_string(),
            passed: true,
            callbacks: 3,
            failures: Vec::new(),
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn markdown_lists_each_run() {
        let results = vec![passing(), LogicTester::unknown_scenario("ghost")];
        let mut out = Vec::new();
        generate_markdown_report(&mut out, &results).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("- **Passed**: 1"));
        assert!(text.contains("- **Success rate**: 50.0%"));
        assert!(text.contains("### ✅ smoke [smokehaus]"));
        assert!(text.contains("### ❌ ghost"));
        assert!(text.contains("  - Unknown scenario: ghost"));
    }

    #[test]
    fn json_is_an_array_of_results() {
        let mut out = Vec::new();
        generate_json_report(&mut out, &[passing()]).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
        assert_eq!(value[0]["scenario_name"], "smoke");
        assert_eq!(value[0]["callbacks"], 3);
    }

    #[test]
    fn console_report_counts_failures() {
        colored::control::set_override(false);
        let results = vec![passing(), LogicTester::unknown_scenario("ghost")];
        let mut out = Vec::new();
        generate_console_report(&mut out, &results, Duration::from_millis(5)).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Total runs: 2"));
        assert!(text.contains("Failed: 1"));
        assert!(text.contains("❌ FAIL ghost"));
    }
}
