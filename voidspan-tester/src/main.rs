mod common;
mod live;
mod logic;

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use common::{OutputTarget, parse_seeds, split_csv};
use logic::{LogicScenario, LogicTester, ScenarioResult};
use voidspan_game::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// Scripted rule scenarios (fast, offline)
    Logic,
    /// One real purchase against Gemini (needs GEMINI_API_KEY)
    Live,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

fn parse_difficulty(raw: &str) -> Result<Difficulty, String> {
    Difficulty::from_label(raw).ok_or_else(|| format!("unknown difficulty '{raw}'"))
}

#[derive(Debug, Parser)]
#[command(name = "voidspan-tester", version)]
#[command(about = "Automated QA for Voidspan - scripted rule scenarios and a live Gemini run")]
struct Args {
    /// Test mode: logic (offline) or live (calls Gemini)
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Item bought in live mode
    #[arg(long, default_value = "ルービックキューブ")]
    item: String,

    /// Difficulty used in live mode (chicken, easy, normal)
    #[arg(long, value_parser = parse_difficulty, default_value = "normal")]
    difficulty: Difficulty,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    if args.mode == TestMode::Live {
        let mut output_target = OutputTarget::new(args.output.clone())?;
        let outcome = live::run_live(&mut output_target, &args.item, args.difficulty).await;
        output_target.flush_inner()?;
        return outcome.map(|_| ());
    }

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios)?;
    let seeds = parse_seeds(&args.seeds)?;

    let all_results = run_logic_scenarios(&args, &scenarios, &seeds).await;
    write_reports(&args, &all_results, start_time)?;

    if all_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for scenario in LogicScenario::ALL {
        writeln!(
            output_target.writer(),
            "  {:25} - {}",
            scenario.key(),
            scenario.description()
        )?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🕳️  Voidspan Automated Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Result<Vec<LogicScenario>> {
    let mut scenarios = Vec::new();
    for key in split_csv(scenarios_arg) {
        if key == "all" {
            scenarios.extend(LogicScenario::ALL);
            continue;
        }
        let scenario = LogicScenario::from_key(&key)
            .ok_or_else(|| anyhow!("unknown scenario '{key}' (try --list-scenarios)"))?;
        scenarios.push(scenario);
    }
    let mut seen = Vec::with_capacity(scenarios.len());
    scenarios.retain(|s| {
        let fresh = !seen.contains(s);
        seen.push(*s);
        fresh
    });
    Ok(scenarios)
}

async fn run_logic_scenarios(
    args: &Args,
    scenarios: &[LogicScenario],
    seeds: &[u64],
) -> Vec<ScenarioResult> {
    println!("{}", "🧠 Running logic scenarios...".bright_green());
    let tester = LogicTester::new(args.verbose);
    let mut results = Vec::new();
    for &scenario in scenarios {
        results.extend(tester.run_scenario(scenario, seeds, args.iterations).await);
    }
    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => logic::reports::generate_json_report(&mut output_target, results)?,
        ReportFormat::Markdown => {
            logic::reports::generate_markdown_report(&mut output_target, results)?;
        }
        ReportFormat::Console => {
            if results.is_empty() {
                writeln!(&mut output_target, "No logic scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_expands_to_every_scenario_once() {
        let scenarios = expand_scenarios("smoke, all").unwrap();
        assert_eq!(scenarios.len(), LogicScenario::ALL.len());
        assert_eq!(scenarios[0], LogicScenario::Smoke);
    }

    #[test]
    fn unknown_scenarios_are_rejected() {
        let err = expand_scenarios("smoke,teleport").unwrap_err();
        assert!(err.to_string().contains("unknown scenario 'teleport'"));
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::try_parse_from([
            "voidspan-tester",
            "--mode",
            "live",
            "--report",
            "markdown",
            "--difficulty",
            "easy",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.mode, TestMode::Live);
        assert_eq!(args.report, ReportFormat::Markdown);
        assert_eq!(args.difficulty, Difficulty::Easy);
        assert!(args.verbose);
        assert!(Args::try_parse_from(["voidspan-tester", "--difficulty", "hard"]).is_err());
    }
}
