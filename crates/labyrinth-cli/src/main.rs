//! Labyrinth - diagnostic-graph navigation CLI
//!
//! The `labyrinth` command turns build or CI logs into a quest: a route
//! through the issue graph (or a supplied grid) plus the worst issues as
//! boss battles.
//!
//! ## Commands
//!
//! - `navigate`: Run a full navigation request
//! - `extract`: Print the issues extracted from a log
//! - `triage`: Print the top-K boss battles
//! - `demo`: Run the built-in scenarios

mod artifact;
mod input;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use labyrinth_core::{
    extract_with, navigate_blocking_task, rank_with, render_quests, render_report_md, Coord,
    ExtractOptions, GridSpec, NavigationConfig, NavigationReport, SeededRewards, SeverityRewards,
};
use tracing::{info, Level};
use uuid::Uuid;

use crate::artifact::{write_artifact, NavigationArtifact};
use crate::input::{read_text, resolve_config, Overrides};

#[derive(Parser)]
#[command(name = "labyrinth")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Navigate diagnostic logs as a weighted labyrinth", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract issues, search the graph and triage boss battles
    Navigate {
        /// Diagnostic text file, or `-` for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Grid specification (JSON or TOML); omit for issue-chain mode
        #[arg(short, long)]
        grid: Option<PathBuf>,

        /// Navigation config file (JSON or TOML)
        #[arg(short, long, env = "LABYRINTH_CONFIG")]
        config: Option<PathBuf>,

        /// Maximum number of boss battles
        #[arg(short, long, env = "LABYRINTH_TRIAGE_LIMIT")]
        limit: Option<usize>,

        /// Seed for reproducible reward variation
        #[arg(long, env = "LABYRINTH_REWARD_SEED")]
        seed: Option<u64>,

        /// Write a JSON artifact of the run
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stdout format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print extracted issues as JSON
    Extract {
        /// Diagnostic text file, or `-` for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Collapse identical lines
        #[arg(long)]
        dedup: bool,
    },

    /// Print the top-K boss battles as JSON
    Triage {
        /// Diagnostic text file, or `-` for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Maximum number of boss battles
        #[arg(short, long, default_value = "3")]
        limit: usize,

        /// Seed for reproducible reward variation
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the built-in grid and sample-log scenarios
    Demo {
        /// Stdout format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

const SAMPLE_LOG: &str = "SampleError: missing dependency\nSampleWarning: retrying";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    labyrinth_core::init_tracing(cli.json, level);

    match cli.command {
        Commands::Navigate {
            input,
            grid,
            config,
            limit,
            seed,
            output,
            format,
        } => {
            let overrides = Overrides {
                triage_limit: limit,
                reward_seed: seed,
            };
            let text = read_text(input.as_deref())?;
            let out = cmd_navigate(
                text,
                config.as_deref(),
                grid.as_deref(),
                &overrides,
                output.as_deref(),
                format,
            )
            .await?;
            print!("{}", out);
            Ok(())
        }
        Commands::Extract { input, dedup } => {
            let text = read_text(input.as_deref())?;
            println!("{}", cmd_extract(&text, dedup)?);
            Ok(())
        }
        Commands::Triage { input, limit, seed } => {
            let text = read_text(input.as_deref())?;
            println!("{}", cmd_triage(&text, limit, seed)?);
            Ok(())
        }
        Commands::Demo { format } => {
            print!("{}", cmd_demo(format).await?);
            Ok(())
        }
    }
}

async fn cmd_navigate(
    text: String,
    config_path: Option<&Path>,
    grid_path: Option<&Path>,
    overrides: &Overrides,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<String> {
    let mut config = resolve_config(config_path, grid_path, overrides)?;
    let request_id = config
        .request_id
        .get_or_insert_with(|| Uuid::new_v4().to_string())
        .clone();

    info!(event = "cli.navigate", request_id = %request_id, bytes = text.len());
    let report = navigate_blocking_task(text.clone(), config)
        .await
        .context("Navigation failed")?;

    let rendered = render(&report, format)?;
    if let Some(path) = output {
        let artifact = NavigationArtifact::new(request_id, &text, report);
        write_artifact(path, &artifact)?;
    }
    Ok(rendered)
}

fn cmd_extract(text: &str, dedup: bool) -> Result<String> {
    let options = ExtractOptions {
        collapse_duplicates: dedup,
        ..ExtractOptions::default()
    };
    let issues = extract_with(text, &options);
    serde_json::to_string_pretty(&issues).context("serialize issues")
}

fn cmd_triage(text: &str, limit: usize, seed: Option<u64>) -> Result<String> {
    let issues = extract_with(text, &ExtractOptions::default());
    let battles = match seed {
        Some(seed) => rank_with(&issues, limit, &SeededRewards::new(seed)),
        None => rank_with(&issues, limit, &SeverityRewards),
    };
    serde_json::to_string_pretty(&battles).context("serialize boss battles")
}

/// The 5×3 checkerboard, its corridor variant, and the sample log in
/// issue-chain mode.
fn demo_scenarios() -> Vec<(&'static str, NavigationConfig)> {
    let c = Coord::new;
    let checkerboard = GridSpec::new(5, 3, c(0, 0), c(4, 2)).with_walls([
        c(1, 0),
        c(3, 0),
        c(0, 1),
        c(2, 1),
        c(4, 1),
        c(1, 2),
        c(3, 2),
    ]);
    let corridor =
        GridSpec::new(5, 3, c(0, 0), c(4, 2)).with_walls([c(0, 1), c(1, 1), c(2, 1), c(3, 1)]);

    vec![
        ("issue chain", NavigationConfig::default()),
        (
            "checkerboard grid",
            NavigationConfig::default().with_grid(checkerboard),
        ),
        (
            "corridor grid",
            NavigationConfig::default().with_grid(corridor),
        ),
    ]
}

async fn cmd_demo(format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    for (name, config) in demo_scenarios() {
        let report = navigate_blocking_task(SAMPLE_LOG.to_string(), config)
            .await
            .with_context(|| format!("Demo scenario '{}' failed", name))?;
        match format {
            OutputFormat::Text => out.push_str(&format!("== {} ==\n", name)),
            OutputFormat::Markdown => out.push_str(&format!("<!-- {} -->\n", name)),
            OutputFormat::Json => {}
        }
        out.push_str(&render(&report, format)?);
        out.push('\n');
    }
    Ok(out)
}

fn render(report: &NavigationReport, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => {
            let mut lines = render_quests(report);
            lines.push(format!("Score: {}", report.score));
            lines.join("\n") + "\n"
        }
        OutputFormat::Json => report.to_json().context("serialize navigation report")? + "\n",
        OutputFormat::Markdown => render_report_md(report),
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use labyrinth_core::{BossBattle, Issue, PathStatus};

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_navigate_flags() {
        let cli = Cli::try_parse_from([
            "labyrinth",
            "--verbose",
            "navigate",
            "--input",
            "-",
            "--limit",
            "2",
            "--format",
            "markdown",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Navigate {
                input,
                limit,
                format,
                ..
            } => {
                assert_eq!(input, Some(PathBuf::from("-")));
                assert_eq!(limit, Some(2));
                assert_eq!(format, OutputFormat::Markdown);
            }
            _ => panic!("expected navigate"),
        }
    }

    #[tokio::test]
    async fn test_cmd_navigate_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out").join("run.json");

        let rendered = cmd_navigate(
            SAMPLE_LOG.to_string(),
            None,
            None,
            &Overrides::default(),
            Some(&output),
            OutputFormat::Text,
        )
        .await
        .unwrap();
        assert!(rendered.starts_with("Follow issue-1 -> issue-2 to earn 207 XP"));
        assert!(rendered.ends_with("Score: 207\n"));

        let artifact: NavigationArtifact =
            serde_json::from_slice(&std::fs::read(&output).unwrap()).unwrap();
        assert_eq!(artifact.report.score, 207);
        assert!(Uuid::parse_str(&artifact.request_id).is_ok());
    }

    #[tokio::test]
    async fn test_cmd_navigate_with_grid_file() {
        let dir = tempfile::tempdir().unwrap();
        let grid = dir.path().join("grid.json");
        std::fs::write(
            &grid,
            r#"{"width":3,"height":1,"start":{"x":0,"y":0},"goal":{"x":2,"y":0}}"#,
        )
        .unwrap();

        let rendered = cmd_navigate(
            String::new(),
            None,
            Some(&grid),
            &Overrides::default(),
            None,
            OutputFormat::Json,
        )
        .await
        .unwrap();
        let report: NavigationReport = serde_json::from_str(&rendered).unwrap();
        assert_eq!(report.path.total_cost, 2);
        assert_eq!(report.path.nodes.len(), 3);
    }

    #[tokio::test]
    async fn test_cmd_navigate_rejects_walled_goal() {
        let dir = tempfile::tempdir().unwrap();
        let grid = dir.path().join("grid.toml");
        std::fs::write(
            &grid,
            "width = 2\nheight = 1\nstart = { x = 0, y = 0 }\ngoal = { x = 1, y = 0 }\nwalls = [{ x = 1, y = 0 }]\n",
        )
        .unwrap();

        let err = cmd_navigate(
            String::new(),
            None,
            Some(&grid),
            &Overrides::default(),
            None,
            OutputFormat::Text,
        )
        .await
        .unwrap_err();
        assert!(format!("{:#}", err).contains("goal (1,0) is a wall"));
    }

    #[test]
    fn test_cmd_extract_dedup() {
        let json = cmd_extract("error: x\nerror: x\n", true).unwrap();
        let issues: Vec<Issue> = serde_json::from_str(&json).unwrap();
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_cmd_triage_limit_and_seed() {
        let text = "warn: a\nerror: b\npanic: c";
        let json = cmd_triage(text, 2, None).unwrap();
        let battles: Vec<BossBattle> = serde_json::from_str(&json).unwrap();
        assert_eq!(battles.len(), 2);
        assert_eq!(battles[0].issue.text, "panic: c");

        let seeded_a = cmd_triage(text, 3, Some(7)).unwrap();
        let seeded_b = cmd_triage(text, 3, Some(7)).unwrap();
        assert_eq!(seeded_a, seeded_b);
    }

    #[tokio::test]
    async fn test_demo_covers_all_scenarios() {
        let out = cmd_demo(OutputFormat::Text).await.unwrap();
        assert!(out.contains("== issue chain =="));
        assert!(out.contains("== checkerboard grid =="));
        assert!(out.contains("No route through the labyrinth"));
        assert!(out.contains("== corridor grid =="));
        assert!(out.contains("(0,0) -> (1,0)"));
    }

    #[tokio::test]
    async fn test_demo_checkerboard_is_unreachable() {
        let (_, config) = demo_scenarios().remove(1);
        let report = navigate_blocking_task(SAMPLE_LOG.to_string(), config)
            .await
            .unwrap();
        assert_eq!(report.path.status, PathStatus::Unreachable);
    }

    #[test]
    fn test_render_markdown() {
        let report = labyrinth_core::navigate(SAMPLE_LOG, &NavigationConfig::default()).unwrap();
        let md = render(&report, OutputFormat::Markdown).unwrap();
        assert!(md.contains("# Labyrinth Report"));
    }
}
