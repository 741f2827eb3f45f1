//! mav CLI - batch runner for the free-riding analysis

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mav_core::experiment::{run_batch, BatchSummary, RunRecord};
use mav_core::{
    BatchConfig, CultureConfig, CultureError, DisjointConfig, ImpartialConfig, ResamplingConfig,
    RuleDescriptor,
};

#[derive(Parser)]
#[command(name = "mav")]
#[command(about = "Free-riding risk analysis for multi-issue approval voting rules")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run one culture/rule batch across a seed sweep
    Run {
        /// Culture identifier (see `mav cultures`)
        #[arg(long, default_value = "p-ic")]
        culture: String,

        /// Rule identifier (see `mav rules`)
        #[arg(long, default_value = "utilitarian")]
        rule: String,

        /// Number of voters
        #[arg(long, default_value_t = 20)]
        voters: usize,

        /// Number of issues
        #[arg(long, default_value_t = 5)]
        issues: usize,

        /// Candidates per issue
        #[arg(long, default_value_t = 2)]
        candidates: usize,

        /// Seeds to sweep (0..seeds)
        #[arg(long, default_value_t = 50)]
        seeds: u64,

        /// Approval probability
        #[arg(short, long, default_value_t = 0.5)]
        p: f64,

        /// Correlation coefficient (resampling culture)
        #[arg(long, default_value_t = 0.5)]
        phi: f64,

        /// Number of groups (disjoint culture)
        #[arg(long, default_value_t = 2)]
        groups: usize,

        /// Hamming-noise flip probability applied on top (0 = off)
        #[arg(long, default_value_t = 0.0)]
        noise: f64,

        /// Write per-seed rows as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write per-seed rows as JSON lines to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// List rule identifiers
    Rules,
    /// List culture identifiers
    Cultures,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    match Cli::parse().command {
        Commands::Run {
            culture,
            rule,
            voters,
            issues,
            candidates,
            seeds,
            p,
            phi,
            groups,
            noise,
            csv,
            json,
        } => {
            let candidates_per_issue = vec![candidates; issues];
            let mut culture_cfg = build_culture(&culture, voters, candidates_per_issue, p, phi, groups)?;
            if noise > 0.0 {
                culture_cfg = CultureConfig::Noisy {
                    base: Box::new(culture_cfg),
                    noise_prob: noise,
                    seed: None,
                };
            }
            let rule: RuleDescriptor = rule.parse()?;
            let cfg = BatchConfig {
                culture: culture_cfg,
                rule,
                seeds,
            };

            let records = run_batch(&cfg)?;
            if let Some(path) = csv {
                write_csv(&path, &records)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
            if let Some(path) = json {
                write_json_lines(&path, &records)
                    .with_context(|| format!("writing {}", path.display()))?;
            }

            match BatchSummary::from_records(&records) {
                Some(summary) => print_summary(&cfg, &summary),
                None => println!("no runs (seeds = 0)"),
            }
        }
        Commands::Rules => {
            for id in RuleDescriptor::identifiers() {
                println!("{id}");
            }
        }
        Commands::Cultures => {
            for id in CultureConfig::identifiers() {
                println!("{id}");
            }
        }
    }

    Ok(())
}

fn build_culture(
    name: &str,
    n_voters: usize,
    candidates_per_issue: Vec<usize>,
    p: f64,
    phi: f64,
    groups: usize,
) -> anyhow::Result<CultureConfig> {
    let cfg = match name {
        "p-ic" => CultureConfig::Impartial(ImpartialConfig {
            p,
            ..ImpartialConfig::new(n_voters, candidates_per_issue)
        }),
        "resampling" => CultureConfig::Resampling(ResamplingConfig {
            p,
            phi,
            ..ResamplingConfig::new(n_voters, candidates_per_issue)
        }),
        "disjoint" => CultureConfig::Disjoint(DisjointConfig {
            p,
            ..DisjointConfig::new(n_voters, candidates_per_issue, groups)
        }),
        other => {
            return Err(CultureError::UnknownCulture {
                name: other.to_string(),
            }
            .into())
        }
    };
    Ok(cfg)
}

fn print_summary(cfg: &BatchConfig, summary: &BatchSummary) {
    println!("culture      {}", cfg.culture);
    println!("rule         {}", cfg.rule);
    println!("runs         {}", summary.runs);
    println!("utilitarian  {:.3}", summary.utilitarian);
    println!("egalitarian  {:.3}", summary.egalitarian);
    println!("nash         {:.3}", summary.nash);
    println!("success_rate {:.4}", summary.success_rate);
    println!("harm_rate    {:.4}", summary.harm_rate);
    println!("risk         {:.4}", summary.risk);
}

const CSV_HEADER: &str = "seed,culture,rule,utilitarian,egalitarian,nash,\
trials,eligible,possible,successes,harms,ties,success_rate,harm_rate,risk";

fn write_csv(path: &PathBuf, records: &[RunRecord]) -> anyhow::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{CSV_HEADER}")?;
    for r in records {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            r.seed,
            r.culture,
            r.rule,
            r.welfare.utilitarian,
            r.welfare.egalitarian,
            r.welfare.nash,
            r.counts.trials,
            r.counts.eligible,
            r.counts.possible,
            r.counts.successes,
            r.counts.harms,
            r.counts.ties,
            r.rates.success_rate,
            r.rates.harm_rate,
            r.rates.risk,
        )?;
    }
    Ok(())
}

fn write_json_lines(path: &PathBuf, records: &[RunRecord]) -> anyhow::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for r in records {
        writeln!(out, "{}", serde_json::to_string(r)?)?;
    }
    Ok(())
}
