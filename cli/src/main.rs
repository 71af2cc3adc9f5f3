//! `pivot`: run, trace, and compare binary-search variants from the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Step-by-step trace of one variant
//! pivot trace --variant unified --target 2 1 1 1 2 2 3
//!
//! # All point variants on one input
//! pivot compare --target 0 -- -87 -42 -13 0 5 19 42 77
//!
//! # Seeded trial experiment (duplicates, with misses)
//! pivot experiment --trials 20 --seed 7
//!
//! # Average work per variant over many trials
//! pivot bulk --trials 10000 --distinct --all-variants
//! ```

#![forbid(unsafe_code)]

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use pivot_harness::compare::compare;
use pivot_harness::policy::{SequenceShape, TargetPolicy, TrialPolicyV1};
use pivot_harness::render::{
    render_bulk, render_comparison, render_table, AnsiTraceRenderer, ColorMode,
};
use pivot_harness::runner::{run_bulk, run_experiment};
use pivot_kernel::probe::{ComparisonAccounting, Probe};
use pivot_search::variant::Variant;

const DEFAULT_BULK_TRIALS: u64 = 1000;

#[derive(Parser, Debug)]
#[command(name = "pivot")]
#[command(about = "Binary-search variants side by side")]
struct Cli {
    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable ANSI colors in output and logs (also off for non-terminal streams).
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render each iteration of one variant.
    Trace {
        /// standard, classic, unified, leftmost, or rightmost.
        #[arg(long, default_value = "standard")]
        variant: Variant,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Run several variants on one input and classify their answers.
    Compare {
        /// Include the boundary variants.
        #[arg(long)]
        all_variants: bool,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Seeded trial experiment with a per-trial table.
    Experiment {
        #[command(flatten)]
        policy: PolicyArgs,

        /// Print the canonical JSON report instead of the table.
        #[arg(long)]
        json: bool,
    },
    /// Average iterations and comparisons per variant.
    Bulk {
        #[command(flatten)]
        policy: PolicyArgs,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Value to search for.
    #[arg(long, allow_negative_numbers = true)]
    target: i64,

    /// Charge the skipped greater-than test on a finding iteration.
    #[arg(long)]
    charged: bool,

    /// Sequence values; sorted before searching.
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    values: Vec<i64>,
}

impl InputArgs {
    fn sorted(&self) -> Vec<i64> {
        let mut values = self.values.clone();
        values.sort_unstable();
        values
    }
}

#[derive(Args, Debug)]
struct PolicyArgs {
    /// Number of trials.
    #[arg(long)]
    trials: Option<u64>,

    /// Elements per sequence.
    #[arg(long)]
    length: Option<usize>,

    /// Smallest value drawn.
    #[arg(long, allow_negative_numbers = true)]
    min: Option<i64>,

    /// Largest value drawn.
    #[arg(long, allow_negative_numbers = true)]
    max: Option<i64>,

    /// Draw unique values (default range -100..=99).
    #[arg(long)]
    distinct: bool,

    /// Never pick the miss sentinel as target.
    #[arg(long)]
    present_only: bool,

    /// RNG seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Charge the skipped greater-than test on a finding iteration.
    #[arg(long)]
    charged: bool,

    /// Include the boundary variants.
    #[arg(long)]
    all_variants: bool,
}

impl PolicyArgs {
    fn to_policy(&self, default_trials: u64) -> TrialPolicyV1 {
        let base = if self.distinct {
            TrialPolicyV1::distinct_preset()
        } else {
            TrialPolicyV1::duplicates_preset()
        };
        let targets = if self.present_only || base.shape == SequenceShape::Distinct {
            TargetPolicy::Present
        } else {
            TargetPolicy::PresentOrMiss
        };
        TrialPolicyV1 {
            trials: self.trials.unwrap_or(default_trials),
            length: self.length.unwrap_or(base.length),
            value_min: self.min.unwrap_or(base.value_min),
            value_max: self.max.unwrap_or(base.value_max),
            targets,
            seed: self.seed,
            accounting: accounting(self.charged),
            ..base
        }
    }
}

fn accounting(charged: bool) -> ComparisonAccounting {
    if charged {
        ComparisonAccounting::Charged
    } else {
        ComparisonAccounting::Evaluated
    }
}

/// Escapes go to a stream only when it is a terminal and `--no-color` is unset.
fn use_color(no_color: bool, is_terminal: bool) -> bool {
    !no_color && is_terminal
}

fn variants(all: bool) -> &'static [Variant] {
    if all {
        &Variant::ALL
    } else {
        &Variant::POINT
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::INFO,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(use_color(cli.no_color, std::io::stderr().is_terminal()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let color = if use_color(cli.no_color, std::io::stdout().is_terminal()) {
        ColorMode::Always
    } else {
        ColorMode::Never
    };

    match cli.command {
        Command::Trace { variant, input } => {
            trace(variant, &input, color);
            Ok(())
        }
        Command::Compare {
            all_variants,
            input,
        } => {
            let seq = input.sorted();
            let comparison = compare(
                &seq,
                &input.target,
                variants(all_variants),
                accounting(input.charged),
            )?;
            println!("sequence: {seq:?}");
            println!("target:   {}", input.target);
            print!("{}", render_comparison(&comparison, color));
            Ok(())
        }
        Command::Experiment { policy, json } => {
            let policy_v1 = policy.to_policy(TrialPolicyV1::default().trials);
            let report = run_experiment(&policy_v1, variants(policy.all_variants))
                .context("experiment failed")?;
            if json {
                let bytes = report.to_canonical_json_bytes()?;
                println!("{}", String::from_utf8_lossy(&bytes));
            } else {
                print!("{}", render_table(&report, color));
                println!("policy_digest={}", policy_v1.digest()?);
                println!("report_digest={}", report.digest()?);
            }
            Ok(())
        }
        Command::Bulk { policy } => {
            let policy_v1 = policy.to_policy(DEFAULT_BULK_TRIALS);
            let report = run_bulk(&policy_v1, variants(policy.all_variants))
                .context("bulk run failed")?;
            print!("{}", render_bulk(&report, color));
            println!(
                "trials={} all_agree={} agree_on_value={} disagree={}",
                report.tally.total(),
                report.tally.all_agree,
                report.tally.agree_on_value,
                report.tally.disagree
            );
            Ok(())
        }
    }
}

fn trace(variant: Variant, input: &InputArgs, color: ColorMode) {
    let seq = input.sorted();
    let mut renderer = AnsiTraceRenderer::new(color);
    let (outcome, stats) = {
        let mut probe: Probe<'_, i64> =
            Probe::with_sink(&mut renderer).accounting(accounting(input.charged));
        let outcome = variant.search_with(&seq, &input.target, &mut probe);
        (outcome, probe.stats())
    };

    println!("{variant} search for {} in {seq:?}", input.target);
    print!("{}", renderer.into_string());
    match outcome.index() {
        Some(i) => println!("found {} at index {i} ({stats})", input.target),
        None => println!("{} not found ({stats})", input.target),
    }
}
