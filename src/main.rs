//! Life Quote CLI
//!
//! Command-line interface for pricing a single answer set or a CSV of leads

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;

use life_quote::quiz::validate_all;
use life_quote::rates::load_rate_table;
use life_quote::{report, AnswerSet, EstimationEngine, Gender, MaritalStatus, RateTable, TermLength};

#[derive(Debug, Parser)]
#[command(name = "life_quote", version, about = "Estimate term life quotes and recommended coverage")]
struct Cli {
    /// Base rate CSV overriding the built-in table
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price one applicant
    Quote(QuoteArgs),
    /// Price every lead in a CSV file
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
struct QuoteArgs {
    #[arg(long)]
    age: Option<u8>,
    /// male or female
    #[arg(long)]
    gender: Option<Gender>,
    #[arg(long)]
    smoker: bool,
    /// Height in inches
    #[arg(long)]
    height: Option<u32>,
    /// Weight in pounds
    #[arg(long)]
    weight: Option<u32>,
    #[arg(long)]
    marital_status: Option<MaritalStatus>,
    #[arg(long)]
    kids: Option<u32>,
    /// Annual income in dollars
    #[arg(long)]
    income: Option<u64>,
    /// Total debts in dollars
    #[arg(long)]
    debts: Option<u64>,
    /// Desired coverage in dollars
    #[arg(long)]
    coverage: Option<u64>,
    /// 10, 15, 20, 30 or permanent
    #[arg(long)]
    term: Option<TermLength>,
}

impl QuoteArgs {
    fn to_answers(&self) -> AnswerSet {
        AnswerSet {
            age: self.age,
            gender: self.gender,
            smoker: Some(self.smoker),
            height: self.height,
            weight: self.weight,
            marital_status: self.marital_status,
            number_of_kids: self.kids,
            annual_income: self.income,
            major_debts: self.debts,
            desired_coverage: self.coverage,
            term_length: self.term,
            ..Default::default()
        }
    }
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// CSV of leads with camelCase answer columns (age, gender, smoker, ...)
    #[arg(long)]
    input: PathBuf,
    /// Where to write per-lead results
    #[arg(long, default_value = "quotes_output.csv")]
    output: PathBuf,
}

/// One line of batch output
#[derive(Debug, Serialize)]
struct BatchRow {
    row: usize,
    recommended_coverage: u64,
    best_rate: u32,
    best_carrier: String,
    quote_count: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let table = match &cli.rates {
        Some(path) => load_rate_table(path)
            .with_context(|| format!("loading rate table {}", path.display()))?,
        None => RateTable::default_pricing(),
    };
    let engine = EstimationEngine::new(table);

    match cli.command {
        Command::Quote(args) => run_quote(&engine, &args),
        Command::Batch(args) => run_batch(&engine, &args.input, &args.output),
    }
}

fn run_quote(engine: &EstimationEngine, args: &QuoteArgs) -> Result<()> {
    let answers = args.to_answers();

    for error in validate_all(&answers)
        .iter()
        .filter(|e| !matches!(e.field, "state" | "name" | "phone" | "email"))
    {
        log::warn!("{}: {}", error.field, error.message);
    }

    let estimate = engine.estimate(&answers);
    print!("{}", report::render(&estimate));
    Ok(())
}

fn run_batch(engine: &EstimationEngine, input: &Path, output: &Path) -> Result<()> {
    let start = Instant::now();

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(input)
        .with_context(|| format!("opening {}", input.display()))?;

    let leads: Vec<AnswerSet> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .with_context(|| format!("reading leads from {}", input.display()))?;
    println!("Loaded {} leads in {:?}", leads.len(), start.elapsed());

    let estimates: Vec<_> = leads.par_iter().map(|lead| engine.estimate(lead)).collect();

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("creating {}", output.display()))?;
    for (idx, estimate) in estimates.iter().enumerate() {
        writer.serialize(BatchRow {
            row: idx + 1,
            recommended_coverage: estimate.recommended_coverage,
            best_rate: estimate.best_rate(),
            best_carrier: estimate
                .best_quote()
                .map(|q| q.carrier.to_string())
                .unwrap_or_default(),
            quote_count: estimate.quotes.len(),
        })?;
    }
    writer.flush()?;

    let priced = estimates.iter().filter(|e| !e.quotes.is_empty()).count();
    println!("Priced {}/{} leads", priced, estimates.len());
    println!("Output written to {}", output.display());
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
