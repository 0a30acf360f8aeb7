//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::analytics::AuthorFilter;
use chatlens::cli::Args;
use chatlens::report::{AnalysisReport, write_busy_users_csv};
use chatlens::{ChatlensError, Dialect, StopWords, TranscriptParser};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let dialect: Dialect = args.dialect.into();
    let filter = AuthorFilter::from(args.user.as_str());

    println!("🔍 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("🕐 Dialect: {}", dialect);
    println!("👤 Scope:   {}", filter);
    println!();

    // Step 1: Parse
    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let parser = TranscriptParser::new(dialect);
    let transcript = parser.parse(Path::new(&args.input))?;
    println!(
        "   {} records, {} lines skipped ({:.2}s)",
        transcript.len(),
        transcript.skipped().len(),
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Load stop words (once, shared by all frequency operations)
    let stop_words = match &args.stop_words {
        Some(path) => StopWords::from_file(Path::new(path))?,
        None => StopWords::default_list(),
    };

    // Step 3: Run the analytics suite
    println!("📊 Analyzing...");
    let analyze_start = Instant::now();
    let report = AnalysisReport::build(&filter, &transcript, &stop_words);
    println!("   Done ({:.2}s)", analyze_start.elapsed().as_secs_f64());
    println!();

    print_summary(&report, args.top);

    // Step 4: Optional outputs
    if let Some(path) = &args.json {
        report.write_json(Path::new(path))?;
        println!("💾 Report written to {}", path);
    }
    if let Some(path) = &args.csv {
        write_busy_users_csv(&report, Path::new(path))?;
        println!("💾 Busy-users table written to {}", path);
    }

    println!();
    println!("✅ Done in {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}

fn print_summary(report: &AnalysisReport, top: usize) {
    println!("📈 Top Statistics ({})", report.filter);
    println!("   Messages:     {}", report.stats.messages);
    println!("   Words:        {}", report.stats.words);
    println!("   Media shared: {}", report.stats.media);
    println!("   Links shared: {}", report.stats.links);
    println!();

    if !report.busy_users.is_empty() {
        println!("👥 Most Active Users");
        for ((author, count), share) in report
            .busy_users
            .iter()
            .zip(&report.user_shares)
            .take(top)
        {
            println!("   {:<24} {:>6}  {:>6.2}%", author, count, share.percentage);
        }
        println!();
    }

    if !report.common_words.is_empty() {
        println!("💬 Most Common Words");
        for (word, count) in report.common_words.iter().take(top) {
            println!("   {:<24} {:>6}", word, count);
        }
        println!();
    }

    if !report.emoji.is_empty() {
        println!("😀 Emoji");
        for (emoji, count) in report.emoji.iter().take(top) {
            println!("   {:<8} {:>6}", emoji, count);
        }
        println!();
    }

    if !report.weekly_activity.is_empty() {
        println!("📅 Busiest Days");
        for (day, count) in &report.weekly_activity {
            println!("   {:<24} {:>6}", day, count);
        }
        println!();
    }

    println!("🎭 Sentiment");
    println!("   Positive: {}", report.sentiment.positive);
    println!("   Neutral:  {}", report.sentiment.neutral);
    println!("   Negative: {}", report.sentiment.negative);
}
