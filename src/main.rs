mod count;
mod counter;
mod digits;
mod error;
mod partition;
mod sieve;
mod storage;

use clap::Parser;
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "mtsieve")]
#[command(
    about = "Count primes whose decimal form contains the digit 3 at least twice",
    long_about = None
)]
struct Cli {
    #[arg(short, long, help = "Starting value of the range (inclusive, >= 2)")]
    start: usize,

    #[arg(short, long, help = "Ending value of the range (inclusive)")]
    end: usize,

    #[arg(short, long, help = "Number of worker threads (one segment each)")]
    threads: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.start < 2 {
        eprintln!("Error: Starting value must be >= 2.");
        return ExitCode::FAILURE;
    }
    if cli.end < 2 {
        eprintln!("Error: Ending value must be >= 2.");
        return ExitCode::FAILURE;
    }
    if cli.end < cli.start {
        eprintln!("Error: Ending value must be >= starting value.");
        return ExitCode::FAILURE;
    }
    if cli.threads < 1 {
        eprintln!("Error: Number of threads cannot be less than 1.");
        return ExitCode::FAILURE;
    }
    let num_processors = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    if cli.threads > 2 * num_processors {
        eprintln!(
            "Error: Number of threads cannot exceed twice the number of processors ({}).",
            num_processors
        );
        return ExitCode::FAILURE;
    }

    println!(
        "Finding all prime numbers between {} and {}.",
        cli.start, cli.end
    );

    let started = Instant::now();

    let report = match count::run(cli.start, cli.end, cli.threads) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}.", e);
            return ExitCode::FAILURE;
        }
    };

    if report.segments.len() == 1 {
        println!("{} segment:", report.segments.len());
    } else {
        println!("{} segments:", report.segments.len());
    }
    for segment in &report.segments {
        println!("   [{}, {}]", segment.start, segment.end);
    }

    println!(
        "Total primes between {} and {} with two or more '3' digits: {}",
        cli.start, cli.end, report.total
    );

    let duration_us = started.elapsed().as_micros();
    println!(
        "Execution time: {}us ({:.2}ms)",
        duration_us,
        duration_us as f64 / 1000.0
    );

    if let Err(e) = storage::log_execution(cli.start, cli.end, cli.threads, duration_us) {
        eprintln!("Warning: Failed to log execution: {}", e);
    }

    ExitCode::SUCCESS
}
