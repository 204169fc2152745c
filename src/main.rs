use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sorb::bench::SortBenchmark;
use sorb::config::{BenchmarkConfig, SortAlgorithm};
use sorb::{Result, SorbError};

#[derive(Parser, Debug)]
#[command(name = "sorb", version, about = "Sorting algorithm benchmark", long_about = None)]
struct Cli {
    /// Sorting algorithm to benchmark (bubble_sort, merge_sort, quick_sort)
    #[arg(long = "sort_type", value_parser = parse_sort_type)]
    sort_type: Option<SortAlgorithm>,

    /// List size exponent; the benchmark sorts lists of 4^N elements
    #[arg(long = "list_size")]
    list_size: Option<u32>,

    /// Number of times to repeat the sort for timing
    #[arg(long = "num_repeat")]
    num_repeat: Option<usize>,

    /// Seed for the workload random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Print the result record as JSON instead of the plain report
    #[arg(long)]
    json: bool,

    /// Persist the effective configuration to the config file
    #[arg(long)]
    save_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_sort_type(value: &str) -> std::result::Result<SortAlgorithm, String> {
    value
        .parse::<SortAlgorithm>()
        .map_err(|err| err.to_string())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose)?;

    // Config file values are defaults; flags override them
    let mut config = BenchmarkConfig::load()?;
    if let Some(algorithm) = cli.sort_type {
        config.algorithm = algorithm;
    }
    if let Some(exp) = cli.list_size {
        config.list_size_exp = exp;
    }
    if let Some(num_repeat) = cli.num_repeat {
        config.num_repeat = num_repeat;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    if cli.save_config {
        config.save()?;
    }

    let benchmark = SortBenchmark::new(config)?;
    let result = benchmark.run()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("- List size: {}", result.metrics.list_size);
        println!("- Num repeats: {}", result.metrics.num_repeat);
        println!(
            "- Avg. time per sort for {}: {}s",
            result.config.algorithm.description(),
            result.metrics.avg_duration.as_secs_f64()
        );
    }

    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| SorbError::BenchmarkError(format!("Failed to set up logging: {}", e)))
}
