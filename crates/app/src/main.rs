use clap::Parser;
use graph_gen::prelude::*;
use log::info;
use num_format::{Locale, ToFormattedString};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let CliOpts { config, verbose } = CliOpts::new();
    init_logging(verbose);

    run(config)?;

    Ok(())
}

fn run(config: GeneratorConfig) -> Result<Vec<InstanceSummary>, Error> {
    info!(
        "Generating sizes 2^{}-1 to 2^{}-1 into {} (dedup scope: {:?})",
        config.min_log2,
        config.max_log2,
        config.output_dir.display(),
        config.dedup_scope
    );

    let mut generator = GraphInstanceGenerator::new(config)?;
    let summaries = generator.run()?;

    info!(
        "Reserved {} node pairs in total",
        generator.edge_set().len().to_formatted_string(&Locale::en)
    );

    Ok(summaries)
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Generates random weighted undirected graph instances",
    disable_help_subcommand = true,
    infer_long_args = true
)]
struct CliOpts {
    #[command(flatten)]
    config: GeneratorConfig,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl CliOpts {
    fn new() -> Self {
        Self::parse()
    }
}
