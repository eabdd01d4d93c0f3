use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use species_life::{
    Algorithm, ConflictPolicy, RuleKind, RunSimulation, Simulation, XmlInputReader, XmlOutputWriter,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How duplicate organisms at one coordinate are merged
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OnConflict {
    /// Keep the organism listed later in the file
    Last,
    /// Pick one at random (see --seed)
    Random,
}

#[derive(Parser, Debug)]
#[command(
    name = "species-life",
    version,
    about = "Run a multi-species Game of Life simulation from an XML input file"
)]
struct Cli {
    /// Input XML file describing the world and its organisms.
    #[arg(short, long, env = "LIFE_INPUT", default_value = "input.xml")]
    input: PathBuf,

    /// Output XML file receiving the final generation.
    #[arg(short, long, env = "LIFE_OUTPUT", default_value = "output.xml")]
    output: PathBuf,

    /// Evolution rule (grid topology).
    #[arg(long, value_enum, default_value_t = RuleKind::Conway)]
    rule: RuleKind,

    /// How each generation is scanned.
    #[arg(long, value_enum, default_value_t = Algorithm::Serial)]
    algorithm: Algorithm,

    /// Merge policy for organisms sharing a coordinate.
    #[arg(long, value_enum, default_value_t = OnConflict::Last)]
    on_conflict: OnConflict,

    /// Seed used by `--on-conflict random`.
    #[arg(long, env = "LIFE_SEED", default_value_t = 0)]
    seed: u64,
}

impl Cli {
    fn conflict_policy(&self) -> ConflictPolicy {
        match self.on_conflict {
            OnConflict::Last => ConflictPolicy::LastWins,
            OnConflict::Random => ConflictPolicy::Random { seed: self.seed },
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "species_life=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "starting");

    let use_case = RunSimulation::new(
        XmlInputReader::with_policy(cli.conflict_policy()),
        XmlOutputWriter::new(),
        Simulation::new(cli.rule.build()).with_algorithm(cli.algorithm),
    );
    use_case.run(&cli.input, &cli.output).with_context(|| {
        format!(
            "simulation from {} to {} failed",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    println!("Done.");
    Ok(())
}
