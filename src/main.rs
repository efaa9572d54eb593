use anyhow::Context;
use melodevo::config::AppConfig;
use melodevo::data::{load_corpus, ResultWriter};
use melodevo::engines::evaluation::FitnessContext;
use melodevo::engines::generation::{EvolutionEngine, LogProgressCallback};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

const USAGE: &str =
    "Usage: melodevo [config.toml] [--corpus PATH] [--generations N] [--seed N] [--output PATH]";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    // Positional config path, skipping flags and their values
    let config_path = args.get(1).filter(|s| !s.starts_with("--")).map(PathBuf::from);
    let mut config = AppConfig::load(config_path.as_deref())
        .with_context(|| format!("failed to load configuration\n{}", USAGE))?;

    if let Some(corpus) = parse_flag::<PathBuf>(&args, "--corpus") {
        config.corpus.path = corpus;
    }
    if let Some(generations) = parse_flag(&args, "--generations") {
        config.evolution.generations = generations;
    }
    if let Some(seed) = parse_flag(&args, "--seed") {
        config.evolution.seed = Some(seed);
    }
    if let Some(output) = parse_flag::<PathBuf>(&args, "--output") {
        config.output.results_path = output;
    }
    config.validate()?;

    run(&config)
}

fn run(config: &AppConfig) -> anyhow::Result<()> {
    let seed_population = load_corpus(&config.corpus)
        .with_context(|| format!("failed to load corpus from {}", config.corpus.path.display()))?;
    let tonality = config.scoring.tonality()?;

    let rng = match config.evolution.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut engine = EvolutionEngine::with_quality_table(
        config.evolution.clone(),
        seed_population,
        config.scoring.fitness(),
        config.scoring.quality_table(),
        tonality,
        rng,
    )?;
    log_context(engine.context());

    let writer = create_writer(&config.output.results_path, config.output.append)?;
    let mut callbacks = (LogProgressCallback, writer);
    let best = engine.run(&mut callbacks)?;

    let (_, writer) = callbacks;
    log::info!(
        "Wrote {} generations to {}",
        writer.lines_written(),
        config.output.results_path.display()
    );
    if let Some(best) = best {
        log::info!(
            "Best of run: generation {}, fitness {:.4}: {}",
            best.generation,
            best.fitness,
            best.best
        );
    }
    Ok(())
}

fn create_writer(path: &Path, append: bool) -> anyhow::Result<ResultWriter<std::io::BufWriter<std::fs::File>>> {
    ResultWriter::create(path, append)
        .with_context(|| format!("failed to open results file {}", path.display()))
}

fn log_context(context: &FitnessContext) {
    log::info!(
        "Scoring against tonic pitch class {} ({:?}), reference notes {:?}",
        context.tonality.tonic(),
        context.tonality.scale(),
        context.tonality.notes()
    );
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
