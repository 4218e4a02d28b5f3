// Whispers Compose: CLI entry point.
//
// Analyzes a mood description and prints the resulting composition
// parameters. The pipeline: load config → build analyzer (embeds mood
// prototypes) → analyze → enhance → print / export JSON.
//
// Usage:
//   cargo run -p whispers_compose -- [--seed N] [--config FILE]
//     [--output FILE] [--json] <TEXT>...
//
// Log verbosity is controlled by LOG_LEVEL (e.g. LOG_LEVEL=debug).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use whispers_compose::{
    AnalyzerConfig, CompositionParameters, HashedEncoder, LexiconSentiment, MoodAnalyzer, enhance,
};

#[derive(Parser, Debug)]
#[command(name = "compose", about = "Turn a mood description into composition parameters")]
struct CliArgs {
    /// Mood description, e.g. "I'm feeling calm and introspective".
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,

    /// Seed for the theory selections; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON AnalyzerConfig.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the parameters as JSON to this file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print JSON instead of the summary.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init();

    let config = match &args.config {
        Some(path) => match AnalyzerConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => AnalyzerConfig::default(),
    };
    info!(
        sentiment_model = %config.sentiment_model,
        embedding_model = %config.embedding_model,
        "loading analyzer"
    );

    let encoder = match HashedEncoder::new(config.embedding_dim) {
        Ok(e) => e,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let analyzer = MoodAnalyzer::new(LexiconSentiment, encoder);
    let text = args.text.join(" ");
    let analysis = analyzer.analyze(&text);
    if let Some(fault) = analysis.fault() {
        info!("using default parameters ({fault})");
    }

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let params = enhance(analysis.result(), &mut rng);

    let json = match serde_json::to_string_pretty(&params) {
        Ok(j) => j,
        Err(e) => {
            error!("failed to serialize parameters: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        println!("{json}");
    } else {
        print_summary(&params);
    }

    if let Some(path) = &args.output {
        if let Err(e) = std::fs::write(path, &json) {
            error!("failed to write {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
        info!("wrote composition to {}", path.display());
    }

    ExitCode::SUCCESS
}

fn print_summary(p: &CompositionParameters) {
    let r = &p.inference;
    println!("=== Composition Summary ===");
    println!("Mood category:   {}", r.mood_category);
    println!("Energy level:    {}/10", r.energy_level);
    println!("Tempo:           {} BPM ({})", r.tempo, r.time_signature);
    println!("Key:             {} ({})", p.suggested_key, r.key.as_str());
    println!("Scale:           {} [{}]", p.scale_type.as_str(), p.scale_notes.join(" "));
    println!("Progression:     {}", p.chord_progression.join(" - "));
    println!("Rhythm:          {}", p.rhythmic_pattern.as_str());
    println!("Instruments:     {}", r.instruments.join(", "));
    println!("Dynamics:        {}", p.dynamics.as_str());
    println!("Texture:         {}", p.texture.as_str());
    println!("Genre:           {}", r.genre_style.as_str());
    println!("Confidence:      {:.2}", r.sentiment_confidence);
}
