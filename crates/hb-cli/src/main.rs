//! Random artifact forge
//!
//! Forges random artifacts from plain items and prints them as text or
//! JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hb_core::artifact::{ArtifactBias, ArtifactRequest, ForgeError, become_random_artifact};
use hb_core::object::{ItemKind, Object, ObjectId};
use hb_core::{ConfigError, ForgeConfig, GameRng};

/// Forge Hengband-style random artifacts
#[derive(Parser, Debug)]
#[command(name = "hb-forge")]
#[command(author, version, about = "Forge random artifacts", long_about = None)]
struct Args {
    /// RNG seed (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Item kind to forge (e.g. sword, cloak, ring)
    #[arg(short = 'k', long = "kind", default_value = "sword")]
    kind: ItemKind,

    /// Number of artifacts to forge
    #[arg(short = 'n', long = "count", default_value_t = 1)]
    count: u32,

    /// Forge as if reading a scroll of artifact creation
    #[arg(long = "scroll")]
    scroll: bool,

    /// Force cursed artifacts
    #[arg(long = "cursed")]
    cursed: bool,

    /// Bias hint for scroll-made artifacts (e.g. fire, mage, warrior)
    #[arg(short = 'b', long = "bias")]
    bias: Option<ArtifactBias>,

    /// JSON file overriding the forge tunables
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print artifacts as JSON
    #[arg(long = "json")]
    json: bool,

    /// Log more (repeat for trace output)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("forge: {0}")]
    Forge(#[from] ForgeError),

    #[error("output: {0}")]
    Output(#[from] serde_json::Error),
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "hb_core=debug,info",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn describe(obj: &Object) -> String {
    let mut out = obj.to_string();
    if let Some(bias) = obj.bias {
        out.push_str(&format!("\n    bias: {bias}"));
    }
    let flags: Vec<&str> = obj.flags.iter().map(|f| f.name()).collect();
    if !flags.is_empty() {
        out.push_str(&format!("\n    flags: {}", flags.join(" ")));
    }
    if let Some(act) = obj.activation {
        out.push_str(&format!("\n    activation: {}", act.description()));
    }
    out
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => ForgeConfig::load(path)?,
        None => ForgeConfig::default(),
    };
    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), kind = %args.kind, count = args.count, "forging");

    let request = ArtifactRequest {
        scroll: args.scroll,
        cursed: args.cursed,
        bias_hint: args.bias,
    };

    let mut forged = Vec::new();
    let mut id = ObjectId::NONE;
    for _ in 0..args.count {
        id = id.next();
        let mut obj = Object::new(id, args.kind);
        become_random_artifact(&mut obj, &mut rng, &config, &request)?;
        forged.push(obj);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&forged)?);
    } else {
        for obj in &forged {
            println!("{}", describe(obj));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hb-forge: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_kind_and_bias() {
        let args =
            Args::try_parse_from(["hb-forge", "--kind", "cloak", "--bias", "fire", "-n", "3"])
                .unwrap();
        assert_eq!(args.kind, ItemKind::Cloak);
        assert_eq!(args.bias, Some(ArtifactBias::Fire));
        assert_eq!(args.count, 3);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(Args::try_parse_from(["hb-forge", "--kind", "teapot"]).is_err());
    }

    #[test]
    fn test_ammo_is_a_forge_error() {
        let args = Args::try_parse_from(["hb-forge", "--kind", "arrow", "--seed", "1"]).unwrap();
        assert!(matches!(run(&args), Err(CliError::Forge(_))));
    }

    #[test]
    fn test_describe_lists_flags() {
        let mut obj = Object::new(ObjectId(1), ItemKind::Ring);
        let mut rng = GameRng::new(4);
        let config = ForgeConfig::default();
        become_random_artifact(&mut obj, &mut rng, &config, &ArtifactRequest::default()).unwrap();
        let text = describe(&obj);
        assert!(text.starts_with("ring "));
        assert!(text.contains("IGNORE_FIRE"));
    }
}
