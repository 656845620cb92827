use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use deductix::pipeline::constants::DEFAULT_BUFFER_CAPACITY;
use deductix::puzzle::DEFAULT_MATERIALIZE_LIMIT;
use deductix::{Candidate, HistoryPolicy, PuzzleConfig, PuzzleGenerator};
use log::info;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Which rounds are printed as clues
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Policy {
    /// Every generated round
    Every,
    /// Only rounds that eliminate candidates
    Shrinking,
}

impl From<Policy> for HistoryPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Every => HistoryPolicy::EveryRound,
            Policy::Shrinking => HistoryPolicy::ShrinkingOnly,
        }
    }
}

/// Deductix - Generate arithmetic deduction puzzles
#[derive(Parser, Debug)]
#[command(name = "deductix")]
#[command(about = "Generate clues from which a hidden sequence of + - * / can be deduced")]
#[command(version)]
pub struct CliArgs {
    /// Number of terms (numbers) in the generated problems
    #[arg(long, default_value_t = 3)]
    pub terms: usize,

    /// Minimum value for a term (inclusive)
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub min: i64,

    /// Maximum value for a term (exclusive)
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    pub max: i64,

    /// Number of rounds to generate
    #[arg(long, visible_alias = "att", default_value_t = 20)]
    pub attempts: usize,

    /// Hidden operator sequence such as "+*" (random when omitted)
    #[arg(long)]
    pub operators: Option<Candidate>,

    /// Seed for reproducible puzzles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which rounds to keep as clues
    #[arg(long, value_enum, default_value = "every")]
    pub policy: Policy,

    /// Items buffered between pipeline stages
    #[arg(long, default_value_t = DEFAULT_BUFFER_CAPACITY)]
    pub buffer: usize,

    /// Also print the candidates consistent with every clue
    #[arg(long)]
    pub show_survivors: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub puzzle: PuzzleConfig,
    pub operators: Option<Candidate>,
    pub show_survivors: bool,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            puzzle: PuzzleConfig {
                term_count: args.terms,
                min: args.min,
                max: args.max,
                attempts: args.attempts,
                history_policy: args.policy.into(),
                buffer_capacity: args.buffer,
                materialize_limit: DEFAULT_MATERIALIZE_LIMIT,
                seed: args.seed,
            },
            operators: args.operators,
            show_survivors: args.show_survivors,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let config = CliConfig::from(CliArgs::parse());

    config
        .puzzle
        .validate()
        .context("Invalid puzzle configuration")?;

    Ok(config)
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let generator = PuzzleGenerator::new(config.puzzle);
    let puzzle_config = generator.config();
    info!(
        "Creating a {} term problem. Each term has a min of {} and a max of {}",
        puzzle_config.term_count, puzzle_config.min, puzzle_config.max
    );
    let puzzle = match config.operators {
        Some(operators) => generator.generate(operators),
        None => generator.generate_random(),
    }
    .context("Failed to generate puzzle")?;

    println!(
        "For the operators: {}, the terms generated are:",
        puzzle.actual()
    );

    if config.show_survivors {
        let (history, survivors) = puzzle.into_parts();
        for clue in &history {
            println!("{}", clue);
        }
        println!("Remaining candidates ({}):", survivors.len());
        for candidate in &survivors {
            println!("{}", candidate);
        }
    } else {
        for clue in puzzle.history() {
            println!("{}", clue);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("deductix").chain(extra.iter().copied()))
    }

    #[test]
    fn test_defaults_match_library_defaults() {
        let parsed = args(&[]);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            let config = CliConfig::from(parsed);
            assert_eq!(config.puzzle, PuzzleConfig::default());
            assert!(config.operators.is_none());
            assert!(!config.show_survivors);
        }
    }

    #[test]
    fn test_cli_args_parsing() {
        let parsed = args(&[
            "--terms",
            "4",
            "--min",
            "-5",
            "--max",
            "5",
            "--att",
            "7",
            "--operators",
            "+*/",
            "--seed",
            "9",
            "--policy",
            "shrinking",
        ]);
        assert!(parsed.is_ok());

        if let Ok(parsed) = parsed {
            let config = CliConfig::from(parsed);
            assert_eq!(config.puzzle.term_count, 4);
            assert_eq!(config.puzzle.min, -5);
            assert_eq!(config.puzzle.max, 5);
            assert_eq!(config.puzzle.attempts, 7);
            assert_eq!(config.puzzle.seed, Some(9));
            assert_eq!(config.puzzle.history_policy, HistoryPolicy::ShrinkingOnly);
            assert_eq!(
                config.operators.map(|c| c.to_string()),
                Some("[+ * /]".to_string())
            );
        }
    }

    #[test]
    fn test_unknown_operator_symbol_is_rejected() {
        assert!(args(&["--operators", "+%"]).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
