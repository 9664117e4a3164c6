use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an applicant file and print the component breakdown
    Score {
        /// Path to the applicant file (YAML, or JSON by extension)
        file: PathBuf,

        /// Emit the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Score the built-in sample applicant
    Sample {
        /// Emit the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Write a starter config file with the default weights and bounds
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,

        /// Where to write the config (defaults to ~/.config/creditworthy/config.yaml)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "creditworthy")]
#[command(about = "Bureau-style credit score calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/creditworthy/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    // Init writes a config; it must not require one to exist first
    if let Commands::Init { force, path } = &cli.command {
        match creditworthy::config::write_starter_config(path.clone(), *force) {
            Ok(written) => {
                println!("Config written to {}", written.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Init error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config
    let config_path = cli.config.clone().map(PathBuf::from);
    let config = match creditworthy::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.effective_scoring();
    if let Err(errors) = creditworthy::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        let w = &scoring.weights;
        eprintln!(
            "Weights: payment_history={} credit_utilization={} credit_age={} credit_mix={} new_credit={}",
            w.payment_history, w.credit_utilization, w.credit_age, w.credit_mix, w.new_credit
        );
        eprintln!("Score bounds: {}..{}", scoring.min_score, scoring.max_score);
        if scoring.clamp_components {
            eprintln!("Component scores clamped to [0, 1]");
        }
    }

    let (applicant, json) = match cli.command {
        Commands::Score { file, json } => {
            let applicant = match creditworthy::applicant::load_applicant(&file) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Applicant error: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            (applicant, json)
        }
        Commands::Sample { json } => (creditworthy::applicant::Applicant::sample(), json),
        Commands::Init { .. } => unreachable!("handled above"),
    };

    if cli.verbose {
        eprintln!("Scoring applicant: {:?}", applicant);
    }

    let result = creditworthy::scoring::calculate_score(&applicant, &scoring);

    if json {
        match creditworthy::output::format_json(&result, &scoring) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Output error: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    } else {
        let use_colors = creditworthy::output::should_use_colors();
        println!(
            "{}",
            creditworthy::output::format_report(&result, &scoring, use_colors)
        );
    }

    std::process::exit(EXIT_SUCCESS);
}
