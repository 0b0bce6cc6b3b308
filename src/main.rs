use cardgen::application::generator::CardGenerator;
use cardgen::domain::card_data::CardData;
use cardgen::domain::card_number::format_display;
use cardgen::domain::luhn;
use cardgen::domain::network::PaymentNetwork;
use cardgen::error::CardError;
use cardgen::infrastructure::config::{AppConfig, OutputFormat};
use cardgen::interfaces::csv::card_writer::{CardWriter, ValidationRecord};
use cardgen::interfaces::csv::number_reader::NumberReader;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./cardgen.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate synthetic cards
    Generate {
        /// Number of cards to generate
        #[arg(long)]
        count: Option<usize>,
        /// Force a payment network (visa, mastercard, mir, mir2, unionpay, visa-plus)
        #[arg(long)]
        network: Option<PaymentNetwork>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Check card numbers against the Luhn checksum
    Validate {
        /// Single number to check
        number: Option<String>,
        /// CSV file with a `number` column
        #[arg(long, conflicts_with = "number")]
        input: Option<PathBuf>,
    },
    /// Print the Luhn check digit for a partial number
    CheckDigit { partial: String },
    /// Print a digit string in groups of four
    Format { digits: String },
    /// List supported payment networks
    Networks,
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Only `generate` reads settings.
    let config = match cli.command {
        Command::Generate { .. } => {
            let config = AppConfig::load(cli.config.as_deref()).into_diagnostic()?;
            init_tracing(&config.log_level);
            info!("Configuration loaded");
            config
        }
        _ => {
            let config = AppConfig::default();
            init_tracing(&config.log_level);
            config
        }
    };

    match cli.command {
        Command::Generate {
            count,
            network,
            seed,
            format,
        } => {
            let count = count.unwrap_or(config.generator.count);
            if count == 0 {
                return Err(CardError::Configuration("count must be at least 1".to_string()))
                    .into_diagnostic();
            }
            let network = network.or(config.generator.network);
            let format = format.unwrap_or(config.output.format);

            let mut generator = match seed.or(config.generator.seed) {
                Some(seed) => CardGenerator::seeded(seed),
                None => CardGenerator::from_os_rng(),
            };
            let cards: Vec<CardData> = (0..count)
                .map(|_| generator.generate_with(network))
                .collect();
            info!(count, "cards generated");

            let stdout = io::stdout();
            match format {
                OutputFormat::Csv => {
                    CardWriter::new(stdout.lock())
                        .write_cards(&cards)
                        .into_diagnostic()?;
                }
                OutputFormat::Json => {
                    let mut out = stdout.lock();
                    serde_json::to_writer_pretty(&mut out, &cards).into_diagnostic()?;
                    writeln!(out).into_diagnostic()?;
                }
            }
        }
        Command::Validate { number, input } => match (number, input) {
            (Some(number), _) => {
                let valid = luhn::is_valid(&number).into_diagnostic()?;
                println!("{}", if valid { "valid" } else { "invalid" });
            }
            (None, Some(path)) => {
                let file = File::open(path).into_diagnostic()?;
                let reader = NumberReader::new(file);
                let stdout = io::stdout();
                let mut writer = CardWriter::new(stdout.lock());
                for record in reader.records() {
                    match record {
                        Ok(record) => match luhn::is_valid(&record.number) {
                            Ok(valid) => {
                                writer
                                    .write_validation(&ValidationRecord {
                                        number: record.number,
                                        valid,
                                    })
                                    .into_diagnostic()?;
                            }
                            Err(e) => {
                                eprintln!("Error validating record: {}", e);
                            }
                        },
                        Err(e) => {
                            eprintln!("Error reading record: {}", e);
                        }
                    }
                }
                writer.flush().into_diagnostic()?;
            }
            (None, None) => return Err(miette!("provide a NUMBER or --input <CSV>")),
        },
        Command::CheckDigit { partial } => {
            let digit = luhn::check_digit(&partial).into_diagnostic()?;
            println!("{digit}");
        }
        Command::Format { digits } => {
            println!("{}", format_display(&digits));
        }
        Command::Networks => {
            let mut writer = csv::Writer::from_writer(io::stdout().lock());
            writer
                .write_record(["tag", "display_name", "bin_prefixes"])
                .into_diagnostic()?;
            for network in PaymentNetwork::ALL {
                let prefixes = network.bin_prefixes().join("|");
                writer
                    .write_record([network.as_str(), network.display_name(), prefixes.as_str()])
                    .into_diagnostic()?;
            }
            writer.flush().into_diagnostic()?;
        }
    }

    Ok(())
}
