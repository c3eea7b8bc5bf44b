//! Nutrition Label Toolkit (labelgen)
//!
//! Command-line front end: builds nutrition labels from panel JSON,
//! validates and formats barcode data, and runs the recipe calculators.
//! All machine-readable output goes to stdout; logging and the startup
//! banner go to stderr.

use std::error::Error;
use std::fs;
use std::io::Read;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use labelgen::barcode::{self, Symbology};
use labelgen::build_info::{self, BuildInfo};
use labelgen::label::{build_aggregate_label, build_label, AggregateItem, LabelFormat};
use labelgen::models::NutrientPanel;
use labelgen::recipe::{self, Recipe};

#[derive(Parser)]
#[command(name = "labelgen")]
#[command(about = "Nutrition label computation and barcode data formatting")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a nutrition label from a panel JSON file
    Label {
        /// Path to the panel JSON, or "-" for stdin
        input: String,

        /// Label format (us-standard, us-simplified, us-dual-column,
        /// us-linear, us-tabular, us-vertical-condensed, us-bilingual,
        /// us-aggregate, eu, canada, australia, india)
        #[arg(short, long, default_value = "us-standard")]
        format: String,

        /// Variety-pack item as name=fraction; repeat per item
        /// (us-aggregate only)
        #[arg(long = "item")]
        items: Vec<String>,
    },

    /// Validate and format barcode data
    Barcode {
        /// Symbology (upc-a, ean-13, upc-e, ean-8, gs1-128, itf-14,
        /// data-bar, data-matrix, qr)
        symbology: String,

        /// Raw barcode data
        data: String,

        /// Only validate, do not print the formatted string
        #[arg(long)]
        validate_only: bool,
    },

    /// Recipe calculators: label panels, baker's percentages, scaling
    Recipe {
        /// Path to the recipe JSON, or "-" for stdin
        input: String,

        /// Print baker's percentages and hydration instead of a label
        #[arg(long)]
        bakers: bool,

        /// Label format for the recipe's per-serving panel
        #[arg(short, long, default_value = "us-standard")]
        format: String,

        /// Scale total flour to this many grams first
        #[arg(long)]
        flour: Option<f64>,

        /// Scale the whole batch to this many grams first
        #[arg(long)]
        weight: Option<f64>,

        /// Scale the batch to this many servings first
        #[arg(long)]
        servings: Option<f64>,
    },

    /// Print build information as JSON
    Version,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging (output to stderr so stdout stays machine-readable)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("labelgen=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Label {
            input,
            format,
            items,
        } => {
            let format = parse_format(&format)?;
            let panel: NutrientPanel = serde_json::from_str(&read_input(&input)?)?;

            let label = if items.is_empty() {
                build_label(&panel, format)
            } else {
                if format != LabelFormat::UsAggregate {
                    return Err("--item requires --format us-aggregate".into());
                }
                build_aggregate_label(&panel, &parse_items(&items)?)
            };
            println!("{}", serde_json::to_string_pretty(&label)?);
        }

        Command::Barcode {
            symbology,
            data,
            validate_only,
        } => {
            let symbology = Symbology::from_str(&symbology)
                .ok_or_else(|| format!("Unknown symbology '{}'", symbology))?;
            barcode::check(symbology, &data)?;
            if validate_only {
                println!("valid");
            } else {
                println!("{}", barcode::format_barcode(symbology, &data)?);
            }
        }

        Command::Recipe {
            input,
            bakers,
            format,
            flour,
            weight,
            servings,
        } => {
            let mut batch: Recipe = serde_json::from_str(&read_input(&input)?)?;
            if let Some(target) = flour {
                batch = recipe::scale_to_flour(&batch, target)?;
            }
            if let Some(target) = weight {
                batch = recipe::scale_to_weight(&batch, target)?;
            }
            if let Some(target) = servings {
                batch = recipe::scale_to_yield(&batch, target)?;
            }

            if bakers {
                for line in recipe::bakers_percentages(&batch)? {
                    println!("{:<24} {:>8.1} g {:>7.1}%", line.name, line.grams, line.percent);
                }
                println!("{:<24} {:>18.1}%", "Hydration", recipe::hydration(&batch)?);
            } else {
                let format = parse_format(&format)?;
                let label = build_label(&batch.to_panel()?, format);
                println!("{}", serde_json::to_string_pretty(&label)?);
            }
        }

        Command::Version => {
            build_info::print_startup_banner();
            println!("{}", serde_json::to_string_pretty(&BuildInfo::current())?);
        }
    }

    Ok(())
}

fn read_input(path: &str) -> Result<String, Box<dyn Error>> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn parse_format(s: &str) -> Result<LabelFormat, String> {
    LabelFormat::from_str(s).ok_or_else(|| {
        let known: Vec<&str> = LabelFormat::ALL.iter().map(|f| f.as_str()).collect();
        format!(
            "Unknown label format '{}'. Expected one of: {}",
            s,
            known.join(", ")
        )
    })
}

fn parse_items(specs: &[String]) -> Result<Vec<AggregateItem>, Box<dyn Error>> {
    let mut items = Vec::with_capacity(specs.len());
    for spec in specs {
        let (name, fraction) = spec
            .split_once('=')
            .ok_or_else(|| format!("Expected name=fraction, got '{}'", spec))?;
        items.push(AggregateItem {
            name: name.trim().to_string(),
            fraction: fraction.trim().parse()?,
        });
    }
    Ok(items)
}
