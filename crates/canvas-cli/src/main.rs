use std::fs;
use std::io::Write as _;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::Value;
use tabwriter::TabWriter;

use canvas_io::hashing::FingerprintAlgorithm;
use canvas_io::prelude::*;
use canvas_registry::BlockType;

static LAYOUT_SCHEMA: Lazy<Result<Validator, String>> = Lazy::new(|| {
    let schema_json: Value = serde_json::from_str(include_str!(
        "../../../spec/schemas/layout-schema.v1.schema.json"
    ))
    .map_err(|e| format!("invalid bundled layout schema JSON: {e}"))?;

    Validator::new(&schema_json).map_err(|e| format!("compile bundled layout schema: {e}"))
});

#[derive(Debug, Parser)]
#[command(name = "canvas", version, about = "Canvas layout schema engine CLI")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Direction {
    Up,
    Down,
}

impl From<Direction> for ShiftDirection {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Up => ShiftDirection::Up,
            Direction::Down => ShiftDirection::Down,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the default schema, optionally from onboarding seed signals.
    Default {
        /// Seed JSON path (links + monetization hints)
        #[arg(long)]
        seed: Option<String>,
        /// Output minified JSON
        #[arg(long)]
        min: bool,
    },
    /// Sanitize arbitrary stored JSON into a valid schema.
    Sanitize {
        /// Input JSON path (any content)
        input: String,
        /// Seed JSON path, used when the input is unusable
        #[arg(long)]
        seed: Option<String>,
        /// Output minified JSON
        #[arg(long)]
        min: bool,
        /// Print a repair report to stderr
        #[arg(long)]
        report: bool,
    },
    /// List a schema's blocks as a table.
    Inspect {
        /// Input JSON path
        input: String,
        /// Fail on malformed input instead of sanitizing it
        #[arg(long)]
        strict: bool,
    },
    /// Validate a schema file against the wire schema and invariants.
    Validate {
        /// Input JSON path
        input: String,
    },
    /// Move a block to another block's index.
    Move {
        input: String,
        source_id: String,
        target_id: String,
        #[arg(long)]
        min: bool,
    },
    /// Swap a block with its neighbor.
    Shift {
        input: String,
        block_id: String,
        #[arg(value_enum)]
        direction: Direction,
        #[arg(long)]
        min: bool,
    },
    /// Insert a fresh block at an index.
    Insert {
        input: String,
        /// Block type wire spelling (e.g. "text", "links")
        block_type: String,
        index: usize,
        #[arg(long)]
        min: bool,
    },
    /// Duplicate a block in place.
    Duplicate {
        input: String,
        block_id: String,
        #[arg(long)]
        min: bool,
    },
    /// Print a schema fingerprint over canonical JSON.
    Fingerprint {
        input: String,
        /// Hash algorithm: xxh64 or sha256
        #[arg(long, default_value = "xxh64")]
        algo: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Default { seed, min } => {
            let seed = load_seed(seed.as_deref());
            let schema = create_default_layout_schema(seed.as_ref());
            print_schema(&schema, min)?;
        }

        Command::Sanitize {
            input,
            seed,
            min,
            report,
        } => {
            let text = read_input(&input);
            let seed = load_seed(seed.as_deref());
            let value: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
            let (schema, repair) = sanitize_layout_schema_with_report(&value, seed.as_ref());

            if report {
                eprintln!("{}", serde_json::to_string_pretty(&repair)?);
            }
            print_schema(&schema, min)?;
        }

        Command::Inspect { input, strict } => {
            let text = read_input(&input);
            let schema = if strict {
                match parse_layout_schema_json_str(&text) {
                    Ok(schema) => schema,
                    Err(e) => {
                        eprintln!("{e}");
                        process::exit(2);
                    }
                }
            } else {
                sanitize_layout_schema_json_str(&text, None)
            };

            let mut tw = TabWriter::new(std::io::stdout());
            writeln!(tw, "position\tid\ttype\ttitle\tvisible")?;
            for block in &schema.blocks {
                writeln!(
                    tw,
                    "{}\t{}\t{}\t{}\t{}",
                    block.position, block.id, block.block_type, block.title, block.visible
                )?;
            }
            tw.flush()?;
        }

        Command::Validate { input } => {
            let text = read_input(&input);

            let value: Value = match serde_json::from_str(&text) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("Invalid JSON: {e}");
                    process::exit(2);
                }
            };

            let validator = match LAYOUT_SCHEMA.as_ref() {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            };

            let errors: Vec<String> = validator.iter_errors(&value).map(|e| e.to_string()).collect();
            if !errors.is_empty() {
                for e in errors {
                    eprintln!("{e}");
                }
                process::exit(2);
            }

            if let Err(e) = parse_layout_schema_json_str(&text) {
                eprintln!("{e}");
                process::exit(2);
            }

            println!("OK");
        }

        Command::Move {
            input,
            source_id,
            target_id,
            min,
        } => {
            let schema = sanitized(&input);
            let blocks = move_block(&schema.blocks, &source_id, &target_id);
            print_schema(&edited(schema, blocks), min)?;
        }

        Command::Shift {
            input,
            block_id,
            direction,
            min,
        } => {
            let schema = sanitized(&input);
            let blocks = shift_block(&schema.blocks, &block_id, direction.into());
            print_schema(&edited(schema, blocks), min)?;
        }

        Command::Insert {
            input,
            block_type,
            index,
            min,
        } => {
            let Some(block_type) = BlockType::parse(&block_type) else {
                eprintln!("unknown block type '{block_type}'");
                process::exit(2);
            };

            let schema = sanitized(&input);
            let blocks = insert_block(&schema.blocks, block_type, index);
            print_schema(&edited(schema, blocks), min)?;
        }

        Command::Duplicate {
            input,
            block_id,
            min,
        } => {
            let schema = sanitized(&input);
            let blocks = duplicate_block(&schema.blocks, &block_id);
            print_schema(&edited(schema, blocks), min)?;
        }

        Command::Fingerprint { input, algo } => {
            let Some(algorithm) = FingerprintAlgorithm::parse(&algo) else {
                eprintln!("unsupported fingerprint algorithm '{algo}'");
                process::exit(2);
            };

            let text = read_input(&input);
            let schema = match parse_layout_schema_json_str(&text) {
                Ok(schema) => schema,
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(2);
                }
            };

            let fingerprint = hashing::schema_fingerprint(&schema, algorithm)?;
            println!("{}:{fingerprint}", algorithm.as_str());
        }
    }

    Ok(())
}

/// Read an input file, exiting 1 on I/O errors (stable for CI).
fn read_input(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn load_seed(path: Option<&str>) -> Option<LayoutSeed> {
    let path = path?;
    let text = read_input(path);
    match serde_json::from_str(&text) {
        Ok(seed) => Some(seed),
        Err(e) => {
            eprintln!("invalid seed JSON: {e}");
            process::exit(1);
        }
    }
}

/// Every edit command re-enters through the sanitizer first; stored state
/// is never trusted even when it came from this same tool.
fn sanitized(path: &str) -> LayoutSchema {
    let text = read_input(path);
    sanitize_layout_schema_json_str(&text, None)
}

fn edited(schema: LayoutSchema, blocks: Vec<LayoutBlock>) -> LayoutSchema {
    let mut out = LayoutSchema {
        version: schema.version,
        updated_at: schema.updated_at,
        blocks,
    };
    out.touch();
    out
}

fn print_schema(schema: &LayoutSchema, min: bool) -> anyhow::Result<()> {
    let out = if min {
        serde_json::to_string(schema)?
    } else {
        serde_json::to_string_pretty(schema)?
    };
    println!("{out}");
    Ok(())
}
