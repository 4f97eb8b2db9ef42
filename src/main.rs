use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use chastota::io_utils::{chastota_cli_error, io_cli_error};
use chastota::{freq, parse_key_map, plot, preprocess, remap, PlotOptions};

#[derive(Parser)]
#[command(version, about = "Cyrillic frequency analysis and substitution decoding")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a character-frequency histogram from a text file
    Hist {
        /// Input text file (UTF-8)
        input: PathBuf,
        /// Save the chart as a PNG instead of printing it
        #[arg(long)]
        out: Option<PathBuf>,
        /// Chart title
        #[arg(long, default_value = "Character frequency")]
        title: String,
        /// Optional CSV output path for the ranked counts
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Optional JSON output path for the ranked counts
        #[arg(long)]
        json: Option<PathBuf>,
        /// Keep sentence punctuation and spaces instead of letters only
        #[arg(long)]
        keep_punctuation: bool,
        /// Chart width in pixels
        #[arg(long, default_value_t = 1200)]
        width: u32,
        /// Chart height in pixels
        #[arg(long, default_value_t = 800)]
        height: u32,
    },
    /// Decode a substitution cipher with an ordered key map
    Decode {
        /// Input text file (UTF-8)
        input: PathBuf,
        /// JSON key map, e.g. {"А": "Я", "Д": null}
        #[arg(long)]
        key: PathBuf,
        /// Also write the decoded text to this path
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct Record {
    character: char,
    count: u64,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command {
        Command::Hist {
            input,
            out,
            title,
            csv,
            json,
            keep_punctuation,
            width,
            height,
        } => {
            let raw = fs::read_to_string(&input)
                .map_err(|e| io_cli_error("reading input file", &input, e))?;
            let text = if keep_punctuation {
                preprocess::for_display(&raw)
            } else {
                preprocess::for_frequency(&raw)
            };
            let ranked = freq::ranked(&text);

            if let Some(path) = &csv {
                let file =
                    fs::File::create(path).map_err(|e| io_cli_error("creating csv", path, e))?;
                let mut wtr = csv::Writer::from_writer(file);
                wtr.write_record(["character", "count"])?;
                for &(c, n) in &ranked {
                    wtr.write_record([c.to_string(), n.to_string()])?;
                }
                wtr.flush()?;
            }

            if let Some(path) = &json {
                let records: Vec<Record> = ranked
                    .iter()
                    .map(|&(character, count)| Record { character, count })
                    .collect();
                let mut file =
                    fs::File::create(path).map_err(|e| io_cli_error("creating json", path, e))?;
                serde_json::to_writer_pretty(&mut file, &records)?;
                file.write_all(b"\n")?;
            }

            match &out {
                Some(path) => {
                    let options = PlotOptions { width, height };
                    plot::render_png(&ranked, &title, path, options)
                        .map_err(|e| chastota_cli_error("rendering chart", e))?;
                }
                None => {
                    plot::render_console(&ranked, &title, &mut io::stdout())
                        .map_err(|e| chastota_cli_error("rendering chart", e))?;
                }
            }
            Ok(())
        }

        Command::Decode { input, key, out } => {
            let text = fs::read_to_string(&input)
                .map_err(|e| io_cli_error("reading input file", &input, e))?;
            let key_json =
                fs::read_to_string(&key).map_err(|e| io_cli_error("reading key file", &key, e))?;
            let map =
                parse_key_map(&key_json).map_err(|e| chastota_cli_error("parsing key map", e))?;

            let decoded = remap(&text, &map);
            println!("{text}");
            println!();
            println!("{decoded}");

            if let Some(path) = &out {
                fs::write(path, &decoded)
                    .map_err(|e| io_cli_error("writing decoded text", path, e))?;
            }
            Ok(())
        }
    }
}
