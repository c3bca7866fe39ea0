// src/cli.rs
use std::{fs, io, path::PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use log::{info, LevelFilter};

use crate::config::consts::DEFAULT_DATASET;
use crate::config::options::AppOptions;
use crate::engine::{CompareRequest, Engine};
use crate::export::{self, ExportFormat};
use crate::normalize::DegeneratePolicy;

#[derive(Debug, Parser)]
#[command(author, version, about = "Compare FPL players and teams from a CSV dataset")]
pub struct Cli {
    /// Player dataset (CSV with header row)
    #[arg(long, global = true, default_value = DEFAULT_DATASET)]
    pub data: PathBuf,

    /// Category map as JSON: [{"label": "...", "metrics": ["..."]}, ...]
    #[arg(long, global = true)]
    pub categories: Option<PathBuf>,

    /// Constant metrics: scale to 0 ("zero") or fail the request ("reject")
    #[arg(long, global = true, default_value = "zero")]
    pub degenerate: DegeneratePolicy,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List players whose name contains QUERY (index,name,team)
    Players { query: String },

    /// List teams whose name contains QUERY
    Teams { query: String },

    /// Print the category map
    Categories,

    /// Build one chart spec per category
    Compare {
        /// Player row index (repeatable)
        #[arg(short, long = "player")]
        players: Vec<usize>,

        /// Team name (repeatable)
        #[arg(short, long = "team")]
        teams: Vec<String>,

        /// radar | bar | line | scatter | area | box
        #[arg(short, long, default_value = "radar")]
        chart: String,

        /// json | csv | tsv
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

impl Cli {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default().with_dataset(&self.data);
        opts.data.categories = self.categories.clone();
        opts.compare.degenerate = self.degenerate;
        opts
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    crate::log::init(LevelFilter::Debug);

    let cli = Cli::parse();
    let options = cli.options();
    let engine = Engine::load(&options)
        .wrap_err_with(|| format!("Failed to load {}", options.data.dataset.display()))?;

    match cli.command {
        Command::Players { query } => {
            export::write_players(io::stdout().lock(), &engine.find_players(&query))?;
        }
        Command::Teams { query } => {
            for team in engine.find_teams(&query) {
                println!("{team}");
            }
        }
        Command::Categories => {
            for cat in engine.categories() {
                println!("{}: {}", cat.label, cat.metrics.join(", "));
            }
        }
        Command::Compare { players, teams, chart, format, out } => {
            let req = CompareRequest { players, teams, chart };
            let specs = engine.compare(&req)?;
            let text = export::render(&specs, format)?;

            match out {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        if !parent.as_os_str().is_empty() {
                            fs::create_dir_all(parent)?;
                        }
                    }
                    fs::write(&path, text)
                        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                    info!("CLI: wrote {} chart(s) as {} → {}", specs.len(), format, path.display());
                    eprintln!("Wrote {}", path.display());
                }
                None => print!("{text}"),
            }
        }
    }

    Ok(())
}
