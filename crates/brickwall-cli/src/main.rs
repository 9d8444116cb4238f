//! brickwall CLI - brick wall layout and quantity estimates
//!
//! Reads a design from flags and/or a TOML file, lays out the four walls and
//! prints or writes the result.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use brickwall::{
    Design, DesignFile, Field, Frame, JsonSceneWriter, RawDesign, Report, Session, StlWriter,
    ValidationErrors,
};

#[derive(Parser)]
#[command(name = "brickwall")]
#[command(about = "Parametric brick wall layout and brick quantity estimator", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print wall thickness, brick estimate and per-wall counts
    Estimate {
        #[command(flatten)]
        design: DesignArgs,
    },
    /// Write the laid-out walls as a JSON scene document
    Layout {
        #[command(flatten)]
        design: DesignArgs,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export every brick as a binary STL mesh
    Export {
        #[command(flatten)]
        design: DesignArgs,
        /// Output .stl file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Validate a design and report every bad field
    Check {
        #[command(flatten)]
        design: DesignArgs,
    },
}

/// Design inputs. Values are taken as text so bad numbers are reported per field.
#[derive(Args, Debug, Default)]
struct DesignArgs {
    /// TOML design file, applied before the flags below
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Footprint length along X (mm)
    #[arg(long)]
    house_length: Option<String>,
    /// Footprint width along Z (mm)
    #[arg(long)]
    house_width: Option<String>,
    /// Wall height (mm)
    #[arg(long)]
    house_height: Option<String>,
    /// Brick length (mm)
    #[arg(long)]
    brick_length: Option<String>,
    /// Brick width (mm)
    #[arg(long)]
    brick_width: Option<String>,
    /// Brick height (mm)
    #[arg(long)]
    brick_height: Option<String>,
    /// Mortar joint thickness (mm)
    #[arg(long)]
    mortar: Option<String>,
    /// half-brick, one-brick, one-and-a-half-brick or two-brick
    #[arg(long)]
    wall_type: Option<String>,
}

impl DesignArgs {
    fn raw(&self) -> RawDesign {
        RawDesign {
            house_length: self.house_length.clone(),
            house_width: self.house_width.clone(),
            house_height: self.house_height.clone(),
            brick_length: self.brick_length.clone(),
            brick_width: self.brick_width.clone(),
            brick_height: self.brick_height.clone(),
            mortar: self.mortar.clone(),
            wall_type: self.wall_type.clone(),
        }
    }

    /// Defaults, then the design file, then the flags.
    fn resolve(&self) -> Result<std::result::Result<Design, ValidationErrors>> {
        let mut raw = RawDesign::default();
        if let Some(path) = &self.config {
            let file = DesignFile::load(path)
                .with_context(|| format!("failed to read design file {}", path.display()))?;
            tracing::debug!(path = %path.display(), "applying design file");
            raw = file.to_raw();
        }
        raw.overlay(&self.raw());
        Ok(raw.resolve(Design::default()))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Estimate { design } => {
            let report = compute_report(&design)?;
            print_estimate(&report);
        }
        Commands::Layout { design, output } => {
            let mut session = session_for(&design)?;
            match &output {
                Some(path) => {
                    let mut writer = JsonSceneWriter::new(Vec::new());
                    session.render(&mut writer)?;
                    fs::write(path, writer.into_inner())
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Wrote scene to {}", path.display());
                }
                None => {
                    session.render(&mut JsonSceneWriter::new(io::stdout().lock()))?;
                }
            }
        }
        Commands::Export { design, output } => {
            let mut session = session_for(&design)?;
            // render fully before touching the output path
            let mut writer = StlWriter::new(Vec::new());
            session.render(&mut writer)?;
            fs::write(&output, writer.into_inner())
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Exported STL to {}", output.display());
        }
        Commands::Check { design } => match design.resolve()? {
            Ok(design) => {
                println!(
                    "Design OK: {} wall, {} mm thick",
                    design.bond,
                    design.wall_thickness()
                );
            }
            Err(errors) => {
                print_field_errors(&errors);
                anyhow::bail!("design has {} invalid field(s)", errors.fields.len());
            }
        },
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn session_for(args: &DesignArgs) -> Result<Session> {
    let design = match args.resolve()? {
        Ok(design) => design,
        Err(errors) => {
            print_field_errors(&errors);
            anyhow::bail!("design has {} invalid field(s)", errors.fields.len());
        }
    };
    tracing::info!(
        wall_type = %design.bond,
        length = design.house.length,
        width = design.house.width,
        height = design.house.height,
        "laying out walls"
    );
    let mut session = Session::new();
    if let Frame::Invalid(errors) = session.recompute(&design) {
        print_field_errors(errors);
        anyhow::bail!("design has {} invalid field(s)", errors.fields.len());
    }
    if session.report().is_none() {
        anyhow::bail!("nothing to lay out");
    }
    Ok(session)
}

fn compute_report(args: &DesignArgs) -> Result<Report> {
    let session = session_for(args)?;
    session
        .report()
        .cloned()
        .context("session holds no report")
}

fn print_field_errors(errors: &ValidationErrors) {
    for field in Field::ALL {
        for err in errors.for_field(field) {
            eprintln!("  {:<13} {}", err.field.name(), err.reason);
        }
    }
}

fn print_estimate(report: &Report) {
    let design = &report.design;
    println!("Wall type:        {}", design.bond);
    println!("Wall thickness:   {} mm", report.thickness);
    println!(
        "Footprint:        {} x {} mm, {} mm high",
        design.house.length, design.house.width, design.house.height
    );
    println!("Estimated bricks: {}", report.estimated_count);
    println!("Placed bricks:    {}", report.placed_count());
    println!();
    println!("{:<8} {:>10} {:>8} {:>8}", "wall", "length", "courses", "bricks");
    for wall in &report.building.walls {
        if wall.omitted {
            println!("{:<8} {:>10} {:>8} {:>8}", wall.side, "omitted", "-", "-");
            continue;
        }
        println!(
            "{:<8} {:>10.1} {:>8} {:>8}",
            wall.side,
            wall.spec.length,
            wall.layout.rows,
            wall.bricks.len()
        );
    }
}
