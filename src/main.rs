//! stubgen — generate Java class skeletons from one-line class descriptions.
//!
//! Each input line describes one class:
//!
//! ```text
//! pl.agh.Test public static void run() public int add(int a, int b) int=count nodoc nomain
//! ```
//!
//! and becomes `<out>/pl/agh/Test.java` with the package declaration, fields,
//! empty method bodies, optional javadoc and an optional `main` stub.
//!
//! Usage: `stubgen classes.txt out/`

mod files;
mod model;
mod parser;
mod render;
mod settings;
mod validate;

use anyhow::Result;
use clap::Parser;
use model::GenerationOptions;
use render::Renderer;
use settings::Settings;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stubgen",
    about = "Generate Java class skeletons from one-line class descriptions"
)]
struct Cli {
    /// Description file followed by the output directory
    args: Vec<String>,

    /// Output language
    #[arg(short = 't', long, default_value = "java")]
    target: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load()?;

    let errors = validate::check_arguments(&cli.args);
    if validate::report_errors(&errors, &settings.error_report)? {
        println!(
            "Errors occurred, check {}",
            settings.error_report.display()
        );
        return Ok(ExitCode::FAILURE);
    }

    let renderer = render::create_renderer(&cli.target)?;
    let input = Path::new(&cli.args[0]);
    let output_root = Path::new(&cli.args[1]);

    let parsed = parse_file(input)?;
    generate(renderer.as_ref(), &parsed, output_root);

    if settings.summary {
        for options in &parsed {
            println!("\n{}", options);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Parse every non-blank line of the description file.
fn parse_file(input: &Path) -> Result<Vec<GenerationOptions>> {
    let lines = files::read_lines(input)?;
    let mut parsed = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let options = parser::parse_line(line);
        if options.has_residue() {
            warn!(
                line = index + 1,
                residue = %options.residue,
                "unparsed text left on line"
            );
        }
        parsed.push(options);
    }

    Ok(parsed)
}

/// Render and write one file per parsed class. Returns how many were written.
///
/// A class that cannot be written is logged and skipped; the rest still go out.
fn generate(renderer: &dyn Renderer, parsed: &[GenerationOptions], output_root: &Path) -> usize {
    let mut written = 0;

    for options in parsed {
        let Some(relative) = renderer.output_path(options) else {
            warn!(residue = %options.residue, "no class name found, skipping line");
            continue;
        };

        files::ensure_dir(&output_root.join(options.package_dir()));

        let path = output_root.join(relative);
        match files::write_source(&path, &renderer.render(options)) {
            Ok(()) => {
                info!(path = %path.display(), "wrote class");
                written += 1;
            }
            Err(e) => error!("{:#}", e),
        }
    }

    info!(written, total = parsed.len(), "generation finished");
    written
}
