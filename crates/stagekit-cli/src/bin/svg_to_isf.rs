use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use stagekit_cli::{CliError, LONG_VERSION, init_tracing, resolve_input_path};
use stagekit_core::{ConvertError, OutputMode, convert_svg_file, output_path_for};

#[derive(Parser, Debug)]
#[command(name = "svg-to-isf")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Generate an ISF/GLSL shader with one alpha input per SVG polygon.",
    long_about = None,
    after_help = "Examples:\n  svg-to-isf low_poly_dragonfly.svg         # writes low_poly_dragonfly.glsl\n  svg-to-isf low_poly_dragonfly.svg --isf   # writes low_poly_dragonfly.isf"
)]
struct Cli {
    /// Path to an .svg file (a pattern matching exactly one file is accepted)
    input: PathBuf,

    /// Write <input>.isf
    #[arg(long, conflicts_with = "glsl")]
    isf: bool,

    /// Write <input>.glsl (default)
    #[arg(long)]
    glsl: bool,

    /// Suppress the progress report
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Usage errors exit 1 like every other failure; --help/--version stay 0.
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => err.report(),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let input = resolve_input_path(&cli.input, "an .svg file")?;
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("check the path to the .svg file".to_string()),
        ));
    }

    // The ISF header is written in both modes; only the extension differs.
    let mode = if cli.isf {
        OutputMode::Isf
    } else {
        OutputMode::Glsl
    };
    if !cli.quiet {
        println!("SVG to ISF shader generator");
        println!("{}", "=".repeat(60));
        println!("  - Input:  {}", input.display());
        println!("  - Output: {}", output_path_for(&input, mode).display());
    }

    let conversion = match convert_svg_file(&input, mode) {
        Ok(conversion) => conversion,
        Err(ConvertError::NoPolygons { path }) => {
            return Err(CliError::new(
                format!("no polygons found in {}", path.display()),
                Some("only <polygon> elements with at least 3 points are converted".to_string()),
            ));
        }
        Err(err) => return Err(anyhow::Error::new(err).context("conversion failed").into()),
    };

    if !cli.quiet {
        let summary = conversion.summary;
        println!("  - Dimensions: {} x {}", conversion.width, conversion.height);
        println!("  - Polygons: {}", summary.polygons);
        println!("  - Triangle tests: {}", summary.triangle_tests);
        println!(
            "  - Parameters: {} (globalAlpha + {} polygon alphas + polygonColor + backgroundColor)",
            summary.parameters, summary.polygons
        );
        println!("OK: shader written -> {}", conversion.output.display());
    }
    Ok(())
}
