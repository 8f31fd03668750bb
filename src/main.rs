//! Command-line interface for wsdl2dts

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
use wsdl2dts::{convert_directory, convert_file, BatchReport, ConvertConfig, NamingPolicy};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "wsdl2dts")]
#[command(author, version, about = "Generate TypeScript declarations from WSDL schema types", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(clap::Args, Debug)]
struct EmitArgs {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// How schema names become TypeScript type names
    #[arg(long, value_enum)]
    naming: Option<NamingArg>,

    /// Omit the lint header
    #[arg(long)]
    no_header: bool,
}

#[cfg(feature = "cli")]
#[derive(ValueEnum, Clone, Copy, Debug)]
enum NamingArg {
    /// Keep names as written, suffix reserved words with `_`
    ReservedSuffix,
    /// Uppercase the first letter
    Capitalize,
}

#[cfg(feature = "cli")]
impl From<NamingArg> for NamingPolicy {
    fn from(arg: NamingArg) -> Self {
        match arg {
            NamingArg::ReservedSuffix => NamingPolicy::ReservedSuffix,
            NamingArg::Capitalize => NamingPolicy::Capitalize,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert every WSDL document in a folder
    Convert {
        /// Folder containing the WSDL documents
        #[arg(value_name = "INPUT_DIR")]
        input: Option<PathBuf>,

        /// Folder receiving the declaration files
        #[arg(short, long, value_name = "OUTPUT_DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        emit: EmitArgs,

        /// Print the run report as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Translate a single document and print the declarations
    Print {
        /// Path to the WSDL or XSD document
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        emit: EmitArgs,
    },
}

#[cfg(feature = "cli")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            emit,
            json,
        } => cmd_convert(input, output, emit, json),
        Commands::Print { file, emit } => cmd_print(file, emit),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn load_config(emit: &EmitArgs) -> Result<ConvertConfig, Box<dyn std::error::Error>> {
    let mut config = match &emit.config {
        Some(path) => ConvertConfig::from_file(path)?,
        None => ConvertConfig::default(),
    };

    if let Some(naming) = emit.naming {
        config = config.with_naming(naming.into());
    }
    if emit.no_header {
        config.emit.header = false;
    }

    Ok(config)
}

#[cfg(feature = "cli")]
fn cmd_convert(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    emit: EmitArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(&emit)?;
    if let Some(input) = input {
        config = config.with_input_dir(input);
    }
    if let Some(output) = output {
        config = config.with_output_dir(output);
    }

    let report = convert_directory(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_report(report: &BatchReport) {
    for converted in &report.converted {
        println!(
            "✓ {} -> {} ({} declarations)",
            converted.input.display(),
            converted.output.display(),
            converted.declarations
        );
        for fault in &converted.diagnostics.field_faults {
            println!("    warning: {}", fault);
        }
    }

    for failed in &report.failed {
        println!("✗ {}: {}", failed.input.display(), failed.error);
    }

    println!();
    println!(
        "{} converted, {} failed, {} skipped ({} unresolved types)",
        report.converted.len(),
        report.failed.len(),
        report.skipped.len(),
        report.fallback_count()
    );
}

#[cfg(feature = "cli")]
fn cmd_print(file: PathBuf, emit: EmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&emit)?;
    let translation = convert_file(&file, &config)?;
    print!("{}", translation.output);
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
