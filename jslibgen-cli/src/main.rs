use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use log::{info, warn};
use std::path::PathBuf;

use jslibgen::{
    CommandCheckout, FsFileStore, GenerationDriver, GeneratorConfig, ManifestSource,
};

/// jslibgen - generate Emscripten .jslib/.jspre glue for native-interop
/// declarations
#[derive(Parser)]
#[command(name = "jslibgen")]
#[command(version)]
#[command(about = "generate JavaScript glue from a declaration manifest", long_about = None)]
struct Cli {
    /// path to the declaration manifest (.json)
    manifest: PathBuf,

    /// asset root that generated files are written under
    #[arg(long, default_value = "Assets")]
    asset_root: PathBuf,

    /// folder below the asset root that receives the generated glue
    #[arg(long, default_value = jslibgen::DEFAULT_OUTPUT_ROOT)]
    output_root: String,

    /// inject console.log calls into .jslib entries (default follows the build configuration)
    #[arg(long, action = ArgAction::Set, default_value_t = cfg!(debug_assertions))]
    debug: bool,

    /// command run with the file path appended before a changed file is overwritten (e.g. "p4 edit")
    #[arg(long)]
    checkout_cmd: Option<String>,

    /// print generated artifacts instead of writing them
    #[arg(long)]
    dry_run: bool,

    /// output JSON (the report, or the artifacts with --dry-run)
    #[arg(short = 'j', long)]
    json: bool,

    /// suppress informational messages
    #[arg(short = 'q', long)]
    quiet: bool,

    /// verbose logging to console (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.verbose, cli.quiet);

    let config = GeneratorConfig {
        output_root: cli.output_root.clone(),
        debug_prints: cli.debug,
    };

    info!("manifest: {}", cli.manifest.display());
    info!(
        "debug prints: {}",
        if config.debug_prints { "on" } else { "off" }
    );

    let source = ManifestSource::from_file(&cli.manifest)?;

    let driver = GenerationDriver::new(config);

    if cli.dry_run {
        let artifacts = driver.collect(&source)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&artifacts)?);
        } else {
            for artifact in &artifacts {
                println!("// {}\n{}", artifact.relative_path, artifact.content);
            }
        }
        return Ok(());
    }

    info!("asset root: {}", cli.asset_root.display());
    let mut store = FsFileStore::new(&cli.asset_root);
    if let Some(command_line) = &cli.checkout_cmd {
        match CommandCheckout::parse(command_line) {
            Some(checkout) => store = store.with_checkout(Box::new(checkout)),
            None => warn!("ignore blank --checkout-cmd"),
        }
    }

    let report = driver.run(&source, &mut store);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if !report.is_success() {
        bail!(
            "{} generation step(s) failed, {} artifact(s) written",
            report.failures.len(),
            report.written.len()
        );
    }

    Ok(())
}

fn init_logger(verbose: u8, quiet: bool) {
    // If quiet mode is enabled, only show warnings and errors
    let log_level = if quiet {
        log::LevelFilter::Warn
    } else {
        match verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}
