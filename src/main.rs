use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use lethe_wipe::io::WipeTarget;
use lethe_wipe::policies::{by_index, OverwriteRule, CATALOG};
use lethe_wipe::report::ReportLog;
use lethe_wipe::WipeSession;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lethe")]
#[command(about = "Policy-driven secure disk and file erasure with auditable reporting")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in wipe policies
    List,

    /// Show the per-pass byte patterns of a policy
    Show {
        /// Policy number (1-based, as printed by `list`)
        policy: usize,
    },

    /// Wipe a device or file with the selected policy
    Wipe {
        /// Device or file path (e.g. /dev/sdb)
        device: PathBuf,

        /// Policy number (1-based, as printed by `list`)
        #[arg(short, long)]
        policy: usize,

        /// Append a report log to this file
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Suppress console output
        #[arg(short, long)]
        quiet: bool,

        /// Skip the confirmation prompt (DANGEROUS!)
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    match cli.command {
        Commands::List => {
            list_policies();
            Ok(())
        }
        Commands::Show { policy } => show_policy(policy),
        Commands::Wipe {
            device,
            policy,
            report,
            quiet,
            force,
        } => wipe(device, policy, report, quiet, force),
    }
}

fn list_policies() {
    println!("Wipe policies:");
    for (i, policy) in CATALOG.iter().enumerate() {
        let passes = policy.passes();
        println!(
            "{}) {} ({} {})",
            i + 1,
            policy.name,
            passes,
            if passes == 1 { "pass" } else { "passes" }
        );
    }
}

fn select_policy(selection: usize) -> Result<&'static lethe_wipe::WipePolicy> {
    by_index(selection).ok_or_else(|| {
        list_policies();
        anyhow!(
            "invalid policy number {} (expected 1-{})",
            selection,
            CATALOG.len()
        )
    })
}

fn show_policy(selection: usize) -> Result<()> {
    let policy = select_policy(selection)?;

    println!("Policy: {}", policy.name);
    println!("Passes: {}", policy.passes());

    for (i, rule) in policy.rules.iter().enumerate() {
        match rule {
            OverwriteRule::Random => println!("Step {}: random bytes", i + 1),
            OverwriteRule::Fixed(pattern) => {
                let bits = pattern
                    .iter()
                    .map(|b| format!("{:08b}", b))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("Step {}: {} ({})", i + 1, rule.describe(), bits);
            }
        }
    }

    Ok(())
}

fn confirm_destruction(device: &Path) -> Result<bool> {
    println!(
        "⚠️  WARNING: this will IRREVERSIBLY destroy all data on {}",
        device.display()
    );
    print!("Type 'YES' to confirm: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim() == "YES")
}

fn wipe(
    device: PathBuf,
    selection: usize,
    report: Option<PathBuf>,
    quiet: bool,
    force: bool,
) -> Result<()> {
    let policy = select_policy(selection)?;

    if !force && !confirm_destruction(&device)? {
        println!("Wipe cancelled.");
        return Ok(());
    }

    let mut log = match report {
        Some(path) => ReportLog::with_file(path)?,
        None => ReportLog::new(),
    };
    log.set_quiet(quiet);

    let target = WipeTarget::open(&device)?;

    WipeSession::new(target, policy, &mut log)
        .with_progress(!quiet)
        .run()?;

    if !quiet {
        println!("✅ Wipe completed successfully");
    }

    Ok(())
}
