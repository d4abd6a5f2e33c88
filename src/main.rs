//! flagpack CLI - resolve country codes and retrieve flag assets.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use flagpack::codes::{iso_to_alpha2, resolve_flag_alias};
use flagpack::flags::{embedded_flag, FlagSize, FlagStore, EMBEDDED_CODES};

const ALL_SIZES: [FlagSize; 3] = [FlagSize::Small, FlagSize::Medium, FlagSize::Large];

#[derive(Parser)]
#[command(name = "flagpack", version, about = "Country code resolution and flag asset lookup")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a code or alias to its canonical flag code
    Resolve {
        /// Alpha-2, alpha-3, numeric code, or alias ("UK", "Earth")
        code: String,
    },
    /// Print the asset reference for a code
    Url {
        code: String,
        /// Flag size: s, m, or l
        #[arg(short, long, default_value = "m")]
        size: String,
        /// Asset retrieval strategy
        #[arg(long, value_enum, default_value = "embedded")]
        source: SourceArg,
        /// Root of a local asset tree (dir source)
        #[arg(long)]
        asset_root: Option<PathBuf>,
        /// CDN base URL (cdn source)
        #[arg(long)]
        cdn_base: Option<String>,
    },
    /// Audit an asset store for codes missing one of the three sizes
    Check {
        /// Local asset tree to audit; the embedded set when omitted
        #[arg(long)]
        asset_root: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Embedded,
    Dir,
    Cdn,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Resolve { code } => resolve_cmd(&code),
        Command::Url {
            code,
            size,
            source,
            asset_root,
            cdn_base,
        } => url_cmd(&code, &size, source, asset_root, cdn_base),
        Command::Check { asset_root } => check_cmd(asset_root),
    }
}

/// Aliases first, then ISO resolution on whatever came back.
fn resolve_cmd(code: &str) -> ExitCode {
    let Some(aliased) = resolve_flag_alias(code) else {
        eprintln!("no code provided");
        return ExitCode::from(2);
    };

    // An alias hit is already canonical, possibly a pseudo-code ("001")
    // with no ISO entry behind it.
    if aliased != code {
        println!("{aliased}");
        return ExitCode::SUCCESS;
    }

    match iso_to_alpha2(code) {
        Some(alpha2) => {
            println!("{alpha2}");
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("unresolvable code: {code}");
            ExitCode::FAILURE
        }
    }
}

fn url_cmd(
    code: &str,
    size: &str,
    source: SourceArg,
    asset_root: Option<PathBuf>,
    cdn_base: Option<String>,
) -> ExitCode {
    let size = match size.parse::<FlagSize>() {
        Ok(size) => size,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let store = match source {
        SourceArg::Embedded => FlagStore::embedded(),
        SourceArg::Dir => match asset_root {
            Some(root) => FlagStore::directory(root),
            None => FlagStore::discover_directory(),
        },
        SourceArg::Cdn => match cdn_base {
            Some(base) => FlagStore::cdn(base),
            None => FlagStore::cdn_default(),
        },
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("failed to create runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Fail-soft contract: an unresolvable code prints an empty line and
    // still exits 0; the diagnostic went to stderr via tracing.
    let markup = runtime.block_on(store.flag_url(code, size));
    println!("{markup}");
    ExitCode::SUCCESS
}

/// Every code a store carries must carry it in all three sizes; a gap is a
/// data defect in the generated asset set, not a runtime condition.
fn check_cmd(asset_root: Option<PathBuf>) -> ExitCode {
    let gaps = match asset_root {
        None => embedded_gaps(),
        Some(root) => directory_gaps(&root),
    };

    if gaps.is_empty() {
        println!("ok: all packaged codes carry all three sizes");
        return ExitCode::SUCCESS;
    }

    for (code, size) in &gaps {
        println!("missing: {code} ({size})");
    }
    eprintln!("{} gap(s) found", gaps.len());
    ExitCode::FAILURE
}

fn embedded_gaps() -> Vec<(String, FlagSize)> {
    let mut gaps = Vec::new();
    for code in EMBEDDED_CODES {
        for size in ALL_SIZES {
            if embedded_flag(code, size).is_none() {
                gaps.push((code.to_string(), size));
            }
        }
    }
    gaps
}

fn directory_gaps(root: &Path) -> Vec<(String, FlagSize)> {
    // A partial tree is fine; a code present at one size but absent at
    // another is not.
    let mut seen = BTreeSet::new();
    for size in ALL_SIZES {
        let dir = root.join(size.dir_name());
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "svg") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    seen.insert(stem.to_string());
                }
            }
        }
    }

    let mut gaps = Vec::new();
    for code in &seen {
        for size in ALL_SIZES {
            let path = root.join(size.dir_name()).join(format!("{code}.svg"));
            if !path.is_file() {
                gaps.push((code.clone(), size));
            }
        }
    }
    gaps
}
