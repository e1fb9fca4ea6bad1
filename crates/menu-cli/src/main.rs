mod app;
mod input_reader;
mod logging;
mod ui;
mod watcher;

use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use menu_core::{FsProvider, Navigator, View, ViewKind};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "menu", about = "Terminal file and text browser")]
struct Cli {
    /// Directory or file to open (defaults to $HOME)
    path: Option<PathBuf>,

    /// Disable ANSI color
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// Do not refresh the view when the filesystem changes
    #[arg(long, default_value_t = false)]
    no_watch: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, env = "MENU_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.log_file.as_deref())?;
    let force_tui = std::env::var("MENU_FORCE_TUI").ok().as_deref() == Some("1");

    let start = resolve_start_path(cli.path, std::env::var_os("HOME"))?;
    info!(path = %start.display(), "starting");
    let nav = Navigator::open(&FsProvider, &start)
        .with_context(|| format!("cannot open {}", start.display()))?;

    if (!io::stdin().is_terminal() || !io::stdout().is_terminal()) && !force_tui {
        let stdout = io::stdout();
        print_entries_to(nav.current(), io::BufWriter::new(stdout.lock()))?;
        return Ok(());
    }

    let mut app = app::App::new(nav, !cli.no_watch);
    app.set_no_color(cli.no_color);
    app.run()
}

/// Picks the argument, then `$HOME`, then the working directory. The result
/// is always absolute.
fn resolve_start_path(arg: Option<PathBuf>, home: Option<OsString>) -> Result<PathBuf> {
    let path = match (arg, home) {
        (Some(path), _) => path,
        (None, Some(home)) if !home.is_empty() => PathBuf::from(home),
        _ => {
            return std::env::current_dir()
                .context("HOME is not set and the current directory is unavailable");
        }
    };
    std::path::absolute(&path).with_context(|| format!("cannot resolve {}", path.display()))
}

/// Directory names are written one per line. File lines are rejoined so the
/// content comes back as it was read.
fn print_entries_to<W: Write>(view: &View, mut out: W) -> io::Result<()> {
    match view.kind() {
        ViewKind::Directory => {
            for entry in view.entries() {
                writeln!(out, "{entry}")?;
            }
        }
        ViewKind::File => {
            for (i, entry) in view.entries().iter().enumerate() {
                if i > 0 {
                    out.write_all(b"\n")?;
                }
                out.write_all(entry.as_bytes())?;
            }
        }
    }
    out.flush()
}
