use clap::Parser;
use colored::Colorize;
use dialoguer::Input;
use file_cleaner::config::DEFAULT_AUDIT_LOG;
use file_cleaner::{CleanError, Cleaner, CleanerConfig, stats};
use log::LevelFilter;
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "file-cleaner")]
#[command(about = "Delete .tmp, .log, .cache and .bak files from a directory")]
#[command(version)]
struct Cli {
    /// Directory to clean (prompted for when omitted)
    path: Option<PathBuf>,

    /// Append the audit trail of deleted files here
    #[arg(long, value_name = "FILE", default_value = DEFAULT_AUDIT_LOG)]
    log_file: PathBuf,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Lets Windows consoles render the ANSI color codes `colored` emits.
fn enable_ansi_console() {
    #[cfg(windows)]
    {
        let _ = colored::control::set_virtual_terminal(true);
    }
}

fn prompt_for_path() -> io::Result<PathBuf> {
    let prompt = "Enter the directory path to clean (e.g., \"C:/path/to/folder\")";

    if console::user_attended() {
        let line = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| io::Error::other(e.to_string()))?;
        return Ok(PathBuf::from(line));
    }

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    Ok(PathBuf::from(line))
}

fn report_error(err: &CleanError) {
    match err {
        CleanError::NotFoundOrInaccessible { .. } => eprintln!(
            "{} Directory does not exist or is inaccessible.",
            "error:".red().bold()
        ),
        CleanError::Filesystem { .. } => eprintln!("{} {}", "error:".red().bold(), err),
    }
}

fn main() {
    enable_ansi_console();
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let path = match cli.path {
        Some(path) => path,
        None => match prompt_for_path() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("{} Could not read directory path: {}", "error:".red().bold(), e);
                return;
            }
        },
    };

    let config = CleanerConfig::default().with_audit_log(cli.log_file);
    let cleaner = Cleaner::new(&config);

    // Stats failure is reported but does not stop the cleanup pass.
    match stats::report(&path, cleaner.targets()) {
        Ok(summary) => {
            println!("\n{}", "Directory Statistics:".cyan().bold());
            println!("Total files: {}", summary.total_files);
            println!(
                "Target files to delete: {}",
                summary.target_files.to_string().yellow()
            );
            println!("Total size: {} KB", summary.total_kb());
        }
        Err(e) => report_error(&e),
    }

    let outcome = cleaner.clean(&path, |entry| {
        println!(
            "{} {} ({} KB)",
            "Deleted:".red(),
            entry.path.display(),
            stats::to_kb(entry.size_bytes)
        );
    });

    match outcome {
        Ok(result) => println!(
            "\n{} {} files removed, freeing {} KB of space.",
            "Cleanup complete.".green().bold(),
            result.deleted_files.to_string().green(),
            result.freed_kb().to_string().green()
        ),
        Err(e) => report_error(&e),
    }
}
