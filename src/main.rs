mod commands;
mod core;
mod utils;

use clap::{Parser, Subcommand};
use crate::core::error::{UpdraftError, print_error};
use std::path::PathBuf;

/// Upload Android build artifacts to Updraft
#[derive(Parser)]
#[command(name = "updraft")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Upload the variant's APK/AAB to every configured destination
  Upload {
    /// Product flavor of the variant (omit for flavorless builds)
    #[arg(long)]
    flavor: Option<String>,

    /// Build type of the variant
    #[arg(long, default_value = "release")]
    build_type: String,

    /// Upload the app bundle (.aab) instead of the APK
    #[arg(long)]
    bundle: bool,

    /// Release notes override (wins over every other source)
    #[arg(long)]
    release_notes: Option<String>,

    /// Android project directory (contains updraft.toml and src/)
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Gradle build output directory (default: <project-dir>/build)
    #[arg(long)]
    build_dir: Option<PathBuf>,

    /// Show what would be uploaded without sending anything
    #[arg(long)]
    dry_run: bool,
  },

  /// Show the release notes the next upload would send
  Notes {
    /// Product flavor of the variant (omit for flavorless builds)
    #[arg(long)]
    flavor: Option<String>,

    /// Release notes override (wins over every other source)
    #[arg(long)]
    release_notes: Option<String>,

    /// Android project directory (contains updraft.toml and src/)
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,
  },
}

fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Commands::Upload {
      flavor,
      build_type,
      bundle,
      release_notes,
      project_dir,
      build_dir,
      dry_run,
    } => commands::run_upload(project_dir, build_dir, flavor, build_type, bundle, release_notes, dry_run),

    Commands::Notes {
      flavor,
      release_notes,
      project_dir,
    } => commands::run_notes(project_dir, flavor, release_notes),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: UpdraftError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}
