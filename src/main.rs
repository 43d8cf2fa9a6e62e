use clap::{Parser, Subcommand};
use linkpage::{config, generate, loader, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "linkpage")]
#[command(about = "Static site generator for link-in-bio pages")]
#[command(long_about = "\
Static site generator for link-in-bio pages

Each link is one YAML file. The page shows a header, an optional hero, the
links grouped by section, and a footer with social links.

Site structure:

  my-site/
  ├── site.toml                    # Site identity (optional, see gen-config)
  ├── content/links/
  │   ├── portfolio.yml            # title, url, order, section, thumbnail, ...
  │   └── course.yml
  └── public/                      # Copied into the output root

Link file:

  title: Portfolio
  url: https://example.com
  order: 1                         # sort key within the section
  section: main                    # optional, \"main\" has no header
  thumbnail: /thumbnails/p.png     # optional
  thumbnailSize: large             # none | small | large
  animation: glow                  # none | glow | scale | bounce | shake

Files that fail validation are reported and left out of the page.")]
#[command(version)]
struct Cli {
    /// Site root directory
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log progress (info level); otherwise RUST_LOG or warnings only
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page and copy assets into the output directory
    Build,
    /// Validate link files and show how they group, without writing anything
    Check {
        /// Print the grouped links as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.source)?;
            println!("==> Building {}", cli.source.display());
            let summary = generate::generate(&cli.source, &cli.output, &config)?;
            output::print_generate_output(&summary);
            for line in output::format_failures(&summary.failures) {
                println!("{}", line);
            }
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check { json } => {
            let config = config::load_config(&cli.source)?;
            let (grouped, failures) = loader::load_grouped(&cli.source, &config);
            if json {
                println!("{}", serde_json::to_string_pretty(&grouped)?);
            } else {
                println!("==> Checking {}", cli.source.display());
                output::print_check_output(&grouped, &config, &failures);
            }
            let skipped = failures.iter().filter(|f| f.source_id().is_some()).count();
            if skipped > 0 {
                return Err(format!("{skipped} content file(s) skipped").into());
            }
            if !json {
                println!("==> Content is valid");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// `--verbose` forces info; otherwise honor `RUST_LOG`, defaulting to warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
