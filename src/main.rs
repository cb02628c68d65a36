use clap::{Parser, Subcommand};
use folio_scan::{config, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio-scan")]
#[command(about = "Content manifest builder for portfolio sites")]
#[command(long_about = "\
Content manifest builder for portfolio sites

Your filesystem is the data source. Project folders declare their content
type through the files they contain; one scan pass turns the tree into a
single JSON manifest the site reads as its database.

Content structure:

  public/content/
  ├── config.toml                  # Scanner config (optional)
  ├── restores/
  │   └── Family-Photo-1952/
  │       ├── before.jpg           # Before/after pair → restoration
  │       ├── after.jpg
  │       ├── info.yml             # Sidecar metadata (optional)
  │       └── timeline/            # Numbered process steps (optional)
  │           ├── 1_intake.jpg
  │           └── 2_retouching.jpg
  ├── portraits/
  │   └── Studio-Session/
  │       ├── sources/             # Sources + finals → portrait or edit,
  │       └── final/               # depending on the parent folder name
  ├── edits/
  │   └── Band-Poster/
  │       ├── sources/
  │       └── final/
  └── videos/
      ├── Summer-Promo/
      │   └── final.url            # External link to the published video
      └── Wedding-Full-Edit/
          └── ceremony.mp4         # Local video file

Classification is by file shape, first match wins: before/after pair, then
sources+finals, then video file or .url marker, else unknown. Projects are
ordered newest-first by folder modification time.

Run 'folio-scan gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "public/content", global = true)]
    source: PathBuf,

    /// Manifest output file
    #[arg(long, default_value = "app/_data/manifest.json", global = true)]
    output: PathBuf,

    /// Directory holding generated video thumbnails
    #[arg(long, default_value = "public/thumbnails", global = true)]
    thumbnails: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content tree and write the manifest (the default)
    Scan,
    /// Scan and report without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let opts = scan::ScanOptions {
        source: cli.source.clone(),
        thumbnails_dir: cli.thumbnails.clone(),
    };

    match cli.command.unwrap_or(Command::Scan) {
        Command::Scan => {
            let report = scan::scan(&opts)?;
            if let Some(parent) = cli.output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(&report.manifest)?;
            std::fs::write(&cli.output, json)?;
            output::print_scan_output(&report);
            println!(
                "Wrote {} projects to {}",
                report.manifest.projects.len(),
                cli.output.display()
            );
        }
        Command::Check => {
            let report = scan::scan(&opts)?;
            output::print_scan_output(&report);
            println!(
                "Scan OK: {} projects, nothing written",
                report.manifest.projects.len()
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
