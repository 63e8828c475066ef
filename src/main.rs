use clap::{Parser, Subcommand};
use respimg::settings::{self, DEFAULT_SETTINGS_FILE, Settings};
use respimg::{output, pipeline};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "respimg")]
#[command(about = "Generate responsive image variants from breakpoint configs")]
#[command(long_about = "\
Generate responsive image variants from breakpoint configs

Every JSON file matching the config glob describes one or more image assets.
Each breakpoint becomes one file at an exact width; the height follows the
source aspect ratio.

Layout:

  respimg.toml                     # Optional settings (see gen-config)
  configs/
  └── home/hero.json               # { name, images-path, breakpoints }
  sources/
  └── home/hero.jpg                # Source images, read-only
  images/                          # Output root, cleared on every build
  └── home/hero/
      ├── hero-default.jpg         # `default` breakpoint → JPEG
      ├── hero-lg.webp             # every other breakpoint → WebP
      └── hero-sm.webp

Running without a subcommand performs a build.")]
#[command(version)]
struct Cli {
    /// Settings file (missing file = defaults)
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE, global = true)]
    settings: PathBuf,

    /// Source image root (overrides settings)
    #[arg(long, global = true)]
    sources: Option<PathBuf>,

    /// Output root (overrides settings)
    #[arg(long, global = true)]
    images: Option<PathBuf>,

    /// Config file glob (overrides settings)
    #[arg(long, global = true)]
    configs: Option<String>,

    /// Keep existing files in the output root
    #[arg(long, global = true)]
    no_clear: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Clear the output root and generate every breakpoint (default)
    Build,
    /// Parse and plan every config without writing anything
    Check,
    /// Print a stock respimg.toml with all options documented
    GenConfig,
}

impl Cli {
    fn resolve_settings(&self) -> Result<Settings, settings::SettingsError> {
        let mut settings = settings::load_settings(&self.settings)?;
        if let Some(sources) = &self.sources {
            settings.sources = sources.clone();
        }
        if let Some(images) = &self.images {
            settings.images = images.clone();
        }
        if let Some(configs) = &self.configs {
            settings.configs = configs.clone();
        }
        if self.no_clear {
            settings.clear_output = false;
        }
        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Build) {
        Command::Build => {
            let settings = cli.resolve_settings()?;
            let report = pipeline::run(&settings, output::print_run_event)?;
            output::print_summary(&report);
        }
        Command::Check => {
            let settings = cli.resolve_settings()?;
            let planned = pipeline::plan_run(&settings)?;
            output::print_plan(&planned);
        }
        Command::GenConfig => {
            print!("{}", settings::stock_settings_toml());
        }
    }

    Ok(())
}
