use clap::{Parser, Subcommand};
use portfolio_interactions::{config, output, scaffold};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-interactions")]
#[command(about = "Config and scaffolding tool for the portfolio interaction bundle")]
#[command(long_about = "\
Config and scaffolding tool for the portfolio interaction bundle

The browser bundle (built with `wasm-pack build --target web`) reads its
settings from an inline <script type=\"application/toml\" id=\"portfolio-config\">
element. This tool writes, checks and renders that config.

Site structure:

  site/
  ├── config.toml      # Settings (optional, every key defaults)
  ├── index.html       # Page carrying the DOM contract + inline config
  └── pkg/             # wasm-pack output

Run 'portfolio-interactions gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Validate config.toml and summarize the resolved settings
    Check {
        /// Print the resolved config as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Print the light/dark theme CSS custom properties
    ThemeCss,
    /// Write a reference index.html and config.toml
    Scaffold {
        /// Output directory
        #[arg(long, default_value = "site")]
        output: PathBuf,
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Check { json } => {
            let site_config = config::load_config(&cli.config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&site_config)?);
            } else {
                let source = cli.config.join("config.toml");
                let source = source.exists().then_some(source);
                output::print_check_output(&site_config, source.as_deref());
                println!("==> Config is valid");
            }
        }
        Command::ThemeCss => {
            let site_config = config::load_config(&cli.config)?;
            print!("{}", config::generate_theme_css(&site_config.colors));
        }
        Command::Scaffold { output: dir, force } => {
            let site_config = config::load_config(&cli.config)?;
            let config_toml = match std::fs::read_to_string(cli.config.join("config.toml")) {
                Ok(contents) => contents,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    config::stock_config_toml().to_string()
                }
                Err(err) => return Err(err.into()),
            };
            let report = scaffold::scaffold(&dir, &site_config, &config_toml, force)?;
            output::print_scaffold_output(&report);
        }
    }

    Ok(())
}
