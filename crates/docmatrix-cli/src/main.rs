use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use docmatrix_config::Config;
use docmatrix_engine::{
    Format, ParseOptions, convert_with, detect_content_type, validate_json, validate_yaml,
};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "docmatrix")]
#[command(about = "Convert between Markdown, JSON and YAML")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to another format
    Convert {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
        /// Source format; detected from the content when omitted
        #[arg(long)]
        from: Option<Format>,
        /// Target format; defaults to the configured `default_target`
        #[arg(long)]
        to: Option<Format>,
        /// Clean up pasted Markdown before parsing
        #[arg(long)]
        normalize: bool,
        /// Config file to use instead of ~/.config/docmatrix/config.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the detected content type
    Detect {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Check that the input is well-formed JSON or YAML
    Validate {
        #[arg(default_value = "-")]
        input: PathBuf,
        #[arg(long = "as", value_enum)]
        syntax: Syntax,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Syntax {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match cli.command {
        Commands::Convert {
            input,
            from,
            to,
            normalize,
            config,
        } => {
            let config = Config::load_or_default(config.as_deref())?;
            let content = read_input(&input)?;
            let options = ParseOptions {
                normalize: normalize || config.parse.normalize,
                ..config.parse
            };
            let to = to.unwrap_or(config.default_target);

            log::debug!("converting {} to {to}", input.display());
            let converted = convert_with(&content, from, to, &options)?;
            println!("{}", converted.render()?);
        }
        Commands::Detect { input } => {
            let content = read_input(&input)?;
            println!("{}", detect_content_type(&content));
        }
        Commands::Validate { input, syntax } => {
            let content = read_input(&input)?;
            let result = match syntax {
                Syntax::Json => validate_json(&content),
                Syntax::Yaml => validate_yaml(&content),
            };
            if !result.valid {
                eprintln!("{}", result.message);
                process::exit(1);
            }
            println!("{}", result.message);
        }
    }

    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(content);
    }
    fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}
