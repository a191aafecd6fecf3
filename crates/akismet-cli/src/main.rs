//! akismet CLI - query and train the Akismet spam classifier

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use akismet_client::Client;
use akismet_core::config::DEFAULT_CONFIG_FILES;
use akismet_core::{ClientConfig, ParameterSet, ReportKind};

#[derive(Parser)]
#[command(name = "akismet")]
#[command(about = "Check comments against Akismet and report misclassifications")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: .akismet.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// API key (overrides the config file)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Default site URL (overrides the config file)
    #[arg(long, global = true)]
    blog_url: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "terminal")]
    output: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify the API key for a site
    Verify {
        /// Site URL (default: blog_url from config)
        #[arg(long)]
        blog: Option<String>,
    },

    /// Classify a comment (exit 0 = ham, 1 = spam)
    Check {
        /// Request parameter, e.g. -p user_ip=1.2.3.4
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Report a comment Akismet missed as spam
    SubmitSpam {
        /// Request parameter, e.g. -p user_ip=1.2.3.4
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Report a false positive
    SubmitHam {
        /// Request parameter, e.g. -p user_ip=1.2.3.4
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Initialize config file
    Init,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    Terminal,
    Json,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(3)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("akismet=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut cfg = if let Some(path) = &cli.config {
        ClientConfig::load(std::path::Path::new(path))?
    } else {
        ClientConfig::load_default()?
    };
    if let Some(key) = &cli.api_key {
        cfg.api_key = Some(key.clone());
    }
    if let Some(url) = &cli.blog_url {
        cfg.blog_url = Some(url.clone());
    }
    if cfg.user_agent.is_empty() {
        cfg.user_agent = format!("akismet-cli/{}", env!("CARGO_PKG_VERSION"));
    }
    Ok(cfg)
}

fn connect(cli: &Cli) -> Result<Client> {
    let cfg = load_config(cli)?;
    Client::connect(cfg).context("cannot create HTTP client")
}

fn run(cli: Cli) -> Result<u8> {
    match &cli.command {
        Commands::Verify { blog } => {
            let client = connect(&cli)?;
            let valid = client.verify_key(blog.as_deref())?;
            match cli.output {
                OutputFormat::Terminal => println!("API key is valid"),
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "valid": valid }));
                }
            }
            Ok(0)
        }

        Commands::Check { params } => {
            let client = connect(&cli)?;
            let params: ParameterSet = params.iter().cloned().collect();
            let spam = client.check(&params)?;
            match cli.output {
                OutputFormat::Terminal => println!("{}", if spam { "spam" } else { "ham" }),
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "spam": spam }));
                }
            }
            Ok(u8::from(spam))
        }

        Commands::SubmitSpam { params } => submit(&cli, ReportKind::Spam, params),
        Commands::SubmitHam { params } => submit(&cli, ReportKind::Ham, params),

        Commands::Init => {
            let config_path = DEFAULT_CONFIG_FILES[0];
            write_example_config(std::path::Path::new(config_path))?;
            println!("Created {config_path}");
            println!("\nEdit the file to configure:");
            println!("  - api_key: your Akismet API key");
            println!("  - blog_url: the site requests are made for");
            println!("  - user_agent: your application name and version");
            Ok(0)
        }
    }
}

/// Write the example config, refusing to overwrite an existing file.
fn write_example_config(path: &std::path::Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    std::fs::write(path, ClientConfig::example())
        .with_context(|| format!("cannot write {}", path.display()))
}

fn submit(cli: &Cli, kind: ReportKind, params: &[(String, String)]) -> Result<u8> {
    let client = connect(cli)?;
    let params: ParameterSet = params.iter().cloned().collect();
    let label = match kind {
        ReportKind::Spam => {
            client.submit_spam(&params)?;
            "spam"
        }
        ReportKind::Ham => {
            client.submit_ham(&params)?;
            "ham"
        }
    };
    match cli.output {
        OutputFormat::Terminal => println!("Submitted as {label}"),
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "submitted": label }));
        }
    }
    Ok(0)
}
