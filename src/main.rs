use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use prophet_says::config::{
    default_config_path, find_config_file, get_config, load_config, log_filter, Config, ConfigFile,
    ENV_VARS,
};
use prophet_says::models::{Edition, HadithResult, Language, LastSearched};
use prophet_says::search::HadithContainer;
use prophet_says::sources::{CdnSource, HadithSource};
use prophet_says::ui::card::{render_card, render_plain, CardFields};
use prophet_says::ui::{self, Spinner, Status};
use prophet_says::utils::{card_width, is_terminal};
use prophet_says::SearchOutcome;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ProphetSays - Look up hadiths by number
#[derive(Parser, Debug)]
#[command(name = "prophet-says")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Look up hadiths by number from the public hadith-api CDN", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Root of the edition documents (overrides the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Show all environment variables
    #[arg(long, global = true)]
    env: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (card if TTY, JSON otherwise)
    Auto,
    /// Boxed card (human-readable)
    Card,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

impl OutputFormat {
    fn resolve(self) -> Self {
        match self {
            OutputFormat::Auto if is_terminal() => OutputFormat::Card,
            OutputFormat::Auto => OutputFormat::Json,
            other => other,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up one hadith by number
    #[command(alias = "l")]
    Lookup {
        /// Hadith number
        number: String,

        /// Edition code or name (e.g. bukhari, abudawud)
        #[arg(long, short)]
        edition: Option<Edition>,

        /// Language code or name (eng, urd, ara)
        #[arg(long, short)]
        language: Option<Language>,
    },

    /// Read hadith numbers from stdin, one lookup per line
    #[command(alias = "i")]
    Interactive {
        /// Initial edition
        #[arg(long, short)]
        edition: Option<Edition>,

        /// Initial language
        #[arg(long, short)]
        language: Option<Language>,
    },

    /// List known editions
    Editions,

    /// List known languages
    Languages,

    /// Render the sample card
    Preview,

    /// Show or write the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write the effective configuration to a file
    Init {
        /// Target path (default: the per-user config file)
        #[arg(long, short)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// Print all available environment variables
fn print_env_vars() {
    println!("ProphetSays - Environment Variables");
    println!();
    for (name, description) in ENV_VARS {
        println!("  {:<34} {}", name, description);
    }
    println!();
    println!("Example:");
    println!("  export PROPHET_SAYS_DEFAULTS__EDITION=\"muslim\"");
    println!("  export PROPHET_SAYS_API__TIMEOUT_SECS=\"10\"");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show environment variables and exit if requested
    if cli.env {
        print_env_vars();
        return Ok(());
    }

    // Load configuration from file if specified or found in default locations
    let mut config = if let Some(config_path) = &cli.config {
        load_config(config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?
    } else if let Some(config_path) = find_config_file() {
        load_config(&config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?
    } else {
        get_config().context("Failed to read configuration from the environment")?
    };

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_filter(env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(timeout) = cli.timeout {
        config.api.timeout_secs = timeout;
    }
    if let Some(base_url) = cli.base_url.clone() {
        config.api.base_url = base_url;
    }
    tracing::debug!(base_url = %config.api.base_url, timeout_secs = config.api.timeout_secs, "Configuration loaded");

    let format = cli.output.resolve();

    match cli.command {
        Some(Commands::Lookup {
            number,
            edition,
            language,
        }) => {
            let source = CdnSource::from_config(&config)?;
            let edition = edition.unwrap_or(config.defaults.edition);
            let language = language.unwrap_or(config.defaults.language);
            let found = run_lookup(&source, &number, edition, language, format, cli.quiet).await?;
            if !found {
                std::process::exit(1);
            }
        }
        Some(Commands::Interactive { edition, language }) => {
            let source = CdnSource::from_config(&config)?;
            let edition = edition.unwrap_or(config.defaults.edition);
            let language = language.unwrap_or(config.defaults.language);
            run_interactive(&source, edition, language, format, cli.quiet).await?;
        }
        None => {
            let source = CdnSource::from_config(&config)?;
            run_interactive(
                &source,
                config.defaults.edition,
                config.defaults.language,
                format,
                cli.quiet,
            )
            .await?;
        }
        Some(Commands::Editions) => output_editions(&config, format)?,
        Some(Commands::Languages) => output_languages(&config, format)?,
        Some(Commands::Preview) => output_card(&CardFields::preview(), None, format, cli.quiet)?,
        Some(Commands::Config { action }) => run_config(action, config)?,
    }

    Ok(())
}

fn run_config(action: ConfigAction, config: Config) -> Result<()> {
    let file = ConfigFile::from(config);
    match action {
        ConfigAction::Show => print!("{}", file.to_toml()?),
        ConfigAction::Init { path, force } => {
            let path = match path.or_else(default_config_path) {
                Some(path) => path,
                None => anyhow::bail!("No configuration directory on this platform; pass --path"),
            };
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
            }
            file.save(&path)?;
            ui::print_status(Status::Success, &format!("Wrote {}", path.display()));
        }
    }
    Ok(())
}

/// One lookup; returns whether a hadith was shown.
async fn run_lookup(
    source: &dyn HadithSource,
    number: &str,
    edition: Edition,
    language: Language,
    format: OutputFormat,
    quiet: bool,
) -> Result<bool> {
    tracing::debug!(source = source.id(), "Using {}", source.name());
    let mut page = HadithContainer::new(edition, language);
    page.form_mut().set_query(number);

    let spinner = loading_spinner(format, quiet);
    let outcome = page.submit(source).await;
    spinner.finish();

    match outcome {
        SearchOutcome::Found(result) => {
            output_result(&result, page.form().banner(), format, quiet)?;
            Ok(true)
        }
        SearchOutcome::Failed(error) => {
            output_error(&error.to_string(), format)?;
            Ok(false)
        }
    }
}

/// A line typed in interactive mode
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand<'a> {
    Submit(&'a str),
    Edition(&'a str),
    Language(&'a str),
    Show,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> ReplCommand<'_> {
    let Some(command) = line.trim().strip_prefix(':') else {
        return ReplCommand::Submit(line);
    };
    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };
    match name {
        "edition" | "e" => ReplCommand::Edition(arg),
        "language" | "lang" | "l" => ReplCommand::Language(arg),
        "show" | "s" => ReplCommand::Show,
        "help" | "h" | "?" => ReplCommand::Help,
        "quit" | "q" | "exit" => ReplCommand::Quit,
        _ => ReplCommand::Unknown(name),
    }
}

async fn run_interactive(
    source: &dyn HadithSource,
    edition: Edition,
    language: Language,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    tracing::debug!(source = source.id(), "Using {}", source.name());
    let mut page = HadithContainer::new(edition, language);
    let mut lines = spawn_stdin_reader();

    if !quiet {
        ui::print_banner();
    }

    loop {
        let prompt = format!(
            "[{}/{}] > ",
            page.form().edition(),
            page.form().language()
        );
        print!("{}", prompt);
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.recv() => line,
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };
        let Some(line) = line else { break };

        match parse_command(&line) {
            ReplCommand::Quit => break,
            ReplCommand::Help => ui::print_interactive_help(),
            ReplCommand::Edition(code) => match code.parse::<Edition>() {
                Ok(edition) => page.form_mut().set_edition(edition),
                Err(e) => ui::print_status(Status::Warning, &e.to_string()),
            },
            ReplCommand::Language(code) => match code.parse::<Language>() {
                Ok(language) => page.form_mut().set_language(language),
                Err(e) => ui::print_status(Status::Warning, &e.to_string()),
            },
            ReplCommand::Show => {
                let form = page.form();
                ui::print_status(
                    Status::Info,
                    &format!(
                        "Edition: {} ({}) · Language: {} ({}) · Number: {}",
                        form.edition().label(),
                        form.edition(),
                        form.language().label(),
                        form.language(),
                        if form.query().trim().is_empty() { "-" } else { form.query() }
                    ),
                );
                if let Some(result) = page.current() {
                    output_result(result, page.form().banner(), format, true)?;
                }
            }
            ReplCommand::Unknown(name) => ui::print_status(
                Status::Warning,
                &format!("Unknown command :{} (try :help)", name),
            ),
            ReplCommand::Submit(query) => {
                page.form_mut().set_query(query);
                let selection = match page.form_mut().begin_submit() {
                    Ok(selection) => selection,
                    Err(e) => {
                        output_error(&e.to_string(), format)?;
                        continue;
                    }
                };

                let spinner = loading_spinner(format, quiet);
                let fetched = tokio::select! {
                    result = source.fetch(&selection) => Some(result),
                    _ = tokio::signal::ctrl_c() => None,
                };
                spinner.finish();

                match fetched {
                    Some(result) => match page.finish(&selection, result) {
                        SearchOutcome::Found(result) => {
                            output_result(&result, page.form().banner(), format, quiet)?
                        }
                        SearchOutcome::Failed(error) => output_error(&error.to_string(), format)?,
                    },
                    None => {
                        page.form_mut().cancel_submit();
                        ui::print_status(Status::Warning, "Search cancelled");
                    }
                }
            }
        }
    }

    Ok(())
}

/// Read stdin lines on a plain thread so a pending read never holds up shutdown.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn loading_spinner(format: OutputFormat, quiet: bool) -> Spinner {
    if quiet || format != OutputFormat::Card || !is_terminal() {
        Spinner::hidden()
    } else {
        Spinner::new("Searching...")
    }
}

fn output_result(
    result: &HadithResult,
    banner: Option<&LastSearched>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    output_card(&CardFields::from_result(result), banner, format, quiet)
}

fn output_card(
    fields: &CardFields,
    banner: Option<&LastSearched>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    match format.resolve() {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "last_searched": banner,
                "hadith": fields,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => {
            print!("{}", render_plain(fields));
            if let Some(last) = banner {
                println!("{}", last);
            }
        }
        OutputFormat::Card | OutputFormat::Auto => {
            print!("{}", render_card(fields, card_width(), is_terminal()));
            if let Some(last) = banner {
                ui::print_last_searched(last);
            }
            if !quiet {
                ui::print_footer();
            }
        }
    }
    Ok(())
}

fn output_error(message: &str, format: OutputFormat) -> Result<()> {
    match format.resolve() {
        OutputFormat::Json => {
            let value = serde_json::json!({ "error": message });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => println!("Error: {}", message),
        OutputFormat::Card | OutputFormat::Auto => ui::print_error(message),
    }
    Ok(())
}

fn output_editions(config: &Config, format: OutputFormat) -> Result<()> {
    match format.resolve() {
        OutputFormat::Json => {
            let editions: Vec<_> = Edition::ALL
                .iter()
                .map(|e| serde_json::json!({ "code": e.code(), "label": e.label() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&editions)?);
        }
        OutputFormat::Plain => {
            for edition in Edition::ALL {
                println!("{}\t{}", edition.code(), edition.label());
            }
        }
        OutputFormat::Card | OutputFormat::Auto => {
            println!("{}", ui::editions_table(Some(config.defaults.edition)));
        }
    }
    Ok(())
}

fn output_languages(config: &Config, format: OutputFormat) -> Result<()> {
    match format.resolve() {
        OutputFormat::Json => {
            let languages: Vec<_> = Language::ALL
                .iter()
                .map(|l| serde_json::json!({ "code": l.code(), "label": l.label() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&languages)?);
        }
        OutputFormat::Plain => {
            for language in Language::ALL {
                println!("{}\t{}", language.code(), language.label());
            }
        }
        OutputFormat::Card | OutputFormat::Auto => {
            println!("{}", ui::languages_table(Some(config.defaults.language)));
        }
    }
    Ok(())
}
