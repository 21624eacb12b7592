//! Command-line interface for the install-bridge binary.
//!
//! The CLI exposes subcommands for scaffolding, validating, and rendering
//! install configurations, plus a `serve` command that runs the HTTP host.

use std::{fs, io, path::PathBuf, process};

use clap::{ArgAction, Args, Parser, Subcommand};
use install_bridge::{
    DetectedOs, Error, config_template, detect_os, install_target, io_error, load_config,
    render_snippets, server, validate_config, write_badge,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration file name used when no path is provided.
const DEFAULT_CONFIG_FILE: &str = "install-bridge.json";
/// Badge artifact name used when no output path is provided.
const DEFAULT_BADGE_FILE: &str = "install-badge.svg";

/// Command line interface for install configuration tooling.
#[derive(Debug, Parser,)]
#[command(
    name = "install-bridge",
    version,
    about = "Validate install configurations and render install badges"
)]
struct Cli
{
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Write a ready-to-edit configuration template.
    Init(InitArgs,),
    /// Validate a configuration file and print the report.
    Validate(ValidateArgs,),
    /// Render the install badge SVG next to the configuration.
    Badge(BadgeArgs,),
    /// Print Markdown and HTML embed snippets.
    Snippets(SnippetsArgs,),
    /// Resolve the install target for a platform or user agent.
    Resolve(ResolveArgs,),
    /// Run the HTTP host that redirects visitors to installers.
    Serve(ServeArgs,),
}

#[derive(Debug, Args,)]
struct InitArgs
{
    /// Application name embedded in the generated template.
    #[arg(long = "name", value_name = "NAME", default_value = "MyApp")]
    name: String,

    /// Path of the configuration file to create.
    #[arg(long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Overwrite an existing configuration file.
    #[arg(long = "force", action = ArgAction::SetTrue)]
    force: bool,
}

#[derive(Debug, Args,)]
struct ValidateArgs
{
    /// Path to the JSON configuration file.
    #[arg(long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args,)]
struct BadgeArgs
{
    /// Path to the JSON configuration file.
    #[arg(long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Destination path for the rendered SVG.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_BADGE_FILE)]
    output: PathBuf,
}

#[derive(Debug, Args,)]
struct SnippetsArgs
{
    /// Path to the JSON configuration file.
    #[arg(long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Badge location referenced by the generated snippets.
    #[arg(long = "badge-path", value_name = "PATH")]
    badge_path: Option<String,>,

    /// Explicit install URL overriding the configured targets.
    #[arg(long = "url", value_name = "URL")]
    url: Option<String,>,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args,)]
struct ResolveArgs
{
    /// Path to the JSON configuration file.
    #[arg(long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Platform identifier (darwin, win32, linux, or unknown).
    #[arg(long = "platform", value_name = "PLATFORM")]
    platform: Option<String,>,

    /// User-agent string to classify when no platform is given.
    #[arg(long = "user-agent", value_name = "AGENT")]
    user_agent: Option<String,>,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args,)]
struct ServeArgs
{
    /// Host address to bind the server to.
    #[arg(long = "host", value_name = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long = "port", value_name = "PORT", default_value = "3000", env = "PORT")]
    port: u16,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    init_tracing();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "install_bridge=info".into(),),
        )
        .with(tracing_subscriber::fmt::layer(),)
        .init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from configuration loading, validation,
/// rendering, and the HTTP host.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();

    match cli.command {
        Command::Init(args,) => run_init(args,),
        Command::Validate(args,) => run_validate(args,),
        Command::Badge(args,) => run_badge(args,),
        Command::Snippets(args,) => run_snippets(args,),
        Command::Resolve(args,) => run_resolve(args,),
        Command::Serve(args,) => run_serve(args,),
    }
}

fn run_init(args: InitArgs,) -> Result<(), Error,>
{
    if args.config.exists() && !args.force {
        return Err(Error::validation(format!(
            "refusing to overwrite {}; pass --force to replace it",
            args.config.display()
        ),),);
    }

    let config = config_template(&args.name,);
    let mut contents = serde_json::to_string_pretty(&config,)?;
    contents.push('\n',);
    fs::write(&args.config, contents,).map_err(|source| io_error(&args.config, source,),)?;

    tracing::info!("wrote configuration template to {}", args.config.display());
    Ok((),)
}

fn run_validate(args: ValidateArgs,) -> Result<(), Error,>
{
    let contents =
        fs::read_to_string(&args.config,).map_err(|source| io_error(&args.config, source,),)?;
    let value: serde_json::Value =
        serde_json::from_str(&contents,).map_err(|source| Error::Parse {
            message: source.to_string(),
        },)?;

    let report = validate_config(&value,);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, &report, args.pretty,)?;

    if !report.valid {
        return Err(Error::validation("configuration is invalid",),);
    }
    Ok((),)
}

fn run_badge(args: BadgeArgs,) -> Result<(), Error,>
{
    let config = load_config(&args.config,)?;
    write_badge(&config, &args.output,)?;

    tracing::info!("wrote badge to {}", args.output.display());
    Ok((),)
}

fn run_snippets(args: SnippetsArgs,) -> Result<(), Error,>
{
    let config = load_config(&args.config,)?;
    let snippets = render_snippets(&config, args.badge_path.as_deref(), args.url.as_deref(),);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, &snippets, args.pretty,)
}

fn run_resolve(args: ResolveArgs,) -> Result<(), Error,>
{
    let config = load_config(&args.config,)?;

    let platform = match args.platform.as_deref() {
        Some(identifier,) => DetectedOs::from_identifier(identifier,).ok_or_else(|| {
            Error::validation(format!(
                "unknown platform '{identifier}': expected darwin, win32, linux, or unknown"
            ),)
        },)?,
        None => detect_os(args.user_agent.as_deref(),),
    };

    let target = install_target(&config, platform,);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, &target, args.pretty,)
}

fn run_serve(args: ServeArgs,) -> Result<(), Error,>
{
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|source| Error::service(format!("failed to start async runtime: {source}"),),)?;
    runtime.block_on(server::serve(&args.host, args.port,),)
}

fn write_json<W: io::Write, T: serde::Serialize,>(
    writer: &mut W,
    value: &T,
    pretty: bool,
) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, value,)?;
    } else {
        serde_json::to_writer(writer, value,)?;
    }

    Ok((),)
}
