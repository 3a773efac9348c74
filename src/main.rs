use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use install_resolver::config::Settings;
use install_resolver::param::store::ParamStore;
use install_resolver::resolve::market::HttpVersionSource;
use install_resolver::resolve::resolver::{Resolution, VersionResolver};
use install_resolver::resolve::semver::premkit_data_dir;
use install_resolver::resolve::types::{Overrides, ResolutionRequest};

#[derive(Parser)]
#[command(name = "install-resolver")]
#[command(version, about = "Resolve replicated installer versions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the effective versions for a channel and app
    Resolve {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        app_id: String,
        #[arg(long, default_value = "stables")]
        scope: String,
        /// Requested base version, exact tag or range expression
        #[arg(long)]
        replicated_tag: Option<String>,
        #[arg(long)]
        replicated_ui_tag: Option<String>,
        #[arg(long)]
        replicated_operator_tag: Option<String>,
    },
    /// Print the premkit data directory for a replicated version
    PremkitDataDir { version: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Resolve {
            channel,
            app_id,
            scope,
            replicated_tag,
            replicated_ui_tag,
            replicated_operator_tag,
        } => {
            let overrides = Overrides {
                replicated_tag,
                replicated_ui_tag,
                replicated_operator_tag,
            };
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(resolve(channel, app_id, scope, overrides))
        }
        Command::PremkitDataDir { version } => {
            println!("{}", premkit_data_dir(&version));
            Ok(())
        }
    }
}

async fn resolve(
    channel: String,
    app_id: String,
    scope: String,
    overrides: Overrides,
) -> anyhow::Result<()> {
    let store = ParamStore::init()?;
    let settings = Settings::load(&store).await?;

    let source = HttpVersionSource::new(&settings.replicated_api_url);
    let resolver = VersionResolver::new(source);
    let request = ResolutionRequest::new(&channel, &app_id, &scope).with_overrides(overrides);

    print_resolution("replicated", resolver.replicated_version(&request).await?)?;
    print_resolution(
        "replicated_ui",
        resolver.replicated_ui_version(&request).await?,
    )?;
    print_resolution(
        "replicated_operator",
        resolver.replicated_operator_version(&request).await?,
    )?;

    Ok(())
}

fn print_resolution(artifact: &str, resolution: Resolution) -> anyhow::Result<()> {
    match resolution {
        Resolution::Version(version) => {
            println!("{}: {}", artifact, version);
            Ok(())
        }
        Resolution::NoMatchingVersion { requested } => {
            bail!("no {} version matching {}", artifact, requested)
        }
    }
}
