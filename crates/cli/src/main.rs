use clap::{ArgGroup, Args, Parser, Subcommand};
use ferrous_pdns_domain::CliOverrides;
use std::path::PathBuf;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-pdns")]
#[command(version)]
#[command(about = "Ferrous pDNS - passive DNS bulk loader and observation history")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Database path
    #[arg(long, global = true)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bulk-load capture files into the cell store
    Load {
        /// Capture files, one `timestamp version source packet-hex` record per line
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<PathBuf>,

        /// Worker threads for packet decoding (0 = one per core)
        #[arg(short = 'j', long)]
        workers: Option<usize>,
    },

    /// Summarize the observation history of a record set or an rdata value
    Query(QueryArgs),
}

#[derive(Args)]
#[command(group(ArgGroup::new("mode").required(true).args(["rrset", "rdata"])))]
struct QueryArgs {
    /// Query the value sets published under an owner name
    #[arg(long)]
    rrset: bool,

    /// Record type for --rrset
    #[arg(long, alias = "rrset_type", value_name = "TYPE", requires = "rrset")]
    rrset_type: Option<String>,

    /// Query the owner names an rdata value was seen under
    #[arg(long)]
    rdata: bool,

    /// Rdata type for --rdata: `ip`, `dn` or a record type
    #[arg(long, alias = "rdata_type", value_name = "TYPE", requires = "rdata")]
    rdata_type: Option<String>,

    /// Owner name or rdata value to look up
    #[arg(long, value_name = "STRING", value_parser = non_empty)]
    query: String,
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("No query string was given".to_string())
    } else {
        Ok(value.to_string())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let workers = match &cli.command {
        Command::Load { workers, .. } => *workers,
        Command::Query(_) => None,
    };
    let cli_overrides = CliOverrides {
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
        workers,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Ferrous pDNS v{}", env!("CARGO_PKG_VERSION"));

    let database_url = format!("sqlite:{}", config.database.path);
    let pool = bootstrap::init_database(&database_url, &config.database).await?;

    let repos = di::Repositories::new(pool, &config);
    let use_cases = di::UseCases::new(&repos, &config);

    match cli.command {
        Command::Load { inputs, .. } => {
            commands::load::run(&config, &repos, &use_cases, &inputs).await?;
        }
        Command::Query(args) => {
            if args.rrset {
                let rrtype = args.rrset_type.unwrap_or_default();
                commands::query::rrset(&use_cases, &args.query, &rrtype).await?;
            } else {
                let rdata_type = args.rdata_type.unwrap_or_default();
                commands::query::rdata(&use_cases, &args.query, &rdata_type).await?;
            }
        }
    }

    Ok(())
}
