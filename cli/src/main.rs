mod asset;
mod batch;
mod check;
mod display;
mod error;
mod prelude;
mod report;

use {crate::prelude::*, std::time::Duration};

#[derive(Parser)]
#[command(
    name = "nft-checker",
    version,
    about = "CLI tool to check NFT collections and floor prices on OpenSea"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Check NFT collection data")]
    Check {
        /// Collection slug or NFT contract address (`0x...`).
        #[arg(value_name = "CONTRACT", help = "Collection slug or NFT contract address")]
        contract: String,
    },
    #[command(about = "Check a single NFT asset")]
    Asset {
        #[arg(value_name = "CONTRACT", help = "NFT contract address")]
        contract: String,
        #[arg(value_name = "TOKEN_ID", help = "Token ID of the asset")]
        token_id: String,
    },
    #[command(about = "Check every collection listed in a file, one per line")]
    Batch {
        #[arg(value_name = "FILE", help = "File with one collection slug or address per line")]
        file: PathBuf,
        /// Pause between two collections to stay within rate limits.
        #[arg(
            long = "delay",
            help = "Delay between requests in milliseconds",
            value_name = "MS",
            default_value_t = 1000
        )]
        delay: u64,
    },
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Customize parsing error handling.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // These 2 are "not real errors" that are used to stop the execution
            // to display the CLI help or version.
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    println!("{}", e);

                    std::process::exit(0);
                }
                _ => (),
            }

            eprintln!(
                "{ballot} {error}",
                ballot = "✘".red().bold(),
                error = NftCheckerCliError::SyntaxError(e)
            );

            std::process::exit(1);
        }
    };

    // Handle any errors that occurred during command execution.
    if let Err(e) = run(cli).await {
        eprintln!("{ballot} {e}", ballot = "✘".red().bold());

        std::process::exit(1);
    }
}

/// Build the client from the configuration and send the sub-command to its
/// handler.
async fn run(cli: Cli) -> AnyResult<(), NftCheckerCliError> {
    let conf = CliConf::load().await?;
    let settings = ApiSettings::resolve(&conf);

    log::debug!("Using OpenSea API at {}", settings.base_url);

    let client = settings.client();
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();

    match cli.command {
        Command::Check { contract } => {
            check::check_collection(&mut out, &mut err, &client, &contract).await
        }
        Command::Asset { contract, token_id } => {
            asset::check_asset(&mut out, &mut err, &client, &contract, &token_id).await
        }
        Command::Batch { file, delay } => batch::check_batch(
            &mut out,
            &mut err,
            &client,
            &file,
            Duration::from_millis(delay),
        )
        .await
        .map(|summary| log::debug!("Batch finished: {summary:?}")),
    }
}
