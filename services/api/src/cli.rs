use crate::server;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use verifiable_stubs::error::AppError;
use verifiable_stubs::insurance::map_diagnosis;

#[derive(Parser, Debug)]
#[command(
    name = "Verifiable Stubs API",
    about = "Run the mock verification APIs or query their lookup tables",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the ICD-10 mapping for a free-text diagnosis
    Icd(IcdArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Load the reference regulations, fraud patterns and sanctions entries
    #[arg(long)]
    pub(crate) seed: bool,
}

#[derive(Args, Debug)]
pub(crate) struct IcdArgs {
    /// Diagnosis text, matched case-insensitively
    pub(crate) diagnosis: String,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Icd(args) => {
            print_icd_mapping(&args);
            Ok(())
        }
    }
}

fn print_icd_mapping(args: &IcdArgs) {
    let mapping = map_diagnosis(&args.diagnosis);
    println!(
        "{:#}",
        json!({ "diagnosis": args.diagnosis, "icd_mapping": mapping })
    );
}
