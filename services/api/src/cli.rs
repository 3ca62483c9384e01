use crate::demo::{run_benefits_report, run_letter, BenefitsReportArgs, LetterArgs};
use crate::server;
use civic_tools::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Midwest Civic Tools",
    about = "Run the civic tools service or generate estimates and letters from the command line",
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
    /// Benefits cliff calculations
    Benefits {
        #[command(subcommand)]
        command: BenefitsCommand,
    },
    /// Generate a data-rights request letter
    Letter(LetterArgs),
}

#[derive(Subcommand, Debug)]
enum BenefitsCommand {
    /// Print a benefit summary with cliff warnings, optionally with the chart series
    Report(BenefitsReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Benefits {
            command: BenefitsCommand::Report(args),
        } => run_benefits_report(args),
        Command::Letter(args) => run_letter(args),
    }
}
