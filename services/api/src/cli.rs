use crate::demo::{run_demo, run_triage_report, DemoArgs, TriageReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hometrust::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HomeTrust Platform",
    about = "Run the HomeTrust home services platform from the command line",
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
    /// Triage a homeowner project list without starting the service
    Triage {
        #[command(subcommand)]
        command: TriageCommand,
    },
    /// Run an end-to-end CLI demo covering triage and pro verification
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum TriageCommand {
    /// Classify a project list and print the tiered report
    Report(TriageReportArgs),
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
        Command::Triage {
            command: TriageCommand::Report(args),
        } => run_triage_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
