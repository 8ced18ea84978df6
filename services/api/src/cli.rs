use crate::demo::{run_demo, run_merit_board, DemoArgs, MeritBoardArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use talenta::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Talenta Merit Platform",
    about = "Demonstrate and run the talenta merit-scoring service from the command line",
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
    /// Print the current merit board for committee demos
    MeritBoard(MeritBoardArgs),
    /// Run an end-to-end CLI demo covering training, career, and fraud flows
    Demo(DemoArgs),
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
        Command::MeritBoard(args) => run_merit_board(args),
        Command::Demo(args) => run_demo(args),
    }
}
