use crate::report::{run_catalog_list, run_recommend, CatalogArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use showroom::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Showroom",
    about = "Serve and query electric-vehicle recommendations from the command line",
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
    /// Inspect the vehicle catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Rank catalog vehicles against a set of shopping preferences
    Recommend(RecommendArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List every vehicle variant that loaded successfully
    List(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured catalog CSV
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog {
            command: CatalogCommand::List(args),
        } => run_catalog_list(args),
        Command::Recommend(args) => run_recommend(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["showroom-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_recommend_flags() {
        let cli = Cli::try_parse_from([
            "showroom-api",
            "recommend",
            "--budget-max",
            "60000",
            "--daily-distance",
            "45",
            "--passengers",
            "6",
            "--style",
            "SUV",
            "--priority",
            "efficiency",
            "--towing",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.budget_max, 60_000);
                assert_eq!(args.budget_min, 0);
                assert_eq!(args.passengers, 6);
                assert!(args.towing);
                assert!(!args.fsd);
            }
            other => panic!("expected recommend command, got {other:?}"),
        }
    }

    #[test]
    fn recommend_requires_budget() {
        let result = Cli::try_parse_from([
            "showroom-api",
            "recommend",
            "--daily-distance",
            "45",
            "--passengers",
            "2",
        ]);
        assert!(result.is_err());
    }
}
