use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "outlay",
    about = "Personal expense ledger over a flat text file",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path of the ledger file [default: expenses.csv]
    #[arg(long, global = true, value_name = "PATH")]
    pub ledger: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Record an expense dated today
    Add(AddArgs),
    /// List every recorded expense
    List,
    /// List expenses in a category (case-insensitive)
    Category(CategoryArgs),
    /// Total the expenses of a month (YYYY-MM)
    Summary(SummaryArgs),
    /// Show the highest and lowest expense
    Stats,
    /// Delete the expenses matching an exact row
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Bind address for the HTTP listener
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// TOML configuration file; --bind and --ledger override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct AddArgs {
    pub category: String,
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
    pub description: Vec<String>,
}

#[derive(Args)]
pub struct CategoryArgs {
    pub name: String,
}

#[derive(Args)]
pub struct SummaryArgs {
    pub month: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub date: String,
    pub category: String,
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
    pub description: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["outlay", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn parse_add() {
        let cli =
            Cli::try_parse_from(["outlay", "add", "Groceries", "45.2", "Weekly", "shop"]).unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.category, "Groceries");
            assert_eq!(args.amount, 45.2);
            assert_eq!(args.description, vec!["Weekly", "shop"]);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_add_negative_amount() {
        let cli = Cli::try_parse_from(["outlay", "add", "Refund", "-12.5"]).unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.amount, -12.5);
            assert!(args.description.is_empty());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_add_rejects_non_numeric_amount() {
        assert!(Cli::try_parse_from(["outlay", "add", "Food", "lots"]).is_err());
    }

    #[test]
    fn parse_category() {
        let cli = Cli::try_parse_from(["outlay", "category", "fuel"]).unwrap();
        if let Command::Category(args) = cli.command {
            assert_eq!(args.name, "fuel");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_summary() {
        let cli = Cli::try_parse_from(["outlay", "summary", "2024-06"]).unwrap();
        if let Command::Summary(args) = cli.command {
            assert_eq!(args.month, "2024-06");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_delete() {
        let cli = Cli::try_parse_from([
            "outlay", "delete", "2024-06-01", "Groceries", "45.2", "Weekly", "shop",
        ])
        .unwrap();
        if let Command::Delete(args) = cli.command {
            assert_eq!(args.date, "2024-06-01");
            assert_eq!(args.amount, 45.2);
            assert_eq!(args.description, vec!["Weekly", "shop"]);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_serve_with_bind() {
        let cli = Cli::try_parse_from(["outlay", "serve", "--bind", "0.0.0.0:9000"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, Some("0.0.0.0:9000".parse().unwrap()));
            assert!(args.config.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_global_ledger_flag() {
        let cli = Cli::try_parse_from(["outlay", "list", "--ledger", "/tmp/e.csv"]).unwrap();
        assert_eq!(cli.ledger, Some(PathBuf::from("/tmp/e.csv")));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["outlay", "--verbose", "stats"]).unwrap();
        assert!(cli.verbose);
    }
}
