use std::path::PathBuf;

use colored::Colorize;

use outlay_server::{OutlayServer, ServerConfig};
use outlay_store::{LedgerStore, StoreError};
use outlay_types::ExpenseRecord;

use crate::cli::*;

const DEFAULT_LEDGER: &str = "expenses.csv";

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let ledger = cli
        .ledger
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER));
    match cli.command {
        Command::Serve(args) => cmd_serve(args, cli.ledger),
        Command::Add(args) => cmd_add(&open_store(ledger)?, args),
        Command::List => cmd_list(&open_store(ledger)?),
        Command::Category(args) => cmd_category(&open_store(ledger)?, args),
        Command::Summary(args) => cmd_summary(&open_store(ledger)?, args),
        Command::Stats => cmd_stats(&open_store(ledger)?),
        Command::Delete(args) => cmd_delete(&open_store(ledger)?, args),
    }
}

fn open_store(path: PathBuf) -> anyhow::Result<LedgerStore> {
    let store = LedgerStore::new(path);
    store.initialize()?;
    Ok(store)
}

fn cmd_serve(args: ServeArgs, ledger_override: Option<PathBuf>) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(path) = ledger_override {
        config.ledger_path = path;
    }

    println!(
        "{} outlay server on {}  (ledger: {})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.ledger_path.display()
    );
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(OutlayServer::new(config).serve())?;
    Ok(())
}

fn cmd_add(store: &LedgerStore, args: AddArgs) -> anyhow::Result<()> {
    let description = args.description.join(" ");
    let record = store.append(&args.category, args.amount, &description)?;
    println!(
        "{} Recorded {} {} on {}",
        "✓".green().bold(),
        record.category.yellow(),
        record.amount.bold(),
        record.date
    );
    Ok(())
}

fn cmd_list(store: &LedgerStore) -> anyhow::Result<()> {
    let records = store.read_all()?;
    if records.is_empty() {
        println!("Ledger is empty.");
    } else {
        print_records(&records);
    }
    Ok(())
}

fn cmd_category(store: &LedgerStore, args: CategoryArgs) -> anyhow::Result<()> {
    match store.filter_by_category(&args.name) {
        Ok(records) => print_records(&records),
        Err(StoreError::NoMatches) => {
            println!("No expenses in category {}.", args.name.yellow())
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn cmd_summary(store: &LedgerStore, args: SummaryArgs) -> anyhow::Result<()> {
    let summary = store.month_summary(&args.month)?;
    print_records(&summary.expenses);
    println!(
        "Total for {}: {}",
        summary.month.yellow(),
        format!("{}", summary.total).bold()
    );
    Ok(())
}

fn cmd_stats(store: &LedgerStore) -> anyhow::Result<()> {
    match store.stats() {
        Ok(stats) => {
            println!("{}  {}", "highest:".green().bold(), stats.highest);
            println!("{}  {}", " lowest:".cyan().bold(), stats.lowest);
        }
        Err(StoreError::Empty) => println!("No expenses recorded."),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn cmd_delete(store: &LedgerStore, args: DeleteArgs) -> anyhow::Result<()> {
    let description = args.description.join(" ");
    match store.delete_matching(&args.date, &args.category, args.amount, &description) {
        Ok(removed) => println!("{} Deleted {} row(s).", "✓".green().bold(), removed),
        Err(StoreError::NoMatches) => println!("No matching expense found."),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn print_records(records: &[ExpenseRecord]) {
    for record in records {
        println!(
            "{}  {}  {}  {}",
            record.date.dimmed(),
            record.category.yellow(),
            record.amount.bold(),
            record.description
        );
    }
}
