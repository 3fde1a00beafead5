use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tallybook::config::TallyPaths;
use tallybook::models::{Money, MonthKey, TransactionId, TransactionKind, EXPENSE_CATEGORIES};
use tallybook::report::MonthlySummary;
use tallybook::storage::{FileBackend, Store};

#[derive(Parser)]
#[command(
    name = "tallybook",
    version,
    about = "Local-only personal finance tracker",
    long_about = "tallybook records income and expense transactions, tags them \
                  with categories, tracks a monthly budget goal, and shows a \
                  month-scoped summary. Everything stays in local JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a transaction
    Add {
        /// income or expense
        #[arg(value_enum)]
        kind: KindArg,

        /// Amount, e.g. "10.50" or "$10.50"
        amount: String,

        /// Category label
        category: String,

        /// Optional free-text description
        #[arg(short, long)]
        description: Option<String>,

        /// Transaction date (YYYY-MM-DD); defaults to today
        #[arg(short = 'D', long)]
        date: Option<NaiveDate>,
    },

    /// Delete a transaction by id
    Delete {
        /// Transaction id as printed by `add` and `summary`
        id: String,
    },

    /// Remove every transaction in a month
    ClearMonth {
        /// Month as YYYY-MM; defaults to the current month
        month: Option<String>,
    },

    /// Show the summary for a month
    Summary {
        /// Month as YYYY-MM; defaults to the current month
        month: Option<String>,
    },

    /// Budget goal commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Category commands
    #[command(subcommand)]
    Categories(CategoryCommands),

    /// Show current configuration and paths
    Config,
}

#[derive(Subcommand)]
enum BudgetCommands {
    /// Set the budget goal for a month
    Set {
        /// Goal amount, e.g. "2000"
        amount: String,

        /// Month as YYYY-MM; defaults to the current month
        month: Option<String>,
    },

    /// Show every month with an explicit goal
    Show,
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// List expense and income categories
    List,

    /// Add an income category
    AddIncome {
        /// Category name
        name: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    paths.ensure_directories()?;
    let mut store = Store::open(Box::new(FileBackend::new(paths.data_dir())));

    match cli.command {
        Commands::Add {
            kind,
            amount,
            category,
            description,
            date,
        } => handle_add(&mut store, kind, &amount, &category, description, date),
        Commands::Delete { id } => handle_delete(&mut store, &id),
        Commands::ClearMonth { month } => {
            let month = parse_month(month)?;
            let removed = store.clear_month(month)?;
            println!("Removed {} transaction(s) from {}", removed, month);
            Ok(())
        }
        Commands::Summary { month } => {
            let month = parse_month(month)?;
            let summary = MonthlySummary::generate(store.transactions(), month, store.budgets());
            print!("{}", summary.format_terminal());
            Ok(())
        }
        Commands::Budget(cmd) => handle_budget(&mut store, cmd),
        Commands::Categories(cmd) => handle_categories(&mut store, cmd),
        Commands::Config => {
            println!("Data directory: {}", paths.data_dir().display());
            println!("Override with TALLYBOOK_DATA_DIR.");
            Ok(())
        }
    }
}

/// Input validation lives here, not in the store: positive amount, non-empty
/// category, expense categories drawn from the fixed set.
fn handle_add(
    store: &mut Store,
    kind: KindArg,
    amount: &str,
    category: &str,
    description: Option<String>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let amount = Money::parse(amount)?;
    if !amount.is_positive() {
        bail!("Amount must be positive");
    }

    let category = category.trim();
    if category.is_empty() {
        bail!("Category must not be empty");
    }
    let kind = TransactionKind::from(kind);
    if kind == TransactionKind::Expense && !EXPENSE_CATEGORIES.contains(&category) {
        bail!(
            "Unknown expense category '{}' (expected one of: {})",
            category,
            EXPENSE_CATEGORIES.join(", ")
        );
    }

    let date = match date {
        Some(d) => Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)),
        None => Utc::now(),
    };

    let txn = store.add_transaction(
        kind,
        date,
        amount,
        category,
        description.as_deref().unwrap_or(""),
    )?;
    println!("Added {} {} ({})", txn.kind, txn.amount, txn.category);
    println!("Id: {}", txn.id);
    Ok(())
}

fn handle_delete(store: &mut Store, id: &str) -> Result<()> {
    let id: TransactionId = id
        .parse()
        .with_context(|| format!("'{}' is not a transaction id", id))?;

    if store.delete_transaction(id)? {
        println!("Deleted transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

fn handle_budget(store: &mut Store, cmd: BudgetCommands) -> Result<()> {
    match cmd {
        BudgetCommands::Set { amount, month } => {
            let amount = Money::parse(&amount)?;
            if amount.is_negative() {
                bail!("Budget goal must not be negative");
            }
            let month = parse_month(month)?;
            store.set_budget(month, amount)?;
            println!("Budget for {} set to {}", month, amount);
        }
        BudgetCommands::Show => {
            if store.budgets().is_empty() {
                println!("No budget goals set.");
            } else {
                for (month, goal) in store.budgets().iter() {
                    println!("{}  {}", month, goal);
                }
            }
        }
    }
    Ok(())
}

fn handle_categories(store: &mut Store, cmd: CategoryCommands) -> Result<()> {
    match cmd {
        CategoryCommands::List => {
            println!("Expense categories: {}", EXPENSE_CATEGORIES.join(", "));
            let income: Vec<&str> = store.income_categories().iter().collect();
            println!("Income categories:  {}", income.join(", "));
        }
        CategoryCommands::AddIncome { name } => {
            let name = name.trim();
            if name.is_empty() {
                bail!("Category must not be empty");
            }
            if store.add_income_category(name)? {
                println!("Added income category '{}'", name);
            } else {
                println!("Income category '{}' already exists", name);
            }
        }
    }
    Ok(())
}

fn parse_month(month: Option<String>) -> Result<MonthKey> {
    match month {
        Some(s) => Ok(s.parse()?),
        None => Ok(MonthKey::current()),
    }
}
