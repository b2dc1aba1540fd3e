use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_add, handle_delete, handle_edit, handle_export_command, handle_list,
    handle_report_command, handle_show, AddArgs, EditArgs, ExportArgs, ListArgs, ReportCommands,
};
use spendlog::config::{Settings, SpendlogPaths};
use spendlog::storage::JsonExpenseStore;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Local-first personal expense tracker",
    long_about = "spendlog records your day-to-day expenses in a plain JSON file, \
                  lets you browse and filter them, summarizes where the money \
                  goes, and exports everything to CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one expense in full
    Show {
        /// Expense id (full or the short prefix shown by `list`)
        id: String,
    },

    /// Change fields of an existing expense
    Edit(EditArgs),

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense id (full or the short prefix shown by `list`)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export expenses to CSV
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpendlogPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    // Open the store; a missing or damaged file degrades to an empty list
    let mut store = JsonExpenseStore::open(paths.expenses_file());

    match cli.command {
        Commands::Add(args) => handle_add(&mut store, args)?,
        Commands::List(args) => handle_list(&store, &settings, args)?,
        Commands::Show { id } => handle_show(&store, &settings, &id)?,
        Commands::Edit(args) => handle_edit(&mut store, args)?,
        Commands::Delete { id, force } => handle_delete(&mut store, &id, force)?,
        Commands::Report(cmd) => handle_report_command(&store, &settings, cmd)?,
        Commands::Export(args) => handle_export_command(&store, args)?,
        Commands::Config => {
            println!("spendlog configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expense file:   {}", paths.expenses_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Trend months:    {}", settings.trend_months);
        }
    }

    Ok(())
}
