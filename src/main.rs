use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::warn;

use expense_tracker::chart::{ChartRenderer, TerminalChart, TextChart};
use expense_tracker::cli::{
    handle_export_command, handle_history_command, handle_list_command, Console, ExportArgs,
    ListArgs, Menu,
};
use expense_tracker::config::paths::DATA_DIR_ENV;
use expense_tracker::config::{ChartMode, ExpensePaths, Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker with terminal charts",
    long_about = "Record everyday expenses, then review them by month, category, \
                  trend and day. Running without a command opens the interactive menu."
)]
struct Cli {
    /// Directory holding settings, data and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Draw charts as plain text even on a terminal
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// List expenses as a table
    #[command(alias = "ls")]
    List(ListArgs),

    /// Export expenses
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(default_value = "10")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage; an unreadable data file leaves an empty collection
    let mut storage = Storage::new(paths.clone())?;
    if let Err(e) = storage.load_all() {
        if !e.is_data() {
            return Err(e.into());
        }
        warn!("{}", e);
        eprintln!("Warning: {}", e);
        eprintln!("Starting with an empty expense list.");
    }

    match cli.command {
        None | Some(Commands::Menu) => {
            let charts = chart_renderer(&settings, cli.plain);
            let stdin = io::stdin();
            let console = Console::new(stdin.lock(), io::stdout());
            Menu::new(console, &storage, &settings, charts).run()?;
        }
        Some(Commands::List(args)) => handle_list_command(&storage, &settings, args)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::History { count }) => handle_history_command(&storage, count)?,
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Categories:       {}", settings.categories.join(", "));
            println!("  Recent limit:     {}", settings.recent_limit);
            match settings.category_window_days {
                Some(days) => println!("  Category window:  {} days", days),
                None => println!("  Category window:  all time"),
            }
            println!("  Trend months:     {}", settings.trend_months);
            println!("  Daily window:     {} days", settings.daily_window_days);
            println!("  Chart mode:       {:?}", settings.chart_mode);
            println!("  Expenses stored:  {}", storage.expenses.count()?);
        }
    }

    Ok(())
}

/// Full-screen charts only on an interactive terminal
fn chart_renderer(settings: &Settings, plain: bool) -> Box<dyn ChartRenderer> {
    let interactive = io::stdout().is_terminal() && io::stdin().is_terminal();

    if !plain && settings.chart_mode == ChartMode::Terminal && interactive {
        Box::new(TerminalChart::new(settings.currency_symbol.clone()))
    } else {
        Box::new(TextChart::new(io::stdout()).with_currency(settings.currency_symbol.clone()))
    }
}
