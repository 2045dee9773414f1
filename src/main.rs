use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use budgetboard::cli::{
    handle_budget_command, handle_dashboard_command, handle_goals_command,
    handle_savings_command, handle_transactions_command, parse_date, BudgetArgs, Context,
    DashboardArgs, GoalsArgs, SavingsArgs, TransactionsArgs,
};
use budgetboard::config::{paths::BoardPaths, settings::Settings};
use budgetboard::logging;

#[derive(Parser)]
#[command(
    name = "budgetboard",
    version,
    about = "Terminal personal-finance dashboard",
    long_about = "budgetboard shows income, spending, budget progress and savings goals \
                  from a built-in set of sample records. Every figure is recomputed on \
                  each run; nothing but your settings is stored."
)]
struct Cli {
    /// Reference date for countdowns and transaction dates (YYYY-MM-DD)
    #[arg(long, global = true, env = "BUDGETBOARD_TODAY")]
    today: Option<String>,

    /// Seed for sample transaction dates (overrides the configured seed)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Overview of totals, recent transactions, budget and goals
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Budget categories with spending progress
    Budget(BudgetArgs),

    /// Savings goal progress and required contributions
    Goals(GoalsArgs),

    /// Monthly savings trend
    Savings(SavingsArgs),

    /// Search and filter transactions
    #[command(alias = "txn")]
    Transactions(TransactionsArgs),

    /// Write a settings file with default values
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = BoardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(path = %paths.settings_file().display(), "settings loaded");

    let today = match cli.today.as_deref() {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let command = match cli.command {
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Settings already exist at: {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
            }
            return Ok(());
        }
        Some(Commands::Config) => {
            println!("budgetboard Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent limit:    {}", settings.recent_limit);
            println!("  Default format:  {}", settings.default_format);
            match settings.fixture_seed {
                Some(seed) => println!("  Fixture seed:    {}", seed),
                None => println!("  Fixture seed:    (random)"),
            }
            return Ok(());
        }
        Some(command) => command,
        None => Commands::Dashboard(DashboardArgs::default()),
    };

    let ctx = Context::load(settings, today, cli.seed)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Dashboard(args) => handle_dashboard_command(&ctx, args, &mut out)?,
        Commands::Budget(args) => handle_budget_command(&ctx, args, &mut out)?,
        Commands::Goals(args) => handle_goals_command(&ctx, args, &mut out)?,
        Commands::Savings(args) => handle_savings_command(&ctx, args, &mut out)?,
        Commands::Transactions(args) => handle_transactions_command(&ctx, args, &mut out)?,
        Commands::Init | Commands::Config => {}
    }

    Ok(())
}
