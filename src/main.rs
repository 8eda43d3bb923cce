use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use splitpot::cli::{handle_check_command, handle_import_command, handle_session_command};
use splitpot::config::{paths::SplitPaths, settings::Settings};
use splitpot::display::format_roster;
use splitpot::services::Session;

#[derive(Parser)]
#[command(
    name = "split",
    version,
    about = "Split shared expenses and see who owes what",
    long_about = "splitpot records shared expenses for a fixed group of participants \
                  and shows how far each one is from an equal share of the total."
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter expenses interactively
    #[command(alias = "s")]
    Session,

    /// Submit every row of a CSV file and print the balances
    Import(splitpot::cli::ImportArgs),

    /// Validate expense fields without recording them
    Check(splitpot::cli::CheckArgs),

    /// Show the participants
    Roster,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    splitpot::logging::init(cli.verbose);

    let paths = SplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Session) => {
            handle_session_command(&settings)?;
        }
        Some(Commands::Import(args)) => {
            handle_import_command(&settings, args)?;
        }
        Some(Commands::Check(args)) => {
            let session = Session::new(settings.participants())?;
            let valid = handle_check_command(&session, args, &mut std::io::stdout().lock())?;
            if !valid {
                std::process::exit(1);
            }
        }
        Some(Commands::Roster) => {
            let session = Session::new(settings.participants())?;
            println!("{}", format_roster(&session));
        }
        Some(Commands::Init) => {
            println!("Initializing splitpot at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
            println!();
            println!("Participants:");
            for participant in &settings.roster {
                println!("  - {}", participant.name);
            }
            println!();
            println!("Edit the roster in the settings file, then run 'split session'.");
        }
        Some(Commands::Config) => {
            println!("splitpot Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Symbol after amount: {}", settings.symbol_after_amount);
            println!("  Participants:        {}", settings.roster.len());
        }
        None => {
            println!("splitpot - split shared expenses from the terminal");
            println!();
            println!("Run 'split --help' for usage information.");
            println!("Run 'split session' to start entering expenses.");
        }
    }

    Ok(())
}
