use clap::{Parser, Subcommand};
use colored::Colorize;

use booking_admin_e2e::browser::BrowserConfig;
use booking_admin_e2e::config::{Environment, RunConfig};
use booking_admin_e2e::reporter::BasicReporter;
use booking_admin_e2e::runner::{run_suite, TestFilter};
use booking_admin_e2e::suites;

#[derive(Parser)]
#[command(name = "booking-admin-e2e")]
#[command(version = "0.1.0")]
#[command(about = "End-to-end browser test suite for the booking administration panel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the test suite
    Run {
        /// Run the browser with a visible window
        #[arg(long, default_value = "false")]
        headed: bool,

        /// Base URL of the application under test
        #[arg(long)]
        base_url: Option<String>,

        /// Only execute tests from this suite; the rest are skipped
        #[arg(long)]
        suite: Option<String>,

        /// Only execute tests whose name contains this substring
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// List the declared test cases
    List,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            headed,
            base_url,
            suite,
            filter,
        } => {
            // Credentials and language are required before anything runs.
            let env = match Environment::from_env() {
                Ok(env) => env,
                Err(e) => {
                    eprintln!("{} {}", "Configuration error:".red().bold(), e);
                    std::process::exit(2);
                }
            };

            let mut browser_config = BrowserConfig::default();
            if headed {
                browser_config.headless = false;
            }
            if let Some(url) = base_url {
                browser_config.base_url = url;
            }

            let run_config = RunConfig::default();
            let test_filter = TestFilter {
                suite,
                name_contains: filter,
            };

            let cases = suites::all_cases();
            let mut reporter = BasicReporter::new();

            match run_suite(
                &cases,
                &env,
                &run_config,
                browser_config,
                &test_filter,
                &mut reporter,
            )
            .await
            {
                Ok(overall) if overall.is_passed() => {}
                Ok(_) => std::process::exit(1),
                Err(e) => {
                    eprintln!("{} {:#}", "Run aborted:".red().bold(), e);
                    std::process::exit(2);
                }
            }
        }

        Commands::List => {
            for case in suites::all_cases() {
                println!("{} > {}", case.suite.bold(), case.name);
            }
        }
    }
}
