//! Vista CLI
//!
//! Command-line interface over the shared site logic:
//! - Score passwords
//! - Sign in, register and sign out against a local session file
//! - Show the dashboard
//! - Toggle the theme

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use vista::auth::{CredentialFlow, Credentials, LoginForm, RegistrationForm};
use vista::config::{generate_default_config, Config};
use vista::counter::{Animator, CounterDisplay};
use vista::dashboard::{
    open, DashboardLoader, DashboardPage, FileFixtureSource, FixtureSource,
    HttpFixtureSource, OpenError,
};
use vista::nav::{self, Redirect};
use vista::notify::{Notice, Notifier};
use vista::page::Theme;
use vista::store::{FileStore, Session};
use vista::strength::Strength;

#[derive(Parser)]
#[command(name = "vista")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Demo sign-in and dashboard for the Vista site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Session file (overrides the configured store path)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a password (0-4)
    Strength {
        password: String,
    },

    /// Sign in
    Login {
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        /// Password confirmation
        #[arg(long)]
        confirm: String,
    },

    /// Sign out
    Logout,

    /// Show the dashboard
    Dashboard {
        /// Print final values without animating the counters
        #[arg(long)]
        no_animate: bool,
    },

    /// Show or change the theme
    Theme {
        #[arg(value_enum, default_value = "show")]
        action: ThemeAction,
    },

    /// Generate default config file
    InitConfig {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Show,
    Toggle,
    Light,
    Dark,
}

/// Prints alerts as they are posted
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        if notice.is_error() {
            eprintln!("[{}] {}", notice.kind.as_str(), notice.message);
        } else {
            println!("[{}] {}", notice.kind.as_str(), notice.message);
        }
    }
}

/// Redraws one counter line in place
struct TerminalDisplay {
    label_width: usize,
}

impl CounterDisplay for TerminalDisplay {
    fn show(&self, key: &str, text: &str) {
        let label = key.trim_start_matches("stat-").replace('-', " ");
        print!("\r  {:<width$} {:>12}", label, text, width = self.label_width);
        let _ = std::io::stdout().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(cli.config.as_deref())?;
    vista::logging::init(&config.logging, &vista::logging::default_filter(&config.logging, false))?;

    match cli.command {
        Commands::Strength { password } => {
            let strength = Strength::of(&password);
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&strength)?),
                OutputFormat::Table => {
                    let text = strength.label.map(|l| l.text()).unwrap_or("-");
                    println!("Score: {}/4  {}", strength.score, text);
                    if !strength.is_acceptable() {
                        println!("Too weak to register with.");
                    }
                }
            }
        }

        Commands::Login { email, password } => {
            let session = open_session(&cli.store, &config)?;
            let credentials = Credentials::Login(LoginForm::new(email, password));
            let redirect = submit(&session, &config, &credentials).await?;
            follow(redirect).await;
        }

        Commands::Register {
            name,
            email,
            password,
            confirm,
        } => {
            let session = open_session(&cli.store, &config)?;
            let credentials =
                Credentials::Register(RegistrationForm::new(name, email, password, confirm));
            let redirect = submit(&session, &config, &credentials).await?;
            follow(redirect).await;
        }

        Commands::Logout => {
            let session = open_session(&cli.store, &config)?;
            let redirect = nav::logout(&session)?;
            println!("Signed out.");
            follow(redirect).await;
        }

        Commands::Dashboard { no_animate } => {
            let session = open_session(&cli.store, &config)?;
            let source = fixture_source(&config)?;
            let mut loader = DashboardLoader::new(
                source,
                config.site.demo_mode,
                config.dashboard.chart_options(),
            );

            let page = match open(&session, &mut loader).await {
                Ok(page) => page,
                Err(OpenError::Unauthenticated(redirect)) => {
                    eprintln!("Not signed in. Run `vista login` first.");
                    follow(redirect).await;
                    std::process::exit(1);
                }
                Err(OpenError::Load(e)) => {
                    return Err(e).context("Failed to load dashboard data");
                }
            };

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page)?),
                OutputFormat::Table => print_dashboard(&page, &config, !no_animate).await,
            }
        }

        Commands::Theme { action } => {
            let store = open_store(&cli.store, &config)?;
            let theme = match action {
                ThemeAction::Show => Theme::load(&store),
                ThemeAction::Toggle => Theme::toggle(&store)?,
                ThemeAction::Light => {
                    Theme::Light.save(&store)?;
                    Theme::Light
                }
                ThemeAction::Dark => {
                    Theme::Dark.save(&store)?;
                    Theme::Dark
                }
            };
            println!("Theme: {}", theme);
        }

        Commands::InitConfig { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn open_store(store: &Option<PathBuf>, config: &Config) -> Result<FileStore> {
    let path = store.clone().unwrap_or_else(|| config.site.store_path());
    FileStore::open(&path).with_context(|| format!("Failed to open session file {:?}", path))
}

fn open_session(store: &Option<PathBuf>, config: &Config) -> Result<Session<FileStore>> {
    Ok(Session::new(open_store(store, config)?))
}

fn fixture_source(config: &Config) -> Result<Box<dyn FixtureSource>> {
    Ok(match &config.site.fixture_url {
        Some(url) => {
            let timeout = Duration::from_secs(config.api.request_timeout_secs);
            Box::new(HttpFixtureSource::new(url, timeout)?)
        }
        None => Box::new(FileFixtureSource::new(&config.site.fixture_path)),
    })
}

async fn submit(
    session: &Session<FileStore>,
    config: &Config,
    credentials: &Credentials,
) -> Result<Redirect> {
    let probe = fixture_source(config)?;
    let notifier = ConsoleNotifier;
    let flow = CredentialFlow::new(session, &probe, &notifier, config.auth_policy());

    match flow.submit(credentials).await {
        Ok(redirect) => Ok(redirect),
        // Already printed by the notifier
        Err(_) => std::process::exit(1),
    }
}

async fn follow(redirect: Redirect) {
    if !redirect.delay.is_zero() {
        tokio::time::sleep(redirect.delay).await;
    }
    println!("-> {}", redirect.to.path());
}

async fn print_dashboard(page: &DashboardPage, config: &Config, animate: bool) {
    if let Some(greeting) = &page.greeting {
        println!("Welcome, {} <{}>", greeting.name, greeting.email);
    }
    println!("Data: {:?}", page.view.source);
    println!();

    if !page.view.stats.is_empty() {
        println!("Stats");
        let label_width = page.view.stats.iter().map(|s| s.label.len()).max().unwrap_or(0);

        if animate {
            let display = Arc::new(TerminalDisplay { label_width });
            let animator = Animator::with_timing(
                display,
                config.dashboard.counter_duration(),
                config.dashboard.counter_tick(),
            );
            for stat in &page.view.stats {
                animator.animate(stat.key, stat.target, stat.prefix).finished().await;
                println!();
            }
        } else {
            for stat in &page.view.stats {
                println!("  {:<width$} {:>12}", stat.label, stat.display, width = label_width);
            }
        }
        println!();
    }

    if !page.view.charts.is_empty() {
        println!("Charts");
        for chart in &page.view.charts {
            let kind = chart
                .kind
                .map(|k| format!("{:?}", k).to_lowercase())
                .unwrap_or_else(|| "empty".to_string());
            println!("  {} ({})", chart.id, kind);
        }
        println!();
    }

    if let Some(activity) = &page.view.activity {
        println!("Recent Activity");
        println!("  {:<12} {:<20} {:<24} {}", "DATE", "USER", "ACTION", "STATUS");
        for row in &activity.rows {
            println!(
                "  {:<12} {:<20} {:<24} {}",
                row.date, row.user, row.action, row.status
            );
        }
    }
}
