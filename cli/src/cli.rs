use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "rentals")]
#[command(about = "Console for the car rental backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL, e.g. http://localhost:8080
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Session cookie to send, e.g. JSESSIONID=...
    #[arg(long, global = true)]
    pub session: Option<String>,

    /// Config file to use instead of the platform default
    #[arg(long, global = true, env = "RENTALS_CONFIG")]
    pub config: Option<PathBuf>,

    /// File holding the cart selection
    #[arg(long, global = true, env = "RENTALS_CART")]
    pub cart_file: Option<PathBuf>,

    /// How to show car images
    #[arg(long, global = true, value_enum, default_value_t = ImageMode::Auto)]
    pub images: ImageMode,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImageMode {
    /// Detect from the terminal
    Auto,
    Kitty,
    Iterm,
    None,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Administrator views
    Admin {
        #[command(subcommand)]
        view: AdminCommand,
    },
    /// Customer views, cart and booking
    User {
        #[command(subcommand)]
        command: UserCommand,
    },
    /// Open a view by its menu identifier (unknown identifiers are ignored)
    Open {
        #[arg(value_enum)]
        console: ConsoleKind,
        /// View identifier, e.g. users, cars, bookings, cart or logout
        view: String,
    },
    /// Print the login page message for a query string such as "?error"
    LoginMessage {
        #[arg(default_value = "")]
        query: String,
    },
    /// Show or change the saved configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Forget the saved session and print the backend logout URL
    Logout,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConsoleKind {
    Admin,
    User,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// List all users
    Users {
        /// Sort key, e.g. last-name-desc
        #[arg(long, short = 's')]
        sort: Option<String>,
    },
    /// List all cars
    Cars {
        #[arg(long, short = 's')]
        sort: Option<String>,
    },
    /// List all bookings
    Bookings {
        #[arg(long, short = 's')]
        sort: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// List cars to choose from
    Cars {
        #[arg(long, short = 's')]
        sort: Option<String>,

        /// Put the car with this ID into the cart
        #[arg(long)]
        choose: Option<i64>,

        /// Pick a car interactively
        #[arg(long, short = 'I', conflicts_with = "choose")]
        interactive: bool,
    },
    /// List your bookings
    Bookings {
        #[arg(long, short = 's')]
        sort: Option<String>,
    },
    /// Show the cart
    Cart,
    /// Put a car into the cart, replacing any earlier choice
    Select {
        /// Car ID
        id: i64,
    },
    /// Empty the cart
    Clear,
    /// Book the car in the cart
    Confirm {
        /// First day, YYYY-MM-DD (prompted for if omitted on a terminal)
        #[arg(long)]
        from: Option<String>,

        /// Last day, YYYY-MM-DD (prompted for if omitted on a terminal)
        #[arg(long)]
        to: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Save the session cookie to send with every request
    SetSession {
        /// Cookie header value, e.g. JSESSIONID=...
        cookie: String,
    },
    /// Save the backend base URL
    SetBaseUrl { url: String },
    /// Print the effective configuration
    Show,
}
