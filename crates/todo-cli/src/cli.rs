use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Manage your todo list from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Todo API base URL (defaults to TODO_API_BASE_URL, then http://localhost:5000)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in, register, or manage the stored session
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// List tasks, newest first
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new task
    #[command(alias = "new")]
    Add {
        /// Task text
        text: Vec<String>,
    },
    /// Replace the text of a task
    Edit {
        /// Task ID
        id: String,
        /// New task text
        text: Vec<String>,
    },
    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Login with email/password and store the access token in the keychain
    Login {
        /// Account email
        #[arg(long, value_name = "EMAIL")]
        email: String,
        /// Account password
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },
    /// Create an account (does not sign in)
    Register {
        /// Account email
        #[arg(long, value_name = "EMAIL")]
        email: String,
        /// Account password
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },
    /// Check the stored session against the server
    Status,
    /// Clear the stored session
    Logout,
    /// Print the Google sign-in URL
    Google,
    /// Store the token delivered by the Google sign-in redirect
    Token {
        /// Callback URL (`...?token=...`) or the raw token
        value: String,
    },
}
