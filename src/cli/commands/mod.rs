//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod add;
pub mod clear;
pub mod list;
pub mod login;
pub mod logout;
pub mod remove;
pub mod status;
pub mod toggle;

use crate::app::AppContext;
use crate::error::{HfError, Result};

pub fn run(ctx: &mut AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Login(args) => login::run(ctx, args),
        Commands::Logout(args) => logout::run(ctx, args),
        Commands::Status(args) => status::run(ctx, args),
        Commands::Add(args) => add::run(ctx, args),
        Commands::List(args) => list::run(ctx, args),
        Commands::Toggle(args) => toggle::run(ctx, args),
        Commands::Remove(args) => remove::run(ctx, args),
        Commands::Clear(args) => clear::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in (or create an account on first login)
    Login(login::LoginArgs),

    /// Log out of the current session
    Logout(logout::LogoutArgs),

    /// Show the current session and habit summary
    Status(status::StatusArgs),

    /// Add a new habit
    Add(add::AddArgs),

    /// List habits with their week grid and streak
    List(list::ListArgs),

    /// Toggle a day of a habit complete or incomplete
    Toggle(toggle::ToggleArgs),

    /// Remove a habit
    Remove(remove::RemoveArgs),

    /// Remove all habits of the current user
    Clear(clear::ClearArgs),
}

/// Require an authenticated session, returning its phone number.
fn require_login(ctx: &AppContext) -> Result<String> {
    ctx.accounts
        .current_user()
        .map(str::to_string)
        .ok_or(HfError::NotLoggedIn)
}

/// Resolve user input to a habit id: exact id first, then a habit name
/// match if it is unambiguous. `None` when nothing matches; mutations on
/// unmatched input are deliberate no-ops, not errors.
fn resolve_habit_id(ctx: &AppContext, input: &str) -> Option<String> {
    if let Some(habit) = ctx.habits.get(input) {
        return Some(habit.id.clone());
    }
    let mut by_name = ctx.habits.habits().iter().filter(|h| h.name == input);
    match (by_name.next(), by_name.next()) {
        (Some(habit), None) => Some(habit.id.clone()),
        _ => None,
    }
}
