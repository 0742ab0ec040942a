//! hf status - Session and habit summary

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::core::Habit;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct StatusArgs {}

pub fn run(ctx: &mut AppContext, _args: &StatusArgs) -> Result<()> {
    let user = ctx.accounts.current_user().map(str::to_string);
    let habits = ctx.habits.habits();
    let best_streak = habits.iter().map(Habit::streak).max();

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "logged_in": user.is_some(),
                "phone": user,
                "habit_count": habits.len(),
                "best_streak": best_streak.unwrap_or(0),
            })
        );
        return Ok(());
    }

    match user {
        Some(phone) => {
            println!("Logged in as {}", phone.cyan().bold());
            println!(
                "{} habits, best streak {}",
                habits.len().to_string().bold(),
                best_streak.unwrap_or(0).to_string().bold()
            );
        }
        None => {
            println!("{}", "Not logged in".dimmed());
            println!();
            println!("Log in with:");
            println!("  hf login <phone> <password>");
        }
    }

    Ok(())
}
