//! hf toggle - Flip a day of a habit
//!
//! Toggling an unknown habit is a deliberate no-op so stale ids stay
//! benign; the command reports it but still exits successfully.

use std::str::FromStr;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::core::Day;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ToggleArgs {
    /// Habit id or name
    pub habit: String,

    /// Day of the week (Mon..Sun)
    pub day: String,
}

pub fn run(ctx: &mut AppContext, args: &ToggleArgs) -> Result<()> {
    super::require_login(ctx)?;
    let day = Day::from_str(&args.day)?;

    let Some(habit_id) = super::resolve_habit_id(ctx, &args.habit) else {
        if ctx.robot_mode {
            println!(
                "{}",
                serde_json::json!({
                    "status": "not_found",
                    "habit": args.habit,
                    "toggled": false,
                })
            );
        } else {
            println!("{} No habit matched '{}'", "!".yellow(), args.habit.cyan());
        }
        return Ok(());
    };

    ctx.habits.toggle_day(&habit_id, day)?;
    let completed = ctx
        .habits
        .get(&habit_id)
        .is_some_and(|h| h.completed(day));

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "id": habit_id,
                "day": day.name(),
                "completed": completed,
                "toggled": true,
            })
        );
    } else if completed {
        println!("{} {} marked complete", "✓".green().bold(), day.name().bold());
    } else {
        println!("{} {} marked incomplete", "✓".green().bold(), day.name().bold());
    }

    Ok(())
}
