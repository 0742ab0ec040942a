//! hf remove - Delete a habit

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Habit id or name
    pub habit: String,
}

pub fn run(ctx: &mut AppContext, args: &RemoveArgs) -> Result<()> {
    super::require_login(ctx)?;

    let removed = match super::resolve_habit_id(ctx, &args.habit) {
        Some(habit_id) => ctx.habits.delete(&habit_id)?,
        None => false,
    };

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": if removed { "ok" } else { "not_found" },
                "habit": args.habit,
                "removed": removed,
            })
        );
    } else if removed {
        println!("{} Removed '{}'", "✓".green().bold(), args.habit.cyan());
    } else {
        println!("{} No habit matched '{}'", "!".yellow(), args.habit.cyan());
    }

    Ok(())
}
