//! hf add - Create a habit
//!
//! Categories are free text; the usual set is Health, Fitness, Learning,
//! Productivity, Mindfulness and Other, but nothing enforces membership.

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Habit name
    pub name: String,

    /// Category (e.g. Health, Fitness, Learning, Productivity, Mindfulness, Other)
    #[arg(short, long, default_value = "Other")]
    pub category: String,

    /// Display color token
    #[arg(long, default_value = "teal")]
    pub color: String,
}

pub fn run(ctx: &mut AppContext, args: &AddArgs) -> Result<()> {
    super::require_login(ctx)?;

    let habit = ctx
        .habits
        .create(&args.name, &args.category, &args.color)?;

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "id": habit.id,
                "name": habit.name,
                "category": habit.category,
                "color": habit.color,
            })
        );
    } else {
        println!(
            "{} Added '{}' ({})",
            "✓".green().bold(),
            habit.name.cyan(),
            habit.category.dimmed()
        );
    }

    Ok(())
}
