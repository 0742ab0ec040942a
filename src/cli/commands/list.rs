//! hf list - Habit list with week grid and streaks

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::core::{Day, Habit};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show habit ids
    #[arg(long)]
    pub ids: bool,
}

pub fn run(ctx: &mut AppContext, args: &ListArgs) -> Result<()> {
    super::require_login(ctx)?;
    let habits = ctx.habits.habits();

    if ctx.robot_mode {
        let output: Vec<serde_json::Value> = habits
            .iter()
            .map(|h| {
                serde_json::json!({
                    "id": h.id,
                    "name": h.name,
                    "category": h.category,
                    "color": h.color,
                    "days": h.days,
                    "streak": h.streak(),
                })
            })
            .collect();

        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "count": habits.len(),
                "habits": output,
            })
        );
        return Ok(());
    }

    if habits.is_empty() {
        println!("{}", "No habits yet".dimmed());
        println!();
        println!("Add one with:");
        println!("  hf add <name>");
        return Ok(());
    }

    println!(
        "{:24} {:14} {:16} {}",
        "HABIT".bold(),
        "CATEGORY".bold(),
        "M T W T F S S".bold(),
        "STREAK".bold()
    );
    println!("{}", "─".repeat(64).dimmed());

    for habit in habits {
        println!(
            "{:24} {:14} {:16} {}",
            habit.name.cyan(),
            habit.category.dimmed(),
            week_grid(habit),
            streak_cell(habit.streak())
        );
        if args.ids {
            println!("  {}", habit.id.dimmed());
        }
    }

    Ok(())
}

fn week_grid(habit: &Habit) -> String {
    Day::ALL
        .iter()
        .map(|d| if habit.completed(*d) { "✓" } else { "·" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn streak_cell(streak: u32) -> String {
    if streak == 0 {
        "0".dimmed().to_string()
    } else {
        format!("{streak} 🔥")
    }
}
