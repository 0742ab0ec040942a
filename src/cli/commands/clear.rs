//! hf clear - Remove every habit of the current user

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ClearArgs {}

pub fn run(ctx: &mut AppContext, _args: &ClearArgs) -> Result<()> {
    super::require_login(ctx)?;
    let count = ctx.habits.habits().len();

    // Safe to call on an empty list; the guard is just for the message.
    if count == 0 {
        if ctx.robot_mode {
            println!(
                "{}",
                serde_json::json!({ "status": "ok", "cleared": 0 })
            );
        } else {
            println!("{}", "Nothing to clear".dimmed());
        }
        return Ok(());
    }

    ctx.habits.clear_all()?;

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({ "status": "ok", "cleared": count })
        );
    } else {
        println!(
            "{} Cleared {} habit{}",
            "✓".green().bold(),
            count.to_string().bold(),
            if count == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
