//! hf logout - End the current session

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub fn run(ctx: &mut AppContext, _args: &LogoutArgs) -> Result<()> {
    let was_logged_in = ctx.accounts.current_user().map(str::to_string);

    // Idempotent: logging out while logged out is fine.
    ctx.accounts.end_session()?;
    ctx.sync_partition()?;

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "was_logged_in": was_logged_in.is_some(),
            })
        );
    } else if let Some(phone) = was_logged_in {
        println!("{} Logged out {}", "✓".green().bold(), phone.cyan());
    } else {
        println!("{}", "Not logged in".dimmed());
    }

    Ok(())
}
