//! hf login - Authenticate or create an account
//!
//! There is no separate signup: an unseen phone number registers an
//! account on the spot. Format rules (10-digit phone, 4-digit password)
//! are enforced here, at the boundary, not in the core.

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::core::LoginOutcome;
use crate::error::{HfError, Result};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Phone number (exactly 10 digits)
    pub phone: String,

    /// Password (exactly 4 digits)
    pub password: String,
}

pub fn run(ctx: &mut AppContext, args: &LoginArgs) -> Result<()> {
    validate_phone(&args.phone)?;
    validate_password(&args.password)?;

    let outcome = ctx.accounts.authenticate(&args.phone, &args.password)?;
    ctx.sync_partition()?;

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "outcome": match outcome {
                    LoginOutcome::LoggedIn => "logged_in",
                    LoginOutcome::AccountCreated => "account_created",
                },
                "phone": args.phone,
            })
        );
    } else {
        println!(
            "{} {}",
            "✓".green().bold(),
            outcome.message()
        );
        if outcome == LoginOutcome::AccountCreated {
            println!();
            println!("{}", "Add your first habit with: hf add <name>".dimmed());
        }
    }

    Ok(())
}

fn validate_phone(phone: &str) -> Result<()> {
    if phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(HfError::Validation(
            "phone number must be exactly 10 digits".to_string(),
        ))
    }
}

fn validate_password(password: &str) -> Result<()> {
    if password.len() == 4 && password.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(HfError::Validation(
            "password must be exactly 4 digits".to_string(),
        ))
    }
}
