//! Access PIN commands

use crate::app::AppState;
use crate::cli::PinCommand;
use crate::error::{AppError, Result};

pub async fn handle(state: &AppState, command: PinCommand) -> Result<()> {
    match command {
        PinCommand::Set { pin } => {
            state.pin.set_pin(&pin).await?;
            println!("PIN set.");
            Ok(())
        }

        PinCommand::Verify { pin } => {
            if state.pin.verify_pin(&pin).await? {
                println!("PIN verified.");
                Ok(())
            } else {
                Err(AppError::Generic(
                    "Authentication failed: incorrect PIN".to_string(),
                ))
            }
        }

        PinCommand::Clear => {
            state.pin.clear_pin().await?;
            println!("PIN removed.");
            Ok(())
        }
    }
}
