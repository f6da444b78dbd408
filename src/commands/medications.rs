//! Medication management commands

use crate::app::AppState;
use crate::cli::MedsCommand;
use crate::error::Result;
use crate::storage::SaveMedicationRequest;

pub async fn handle(state: &AppState, command: MedsCommand) -> Result<()> {
    match command {
        MedsCommand::Add {
            name,
            dosage,
            color,
            id,
        } => {
            let med = state
                .repository
                .save_medication(SaveMedicationRequest {
                    id,
                    name,
                    dosage,
                    color,
                })
                .await?;

            println!("Saved medication {} ({})", med.name, med.id);
            Ok(())
        }

        MedsCommand::List => {
            let mut meds = state.repository.get_medications().await?;

            if meds.is_empty() {
                println!("No medications stored.");
                return Ok(());
            }

            meds.sort_by(|a, b| a.name.cmp(&b.name));
            for med in &meds {
                if med.dosage.is_empty() {
                    println!("{}  {}", med.id, med.name);
                } else {
                    println!("{}  {} ({})", med.id, med.name, med.dosage);
                }
            }
            Ok(())
        }

        MedsCommand::Remove { id } => {
            state.repository.delete_medication(&id).await?;
            println!("Removed medication {}", id);
            Ok(())
        }
    }
}
