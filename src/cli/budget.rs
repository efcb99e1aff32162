//! Budget CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_money, warn_if_fallback};
use crate::config::Settings;
use crate::display::{format_budget_details, format_budget_list};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{BudgetDraft, BudgetId, BudgetPatch, Money};
use crate::sync::SyncEngine;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List budgets with spending status
    List,

    /// Create a budget for a category
    Add {
        /// Category
        category: String,
        /// Amount (e.g., "200" or "200.00")
        #[arg(value_parser = parse_amount)]
        amount: Money,
    },

    /// Change an existing budget
    Edit {
        /// Budget ID
        id: BudgetId,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long, value_parser = parse_amount)]
        amount: Option<Money>,
        /// Remaining amount (may be negative)
        #[arg(short, long, value_parser = parse_money, allow_hyphen_values = true)]
        remaining: Option<Money>,
    },

    /// Delete a budget
    Delete {
        /// Budget ID
        id: BudgetId,
    },
}

/// Handle a budget command
pub async fn handle_budget_command(
    engine: &SyncEngine,
    settings: &Settings,
    cmd: BudgetCommands,
) -> SpendwiseResult<()> {
    match cmd {
        BudgetCommands::List => {
            println!("{}", format_budget_list(&engine.budgets(), settings));
        }

        BudgetCommands::Add { category, amount } => {
            let outcome = engine
                .create_budget(BudgetDraft { category, amount })
                .await;
            warn_if_fallback(&outcome, "Budget added");
            print!("{}", format_budget_details(outcome.value(), settings));
        }

        BudgetCommands::Edit {
            id,
            category,
            amount,
            remaining,
        } => {
            let patch = BudgetPatch {
                category,
                amount,
                remaining,
            };
            if patch.is_empty() {
                return Err(SpendwiseError::Validation(
                    "Nothing to change: pass --category, --amount or --remaining".into(),
                ));
            }
            if !engine.store().budgets.contains(&id) {
                return Err(SpendwiseError::budget_not_found(id.to_string()));
            }

            let outcome = engine.update_budget(&id, patch).await;
            warn_if_fallback(&outcome, "Budget updated");
            print!("{}", format_budget_details(outcome.value(), settings));
        }

        BudgetCommands::Delete { id } => {
            if !engine.store().budgets.contains(&id) {
                return Err(SpendwiseError::budget_not_found(id.to_string()));
            }

            let outcome = engine.delete_budget(&id).await;
            warn_if_fallback(&outcome, "Budget deleted");
            println!("Deleted budget {}", id);
        }
    }

    Ok(())
}
