//! Expense CLI commands

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use super::{parse_amount, parse_date, warn_if_fallback};
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Attachment, ExpenseDraft, ExpenseId, Money};
use crate::reports::ExpenseFilter;
use crate::sync::SyncEngine;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List expenses, optionally filtered
    List {
        /// Category contains (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
        /// Exact date (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Minimum amount
        #[arg(long, value_parser = parse_amount)]
        min: Option<Money>,
        /// Maximum amount
        #[arg(long, value_parser = parse_amount)]
        max: Option<Money>,
        /// Description contains (case-insensitive)
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50")
        #[arg(value_parser = parse_amount)]
        amount: Money,
        /// Category
        category: String,
        /// Description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Mark as recurring
        #[arg(short, long)]
        recurring: bool,
        /// Receipt file to upload
        #[arg(long)]
        receipt: Option<PathBuf>,
    },

    /// Change an existing expense
    Edit {
        /// Expense ID
        id: ExpenseId,
        #[arg(short, long, value_parser = parse_amount)]
        amount: Option<Money>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short = 'm', long)]
        description: Option<String>,
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Set the recurring flag (true/false)
        #[arg(short, long)]
        recurring: Option<bool>,
        /// Replacement receipt file
        #[arg(long)]
        receipt: Option<PathBuf>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: ExpenseId,
    },
}

/// Handle an expense command
pub async fn handle_expense_command(
    engine: &SyncEngine,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SpendwiseResult<()> {
    match cmd {
        ExpenseCommands::List {
            category,
            date,
            min,
            max,
            keyword,
        } => {
            let filter = ExpenseFilter {
                category,
                date,
                min_amount: min,
                max_amount: max,
                keyword,
            };
            let expenses = engine.expenses();
            println!("{}", format_expense_list(filter.apply(&expenses), settings));
        }

        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
            recurring,
            receipt,
        } => {
            let draft = ExpenseDraft {
                amount,
                category,
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                description,
                recurring,
            };
            let receipt = receipt.map(Attachment::from_path).transpose()?;

            let outcome = engine.create_expense(draft, receipt).await;
            warn_if_fallback(&outcome, "Expense added");
            print!("{}", format_expense_details(outcome.value(), settings));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            description,
            date,
            recurring,
            receipt,
        } => {
            let existing = engine
                .store()
                .expenses
                .get(&id)
                .ok_or_else(|| SpendwiseError::expense_not_found(id.to_string()))?;

            let mut draft = ExpenseDraft::from(&existing);
            if let Some(amount) = amount {
                draft.amount = amount;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(date) = date {
                draft.date = date;
            }
            if let Some(recurring) = recurring {
                draft.recurring = recurring;
            }
            let receipt = receipt.map(Attachment::from_path).transpose()?;

            let outcome = engine.update_expense(&id, draft, receipt).await;
            warn_if_fallback(&outcome, "Expense updated");
            print!("{}", format_expense_details(outcome.value(), settings));
        }

        ExpenseCommands::Delete { id } => {
            if !engine.store().expenses.contains(&id) {
                return Err(SpendwiseError::expense_not_found(id.to_string()));
            }

            let outcome = engine.delete_expense(&id).await;
            warn_if_fallback(&outcome, "Expense deleted");
            println!("Deleted expense {}", id);
        }
    }

    Ok(())
}
