//! Sync engine behavior against a scripted remote

mod common;

use std::sync::Arc;

use common::{budget, expense, expense_draft, Op, StubRemote};
use spendwise::models::{Attachment, BudgetDraft, BudgetPatch, ExpenseId, Money};
use spendwise::sync::{default_budgets, default_expenses, SyncEngine, SyncStatus};

fn engine_with(remote: &Arc<StubRemote>) -> SyncEngine {
    SyncEngine::new(remote.clone())
}

#[tokio::test]
async fn test_fetch_all_loads_server_data() {
    let remote = Arc::new(StubRemote::with_data(
        vec![expense(7, 12, "Books", "Novel")],
        vec![budget(9, "Books", 40, 28)],
    ));
    let engine = engine_with(&remote);
    assert_eq!(engine.current_status(), SyncStatus::Idle);

    let outcome = engine.fetch_all().await;
    assert!(outcome.is_synced());
    assert_eq!(outcome.value().expenses, 1);
    assert_eq!(engine.expenses(), remote.server_expenses());
    assert_eq!(engine.budgets(), remote.server_budgets());
    assert_eq!(engine.current_status(), SyncStatus::Ready);
}

#[tokio::test]
async fn test_fetch_all_is_idempotent() {
    let remote = Arc::new(StubRemote::with_data(
        vec![expense(1, 5, "Food", "Snack"), expense(2, 9, "Food", "Dinner")],
        vec![budget(3, "Food", 100, 86)],
    ));
    let engine = engine_with(&remote);

    engine.fetch_all().await;
    let first = (engine.expenses(), engine.budgets());
    engine.fetch_all().await;
    assert_eq!((engine.expenses(), engine.budgets()), first);
}

#[tokio::test]
async fn test_fetch_failure_replaces_both_collections_with_defaults() {
    let remote = Arc::new(StubRemote::with_data(
        vec![expense(7, 12, "Books", "Novel")],
        vec![budget(9, "Books", 40, 28)],
    ));
    // Only the budget list fails; the good expense list must not be kept
    remote.fail(Op::ListBudgets);
    let engine = engine_with(&remote);

    let outcome = engine.fetch_all().await;
    assert!(outcome.is_fallback());
    assert_eq!(engine.expenses(), default_expenses());
    assert_eq!(engine.budgets(), default_budgets());
    assert!(matches!(engine.current_status(), SyncStatus::Degraded(_)));
}

#[tokio::test]
async fn test_fetch_failure_discards_previous_state() {
    let remote = Arc::new(StubRemote::with_data(
        vec![expense(7, 12, "Books", "Novel")],
        vec![budget(9, "Books", 40, 28)],
    ));
    let engine = engine_with(&remote);
    engine.fetch_all().await;
    assert_eq!(engine.budgets(), remote.server_budgets());

    // Only the expense list fails; the good budget list must not be kept
    remote.fail(Op::ListExpenses);
    let outcome = engine.fetch_all().await;
    assert!(outcome.is_fallback());
    assert_eq!(engine.expenses(), default_expenses());
    assert_eq!(engine.budgets(), default_budgets());
}

#[tokio::test]
async fn test_string_ids_from_server_match_typed_ids() {
    let mut novel = expense(0, 12, "Books", "Novel");
    novel.id = serde_json::from_str("\"42\"").unwrap();
    let remote = Arc::new(StubRemote::with_data(vec![novel], vec![]));
    let engine = engine_with(&remote);
    engine.fetch_all().await;

    let typed: ExpenseId = "42".parse().unwrap();
    assert!(engine.store().expenses.contains(&typed));
    assert!(engine.delete_expense(&typed).await.is_synced());
    assert!(engine.expenses().is_empty());
    assert!(remote.server_expenses().is_empty());
}

#[tokio::test]
async fn test_default_dataset() {
    let expenses = default_expenses();
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].category, "Food");
    assert_eq!(expenses[0].amount, Money::from_units(50));
    assert_eq!(expenses[1].description, "Bus fare");

    let budgets = default_budgets();
    assert_eq!(budgets[0].remaining, Money::from_units(150));
    assert_eq!(budgets[1].amount, Money::from_units(100));
}

#[tokio::test]
async fn test_create_expense_uses_server_record() {
    let remote = Arc::new(StubRemote::new());
    let engine = engine_with(&remote);

    let outcome = engine
        .create_expense(expense_draft(20, "Food", "Lunch"), None)
        .await;
    assert!(outcome.is_synced());
    let created = outcome.into_value();
    assert_eq!(created.id, ExpenseId::from(101));
    assert_eq!(engine.store().expenses.get(&created.id), Some(created));
}

#[tokio::test]
async fn test_create_expense_fallback_gets_local_id_and_receipt() {
    let remote = Arc::new(StubRemote::offline());
    let engine = engine_with(&remote);
    let receipt = Attachment::new("lunch.png", "image/png", vec![1, 2, 3]);

    let outcome = engine
        .create_expense(expense_draft(20, "Food", "Lunch"), Some(receipt))
        .await;
    assert!(outcome.is_fallback());
    let created = outcome.value();
    assert!(created.id.is_local());
    assert!(created
        .receipt
        .as_deref()
        .is_some_and(spendwise::models::attachment::is_local_reference));
    assert_eq!(engine.expenses().len(), 1);
}

#[tokio::test]
async fn test_local_ids_are_unique() {
    let remote = Arc::new(StubRemote::offline());
    let engine = engine_with(&remote);

    let a = engine
        .create_expense(expense_draft(1, "A", "a"), None)
        .await
        .into_value();
    let b = engine
        .create_expense(expense_draft(2, "B", "b"), None)
        .await
        .into_value();
    assert_ne!(a.id, b.id);
    assert_eq!(engine.expenses().len(), 2);
}

#[tokio::test]
async fn test_fallback_granularity_is_per_operation() {
    let remote = Arc::new(StubRemote::new());
    remote.fail(Op::CreateExpense);
    let engine = engine_with(&remote);

    let expense = engine
        .create_expense(expense_draft(20, "Food", "Lunch"), None)
        .await;
    assert!(expense.is_fallback());

    let budget = engine
        .create_budget(BudgetDraft {
            category: "Food".into(),
            amount: Money::from_units(200),
        })
        .await;
    assert!(budget.is_synced());
    assert!(!budget.value().id.is_local());
}

#[tokio::test]
async fn test_update_expense_synced_and_fallback() {
    let remote = Arc::new(StubRemote::with_data(
        vec![expense(1, 50, "Food", "Lunch")],
        vec![],
    ));
    let engine = engine_with(&remote);
    engine.fetch_all().await;
    let id = ExpenseId::from(1);

    let outcome = engine
        .update_expense(&id, expense_draft(55, "Food", "Big lunch"), None)
        .await;
    assert!(outcome.is_synced());
    assert_eq!(
        engine.store().expenses.get(&id).unwrap().description,
        "Big lunch"
    );

    remote.fail(Op::UpdateExpense);
    let outcome = engine
        .update_expense(&id, expense_draft(60, "Food", "Bigger lunch"), None)
        .await;
    assert!(outcome.is_fallback());
    let stored = engine.store().expenses.get(&id).unwrap();
    assert_eq!(stored.amount, Money::from_units(60));
    assert_eq!(stored.description, "Bigger lunch");
    // The server never saw the second change
    assert_eq!(remote.server_expenses()[0].description, "Big lunch");
}

#[tokio::test]
async fn test_update_fallback_keeps_existing_receipt() {
    let mut with_receipt = expense(1, 50, "Food", "Lunch");
    with_receipt.receipt = Some("/uploads/lunch.png".into());
    let remote = Arc::new(StubRemote::with_data(vec![with_receipt], vec![]));
    let engine = engine_with(&remote);
    engine.fetch_all().await;

    remote.fail(Op::UpdateExpense);
    let id = ExpenseId::from(1);
    let updated = engine
        .update_expense(&id, expense_draft(51, "Food", "Lunch"), None)
        .await
        .into_value();
    assert_eq!(updated.receipt.as_deref(), Some("/uploads/lunch.png"));
}

#[tokio::test]
async fn test_delete_removes_locally_on_both_paths() {
    let remote = Arc::new(StubRemote::with_data(
        vec![expense(1, 5, "Food", "Snack"), expense(2, 9, "Food", "Dinner")],
        vec![budget(3, "Food", 100, 86)],
    ));
    let engine = engine_with(&remote);
    engine.fetch_all().await;

    assert!(engine.delete_expense(&ExpenseId::from(1)).await.is_synced());
    assert_eq!(remote.server_expenses().len(), 1);

    remote.fail_all();
    assert!(engine.delete_expense(&ExpenseId::from(2)).await.is_fallback());
    assert!(engine.expenses().is_empty());
    assert_eq!(remote.server_expenses().len(), 1);

    let budget_id = engine.budgets()[0].id.clone();
    assert!(engine.delete_budget(&budget_id).await.is_fallback());
    assert!(engine.budgets().is_empty());
}

#[tokio::test]
async fn test_budget_create_fallback_sets_remaining_to_amount() {
    let remote = Arc::new(StubRemote::offline());
    let engine = engine_with(&remote);

    let budget = engine
        .create_budget(BudgetDraft {
            category: "Fun".into(),
            amount: Money::from_units(75),
        })
        .await
        .into_value();
    assert!(budget.id.is_local());
    assert_eq!(budget.remaining, Money::from_units(75));
}

#[tokio::test]
async fn test_budget_update_fallback_merges_patch() {
    let remote = Arc::new(StubRemote::with_data(vec![], vec![budget(1, "Food", 200, 150)]));
    let engine = engine_with(&remote);
    engine.fetch_all().await;
    remote.fail(Op::UpdateBudget);

    let id = engine.budgets()[0].id.clone();
    let updated = engine
        .update_budget(
            &id,
            BudgetPatch {
                remaining: Some(Money::from_units(20)),
                ..BudgetPatch::default()
            },
        )
        .await
        .into_value();
    assert_eq!(updated.category, "Food");
    assert_eq!(updated.amount, Money::from_units(200));
    assert_eq!(updated.remaining, Money::from_units(20));
    assert_eq!(engine.store().budgets.get(&id), Some(updated));
}

#[tokio::test]
async fn test_recovery_after_outage() {
    let remote = Arc::new(StubRemote::offline());
    let engine = engine_with(&remote);
    engine.fetch_all().await;
    assert!(matches!(engine.current_status(), SyncStatus::Degraded(_)));

    remote.recover();
    let outcome = engine.fetch_all().await;
    assert!(outcome.is_synced());
    assert!(engine.expenses().is_empty());
    assert_eq!(engine.current_status(), SyncStatus::Ready);
}

#[tokio::test]
async fn test_each_operation_tries_remote_once() {
    let remote = Arc::new(StubRemote::offline());
    let engine = engine_with(&remote);

    engine
        .create_expense(expense_draft(1, "A", "a"), None)
        .await;
    assert_eq!(remote.calls(), vec![Op::CreateExpense]);
}
