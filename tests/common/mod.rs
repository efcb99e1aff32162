//! Shared test fixtures: a scriptable in-memory remote service

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use spendwise::models::{
    Attachment, Budget, BudgetDraft, BudgetId, BudgetPatch, Expense, ExpenseDraft, ExpenseId,
    Money,
};
use spendwise::remote::{RemoteClient, RemoteError, RemoteResult};

/// Remote operations that can be told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    ListExpenses,
    CreateExpense,
    UpdateExpense,
    DeleteExpense,
    ListBudgets,
    CreateBudget,
    UpdateBudget,
    DeleteBudget,
}

#[derive(Default)]
struct State {
    failing: HashSet<Op>,
    expenses: Vec<Expense>,
    budgets: Vec<Budget>,
    next_id: i64,
    calls: Vec<Op>,
}

/// Behaves like the real service until an operation is switched off
#[derive(Default)]
pub struct StubRemote {
    state: Mutex<State>,
}

impl StubRemote {
    pub fn new() -> Self {
        let remote = Self::default();
        remote.state.lock().unwrap().next_id = 100;
        remote
    }

    /// A remote where every call fails
    pub fn offline() -> Self {
        let remote = Self::new();
        remote.fail_all();
        remote
    }

    pub fn with_data(expenses: Vec<Expense>, budgets: Vec<Budget>) -> Self {
        let remote = Self::new();
        {
            let mut state = remote.state.lock().unwrap();
            state.expenses = expenses;
            state.budgets = budgets;
        }
        remote
    }

    pub fn fail(&self, op: Op) {
        self.state.lock().unwrap().failing.insert(op);
    }

    pub fn fail_all(&self) {
        let mut state = self.state.lock().unwrap();
        for op in [
            Op::ListExpenses,
            Op::CreateExpense,
            Op::UpdateExpense,
            Op::DeleteExpense,
            Op::ListBudgets,
            Op::CreateBudget,
            Op::UpdateBudget,
            Op::DeleteBudget,
        ] {
            state.failing.insert(op);
        }
    }

    pub fn recover(&self) {
        self.state.lock().unwrap().failing.clear();
    }

    pub fn calls(&self) -> Vec<Op> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn server_expenses(&self) -> Vec<Expense> {
        self.state.lock().unwrap().expenses.clone()
    }

    pub fn server_budgets(&self) -> Vec<Budget> {
        self.state.lock().unwrap().budgets.clone()
    }

    fn begin(&self, op: Op) -> RemoteResult<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(op);
        if state.failing.contains(&op) {
            return Err(RemoteError::Transport("connection refused".into()));
        }
        Ok(state)
    }
}

#[async_trait]
impl RemoteClient for StubRemote {
    async fn list_expenses(&self) -> RemoteResult<Vec<Expense>> {
        Ok(self.begin(Op::ListExpenses)?.expenses.clone())
    }

    async fn create_expense(
        &self,
        draft: &ExpenseDraft,
        receipt: Option<&Attachment>,
    ) -> RemoteResult<Expense> {
        let mut state = self.begin(Op::CreateExpense)?;
        state.next_id += 1;
        let receipt = receipt.map(|r| format!("/uploads/{}", r.file_name));
        let expense = Expense::from_draft(ExpenseId::from(state.next_id), draft, receipt);
        state.expenses.push(expense.clone());
        Ok(expense)
    }

    async fn update_expense(
        &self,
        id: &ExpenseId,
        draft: &ExpenseDraft,
        receipt: Option<&Attachment>,
    ) -> RemoteResult<Expense> {
        let mut state = self.begin(Op::UpdateExpense)?;
        let existing = state
            .expenses
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| RemoteError::status(404, "not found"))?;
        let receipt = receipt.map(|r| format!("/uploads/{}", r.file_name));
        *existing = existing.merged_with(draft, receipt);
        Ok(existing.clone())
    }

    async fn delete_expense(&self, id: &ExpenseId) -> RemoteResult<()> {
        let mut state = self.begin(Op::DeleteExpense)?;
        state.expenses.retain(|e| &e.id != id);
        Ok(())
    }

    async fn list_budgets(&self) -> RemoteResult<Vec<Budget>> {
        Ok(self.begin(Op::ListBudgets)?.budgets.clone())
    }

    async fn create_budget(&self, draft: &BudgetDraft) -> RemoteResult<Budget> {
        let mut state = self.begin(Op::CreateBudget)?;
        state.next_id += 1;
        let budget = Budget::from_draft(BudgetId::from(state.next_id), draft);
        state.budgets.push(budget.clone());
        Ok(budget)
    }

    async fn update_budget(&self, id: &BudgetId, patch: &BudgetPatch) -> RemoteResult<Budget> {
        let mut state = self.begin(Op::UpdateBudget)?;
        let existing = state
            .budgets
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| RemoteError::status(404, "not found"))?;
        *existing = existing.merged_with(patch);
        Ok(existing.clone())
    }

    async fn delete_budget(&self, id: &BudgetId) -> RemoteResult<()> {
        let mut state = self.begin(Op::DeleteBudget)?;
        state.budgets.retain(|b| &b.id != id);
        Ok(())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn expense_draft(amount: i64, category: &str, description: &str) -> ExpenseDraft {
    ExpenseDraft {
        amount: Money::from_units(amount),
        category: category.into(),
        date: date(2025, 3, 13),
        description: description.into(),
        recurring: false,
    }
}

pub fn expense(id: i64, amount: i64, category: &str, description: &str) -> Expense {
    Expense::from_draft(
        ExpenseId::from(id),
        &expense_draft(amount, category, description),
        None,
    )
}

pub fn budget(id: i64, category: &str, amount: i64, remaining: i64) -> Budget {
    Budget {
        id: BudgetId::from(id),
        category: category.into(),
        amount: Money::from_units(amount),
        remaining: Money::from_units(remaining),
    }
}
