//! Month-scoped summary
//!
//! `MonthlySummary::generate` is a pure function over the full transaction
//! list: no I/O, no error cases. Callers re-run it whenever the list, the
//! reference month, or the budget map changes.

use crate::models::{Money, MonthKey, MonthlyBudgets, Transaction};

/// Summed expenses for one category within the month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub name: String,
    pub total: Money,
}

/// Aggregated view of one month
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    /// The reference month
    pub month: MonthKey,
    /// Transactions dated within the month, in list order
    pub transactions: Vec<Transaction>,
    /// Sum of income amounts in the month
    pub total_income: Money,
    /// Sum of expense amounts in the month
    pub total_expenses: Money,
    /// Income minus expenses; may be negative
    pub balance: Money,
    /// Per-category expense totals, descending by total; ties keep
    /// first-encountered order
    pub expense_totals: Vec<CategoryTotal>,
    /// Budget goal for the month, zero if none was set
    pub budget_goal: Money,
}

impl MonthlySummary {
    /// Aggregate one month out of the full transaction list
    pub fn generate(
        all_transactions: &[Transaction],
        month: MonthKey,
        budgets: &MonthlyBudgets,
    ) -> Self {
        let transactions: Vec<Transaction> = all_transactions
            .iter()
            .filter(|t| month.contains(t.date))
            .cloned()
            .collect();

        let total_income: Money = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();
        let total_expenses: Money = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        // Group in first-encounter order, then stable-sort descending so
        // equal totals keep that order.
        let mut expense_totals: Vec<CategoryTotal> = Vec::new();
        for txn in transactions.iter().filter(|t| t.is_expense()) {
            match expense_totals.iter_mut().find(|c| c.name == txn.category) {
                Some(entry) => entry.total += txn.amount,
                None => expense_totals.push(CategoryTotal {
                    name: txn.category.clone(),
                    total: txn.amount,
                }),
            }
        }
        expense_totals.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            month,
            transactions,
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            expense_totals,
            budget_goal: budgets.goal_for(month),
        }
    }

    /// Share of the budget goal spent, as a percentage capped at 100
    ///
    /// Zero when no goal is set.
    pub fn budget_progress(&self) -> f64 {
        if !self.budget_goal.is_positive() {
            return 0.0;
        }
        let pct = 100.0 * self.total_expenses.cents() as f64 / self.budget_goal.cents() as f64;
        pct.min(100.0)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Summary for {}\n", self.month));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!("Income:   {:>12}\n", self.total_income.to_string()));
        output.push_str(&format!(
            "Expenses: {:>12}\n",
            self.total_expenses.to_string()
        ));
        output.push_str(&format!("Balance:  {:>12}\n", self.balance.to_string()));

        if self.budget_goal.is_positive() {
            output.push_str(&format!(
                "Budget:   {:>12}  ({:.0}% spent)\n",
                self.budget_goal.to_string(),
                self.budget_progress()
            ));
        }

        if !self.transactions.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "{:<10} {:<7} {:>12}  {:<14} {}\n",
                "Date", "Kind", "Amount", "Category", "Id"
            ));
            output.push_str(&"-".repeat(72));
            output.push('\n');
            for txn in &self.transactions {
                output.push_str(&format!(
                    "{:<10} {:<7} {:>12}  {:<14} {}\n",
                    txn.date.format("%Y-%m-%d").to_string(),
                    txn.kind.to_string(),
                    txn.amount.to_string(),
                    txn.category,
                    txn.id
                ));
            }
        }

        if !self.expense_totals.is_empty() {
            output.push_str("\nExpenses by category\n");
            let max = self
                .expense_totals
                .first()
                .map(|c| c.total.cents())
                .unwrap_or(0)
                .max(1);
            for entry in &self.expense_totals {
                let width = (entry.total.cents() * 30 / max).max(1) as usize;
                output.push_str(&format!(
                    "  {:<14} {:>12}  {}\n",
                    entry.name,
                    entry.total.to_string(),
                    "#".repeat(width)
                ));
            }
        }

        output
    }
}
