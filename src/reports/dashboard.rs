//! Dashboard summary
//!
//! Runs the single synchronous pass behind a dashboard view: filter the
//! snapshot, then derive every number and series a renderer needs. The
//! summary is plain data; charts and tables are consumers of it.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::analysis::{
    budget_vs_actual, daily_average_expense, filter_records, forecast_next_month, group_sum,
    opening_balance, running_balance, top_n, totals, BalancePoint, Forecast, Totals,
};
use crate::loader::LoadOutcome;
use crate::models::{BudgetEntry, BudgetLine, Money, MonthKey, TransactionRecord, TxnKind};

/// How many expense categories the ranking keeps
const TOP_CATEGORIES: usize = 5;

/// One category's share of a kind's total (donut chart data)
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total: Money,
    /// Share of the kind's overall total, in percent
    pub percentage: f64,
}

/// Everything a dashboard view renders, computed in one pass
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    /// Start of the visible window (inclusive)
    pub start_date: NaiveDate,
    /// End of the visible window (inclusive)
    pub end_date: NaiveDate,
    /// Records inside the window after category filtering
    pub transaction_count: usize,
    /// Income/expense/balance over the window
    pub totals: Totals,
    /// Average expense per day over the window
    pub daily_average: Money,
    /// Balance carried into the window from the full ledger
    pub opening_balance: Money,
    /// Cumulative balance series in date order (line chart)
    pub cashflow: Vec<BalancePoint>,
    /// Expense totals per category with shares (donut chart)
    pub expense_by_category: Vec<CategoryShare>,
    /// Income totals per category with shares (donut chart)
    pub income_by_category: Vec<CategoryShare>,
    /// Largest expense categories, descending (bar chart)
    pub top_expense_categories: Vec<(String, Money)>,
    /// Expense totals per day (heatmap)
    pub daily_expense: Vec<(NaiveDate, Money)>,
    /// Expense totals per month, chronological (forecast input)
    pub monthly_expense: Vec<(MonthKey, Money)>,
    /// Next-month projection from the monthly totals
    pub forecast: Forecast,
    /// Budget-vs-actual comparison over the window
    pub budget_lines: Vec<BudgetLine>,
    /// Rows the loader dropped, surfaced for data-quality reporting
    pub rejected_rows: usize,
}

impl DashboardSummary {
    /// Compute the full summary from a loaded snapshot
    ///
    /// The opening balance is taken from the unfiltered ledger so a
    /// truncated window still shows correct absolute balances.
    pub fn generate(
        outcome: &LoadOutcome,
        start: NaiveDate,
        end: NaiveDate,
        categories: Option<&HashSet<String>>,
        budgets: &[BudgetEntry],
    ) -> Self {
        let filtered = filter_records(&outcome.records, start, end, categories);

        let summary_totals = totals(&filtered);
        let daily_average = daily_average_expense(&filtered, start, end);

        let opening = opening_balance(&outcome.records, start);
        let cashflow = running_balance(&filtered, opening);

        let expenses: Vec<TransactionRecord> = filtered
            .iter()
            .filter(|r| r.kind == TxnKind::Expense)
            .cloned()
            .collect();
        let incomes: Vec<TransactionRecord> = filtered
            .iter()
            .filter(|r| r.kind == TxnKind::Income)
            .cloned()
            .collect();

        let expense_groups = group_sum(&expenses, |r| r.category.clone());
        let income_groups = group_sum(&incomes, |r| r.category.clone());

        let expense_by_category = shares(&expense_groups, summary_totals.expense);
        let income_by_category = shares(&income_groups, summary_totals.income);
        let top_expense_categories = top_n(&expense_groups, TOP_CATEGORIES);

        let daily_expense = group_sum(&expenses, |r| r.date);

        let mut monthly_expense = group_sum(&expenses, |r| MonthKey::from_date(r.date));
        monthly_expense.sort_by_key(|(month, _)| *month);
        let monthly_totals: Vec<Money> = monthly_expense.iter().map(|(_, m)| *m).collect();
        let forecast = forecast_next_month(&monthly_totals);

        let budget_lines = budget_vs_actual(&filtered, budgets);

        Self {
            start_date: start,
            end_date: end,
            transaction_count: filtered.len(),
            totals: summary_totals,
            daily_average,
            opening_balance: opening,
            cashflow,
            expense_by_category,
            income_by_category,
            top_expense_categories,
            daily_expense,
            monthly_expense,
            forecast,
            budget_lines,
            rejected_rows: outcome.rejected.len(),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Ledger summary: {} to {}\n",
            self.start_date, self.end_date
        ));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!("Income:            {}\n", self.totals.income));
        output.push_str(&format!("Expenses:          {}\n", self.totals.expense));
        output.push_str(&format!("Balance:           {}\n", self.totals.balance));
        output.push_str(&format!("Transactions:      {}\n", self.transaction_count));
        output.push_str(&format!("Avg expense/day:   {}\n", self.daily_average));

        match self.forecast {
            Forecast::Projected(amount) => {
                output.push_str(&format!("Next-month est.:   {}\n", amount));
            }
            Forecast::InsufficientHistory => {
                output.push_str("Next-month est.:   insufficient history\n");
            }
        }

        if !self.top_expense_categories.is_empty() {
            output.push('\n');
            output.push_str("Top expense categories\n");
            output.push_str(&"-".repeat(72));
            output.push('\n');
            for (category, total) in &self.top_expense_categories {
                output.push_str(&format!("  {:<40} {:>12}\n", category, total.to_string()));
            }
        }

        if !self.budget_lines.is_empty() {
            output.push('\n');
            output.push_str("Budgets\n");
            output.push_str(&"-".repeat(72));
            output.push('\n');
            for line in &self.budget_lines {
                output.push_str(&format!(
                    "  {:<24} {:>12} / {:>12} {:>7.1}%  {}\n",
                    line.entry.key,
                    line.actual.to_string(),
                    line.entry.monthly_limit.to_string(),
                    line.percentage,
                    line.band
                ));
            }
        }

        if self.rejected_rows > 0 {
            output.push('\n');
            output.push_str(&format!(
                "Note: {} malformed row(s) were excluded during load\n",
                self.rejected_rows
            ));
        }

        output
    }
}

/// Attach percentage shares of `kind_total` to grouped category totals
fn shares(grouped: &[(String, Money)], kind_total: Money) -> Vec<CategoryShare> {
    grouped
        .iter()
        .map(|(category, total)| {
            let percentage = if kind_total.is_zero() {
                0.0
            } else {
                total.cents() as f64 / kind_total.cents() as f64 * 100.0
            };
            CategoryShare {
                category: category.clone(),
                total: *total,
                percentage,
            }
        })
        .collect()
}
