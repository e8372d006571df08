//! Menu-driven expense tracker.

use std::io::Write;

use pocketbook_core::{Clock, CoreError, RecordService, RecordStorage, SummaryService};
use pocketbook_domain::{Expense, DATE_FORMAT};
use pocketbook_storage_json::ExpenseStorage;

use crate::cli::core::{LoopControl, ShellEnv};
use crate::cli::forms::{self, prompt_until};
use crate::cli::io::LineSource;
use crate::cli::output::{format_amount, Output};
use crate::cli::system_clock::SystemClock;
use crate::errors::Result;
use crate::utils::build_info;

const CHOICE_PROMPT: &str = "Enter your choice: ";
const NO_EXPENSES: &str = "No expenses found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseMenuChoice {
    Add,
    Summary,
    OverTime,
    Exit,
}

impl ExpenseMenuChoice {
    const ENTRIES: [(&'static str, &'static str, ExpenseMenuChoice); 4] = [
        ("1", "Add Expense", ExpenseMenuChoice::Add),
        ("2", "View Summary", ExpenseMenuChoice::Summary),
        ("3", "View Spending Over Time", ExpenseMenuChoice::OverTime),
        ("4", "Exit", ExpenseMenuChoice::Exit),
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim();
        Self::ENTRIES
            .iter()
            .find(|(number, _, _)| *number == key)
            .map(|(_, _, choice)| *choice)
    }
}

/// Owns the live expense collection and threads it through core operations.
pub struct ExpenseShell<S, C> {
    storage: S,
    clock: C,
    currency: String,
    expenses: Vec<Expense>,
}

impl<S, C> ExpenseShell<S, C>
where
    S: RecordStorage<Expense>,
    C: Clock,
{
    /// Loads the stored collection. A corrupt store is fatal.
    pub fn load(storage: S, clock: C, currency: impl Into<String>) -> Result<Self> {
        let expenses = storage.load()?;
        tracing::info!(count = expenses.len(), "loaded expenses");
        Ok(Self {
            storage,
            clock,
            currency: currency.into(),
            expenses,
        })
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn run<W: Write>(&mut self, input: &mut dyn LineSource, out: &mut Output<W>) -> Result<()> {
        loop {
            self.print_menu(out)?;
            let Some(raw) = input.read_line(CHOICE_PROMPT)? else {
                tracing::debug!("input exhausted, leaving expense shell");
                return Ok(());
            };
            let control = match ExpenseMenuChoice::parse(&raw) {
                Some(choice) => {
                    tracing::debug!(?choice, "dispatching menu choice");
                    self.dispatch(choice, input, out)?
                }
                None => {
                    out.warning("Invalid choice! Please try again.")?;
                    LoopControl::Continue
                }
            };
            if control == LoopControl::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch<W: Write>(
        &mut self,
        choice: ExpenseMenuChoice,
        input: &mut dyn LineSource,
        out: &mut Output<W>,
    ) -> Result<LoopControl> {
        match choice {
            ExpenseMenuChoice::Add => self.add_expense(input, out),
            ExpenseMenuChoice::Summary => {
                self.view_summary(out)?;
                Ok(LoopControl::Continue)
            }
            ExpenseMenuChoice::OverTime => {
                self.view_spending_over_time(out)?;
                Ok(LoopControl::Continue)
            }
            ExpenseMenuChoice::Exit => {
                out.info("Exiting program. Goodbye!")?;
                Ok(LoopControl::Exit)
            }
        }
    }

    fn print_menu<W: Write>(&self, out: &mut Output<W>) -> Result<()> {
        out.section("Personal Expense Tracker")?;
        for (number, label, _) in ExpenseMenuChoice::ENTRIES {
            out.line(format!("{number}. {label}"))?;
        }
        Ok(())
    }

    fn add_expense<W: Write>(
        &mut self,
        input: &mut dyn LineSource,
        out: &mut Output<W>,
    ) -> Result<LoopControl> {
        let Some(amount) = prompt_until(input, out, "Enter amount: ", forms::parse_amount)? else {
            return Ok(LoopControl::Exit);
        };
        let Some(category) = prompt_until(
            input,
            out,
            "Enter category (Food, Transport, etc.): ",
            forms::parse_category,
        )?
        else {
            return Ok(LoopControl::Exit);
        };
        let Some(use_today) =
            prompt_until(input, out, "Use today's date? (y/n): ", forms::parse_yes_no)?
        else {
            return Ok(LoopControl::Exit);
        };
        let date = if use_today {
            self.clock.today()
        } else {
            match prompt_until(input, out, "Enter date (YYYY-MM-DD): ", forms::parse_date)? {
                Some(date) => date,
                None => return Ok(LoopControl::Exit),
            }
        };

        let expense = match Expense::new(amount, category, date) {
            Ok(expense) => expense,
            Err(err) => {
                out.error(format!("Expense rejected: {err}"))?;
                return Ok(LoopControl::Continue);
            }
        };
        self.expenses = RecordService::append(std::mem::take(&mut self.expenses), expense);
        match self.persist() {
            Ok(()) => out.success("Expense added successfully!")?,
            Err(err) => out.error(format!("Expense kept in memory but not saved: {err}"))?,
        }
        Ok(LoopControl::Continue)
    }

    fn view_summary<W: Write>(&self, out: &mut Output<W>) -> Result<()> {
        let Some(summary) = SummaryService::summarize(&self.expenses) else {
            out.info(NO_EXPENSES)?;
            return Ok(());
        };
        out.section("Expense Summary")?;
        out.line(format!(
            "Total Overall Spending: {}",
            format_amount(&self.currency, summary.total)
        ))?;
        out.blank_line()?;
        out.line("Category-wise Spending:")?;
        for (category, amount) in &summary.by_category {
            out.line(format!("{category}: {}", format_amount(&self.currency, *amount)))?;
        }
        Ok(())
    }

    fn view_spending_over_time<W: Write>(&self, out: &mut Output<W>) -> Result<()> {
        let totals = SummaryService::by_date(&self.expenses);
        if totals.is_empty() {
            out.info(NO_EXPENSES)?;
            return Ok(());
        }
        out.section("Spending Over Time")?;
        for entry in totals {
            out.line(format!(
                "{}: {}",
                entry.date.format(DATE_FORMAT),
                format_amount(&self.currency, entry.amount)
            ))?;
        }
        Ok(())
    }

    fn persist(&self) -> std::result::Result<(), CoreError> {
        if let Err(err) = self.storage.save(&self.expenses) {
            tracing::warn!(%err, "failed to save expenses");
            return Err(err);
        }
        tracing::info!(count = self.expenses.len(), "saved expenses");
        Ok(())
    }
}

/// Entry point for the `expense_tracker` binary.
pub fn run_expense_tracker() -> Result<()> {
    let env = ShellEnv::from_env()?;
    let storage = ExpenseStorage::new(env.config.expenses_path());
    tracing::info!(path = %storage.path().display(), "opening expense store");

    let mut shell = ExpenseShell::load(storage, SystemClock, env.config.currency_symbol.clone())?;
    let mut input = env.line_source()?;
    let mut out = env.output();
    out.banner("Pocketbook expense tracker", &build_info::current())?;
    shell.run(input.as_mut(), &mut out)
}
