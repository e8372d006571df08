//! Menu-driven to-do list.

use std::io::Write;

use pocketbook_core::{CoreError, RecordService, RecordStorage, TaskService};
use pocketbook_domain::Task;
use pocketbook_storage_json::TaskStorage;

use crate::cli::core::{LoopControl, ShellEnv};
use crate::cli::forms::{self, InputError};
use crate::cli::io::LineSource;
use crate::cli::output::Output;
use crate::errors::Result;
use crate::utils::build_info;

const CHOICE_PROMPT: &str = "Choose an option (1-5): ";
const INVALID_NUMBER: &str = "Invalid task number!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoMenuChoice {
    Add,
    View,
    Complete,
    Delete,
    Exit,
}

impl TodoMenuChoice {
    const ENTRIES: [(&'static str, &'static str, TodoMenuChoice); 5] = [
        ("1", "Add Task", TodoMenuChoice::Add),
        ("2", "View Tasks", TodoMenuChoice::View),
        ("3", "Mark Task Completed", TodoMenuChoice::Complete),
        ("4", "Delete Task", TodoMenuChoice::Delete),
        ("5", "Exit", TodoMenuChoice::Exit),
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim();
        Self::ENTRIES
            .iter()
            .find(|(number, _, _)| *number == key)
            .map(|(_, _, choice)| *choice)
    }
}

/// Owns the live task list. Every mutation is written through to storage.
pub struct TodoShell<S> {
    storage: S,
    tasks: Vec<Task>,
}

impl<S> TodoShell<S>
where
    S: RecordStorage<Task>,
{
    pub fn load(storage: S) -> Result<Self> {
        let tasks = storage.load()?;
        tracing::info!(count = tasks.len(), "loaded tasks");
        Ok(Self { storage, tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Runs the menu loop. The list is saved once more on exit or end of input.
    pub fn run<W: Write>(&mut self, input: &mut dyn LineSource, out: &mut Output<W>) -> Result<()> {
        loop {
            self.print_menu(out)?;
            let Some(raw) = input.read_line(CHOICE_PROMPT)? else {
                tracing::debug!("input exhausted, leaving todo shell");
                break;
            };
            let control = match TodoMenuChoice::parse(&raw) {
                Some(choice) => {
                    tracing::debug!(?choice, "dispatching menu choice");
                    self.dispatch(choice, input, out)?
                }
                None => {
                    out.warning("Invalid choice! Try again.")?;
                    LoopControl::Continue
                }
            };
            if control == LoopControl::Exit {
                break;
            }
        }
        self.persist()?;
        out.success("Tasks saved. Exiting application.")?;
        Ok(())
    }

    fn dispatch<W: Write>(
        &mut self,
        choice: TodoMenuChoice,
        input: &mut dyn LineSource,
        out: &mut Output<W>,
    ) -> Result<LoopControl> {
        match choice {
            TodoMenuChoice::Add => self.add_task(input, out),
            TodoMenuChoice::View => {
                self.view_tasks(out)?;
                Ok(LoopControl::Continue)
            }
            TodoMenuChoice::Complete => self.complete_task(input, out),
            TodoMenuChoice::Delete => self.delete_task(input, out),
            TodoMenuChoice::Exit => Ok(LoopControl::Exit),
        }
    }

    fn print_menu<W: Write>(&self, out: &mut Output<W>) -> Result<()> {
        out.section("TO-DO LIST MENU")?;
        for (number, label, _) in TodoMenuChoice::ENTRIES {
            out.line(format!("{number}. {label}"))?;
        }
        Ok(())
    }

    fn add_task<W: Write>(
        &mut self,
        input: &mut dyn LineSource,
        out: &mut Output<W>,
    ) -> Result<LoopControl> {
        let Some(title) = input.read_line("Enter task title: ")? else {
            return Ok(LoopControl::Exit);
        };
        let Some(description) = input.read_line("Enter task description: ")? else {
            return Ok(LoopControl::Exit);
        };
        let Some(category) = input.read_line("Enter task category (Work/Personal/Urgent): ")?
        else {
            return Ok(LoopControl::Exit);
        };

        let task = Task::new(title.trim(), description.trim(), category.trim());
        self.tasks = RecordService::append(std::mem::take(&mut self.tasks), task);
        self.report_saved(out, "Task added successfully!")?;
        Ok(LoopControl::Continue)
    }

    fn view_tasks<W: Write>(&self, out: &mut Output<W>) -> Result<()> {
        if self.tasks.is_empty() {
            out.info("No tasks available.")?;
            return Ok(());
        }
        out.section("Your Tasks")?;
        for (index, task) in self.tasks.iter().enumerate() {
            let marker = if task.completed { "✔" } else { "✘" };
            out.line(format!("{}. {}", index + 1, task.title))?;
            out.line(format!("   Description: {}", task.description))?;
            out.line(format!("   Category   : {}", task.category))?;
            out.line(format!("   Status     : {} {}", marker, task.status_label()))?;
        }
        out.line(format!(
            "{} of {} task(s) pending",
            TaskService::pending_count(&self.tasks),
            self.tasks.len()
        ))?;
        Ok(())
    }

    fn complete_task<W: Write>(
        &mut self,
        input: &mut dyn LineSource,
        out: &mut Output<W>,
    ) -> Result<LoopControl> {
        self.view_tasks(out)?;
        let prompt = "Enter task number to mark as completed: ";
        let Some(position) = self.read_position(input, out, prompt)? else {
            return Ok(LoopControl::Exit);
        };
        let Ok(position) = position else {
            return Ok(LoopControl::Continue);
        };

        match TaskService::mark_completed_at(self.tasks.clone(), position) {
            Ok(tasks) => self.tasks = tasks,
            Err(err) => {
                self.report_invalid_position(out, err)?;
                return Ok(LoopControl::Continue);
            }
        }
        self.report_saved(out, "Task marked as completed!")?;
        Ok(LoopControl::Continue)
    }

    fn delete_task<W: Write>(
        &mut self,
        input: &mut dyn LineSource,
        out: &mut Output<W>,
    ) -> Result<LoopControl> {
        self.view_tasks(out)?;
        let prompt = "Enter task number to delete: ";
        let Some(position) = self.read_position(input, out, prompt)? else {
            return Ok(LoopControl::Exit);
        };
        let Ok(position) = position else {
            return Ok(LoopControl::Continue);
        };

        let previous = match RecordService::remove_at(self.tasks.clone(), position) {
            Ok(remaining) => std::mem::replace(&mut self.tasks, remaining),
            Err(err) => {
                self.report_invalid_position(out, err)?;
                return Ok(LoopControl::Continue);
            }
        };
        // `position` was accepted above, so it addresses the removed task in `previous`.
        let removed = RecordService::record_at(&previous, position)?;
        self.report_saved(out, format!("Task \"{}\" deleted successfully!", removed.title))?;
        Ok(LoopControl::Continue)
    }

    /// Reads one answer. A non-numeric answer is reported here and yields `Some(Err(_))`.
    fn read_position<W: Write>(
        &self,
        input: &mut dyn LineSource,
        out: &mut Output<W>,
        prompt: &str,
    ) -> Result<Option<std::result::Result<usize, InputError>>> {
        let Some(raw) = input.read_line(prompt)? else {
            return Ok(None);
        };
        let parsed = forms::parse_position(&raw);
        if let Err(err) = &parsed {
            tracing::debug!(%err, "rejected task number");
            out.error(INVALID_NUMBER)?;
        }
        Ok(Some(parsed))
    }

    /// Reports a rejected position and keeps the loop going. Any other failure propagates.
    fn report_invalid_position<W: Write>(&self, out: &mut Output<W>, err: CoreError) -> Result<()> {
        match err {
            CoreError::InvalidPosition { position, len } => {
                tracing::warn!(position, len, "task position rejected");
                out.error(INVALID_NUMBER)?;
                Ok(())
            }
            other => Err(other.into()),
        }
    }

    fn report_saved<W: Write>(
        &self,
        out: &mut Output<W>,
        message: impl std::fmt::Display,
    ) -> Result<()> {
        match self.persist() {
            Ok(()) => out.success(message)?,
            Err(err) => out.error(format!("Change kept in memory but not saved: {err}"))?,
        }
        Ok(())
    }

    fn persist(&self) -> std::result::Result<(), CoreError> {
        if let Err(err) = self.storage.save(&self.tasks) {
            tracing::warn!(%err, "failed to save tasks");
            return Err(err);
        }
        tracing::info!(count = self.tasks.len(), "saved tasks");
        Ok(())
    }
}

/// Entry point for the `todo_list` binary.
pub fn run_todo_list() -> Result<()> {
    let env = ShellEnv::from_env()?;
    let storage = TaskStorage::new(env.config.tasks_path());
    tracing::info!(path = %storage.path().display(), "opening task store");

    let mut shell = TodoShell::load(storage)?;
    let mut input = env.line_source()?;
    let mut out = env.output();
    out.banner("Pocketbook to-do list", &build_info::current())?;
    shell.run(input.as_mut(), &mut out)
}
