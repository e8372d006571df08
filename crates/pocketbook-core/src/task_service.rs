use pocketbook_domain::Task;

use crate::{CoreError, RecordService};

pub struct TaskService;

impl TaskService {
    /// Returns the task list with the task at `position` flagged as completed.
    pub fn mark_completed_at(mut tasks: Vec<Task>, position: usize) -> Result<Vec<Task>, CoreError> {
        let index = RecordService::index_of(tasks.len(), position)?;
        tasks[index].mark_completed();
        Ok(tasks)
    }

    pub fn pending_count(tasks: &[Task]) -> usize {
        tasks.iter().filter(|task| !task.completed).count()
    }
}
