//! Domain model for to-do list entries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub category: String,
    pub completed: bool,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
            completed: false,
        }
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Not Completed"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tasks_start_incomplete() {
        let task = Task::new("Write report", "Quarterly numbers", "Work");
        assert!(!task.completed);
        assert_eq!(task.status_label(), "Not Completed");
    }

    #[test]
    fn mark_completed_is_idempotent() {
        let mut task = Task::new("Call mum", "", "Personal");
        task.mark_completed();
        task.mark_completed();
        assert!(task.completed);
        assert_eq!(task.status_label(), "Completed");
    }

    #[test]
    fn completed_flag_is_required_on_load() {
        let missing = serde_json::from_str::<Task>(
            r#"{"title":"a","description":"b","category":"c"}"#,
        );
        assert!(missing.is_err());

        let loaded: Task = serde_json::from_str(
            r#"{"title":"a","description":"b","category":"c","completed":true}"#,
        )
        .unwrap();
        assert!(loaded.completed);
    }
}
