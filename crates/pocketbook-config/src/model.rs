use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Stores user-configurable CLI preferences and file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory holding the record files. Defaults to the working directory.
    pub data_root: Option<PathBuf>,

    #[serde(default = "Config::default_expenses_file")]
    pub expenses_file: String,
    #[serde(default = "Config::default_tasks_file")]
    pub tasks_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            data_root: None,
            expenses_file: Self::default_expenses_file(),
            tasks_file: Self::default_tasks_file(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_expenses_file() -> String {
        "expenses.json".into()
    }

    pub fn default_tasks_file() -> String {
        "tasks.json".into()
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        self.data_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn expenses_path(&self) -> PathBuf {
        resolve(&self.resolve_data_root(), &self.expenses_file)
    }

    pub fn tasks_path(&self) -> PathBuf {
        resolve(&self.resolve_data_root(), &self.tasks_file)
    }
}

/// Absolute file names win over the data root.
fn resolve(root: &Path, file: &str) -> PathBuf {
    let file = Path::new(file);
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        root.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_working_directory() {
        let cfg = Config::default();
        assert_eq!(cfg.expenses_path(), PathBuf::from("./expenses.json"));
        assert_eq!(cfg.tasks_path(), PathBuf::from("./tasks.json"));
        assert_eq!(cfg.currency_symbol, "₹");
    }

    #[test]
    fn data_root_prefixes_relative_file_names() {
        let cfg = Config {
            data_root: Some(PathBuf::from("/srv/pocketbook")),
            tasks_file: "todo/list.json".into(),
            ..Config::default()
        };
        assert_eq!(
            cfg.tasks_path(),
            PathBuf::from("/srv/pocketbook/todo/list.json")
        );
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let cfg: Config = serde_json::from_str(r#"{"currency_symbol":"$"}"#).unwrap();
        assert_eq!(cfg.currency_symbol, "$");
        assert!(cfg.ui_color_enabled);
        assert_eq!(cfg.expenses_file, "expenses.json");
        assert!(cfg.data_root.is_none());
    }
}
