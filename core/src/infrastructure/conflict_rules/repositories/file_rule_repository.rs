use std::path::{Path, PathBuf};

use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    conflict::{ports::ConflictRuleRepository, value_objects::ConflictRuleSet},
};

/// Reads the rule table from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct FileConflictRuleRepository {
    pub path: PathBuf,
}

impl FileConflictRuleRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConflictRuleRepository for FileConflictRuleRepository {
    fn load_rules(&self) -> Result<ConflictRuleSet, CoreError> {
        let path = self.path.display();
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            error!("Failed to read conflict rules from {}: {}", path, e);
            CoreError::InvalidRuleTable(format!("cannot read {path}: {e}"))
        })?;

        ConflictRuleSet::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conflict::entities::ConflictRule;

    fn write_table(name: &str, contents: &str) -> PathBuf {
        let file = format!("skinsafe-{}-{name}.json", std::process::id());
        let path = std::env::temp_dir().join(file);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_loads_table_from_file() {
        let path = write_table("pairs", r#"[["Copper Peptides", "Vitamin C"]]"#);

        let rules = FileConflictRuleRepository::new(&path).load_rules().unwrap();

        assert_eq!(
            rules.rules,
            vec![ConflictRule::new("Copper Peptides", "Vitamin C")]
        );
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_invalid_table() {
        let path = Path::new("/nonexistent/skinsafe/rules.json");
        let repository = FileConflictRuleRepository::new(path);

        assert!(matches!(
            repository.load_rules(),
            Err(CoreError::InvalidRuleTable(_))
        ));
        assert_eq!(repository.path(), path);
    }
}
