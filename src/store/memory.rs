use super::{ProjectStore, StoreError};
use crate::catalog::domain::Project;
use std::sync::Mutex;

/// In-memory project store backing the HTTP service and the tests. The
/// record set is replaced wholesale on hydration; individual records
/// are only touched through the notes update.
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: Mutex<Vec<Project>>,
}

impl MemoryStore {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
        }
    }

    pub fn replace_all(&self, projects: Vec<Project>) {
        *self.projects.lock().expect("project store poisoned") = projects;
    }
}

impl ProjectStore for MemoryStore {
    fn fetch_all(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.projects.lock().expect("project store poisoned").clone())
    }

    fn fetch_by_ref(&self, ref_code: &str) -> Result<Option<Project>, StoreError> {
        let projects = self.projects.lock().expect("project store poisoned");
        Ok(projects
            .iter()
            .find(|project| project.ref_code == ref_code)
            .cloned())
    }

    fn update_notes(&self, ref_code: &str, notes: &str) -> Result<(), StoreError> {
        let mut projects = self.projects.lock().expect("project store poisoned");
        match projects
            .iter_mut()
            .find(|project| project.ref_code == ref_code)
        {
            Some(project) => {
                project.notes = notes.to_string();
                Ok(())
            }
            None => Err(StoreError::NotFound(ref_code.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::ProjectStatus;

    #[test]
    fn notes_update_is_keyed_by_ref() {
        let store = MemoryStore::new(vec![Project::bare(
            "101",
            "Alpha",
            "Madrid",
            ProjectStatus::EnProyecto,
        )]);

        store
            .update_notes("101", "reunión con promotora")
            .expect("update succeeds");
        let fetched = store
            .fetch_by_ref("101")
            .expect("fetch succeeds")
            .expect("record present");
        assert_eq!(fetched.notes, "reunión con promotora");

        match store.update_notes("999", "x") {
            Err(StoreError::NotFound(ref_code)) => assert_eq!(ref_code, "999"),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn replace_all_swaps_the_record_set() {
        let store = MemoryStore::default();
        assert!(store.fetch_all().expect("fetch succeeds").is_empty());
        store.replace_all(vec![Project::bare(
            "7",
            "Beta",
            "Sevilla",
            ProjectStatus::Concurso,
        )]);
        assert_eq!(store.fetch_all().expect("fetch succeeds").len(), 1);
    }
}
