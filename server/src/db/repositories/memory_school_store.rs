use crate::db::repositories::school_repository::SchoolStore;
use crate::error::AppResult;
use crate::models::{NewSchool, School};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory school store for tests and local runs without a database.
#[derive(Debug)]
pub struct MemorySchoolStore {
    inner: RwLock<MemoryState>,
}

#[derive(Debug)]
struct MemoryState {
    schools: Vec<School>,
    next_id: i64,
}

impl MemorySchoolStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryState {
                schools: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemorySchoolStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchoolStore for MemorySchoolStore {
    async fn create(&self, school: NewSchool) -> AppResult<i64> {
        let mut state = self.inner.write().await;
        let id = state.next_id;
        state.next_id += 1;
        state.schools.push(school.into_school(id));
        Ok(id)
    }

    async fn list_all(&self) -> AppResult<Vec<School>> {
        Ok(self.inner.read().await.schools.clone())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut state = self.inner.write().await;
        let removed = state.schools.len() as u64;
        state.schools.clear();
        Ok(removed)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(name: &str) -> NewSchool {
        NewSchool {
            name: name.to_string(),
            address: format!("{} Road", name),
            latitude: 10.0,
            longitude: 20.0,
        }
    }

    #[tokio::test]
    async fn test_ids_are_monotonic_and_not_reused() {
        let store = MemorySchoolStore::new();

        assert_eq!(store.create(school("a")).await.unwrap(), 1);
        assert_eq!(store.create(school("b")).await.unwrap(), 2);
        assert_eq!(store.delete_all().await.unwrap(), 2);
        assert_eq!(store.create(school("c")).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemorySchoolStore::new();
        store.create(school("first")).await.unwrap();
        store.create(school("second")).await.unwrap();

        let names: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["first".to_string(), "second".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_all_twice() {
        let store = MemorySchoolStore::new();
        store.create(school("a")).await.unwrap();

        assert_eq!(store.delete_all().await.unwrap(), 1);
        assert_eq!(store.delete_all().await.unwrap(), 0);
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
