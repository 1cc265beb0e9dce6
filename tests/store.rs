#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use todoctl::api::{ApiError, TodoApi};
    use todoctl::libs::task::{Task, TaskCreate, TaskFilter, TaskUpdate};
    use todoctl::store::TodoStore;

    /// In-memory stand-in for the remote service, plugged into the store
    /// through the `TodoApi` seam. The `fail` switch makes every call
    /// return a transport error without touching the backing data.
    struct FakeApi {
        tasks: RefCell<Vec<Task>>,
        next_id: Cell<i64>,
        fail: Cell<bool>,
    }

    impl FakeApi {
        fn new(tasks: Vec<Task>) -> Self {
            let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
            Self {
                tasks: RefCell::new(tasks),
                next_id: Cell::new(next_id),
                fail: Cell::new(false),
            }
        }

        fn guard(&self, op: &'static str) -> Result<(), ApiError> {
            if self.fail.get() {
                return Err(ApiError::Transport {
                    op,
                    detail: "connection refused".to_string(),
                });
            }
            Ok(())
        }
    }

    impl TodoApi for FakeApi {
        async fn list_tasks(&self, completed: Option<bool>) -> Result<Vec<Task>, ApiError> {
            self.guard("list_tasks")?;
            let tasks = self.tasks.borrow();
            Ok(match completed {
                Some(done) => tasks.iter().filter(|t| t.completed == done).cloned().collect(),
                None => tasks.clone(),
            })
        }

        async fn get_task(&self, id: i64) -> Result<Task, ApiError> {
            self.guard("get_task")?;
            self.tasks.borrow().iter().find(|t| t.id == id).cloned().ok_or(ApiError::Transport {
                op: "get_task",
                detail: "unexpected status 404 Not Found".to_string(),
            })
        }

        async fn create_task(&self, new_task: &TaskCreate) -> Result<Task, ApiError> {
            self.guard("create_task")?;
            if new_task.title.trim().is_empty() {
                return Err(ApiError::Validation("task title must not be empty".to_string()));
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let stamp = format!("2024-03-{:02} 09:00:00", id);
            let task = Task {
                id,
                title: new_task.title.clone(),
                description: new_task.description.clone(),
                completed: false,
                created_at: stamp.clone(),
                updated_at: stamp,
            };
            self.tasks.borrow_mut().push(task.clone());
            Ok(task)
        }

        async fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<Task, ApiError> {
            self.guard("update_task")?;
            let mut tasks = self.tasks.borrow_mut();
            let task = tasks.iter_mut().find(|t| t.id == id).ok_or(ApiError::Transport {
                op: "update_task",
                detail: "unexpected status 404 Not Found".to_string(),
            })?;
            if let Some(title) = &update.title {
                task.title = title.clone();
            }
            if let Some(description) = &update.description {
                task.description = Some(description.clone());
            }
            if let Some(completed) = update.completed {
                task.completed = completed;
            }
            task.updated_at = "2024-03-31 12:00:00".to_string();
            Ok(task.clone())
        }

        async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
            self.guard("delete_task")?;
            let mut tasks = self.tasks.borrow_mut();
            let before = tasks.len();
            tasks.retain(|t| t.id != id);
            if tasks.len() == before {
                return Err(ApiError::Transport {
                    op: "delete_task",
                    detail: "unexpected status 404 Not Found".to_string(),
                });
            }
            Ok(())
        }

        async fn delete_completed(&self) -> Result<u64, ApiError> {
            self.guard("delete_completed")?;
            let mut tasks = self.tasks.borrow_mut();
            let before = tasks.len();
            tasks.retain(|t| !t.completed);
            Ok((before - tasks.len()) as u64)
        }

        async fn delete_all(&self) -> Result<u64, ApiError> {
            self.guard("delete_all")?;
            let mut tasks = self.tasks.borrow_mut();
            let count = tasks.len() as u64;
            tasks.clear();
            Ok(count)
        }
    }

    fn task(id: i64, title: &str, completed: bool, created_at: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            completed,
            created_at: created_at.to_string(),
            updated_at: created_at.to_string(),
        }
    }

    async fn loaded_store(tasks: Vec<Task>) -> TodoStore<FakeApi> {
        let mut store = TodoStore::new(FakeApi::new(tasks));
        store.load().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_add_task_to_empty_store() {
        let mut store = TodoStore::new(FakeApi::new(vec![]));

        let created = store.add_task("Buy milk", None).await.unwrap();
        assert_eq!(created.title, "Buy milk");
        assert!(!created.completed);

        assert_eq!(store.total_count(), 1);
        assert_eq!(store.active_count(), 1);
        assert_eq!(store.completed_count(), 0);

        store.set_filter(TaskFilter::All);
        assert_eq!(store.visible_tasks().len(), 1);
        store.set_filter(TaskFilter::Active);
        assert_eq!(store.visible_tasks().len(), 1);
        store.set_filter(TaskFilter::Completed);
        assert!(store.visible_tasks().is_empty());
    }

    #[tokio::test]
    async fn test_add_task_prepends_newest_first() {
        let mut store = loaded_store(vec![task(1, "Old", false, "2024-03-01 09:00:00")]).await;

        store.add_task("New", None).await.unwrap();

        assert_eq!(store.tasks()[0].title, "New");
        assert_eq!(store.tasks()[1].title, "Old");
    }

    #[tokio::test]
    async fn test_visible_tasks_filters_exactly() {
        let mut store = loaded_store(vec![
            task(1, "A", false, "2024-03-01 09:00:00"),
            task(2, "B", true, "2024-03-02 09:00:00"),
            task(3, "C", false, "2024-03-03 09:00:00"),
        ])
        .await;

        store.set_filter(TaskFilter::Active);
        assert!(store.visible_tasks().iter().all(|t| !t.completed));
        assert_eq!(store.visible_tasks().len(), 2);

        store.set_filter(TaskFilter::Completed);
        assert!(store.visible_tasks().iter().all(|t| t.completed));
        assert_eq!(store.visible_tasks().len(), 1);

        store.set_filter(TaskFilter::All);
        assert_eq!(store.visible_tasks().len(), 3);
    }

    #[tokio::test]
    async fn test_visible_tasks_orders_newest_incomplete_first() {
        // A older than B, both incomplete
        let store = loaded_store(vec![
            task(1, "A", false, "2024-03-01 09:00:00"),
            task(2, "B", false, "2024-03-02 09:00:00"),
        ])
        .await;

        let visible = store.visible_tasks();
        assert_eq!(visible[0].title, "B");
        assert_eq!(visible[1].title, "A");
    }

    #[tokio::test]
    async fn test_completed_tasks_sink_regardless_of_timestamps() {
        let mut store = loaded_store(vec![
            task(1, "A", false, "2024-03-01 09:00:00"),
            task(2, "B", false, "2024-03-02 09:00:00"),
        ])
        .await;

        store.toggle_task(1, true).await.unwrap();

        let visible = store.visible_tasks();
        assert_eq!(visible[0].title, "B");
        assert_eq!(visible[1].title, "A");

        // B completed too, and it is newer, so it leads the completed group
        store.toggle_task(2, true).await.unwrap();
        let visible = store.visible_tasks();
        assert_eq!(visible[0].title, "B");
        assert_eq!(visible[1].title, "A");
        assert!(visible.iter().all(|t| t.completed));
    }

    #[tokio::test]
    async fn test_visible_tasks_ties_keep_insertion_order() {
        let store = loaded_store(vec![
            task(1, "First", false, "2024-03-01 09:00:00"),
            task(2, "Second", false, "2024-03-01 09:00:00"),
        ])
        .await;

        let visible = store.visible_tasks();
        assert_eq!(visible[0].title, "First");
        assert_eq!(visible[1].title, "Second");
    }

    #[tokio::test]
    async fn test_counts_always_add_up() {
        let mut store = loaded_store(vec![
            task(1, "A", false, "2024-03-01 09:00:00"),
            task(2, "B", true, "2024-03-02 09:00:00"),
            task(3, "C", false, "2024-03-03 09:00:00"),
        ])
        .await;

        assert_eq!(store.completed_count() + store.active_count(), store.total_count());

        store.toggle_task(1, true).await.unwrap();
        assert_eq!(store.completed_count() + store.active_count(), store.total_count());

        store.remove_task(2).await.unwrap();
        assert_eq!(store.completed_count() + store.active_count(), store.total_count());
    }

    #[tokio::test]
    async fn test_toggle_twice_is_idempotent() {
        let mut store = loaded_store(vec![task(1, "A", false, "2024-03-01 09:00:00")]).await;

        let first = store.toggle_task(1, true).await.unwrap();
        assert!(first.completed);

        // Second call is not suppressed, but the settled state is the same
        let second = store.toggle_task(1, true).await.unwrap();
        assert!(second.completed);
        assert_eq!(store.completed_count(), 1);
    }

    #[tokio::test]
    async fn test_toggle_replaces_stored_copy_with_server_record() {
        let mut store = loaded_store(vec![task(1, "A", false, "2024-03-01 09:00:00")]).await;

        let returned = store.toggle_task(1, true).await.unwrap();

        // The stored copy is the server record in full, not a local merge
        assert_eq!(store.find(1).unwrap(), &returned);
        assert_eq!(store.find(1).unwrap().updated_at, "2024-03-31 12:00:00");
    }

    #[tokio::test]
    async fn test_edit_task_updates_title_and_description() {
        let mut store = loaded_store(vec![task(1, "A", false, "2024-03-01 09:00:00")]).await;

        store.edit_task(1, "Renamed", Some("details")).await.unwrap();

        let edited = store.find(1).unwrap();
        assert_eq!(edited.title, "Renamed");
        assert_eq!(edited.description.as_deref(), Some("details"));
    }

    #[tokio::test]
    async fn test_remove_task_drops_matching_entry() {
        let mut store = loaded_store(vec![
            task(1, "A", false, "2024-03-01 09:00:00"),
            task(2, "B", false, "2024-03-02 09:00:00"),
        ])
        .await;

        store.remove_task(1).await.unwrap();

        assert_eq!(store.total_count(), 1);
        assert!(store.find(1).is_none());
        assert!(store.find(2).is_some());
    }

    #[tokio::test]
    async fn test_clear_completed_removes_exactly_completed() {
        let mut store = loaded_store(vec![
            task(1, "A", true, "2024-03-01 09:00:00"),
            task(2, "B", false, "2024-03-02 09:00:00"),
            task(3, "C", true, "2024-03-03 09:00:00"),
            task(4, "D", false, "2024-03-04 09:00:00"),
            task(5, "E", false, "2024-03-05 09:00:00"),
        ])
        .await;

        let deleted = store.clear_completed().await.unwrap();

        assert_eq!(deleted, 2);
        assert_eq!(store.total_count(), 3);
        assert!(store.tasks().iter().all(|t| !t.completed));
    }

    #[tokio::test]
    async fn test_clear_all_empties_the_collection() {
        let mut store = loaded_store(vec![
            task(1, "A", true, "2024-03-01 09:00:00"),
            task(2, "B", false, "2024-03-02 09:00:00"),
        ])
        .await;

        let deleted = store.clear_all().await.unwrap();

        assert_eq!(deleted, 2);
        assert_eq!(store.total_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_create_leaves_tasks_unchanged() {
        let mut store = loaded_store(vec![task(1, "A", false, "2024-03-01 09:00:00")]).await;
        let snapshot: Vec<_> = store.tasks().to_vec();

        store.api().fail.set(true);
        let err = store.add_task("Doomed", None).await.unwrap_err();

        let api_err = err.downcast_ref::<ApiError>().expect("should be an ApiError");
        assert_eq!(api_err.operation(), Some("create_task"));
        assert_eq!(store.tasks(), snapshot.as_slice());
        assert!(!store.is_busy());
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_snapshot() {
        let mut store = loaded_store(vec![task(1, "A", false, "2024-03-01 09:00:00")]).await;

        store.api().fail.set(true);
        assert!(store.load().await.is_err());

        assert_eq!(store.total_count(), 1);
        assert!(!store.is_busy());
    }

    #[tokio::test]
    async fn test_empty_title_is_rejected_before_dispatch() {
        let mut store = TodoStore::new(FakeApi::new(vec![]));

        let err = store.add_task("   ", None).await.unwrap_err();

        let api_err = err.downcast_ref::<ApiError>().expect("should be an ApiError");
        assert!(matches!(api_err, ApiError::Validation(_)));
        assert_eq!(store.total_count(), 0);
    }

    #[tokio::test]
    async fn test_busy_flag_clears_after_success_and_failure() {
        let mut store = loaded_store(vec![task(1, "A", false, "2024-03-01 09:00:00")]).await;

        store.toggle_task(1, true).await.unwrap();
        assert!(!store.is_busy());

        store.api().fail.set(true);
        assert!(store.toggle_task(1, false).await.is_err());
        assert!(!store.is_busy());
    }
}
