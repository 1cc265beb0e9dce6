#[cfg(test)]
mod tests {
    use serde_json::json;
    use todoctl::api::HealthStatus;
    use todoctl::libs::task::{Task, TaskCreate, TaskFilter, TaskUpdate};

    #[test]
    fn test_task_deserializes_camel_case_wire_shape() {
        let body = json!({
            "id": 7,
            "title": "Buy milk",
            "description": "2 liters",
            "completed": false,
            "createdAt": "2024-03-01 09:00:00",
            "updatedAt": "2024-03-01 09:30:00"
        });

        let task: Task = serde_json::from_value(body).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description.as_deref(), Some("2 liters"));
        assert!(!task.completed);
        assert_eq!(task.created_at, "2024-03-01 09:00:00");
        assert_eq!(task.updated_at, "2024-03-01 09:30:00");
    }

    #[test]
    fn test_task_tolerates_missing_description() {
        let body = json!({
            "id": 1,
            "title": "Bare",
            "completed": true,
            "createdAt": "2024-03-01 09:00:00",
            "updatedAt": "2024-03-01 09:00:00"
        });

        let task: Task = serde_json::from_value(body).unwrap();
        assert_eq!(task.description, None);
    }

    #[test]
    fn test_task_serializes_back_to_camel_case() {
        let task = Task {
            id: 1,
            title: "Bare".to_string(),
            description: None,
            completed: false,
            created_at: "2024-03-01 09:00:00".to_string(),
            updated_at: "2024-03-01 09:00:00".to_string(),
        };

        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        // Absent description is omitted, not serialized as null
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_create_payload_trims_and_drops_empty_description() {
        let payload = TaskCreate::new("  Buy milk  ", Some("   "));

        assert_eq!(payload.title, "Buy milk");
        assert_eq!(payload.description, None);
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"title": "Buy milk"}));
    }

    #[test]
    fn test_update_payload_omits_absent_fields() {
        let patch = TaskUpdate::completion(true);
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"completed": true}));

        let empty = TaskUpdate::default();
        assert_eq!(serde_json::to_value(&empty).unwrap(), json!({}));
    }

    #[test]
    fn test_health_status_tolerates_missing_fields() {
        let body = json!({"status": "UP", "timestamp": "2024-03-01T09:00:00Z"});

        let health: HealthStatus = serde_json::from_value(body).unwrap();
        assert_eq!(health.status, "UP");
        assert_eq!(health.version, "");
    }

    #[test]
    fn test_filter_predicates() {
        let done = Task {
            id: 1,
            title: "Done".to_string(),
            description: None,
            completed: true,
            created_at: "2024-03-01 09:00:00".to_string(),
            updated_at: "2024-03-01 09:00:00".to_string(),
        };
        let open = Task { id: 2, completed: false, ..done.clone() };

        assert!(TaskFilter::All.matches(&done) && TaskFilter::All.matches(&open));
        assert!(TaskFilter::Completed.matches(&done) && !TaskFilter::Completed.matches(&open));
        assert!(TaskFilter::Active.matches(&open) && !TaskFilter::Active.matches(&done));
    }
}
