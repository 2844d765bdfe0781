pub mod types;
pub mod utils;
pub mod pagination;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn envelope_ok_serializes_data_without_message() {
        let env = types::ApiEnvelope::ok(serde_json::json!({"id": 1}));
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["success"], true);
        assert_eq!(v["data"]["id"], 1);
        assert!(v.get("message").is_none());
    }

    #[test]
    fn envelope_failure_has_message_only() {
        let env = types::ApiEnvelope::<()>::failure("Category not found");
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["success"], false);
        assert_eq!(v["message"], "Category not found");
        assert!(v.get("data").is_none());
    }
}
