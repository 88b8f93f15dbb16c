use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Patient",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Patient with id 7");
    }

    #[test]
    fn validation_display_carries_message() {
        let err = CoreError::Validation("age must be a number".into());
        assert_eq!(err.to_string(), "Validation failed: age must be a number");
    }
}
