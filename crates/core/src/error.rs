use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for the lookup-or-404 pattern used by every resource.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound { entity, id }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn not_found_shorthand_builds_variant() {
        let err = CoreError::not_found("Ad", 7);
        assert_matches!(err, CoreError::NotFound { entity: "Ad", id: 7 });
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::not_found("Category", 3);
        assert_eq!(err.to_string(), "Entity not found: Category with id 3");
    }
}
