use thiserror::Error;

/// Ошибки рабочих процессов SiLog
///
/// Все ошибки локальные и исправимые пользователем: операция отклоняется,
/// предыдущее состояние не меняется.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("view '{view}' is not available for role '{role}'")]
    ViewNotPermitted { view: String, role: String },

    #[error("collaborator unavailable: {0}")]
    CollaboratorUnavailable(String),
}

impl WorkflowError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        WorkflowError::InvalidInput(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        WorkflowError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_error_display() {
        let err = WorkflowError::invalid_input("reject reason must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid input: reject reason must not be empty"
        );

        let err = WorkflowError::InvalidStateTransition {
            from: "approved".to_string(),
            to: "rejected".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid state transition: approved -> rejected"
        );

        let err = WorkflowError::not_found("logbook", 42);
        assert_eq!(err.to_string(), "logbook not found: 42");
    }
}
