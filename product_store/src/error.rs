use std::{error::Error, fmt::Debug};

/// Failure of a lookup by id.
///
/// Neither message carries the driver error; it is only reachable through
/// [`Error::source`].
#[derive(thiserror::Error)]
pub enum ProductError {
    #[error("Product not found with id {id}")]
    NotFound { id: i64 },

    #[error("Something wrong, check id: {id}")]
    QueryFailed {
        id: i64,
        #[source]
        source: sqlx::Error,
    },
}

impl ProductError {
    pub fn from_lookup(id: i64, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound { id },
            source => Self::QueryFailed { id, source },
        }
    }
}

impl Debug for ProductError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        if let Some(source) = self.source() {
            write!(f, " (Caused by: {})", source)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_is_not_found() {
        let err = ProductError::from_lookup(5, sqlx::Error::RowNotFound);

        assert!(matches!(err, ProductError::NotFound { id: 5 }));
        assert_eq!(err.to_string(), "Product not found with id 5");
        assert!(err.source().is_none());
    }

    #[test]
    fn other_driver_errors_are_query_failed() {
        let err = ProductError::from_lookup(5, sqlx::Error::PoolTimedOut);

        assert!(matches!(err, ProductError::QueryFailed { id: 5, .. }));
        assert_eq!(err.to_string(), "Something wrong, check id: 5");
    }

    #[test]
    fn query_failed_keeps_cause_out_of_message() {
        let err = ProductError::from_lookup(
            7,
            sqlx::Error::Protocol("unexpected message".to_string()),
        );

        assert!(!err.to_string().contains("unexpected message"));
        assert!(err.source().is_some());
        assert!(format!("{:?}", err).contains("Caused by"));
    }
}
