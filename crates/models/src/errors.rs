use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("database error: {0}")]
    Db(String),
}

#[cfg(test)]
mod tests {
    use super::ModelError;

    #[test]
    fn db_error_display_carries_prefix() {
        let err = ModelError::Db("connection refused".into());
        assert_eq!(err.to_string(), "database error: connection refused");
    }
}
