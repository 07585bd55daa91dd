//! Prediction error types

use thiserror::Error;

/// Errors that can occur while producing a forecast sequence
#[derive(Error, Debug)]
pub enum PredictionError {
    /// Unexpected failure while assembling the record sequence
    #[error("Generation failed: {0}")]
    Generation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_generation_error_message() {
        let error = PredictionError::Generation("timestamp formatting failed".to_string());
        assert_eq!(
            error.to_string(),
            "Generation failed: timestamp formatting failed"
        );
    }

    #[test]
    fn test_generation_error_with_various_messages() {
        let messages = vec![
            "rng exhausted",
            "clock went backwards",
            "record assembly failed",
        ];

        for msg in messages {
            let error = PredictionError::Generation(msg.to_string());
            assert_eq!(error.to_string(), format!("Generation failed: {}", msg));
        }
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error> = Box::new(PredictionError::Generation("x".to_string()));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_can_be_boxed_send_sync() {
        let error = PredictionError::Generation("boxed".to_string());
        let boxed: Box<dyn Error + Send + Sync> = Box::new(error);
        assert_eq!(boxed.to_string(), "Generation failed: boxed");
    }

    #[test]
    fn test_error_downcast() {
        let error: Box<dyn Error> = Box::new(PredictionError::Generation("x".to_string()));
        let downcasted = error.downcast_ref::<PredictionError>();
        assert!(downcasted.is_some());
        assert!(matches!(
            downcasted.unwrap(),
            PredictionError::Generation(_)
        ));
    }

    #[test]
    fn test_all_variants_are_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<PredictionError>();
        assert_sync::<PredictionError>();
    }
}
