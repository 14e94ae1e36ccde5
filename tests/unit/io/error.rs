//! Tests for error formatting, sources and retry classification

#[cfg(test)]
mod tests {
    use mesagen::MapError;
    use mesagen::io::error::{invalid_parameter, out_of_bounds};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests out-of-bounds errors describe the placement
    #[test]
    fn test_out_of_bounds_display() {
        let error = out_of_bounds("mesa", [7, -1], (5, 5), (10, 10));

        assert_eq!(
            error.to_string(),
            "mesa at (7, -1) of size 5x5 does not fit in 10x10 map"
        );
        assert!(error.is_retryable());
        assert!(error.source().is_none());
    }

    // Tests parameter errors carry the value and reason
    #[test]
    fn test_invalid_parameter_display() {
        let error = invalid_parameter("margin", &0, &"must be positive");

        assert_eq!(
            error.to_string(),
            "invalid margin 0: must be positive"
        );
        assert!(!error.is_retryable());
    }

    // Tests generation failures chain to their last cause
    // Verified by returning None from source()
    #[test]
    fn test_generation_failed_source() {
        let error = MapError::GenerationFailed {
            attempts: 8,
            last: Box::new(out_of_bounds("bridge", [0, 0], (3, 1), (2, 2))),
        };

        assert!(error.to_string().starts_with("map generation failed after 8 attempts"));
        assert!(!error.is_retryable());
        let source = error.source().and_then(|s| s.downcast_ref::<MapError>());
        assert!(matches!(
            source,
            Some(MapError::OutOfBounds { what: "bridge", .. })
        ));
    }

    // Tests I/O errors convert and keep their source
    #[test]
    fn test_file_system_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = MapError::from(io_error);

        assert!(matches!(error, MapError::FileSystem { .. }));
        assert!(error.source().is_some());

        let error = MapError::FileSystem {
            path: PathBuf::from("maps"),
            operation: "create directory",
            source: std::io::Error::other("denied"),
        };
        assert_eq!(
            error.to_string(),
            "cannot create directory 'maps': denied"
        );
    }
}
