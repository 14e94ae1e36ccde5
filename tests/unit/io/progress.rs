//! Tests for batch progress bookkeeping

#[cfg(test)]
mod tests {
    use mesagen::io::progress::ProgressManager;

    // Tests completed and failed maps are counted separately
    #[test]
    fn test_counts() {
        let mut progress = ProgressManager::hidden(3);
        progress.complete_map(1);
        progress.fail_map(2);
        progress.complete_map(3);
        progress.finish();

        assert_eq!(progress.completed(), 2);
        assert_eq!(progress.failed(), 1);
        assert_eq!(progress.position(), 3);
    }

    // Tests a visible bar tracks position the same way
    #[test]
    fn test_visible_bar_position() {
        let mut progress = ProgressManager::new(2);
        progress.complete_map(10);

        assert_eq!(progress.position(), 1);
        assert_eq!(progress.failed(), 0);
    }
}
