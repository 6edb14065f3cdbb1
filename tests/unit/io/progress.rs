//! Tests for progress manager state handling

#[cfg(test)]
mod tests {
    use std::path::Path;
    use wavetile::io::progress::ProgressManager;

    // Small batches get individual bars without a batch bar
    #[test]
    fn test_small_batch_lifecycle() {
        let mut manager = ProgressManager::new();
        manager.initialize(2);

        manager.start_file(0, Path::new("a.png"), 100);
        manager.update_solve(0, 25, 0);
        manager.update_solve(0, 100, 3);
        manager.complete_file(0);

        manager.start_file(1, Path::new("b.png"), 64);
        manager.complete_file(1);
        manager.finish();
    }

    // Large batches roll individual bars into a single batch display
    #[test]
    fn test_large_batch_lifecycle() {
        let mut manager = ProgressManager::new();
        manager.initialize(20);

        for index in 0..20 {
            manager.start_file(index, Path::new("input.png"), 16);
            manager.update_solve(index, 16, 0);
            manager.complete_file(index);
        }
        manager.finish();
    }

    // Updates for files that were never started must not panic
    #[test]
    fn test_update_unknown_file_is_ignored() {
        let mut manager = ProgressManager::new();
        manager.initialize(1);
        manager.update_solve(5, 1, 0);
        manager.finish();
    }
}
