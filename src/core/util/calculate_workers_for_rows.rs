use std::num::NonZeroUsize;

/// Hardware execution units available to this process, or one if unknown.
#[must_use]
pub fn available_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Caps `max_workers` at the number of rows so no worker is left without a stripe.
#[must_use]
pub fn calculate_workers_for_rows(max_workers: NonZeroUsize, rows: u32) -> NonZeroUsize {
    NonZeroUsize::new(max_workers.get().min(rows as usize)).unwrap_or(NonZeroUsize::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workers(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_available_workers_is_at_least_one() {
        assert!(available_workers().get() >= 1);
    }

    #[test]
    fn test_single_row_gives_one_worker() {
        assert_eq!(calculate_workers_for_rows(workers(16), 1), workers(1));
    }

    #[test]
    fn test_workers_do_not_exceed_rows() {
        assert_eq!(calculate_workers_for_rows(workers(16), 5), workers(5));
    }

    #[test]
    fn test_rows_do_not_raise_worker_count() {
        assert_eq!(calculate_workers_for_rows(workers(4), 600), workers(4));
    }

    #[test]
    fn test_zero_rows_falls_back_to_one_worker() {
        assert_eq!(calculate_workers_for_rows(workers(8), 0), workers(1));
    }
}
