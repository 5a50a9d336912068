use std::sync::atomic::{AtomicU64, Ordering};

/// 进程内单调递增 ID，并发写入下不会重复
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub fn new(start: u64) -> Self {
        Self { next: AtomicU64::new(start) }
    }

    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::IdSequence;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn ids_are_unique_across_threads() {
        let seq = Arc::new(IdSequence::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let seq = seq.clone();
                thread::spawn(move || (0..250).map(|_| seq.next_id()).collect::<Vec<_>>())
            })
            .collect();
        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 1000);
        assert!(!seen.contains(&0));
    }
}
