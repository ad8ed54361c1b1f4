use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out monotonically increasing request numbers.
#[derive(Debug, Default)]
pub(crate) struct Sequencer {
    issued: AtomicU64,
}

impl Sequencer {
    pub fn next(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Highest request number whose response has been rendered.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Watermark {
    applied: u64,
}

impl Watermark {
    /// Returns false when `seq` is older than what is already on screen.
    pub fn advance(&mut self, seq: u64) -> bool {
        if seq <= self.applied {
            return false;
        }
        self.applied = seq;
        true
    }

    pub fn applied(&self) -> u64 {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequencer_starts_at_one_and_increments() {
        let seq = Sequencer::default();
        assert_eq!(seq.next(), 1);
        assert_eq!(seq.next(), 2);
        assert_eq!(seq.next(), 3);
    }

    #[test]
    fn watermark_rejects_older_responses() {
        let mut mark = Watermark::default();
        assert!(mark.advance(2));
        assert!(!mark.advance(1));
        assert!(!mark.advance(2));
        assert!(mark.advance(5));
        assert_eq!(mark.applied(), 5);
    }
}
