use chrono::Utc;

const PREFIX: &str = "job";

/// Hands out `job<millis>` identifiers.
///
/// Two submissions inside the same millisecond, or a clock that steps
/// backwards, fall back to `last + 1`. Candidates already taken in the
/// collection are skipped the same way.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, taken: impl Fn(&str) -> bool) -> String {
        self.next_id_at(Utc::now().timestamp_millis(), taken)
    }

    pub fn next_id_at(&mut self, now_millis: i64, taken: impl Fn(&str) -> bool) -> String {
        let mut stamp = now_millis.max(self.last + 1);
        let mut id = format!("{}{}", PREFIX, stamp);
        while taken(&id) {
            stamp += 1;
            id = format!("{}{}", PREFIX, stamp);
        }
        self.last = stamp;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_clock_when_it_advances() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id_at(1_700_000_000_000, |_| false), "job1700000000000");
        assert_eq!(ids.next_id_at(1_700_000_000_500, |_| false), "job1700000000500");
    }

    #[test]
    fn test_same_millisecond_falls_back_to_counter() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id_at(42, |_| false);
        let b = ids.next_id_at(42, |_| false);
        let c = ids.next_id_at(41, |_| false);
        assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("job42", "job43", "job44"));
    }

    #[test]
    fn test_skips_ids_already_in_collection() {
        let mut ids = IdGenerator::new();
        let existing = ["job7", "job8"];
        let id = ids.next_id_at(7, |c| existing.contains(&c));
        assert_eq!(id, "job9");
    }

    #[test]
    fn test_wall_clock_ids_are_distinct() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id(|_| false);
        let b = ids.next_id(|_| false);
        assert_ne!(a, b);
        assert!(a.starts_with("job"));
    }
}
