//! Animation identifier generation

use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of animation-name suffixes
///
/// Ids only need to be unique among live effects sharing a registry.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random 9-character base-36 ids from the thread-local RNG
///
/// Collisions are improbable, not impossible.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub const LEN: usize = 9;
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> String {
        let mut rng = rand::rng();
        (0..Self::LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect()
    }
}

/// Deterministic ids (`<prefix>0`, `<prefix>1`, ...)
#[derive(Clone, Debug, Default)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_ids_are_base36() {
        let mut ids = RandomIdGenerator;
        let id = ids.next_id();
        assert_eq!(id.len(), RandomIdGenerator::LEN);
        assert!(id.bytes().all(|b| BASE36.contains(&b)), "{}", id);
    }

    #[test]
    fn test_random_ids_rarely_repeat() {
        let mut ids = RandomIdGenerator;
        let seen: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIdGenerator::new("t");
        assert_eq!(ids.next_id(), "t0");
        assert_eq!(ids.next_id(), "t1");
    }
}
