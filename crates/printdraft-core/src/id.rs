//! Element id generation.

use crate::element::ElementId;

/// Source of fresh element ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> ElementId;
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> ElementId {
        ElementId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic `prefix-N` ids, counting from 1.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("el")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ElementId {
        let id = ElementId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> ElementId {
        (**self).next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidIdGenerator;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIdGenerator::new("copy");
        assert_eq!(ids.next_id().as_str(), "copy-1");
        assert_eq!(ids.next_id().as_str(), "copy-2");
    }
}
