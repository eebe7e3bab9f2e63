//! Unique widget name allocation

use std::time::Instant;

/// Issues process-unique widget names.
///
/// The counter is the sole source of uniqueness. The timestamp component
/// and the caller-supplied hint only make generated names easier to read
/// when they show up in diagnostics.
#[derive(Debug)]
pub struct NameAllocator {
    counter: u64,
    epoch: Instant,
    issued: Vec<String>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self {
            counter: 0,
            epoch: Instant::now(),
            issued: Vec::new(),
        }
    }

    /// Allocate the next unique name.
    ///
    /// Never fails. Every issued name is appended to the diagnostic trail
    /// returned by [`issued`](Self::issued).
    pub fn allocate(&mut self, hint: Option<&str>) -> String {
        self.counter += 1;
        let millis = self.epoch.elapsed().as_millis();
        let name = match hint {
            Some(hint) => format!("__ui_widget_{}_{}_{}", self.counter, millis, hint),
            None => format!("__ui_widget_{}_{}", self.counter, millis),
        };
        self.issued.push(name.clone());
        name
    }

    /// Every name issued so far, oldest first.
    ///
    /// Dumped alongside creation failures so a silently-failed host call
    /// can be traced back to the widget that requested it.
    pub fn issued(&self) -> &[String] {
        &self.issued
    }
}

impl Default for NameAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_pairwise_distinct() {
        let mut allocator = NameAllocator::new();
        let mut seen = HashSet::new();
        for i in 0..1000 {
            let hint = if i % 3 == 0 { Some("hinted") } else { None };
            assert!(seen.insert(allocator.allocate(hint)));
        }
    }

    #[test]
    fn test_hint_becomes_suffix() {
        let mut allocator = NameAllocator::new();
        let name = allocator.allocate(Some("scoreboard"));
        assert!(name.starts_with("__ui_widget_1_"));
        assert!(name.ends_with("_scoreboard"));
    }

    #[test]
    fn test_issued_trail_records_everything() {
        let mut allocator = NameAllocator::new();
        let a = allocator.allocate(None);
        let b = allocator.allocate(Some("x"));
        assert_eq!(allocator.issued(), &[a, b]);
    }
}
