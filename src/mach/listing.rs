use crate::lang::{Line, LineNumber};
use std::collections::BTreeMap;
use std::sync::Arc;

/// ## Program source
///
/// Statements keyed by line number plus the ascending index of those
/// line numbers. The runtime's program counter is a position in the
/// index, never a line number.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Arc<BTreeMap<LineNumber, Line>>,
    index: Arc<Vec<LineNumber>>,
}

impl Listing {
    /// Builds a listing from program text. Lines without a leading
    /// integer or without a statement are dropped. When a line number
    /// repeats, the later line wins.
    pub fn load_str(text: &str) -> Listing {
        let mut source = BTreeMap::new();
        let mut dropped = 0;
        for s in text.lines() {
            if s.trim().is_empty() {
                continue;
            }
            match Line::new(s) {
                Some(line) => {
                    source.insert(line.number(), line);
                }
                None => dropped += 1,
            }
        }
        tracing::debug!(lines = source.len(), dropped, "program loaded");
        let index = source.keys().copied().collect();
        Listing {
            source: Arc::new(source),
            index: Arc::new(index),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Ascending line numbers.
    pub fn index(&self) -> &[LineNumber] {
        &self.index
    }

    /// Line at a position of the index.
    pub fn line(&self, pc: usize) -> Option<&Line> {
        self.index.get(pc).and_then(|num| self.source.get(num))
    }

    /// Position of a line number in the index.
    pub fn index_of(&self, line_number: LineNumber) -> Option<usize> {
        self.index.binary_search(&line_number).ok()
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.source.values()
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
