use std::collections::HashMap;

mod network;

pub use network::{Flow, FlowNetwork};

/// Translation between the 1-based vertex numbering used by graph inputs and
/// the 0-based numbering the network works with.
#[derive(Debug, Clone)]
pub struct IdMapping {
    internal_to_external: Vec<u32>,
    external_to_internal: HashMap<u32, usize>,
}

impl IdMapping {
    pub fn one_based(n: u32) -> Self {
        let internal_to_external: Vec<u32> = (1..=n).collect();
        let external_to_internal = internal_to_external
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();
        Self {
            internal_to_external,
            external_to_internal,
        }
    }

    pub fn external_id(&self, internal: usize) -> Option<u32> {
        self.internal_to_external.get(internal).copied()
    }

    pub fn internal_id(&self, external: u32) -> Option<usize> {
        self.external_to_internal.get(&external).copied()
    }

    pub fn len(&self) -> usize {
        self.internal_to_external.len()
    }

    pub fn is_empty(&self) -> bool {
        self.internal_to_external.is_empty()
    }
}
