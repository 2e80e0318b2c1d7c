//! A class merger that records every call

use std::sync::{Arc, Mutex};

use variants_class::{ClassMerge, TokenMerge};

/// Wraps another [`ClassMerge`] and remembers the fragments of each call.
///
/// Used to check the order in which engines feed fragments to the merger.
#[derive(Debug)]
pub struct RecordingMerge {
    inner: Arc<dyn ClassMerge>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingMerge {
    /// Record calls and delegate to [`TokenMerge`].
    pub fn new() -> Self {
        Self::wrapping(Arc::new(TokenMerge::new()))
    }

    pub fn wrapping(inner: Arc<dyn ClassMerge>) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fragments of every call so far, oldest first.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Every non-empty fragment passed so far, oldest first.
    pub fn fragments(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .flatten()
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.clear();
        }
    }
}

impl Default for RecordingMerge {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassMerge for RecordingMerge {
    fn merge(&self, fragments: &[&str]) -> String {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(fragments.iter().map(|fragment| fragment.to_string()).collect());
        }
        self.inner.merge(fragments)
    }
}
