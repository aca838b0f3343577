//! Navigation history for encoded grid state.
//!
//! After a successful [`encode`](crate::services::state_codec::encode) the
//! caller pushes the new query through a [`Navigator`]. On back/forward the
//! state is decoded again from the query alone.

use crate::services::state_codec::QueryParams;

/// Capability to make an encoded query the current, navigable state
pub trait Navigator {
    fn push(&mut self, params: &QueryParams);
}

/// Build `path?query`, or just `path` for an empty query
pub fn location_for(path: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{params}")
    }
}

/// Navigator for HTTP handlers: records the location to redirect to
#[derive(Debug, Clone)]
pub struct RedirectNavigator {
    path: String,
    location: Option<String>,
}

impl RedirectNavigator {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            location: None,
        }
    }

    /// Location of the last push, if any
    pub fn into_location(self) -> Option<String> {
        self.location
    }
}

impl Navigator for RedirectNavigator {
    fn push(&mut self, params: &QueryParams) {
        self.location = Some(location_for(&self.path, params));
    }
}

/// In-memory back/forward stack of query strings
#[derive(Debug, Clone)]
pub struct SessionHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl SessionHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }
}

impl Navigator for SessionHistory {
    /// Pushing drops anything ahead of the cursor, like a browser does
    fn push(&mut self, params: &QueryParams) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(params.to_query_string());
        self.cursor = self.entries.len() - 1;
    }
}
