use std::io::Write;

use shared::error::RenderError;
use tracing::{error, info};

use crate::{
    display::ItemDisplay,
    load_state::{LoadEvent, LoadState},
    source::CollectionSource,
};

/// Fixed text a container shows around its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLabels {
    pub heading: &'static str,
    pub loading: &'static str,
    pub failed: &'static str,
}

pub const POST_LABELS: ListLabels = ListLabels {
    heading: "Posts",
    loading: "Loading posts...",
    failed: "Something went wrong while loading posts.",
};

/// Owns one collection load: fetched once on mount, rendered any number of times.
pub struct ListContainer<S: CollectionSource> {
    source: S,
    labels: ListLabels,
    state: LoadState<S::Item>,
    mounted: bool,
}

impl<S: CollectionSource> ListContainer<S> {
    pub fn new(source: S, labels: ListLabels) -> Self {
        Self {
            source,
            labels,
            state: LoadState::Loading,
            mounted: false,
        }
    }

    pub fn state(&self) -> &LoadState<S::Item> {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs the single load attempt. Later calls are no-ops; failures are
    /// logged and kept in the state, never returned.
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        self.state = std::mem::take(&mut self.state).transition(LoadEvent::Started);
        let outcome = self.source.fetch().await;
        match &outcome {
            Ok(items) => info!(count = items.len(), "collection loaded"),
            Err(err) => error!(kind = err.kind(), error = %err, "failed to load collection"),
        }
        self.state = std::mem::take(&mut self.state).transition(LoadEvent::Finished(outcome));
    }
}

impl<S> ListContainer<S>
where
    S: CollectionSource,
    S::Item: ItemDisplay,
{
    pub fn render(&self, out: &mut dyn Write) -> Result<(), RenderError> {
        if self.state.failure().is_some() {
            writeln!(out, "{}", self.labels.failed)?;
            return Ok(());
        }

        writeln!(out, "## {}", self.labels.heading)?;
        let items = self.state.items();
        if items.is_empty() {
            writeln!(out, "{}", self.labels.loading)?;
            return Ok(());
        }
        for item in items {
            item.display(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/container_tests.rs"]
mod tests;
