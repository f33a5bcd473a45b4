//! Document loader: obtains SVG text and keeps the current render tree
//!
//! Thin stateful shell around the conversion engine, mirroring a host
//! component's lifecycle. Inline markup rebuilds immediately; fetched
//! markup goes through generation-stamped tickets so that only the most
//! recently issued fetch may commit (last-issued-wins), and nothing
//! commits after the loader has been shut down.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::SvgOptions;
use crate::error::SvgError;
use crate::tree::RenderNode;

/// Cancellation handle passed into fetch operations.
///
/// Tripping the token models the end of the owning component's lifetime:
/// results that arrive afterwards are discarded instead of committed.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Supplies SVG text for a URI. Network mechanics live outside this
/// crate; implementations should observe `cancel` and may abort early
/// once it trips.
pub trait SvgFetcher {
    fn fetch_text(&mut self, uri: &str, cancel: &CancelToken) -> Result<String, SvgError>;
}

/// Handle for one issued fetch. A ticket commits only while it is still
/// the most recently issued one and its token has not tripped.
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
    cancel: CancelToken,
}

impl FetchTicket {
    /// The token to hand to the fetch operation.
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }
}

/// Owns the current document text, options, and render tree.
#[derive(Debug, Default)]
pub struct DocumentLoader {
    options: SvgOptions,
    cancel: CancelToken,
    generation: u64,
    text: Option<String>,
    tree: Option<RenderNode>,
}

impl DocumentLoader {
    pub fn new(options: SvgOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The render tree from the last successful pass, if any.
    pub fn tree(&self) -> Option<&RenderNode> {
        self.tree.as_ref()
    }

    pub fn options(&self) -> &SvgOptions {
        &self.options
    }

    /// Supply inline SVG markup and rebuild immediately. Inline text
    /// takes precedence over whatever was loaded before.
    pub fn set_inline(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
        self.rebuild();
    }

    /// Change the global fill override and rebuild from the current text.
    pub fn set_fill(&mut self, fill: impl Into<String>) {
        self.options.fill = Some(fill.into());
        self.rebuild();
    }

    /// Replace all options and rebuild from the current text.
    pub fn set_options(&mut self, options: SvgOptions) {
        self.options = options;
        self.rebuild();
    }

    /// Issue a new fetch, superseding any fetch still in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket {
            generation: self.generation,
            cancel: self.cancel.clone(),
        }
    }

    /// Commit a completed fetch.
    ///
    /// Superseded tickets and tickets whose token tripped are discarded:
    /// the winner is the last fetch issued, not the last one to resolve.
    /// A failed acquisition resets state to "no document".
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<String, SvgError>) {
        if ticket.cancel.is_cancelled() || ticket.generation != self.generation {
            tracing::debug!(
                generation = ticket.generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return;
        }
        match result {
            Ok(text) => self.set_inline(text),
            Err(error) => {
                tracing::error!(%error, "svg acquisition failed");
                self.text = None;
                self.tree = None;
            }
        }
    }

    /// Drive one fetch to completion through `fetcher`.
    pub fn load(&mut self, fetcher: &mut dyn SvgFetcher, uri: &str) {
        let ticket = self.begin_fetch();
        let result = fetcher.fetch_text(uri, &ticket.cancel);
        self.complete_fetch(ticket, result);
    }

    /// End the loader's lifetime. Fetches still in flight will find
    /// their token tripped and be discarded.
    pub fn shutdown(&mut self) {
        self.cancel.cancel();
    }

    fn rebuild(&mut self) {
        self.tree = match &self.text {
            Some(text) => crate::render_tree(text, &self.options),
            None => None,
        };
    }
}
