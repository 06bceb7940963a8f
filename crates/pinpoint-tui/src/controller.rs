//! Search controller — the glue between input events, the feature store,
//! and the layer state machine.
//!
//! # Sequencing
//!
//! Every data-bearing background task is tagged with a monotonically
//! increasing sequence number when it is *issued*. Completions flow back
//! over an mpsc channel and are applied on the UI loop only if their number
//! is greater than the last applied one; anything else is stale and
//! discarded. The last-issued request therefore always wins, regardless of
//! completion order — fast typing cannot end with an old query's results on
//! screen. Superseded in-flight tasks are additionally aborted, but the
//! sequence check alone is sufficient if an abort races a completed send.
//!
//! Clearing the query consumes a sequence number too, so results of a fetch
//! issued before the clear can never repopulate the list afterwards.

use crate::layers::LayerStateMachine;
use crate::surface::MapSurface;
use pinpoint_core::{proximity, Feature, Query};
use pinpoint_source::{FeatureStore, SourceError};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::AbortHandle;

/// Completion of a background fetch task, tagged with its issue number.
#[derive(Debug)]
pub enum Outcome {
    /// A search fetch finished: the filtered matches plus the full
    /// collection they were drawn from.
    Results {
        seq: u64,
        query: Query,
        matches: Vec<Feature>,
        collection: Vec<Feature>,
    },
    /// A selection fetch finished: the chosen feature and its nearby set.
    Selection {
        seq: u64,
        feature: Feature,
        nearby: Vec<Feature>,
        collection: Vec<Feature>,
    },
    /// A fetch failed; the UI keeps its last valid value.
    Failed {
        seq: u64,
        context: &'static str,
        error: String,
    },
}

impl Outcome {
    fn seq(&self) -> u64 {
        match self {
            Outcome::Results { seq, .. }
            | Outcome::Selection { seq, .. }
            | Outcome::Failed { seq, .. } => *seq,
        }
    }
}

pub struct SearchController {
    store: Arc<FeatureStore>,
    tx: UnboundedSender<Outcome>,
    next_seq: u64,
    last_applied: u64,
    in_flight: Option<AbortHandle>,
    radius: f64,
    /// Current normalized query (empty = no filter).
    pub query: Query,
    /// Current result list, in collection order.
    pub results: Vec<Feature>,
    /// Last full collection seen by any completed fetch; used to rebuild the
    /// base layer when the query clears.
    collection: Vec<Feature>,
    /// Most recent fetch failure, for the status line.
    pub last_error: Option<String>,
}

impl SearchController {
    pub fn new(store: Arc<FeatureStore>, radius: f64) -> (Self, UnboundedReceiver<Outcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            store,
            tx,
            next_seq: 0,
            last_applied: 0,
            in_flight: None,
            radius,
            query: Query::default(),
            results: Vec::new(),
            collection: Vec::new(),
            last_error: None,
        };
        (controller, rx)
    }

    /// Seed the collection snapshot from the initial fetch (which happens
    /// before the loop starts) and place the base layer.
    ///
    /// A failed initial fetch is not fatal: the collection starts empty and
    /// the error goes to `last_error` for the status line.
    pub fn bootstrap(
        &mut self,
        initial: Result<Vec<Feature>, SourceError>,
        machine: &mut LayerStateMachine,
        surface: &mut dyn MapSurface,
    ) {
        match initial {
            Ok(features) => self.collection = features,
            Err(err) => {
                tracing::warn!(%err, "initial fetch failed, starting with an empty collection");
                self.last_error = Some(err.to_string());
            }
        }
        machine.clear_to_base(surface, &self.collection);
    }

    pub fn collection(&self) -> &[Feature] {
        &self.collection
    }

    /// Handle a text-input change.
    ///
    /// An empty query takes effect synchronously: the result list clears and
    /// the state machine drops to `Base`. A non-empty query issues a
    /// sequenced refresh-and-filter task.
    pub fn on_input(
        &mut self,
        raw: &str,
        machine: &mut LayerStateMachine,
        surface: &mut dyn MapSurface,
    ) {
        self.query = Query::parse(raw);

        if self.query.is_empty() {
            tracing::debug!("controller: query cleared");
            self.abort_in_flight();
            // Consume a sequence number so fetches issued before the clear
            // can never apply after it.
            self.last_applied = self.bump();
            self.results.clear();
            machine.clear_to_base(surface, &self.collection);
            return;
        }

        let seq = self.bump();
        let query = self.query.clone();
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        tracing::debug!(seq, query = %query, "controller: search issued");

        let handle = tokio::spawn(async move {
            let outcome = match store.refresh().await {
                Ok(collection) => Outcome::Results {
                    seq,
                    matches: query.filter(&collection),
                    query,
                    collection,
                },
                Err(err) => Outcome::Failed {
                    seq,
                    context: "search fetch",
                    error: err.to_string(),
                },
            };
            let _ = tx.send(outcome);
        });
        self.replace_in_flight(handle.abort_handle());
    }

    /// Handle a result selection: clear the query and list, then issue a
    /// sequenced re-fetch + proximity task for the chosen feature.
    ///
    /// If the re-fetch fails, the proximity search falls back to the store's
    /// cached collection so the selection still lands (last valid value).
    pub fn on_select(&mut self, feature: Feature) {
        self.query = Query::default();
        self.results.clear();

        let seq = self.bump();
        let radius = self.radius;
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        tracing::debug!(seq, feature = %feature.label(), "controller: selection issued");

        let handle = tokio::spawn(async move {
            let collection = match store.refresh().await {
                Ok(collection) => collection,
                Err(err) => {
                    tracing::warn!(%err, "selection fetch failed, using cached collection");
                    store.latest().await
                }
            };
            let nearby = proximity::nearby(&feature, &collection, radius);
            let _ = tx.send(Outcome::Selection {
                seq,
                feature,
                nearby,
                collection,
            });
        });
        self.replace_in_flight(handle.abort_handle());
    }

    /// Apply a completed outcome on the UI loop. Stale outcomes (issued
    /// before the last applied one) are discarded.
    pub fn apply(
        &mut self,
        outcome: Outcome,
        machine: &mut LayerStateMachine,
        surface: &mut dyn MapSurface,
    ) {
        let seq = outcome.seq();
        if seq <= self.last_applied {
            tracing::debug!(seq, last_applied = self.last_applied, "controller: stale outcome discarded");
            return;
        }
        self.last_applied = seq;

        match outcome {
            Outcome::Results {
                query,
                matches,
                collection,
                ..
            } => {
                tracing::debug!(seq, query = %query, matches = matches.len(), "controller: results applied");
                self.collection = collection;
                self.results = matches;
                self.last_error = None;
            }
            Outcome::Selection {
                feature,
                nearby,
                collection,
                ..
            } => {
                tracing::debug!(seq, feature = %feature.label(), nearby = nearby.len(), "controller: selection applied");
                self.collection = collection;
                self.last_error = None;
                machine.select(surface, feature, nearby);
            }
            Outcome::Failed { context, error, .. } => {
                // Keep the last valid list and layer state; just surface it.
                tracing::warn!(seq, context, error, "controller: fetch failed");
                self.last_error = Some(error);
            }
        }
    }

    fn bump(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    fn replace_in_flight(&mut self, handle: AbortHandle) {
        if let Some(previous) = self.in_flight.replace(handle) {
            previous.abort();
        }
    }

    fn abort_in_flight(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }
    }
}
