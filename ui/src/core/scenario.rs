//! Scenario state: the live parameter set and the recompute-on-edit contract.
//!
//! Every edit replaces the whole [`Snapshot`] (metrics and all four chart
//! images) before any observer runs, so callers only ever see a complete,
//! consistent result. Recomputation is synchronous; `&mut self` serialises
//! edits.

use std::fmt;

use tracing::debug;

use super::formula::{self, DerivedMetrics, BASELINE};
use super::params::{ParamId, ParameterSet};
use crate::charts::{ChartFamily, ChartImage, ChartSet, ChartStyle, SvgImage};

/// Result of one recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub params: ParameterSet,
    pub metrics: DerivedMetrics,
    pub charts: ChartSet,
    /// Increments once per recompute; the initial snapshot is revision 0.
    pub revision: u64,
}

impl Snapshot {
    fn build(params: ParameterSet, style: &ChartStyle, revision: u64) -> Self {
        let metrics = formula::compute(&params);
        let charts = ChartSet::render(&BASELINE, &metrics, style);
        Self {
            params,
            metrics,
            charts,
            revision,
        }
    }

    pub fn combined(&self) -> &SvgImage {
        &self.charts.combined
    }

    pub fn chart_image(&self, family: ChartFamily) -> &ChartImage {
        self.charts.standalone(family)
    }
}

/// Handle returned by [`Scenario::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Observer = Box<dyn FnMut(&Snapshot)>;

pub struct Scenario {
    params: ParameterSet,
    style: ChartStyle,
    snapshot: Snapshot,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: usize,
}

impl Scenario {
    pub fn new() -> Self {
        Self::with_style(ChartStyle::default())
    }

    pub fn with_style(style: ChartStyle) -> Self {
        let params = ParameterSet::defaults();
        let snapshot = Snapshot::build(params, &style, 0);
        Self {
            params,
            style,
            snapshot,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Apply one edit and recompute everything.
    pub fn set(&mut self, id: ParamId, value: f64) -> &Snapshot {
        self.params.set(id, value);
        debug!(param = %id, value, "parameter edited");
        self.recompute()
    }

    /// Restore every parameter to its default (one recompute).
    pub fn reset(&mut self) -> &Snapshot {
        self.params = ParameterSet::defaults();
        debug!("parameters reset to defaults");
        self.recompute()
    }

    /// Register a callback that receives every new snapshot.
    pub fn subscribe(&mut self, observer: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn recompute(&mut self) -> &Snapshot {
        let revision = self.snapshot.revision + 1;
        self.snapshot = Snapshot::build(self.params, &self.style, revision);
        debug!(
            revision,
            total_revenue = self.snapshot.metrics.total_revenue,
            "scenario recomputed"
        );

        for (_, observer) in self.observers.iter_mut() {
            observer(&self.snapshot);
        }
        &self.snapshot
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("params", &self.params)
            .field("revision", &self.snapshot.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}
