//! Observability hook for layout computation.
//!
//! Each stage of the engine reports a typed record of its inputs and
//! outputs, so tests and debugging overlays can assert on intermediate
//! values instead of string-matching log output.

/// A typed record of one engine stage.
#[derive(Debug, Clone, PartialEq)]
pub enum StageTrace {
    /// Content selection finished.
    ContentSelected { groups: usize, products: usize },
    /// Effective units computed for both consumers.
    EffectiveUnits { column_units: f64, font_units: f64 },
    /// Column planning before policy.
    ColumnsPlanned { baseline: u32, demand: u32, auto: u32 },
    /// Policy applied to the planned count.
    PolicyApplied {
        auto: u32,
        adjustment: i32,
        columns: u32,
    },
    /// Font scaling finished.
    FontScaled {
        base: f64,
        column_penalty: u32,
        density_penalty: u32,
        size_px: u32,
    },
}

/// Receiver of per-stage records during a layout computation.
pub trait LayoutObserver {
    fn record(&mut self, trace: StageTrace);
}

/// Observer that discards every record; the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl LayoutObserver for NoopObserver {
    fn record(&mut self, _trace: StageTrace) {}
}

/// Observer that collects every record, for tests and debugging overlays.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    pub traces: Vec<StageTrace>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded trace for a stage, if that stage ran.
    pub fn find<F>(&self, predicate: F) -> Option<&StageTrace>
    where
        F: FnMut(&&StageTrace) -> bool,
    {
        self.traces.iter().find(predicate)
    }
}

impl LayoutObserver for TraceRecorder {
    fn record(&mut self, trace: StageTrace) {
        self.traces.push(trace);
    }
}
