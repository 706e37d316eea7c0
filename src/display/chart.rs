//! Chart collaborator boundary
//!
//! A renderer consumes a `ChartSeries` payload and owns whatever drawing
//! resources the visual needs. `ChartSlot` makes the single live renderer
//! explicit in the type system: replacing it drops the old instance before
//! the new one is built, so canvas-like resources never exist twice.

use crate::error::SipResult;
use crate::projection::YearlySeries;
use serde::Serialize;

/// Series payload in the shape chart collaborators consume
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Axis labels, "Year 0" through "Year N"
    pub labels: Vec<String>,
    /// Cumulative invested amounts, aligned with `labels`
    pub invested: Vec<f64>,
    /// Cumulative projected values, aligned with `labels`
    pub value: Vec<f64>,
}

impl From<&YearlySeries> for ChartSeries {
    fn from(series: &YearlySeries) -> Self {
        Self {
            labels: series.labels(),
            invested: series.invested(),
            value: series.values(),
        }
    }
}

/// A chart-rendering collaborator
///
/// Implementations own their drawing resources and release them on drop.
pub trait ChartRenderer {
    /// Draw the series this renderer was handed
    fn render(&mut self, series: &ChartSeries) -> SipResult<()>;
}

/// Owner of the single live chart instance
pub struct ChartSlot<C: ChartRenderer> {
    renderer: Option<C>,
}

impl<C: ChartRenderer> ChartSlot<C> {
    /// An empty slot with no chart yet
    pub fn empty() -> Self {
        Self { renderer: None }
    }

    /// Drop the current chart, then build a new one and render into it
    ///
    /// A render failure leaves the slot empty rather than keeping a chart
    /// that shows stale data.
    pub fn replace_with<F>(&mut self, series: &ChartSeries, build: F) -> SipResult<()>
    where
        F: FnOnce() -> C,
    {
        self.renderer = None;
        let mut renderer = build();
        renderer.render(series)?;
        self.renderer = Some(renderer);
        Ok(())
    }

    /// Drop the current chart without building a replacement
    pub fn clear(&mut self) {
        self.renderer = None;
    }

    pub fn renderer(&self) -> Option<&C> {
        self.renderer.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.renderer.is_none()
    }
}

impl<C: ChartRenderer> Default for ChartSlot<C> {
    fn default() -> Self {
        Self::empty()
    }
}
