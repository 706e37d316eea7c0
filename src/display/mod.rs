//! Results display: animated figures, currency formatting, and the chart

mod animation;
mod chart;
mod format;

pub use animation::{
    step_interval, AnimationPhase, ValueAnimation, ANIMATION_DURATION, ANIMATION_STEPS,
};
pub use chart::{ChartRenderer, ChartSeries, ChartSlot};
pub use format::{format_currency, format_multiple, FormattedResult, CURRENCY_SYMBOL};

use crate::error::SipResult;
use crate::projection::{ProjectionResult, YearlySeries};

/// Animated results display plus the owned chart handle
///
/// The panel owns one animation per figure. Presenting a new projection
/// retargets every animation from whatever is currently on screen and swaps
/// the chart, so a recalculation landing mid-animation simply bends the run
/// toward the new totals.
pub struct ResultsPanel<C: ChartRenderer> {
    total_invested: ValueAnimation,
    total_returns: ValueAnimation,
    total_value: ValueAnimation,
    inflation_adjusted_value: ValueAnimation,
    wealth_multiple: ValueAnimation,
    required_contribution: Option<ValueAnimation>,
    chart: ChartSlot<C>,
}

impl<C: ChartRenderer> ResultsPanel<C> {
    /// A panel with every figure at zero and no chart yet
    pub fn new() -> Self {
        Self {
            total_invested: ValueAnimation::idle(0.0),
            total_returns: ValueAnimation::idle(0.0),
            total_value: ValueAnimation::idle(0.0),
            inflation_adjusted_value: ValueAnimation::idle(0.0),
            wealth_multiple: ValueAnimation::idle(0.0),
            required_contribution: None,
            chart: ChartSlot::empty(),
        }
    }

    /// Show a new projection: restart every animation toward its new value
    /// and rebuild the chart from the new series
    pub fn present<F>(
        &mut self,
        result: &ProjectionResult,
        series: &YearlySeries,
        build_chart: F,
    ) -> SipResult<()>
    where
        F: FnOnce() -> C,
    {
        self.total_invested.retarget(result.total_invested);
        self.total_returns.retarget(result.total_returns);
        self.total_value.retarget(result.total_value);
        self.inflation_adjusted_value
            .retarget(result.inflation_adjusted_value);
        self.wealth_multiple.retarget(result.wealth_multiple);

        // a non-goal projection clears the readout instead of leaving the
        // previous goal's figure on screen
        self.required_contribution = match result.required_monthly_contribution {
            Some(required) => {
                let mut anim = self
                    .required_contribution
                    .unwrap_or_else(|| ValueAnimation::idle(0.0));
                anim.retarget(required);
                Some(anim)
            }
            None => None,
        };

        self.chart
            .replace_with(&ChartSeries::from(series), build_chart)
    }

    /// Advance every animation one display step
    pub fn tick(&mut self) {
        self.total_invested.tick();
        self.total_returns.tick();
        self.total_value.tick();
        self.inflation_adjusted_value.tick();
        self.wealth_multiple.tick();
        if let Some(anim) = self.required_contribution.as_mut() {
            anim.tick();
        }
    }

    /// Freeze every animation at its currently displayed value
    pub fn cancel_animations(&mut self) {
        self.total_invested.cancel();
        self.total_returns.cancel();
        self.total_value.cancel();
        self.inflation_adjusted_value.cancel();
        self.wealth_multiple.cancel();
        if let Some(anim) = self.required_contribution.as_mut() {
            anim.cancel();
        }
    }

    /// Whether any figure is still stepping toward its target
    pub fn is_animating(&self) -> bool {
        self.total_invested.is_animating()
            || self.total_returns.is_animating()
            || self.total_value.is_animating()
            || self.inflation_adjusted_value.is_animating()
            || self.wealth_multiple.is_animating()
            || self
                .required_contribution
                .map_or(false, |anim| anim.is_animating())
    }

    /// Formatted strings for what the panel currently shows
    pub fn snapshot(&self) -> FormattedResult {
        FormattedResult::from_fields(
            self.total_invested.current(),
            self.total_returns.current(),
            self.total_value.current(),
            self.inflation_adjusted_value.current(),
            self.wealth_multiple.current(),
            self.required_contribution.as_ref().map(|a| a.current()),
        )
    }

    /// The live chart renderer, if one has been built
    pub fn chart(&self) -> Option<&C> {
        self.chart.renderer()
    }
}

impl<C: ChartRenderer> Default for ResultsPanel<C> {
    fn default() -> Self {
        Self::new()
    }
}
