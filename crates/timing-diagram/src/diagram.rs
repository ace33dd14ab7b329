//! Layout of a payment's HTLCs on a linear time axis.

use crate::payment::Htlc;
use crate::payment::HtlcStatus;
use crate::payment::Payment;
use crate::Error;
use crate::Result;
use std::collections::BTreeMap;

/// Pixels available to the span between the first attempt and the last resolution.
pub const AXIS_WIDTH_PX: i64 = 1500;

/// Padding added after the last resolution so still pending HTLCs stick out.
pub const END_PADDING_NS: i64 = 1_000_000_000;

/// Time axis of a diagram.
///
/// Kept in `i128` so that any pair of `i64` node timestamps, plus padding, can be subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAxis {
    /// Attempt time of the first HTLC.
    pub start_ns: i128,
    /// Latest resolve time plus [`END_PADDING_NS`].
    pub end_ns: i128,
    pub ns_per_px: i128,
}

impl TimeAxis {
    /// Returns `None` if there are no HTLCs to place.
    pub fn for_htlcs(htlcs: &[Htlc]) -> Option<Self> {
        let start_ns = htlcs.first()?.attempt_time_ns;
        let last_resolve_ns = htlcs
            .iter()
            .filter_map(Htlc::resolve_time_ns)
            .fold(start_ns, i64::max);

        let start_ns = i128::from(start_ns);
        let end_ns = i128::from(last_resolve_ns) + i128::from(END_PADDING_NS);

        // Never zero, even for a degenerate axis.
        let ns_per_px = ((end_ns - start_ns) / i128::from(AXIS_WIDTH_PX)).max(1);

        Some(Self {
            start_ns,
            end_ns,
            ns_per_px,
        })
    }

    /// Pixel offset of `time_ns` from the axis start, saturating at the `i64` range.
    pub fn offset_px(&self, time_ns: i128) -> i64 {
        let offset = (time_ns - self.start_ns) / self.ns_per_px;

        i64::try_from(offset).unwrap_or(if offset < 0 { i64::MIN } else { i64::MAX })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Green,
    Red,
    Grey,
}

impl BarColor {
    pub fn css(&self) -> &'static str {
        match self {
            BarColor::Green => "green",
            BarColor::Red => "red",
            BarColor::Grey => "grey",
        }
    }
}

impl From<HtlcStatus> for BarColor {
    fn from(status: HtlcStatus) -> Self {
        match status {
            HtlcStatus::Succeeded => BarColor::Green,
            HtlcStatus::Failed => BarColor::Red,
            HtlcStatus::InFlight => BarColor::Grey,
        }
    }
}

/// One row of the diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub start_px: i64,
    pub end_px: i64,
    pub color: BarColor,
    pub label: String,
}

impl Bar {
    pub fn width_px(&self) -> i64 {
        self.end_px - self.start_px
    }
}

/// Amounts delivered to the payee, keyed by route text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settlement {
    by_route: BTreeMap<String, i64>,
    total: i64,
}

impl Settlement {
    /// Fails without changing the tally if the route's amount or the total leaves the `i64` range.
    pub fn add(&mut self, route_text: &str, amt: i64) -> Result<()> {
        let overflow = || Error::SettledAmountOutOfRange(route_text.to_string());

        let total = self.total.checked_add(amt).ok_or_else(overflow)?;
        let route_amt = self
            .by_route
            .get(route_text)
            .copied()
            .unwrap_or_default()
            .checked_add(amt)
            .ok_or_else(overflow)?;

        self.by_route.insert(route_text.to_string(), route_amt);
        self.total = total;

        Ok(())
    }

    /// Routes in lexicographic order of their text.
    pub fn routes(&self) -> impl Iterator<Item = (&str, i64)> {
        self.by_route
            .iter()
            .map(|(route, amt)| (route.as_str(), *amt))
    }

    pub fn total(&self) -> i64 {
        self.total
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    pub payment_hash: String,
    pub axis: TimeAxis,
    /// In the order the node listed the HTLCs.
    pub bars: Vec<Bar>,
    pub settlement: Settlement,
}

impl Diagram {
    pub fn build(payment: &Payment) -> Result<Self> {
        let axis = TimeAxis::for_htlcs(&payment.htlcs)
            .ok_or_else(|| Error::NoHtlcs(payment.payment_hash.clone()))?;

        tracing::debug!(
            start_ns = axis.start_ns,
            end_ns = axis.end_ns,
            ns_per_px = axis.ns_per_px,
            "Computed time axis"
        );

        let mut bars = Vec::with_capacity(payment.htlcs.len());
        let mut settlement = Settlement::default();

        for (index, htlc) in payment.htlcs.iter().enumerate() {
            let route_text = htlc.route.text().ok_or_else(|| Error::EmptyRoute {
                payment_hash: payment.payment_hash.clone(),
                index,
            })?;

            let start_px = axis.offset_px(htlc.attempt_time_ns.into());
            let end_ns = htlc
                .resolve_time_ns()
                .map(i128::from)
                .unwrap_or(axis.end_ns);
            // a pending attempt made after the axis end gets an empty bar
            let end_px = axis.offset_px(end_ns).max(start_px);

            let mut label = format!("{} sat ({route_text})", htlc.route.total_amt);
            if let (HtlcStatus::Failed, Some(failure)) = (htlc.status, &htlc.failure) {
                label.push_str(&format!(
                    ": {} @ {}",
                    failure.code, failure.failure_source_index
                ));
            }

            if htlc.is_settled() {
                let amt = htlc.route.delivered_amt().unwrap_or_default();
                settlement.add(&route_text, amt)?;
            }

            tracing::trace!(index, start_px, end_px, status = ?htlc.status, "Placed htlc");

            bars.push(Bar {
                start_px,
                end_px,
                color: htlc.status.into(),
                label,
            });
        }

        Ok(Self {
            payment_hash: payment.payment_hash.clone(),
            axis,
            bars,
            settlement,
        })
    }
}
