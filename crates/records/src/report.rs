//! Loading report: deliverable orders grouped by loading date.

use planificador_holidays::{Holiday, is_holiday};
use tracing::debug;

use crate::group::{GroupKey, group_by_date};
use crate::record::{DateField, Order};

/// Which carriers to include in a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TransportFilter {
    /// Every carrier.
    #[default]
    All,
    /// Only orders shipped by this carrier (exact match).
    Company(String),
}

impl TransportFilter {
    /// Returns `true` if `order` passes the filter.
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            TransportFilter::All => true,
            TransportFilter::Company(name) => order.transport_company == *name,
        }
    }
}

/// Orders loaded on one day, or with no loading date yet.
#[derive(Debug, Clone)]
pub struct ReportGroup<'a> {
    /// Loading date, or [`GroupKey::Unassigned`].
    pub key: GroupKey,
    /// Name of the holiday falling on the loading date, if any.
    pub holiday: Option<String>,
    /// Orders in input order.
    pub orders: Vec<&'a Order>,
}

/// Builds the loading report.
///
/// Keeps orders that ship and have a carrier, narrowed by `transport`,
/// grouped by loading date with undated loads last. Groups whose date is a
/// holiday carry its name.
pub fn load_report<'a, I>(
    orders: I,
    transport: &TransportFilter,
    holidays: &[Holiday],
) -> Vec<ReportGroup<'a>>
where
    I: IntoIterator<Item = &'a Order>,
{
    let loadable = orders
        .into_iter()
        .filter(|o| o.is_loadable() && transport.matches(o));
    let groups: Vec<ReportGroup<'a>> = group_by_date(loadable, DateField::Loading)
        .into_vec()
        .into_iter()
        .map(|(key, orders)| ReportGroup {
            key,
            holiday: key
                .date()
                .and_then(|d| is_holiday(d, holidays))
                .map(|h| h.name.clone()),
            orders,
        })
        .collect();
    debug!(n_groups = groups.len(), "built loading report");
    groups
}
