//! Client x date lookup for the planner board.

use std::collections::BTreeMap;

use planificador_calendar::CalendarDate;
use tracing::debug;

use crate::record::Order;

/// Orders whose board date lies in `start..=end`, input order kept.
///
/// Orders without a board date are never visible.
pub fn filter_visible(orders: &[Order], start: CalendarDate, end: CalendarDate) -> Vec<&Order> {
    orders
        .iter()
        .filter(|o| o.date.is_some_and(|d| start <= d && d <= end))
        .collect()
}

/// Index of orders by client and board date.
///
/// Each cell holds at most one order. When several orders share a cell,
/// the last one indexed wins.
#[derive(Debug, Clone, Default)]
pub struct BoardIndex<'a> {
    cells: BTreeMap<&'a str, BTreeMap<CalendarDate, &'a Order>>,
}

impl<'a> BoardIndex<'a> {
    /// Indexes `orders`. Orders without a board date are skipped.
    pub fn build<I>(orders: I) -> Self
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut cells: BTreeMap<&'a str, BTreeMap<CalendarDate, &'a Order>> = BTreeMap::new();
        let mut replaced = 0_usize;
        for order in orders {
            let Some(date) = order.date else {
                continue;
            };
            if cells
                .entry(order.client_id.as_str())
                .or_default()
                .insert(date, order)
                .is_some()
            {
                replaced += 1;
            }
        }
        if replaced > 0 {
            debug!(replaced, "board cells held more than one order");
        }
        Self { cells }
    }

    /// The order at `(client_id, date)`, if any.
    pub fn cell(&self, client_id: &str, date: CalendarDate) -> Option<&'a Order> {
        self.cells.get(client_id)?.get(&date).copied()
    }

    /// One client's row, dates ascending.
    pub fn row(&self, client_id: &str) -> impl Iterator<Item = (CalendarDate, &'a Order)> + '_ {
        self.cells
            .get(client_id)
            .into_iter()
            .flat_map(|row| row.iter().map(|(d, o)| (*d, *o)))
    }

    /// Clients with at least one order, ascending.
    pub fn clients(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.cells.keys().copied()
    }

    /// Number of filled cells.
    pub fn n_cells(&self) -> usize {
        self.cells.values().map(BTreeMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn order(id: &str, client: &str, day: Option<&str>) -> Order {
        Order {
            id: id.to_string(),
            client_id: client.to_string(),
            date: day.map(date),
            ..Order::default()
        }
    }

    #[test]
    fn visible_window_inclusive() {
        let orders = vec![
            order("a", "c1", Some("2024-12-21")),
            order("b", "c1", Some("2024-12-22")),
            order("c", "c1", Some("2025-01-05")),
            order("d", "c1", Some("2025-01-06")),
            order("e", "c1", None),
        ];
        let ids: Vec<&str> = filter_visible(&orders, date("2024-12-22"), date("2025-01-05"))
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn cell_lookup() {
        let orders = vec![
            order("a", "cli1", Some("2024-12-23")),
            order("b", "cli2", Some("2024-12-23")),
        ];
        let index = BoardIndex::build(&orders);
        assert_eq!(index.cell("cli1", date("2024-12-23")).unwrap().id, "a");
        assert_eq!(index.cell("cli2", date("2024-12-23")).unwrap().id, "b");
        assert!(index.cell("cli1", date("2024-12-24")).is_none());
        assert!(index.cell("cli3", date("2024-12-23")).is_none());
        assert_eq!(index.n_cells(), 2);
    }

    #[test]
    fn last_order_wins_cell() {
        let orders = vec![
            order("first", "cli1", Some("2024-12-23")),
            order("second", "cli1", Some("2024-12-23")),
        ];
        let index = BoardIndex::build(&orders);
        assert_eq!(index.cell("cli1", date("2024-12-23")).unwrap().id, "second");
        assert_eq!(index.n_cells(), 1);
    }

    #[test]
    fn undated_orders_skipped() {
        let orders = vec![order("a", "cli1", None)];
        let index = BoardIndex::build(&orders);
        assert_eq!(index.n_cells(), 0);
        assert_eq!(index.clients().count(), 0);
    }

    #[test]
    fn row_is_ascending() {
        let orders = vec![
            order("late", "cli1", Some("2024-12-27")),
            order("early", "cli1", Some("2024-12-23")),
        ];
        let index = BoardIndex::build(&orders);
        let ids: Vec<&str> = index.row("cli1").map(|(_, o)| o.id.as_str()).collect();
        assert_eq!(ids, ["early", "late"]);
        assert_eq!(index.row("nobody").count(), 0);
    }
}
