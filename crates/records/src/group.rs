//! Stable grouping of dated records by one of their date fields.

use std::collections::BTreeMap;
use std::fmt;

use planificador_calendar::CalendarDate;

use crate::record::DatedRecord;

/// Key of a date group.
///
/// Ordering puts every `Date` before `Unassigned`, dates ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    /// Records whose selected field holds this date.
    Date(CalendarDate),
    /// Records with the selected field empty or unparseable.
    Unassigned,
}

impl GroupKey {
    /// Returns the date, or `None` for [`GroupKey::Unassigned`].
    pub fn date(self) -> Option<CalendarDate> {
        match self {
            GroupKey::Date(d) => Some(d),
            GroupKey::Unassigned => None,
        }
    }
}

impl From<Option<CalendarDate>> for GroupKey {
    fn from(date: Option<CalendarDate>) -> Self {
        date.map_or(GroupKey::Unassigned, GroupKey::Date)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Date(d) => write!(f, "{d}"),
            GroupKey::Unassigned => f.write_str("unassigned"),
        }
    }
}

/// Records grouped by date, borrowed from the caller's slice.
///
/// Within each group, records keep their input order.
#[derive(Debug, Clone)]
pub struct DateGroups<'a, R> {
    groups: BTreeMap<GroupKey, Vec<&'a R>>,
}

impl<'a, R> DateGroups<'a, R> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no records were grouped.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = GroupKey> + '_ {
        self.groups.keys().copied()
    }

    /// Records under `key`, or an empty slice.
    pub fn get(&self, key: GroupKey) -> &[&'a R] {
        self.groups.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Records with no usable date.
    pub fn unassigned(&self) -> &[&'a R] {
        self.get(GroupKey::Unassigned)
    }

    /// Groups in display order.
    pub fn iter(&self) -> impl Iterator<Item = (GroupKey, &[&'a R])> + '_ {
        self.groups.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Consumes the grouping into `(key, records)` pairs in display order.
    pub fn into_vec(self) -> Vec<(GroupKey, Vec<&'a R>)> {
        self.groups.into_iter().collect()
    }
}

/// Groups records by an arbitrary date key.
///
/// Records for which `key` returns `None` land under
/// [`GroupKey::Unassigned`]; none are dropped.
pub fn group_by<'a, R, I, F>(records: I, key: F) -> DateGroups<'a, R>
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
    F: Fn(&R) -> Option<CalendarDate>,
{
    let mut groups: BTreeMap<GroupKey, Vec<&'a R>> = BTreeMap::new();
    for record in records {
        groups
            .entry(GroupKey::from(key(record)))
            .or_default()
            .push(record);
    }
    DateGroups { groups }
}

/// Groups records by the date stored in `field`.
///
/// # Example
///
/// ```
/// use planificador_records::{DateField, GroupKey, Order, group_by_date};
///
/// let orders = vec![
///     Order { id: "a".into(), date: Some("2024-01-02".parse().unwrap()), ..Order::default() },
///     Order { id: "b".into(), date: Some("2024-01-01".parse().unwrap()), ..Order::default() },
///     Order { id: "c".into(), date: Some("2024-01-02".parse().unwrap()), ..Order::default() },
/// ];
/// let groups = group_by_date(&orders, DateField::Delivery);
/// let keys: Vec<String> = groups.keys().map(|k| k.to_string()).collect();
/// assert_eq!(keys, ["2024-01-01", "2024-01-02"]);
/// let second: Vec<&str> = groups
///     .get(GroupKey::Date("2024-01-02".parse().unwrap()))
///     .iter()
///     .map(|o| o.id.as_str())
///     .collect();
/// assert_eq!(second, ["a", "c"]);
/// ```
pub fn group_by_date<'a, R, I>(records: I, field: R::Field) -> DateGroups<'a, R>
where
    R: DatedRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    group_by(records, |r| r.date_of(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Shipment {
        name: &'static str,
        date: &'static str,
    }

    impl DatedRecord for Shipment {
        type Field = ();

        fn date_of(&self, _: ()) -> Option<CalendarDate> {
            CalendarDate::parse(self.date).ok()
        }
    }

    fn shipments() -> Vec<Shipment> {
        vec![
            Shipment { name: "a", date: "2024-01-02" },
            Shipment { name: "b", date: "" },
            Shipment { name: "c", date: "2024-01-01" },
            Shipment { name: "d", date: "2024-01-02" },
            Shipment { name: "e", date: "garbage" },
        ]
    }

    fn names(records: &[&Shipment]) -> Vec<&'static str> {
        records.iter().map(|s| s.name).collect()
    }

    #[test]
    fn keys_ascending_unassigned_last() {
        let data = shipments();
        let groups = group_by_date(&data, ());
        let keys: Vec<String> = groups.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, ["2024-01-01", "2024-01-02", "unassigned"]);
    }

    #[test]
    fn stable_within_group() {
        let data = shipments();
        let groups = group_by_date(&data, ());
        let key = GroupKey::Date("2024-01-02".parse().unwrap());
        assert_eq!(names(groups.get(key)), ["a", "d"]);
    }

    #[test]
    fn missing_and_malformed_are_unassigned() {
        let data = shipments();
        let groups = group_by_date(&data, ());
        assert_eq!(names(groups.unassigned()), ["b", "e"]);
    }

    #[test]
    fn nothing_dropped() {
        let data = shipments();
        let groups = group_by_date(&data, ());
        let total: usize = groups.iter().map(|(_, v)| v.len()).sum();
        assert_eq!(total, data.len());
    }

    #[test]
    fn empty_input() {
        let data: Vec<Shipment> = Vec::new();
        let groups = group_by_date(&data, ());
        assert!(groups.is_empty());
        assert!(groups.unassigned().is_empty());
    }

    #[test]
    fn custom_key() {
        let data = shipments();
        let groups = group_by(&data, |s| {
            CalendarDate::parse(s.date).ok().map(|d| d.add_days(-1))
        });
        let key = GroupKey::Date("2023-12-31".parse().unwrap());
        assert_eq!(names(groups.get(key)), ["c"]);
    }

    #[test]
    fn key_conversions() {
        assert_eq!(GroupKey::from(None), GroupKey::Unassigned);
        let d: CalendarDate = "2024-05-01".parse().unwrap();
        assert_eq!(GroupKey::from(Some(d)).date(), Some(d));
        assert!(GroupKey::Date(CalendarDate::MAX) < GroupKey::Unassigned);
    }
}
