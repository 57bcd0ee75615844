//! Boundary adapters from backend record shapes to [`Order`].
//!
//! Two incompatible remote shapes exist: a document store with camelCase
//! fields keyed by `clientId`, and a relational store keyed by
//! `plataforma_id` with the platform joined in. Neither is treated as
//! authoritative. Each converts into [`Order`] here so nothing downstream
//! branches on where a record came from; fields a shape lacks stay empty.
//!
//! Holidays and plans have one shape per backend as well and convert into
//! [`Holiday`] and [`HolidayPlan`] the same way.

use planificador_calendar::CalendarDate;
use planificador_holidays::{Holiday, HolidayPlan};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::RecordError;
use crate::record::Order;

/// Which backend shape a payload uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    /// Document store, camelCase fields (`clientId`, `receptionDate`, ...).
    Document,
    /// Relational store, `plataforma_id` and `fecha` with a joined `plataforma`.
    Relational,
}

impl RecordSource {
    /// Short name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            RecordSource::Document => "document",
            RecordSource::Relational => "relational",
        }
    }
}

/// An order as stored in the document backend.
///
/// Every field tolerates both a missing key and an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentOrder {
    /// Document id.
    pub id: Option<String>,
    /// Client the order belongs to.
    pub client_id: Option<String>,
    /// Board cell date, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Whether anything ships on this cell.
    pub delivers: Option<bool>,
    /// Date the client receives the goods.
    pub reception_date: Option<String>,
    /// Reception time, `HH:MM` or `HH:MM:SS`.
    pub reception_time: Option<String>,
    /// Date the goods are manufactured.
    pub manufacturing_date: Option<String>,
    /// Free-text manufacturing notes.
    pub manufacturing_notes: Option<String>,
    /// Date the truck is loaded.
    pub loading_date: Option<String>,
    /// Carrier name.
    pub transport_company: Option<String>,
    /// Free-text notes for the carrier.
    pub transport_comments: Option<String>,
}

/// A delivery row as returned by the relational backend, platform joined.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelationalOrder {
    /// Row id, numeric or text.
    pub id: Value,
    /// Foreign key into `plataformas`.
    pub plataforma_id: Value,
    /// Delivery date.
    pub fecha: Option<String>,
    /// The joined platform, when selected.
    pub plataforma: Option<Platform>,
}

/// The joined `plataforma` row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Platform {
    /// Platform id.
    pub id: Value,
    /// Platform name.
    pub nombre: Option<String>,
    /// Name of the client that owns the platform.
    pub cliente_nombre: Option<String>,
    /// Carrier that serves the platform.
    pub empresa_transporte: Option<String>,
}

impl From<DocumentOrder> for Order {
    fn from(doc: DocumentOrder) -> Self {
        Order {
            date: optional_date("date", doc.date.as_deref()),
            reception_date: optional_date("receptionDate", doc.reception_date.as_deref()),
            manufacturing_date: optional_date(
                "manufacturingDate",
                doc.manufacturing_date.as_deref(),
            ),
            loading_date: optional_date("loadingDate", doc.loading_date.as_deref()),
            id: doc.id.unwrap_or_default(),
            client_id: doc.client_id.unwrap_or_default(),
            client_name: None,
            delivers: doc.delivers.unwrap_or_default(),
            reception_time: doc.reception_time.unwrap_or_default(),
            manufacturing_notes: doc.manufacturing_notes.unwrap_or_default(),
            transport_company: doc.transport_company.unwrap_or_default(),
            transport_comments: doc.transport_comments.unwrap_or_default(),
        }
    }
}

impl From<RelationalOrder> for Order {
    fn from(row: RelationalOrder) -> Self {
        let platform = row.plataforma.unwrap_or_default();
        let client_id = match id_string(&row.plataforma_id) {
            id if id.is_empty() => id_string(&platform.id),
            id => id,
        };
        Order {
            id: id_string(&row.id),
            client_id,
            client_name: platform.cliente_nombre.or(platform.nombre),
            date: optional_date("fecha", row.fecha.as_deref()),
            // Every row in the deliveries table is a delivery.
            delivers: true,
            transport_company: platform.empresa_transporte.unwrap_or_default(),
            ..Order::default()
        }
    }
}

/// A holiday as stored in the document backend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocumentHoliday {
    /// Document id.
    pub id: Option<String>,
    /// Holiday date, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Display name.
    pub name: Option<String>,
}

/// A `festivos` row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelationalHoliday {
    /// Row id, numeric or text.
    pub id: Value,
    /// Holiday date.
    pub fecha: Option<String>,
    /// Display name.
    pub nombre: Option<String>,
}

/// A holiday plan as stored in the document backend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentPlan {
    /// Document id.
    pub id: Option<String>,
    /// Plan name.
    pub name: Option<String>,
    /// First day, inclusive.
    pub start_date: Option<String>,
    /// Last day, inclusive.
    pub end_date: Option<String>,
}

/// A `planes_festivos` row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelationalPlan {
    /// Row id, numeric or text.
    pub id: Value,
    /// Plan name.
    pub nombre: Option<String>,
    /// First day, inclusive.
    pub fecha_inicio: Option<String>,
    /// Last day, inclusive.
    pub fecha_fin: Option<String>,
}

impl TryFrom<DocumentHoliday> for Holiday {
    type Error = RecordError;

    fn try_from(doc: DocumentHoliday) -> Result<Self, Self::Error> {
        let id = doc.id.unwrap_or_default();
        let date = required_date("holiday", &id, "date", doc.date.as_deref())?;
        Ok(Holiday::new(id, date, doc.name.unwrap_or_default()))
    }
}

impl TryFrom<RelationalHoliday> for Holiday {
    type Error = RecordError;

    fn try_from(row: RelationalHoliday) -> Result<Self, Self::Error> {
        let id = id_string(&row.id);
        let date = required_date("holiday", &id, "fecha", row.fecha.as_deref())?;
        Ok(Holiday::new(id, date, row.nombre.unwrap_or_default()))
    }
}

impl TryFrom<DocumentPlan> for HolidayPlan {
    type Error = RecordError;

    fn try_from(doc: DocumentPlan) -> Result<Self, Self::Error> {
        let id = doc.id.unwrap_or_default();
        let start = required_date("plan", &id, "startDate", doc.start_date.as_deref())?;
        let end = required_date("plan", &id, "endDate", doc.end_date.as_deref())?;
        Ok(HolidayPlan::new(id, doc.name.unwrap_or_default(), start, end)?)
    }
}

impl TryFrom<RelationalPlan> for HolidayPlan {
    type Error = RecordError;

    fn try_from(row: RelationalPlan) -> Result<Self, Self::Error> {
        let id = id_string(&row.id);
        let start = required_date("plan", &id, "fecha_inicio", row.fecha_inicio.as_deref())?;
        let end = required_date("plan", &id, "fecha_fin", row.fecha_fin.as_deref())?;
        Ok(HolidayPlan::new(id, row.nombre.unwrap_or_default(), start, end)?)
    }
}

/// Decodes a JSON array of orders in the given backend shape.
///
/// # Errors
///
/// Returns [`RecordError::Payload`] if `json` is not an array of objects of
/// that shape. Individual malformed dates do not fail the decode; they read
/// as missing.
pub fn parse_orders(json: &str, source: RecordSource) -> Result<Vec<Order>, RecordError> {
    let payload_err = |e: serde_json::Error| RecordError::Payload {
        source_name: source.name(),
        reason: e.to_string(),
    };
    let orders: Vec<Order> = match source {
        RecordSource::Document => serde_json::from_str::<Vec<DocumentOrder>>(json)
            .map_err(payload_err)?
            .into_iter()
            .map(Order::from)
            .collect(),
        RecordSource::Relational => serde_json::from_str::<Vec<RelationalOrder>>(json)
            .map_err(payload_err)?
            .into_iter()
            .map(Order::from)
            .collect(),
    };
    debug!(source = source.name(), n_orders = orders.len(), "decoded orders");
    Ok(orders)
}

/// Decodes a JSON array of holidays in the given backend shape.
///
/// Rows without a valid date are skipped with a warning.
///
/// # Errors
///
/// Returns [`RecordError::Payload`] if `json` is not an array of objects of
/// that shape.
pub fn parse_holidays(json: &str, source: RecordSource) -> Result<Vec<Holiday>, RecordError> {
    let holidays = match source {
        RecordSource::Document => convert_rows::<DocumentHoliday, Holiday>(json, source)?,
        RecordSource::Relational => convert_rows::<RelationalHoliday, Holiday>(json, source)?,
    };
    debug!(source = source.name(), n_holidays = holidays.len(), "decoded holidays");
    Ok(holidays)
}

/// Decodes a JSON array of holiday plans in the given backend shape.
///
/// Rows that lack a date, have a blank name, or end before they start are
/// skipped with a warning; the remaining plans all satisfy the
/// [`HolidayPlan`] invariants.
///
/// # Errors
///
/// Returns [`RecordError::Payload`] if `json` is not an array of objects of
/// that shape.
pub fn parse_plans(json: &str, source: RecordSource) -> Result<Vec<HolidayPlan>, RecordError> {
    let plans = match source {
        RecordSource::Document => convert_rows::<DocumentPlan, HolidayPlan>(json, source)?,
        RecordSource::Relational => convert_rows::<RelationalPlan, HolidayPlan>(json, source)?,
    };
    debug!(source = source.name(), n_plans = plans.len(), "decoded plans");
    Ok(plans)
}

fn convert_rows<S, T>(json: &str, source: RecordSource) -> Result<Vec<T>, RecordError>
where
    S: DeserializeOwned,
    T: TryFrom<S, Error = RecordError>,
{
    let rows: Vec<S> = serde_json::from_str(json).map_err(|e| RecordError::Payload {
        source_name: source.name(),
        reason: e.to_string(),
    })?;
    Ok(rows
        .into_iter()
        .filter_map(|row| match T::try_from(row) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(source = source.name(), error = %e, "skipping record");
                None
            }
        })
        .collect())
}

fn required_date(
    kind: &'static str,
    id: &str,
    field: &'static str,
    raw: Option<&str>,
) -> Result<CalendarDate, RecordError> {
    optional_date(field, raw).ok_or_else(|| RecordError::MissingDate {
        kind,
        id: id.to_string(),
        field,
    })
}

fn optional_date(field: &str, raw: Option<&str>) -> Option<CalendarDate> {
    let raw = raw.filter(|r| !r.trim().is_empty())?;
    match CalendarDate::parse(raw) {
        Ok(date) => Some(date),
        Err(e) => {
            debug!(field, raw, error = %e, "ignoring unparseable date");
            None
        }
    }
}

fn id_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use planificador_holidays::HolidayError;

    use super::*;

    #[test]
    fn document_defaults_for_missing_fields() {
        let json = r#"[{"id":"o1","clientId":"cli1","date":"2024-12-23"}]"#;
        let orders = parse_orders(json, RecordSource::Document).unwrap();
        let o = &orders[0];
        assert_eq!(o.client_id, "cli1");
        assert_eq!(o.date, Some("2024-12-23".parse().unwrap()));
        assert!(!o.delivers);
        assert_eq!(o.loading_date, None);
        assert_eq!(o.reception_time, "");
    }

    #[test]
    fn document_ignores_unknown_fields() {
        let json = r#"[{"id":"o1","clientId":"c","updatedAt":"2024-12-20T10:00:00Z"}]"#;
        assert_eq!(parse_orders(json, RecordSource::Document).unwrap().len(), 1);
    }

    #[test]
    fn malformed_date_reads_as_missing() {
        let json = r#"[{"id":"o1","clientId":"c","date":"2024-12-23","loadingDate":"mañana"}]"#;
        let orders = parse_orders(json, RecordSource::Document).unwrap();
        assert_eq!(orders[0].loading_date, None);
        assert!(orders[0].date.is_some());
    }

    #[test]
    fn relational_numeric_ids() {
        let json = r#"[{"id":7,"plataforma_id":3,"fecha":"2024-12-23",
            "plataforma":{"id":3,"nombre":"Plataforma Sur","cliente_nombre":"Mercadona","empresa_transporte":"Innova"}}]"#;
        let orders = parse_orders(json, RecordSource::Relational).unwrap();
        let o = &orders[0];
        assert_eq!(o.id, "7");
        assert_eq!(o.client_id, "3");
        assert_eq!(o.client_name.as_deref(), Some("Mercadona"));
        assert_eq!(o.transport_company, "Innova");
        assert!(o.delivers);
    }

    #[test]
    fn relational_client_falls_back_to_platform() {
        let json = r#"[{"id":"e1","fecha":null,"plataforma":{"id":"p9","nombre":"Norte"}}]"#;
        let o = &parse_orders(json, RecordSource::Relational).unwrap()[0];
        assert_eq!(o.client_id, "p9");
        assert_eq!(o.client_name.as_deref(), Some("Norte"));
        assert_eq!(o.date, None);
    }

    #[test]
    fn document_null_fields_read_as_empty() {
        let json = r#"[{"id":"o1","clientId":"c","date":"2024-12-23","delivers":null,
            "loadingDate":null,"receptionTime":null,"transportCompany":null}]"#;
        let o = &parse_orders(json, RecordSource::Document).unwrap()[0];
        assert_eq!(o.date, Some("2024-12-23".parse().unwrap()));
        assert_eq!(o.loading_date, None);
        assert!(!o.delivers);
        assert_eq!(o.reception_time, "");
        assert_eq!(o.transport_company, "");
    }

    #[test]
    fn document_plan_converts() {
        let doc = DocumentPlan {
            id: Some("p1".to_string()),
            name: Some(" Navidad ".to_string()),
            start_date: Some("2024-12-24".to_string()),
            end_date: Some("2024-12-26".to_string()),
        };
        let plan = HolidayPlan::try_from(doc).unwrap();
        assert_eq!(plan.name(), "Navidad");
        assert_eq!(plan.len_days(), 3);
    }

    #[test]
    fn relational_plan_inverted_is_rejected() {
        let row = RelationalPlan {
            id: Value::from(4),
            nombre: Some("Puente".to_string()),
            fecha_inicio: Some("2024-12-09".to_string()),
            fecha_fin: Some("2024-12-06".to_string()),
        };
        assert!(matches!(
            HolidayPlan::try_from(row),
            Err(RecordError::Plan(HolidayError::InvertedPlan { .. }))
        ));
    }

    #[test]
    fn plan_without_end_is_rejected() {
        let doc = DocumentPlan {
            id: Some("p2".to_string()),
            name: Some("Semana Santa".to_string()),
            start_date: Some("2025-04-14".to_string()),
            end_date: None,
        };
        assert_eq!(
            HolidayPlan::try_from(doc).unwrap_err(),
            RecordError::MissingDate {
                kind: "plan",
                id: "p2".to_string(),
                field: "endDate",
            }
        );
    }

    #[test]
    fn relational_holiday_converts() {
        let row = RelationalHoliday {
            id: Value::from(12),
            fecha: Some("2024-12-25".to_string()),
            nombre: Some("Navidad".to_string()),
        };
        let holiday = Holiday::try_from(row).unwrap();
        assert_eq!(holiday.id, "12");
        assert_eq!(holiday.date, "2024-12-25".parse().unwrap());
        assert_eq!(holiday.name, "Navidad");
    }

    #[test]
    fn not_an_array() {
        let err = parse_orders(r#"{"id":"o1"}"#, RecordSource::Document).unwrap_err();
        assert!(matches!(
            err,
            RecordError::Payload {
                source_name: "document",
                ..
            }
        ));
    }
}
