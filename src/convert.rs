//! Pure conversion functions: TOML config structs and CLI args -> crate API types.

use anyhow::{Context, Result, bail};
use tracing::warn;

use planificador_calendar::CalendarDate;
use planificador_holidays::{Holiday, HolidayPlan, find_plan};
use planificador_records::{RecordSource, TransportFilter};

use crate::cli::WindowArgs;
use crate::config::{BoardToml, HolidayToml, PlanToml, ReportToml};

/// Parses a record source name into the corresponding enum variant.
pub fn parse_source(s: &str) -> Result<RecordSource> {
    match s.to_lowercase().as_str() {
        "document" | "firestore" => Ok(RecordSource::Document),
        "relational" | "supabase" => Ok(RecordSource::Relational),
        other => bail!("unknown record source: {other:?} (expected document or relational)"),
    }
}

/// Builds holidays from the TOML entries. Missing ids default to the date.
pub fn build_holidays(entries: &[HolidayToml]) -> Result<Vec<Holiday>> {
    entries
        .iter()
        .map(|h| {
            let date = CalendarDate::parse(&h.date)
                .with_context(|| format!("holiday '{}' has an invalid date", h.name))?;
            let id = h.id.clone().unwrap_or_else(|| date.to_string());
            Ok(Holiday::new(id, date, h.name.clone()))
        })
        .collect()
}

/// Builds holiday plans from the TOML entries. Missing ids default to the name.
pub fn build_plans(entries: &[PlanToml]) -> Result<Vec<HolidayPlan>> {
    entries
        .iter()
        .map(|p| {
            let start = CalendarDate::parse(&p.start_date)
                .with_context(|| format!("plan '{}' has an invalid start_date", p.name))?;
            let end = CalendarDate::parse(&p.end_date)
                .with_context(|| format!("plan '{}' has an invalid end_date", p.name))?;
            let id = p.id.clone().unwrap_or_else(|| p.name.trim().to_string());
            HolidayPlan::new(id, p.name.clone(), start, end)
                .with_context(|| format!("invalid plan '{}'", p.name))
        })
        .collect()
}

/// Builds the carrier filter, warning about carriers not in the config.
pub fn build_transport_filter(transport: Option<&str>, report: &ReportToml) -> TransportFilter {
    match transport.map(str::trim) {
        None | Some("") => TransportFilter::All,
        Some(name) if name.eq_ignore_ascii_case("all") => TransportFilter::All,
        Some(name) => {
            if !report.carriers.iter().any(|c| c == name) {
                warn!(carrier = name, "carrier not listed in [report].carriers");
            }
            TransportFilter::Company(name.to_string())
        }
    }
}

/// Resolves the date window from CLI args, a named plan, or the board defaults.
///
/// A plan sets both ends. Otherwise each missing end falls back to `today`
/// shifted by the configured offset.
pub fn resolve_window(
    args: &WindowArgs,
    board: &BoardToml,
    plans: &[HolidayPlan],
    today: CalendarDate,
) -> Result<(CalendarDate, CalendarDate)> {
    if let Some(key) = args.plan.as_deref() {
        let plan = find_plan(plans, key)
            .with_context(|| format!("no holiday plan with id or name {key:?}"))?;
        return Ok((plan.start_date(), plan.end_date()));
    }
    let start = args.start.unwrap_or_else(|| today.add_days(board.lead_days));
    let end = args.end.unwrap_or_else(|| today.add_days(board.span_days));
    if start > end {
        warn!(%start, %end, "window starts after it ends; nothing to show");
    }
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn window(start: Option<&str>, end: Option<&str>, plan: Option<&str>) -> WindowArgs {
        WindowArgs {
            start: start.map(date),
            end: end.map(date),
            plan: plan.map(String::from),
        }
    }

    #[test]
    fn sources() {
        assert_eq!(parse_source("Document").unwrap(), RecordSource::Document);
        assert_eq!(parse_source("supabase").unwrap(), RecordSource::Relational);
        assert!(parse_source("mongo").is_err());
    }

    #[test]
    fn holiday_id_defaults_to_date() {
        let holidays = build_holidays(&[HolidayToml {
            id: None,
            date: "2024-12-25".to_string(),
            name: "Navidad".to_string(),
        }])
        .unwrap();
        assert_eq!(holidays[0].id, "2024-12-25");
    }

    #[test]
    fn bad_holiday_date() {
        let err = build_holidays(&[HolidayToml {
            id: None,
            date: "25/12/2024".to_string(),
            name: "Navidad".to_string(),
        }])
        .unwrap_err();
        assert!(format!("{err:#}").contains("holiday 'Navidad' has an invalid date"));
    }

    #[test]
    fn inverted_plan_rejected() {
        let err = build_plans(&[PlanToml {
            id: None,
            name: "Al revés".to_string(),
            start_date: "2024-12-09".to_string(),
            end_date: "2024-12-06".to_string(),
        }])
        .unwrap_err();
        assert!(format!("{err:#}").contains("before it starts"), "{err:#}");
    }

    #[test]
    fn transport_filter() {
        let report = ReportToml::default();
        assert_eq!(build_transport_filter(None, &report), TransportFilter::All);
        assert_eq!(build_transport_filter(Some("all"), &report), TransportFilter::All);
        assert_eq!(
            build_transport_filter(Some(" Innova "), &report),
            TransportFilter::Company("Innova".to_string())
        );
    }

    #[test]
    fn window_defaults_from_board() {
        let (start, end) = resolve_window(
            &window(None, None, None),
            &BoardToml::default(),
            &[],
            date("2024-12-24"),
        )
        .unwrap();
        assert_eq!(start, date("2024-12-22"));
        assert_eq!(end, date("2025-01-05"));
    }

    #[test]
    fn window_partial_override() {
        let (start, end) = resolve_window(
            &window(Some("2024-12-01"), None, None),
            &BoardToml::default(),
            &[],
            date("2024-12-24"),
        )
        .unwrap();
        assert_eq!(start, date("2024-12-01"));
        assert_eq!(end, date("2025-01-05"));
    }

    #[test]
    fn window_from_plan() {
        let plans =
            vec![HolidayPlan::new("dic", "Puente", date("2024-12-06"), date("2024-12-09")).unwrap()];
        let (start, end) = resolve_window(
            &window(None, None, Some("Puente")),
            &BoardToml::default(),
            &plans,
            date("2024-12-24"),
        )
        .unwrap();
        assert_eq!((start, end), (date("2024-12-06"), date("2024-12-09")));
        assert!(
            resolve_window(
                &window(None, None, Some("missing")),
                &BoardToml::default(),
                &plans,
                date("2024-12-24"),
            )
            .is_err()
        );
    }
}
