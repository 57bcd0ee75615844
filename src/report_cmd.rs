//! Report command: loading report for a file of orders.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use planificador_calendar::{
    CalendarDate, day_of_week_label, format_display_date, format_time_short,
};
use planificador_records::{
    Order, ReportGroup, TransportFilter, filter_visible, load_report, parse_orders,
};

use crate::cli::ReportArgs;
use crate::config;
use crate::convert;

/// Run the report command.
pub fn run(args: ReportArgs, config_path: Option<&Path>) -> Result<()> {
    let _cmd = info_span!("report").entered();
    let config = config::load(config_path)?;
    let holidays = convert::build_holidays(&config.holidays)?;
    let plans = convert::build_plans(&config.plans)?;
    let source = convert::parse_source(&args.source)?;
    let transport = convert::build_transport_filter(args.transport.as_deref(), &config.report);
    let (start, end) =
        convert::resolve_window(&args.window, &config.board, &plans, CalendarDate::today())?;

    info!(path = %args.orders.display(), source = source.name(), "reading orders");
    let json = std::fs::read_to_string(&args.orders)
        .with_context(|| format!("failed to read orders: {}", args.orders.display()))?;
    let orders = parse_orders(&json, source)
        .with_context(|| format!("failed to decode orders: {}", args.orders.display()))?;

    let visible = filter_visible(&orders, start, end);
    info!(
        n_orders = orders.len(),
        n_visible = visible.len(),
        "orders in window"
    );
    let groups = load_report(visible, &transport, &holidays);

    print!("{}", render_report(&groups, start, end, &transport));
    Ok(())
}

/// Plain-text loading report.
pub fn render_report(
    groups: &[ReportGroup<'_>],
    start: CalendarDate,
    end: CalendarDate,
    transport: &TransportFilter,
) -> String {
    let carrier = match transport {
        TransportFilter::All => "all",
        TransportFilter::Company(name) => name.as_str(),
    };
    let mut out = format!(
        "Loading plan {} - {}  carrier: {carrier}\n",
        format_display_date(start),
        format_display_date(end)
    );
    if groups.is_empty() {
        out.push_str("No loads in this window.\n");
        return out;
    }
    for group in groups {
        let heading = match group.key.date() {
            Some(d) => format!("{} {}", day_of_week_label(d), format_display_date(d)),
            None => "unassigned".to_string(),
        };
        out.push_str(&format!("\nLoading date: {heading}"));
        if let Some(name) = &group.holiday {
            out.push_str(&format!("  (holiday: {name})"));
        }
        out.push('\n');
        for order in &group.orders {
            out.push_str(&render_row(order));
        }
    }
    out
}

fn render_row(order: &Order) -> String {
    let client = order.client_name.as_deref().unwrap_or(&order.client_id);
    let reception = match order.reception_date {
        Some(d) => format!(
            "{} {} {}",
            day_of_week_label(d),
            format_display_date(d),
            format_time_short(&order.reception_time)
        ),
        None => "-".to_string(),
    };
    format!(
        "  {client} | {} | {} | {} | {}\n",
        order.transport_company,
        reception.trim_end(),
        or_dash(&order.transport_comments),
        or_dash(&order.manufacturing_notes)
    )
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "-" } else { s }
}

#[cfg(test)]
mod tests {
    use planificador_holidays::Holiday;
    use planificador_records::{RecordSource, parse_orders};

    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn report_text() {
        let orders = parse_orders(
            r#"[
                {"id":"o1","clientId":"cli1","date":"2024-12-26","delivers":true,
                 "receptionDate":"2024-12-26","receptionTime":"08:00:00",
                 "loadingDate":"2024-12-25","transportCompany":"Innova",
                 "transportComments":"Muelle 3"},
                {"id":"o2","clientId":"cli2","date":"2024-12-26","delivers":true,
                 "transportCompany":"Disfrimur","manufacturingNotes":"Palets altos"}
            ]"#,
            RecordSource::Document,
        )
        .unwrap();
        let holidays = vec![Holiday::new("h1", date("2024-12-25"), "Navidad")];
        let groups = load_report(&orders, &TransportFilter::All, &holidays);
        let text = render_report(
            &groups,
            date("2024-12-24"),
            date("2024-12-31"),
            &TransportFilter::All,
        );
        assert_eq!(
            text,
            "Loading plan 24/12 - 31/12  carrier: all\n\
             \nLoading date: X 25/12  (holiday: Navidad)\n\
             \x20 cli1 | Innova | J 26/12 08:00 | Muelle 3 | -\n\
             \nLoading date: unassigned\n\
             \x20 cli2 | Disfrimur | - | - | Palets altos\n"
        );
    }

    #[test]
    fn empty_report() {
        let text = render_report(
            &[],
            date("2024-12-24"),
            date("2024-12-31"),
            &TransportFilter::Company("Innova".to_string()),
        );
        assert_eq!(
            text,
            "Loading plan 24/12 - 31/12  carrier: Innova\nNo loads in this window.\n"
        );
    }
}
