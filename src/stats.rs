use crate::models::{ChartPoint, Event, EventStatus, MonthlySummary, Payment, PersonalExpense};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

pub fn monthly_summary(events: &[Event], month_key: &str) -> MonthlySummary {
    let mut month_events: Vec<&Event> = events
        .iter()
        .filter(|e| e.status == EventStatus::Done && e.date.starts_with(month_key))
        .collect();
    month_events.sort_by(|a, b| a.date.cmp(&b.date));

    let mut summary = MonthlySummary {
        event_count: month_events.len(),
        ..MonthlySummary::default()
    };

    for event in month_events {
        let profit = event.profit();
        summary.revenue += event.revenue();
        summary.cost += event.cost();
        summary.profit += profit;
        summary.max_audience = summary.max_audience.max(event.audience());
        // strictly greater: a tie keeps the earlier event of the month
        if profit > summary.best_event_value {
            summary.best_event_value = profit;
            summary.best_event_label = day_month_label(&event.date);
        }
    }

    summary
}

pub fn monthly_expenses(expenses: &[PersonalExpense], month_key: &str) -> f64 {
    expenses
        .iter()
        .filter(|e| e.date.starts_with(month_key))
        .map(|e| e.final_value)
        .sum()
}

pub fn monthly_payments(payments: &[Payment], month_key: &str) -> (Vec<Payment>, f64) {
    let month_payments: Vec<Payment> = payments
        .iter()
        .filter(|p| p.date.starts_with(month_key))
        .cloned()
        .collect();
    let total = month_payments.iter().map(|p| p.amount).sum();
    (month_payments, total)
}

// Profit and consumption are windowed up to `as_of_date`, payments are not:
// a payment settles the running tab, not the month it lands in.
pub fn cumulative_outstanding(
    events: &[Event],
    expenses: &[PersonalExpense],
    payments: &[Payment],
    as_of_date: &str,
) -> f64 {
    let accum_profit: f64 = events
        .iter()
        .filter(|e| e.status == EventStatus::Done && e.date.as_str() <= as_of_date)
        .map(Event::profit)
        .sum();
    let accum_consumed: f64 = expenses
        .iter()
        .filter(|e| e.date.as_str() <= as_of_date)
        .map(|e| e.final_value)
        .sum();
    let total_paid: f64 = payments.iter().map(|p| p.amount).sum();

    accum_profit - accum_consumed - total_paid
}

pub fn chart_series(events: &[Event]) -> Vec<ChartPoint> {
    let mut months: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for event in events.iter().filter(|e| e.status == EventStatus::Done) {
        let month_key = event.date.chars().take(7).collect::<String>();
        let entry = months.entry(month_key).or_default();
        entry.0 += event.revenue();
        entry.1 += event.profit();
    }
    months
        .into_iter()
        .map(|(month_key, (revenue, profit))| ChartPoint {
            month_key,
            revenue,
            profit,
        })
        .collect()
}

pub fn month_end(month_key: &str) -> String {
    let first = NaiveDate::parse_from_str(&format!("{month_key}-01"), "%Y-%m-%d").ok();
    let last = first.and_then(|d| {
        let next = if d.month() == 12 {
            NaiveDate::from_ymd_opt(d.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(d.year(), d.month() + 1, 1)
        };
        next.and_then(|n| n.pred_opt())
    });
    match last {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => format!("{month_key}-31"),
    }
}

fn day_month_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{}/{}", d.day(), d.month()),
        Err(_) => date.to_string(),
    }
}
