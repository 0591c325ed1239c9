use crate::models::{AppData, Event, EventStatus, Payment, PersonalExpense, now_iso};
use crate::presets::learn_bands;
use crate::settlement::toggle_settled;

pub fn add_event(data: AppData, event: Event) -> AppData {
    add_event_at(data, event, now_iso())
}

pub fn add_event_at(mut data: AppData, event: Event, now: String) -> AppData {
    learn_bands(&mut data.band_presets, &event.bands);
    data.events.push(event);
    data.last_updated = now;
    data
}

pub fn update_event(data: AppData, event: Event) -> AppData {
    update_event_at(data, event, now_iso())
}

pub fn update_event_at(mut data: AppData, event: Event, now: String) -> AppData {
    learn_bands(&mut data.band_presets, &event.bands);
    if let Some(slot) = data.events.iter_mut().find(|e| e.id == event.id) {
        *slot = event;
    }
    data.last_updated = now;
    data
}

pub fn realize_event(data: AppData, id: &str) -> AppData {
    realize_event_at(data, id, now_iso())
}

// One-way scheduled -> done transition: ticket count and extra costs restart
// from a clean slate, the booked bands carry over as tentative fees.
pub fn realize_event_at(mut data: AppData, id: &str, now: String) -> AppData {
    let Some(event) = data
        .events
        .iter_mut()
        .find(|e| e.id == id && e.status == EventStatus::Scheduled)
    else {
        return data;
    };
    event.status = EventStatus::Done;
    event.couvert_count = 0;
    event.extra_costs.clear();
    data.last_updated = now;
    data
}

pub fn delete_event(data: AppData, id: &str) -> AppData {
    delete_event_at(data, id, now_iso())
}

pub fn delete_event_at(mut data: AppData, id: &str, now: String) -> AppData {
    data.events.retain(|e| e.id != id);
    data.last_updated = now;
    data
}

pub fn add_payment(data: AppData, payment: Payment) -> AppData {
    add_payment_at(data, payment, now_iso())
}

pub fn add_payment_at(mut data: AppData, payment: Payment, now: String) -> AppData {
    data.payments.push(payment);
    data.last_updated = now;
    data
}

pub fn delete_payment(data: AppData, id: &str) -> AppData {
    delete_payment_at(data, id, now_iso())
}

pub fn delete_payment_at(mut data: AppData, id: &str, now: String) -> AppData {
    data.payments.retain(|p| p.id != id);
    data.last_updated = now;
    data
}

pub fn add_expense(data: AppData, expense: PersonalExpense) -> AppData {
    add_expense_at(data, expense, now_iso())
}

pub fn add_expense_at(mut data: AppData, expense: PersonalExpense, now: String) -> AppData {
    data.personal_expenses.push(expense);
    data.last_updated = now;
    data
}

pub fn delete_expense(data: AppData, id: &str) -> AppData {
    delete_expense_at(data, id, now_iso())
}

pub fn delete_expense_at(mut data: AppData, id: &str, now: String) -> AppData {
    data.personal_expenses.retain(|e| e.id != id);
    data.last_updated = now;
    data
}

// Wipes everything back to the starter state, presets included.
pub fn reset(_data: AppData) -> AppData {
    AppData::default()
}

pub fn toggle_settled_month(data: AppData, month_key: &str) -> AppData {
    toggle_settled_month_at(data, month_key, now_iso())
}

pub fn toggle_settled_month_at(mut data: AppData, month_key: &str, now: String) -> AppData {
    toggle_settled(&mut data.settled_months, month_key);
    data.last_updated = now;
    data
}
