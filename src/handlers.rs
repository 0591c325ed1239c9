use crate::commands;
use crate::errors::AppError;
use crate::models::{
    AppData, ChartResponse, Event, EventFigures, EventStatus, MonthViewResponse, NewEventRequest,
    NewExpenseRequest, NewPaymentRequest, Payment, PersonalExpense, ToggleResponse, new_id,
};
use crate::settlement::is_settled;
use crate::state::AppState;
use crate::stats;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.ledger.lock().await;
    Html(render_index(&data.last_updated))
}

pub async fn get_state(State(state): State<AppState>) -> Json<AppData> {
    let data = state.ledger.lock().await;
    Json(data.clone())
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<NewEventRequest>,
) -> Result<Json<Event>, AppError> {
    if payload.date.trim().is_empty() {
        return Err(AppError::bad_request("date must not be empty"));
    }

    let event = Event::from(payload);
    let mut data = state.ledger.lock().await;
    *data = commands::add_event(data.clone(), event.clone());
    persist_data(&state.ledger_path, &data).await?;

    Ok(Json(event))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut payload): Json<Event>,
) -> Result<Json<Event>, AppError> {
    if payload.date.trim().is_empty() {
        return Err(AppError::bad_request("date must not be empty"));
    }

    payload.id = id;
    let mut data = state.ledger.lock().await;
    *data = commands::update_event(data.clone(), payload.clone());
    persist_data(&state.ledger_path, &data).await?;

    Ok(Json(payload))
}

pub async fn realize_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Event>>, AppError> {
    let mut data = state.ledger.lock().await;
    *data = commands::realize_event(data.clone(), &id);
    persist_data(&state.ledger_path, &data).await?;

    Ok(Json(data.events.iter().find(|e| e.id == id).cloned()))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.ledger.lock().await;
    *data = commands::delete_event(data.clone(), &id);
    persist_data(&state.ledger_path, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_payment(
    State(state): State<AppState>,
    Json(payload): Json<NewPaymentRequest>,
) -> Result<Json<Payment>, AppError> {
    if payload.date.trim().is_empty() {
        return Err(AppError::bad_request("date must not be empty"));
    }

    let payment = Payment {
        id: new_id(),
        date: payload.date,
        amount: payload.amount,
        note: payload.note,
    };
    let mut data = state.ledger.lock().await;
    *data = commands::add_payment(data.clone(), payment.clone());
    persist_data(&state.ledger_path, &data).await?;

    Ok(Json(payment))
}

pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.ledger.lock().await;
    *data = commands::delete_payment(data.clone(), &id);
    persist_data(&state.ledger_path, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_expense(
    State(state): State<AppState>,
    Json(payload): Json<NewExpenseRequest>,
) -> Result<Json<PersonalExpense>, AppError> {
    if payload.date.trim().is_empty() {
        return Err(AppError::bad_request("date must not be empty"));
    }

    let description = if payload.description.trim().is_empty() {
        "Event consumption".to_string()
    } else {
        payload.description
    };
    let expense = PersonalExpense::new(
        payload.date,
        description,
        payload.original_value,
        payload.discount_percent,
    );
    let mut data = state.ledger.lock().await;
    *data = commands::add_expense(data.clone(), expense.clone());
    persist_data(&state.ledger_path, &data).await?;

    Ok(Json(expense))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.ledger.lock().await;
    *data = commands::delete_expense(data.clone(), &id);
    persist_data(&state.ledger_path, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn reset_data(State(state): State<AppState>) -> Result<Json<AppData>, AppError> {
    let mut data = state.ledger.lock().await;
    *data = commands::reset(data.clone());
    persist_data(&state.ledger_path, &data).await?;

    Ok(Json(data.clone()))
}

pub async fn get_month(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<MonthViewResponse>, AppError> {
    let data = state.ledger.lock().await;
    Ok(Json(build_month_view(&data, &month)))
}

pub async fn toggle_month(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<ToggleResponse>, AppError> {
    let mut data = state.ledger.lock().await;
    *data = commands::toggle_settled_month(data.clone(), &month);
    persist_data(&state.ledger_path, &data).await?;

    Ok(Json(ToggleResponse {
        settled: is_settled(&data.settled_months, &month),
        month,
    }))
}

pub async fn get_chart(State(state): State<AppState>) -> Result<Json<ChartResponse>, AppError> {
    let data = state.ledger.lock().await;
    let series = stats::chart_series(&data.events);
    let total_revenue = series.iter().map(|p| p.revenue).sum();
    let total_profit = series.iter().map(|p| p.profit).sum();

    Ok(Json(ChartResponse {
        series,
        total_revenue,
        total_profit,
    }))
}

fn build_month_view(data: &AppData, month: &str) -> MonthViewResponse {
    let summary = stats::monthly_summary(&data.events, month);
    let mut month_events: Vec<&Event> = data
        .events
        .iter()
        .filter(|e| e.status == EventStatus::Done && e.date.starts_with(month))
        .collect();
    month_events.sort_by(|a, b| a.date.cmp(&b.date));

    let expenses_total = stats::monthly_expenses(&data.personal_expenses, month);
    let (payments, payments_total) = stats::monthly_payments(&data.payments, month);
    let outstanding = stats::cumulative_outstanding(
        &data.events,
        &data.personal_expenses,
        &data.payments,
        &stats::month_end(month),
    );

    MonthViewResponse {
        month: month.to_string(),
        summary,
        events: month_events.into_iter().map(EventFigures::from).collect(),
        expenses_total,
        payments,
        payments_total,
        settled: is_settled(&data.settled_months, month),
        outstanding,
    }
}
