use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Scheduled,
    Done,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Band {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub time: String,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostItem {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub couvert_price: f64,
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub couvert_count: u32,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub promo_price: f64,
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub promo_count: u32,
    #[serde(default)]
    pub bands: Vec<Band>,
    #[serde(default)]
    pub extra_costs: Vec<CostItem>,
}

impl Event {
    pub fn revenue(&self) -> f64 {
        self.couvert_price * f64::from(self.couvert_count)
            + self.promo_price * f64::from(self.promo_count)
    }

    pub fn cost(&self) -> f64 {
        self.bands.iter().map(|b| b.value).sum::<f64>()
            + self.extra_costs.iter().map(|c| c.value).sum::<f64>()
    }

    pub fn profit(&self) -> f64 {
        self.revenue() - self.cost()
    }

    pub fn audience(&self) -> u32 {
        self.couvert_count + self.promo_count
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandPreset {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub last_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalExpense {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub original_value: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub discount_percent: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub final_value: f64,
}

impl PersonalExpense {
    pub fn new(date: String, description: String, original_value: f64, discount_percent: f64) -> Self {
        let final_value = original_value * (1.0 - discount_percent / 100.0);
        Self {
            id: new_id(),
            date,
            description,
            original_value,
            discount_percent,
            final_value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub amount: f64,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub personal_expenses: Vec<PersonalExpense>,
    #[serde(default = "default_presets")]
    pub band_presets: Vec<BandPreset>,
    #[serde(default)]
    pub settled_months: Vec<String>,
    #[serde(default = "now_iso")]
    pub last_updated: String,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            payments: Vec::new(),
            personal_expenses: Vec::new(),
            band_presets: default_presets(),
            settled_months: Vec::new(),
            last_updated: now_iso(),
        }
    }
}

pub fn default_presets() -> Vec<BandPreset> {
    [
        ("Grupo Revelação Cover", 1200.0),
        ("Turma do Pagode Cover", 1500.0),
        ("Menos é Mais Cover", 1400.0),
        ("Samba da Gente", 800.0),
        ("DJ Residente", 300.0),
    ]
    .into_iter()
    .map(|(name, last_value)| BandPreset {
        name: name.to_string(),
        last_value,
    })
    .collect()
}

fn default_couvert_price() -> f64 {
    15.0
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEventRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default = "default_couvert_price", deserialize_with = "lenient::f64_or_zero")]
    pub couvert_price: f64,
    #[serde(default)]
    pub bands: Vec<Band>,
}

impl From<NewEventRequest> for Event {
    fn from(req: NewEventRequest) -> Self {
        Self {
            id: new_id(),
            date: req.date,
            status: req.status,
            couvert_price: req.couvert_price,
            couvert_count: 0,
            promo_price: 0.0,
            promo_count: 0,
            bands: req.bands,
            extra_costs: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewPaymentRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub amount: f64,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenseRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub original_value: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub discount_percent: f64,
}

#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    pub event_count: usize,
    pub max_audience: u32,
    pub best_event_label: String,
    pub best_event_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub month_key: String,
    pub revenue: f64,
    pub profit: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    pub series: Vec<ChartPoint>,
    pub total_revenue: f64,
    pub total_profit: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFigures {
    pub id: String,
    pub date: String,
    pub bands: Vec<Band>,
    pub audience: u32,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
}

impl From<&Event> for EventFigures {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            date: event.date.clone(),
            bands: event.bands.clone(),
            audience: event.audience(),
            revenue: event.revenue(),
            cost: event.cost(),
            profit: event.profit(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthViewResponse {
    pub month: String,
    pub summary: MonthlySummary,
    pub events: Vec<EventFigures>,
    pub expenses_total: f64,
    pub payments: Vec<Payment>,
    pub payments_total: f64,
    pub settled: bool,
    pub outstanding: f64,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub month: String,
    pub settled: bool,
}

pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        })
    }

    pub fn u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Number(n)) => n.as_f64().map(|v| v.max(0.0) as u32).unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        })
    }
}
