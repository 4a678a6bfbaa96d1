use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Monthly record as it arrives from upstream feeds; any field may be missing or malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPaymentRecord {
    #[serde(default)]
    pub month: Option<Value>,
    #[serde(default)]
    pub on_time_payments: Option<Value>,
    #[serde(default)]
    pub late_payments: Option<Value>,
    #[serde(default)]
    pub total_payments: Option<Value>,
    #[serde(default)]
    pub average_amount: Option<Value>,
}

/// Sanitised month of payment behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPayment {
    pub month: String,
    pub on_time_payments: f64,
    pub late_payments: f64,
    pub total_payments: f64,
    pub average_amount: f64,
}

impl MonthlyPayment {
    pub fn new(month: &str, on_time: f64, late: f64, average_amount: f64) -> Self {
        Self {
            month: month.to_string(),
            on_time_payments: on_time,
            late_payments: late,
            total_payments: on_time + late,
            average_amount,
        }
    }

    fn empty(month: &str) -> Self {
        Self::new(month, 0.0, 0.0, 0.0)
    }
}

/// Numeric coercion with zero for anything missing, unparsable or non-finite.
fn number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) if text.trim().is_empty() => Some(0.0),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        Some(Value::Bool(flag)) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|value| value.is_finite()).unwrap_or(0.0)
}

fn month_label(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) if !text.is_empty() => text.clone(),
        Some(Value::Number(number)) if number.as_f64().is_some_and(|n| n != 0.0) => {
            number.to_string()
        }
        _ => "N/A".to_string(),
    }
}

const FALLBACK_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Coerce raw records; an empty feed becomes six zeroed months (Jan-Jun).
pub fn sanitize(records: &[RawPaymentRecord]) -> Vec<MonthlyPayment> {
    if records.is_empty() {
        return FALLBACK_MONTHS.iter().map(|month| MonthlyPayment::empty(month)).collect();
    }

    records
        .iter()
        .map(|record| {
            let on_time = number(record.on_time_payments.as_ref());
            let late = number(record.late_payments.as_ref());
            let total = match number(record.total_payments.as_ref()) {
                total if total != 0.0 => total,
                _ => on_time + late,
            };
            MonthlyPayment {
                month: month_label(record.month.as_ref()),
                on_time_payments: on_time,
                late_payments: late,
                total_payments: total,
                average_amount: number(record.average_amount.as_ref()),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "3months")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "12months")]
    TwelveMonths,
}

impl TimeRange {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ThreeMonths => "3months",
            Self::SixMonths => "6months",
            Self::TwelveMonths => "12months",
        }
    }

    /// Trailing window of the series. Twelve months keeps the whole series.
    pub fn window(self, series: &[MonthlyPayment]) -> &[MonthlyPayment] {
        let keep = match self {
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::TwelveMonths => return series,
        };
        &series[series.len().saturating_sub(keep)..]
    }
}

impl FromStr for TimeRange {
    type Err = UnknownTimeRange;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "3" | "3months" => Ok(Self::ThreeMonths),
            "6" | "6months" => Ok(Self::SixMonths),
            "12" | "12months" => Ok(Self::TwelveMonths),
            _ => Err(UnknownTimeRange(raw.to_string())),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time range '{0}' (expected 3months, 6months or 12months)")]
pub struct UnknownTimeRange(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStats {
    pub on_time_rate: u8,
    pub avg_amount: u64,
    pub total_payments: f64,
}

pub fn stats(window: &[MonthlyPayment]) -> PaymentStats {
    if window.is_empty() {
        return PaymentStats::default();
    }

    let on_time: f64 = window.iter().map(|month| month.on_time_payments).sum();
    let total: f64 = window.iter().map(|month| month.total_payments).sum();
    let mean_amount =
        window.iter().map(|month| month.average_amount).sum::<f64>() / window.len() as f64;

    let on_time_rate = if total > 0.0 {
        (on_time / total * 100.0).round().clamp(0.0, 100.0) as u8
    } else {
        0
    };

    PaymentStats {
        on_time_rate,
        avg_amount: mean_amount.round().max(0.0) as u64,
        total_payments: total,
    }
}

/// Chart series plus headline numbers for one time range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBehaviour {
    pub range: TimeRange,
    pub months: Vec<MonthlyPayment>,
    pub stats: PaymentStats,
}

pub fn payment_behaviour(records: &[RawPaymentRecord], range: TimeRange) -> PaymentBehaviour {
    let series = sanitize(records);
    let window = range.window(&series);
    PaymentBehaviour {
        range,
        months: window.to_vec(),
        stats: stats(window),
    }
}
