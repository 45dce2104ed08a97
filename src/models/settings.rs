//! Payroll settings payloads
//!
//! Typed bodies for the requests the harness sends. Settings read back from
//! the service stay untyped (`serde_json::Value`) so fields this crate does
//! not model survive a round trip.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pay period frequency
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayrollCycle {
    Weekly,
    BiWeekly,
    Monthly,
}

impl PayrollCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayrollCycle::Weekly => "weekly",
            PayrollCycle::BiWeekly => "bi-weekly",
            PayrollCycle::Monthly => "monthly",
        }
    }
}

/// One PAYE band; `max == None` means unbounded
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min: f64,
    pub max: Option<f64>,
    pub rate: f64,
    pub description: String,
}

impl TaxBracket {
    pub fn new(min: f64, max: Option<f64>, rate: f64, description: impl Into<String>) -> Self {
        Self {
            min,
            max,
            rate,
            description: description.into(),
        }
    }
}

/// Monthly PAYE bands used as the known-good payload
pub fn standard_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket::new(0.0, Some(24_000.0), 0.10, "First 24,000"),
        TaxBracket::new(24_000.0, Some(32_333.0), 0.25, "Next 8,333"),
        TaxBracket::new(32_333.0, Some(500_000.0), 0.30, "Next 467,667"),
        TaxBracket::new(500_000.0, Some(800_000.0), 0.325, "Next 300,000"),
        TaxBracket::new(800_000.0, None, 0.35, "Above 800,000"),
    ]
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalLevel {
    pub level: u8,
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalWorkflow {
    pub enabled: bool,
    pub levels: Vec<ApprovalLevel>,
    pub require_all_levels: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatutoryRates {
    pub nssf_employee_rate: f64,
    pub nssf_employer_rate: f64,
    pub nssf_upper_earnings_limit: f64,
    pub shif_rate: f64,
    pub housing_levy_rate: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reliefs {
    pub personal_relief: f64,
    pub insurance_relief_rate: f64,
    pub insurance_relief_max: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSettings {
    pub default_method: String,
    pub currency: String,
    pub pay_day: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_payslips: bool,
    pub notify_approvers: bool,
    pub reminder_days_before: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub rounding_precision: u8,
    pub allow_negative_net_pay: bool,
    pub fiscal_year_start_month: u8,
}

/// Full body of `PUT /payroll/settings/update`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSettings {
    pub payroll_cycle: PayrollCycle,
    pub approval_workflow: ApprovalWorkflow,
    pub tax_brackets: Vec<TaxBracket>,
    pub statutory_rates: StatutoryRates,
    pub reliefs: Reliefs,
    pub payment_settings: PaymentSettings,
    pub notification_settings: NotificationSettings,
    pub system_settings: SystemSettings,
}

impl PayrollSettings {
    /// Known-good settings accepted by a correctly validating service
    pub fn standard() -> Self {
        Self {
            payroll_cycle: PayrollCycle::Monthly,
            approval_workflow: ApprovalWorkflow {
                enabled: true,
                levels: vec![
                    ApprovalLevel {
                        level: 1,
                        role: "hr_manager".to_string(),
                    },
                    ApprovalLevel {
                        level: 2,
                        role: "finance_manager".to_string(),
                    },
                ],
                require_all_levels: true,
            },
            tax_brackets: standard_brackets(),
            statutory_rates: StatutoryRates {
                nssf_employee_rate: 0.06,
                nssf_employer_rate: 0.06,
                nssf_upper_earnings_limit: 72_000.0,
                shif_rate: 0.0275,
                housing_levy_rate: 0.015,
            },
            reliefs: Reliefs {
                personal_relief: 2_400.0,
                insurance_relief_rate: 0.15,
                insurance_relief_max: 5_000.0,
            },
            payment_settings: PaymentSettings {
                default_method: "bank_transfer".to_string(),
                currency: "KES".to_string(),
                pay_day: 28,
            },
            notification_settings: NotificationSettings {
                email_payslips: true,
                notify_approvers: true,
                reminder_days_before: 3,
            },
            system_settings: SystemSettings {
                rounding_precision: 2,
                allow_negative_net_pay: false,
                fiscal_year_start_month: 1,
            },
        }
    }
}

/// Body of `PUT /payroll/settings/paye`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayeSettings {
    pub tax_brackets: Vec<TaxBracket>,
    pub personal_relief: f64,
    pub insurance_relief_rate: f64,
}

impl PayeSettings {
    pub fn standard() -> Self {
        Self::with_brackets(standard_brackets())
    }

    pub fn with_brackets(tax_brackets: Vec<TaxBracket>) -> Self {
        Self {
            tax_brackets,
            personal_relief: 2_400.0,
            insurance_relief_rate: 0.15,
        }
    }

    /// Standard bands with the second band's rate pushed above 100%
    pub fn with_invalid_rate() -> Self {
        let mut brackets = standard_brackets();
        brackets[1].rate = 1.5;
        Self::with_brackets(brackets)
    }

    /// Bands with a hole between 24,000 and 30,000
    pub fn with_gapped_brackets() -> Self {
        Self::with_brackets(vec![
            TaxBracket::new(0.0, Some(24_000.0), 0.10, "First 24,000"),
            TaxBracket::new(30_000.0, Some(500_000.0), 0.30, "Gap before this band"),
            TaxBracket::new(500_000.0, None, 0.35, "Above 500,000"),
        ])
    }

    /// Bands whose lower bounds go backwards
    pub fn with_non_monotonic_brackets() -> Self {
        Self::with_brackets(vec![
            TaxBracket::new(0.0, Some(24_000.0), 0.10, "First 24,000"),
            TaxBracket::new(32_333.0, Some(500_000.0), 0.30, "Out of order"),
            TaxBracket::new(24_000.0, Some(32_333.0), 0.25, "Out of order"),
            TaxBracket::new(500_000.0, None, 0.35, "Above 500,000"),
        ])
    }
}

/// Strip a `{ "success": .., "data": .. }` envelope if present
pub fn unwrap_envelope(body: &Value) -> &Value {
    match (body.get("success"), body.get("data")) {
        (Some(_), Some(inner)) => inner,
        _ => body,
    }
}

/// Whether a response body counts as present.
///
/// JavaScript truthiness, except empty objects and arrays are absent too.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
