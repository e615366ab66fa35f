use crate::application::config::Credentials;
use crate::model::responses::AccountSummaryReport;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body of `GET /api/account/summary`
///
/// Field names are the ones the dashboard reads; a failed query leaves its
/// fields at zero and is listed in `errors`.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct AccountSummaryResponse {
    /// `true` when both queries succeeded
    pub ok: bool,
    /// One short message per failed query
    pub errors: Vec<String>,
    /// Total deposit
    pub deposit: i64,
    /// Orderable cash
    pub orderable: i64,
    /// Realized profit/loss of the day
    pub today_realized: i64,
    /// Total purchase amount
    pub total_purchase: i64,
    /// Total evaluation amount
    pub total_eval: i64,
    /// Total evaluation profit/loss
    pub total_pl: i64,
    /// Total return in percent
    pub total_return: f64,
}

impl From<AccountSummaryReport> for AccountSummaryResponse {
    fn from(report: AccountSummaryReport) -> Self {
        let ok = report.is_complete();
        let summary = report.summary;
        Self {
            ok,
            errors: report.errors,
            deposit: summary.deposit,
            orderable: summary.orderable_cash,
            today_realized: summary.today_realized_pl,
            total_purchase: summary.total_purchase,
            total_eval: summary.total_eval,
            total_pl: summary.total_pl,
            total_return: summary.total_return_pct,
        }
    }
}

impl AccountSummaryResponse {
    /// Renders the figures as a boxed table, errors listed underneath
    #[must_use]
    pub fn to_table(&self) -> String {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.add_row(Row::new(vec![Cell::new("FIELD"), Cell::new("VALUE")]));

        let rows = [
            ("Deposit", self.deposit.to_string()),
            ("Orderable", self.orderable.to_string()),
            ("Today realized P/L", self.today_realized.to_string()),
            ("Total purchase", self.total_purchase.to_string()),
            ("Total evaluation", self.total_eval.to_string()),
            ("Total P/L", self.total_pl.to_string()),
            ("Total return", format!("{:.2}%", self.total_return)),
        ];
        for (label, value) in rows {
            table.add_row(Row::new(vec![Cell::new(label), Cell::new(&value)]));
        }

        let mut out = table.to_string();
        for error in &self.errors {
            out.push_str(&format!("! {error}\n"));
        }
        out
    }
}

/// Body of `GET /api/account/summary/debug`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDebugResponse {
    /// Remote base URL
    pub base: String,
    /// Account number
    pub account: String,
    /// Account product code
    pub product: String,
    /// Hint for whoever is reading this
    pub note: String,
}

impl From<&Credentials> for AccountDebugResponse {
    fn from(credentials: &Credentials) -> Self {
        Self {
            base: credentials.base_url.clone(),
            account: credentials.account_no.clone(),
            product: credentials.account_product_code.clone(),
            note: "if these values are right and queries still fail with 4xx/5xx, \
                   suspect the token, rate limiting or the mock server itself"
                .to_string(),
        }
    }
}
