//! Request parameter models for history and transaction queries
//!
//! Calendar dates serialize as ISO-8601 (`YYYY-MM-DD`). List-valued filters
//! (`userAccountIds`) must be pre-formatted by the caller as literal bracketed
//! strings; the service parses them as JSON-array text and this client passes
//! them through untouched.

use chrono::NaiveDate;

/// Sampling interval for history endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    /// One point per day
    Day,
    /// One point per week
    Week,
    /// One point per month
    Month,
    /// One point per year
    Year,
}

impl Interval {
    /// Wire representation of the interval
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Interval::Day => "DAY",
            Interval::Week => "WEEK",
            Interval::Month => "MONTH",
            Interval::Year => "YEAR",
        }
    }
}

/// The three history families served by the histories endpoint
///
/// Each pairs the `types` literal sent on the wire with the `spData` sub-key
/// the response nests its series under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    /// Per-account balances with daily change amounts
    Balances,
    /// Aggregated net worth series
    Networth,
    /// Per-account summary series
    Summaries,
}

impl HistoryKind {
    /// The literal `types` parameter for this family
    pub(crate) fn types_literal(self) -> &'static str {
        match self {
            HistoryKind::Balances => r#"["balances","dailyChangeAmount"]"#,
            HistoryKind::Networth => r#"["networth"]"#,
            HistoryKind::Summaries => r#"["summaries"]"#,
        }
    }

    /// The `spData` sub-key carrying the series for this family
    pub(crate) fn extract_key(self) -> &'static str {
        match self {
            HistoryKind::Balances => "histories",
            HistoryKind::Networth => "networthHistories",
            HistoryKind::Summaries => "accountSummaries",
        }
    }
}

/// Query parameters for the history accessors
///
/// No field is required. `extra` accepts parameters discovered beyond the
/// known set and is sent through verbatim.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    /// Account filter, pre-formatted as a literal bracketed string
    /// (e.g. `"[123,456]"`)
    pub user_account_ids: Option<String>,
    /// Beginning of the date range
    pub start_date: Option<NaiveDate>,
    /// End of the date range
    pub end_date: Option<NaiveDate>,
    /// Sampling interval, `DAY` when unset
    pub interval: Option<Interval>,
    /// Additional parameters passed through verbatim
    pub extra: Vec<(String, String)>,
}

impl HistoryQuery {
    /// Creates an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date range
    #[must_use]
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Sets the account filter (caller-preformatted bracketed string)
    #[must_use]
    pub fn for_accounts(mut self, user_account_ids: &str) -> Self {
        self.user_account_ids = Some(user_account_ids.to_string());
        self
    }

    /// Sets the sampling interval
    #[must_use]
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    pub(crate) fn to_params(&self, kind: HistoryKind) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(ids) = &self.user_account_ids {
            params.push(("userAccountIds".to_string(), ids.clone()));
        }
        if let Some(date) = self.start_date {
            params.push(("startDate".to_string(), date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.end_date {
            params.push(("endDate".to_string(), date.format("%Y-%m-%d").to_string()));
        }
        let interval = self.interval.unwrap_or(Interval::Day);
        params.push(("interval".to_string(), interval.as_str().to_string()));
        params.push(("types".to_string(), kind.types_literal().to_string()));
        params.extend(self.extra.iter().cloned());
        params
    }
}

/// Query parameters for the transaction accessor
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Account filter, pre-formatted as a literal bracketed string
    pub user_account_ids: Option<String>,
    /// Beginning of the date range
    pub start_date: Option<NaiveDate>,
    /// End of the date range
    pub end_date: Option<NaiveDate>,
    /// Additional parameters passed through verbatim
    pub extra: Vec<(String, String)>,
}

impl TransactionQuery {
    /// Creates an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date range
    #[must_use]
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Sets the account filter (caller-preformatted bracketed string)
    #[must_use]
    pub fn for_accounts(mut self, user_account_ids: &str) -> Self {
        self.user_account_ids = Some(user_account_ids.to_string());
        self
    }

    pub(crate) fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(ids) = &self.user_account_ids {
            params.push(("userAccountIds".to_string(), ids.clone()));
        }
        if let Some(date) = self.start_date {
            params.push(("startDate".to_string(), date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.end_date {
            params.push(("endDate".to_string(), date.format("%Y-%m-%d").to_string()));
        }
        params.extend(self.extra.iter().cloned());
        params
    }
}
