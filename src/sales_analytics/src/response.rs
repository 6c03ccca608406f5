//! JSON response envelopes: `{ "success": .., "message": .., <payload> }`.
//!
//! Payload keys and messages are the ones the query endpoints have always
//! returned, so existing dashboards keep parsing the output.

use serde_json::{Map, Value, json};

use crate::analytics::{CategoryBreakdown, CompleteAnalytics, MonthlySummary, PriceRangeHistogram};

/// The four analytics queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Revenue + sold/unsold counts.
    Monthly,
    /// Price band histogram.
    BarChart,
    /// Category counts.
    Categories,
    /// All of the above.
    Complete,
}

impl Endpoint {
    /// Message attached to a successful response.
    pub const fn success_message(self) -> &'static str {
        match self {
            Endpoint::Monthly => "Got Monthly Analytics Successfully",
            Endpoint::BarChart => "Got Bar Chart Data Successfully",
            Endpoint::Categories => "Got Category Wise Data Successfully",
            Endpoint::Complete => "Fetched Data Successfully",
        }
    }

    /// Message attached to a failed response.
    pub const fn failure_message(self) -> &'static str {
        match self {
            Endpoint::Monthly => "Cannot Get Monthly Analytics",
            Endpoint::BarChart => "Cannot Get Bar chart data",
            Endpoint::Categories => "Cannot Get Category Wise Data",
            Endpoint::Complete => "Cannot Get Data",
        }
    }
}

/// A computed result, tagged with the query that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// `analytics`
    Monthly(MonthlySummary),
    /// `rangeAnalytics`
    BarChart(PriceRangeHistogram),
    /// `categoryWiseData`
    Categories(CategoryBreakdown),
    /// `analytics`, `ranges`, `categories`
    Complete(CompleteAnalytics),
}

impl Payload {
    /// Query this payload answers.
    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Payload::Monthly(_) => Endpoint::Monthly,
            Payload::BarChart(_) => Endpoint::BarChart,
            Payload::Categories(_) => Endpoint::Categories,
            Payload::Complete(_) => Endpoint::Complete,
        }
    }
}

/// Build the success envelope for a payload.
pub fn success_body(payload: &Payload) -> serde_json::Result<Value> {
    let mut body = Map::new();
    body.insert("success".into(), Value::Bool(true));
    body.insert(
        "message".into(),
        Value::from(payload.endpoint().success_message()),
    );
    match payload {
        Payload::Monthly(m) => {
            body.insert("analytics".into(), serde_json::to_value(m)?);
        }
        Payload::BarChart(h) => {
            body.insert("rangeAnalytics".into(), serde_json::to_value(h)?);
        }
        Payload::Categories(c) => {
            body.insert("categoryWiseData".into(), serde_json::to_value(c)?);
        }
        Payload::Complete(all) => {
            body.insert("analytics".into(), serde_json::to_value(all.analytics)?);
            body.insert("ranges".into(), serde_json::to_value(all.ranges)?);
            body.insert("categories".into(), serde_json::to_value(&all.categories)?);
        }
    }
    Ok(Value::Object(body))
}

/// Build the failure envelope; `error` carries the full source chain.
pub fn failure_body(endpoint: Endpoint, err: &(dyn std::error::Error + 'static)) -> Value {
    let mut chain = vec![err.to_string()];
    let mut cur = err.source();
    while let Some(e) = cur {
        chain.push(e.to_string());
        cur = e.source();
    }
    json!({
        "success": false,
        "message": endpoint.failure_message(),
        "error": chain.join(": "),
    })
}
