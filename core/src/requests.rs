//! Request types, one per operation.
//!
//! # Design
//! A request serves two purposes. It is turned into query parameters by
//! `ToQuery`, and the service echoes it back inside `<request>`, so it also
//! derives `Deserialize`. The serde names and the query parameter names are
//! the same wire names, kept together in [`param`].
//!
//! Every parameter an operation defines is always sent, including empty
//! strings and zeros.

use serde::Deserialize;

use crate::xml::{lenient, lenient_bool};

/// Query parameter names understood by the Zillow web service.
pub mod param {
    pub const ZWS_ID: &str = "zws-id";
    pub const ZPID: &str = "zpid";
    pub const RENTZESTIMATE: &str = "rentzestimate";
    pub const ADDRESS: &str = "address";
    pub const CITY_STATE_ZIP: &str = "citystatezip";
    pub const UNIT_TYPE: &str = "unit-type";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const CHART_DURATION: &str = "chartDuration";
    pub const COUNT: &str = "count";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const NEIGHBORHOOD: &str = "neighborhood";
    pub const ZIP: &str = "zip";
    pub const COUNTRY: &str = "country";
    pub const CHILD_TYPE: &str = "childtype";
    pub const REGION_ID: &str = "regionId";
    pub const PRICE: &str = "price";
    pub const DOWN: &str = "down";
    pub const DOLLARS_DOWN: &str = "dollarsdown";
    pub const AMOUNT: &str = "amount";
    pub const RATE: &str = "rate";
    pub const SCHEDULE: &str = "schedule";
    pub const TERM_IN_MONTHS: &str = "terminmonths";
    pub const PROPERTY_TAX: &str = "propertytax";
    pub const HAZARD: &str = "hazard";
    pub const PMI: &str = "pmi";
    pub const HOA: &str = "hoa";
    pub const ANNUAL_INCOME: &str = "annualincome";
    pub const MONTHLY_PAYMENT: &str = "monthlypayment";
    pub const MONTHLY_DEBTS: &str = "monthlydebts";
    pub const DEBT_TO_INCOME: &str = "debttoincome";
    pub const INCOME_TAX: &str = "incometax";
    pub const ESTIMATE: &str = "estimate";
}

/// Conversion of a request into ordered query pairs (without `zws-id`).
pub trait ToQuery {
    fn to_query(&self) -> Vec<(&'static str, String)>;
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZestimateRequest {
    pub zpid: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub rentzestimate: bool,
}

impl ToQuery for ZestimateRequest {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            (param::ZPID, self.zpid.clone()),
            (param::RENTZESTIMATE, self.rentzestimate.to_string()),
        ]
    }
}

/// Address lookup used by GetSearchResults and GetDeepSearchResults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub address: String,
    #[serde(rename = "citystatezip")]
    pub city_state_zip: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub rentzestimate: bool,
}

impl ToQuery for SearchRequest {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            (param::ADDRESS, self.address.clone()),
            (param::CITY_STATE_ZIP, self.city_state_zip.clone()),
            (param::RENTZESTIMATE, self.rentzestimate.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartRequest {
    pub zpid: String,
    /// `percent` or `dollar`.
    #[serde(rename = "unit-type")]
    pub unit_type: String,
    #[serde(deserialize_with = "lenient")]
    pub width: u32,
    #[serde(deserialize_with = "lenient")]
    pub height: u32,
    /// `1year`, `5years` or `10years`; empty lets the service choose.
    #[serde(rename = "chartDuration")]
    pub duration: String,
}

impl ToQuery for ChartRequest {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            (param::ZPID, self.zpid.clone()),
            (param::UNIT_TYPE, self.unit_type.clone()),
            (param::WIDTH, self.width.to_string()),
            (param::HEIGHT, self.height.to_string()),
            (param::CHART_DURATION, self.duration.clone()),
        ]
    }
}

/// Comparable-sales lookup used by GetComps and GetDeepComps.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompsRequest {
    pub zpid: String,
    #[serde(deserialize_with = "lenient")]
    pub count: u32,
    #[serde(deserialize_with = "lenient_bool")]
    pub rentzestimate: bool,
}

impl ToQuery for CompsRequest {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            (param::ZPID, self.zpid.clone()),
            (param::COUNT, self.count.to_string()),
            (param::RENTZESTIMATE, self.rentzestimate.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdatedPropertyDetailsRequest {
    pub zpid: String,
}

impl ToQuery for UpdatedPropertyDetailsRequest {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![(param::ZPID, self.zpid.clone())]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegionChildrenRequest {
    #[serde(rename = "regionId")]
    pub region_id: String,
    pub state: String,
    pub country: String,
    pub city: String,
    /// `state`, `county`, `city`, `zipcode` or `neighborhood`.
    #[serde(rename = "childtype")]
    pub child_type: String,
}

impl ToQuery for RegionChildrenRequest {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            (param::REGION_ID, self.region_id.clone()),
            (param::STATE, self.state.clone()),
            (param::COUNTRY, self.country.clone()),
            (param::CITY, self.city.clone()),
            (param::CHILD_TYPE, self.child_type.clone()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegionChartRequest {
    pub city: String,
    pub state: String,
    pub neighborhood: String,
    #[serde(rename = "zip")]
    pub zipcode: String,
    #[serde(rename = "unit-type")]
    pub unit_type: String,
    #[serde(deserialize_with = "lenient")]
    pub width: u32,
    #[serde(deserialize_with = "lenient")]
    pub height: u32,
    #[serde(rename = "chartDuration")]
    pub chart_duration: String,
}

impl ToQuery for RegionChartRequest {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            (param::CITY, self.city.clone()),
            (param::STATE, self.state.clone()),
            (param::NEIGHBORHOOD, self.neighborhood.clone()),
            (param::ZIP, self.zipcode.clone()),
            (param::UNIT_TYPE, self.unit_type.clone()),
            (param::WIDTH, self.width.to_string()),
            (param::HEIGHT, self.height.to_string()),
            (param::CHART_DURATION, self.chart_duration.clone()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RateSummaryRequest {
    /// Two-letter state code; empty for national rates.
    pub state: String,
}

impl ToQuery for RateSummaryRequest {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![(param::STATE, self.state.clone())]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonthlyPaymentsRequest {
    #[serde(deserialize_with = "lenient")]
    pub price: u64,
    /// Down payment as a percentage of `price`.
    #[serde(deserialize_with = "lenient")]
    pub down: u32,
    #[serde(rename = "dollarsdown", deserialize_with = "lenient")]
    pub dollars_down: u64,
    pub zip: String,
}

impl ToQuery for MonthlyPaymentsRequest {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            (param::PRICE, self.price.to_string()),
            (param::DOWN, self.down.to_string()),
            (param::DOLLARS_DOWN, self.dollars_down.to_string()),
            (param::ZIP, self.zip.clone()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonthlyPaymentsAdvancedRequest {
    #[serde(deserialize_with = "lenient")]
    pub price: u64,
    #[serde(deserialize_with = "lenient")]
    pub down: u32,
    #[serde(deserialize_with = "lenient")]
    pub amount: u64,
    #[serde(deserialize_with = "lenient")]
    pub rate: f32,
    /// `monthly` or `yearly` amortization schedule.
    pub schedule: String,
    #[serde(rename = "terminmonths", deserialize_with = "lenient")]
    pub term_in_months: u32,
    #[serde(rename = "propertytax", deserialize_with = "lenient")]
    pub property_tax: u64,
    #[serde(deserialize_with = "lenient")]
    pub hazard: u64,
    #[serde(deserialize_with = "lenient")]
    pub pmi: u64,
    #[serde(deserialize_with = "lenient")]
    pub hoa: u64,
    pub zip: String,
}

impl ToQuery for MonthlyPaymentsAdvancedRequest {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            (param::PRICE, self.price.to_string()),
            (param::DOWN, self.down.to_string()),
            (param::AMOUNT, self.amount.to_string()),
            (param::RATE, self.rate.to_string()),
            (param::SCHEDULE, self.schedule.clone()),
            (param::TERM_IN_MONTHS, self.term_in_months.to_string()),
            (param::PROPERTY_TAX, self.property_tax.to_string()),
            (param::HAZARD, self.hazard.to_string()),
            (param::PMI, self.pmi.to_string()),
            (param::HOA, self.hoa.to_string()),
            (param::ZIP, self.zip.clone()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AffordabilityRequest {
    #[serde(rename = "annualincome", deserialize_with = "lenient")]
    pub annual_income: u64,
    #[serde(rename = "monthlypayment", deserialize_with = "lenient")]
    pub monthly_payment: u64,
    #[serde(deserialize_with = "lenient")]
    pub down: u64,
    #[serde(rename = "monthlydebts", deserialize_with = "lenient")]
    pub monthly_debts: u64,
    #[serde(deserialize_with = "lenient")]
    pub rate: f32,
    pub schedule: String,
    #[serde(rename = "terminmonths", deserialize_with = "lenient")]
    pub term_in_months: u32,
    #[serde(rename = "debttoincome", deserialize_with = "lenient")]
    pub debt_to_income: f32,
    #[serde(rename = "incometax", deserialize_with = "lenient")]
    pub income_tax: f32,
    #[serde(deserialize_with = "lenient_bool")]
    pub estimate: bool,
    #[serde(rename = "propertytax", deserialize_with = "lenient")]
    pub property_tax: f32,
    #[serde(deserialize_with = "lenient")]
    pub hazard: u64,
    #[serde(deserialize_with = "lenient")]
    pub pmi: u64,
    #[serde(deserialize_with = "lenient")]
    pub hoa: u64,
    pub zip: String,
}

impl ToQuery for AffordabilityRequest {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            (param::ANNUAL_INCOME, self.annual_income.to_string()),
            (param::MONTHLY_PAYMENT, self.monthly_payment.to_string()),
            (param::DOWN, self.down.to_string()),
            (param::MONTHLY_DEBTS, self.monthly_debts.to_string()),
            (param::RATE, self.rate.to_string()),
            (param::SCHEDULE, self.schedule.clone()),
            (param::TERM_IN_MONTHS, self.term_in_months.to_string()),
            (param::DEBT_TO_INCOME, self.debt_to_income.to_string()),
            (param::INCOME_TAX, self.income_tax.to_string()),
            (param::ESTIMATE, self.estimate.to_string()),
            (param::PROPERTY_TAX, self.property_tax.to_string()),
            (param::HAZARD, self.hazard.to_string()),
            (param::PMI, self.pmi.to_string()),
            (param::HOA, self.hoa.to_string()),
            (param::ZIP, self.zip.clone()),
        ]
    }
}
