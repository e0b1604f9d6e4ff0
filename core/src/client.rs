//! Stateless HTTP request builder and response parser for the Zillow API.
//!
//! # Design
//! `ZillowClient` holds only the base URL and the application id (ZWSID) and
//! carries no mutable state between calls. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. The round-trip itself belongs to a
//! `Transport`, which keeps this half deterministic and free of I/O.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::operation::Operation;
use crate::requests::{
    param, AffordabilityRequest, ChartRequest, CompsRequest, MonthlyPaymentsAdvancedRequest,
    MonthlyPaymentsRequest, RateSummaryRequest, RegionChartRequest, RegionChildrenRequest,
    SearchRequest, ToQuery, UpdatedPropertyDetailsRequest, ZestimateRequest,
};
use crate::responses::{
    Affordability, ChartResult, CompsResult, DeepCompsResult, DeepSearchResults,
    MonthlyPayments, MonthlyPaymentsAdvanced, RateSummary, RegionChartResult, RegionChildren,
    SearchResults, UpdatedPropertyDetails, ZestimateResult, ZillowResult,
};
use crate::xml;

/// Synchronous, stateless request builder and response parser.
#[derive(Debug, Clone)]
pub struct ZillowClient {
    base_url: String,
    zws_id: String,
    headers: Vec<(String, String)>,
}

impl ZillowClient {
    pub fn new(base_url: &str, zws_id: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            zws_id: zws_id.to_string(),
            headers: Vec::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let mut client = Self::new(&config.base_url, &config.zws_id);
        if let Some(agent) = &config.user_agent {
            client.headers.push(("user-agent".to_string(), agent.clone()));
        }
        client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint URL plus `zws-id` followed by the request's own parameters.
    pub fn build(&self, operation: Operation, request: &impl ToQuery) -> HttpRequest {
        let mut query = vec![(param::ZWS_ID.to_string(), self.zws_id.clone())];
        query.extend(
            request
                .to_query()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v)),
        );
        HttpRequest {
            url: format!("{}/{}.htm", self.base_url, operation.path()),
            query,
            headers: self.headers.clone(),
        }
    }

    /// Check the status and decode the body as `R`.
    ///
    /// A document with a non-zero message code is returned as `Ok`.
    pub fn parse<R: ZillowResult>(&self, response: HttpResponse) -> Result<R, ApiError> {
        check_status(&response)?;
        xml::decode(&response.body, R::ROOT)
    }

    pub fn build_get_zestimate(&self, request: &ZestimateRequest) -> HttpRequest {
        self.build(Operation::GetZestimate, request)
    }

    pub fn build_get_search_results(&self, request: &SearchRequest) -> HttpRequest {
        self.build(Operation::GetSearchResults, request)
    }

    pub fn build_get_chart(&self, request: &ChartRequest) -> HttpRequest {
        self.build(Operation::GetChart, request)
    }

    pub fn build_get_comps(&self, request: &CompsRequest) -> HttpRequest {
        self.build(Operation::GetComps, request)
    }

    pub fn build_get_deep_comps(&self, request: &CompsRequest) -> HttpRequest {
        self.build(Operation::GetDeepComps, request)
    }

    pub fn build_get_deep_search_results(&self, request: &SearchRequest) -> HttpRequest {
        self.build(Operation::GetDeepSearchResults, request)
    }

    pub fn build_get_updated_property_details(&self, request: &UpdatedPropertyDetailsRequest) -> HttpRequest {
        self.build(Operation::GetUpdatedPropertyDetails, request)
    }

    pub fn build_get_region_children(&self, request: &RegionChildrenRequest) -> HttpRequest {
        self.build(Operation::GetRegionChildren, request)
    }

    pub fn build_get_region_chart(&self, request: &RegionChartRequest) -> HttpRequest {
        self.build(Operation::GetRegionChart, request)
    }

    pub fn build_get_rate_summary(&self, request: &RateSummaryRequest) -> HttpRequest {
        self.build(Operation::GetRateSummary, request)
    }

    pub fn build_get_monthly_payments(&self, request: &MonthlyPaymentsRequest) -> HttpRequest {
        self.build(Operation::GetMonthlyPayments, request)
    }

    pub fn build_calculate_monthly_payments_advanced(
        &self,
        request: &MonthlyPaymentsAdvancedRequest,
    ) -> HttpRequest {
        self.build(Operation::CalculateMonthlyPaymentsAdvanced, request)
    }

    pub fn build_calculate_affordability(&self, request: &AffordabilityRequest) -> HttpRequest {
        self.build(Operation::CalculateAffordability, request)
    }

    pub fn parse_get_zestimate(&self, response: HttpResponse) -> Result<ZestimateResult, ApiError> {
        self.parse(response)
    }

    pub fn parse_get_search_results(&self, response: HttpResponse) -> Result<SearchResults, ApiError> {
        self.parse(response)
    }

    pub fn parse_get_chart(&self, response: HttpResponse) -> Result<ChartResult, ApiError> {
        self.parse(response)
    }

    pub fn parse_get_comps(&self, response: HttpResponse) -> Result<CompsResult, ApiError> {
        self.parse(response)
    }

    pub fn parse_get_deep_comps(&self, response: HttpResponse) -> Result<DeepCompsResult, ApiError> {
        self.parse(response)
    }

    pub fn parse_get_deep_search_results(&self, response: HttpResponse) -> Result<DeepSearchResults, ApiError> {
        self.parse(response)
    }

    pub fn parse_get_updated_property_details(
        &self,
        response: HttpResponse,
    ) -> Result<UpdatedPropertyDetails, ApiError> {
        self.parse(response)
    }

    pub fn parse_get_region_children(&self, response: HttpResponse) -> Result<RegionChildren, ApiError> {
        self.parse(response)
    }

    pub fn parse_get_region_chart(&self, response: HttpResponse) -> Result<RegionChartResult, ApiError> {
        self.parse(response)
    }

    pub fn parse_get_rate_summary(&self, response: HttpResponse) -> Result<RateSummary, ApiError> {
        self.parse(response)
    }

    pub fn parse_get_monthly_payments(&self, response: HttpResponse) -> Result<MonthlyPayments, ApiError> {
        self.parse(response)
    }

    pub fn parse_calculate_monthly_payments_advanced(
        &self,
        response: HttpResponse,
    ) -> Result<MonthlyPaymentsAdvanced, ApiError> {
        self.parse(response)
    }

    pub fn parse_calculate_affordability(&self, response: HttpResponse) -> Result<Affordability, ApiError> {
        self.parse(response)
    }
}

/// Map non-2xx status codes to `ApiError::Status`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
