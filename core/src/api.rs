//! One-call-per-operation client.
//!
//! `Zillow` pairs the pure `ZillowClient` with a `Transport` and runs
//! build → execute → parse for each operation. It adds no state of its own.

use crate::client::ZillowClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::operation::Operation;
use crate::requests::{
    AffordabilityRequest, ChartRequest, CompsRequest, MonthlyPaymentsAdvancedRequest,
    MonthlyPaymentsRequest, RateSummaryRequest, RegionChartRequest, RegionChildrenRequest,
    SearchRequest, UpdatedPropertyDetailsRequest, ZestimateRequest,
};
use crate::responses::{
    Affordability, ChartResult, CompsResult, DeepCompsResult, DeepSearchResults,
    MonthlyPayments, MonthlyPaymentsAdvanced, RateSummary, RegionChartResult, RegionChildren,
    SearchResults, UpdatedPropertyDetails, ZestimateResult, ZillowResult,
};
use crate::transport::{Transport, UreqTransport};

/// Blocking Zillow web-service client.
///
/// Each method issues exactly one GET. A service-reported error (non-zero
/// `message.code`) is returned as `Ok`; check `ZillowResult::message`.
#[derive(Debug, Clone)]
pub struct Zillow<T = UreqTransport> {
    client: ZillowClient,
    transport: T,
}

impl Zillow<UreqTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_transport(ZillowClient::from_config(config), UreqTransport::from_config(config))
    }
}

impl<T: Transport> Zillow<T> {
    pub fn with_transport(client: ZillowClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &ZillowClient {
        &self.client
    }

    fn call<R: ZillowResult>(&self, operation: Operation, request: HttpRequest) -> Result<R, ApiError> {
        let span = tracing::debug_span!("zillow_call", %operation);
        let _guard = span.enter();

        tracing::debug!(url = %request.url, "sending request");
        let response = self.transport.execute(&request)?;
        tracing::debug!(status = response.status, bytes = response.body.len(), "received response");

        let result: R = self.client.parse(response)?;
        let message = result.message();
        if !message.is_success() {
            tracing::warn!(code = message.code, text = %message.text, "service reported an error");
        }
        Ok(result)
    }

    pub fn get_zestimate(&self, request: &ZestimateRequest) -> Result<ZestimateResult, ApiError> {
        self.call(Operation::GetZestimate, self.client.build_get_zestimate(request))
    }

    pub fn get_search_results(&self, request: &SearchRequest) -> Result<SearchResults, ApiError> {
        self.call(Operation::GetSearchResults, self.client.build_get_search_results(request))
    }

    pub fn get_chart(&self, request: &ChartRequest) -> Result<ChartResult, ApiError> {
        self.call(Operation::GetChart, self.client.build_get_chart(request))
    }

    pub fn get_comps(&self, request: &CompsRequest) -> Result<CompsResult, ApiError> {
        self.call(Operation::GetComps, self.client.build_get_comps(request))
    }

    pub fn get_deep_comps(&self, request: &CompsRequest) -> Result<DeepCompsResult, ApiError> {
        self.call(Operation::GetDeepComps, self.client.build_get_deep_comps(request))
    }

    pub fn get_deep_search_results(&self, request: &SearchRequest) -> Result<DeepSearchResults, ApiError> {
        self.call(
            Operation::GetDeepSearchResults,
            self.client.build_get_deep_search_results(request),
        )
    }

    pub fn get_updated_property_details(
        &self,
        request: &UpdatedPropertyDetailsRequest,
    ) -> Result<UpdatedPropertyDetails, ApiError> {
        self.call(
            Operation::GetUpdatedPropertyDetails,
            self.client.build_get_updated_property_details(request),
        )
    }

    pub fn get_region_children(&self, request: &RegionChildrenRequest) -> Result<RegionChildren, ApiError> {
        self.call(Operation::GetRegionChildren, self.client.build_get_region_children(request))
    }

    pub fn get_region_chart(&self, request: &RegionChartRequest) -> Result<RegionChartResult, ApiError> {
        self.call(Operation::GetRegionChart, self.client.build_get_region_chart(request))
    }

    pub fn get_rate_summary(&self, request: &RateSummaryRequest) -> Result<RateSummary, ApiError> {
        self.call(Operation::GetRateSummary, self.client.build_get_rate_summary(request))
    }

    pub fn get_monthly_payments(&self, request: &MonthlyPaymentsRequest) -> Result<MonthlyPayments, ApiError> {
        self.call(Operation::GetMonthlyPayments, self.client.build_get_monthly_payments(request))
    }

    pub fn calculate_monthly_payments_advanced(
        &self,
        request: &MonthlyPaymentsAdvancedRequest,
    ) -> Result<MonthlyPaymentsAdvanced, ApiError> {
        self.call(
            Operation::CalculateMonthlyPaymentsAdvanced,
            self.client.build_calculate_monthly_payments_advanced(request),
        )
    }

    pub fn calculate_affordability(&self, request: &AffordabilityRequest) -> Result<Affordability, ApiError> {
        self.call(
            Operation::CalculateAffordability,
            self.client.build_calculate_affordability(request),
        )
    }
}
