//! Result documents, one per operation.
//!
//! Every result has the same three-part shape: the echoed `request`, the
//! service `message`, and an operation-specific `response`. A document
//! carrying a non-zero message code usually has no `<response>`, which
//! decodes to the default payload.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::requests::{
    AffordabilityRequest, ChartRequest, CompsRequest, MonthlyPaymentsAdvancedRequest,
    MonthlyPaymentsRequest, RateSummaryRequest, RegionChartRequest, RegionChildrenRequest,
    SearchRequest, UpdatedPropertyDetailsRequest, ZestimateRequest,
};
use crate::types::{
    Address, Amount, Links, Message, RealEstateRegion, Region, RegionIds, Zestimate,
};
use crate::xml::{comps, lenient, rates, regions, results, urls};

/// Implemented by every decoded result document.
pub trait ZillowResult: DeserializeOwned {
    /// Local name of the document element.
    const ROOT: &'static str;

    fn message(&self) -> &Message;
}

macro_rules! zillow_result {
    ($ty:ty, $root:literal) => {
        impl ZillowResult for $ty {
            const ROOT: &'static str = $root;

            fn message(&self) -> &Message {
                &self.message
            }
        }
    };
}

// ---------------------------------------------------------------------------
// GetZestimate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZestimateResult {
    pub request: ZestimateRequest,
    pub message: Message,
    pub response: ZestimateResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZestimateResponse {
    pub zpid: String,
    pub links: Links,
    pub address: Address,
    pub zestimate: Zestimate,
    #[serde(rename = "rentzestimate")]
    pub rent_zestimate: Option<Zestimate>,
    #[serde(rename = "localRealEstate", deserialize_with = "regions")]
    pub local_real_estate: Vec<RealEstateRegion>,
    pub regions: RegionIds,
}

zillow_result!(ZestimateResult, "zestimate");

// ---------------------------------------------------------------------------
// GetSearchResults / GetDeepSearchResults
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    pub request: SearchRequest,
    pub message: Message,
    pub response: SearchResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "results")]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub zpid: String,
    pub links: Links,
    pub address: Address,
    pub zestimate: Zestimate,
    #[serde(rename = "rentzestimate")]
    pub rent_zestimate: Option<Zestimate>,
    #[serde(rename = "localRealEstate", deserialize_with = "regions")]
    pub local_real_estate: Vec<RealEstateRegion>,
}

zillow_result!(SearchResults, "searchresults");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeepSearchResults {
    pub request: SearchRequest,
    pub message: Message,
    pub response: DeepSearchResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeepSearchResponse {
    #[serde(deserialize_with = "results")]
    pub results: Vec<DeepSearchResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeepSearchResult {
    pub zpid: String,
    pub links: Links,
    pub address: Address,
    #[serde(rename = "FIPScounty")]
    pub fips_county: String,
    #[serde(rename = "useCode")]
    pub use_code: String,
    #[serde(rename = "taxAssessmentYear", deserialize_with = "lenient")]
    pub tax_assessment_year: u32,
    #[serde(rename = "taxAssessment", deserialize_with = "lenient")]
    pub tax_assessment: f64,
    #[serde(rename = "yearBuilt", deserialize_with = "lenient")]
    pub year_built: u32,
    #[serde(rename = "lotSizeSqFt", deserialize_with = "lenient")]
    pub lot_size_sq_ft: u32,
    #[serde(rename = "finishedSqFt", deserialize_with = "lenient")]
    pub finished_sq_ft: u32,
    #[serde(deserialize_with = "lenient")]
    pub bathrooms: f64,
    #[serde(deserialize_with = "lenient")]
    pub bedrooms: u32,
    #[serde(rename = "totalRooms", deserialize_with = "lenient")]
    pub total_rooms: u32,
    #[serde(rename = "lastSoldDate")]
    pub last_sold_date: String,
    #[serde(rename = "lastSoldPrice")]
    pub last_sold_price: Amount,
    pub zestimate: Zestimate,
    #[serde(rename = "rentzestimate")]
    pub rent_zestimate: Option<Zestimate>,
    #[serde(rename = "localRealEstate", deserialize_with = "regions")]
    pub local_real_estate: Vec<RealEstateRegion>,
}

zillow_result!(DeepSearchResults, "searchresults");

// ---------------------------------------------------------------------------
// GetChart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartResult {
    pub request: ChartRequest,
    pub message: Message,
    pub response: ChartResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartResponse {
    /// URL of the rendered chart image.
    pub url: String,
}

zillow_result!(ChartResult, "chart");

// ---------------------------------------------------------------------------
// GetComps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompsResult {
    pub request: CompsRequest,
    pub message: Message,
    pub response: CompsResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompsResponse {
    pub properties: CompsProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompsProperties {
    pub principal: Principal,
    #[serde(deserialize_with = "comps")]
    pub comparables: Vec<Comp>,
}

/// The property the comparables were chosen for.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Principal {
    pub zpid: String,
    pub links: Links,
    pub address: Address,
    pub zestimate: Zestimate,
    #[serde(rename = "rentzestimate")]
    pub rent_zestimate: Option<Zestimate>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Comp {
    /// Similarity to the principal; higher is closer.
    #[serde(rename = "@score", deserialize_with = "lenient")]
    pub score: f64,
    pub zpid: String,
    pub links: Links,
    pub address: Address,
    pub zestimate: Zestimate,
    #[serde(rename = "rentzestimate")]
    pub rent_zestimate: Option<Zestimate>,
}

zillow_result!(CompsResult, "comps");

// ---------------------------------------------------------------------------
// GetDeepComps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeepCompsResult {
    pub request: CompsRequest,
    pub message: Message,
    pub response: DeepCompsResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeepCompsResponse {
    pub properties: DeepCompsProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeepCompsProperties {
    pub principal: DeepPrincipal,
    #[serde(deserialize_with = "comps")]
    pub comparables: Vec<DeepComp>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeepPrincipal {
    pub zpid: String,
    pub links: Links,
    pub address: Address,
    #[serde(rename = "taxAssessmentYear", deserialize_with = "lenient")]
    pub tax_assessment_year: u32,
    #[serde(rename = "taxAssessment", deserialize_with = "lenient")]
    pub tax_assessment: f64,
    #[serde(rename = "yearBuilt", deserialize_with = "lenient")]
    pub year_built: u32,
    #[serde(rename = "lotSizeSqFt", deserialize_with = "lenient")]
    pub lot_size_sq_ft: u32,
    #[serde(rename = "finishedSqFt", deserialize_with = "lenient")]
    pub finished_sq_ft: u32,
    #[serde(deserialize_with = "lenient")]
    pub bathrooms: f64,
    #[serde(deserialize_with = "lenient")]
    pub bedrooms: u32,
    #[serde(rename = "lastSoldDate")]
    pub last_sold_date: String,
    #[serde(rename = "lastSoldPrice")]
    pub last_sold_price: Amount,
    pub zestimate: Zestimate,
    #[serde(rename = "localRealEstate", deserialize_with = "regions")]
    pub local_real_estate: Vec<RealEstateRegion>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeepComp {
    #[serde(rename = "@score", deserialize_with = "lenient")]
    pub score: f64,
    pub zpid: String,
    pub links: Links,
    pub address: Address,
    #[serde(rename = "taxAssessmentYear", deserialize_with = "lenient")]
    pub tax_assessment_year: u32,
    #[serde(rename = "taxAssessment", deserialize_with = "lenient")]
    pub tax_assessment: f64,
    #[serde(rename = "yearBuilt", deserialize_with = "lenient")]
    pub year_built: u32,
    #[serde(rename = "lotSizeSqFt", deserialize_with = "lenient")]
    pub lot_size_sq_ft: u32,
    #[serde(rename = "finishedSqFt", deserialize_with = "lenient")]
    pub finished_sq_ft: u32,
    #[serde(deserialize_with = "lenient")]
    pub bathrooms: f64,
    #[serde(deserialize_with = "lenient")]
    pub bedrooms: u32,
    #[serde(rename = "lastSoldDate")]
    pub last_sold_date: String,
    #[serde(rename = "lastSoldPrice")]
    pub last_sold_price: Amount,
    pub zestimate: Zestimate,
}

zillow_result!(DeepCompsResult, "comps");

// ---------------------------------------------------------------------------
// GetUpdatedPropertyDetails
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdatedPropertyDetails {
    pub request: UpdatedPropertyDetailsRequest,
    pub message: Message,
    pub response: UpdatedPropertyDetailsResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdatedPropertyDetailsResponse {
    pub zpid: String,
    #[serde(rename = "pageViewCount")]
    pub page_view_count: PageViewCount,
    pub address: Address,
    pub posting: Posting,
    pub price: Amount,
    pub links: PropertyLinks,
    pub images: Images,
    #[serde(rename = "editedFacts")]
    pub edited_facts: EditedFacts,
    #[serde(rename = "homeDescription")]
    pub home_description: String,
    pub neighborhood: String,
    #[serde(rename = "schoolDistrict")]
    pub school_district: String,
    #[serde(rename = "elementarySchool")]
    pub elementary_school: String,
    #[serde(rename = "middleSchool")]
    pub middle_school: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageViewCount {
    #[serde(rename = "currentMonth", deserialize_with = "lenient")]
    pub current_month: u32,
    #[serde(deserialize_with = "lenient")]
    pub total: u32,
}

/// Listing information for a property currently on the market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Posting {
    pub status: String,
    #[serde(rename = "agentName")]
    pub agent_name: String,
    #[serde(rename = "agentProfileUrl")]
    pub agent_profile_url: String,
    pub brokerage: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "lastUpdatedDate")]
    pub last_updated_date: String,
    #[serde(rename = "externalUrl")]
    pub external_url: String,
    pub mls: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PropertyLinks {
    #[serde(rename = "homeDetails")]
    pub home_details: String,
    #[serde(rename = "photoGallery")]
    pub photo_gallery: String,
    #[serde(rename = "homeInfo")]
    pub home_info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Images {
    /// Total photos on the listing; `urls` may hold fewer.
    #[serde(deserialize_with = "lenient")]
    pub count: u32,
    #[serde(rename = "image", deserialize_with = "urls")]
    pub urls: Vec<String>,
}

/// Home facts as edited by the owner or agent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditedFacts {
    #[serde(rename = "useCode")]
    pub use_code: String,
    #[serde(deserialize_with = "lenient")]
    pub bedrooms: u32,
    #[serde(deserialize_with = "lenient")]
    pub bathrooms: f64,
    #[serde(rename = "finishedSqFt", deserialize_with = "lenient")]
    pub finished_sq_ft: u32,
    #[serde(rename = "lotSizeSqFt", deserialize_with = "lenient")]
    pub lot_size_sq_ft: u32,
    #[serde(rename = "yearBuilt", deserialize_with = "lenient")]
    pub year_built: u32,
    #[serde(rename = "yearUpdated", deserialize_with = "lenient")]
    pub year_updated: u32,
    #[serde(rename = "numFloors", deserialize_with = "lenient")]
    pub num_floors: u32,
    pub basement: String,
    pub roof: String,
    pub view: String,
    #[serde(rename = "parkingType")]
    pub parking_type: String,
    #[serde(rename = "heatingSources")]
    pub heating_sources: String,
    #[serde(rename = "heatingSystem")]
    pub heating_system: String,
    pub appliances: String,
    #[serde(rename = "floorCovering")]
    pub floor_covering: String,
    pub rooms: String,
}

zillow_result!(UpdatedPropertyDetails, "updatedPropertyDetails");

// ---------------------------------------------------------------------------
// GetRegionChildren / GetRegionChart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegionChildren {
    pub request: RegionChildrenRequest,
    pub message: Message,
    pub response: RegionChildrenResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegionChildrenResponse {
    /// The parent region.
    pub region: Region,
    #[serde(rename = "subregiontype")]
    pub subregion_type: String,
    #[serde(rename = "list", deserialize_with = "regions")]
    pub regions: Vec<Region>,
}

zillow_result!(RegionChildren, "regionchildren");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegionChartResult {
    pub request: RegionChartRequest,
    pub message: Message,
    pub response: RegionChartResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegionChartResponse {
    pub url: String,
    pub zindex: Amount,
}

zillow_result!(RegionChartResult, "regionchart");

// ---------------------------------------------------------------------------
// GetRateSummary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RateSummary {
    pub request: RateSummaryRequest,
    pub message: Message,
    pub response: RateSummaryResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RateSummaryResponse {
    #[serde(deserialize_with = "rates")]
    pub today: Vec<Rate>,
    #[serde(rename = "lastWeek", deserialize_with = "rates")]
    pub last_week: Vec<Rate>,
}

/// Average rate for one loan type, e.g. `thirtyYearFixed`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Rate {
    #[serde(rename = "@loanType")]
    pub loan_type: String,
    /// Number of quotes the average is based on.
    #[serde(rename = "@count", deserialize_with = "lenient")]
    pub count: u32,
    #[serde(rename = "$text", deserialize_with = "lenient")]
    pub value: f64,
}

zillow_result!(RateSummary, "rateSummary");

// ---------------------------------------------------------------------------
// GetMonthlyPayments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonthlyPayments {
    pub request: MonthlyPaymentsRequest,
    pub message: Message,
    pub response: MonthlyPaymentsResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonthlyPaymentsResponse {
    #[serde(rename = "payment")]
    pub payments: Vec<Payment>,
    #[serde(rename = "downPayment", deserialize_with = "lenient")]
    pub down_payment: i64,
    #[serde(rename = "monthlyPropertyTaxes", deserialize_with = "lenient")]
    pub monthly_property_taxes: i64,
    #[serde(rename = "monthlyHazardInsurance", deserialize_with = "lenient")]
    pub monthly_hazard_insurance: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Payment {
    #[serde(rename = "@loanType")]
    pub loan_type: String,
    #[serde(deserialize_with = "lenient")]
    pub rate: f64,
    #[serde(rename = "monthlyPrincipalAndInterest", deserialize_with = "lenient")]
    pub monthly_principal_and_interest: i64,
    #[serde(rename = "monthlyMortgageInsurance", deserialize_with = "lenient")]
    pub monthly_mortgage_insurance: i64,
}

zillow_result!(MonthlyPayments, "paymentsSummary");

// ---------------------------------------------------------------------------
// CalculateMonthlyPaymentsAdvanced
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonthlyPaymentsAdvanced {
    pub request: MonthlyPaymentsAdvancedRequest,
    pub message: Message,
    pub response: MonthlyPaymentsAdvancedResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MonthlyPaymentsAdvancedResponse {
    #[serde(rename = "monthlyprincipalandinterest", deserialize_with = "lenient")]
    pub monthly_principal_and_interest: i64,
    #[serde(rename = "monthlypropertytaxes", deserialize_with = "lenient")]
    pub monthly_property_taxes: i64,
    #[serde(rename = "monthlyhazardinsurance", deserialize_with = "lenient")]
    pub monthly_hazard_insurance: i64,
    #[serde(rename = "monthlypmi", deserialize_with = "lenient")]
    pub monthly_pmi: i64,
    #[serde(rename = "monthlyhoadues", deserialize_with = "lenient")]
    pub monthly_hoa_dues: i64,
    #[serde(rename = "totalmonthlypayment", deserialize_with = "lenient")]
    pub total_monthly_payment: i64,
    #[serde(rename = "totalpayments", deserialize_with = "lenient")]
    pub total_payments: i64,
    #[serde(rename = "totalinterest", deserialize_with = "lenient")]
    pub total_interest: i64,
    #[serde(rename = "totalprincipal", deserialize_with = "lenient")]
    pub total_principal: i64,
    #[serde(rename = "totaltaxesfeesandinsurance", deserialize_with = "lenient")]
    pub total_taxes_fees_and_insurance: i64,
    #[serde(rename = "amortizationschedule")]
    pub amortization_schedule: AmortizationSchedule,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AmortizationSchedule {
    /// `monthly` or `yearly`.
    #[serde(rename = "@frequency")]
    pub frequency: String,
    #[serde(rename = "payment")]
    pub payments: Vec<AdvancedPayment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdvancedPayment {
    #[serde(rename = "beginningbalance", deserialize_with = "lenient")]
    pub beginning_balance: i64,
    #[serde(deserialize_with = "lenient")]
    pub amount: i64,
    #[serde(deserialize_with = "lenient")]
    pub principal: i64,
    #[serde(deserialize_with = "lenient")]
    pub interest: i64,
    #[serde(rename = "endingbalance", deserialize_with = "lenient")]
    pub ending_balance: i64,
}

zillow_result!(MonthlyPaymentsAdvanced, "paymentsdetails");

// ---------------------------------------------------------------------------
// CalculateAffordability
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Affordability {
    pub request: AffordabilityRequest,
    pub message: Message,
    pub response: AffordabilityResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AffordabilityResponse {
    #[serde(rename = "affordabilityamount", deserialize_with = "lenient")]
    pub affordability_amount: i64,
    #[serde(rename = "monthlyprincipalandinterest", deserialize_with = "lenient")]
    pub monthly_principal_and_interest: i64,
    #[serde(rename = "monthlypropertytaxes", deserialize_with = "lenient")]
    pub monthly_property_taxes: i64,
    #[serde(rename = "monthlyhazardinsurance", deserialize_with = "lenient")]
    pub monthly_hazard_insurance: i64,
    #[serde(rename = "monthlypmi", deserialize_with = "lenient")]
    pub monthly_pmi: i64,
    #[serde(rename = "monthlyhoadues", deserialize_with = "lenient")]
    pub monthly_hoa_dues: i64,
    #[serde(rename = "totalmonthlypayment", deserialize_with = "lenient")]
    pub total_monthly_payment: i64,
    #[serde(rename = "totalpayments", deserialize_with = "lenient")]
    pub total_payments: i64,
    #[serde(rename = "totalinterestpayments", deserialize_with = "lenient")]
    pub total_interest_payments: i64,
    #[serde(rename = "totalprincipal", deserialize_with = "lenient")]
    pub total_principal: i64,
    #[serde(rename = "totaltaxesfeesandinsurance", deserialize_with = "lenient")]
    pub total_taxes_fees_and_insurance: i64,
    #[serde(rename = "monthlyincome", deserialize_with = "lenient")]
    pub monthly_income: i64,
    #[serde(rename = "monthlydebts", deserialize_with = "lenient")]
    pub monthly_debts: i64,
    #[serde(rename = "monthlyincometax", deserialize_with = "lenient")]
    pub monthly_income_tax: i64,
    #[serde(rename = "monthlyremainingbudget", deserialize_with = "lenient")]
    pub monthly_remaining_budget: i64,
    #[serde(rename = "amortizationschedule")]
    pub amortization_schedule: AffordabilitySchedule,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AffordabilitySchedule {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "payment")]
    pub payments: Vec<AffordabilityPayment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AffordabilityPayment {
    #[serde(deserialize_with = "lenient")]
    pub period: u32,
    #[serde(rename = "beginningbalance", deserialize_with = "lenient")]
    pub beginning_balance: i64,
    #[serde(deserialize_with = "lenient")]
    pub payment: i64,
    #[serde(deserialize_with = "lenient")]
    pub principal: i64,
    #[serde(deserialize_with = "lenient")]
    pub interest: i64,
    #[serde(rename = "endingbalance", deserialize_with = "lenient")]
    pub ending_balance: i64,
}

zillow_result!(Affordability, "affordabilitydetails");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::decode;

    #[test]
    fn empty_property_facts_are_zero() {
        let body = r#"<comps><request><zpid>48749425</zpid><count></count></request>
            <message><text>Request successfully processed</text><code>0</code></message>
            <response><properties>
              <principal><zpid>48749425</zpid><yearBuilt></yearBuilt><bedrooms></bedrooms>
                <taxAssessmentYear></taxAssessmentYear><lastSoldPrice currency="USD"></lastSoldPrice></principal>
              <comparables><comp score=""><zpid>48749459</zpid><finishedSqFt></finishedSqFt></comp></comparables>
            </properties></response></comps>"#;
        let result: DeepCompsResult = decode(body, DeepCompsResult::ROOT).unwrap();

        assert_eq!(result.request.count, 0);
        let principal = &result.response.properties.principal;
        assert_eq!(principal.zpid, "48749425");
        assert_eq!(principal.year_built, 0);
        assert_eq!(principal.bedrooms, 0);
        assert_eq!(principal.tax_assessment_year, 0);
        assert_eq!(principal.last_sold_price.value, 0);
        let comp = &result.response.properties.comparables[0];
        assert_eq!(comp.score, 0.0);
        assert_eq!(comp.finished_sq_ft, 0);
    }

    #[test]
    fn empty_payment_figures_are_zero() {
        let body = r#"<paymentsSummary><request><price>300000</price><down></down><dollarsdown></dollarsdown></request>
            <message><text>Request successfully processed</text><code>0</code><limit-warning></limit-warning></message>
            <response><payment loanType="thirtyYearFixed"><rate></rate><monthlyPrincipalAndInterest></monthlyPrincipalAndInterest></payment>
              <downPayment></downPayment><monthlyPropertyTaxes>193</monthlyPropertyTaxes></response></paymentsSummary>"#;
        let result: MonthlyPayments = decode(body, MonthlyPayments::ROOT).unwrap();

        assert_eq!(result.request.price, 300000);
        assert_eq!(result.request.down, 0);
        assert!(!result.message.limit_warning);
        assert_eq!(result.response.payments[0].monthly_principal_and_interest, 0);
        assert_eq!(result.response.down_payment, 0);
        assert_eq!(result.response.monthly_property_taxes, 193);
    }

    #[test]
    fn empty_rate_count_and_page_views_are_zero() {
        let rates: RateSummary = decode(
            r#"<rateSummary><response><today><rate loanType="thirtyYearFixed" count="">5.91</rate></today></response></rateSummary>"#,
            RateSummary::ROOT,
        )
        .unwrap();
        assert_eq!(rates.response.today[0].count, 0);
        assert_eq!(rates.response.today[0].value, 5.91);

        let details: UpdatedPropertyDetails = decode(
            "<updatedPropertyDetails><response><pageViewCount><currentMonth></currentMonth><total>4149</total></pageViewCount>\
             <images><count></count></images><editedFacts><numFloors></numFloors></editedFacts></response></updatedPropertyDetails>",
            UpdatedPropertyDetails::ROOT,
        )
        .unwrap();
        assert_eq!(details.response.page_view_count.current_month, 0);
        assert_eq!(details.response.page_view_count.total, 4149);
        assert_eq!(details.response.images.count, 0);
        assert_eq!(details.response.edited_facts.num_floors, 0);
    }
}
