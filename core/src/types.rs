//! Value types shared by several Zillow result documents.
//!
//! # Design
//! Field layout mirrors the service's XML schema; serde attributes carry the
//! element and attribute names. Every struct is `#[serde(default)]` so that an
//! element the service omits decodes to the zero value instead of failing.
//! Coordinates and index values stay `String` because the service formats
//! them freely (`"525,397"`, empty latitude).

use serde::Deserialize;

use crate::xml::{lenient, lenient_bool};

/// Status envelope present in every response.
///
/// `code == 0` means the request was processed. Any other code is a
/// service-reported error that still arrives as a well-formed document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Message {
    pub text: String,
    #[serde(deserialize_with = "lenient")]
    pub code: i32,
    #[serde(rename = "limit-warning", deserialize_with = "lenient_bool")]
    pub limit_warning: bool,
}

impl Message {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub zipcode: String,
    pub city: String,
    pub state: String,
    pub latitude: String,
    pub longitude: String,
}

/// A money figure: `<amount currency="USD">1219500</amount>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Amount {
    #[serde(rename = "@currency")]
    pub currency: String,
    #[serde(rename = "$text", deserialize_with = "lenient")]
    pub value: i64,
}

impl Amount {
    pub fn usd(value: i64) -> Self {
        Self {
            currency: "USD".to_string(),
            value,
        }
    }
}

/// Change in value over `duration` days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValueChange {
    #[serde(rename = "@duration", deserialize_with = "lenient")]
    pub duration: u32,
    #[serde(rename = "@currency")]
    pub currency: String,
    #[serde(rename = "$text", deserialize_with = "lenient")]
    pub value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValuationRange {
    pub low: Amount,
    pub high: Amount,
}

/// Estimated market (or rental) value of a property.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Zestimate {
    pub amount: Amount,
    #[serde(rename = "last-updated")]
    pub last_updated: String,
    #[serde(rename = "valueChange")]
    pub value_change: ValueChange,
    #[serde(rename = "valuationRange")]
    pub valuation_range: ValuationRange,
    pub percentile: String,
}

/// Links attached to a property.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(rename = "homedetails")]
    pub home_details: String,
    #[serde(rename = "graphsanddata")]
    pub graphs_and_data: String,
    #[serde(rename = "mapthishome")]
    pub map_this_home: String,
    #[serde(rename = "myzestimator")]
    pub my_zestimator: String,
    pub comparables: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegionLinks {
    pub overview: String,
    #[serde(rename = "forSaleByOwner")]
    pub for_sale_by_owner: String,
    #[serde(rename = "forSale")]
    pub for_sale: String,
}

/// A `<localRealEstate><region>` entry: neighborhood, city or state that
/// contains the property.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RealEstateRegion {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "zindexValue")]
    pub zindex: String,
    #[serde(rename = "zindexOneYearChange", deserialize_with = "lenient")]
    pub zindex_one_year_change: f64,
    pub links: RegionLinks,
}

/// Identifiers of the regions a property belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegionIds {
    #[serde(rename = "zipcode-id")]
    pub zipcode_id: String,
    #[serde(rename = "city-id")]
    pub city_id: String,
    #[serde(rename = "county-id")]
    pub county_id: String,
    #[serde(rename = "state-id")]
    pub state_id: String,
}

/// A `<region>` entry from GetRegionChildren.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub country: String,
    pub state: String,
    pub county: String,
    pub city: String,
    #[serde(rename = "cityurl")]
    pub city_url: String,
    pub latitude: String,
    pub longitude: String,
    pub zindex: Amount,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_defaults_to_success() {
        let message = Message::default();
        assert!(message.is_success());
        assert!(!message.limit_warning);
    }

    #[test]
    fn message_decodes_limit_warning() {
        let message: Message = quick_xml::de::from_str(
            "<message><text>Request successfully processed</text><code>0</code><limit-warning>true</limit-warning></message>",
        )
        .unwrap();
        assert_eq!(message.text, "Request successfully processed");
        assert!(message.limit_warning);
    }

    #[test]
    fn zestimate_decodes_nested_range() {
        let zestimate: Zestimate = quick_xml::de::from_str(
            r#"<zestimate>
                <amount currency="USD">1219500</amount>
                <last-updated>11/03/2009</last-updated>
                <valueChange duration="30" currency="USD">-41500</valueChange>
                <valuationRange>
                    <low currency="USD">1024380</low>
                    <high currency="USD">1378035</high>
                </valuationRange>
                <percentile>95</percentile>
            </zestimate>"#,
        )
        .unwrap();
        assert_eq!(zestimate.amount, Amount::usd(1219500));
        assert_eq!(zestimate.value_change.duration, 30);
        assert_eq!(zestimate.value_change.value, -41500);
        assert_eq!(zestimate.valuation_range.low, Amount::usd(1024380));
        assert_eq!(zestimate.valuation_range.high, Amount::usd(1378035));
        assert_eq!(zestimate.percentile, "95");
    }

    #[test]
    fn region_attributes_and_links() {
        let region: RealEstateRegion = quick_xml::de::from_str(
            r#"<region id="16037" type="city" name="Seattle">
                <zindexValue>381,764</zindexValue>
                <zindexOneYearChange>-0.074</zindexOneYearChange>
                <links><overview>http://www.zillow.com/local-info/WA-Seattle/r_16037/</overview></links>
            </region>"#,
        )
        .unwrap();
        assert_eq!(region.id, "16037");
        assert_eq!(region.kind, "city");
        assert_eq!(region.zindex, "381,764");
        assert_eq!(region.zindex_one_year_change, -0.074);
        assert_eq!(region.links.overview, "http://www.zillow.com/local-info/WA-Seattle/r_16037/");
        assert!(region.links.for_sale.is_empty());
    }

    #[test]
    fn missing_elements_are_zero() {
        let address: Address = quick_xml::de::from_str("<address><zipcode>98109</zipcode></address>").unwrap();
        assert_eq!(address.zipcode, "98109");
        assert!(address.street.is_empty());
    }

    #[test]
    fn empty_message_scalars_are_zero() {
        let message: Message = quick_xml::de::from_str(
            "<message><text>Request successfully processed</text><code></code><limit-warning></limit-warning></message>",
        )
        .unwrap();
        assert!(message.is_success());
        assert!(!message.limit_warning);
    }

    #[test]
    fn empty_value_change_duration_is_zero() {
        let change: ValueChange =
            quick_xml::de::from_str(r#"<valueChange duration="" currency="USD">-41500</valueChange>"#).unwrap();
        assert_eq!(change.duration, 0);
        assert_eq!(change.value, -41500);
    }
}
