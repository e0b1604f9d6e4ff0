//! The fixed table of web-service endpoints.

use std::fmt;

/// One Zillow web-service endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetZestimate,
    GetSearchResults,
    GetChart,
    GetComps,
    GetDeepComps,
    GetDeepSearchResults,
    GetUpdatedPropertyDetails,
    GetRegionChildren,
    GetRegionChart,
    GetRateSummary,
    GetMonthlyPayments,
    CalculateMonthlyPaymentsAdvanced,
    CalculateAffordability,
}

impl Operation {
    pub const ALL: [Operation; 13] = [
        Operation::GetZestimate,
        Operation::GetSearchResults,
        Operation::GetChart,
        Operation::GetComps,
        Operation::GetDeepComps,
        Operation::GetDeepSearchResults,
        Operation::GetUpdatedPropertyDetails,
        Operation::GetRegionChildren,
        Operation::GetRegionChart,
        Operation::GetRateSummary,
        Operation::GetMonthlyPayments,
        Operation::CalculateMonthlyPaymentsAdvanced,
        Operation::CalculateAffordability,
    ];

    /// Path segment, without the `.htm` suffix.
    pub fn path(self) -> &'static str {
        match self {
            Operation::GetZestimate => "GetZestimate",
            Operation::GetSearchResults => "GetSearchResults",
            Operation::GetChart => "GetChart",
            Operation::GetComps => "GetComps",
            Operation::GetDeepComps => "GetDeepComps",
            Operation::GetDeepSearchResults => "GetDeepSearchResults",
            Operation::GetUpdatedPropertyDetails => "GetUpdatedPropertyDetails",
            Operation::GetRegionChildren => "GetRegionChildren",
            Operation::GetRegionChart => "GetRegionChart",
            Operation::GetRateSummary => "GetRateSummary",
            Operation::GetMonthlyPayments => "GetMonthlyPayments",
            Operation::CalculateMonthlyPaymentsAdvanced => "CalculateMonthlyPaymentsAdvanced",
            Operation::CalculateAffordability => "CalculateAffordability",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.strip_suffix(".htm").unwrap_or(path);
        Self::ALL.into_iter().find(|op| op.path() == path)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_accepts_htm_suffix() {
        assert_eq!(Operation::from_path("GetZestimate.htm"), Some(Operation::GetZestimate));
        assert_eq!(Operation::from_path("GetComps"), Some(Operation::GetComps));
        assert_eq!(Operation::from_path("GetNothing.htm"), None);
    }

    #[test]
    fn every_operation_round_trips_through_its_path() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_path(op.path()), Some(op));
        }
    }
}
