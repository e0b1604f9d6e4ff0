//! Synchronous client for the Zillow real-estate web service.
//!
//! # Overview
//! Every endpoint (Zestimates, search, comparables, property details,
//! charts, regions, mortgage rates and calculators) is one operation. It
//! takes a typed request and returns a typed result decoded from the
//! service's XML.
//!
//! # Design
//! - `ZillowClient` is stateless and touches no network. It holds only the
//!   base URL and application id, and splits each operation into `build_*`
//!   (produces an `HttpRequest`) and `parse_*` (consumes an `HttpResponse`).
//! - `Transport` executes requests; `UreqTransport` is the blocking default.
//! - `Zillow<T>` joins the two into one method per operation.
//! - Results mirror the XML schema: `request` echo, `message` status and
//!   `response` payload. A non-zero `message.code` is data, not an error.
//!
//! ```no_run
//! use zillow_core::{ClientConfig, Zillow, ZestimateRequest, ZillowResult};
//!
//! let zillow = Zillow::from_config(&ClientConfig::new("X1-your-zws-id"));
//! let result = zillow.get_zestimate(&ZestimateRequest {
//!     zpid: "48749425".to_string(),
//!     rentzestimate: false,
//! })?;
//! if result.message().is_success() {
//!     println!("{}", result.response.zestimate.amount.value);
//! }
//! # Ok::<(), zillow_core::ApiError>(())
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod operation;
pub mod requests;
pub mod responses;
pub mod transport;
pub mod types;
mod xml;

pub use api::Zillow;
pub use client::ZillowClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ConfigError};
pub use http::{HttpRequest, HttpResponse};
pub use operation::Operation;
pub use requests::*;
pub use responses::*;
pub use transport::{Transport, UreqTransport};
pub use types::{
    Address, Amount, Links, Message, RealEstateRegion, Region, RegionIds, RegionLinks,
    ValuationRange, ValueChange, Zestimate,
};
