//! A client SDK for the TCU undergraduate admissions API.
//!
//! Requests are nested [Value]s wrapped in a credential envelope and sent as XML; `200`
//! replies come back as an [Element] tree, anything else as the raw body.
//! # Checking applicants
//! ```no_run
//! use tcu_sdk::{Client, Mapping, Value};
//!
//! # async fn run() -> Result<(), tcu_sdk::SdkError> {
//! let client = Client::new("UD", "aaa123aaa123");
//!
//! let response = client.check_status(&["S0100/0001/2019"]).await?;
//! if let Some(root) = response.element() {
//!     println!("{:?}", root.find(&["ResponseParameters", "StatusCode"]));
//! }
//!
//! // Batches send one RequestParameters block per record
//! client
//!     .add_batch(Value::from(vec![
//!         Value::from(Mapping::new().with("f4indexno", "S0100/0001/2019")),
//!         Value::from(Mapping::new().with("f4indexno", "S0100/0002/2019")),
//!     ]))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//! # Bindings
//! Bindings for Kotlin and Swift can be generated with
//! [UniFFI](https://mozilla.github.io/uniffi-rs/latest/tutorial/foreign_language_bindings.html#multi-crate-workspaces).
//!

pub mod client;
pub mod config;
pub mod enums;
pub mod envelope;
pub mod errors;
mod exports;
pub mod http;
pub mod models;

uniffi::setup_scaffolding!();

pub use client::Client;
pub use config::ClientConfig;
pub use enums::endpoint::Endpoint;
pub use enums::http_method::HttpMethod;
pub use envelope::Envelope;
pub use errors::sdk_error::SdkError;
pub use models::element::Element;
pub use models::programme_submission::ProgrammeSubmission;
pub use models::response::Response;
pub use models::resubmission::Resubmission;
pub use models::value::{Mapping, Scalar, Value};
