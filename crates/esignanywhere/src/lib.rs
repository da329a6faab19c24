//! Rust client for the eSignAnyWhere e-signature REST API.
//!
//! Wraps the v4/v5/v6 endpoints as async methods on [`EsignClient`]: upload
//! documents, send envelopes and drafts, look them up, cancel or delete them,
//! and manage organization teams.
//!
//! # Example
//!
//! ```rust,no_run
//! use esignanywhere::{ClientConfig, EsignClient, UploadSource};
//! use esignanywhere::models::v6::{
//!     Activity, ContactInformation, Document, EnvelopeSendRequest, RecipientConfiguration,
//! };
//!
//! # async fn example() -> esignanywhere::Result<()> {
//! let client = EsignClient::new(ClientConfig::from_env()?)?;
//!
//! let file = client.upload_file(UploadSource::path("contract.pdf")).await?;
//! let recipient = RecipientConfiguration::new(ContactInformation::new(
//!     "signer@example.com",
//!     "Mario",
//!     "Rossi",
//! ));
//! let envelope = client
//!     .create_and_send_envelope(&EnvelopeSendRequest::new(
//!         "Contract",
//!         vec![Document::new(file.file_id, 0)],
//!         vec![Activity::sign(recipient)],
//!     ))
//!     .await?;
//! println!("sent {}", envelope.envelope_id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod version;

pub use client::EsignClient;
pub use config::{ClientConfig, Environment, PRODUCTION_API_DOMAIN, TEST_API_DOMAIN};
pub use error::{EsignError, ResponseFailure, Result};
pub use models::{EnvelopeDetails, UploadSource, VersionResponse};
pub use version::ApiVersion;
