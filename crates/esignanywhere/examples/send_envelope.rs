//! Example: upload a document and send it for signature.
//!
//! Usage:
//!   cargo run -p esignanywhere --example send_envelope -- <file> <signer-email>
//!
//! Reads the API token from ESIGNANYWHERE_API_TOKEN (a `.env` file works too).
//! Set ESIGNANYWHERE_ENV=production to use the production installation.

use esignanywhere::models::v6::{
    Activity, ContactInformation, Document, EnvelopeSendRequest, RecipientConfiguration,
};
use esignanywhere::{ClientConfig, EsignClient, EsignError, Result, UploadSource};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("esignanywhere=info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(file), Some(email)) = (args.next(), args.next()) else {
        return Err(EsignError::NotConfigured(
            "usage: send_envelope <file> <signer-email>".to_string(),
        ));
    };

    let client = EsignClient::new(ClientConfig::from_env()?)?;
    let version = client.get_version().await?;
    println!("eSignAnyWhere {} at {}", version.version, client.api_uri());

    let upload = client.upload_file(UploadSource::path(&file)).await?;
    println!("uploaded {file} as {}", upload.file_id);

    let request = EnvelopeSendRequest::new(
        format!("Please sign {file}"),
        vec![Document::new(upload.file_id, 0)],
        vec![Activity::sign(RecipientConfiguration::new(
            ContactInformation::new(email, "Signer", "Example"),
        ))],
    );
    let envelope = client.create_and_send_envelope(&request).await?;
    println!("sent envelope {}", envelope.envelope_id);

    let details = client.get_envelope(&envelope.envelope_id).await?;
    println!(
        "status: {}",
        details.status_name().unwrap_or_else(|| "unknown".to_string())
    );

    Ok(())
}
