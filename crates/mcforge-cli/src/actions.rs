//! Action handlers
//!
//! Each handler follows the same flow as the original tool: resolve the
//! source file, invoke the generator (blocking), then compile or deliver.
//! Source and config failures abort before any network activity.

use std::path::{Path, PathBuf};

use mcforge_core::{compile, BlockPos, CommandBatch, DeliveryPayload};
use mcforge_delivery::DeliveryClient;
use mcforge_source::{CommandSource, ProcessSource};
use tracing::info;

use crate::settings::Settings;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// The source file an action operates on: explicit argument, else the
/// configured index file
pub fn resolve_file(settings: &Settings, explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| settings.generator.index_file.clone())
}

/// Run the generator for the given file
pub fn generate(settings: &Settings, file: &Path) -> Result<CommandBatch> {
    let source = ProcessSource::new(&settings.generator.program);
    Ok(source.generate(file)?)
}

/// Generate and deliver the batch
///
/// `secure` overrides the settings-file transport choice when present
/// (the `upload_secure` / `upload_insecure` actions pin it).
pub async fn upload(settings: &Settings, file: &Path, secure: Option<bool>) -> Result<()> {
    let batch = generate(settings, file)?;

    let mut endpoint = settings.server.clone();
    if let Some(secure) = secure {
        endpoint.secure = secure;
    }

    let payload = DeliveryPayload::new(
        settings.target.world.clone(),
        settings.target.password.expose().clone(),
        batch,
    );

    let receipt = DeliveryClient::new(endpoint).send(payload).await?;

    info!(commands = receipt.commands.len(), "upload complete");
    println!(
        "Sent {} commands ({} bytes):",
        receipt.commands.len(),
        receipt.bytes_sent
    );
    println!("{}", receipt.commands.to_text());
    Ok(())
}

/// Generate and print the batch
pub fn preview(settings: &Settings, file: &Path) -> Result<()> {
    let batch = generate(settings, file)?;
    println!("{}", batch.to_text());
    Ok(())
}

/// Generate, compile into a chain artifact, and print it as JSON
pub fn chain(settings: &Settings, file: &Path, anchor: Option<BlockPos>) -> Result<()> {
    let batch = generate(settings, file)?;
    let artifact = compile(&batch, &settings.chain.placement(), anchor)?;

    info!(cells = artifact.len(), "compiled chain artifact");
    println!("{}", serde_json::to_string_pretty(&artifact)?);
    Ok(())
}
