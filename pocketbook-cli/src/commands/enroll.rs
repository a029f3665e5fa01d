//! Enroll command - store a credential from an enrollment payload

use std::path::Path;

use anyhow::{Context as _, Result};

use pocketbook_core::EnrollmentPayload;

use super::get_context;
use crate::output;

pub fn run(file: &Path) -> Result<()> {
    let ctx = get_context()?;

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("could not read {}", file.display()))?;
    let payload: EnrollmentPayload =
        serde_json::from_str(&content).context("payload is not valid enrollment JSON")?;

    let credential = ctx.credentials.store_from_enrollment(payload)?;
    output::success(&format!(
        "Stored credential for {}",
        credential.institution_name
    ));

    Ok(())
}
