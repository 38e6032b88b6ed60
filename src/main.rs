use std::process::ExitCode;

use anyhow::Context;

fn main() -> anyhow::Result<ExitCode> {
    let status = wraprun::run().context("wraprun failed")?;
    Ok(u8::try_from(status)
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE))
}
