use iris_das_domain::{LookupResult, OutputFormat};
use std::io::{self, Write};

pub fn print_result(result: &LookupResult, format: OutputFormat) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, result, format)?;
    Ok(())
}

fn write_result<W: Write>(
    out: &mut W,
    result: &LookupResult,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Raw response:")?;
            writeln!(out, "{}", result.raw_reply)?;
            writeln!(out)?;
            writeln!(out, "Parsed response:")?;
            writeln!(out, "Domain: {}", result.domain_name)?;
            writeln!(out, "Status: {}", result.status)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
