//! Terminal prompt and result display.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::domain::StopPoint;

/// Text shown before reading the postcode.
pub const PROMPT: &str = "Enter your postcode: ";

/// Write the prompt and read one line of input.
///
/// The reader is taken by value and dropped before returning, so the input
/// handle is released whether or not the read succeeds. End of input yields
/// an empty string.
pub async fn prompt_for_postcode<R, W>(reader: R, writer: &mut W) -> std::io::Result<String>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = reader;

    writer.write_all(PROMPT.as_bytes()).await?;
    writer.flush().await?;

    let mut line = String::new();
    reader.read_line(&mut line).await?;
    Ok(line)
}

/// Print each stop's common name on its own line.
pub async fn display_stop_points<W>(writer: &mut W, stops: &[StopPoint]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut out = String::new();
    for stop in stops {
        out.push_str(&stop.common_name);
        out.push('\n');
    }

    writer.write_all(out.as_bytes()).await?;
    writer.flush().await
}
