//! Line-delimited JSON tool server over stdio.
//!
//! One request per line: `{ "id": "...", "tool": "...", "arguments": {...} }`.
//! Every line gets exactly one response line, either
//! `{ "id", "result" }` or `{ "id", "error": { "code", "message" } }`.
//! Bad input never kills the loop; it is answered with an error response.

use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

use crate::error::ToolResult;
use crate::tools;

#[derive(Debug, Deserialize)]
struct ToolRequest {
    id: String,
    tool: String,
    #[serde(default = "empty_object")]
    arguments: Value,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Serves tool requests on stdin/stdout until EOF.
pub async fn serve() -> ToolResult<()> {
    run(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// The serve loop over arbitrary streams.
pub async fn run<R, W>(reader: R, mut writer: W) -> ToolResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(&line).await;
        writer.write_all(response.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    debug!("input closed, shutting down");
    Ok(())
}

async fn handle_line(line: &str) -> String {
    let request: ToolRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "discarding malformed request line");
            return error_response(Value::Null, "invalid_request", &e.to_string());
        }
    };

    match tools::dispatch(&request.tool, request.arguments).await {
        Ok(result) => serde_json::json!({ "id": request.id, "result": result }).to_string(),
        Err(e) => error_response(Value::String(request.id), e.code(), &e.to_string()),
    }
}

fn error_response(id: Value, code: &str, message: &str) -> String {
    serde_json::json!({
        "id": id,
        "error": { "code": code, "message": message }
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn exchange(input: &str) -> Vec<Value> {
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output).await.unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn unknown_tool_keeps_request_id() {
        let responses = exchange(r#"{"id":"r1","tool":"nope","arguments":{}}"#).await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], "r1");
        assert_eq!(responses[0]["error"]["code"], "unknown_tool");
    }

    #[tokio::test]
    async fn malformed_line_gets_error_with_null_id() {
        let responses = exchange("this is not json\n").await;
        assert_eq!(responses.len(), 1);
        assert!(responses[0]["id"].is_null());
        assert_eq!(responses[0]["error"]["code"], "invalid_request");
    }

    #[tokio::test]
    async fn blank_lines_are_skipped() {
        let input = "\n\n{\"id\":\"r2\",\"tool\":\"nope\"}\n\n";
        let responses = exchange(input).await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], "r2");
    }
}
