// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};

use crate::errors::ExecutionError;
use crate::store::edm::EventNavigator;
use crate::traits::EventSource;

/// Reads one [`EventNavigator`] per line from a JSON Lines file.
///
/// The file is opened on the first read, so a missing file surfaces as an
/// [`ExecutionError::Io`] when the run starts. Blank lines are skipped.
pub struct JsonInputSource {
    path: PathBuf,
    name: String,
    lines: Option<Lines<BufReader<File>>>,
    line_no: usize,
}

impl JsonInputSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            path,
            lines: None,
            line_no: 0,
        }
    }
}

#[async_trait]
impl EventSource for JsonInputSource {
    async fn next_event(&mut self) -> Result<Option<EventNavigator>, ExecutionError> {
        if self.lines.is_none() {
            let file = File::open(&self.path).await?;
            self.lines = Some(BufReader::new(file).lines());
        }
        let Some(lines) = self.lines.as_mut() else {
            return Ok(None);
        };

        while let Some(line) = lines.next_line().await? {
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            let nav = serde_json::from_str(&line).map_err(|source| ExecutionError::Decode {
                line: self.line_no,
                source,
            })?;
            return Ok(Some(nav));
        }

        Ok(None)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_events(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".jsonl").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_events_and_skips_blank_lines() {
        let file = write_events(
            r#"{"sim_header": {"event": {"event_id": 1}}}

{"sim_header": {"event": {"event_id": 2, "hits": [{"pmtid": 5, "npe": 1, "hit_time": 3.5}]}}}
"#,
        );
        let mut source = JsonInputSource::new(file.path());

        let first = source.next_event().await.unwrap().unwrap();
        assert_eq!(first.event_id(), Some(1));

        let second = source.next_event().await.unwrap().unwrap();
        assert_eq!(second.event_id(), Some(2));

        assert!(source.next_event().await.unwrap().is_none());
        assert!(source.next_event().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_line_reports_line_number() {
        let file = write_events("{\"sim_header\": null}\n\nnot json\n");
        let mut source = JsonInputSource::new(file.path());

        assert!(source.next_event().await.unwrap().is_some());
        let err = source.next_event().await.unwrap_err();
        assert!(matches!(err, ExecutionError::Decode { line: 3, .. }));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let mut source = JsonInputSource::new("/nonexistent/events.jsonl");
        assert!(matches!(
            source.next_event().await,
            Err(ExecutionError::Io(_))
        ));
        assert_eq!(source.name(), "/nonexistent/events.jsonl");
    }
}
