//! Loading the hint table.
//!
//! The table comes from a local file or an `http(s)` URL. Loading is the
//! widget's only asynchronous step: [`load_cmd`] returns a command that
//! resolves to either a [`HintsLoadedMsg`] or a [`HintsLoadErrorMsg`],
//! tagged with the id of the model that asked for it.

use bubbletea_rs::{Cmd, Msg};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default location of the hint table.
pub const DEFAULT_SOURCE: &str = "hintdata.csv";

/// Default limit for a single load.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the hint table is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintSource {
    /// A file on disk.
    Path(PathBuf),
    /// An `http://` or `https://` URL.
    Url(String),
}

impl HintSource {
    /// Interprets `location` as a URL when it has an `http(s)` scheme and as
    /// a filesystem path otherwise.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            HintSource::Url(location.to_string())
        } else {
            HintSource::Path(PathBuf::from(location))
        }
    }
}

impl Default for HintSource {
    fn default() -> Self {
        HintSource::Path(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl fmt::Display for HintSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintSource::Path(path) => write!(f, "{}", path.display()),
            HintSource::Url(url) => f.write_str(url),
        }
    }
}

impl From<&str> for HintSource {
    fn from(location: &str) -> Self {
        Self::parse(location)
    }
}

/// Why the hint table could not be loaded.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading the file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The request could not be made or its body not read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The load did not finish in time.
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// The hint table was loaded.
#[derive(Debug, Clone)]
pub struct HintsLoadedMsg {
    /// Id of the model that requested the load.
    pub id: i64,
    /// Raw table text.
    pub text: String,
}

/// The hint table could not be loaded.
#[derive(Debug, Clone)]
pub struct HintsLoadErrorMsg {
    /// Id of the model that requested the load.
    pub id: i64,
    /// Error description.
    pub err: String,
}

/// Reads the table text from `source`, giving up after `timeout`.
pub async fn fetch(source: &HintSource, timeout: Duration) -> Result<String, LoadError> {
    match source {
        HintSource::Path(path) => {
            match tokio::time::timeout(timeout, tokio::fs::read_to_string(path)).await {
                Ok(Ok(text)) => Ok(text),
                Ok(Err(source)) => Err(LoadError::Io {
                    path: path.clone(),
                    source,
                }),
                Err(_) => Err(LoadError::Timeout(timeout)),
            }
        }
        HintSource::Url(url) => {
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            let response = client.get(url).send().await.map_err(|e| classify(e, timeout))?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status(status.as_u16()));
            }
            response.text().await.map_err(|e| classify(e, timeout))
        }
    }
}

fn classify(err: reqwest::Error, timeout: Duration) -> LoadError {
    if err.is_timeout() {
        LoadError::Timeout(timeout)
    } else {
        LoadError::Http(err)
    }
}

/// Command that loads the table and reports back to the model `id`.
pub fn load_cmd(id: i64, source: HintSource, timeout: Duration) -> Cmd {
    Box::pin(async move {
        let msg = match fetch(&source, timeout).await {
            Ok(text) => {
                log::info!("loaded hint data from {} ({} bytes)", source, text.len());
                Box::new(HintsLoadedMsg { id, text }) as Msg
            }
            Err(err) => {
                log::warn!("failed to load hint data from {}: {}", source, err);
                Box::new(HintsLoadErrorMsg {
                    id,
                    err: err.to_string(),
                }) as Msg
            }
        };
        Some(msg)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::{LoadStatus, Model};
    use bubbletea_rs::Model as BubbleTeaModel;
    use lipgloss_extras::lipgloss;
    use std::io::Write;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one request with an empty body and the given status line.
    async fn serve_status(status: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/hintdata.csv", listener.local_addr().unwrap());
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    status
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        url
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(
            HintSource::parse("https://example.com/hintdata.csv"),
            HintSource::Url("https://example.com/hintdata.csv".to_string())
        );
        assert_eq!(
            HintSource::parse("HTTP://example.com/a.csv"),
            HintSource::Url("HTTP://example.com/a.csv".to_string())
        );
        assert_eq!(
            HintSource::parse("data/hintdata.csv"),
            HintSource::Path(PathBuf::from("data/hintdata.csv"))
        );
        assert_eq!(HintSource::default().to_string(), DEFAULT_SOURCE);
    }

    #[tokio::test]
    async fn test_fetch_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Step,Title\n1,Q1\n").unwrap();
        let source = HintSource::Path(file.path().to_path_buf());
        let text = fetch(&source, DEFAULT_TIMEOUT).await.unwrap();
        assert_eq!(text, "Step,Title\n1,Q1\n");
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = HintSource::Path(dir.path().join("missing.csv"));
        let err = fetch(&source, DEFAULT_TIMEOUT).await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.csv"));
    }

    #[tokio::test]
    async fn test_load_cmd_reports_error_with_id() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = load_cmd(7, HintSource::Path(dir.path().join("nope.csv")), DEFAULT_TIMEOUT);
        let msg = cmd.await.expect("load produces a message");
        let err = msg.downcast_ref::<HintsLoadErrorMsg>().expect("error message");
        assert_eq!(err.id, 7);
    }

    #[tokio::test]
    async fn test_load_cmd_delivers_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Step\n1\n").unwrap();
        let cmd = load_cmd(3, HintSource::Path(file.path().to_path_buf()), DEFAULT_TIMEOUT);
        let msg = cmd.await.expect("load produces a message");
        let loaded = msg.downcast_ref::<HintsLoadedMsg>().expect("loaded message");
        assert_eq!(loaded.id, 3);
        assert_eq!(loaded.text, "Step\n1\n");
    }

    #[tokio::test]
    async fn test_fetch_unanswered_request_times_out() {
        // Connections queue in the backlog but are never answered.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/hintdata.csv", listener.local_addr().unwrap());
        let timeout = Duration::from_millis(200);

        let err = fetch(&HintSource::parse(&url), timeout).await.unwrap_err();
        assert!(matches!(err, LoadError::Timeout(t) if t == timeout), "{:?}", err);
        drop(listener);
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_status_error() {
        let url = serve_status("404 Not Found").await;
        let err = fetch(&HintSource::parse(&url), DEFAULT_TIMEOUT)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Status(404)), "{:?}", err);
        assert_eq!(err.to_string(), "server responded with status 404");
    }

    #[tokio::test]
    async fn test_failed_url_load_replaces_view() {
        let url = serve_status("404 Not Found").await;
        let mut model = Model::new().with_source(url.as_str());

        let msg = model.load_cmd().await.expect("load produces a message");
        model.update(msg);

        assert_eq!(model.error(), Some("server responded with status 404"));
        let view = lipgloss::strip_ansi(&model.view());
        assert!(view.contains(&model.labels.load_error));
        assert!(view.contains("404"));
        assert!(!view.contains("Show all"));
        assert!(matches!(model.status(), LoadStatus::Failed(_)));
    }
}
