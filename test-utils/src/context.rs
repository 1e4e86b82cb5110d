use tokio::{net::TcpListener, task::JoinHandle};

use crate::{
    error::TestError,
    mock::{lock_log, RecordedRequest, RequestLog, BASE_PATH},
};

/// Running mock upstream API.
///
/// Exposes the base URL to point the proxy at and every request the mock has received.
/// The server is stopped when the context is dropped.
pub struct TestContext {
    /// Base URL of the mock upstream, including [`BASE_PATH`].
    base_url: String,

    /// Requests received so far, in arrival order.
    log: RequestLog,

    /// Task serving the mock upstream.
    server: JoinHandle<()>,
}

impl TestContext {
    pub(crate) fn new(base_url: String, log: RequestLog, server: JoinHandle<()>) -> Self {
        Self {
            base_url,
            log,
            server,
        }
    }

    /// Base URL to configure as the upstream root, e.g. `http://127.0.0.1:54321/v1`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Snapshot of every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock_log(&self.log).clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        lock_log(&self.log).len()
    }

    /// Requests whose path starts with `prefix` below the base path.
    ///
    /// # Arguments
    /// - `prefix` - Path prefix relative to the base path, e.g. `"/armylists"`
    ///
    /// # Returns
    /// - `Vec<RecordedRequest>` - Matching requests in arrival order
    pub fn requests_to(&self, prefix: &str) -> Vec<RecordedRequest> {
        let prefix = format!("{}{}", BASE_PATH, prefix);

        lock_log(&self.log)
            .iter()
            .filter(|request| request.path.starts_with(&prefix))
            .cloned()
            .collect()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Returns a base URL on which nothing is listening.
///
/// Binds an ephemeral port and releases it immediately, so connections are refused.
///
/// # Returns
/// - `Ok(String)` - Base URL such as `http://127.0.0.1:54321/v1`
/// - `Err(TestError::Io)` - Failed to bind the temporary listener
pub async fn unreachable_base_url() -> Result<String, TestError> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{}{}", addr, BASE_PATH))
}
