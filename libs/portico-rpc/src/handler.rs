//! Echo service implementation

use std::sync::atomic::{AtomicU64, Ordering};

use tonic::{Request, Response, Status};
use tracing::{debug, instrument};

use crate::messages::{EchoReply, EchoRequest};
use crate::proto::echo_server::Echo;

/// Server-side handler for `portico.echo.v1.Echo`
///
/// Every reply carries the request's fields unchanged. The handler counts the
/// calls it has served, which is handy in tests and logs.
#[derive(Debug, Default)]
pub struct EchoHandler {
    served: AtomicU64,
}

impl EchoHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls answered so far
    pub fn served(&self) -> u64 {
        self.served.load(Ordering::Relaxed)
    }
}

#[tonic::async_trait]
impl Echo for EchoHandler {
    #[instrument(skip_all)]
    async fn echo(&self, request: Request<EchoRequest>) -> Result<Response<EchoReply>, Status> {
        let request = request.into_inner();
        let total = self.served.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(
            user_id = request.user_id,
            text_len = request.text.len(),
            total,
            "Echoing request"
        );

        Ok(Response::new(EchoReply::from(request)))
    }
}
