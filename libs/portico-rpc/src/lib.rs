//! # Portico Echo RPC
//!
//! The echo service is Portico's IDL example: `proto/portico/echo/v1/echo.proto`
//! declares one call taking a user id and a text, and returning both unchanged.
//!
//! - [`messages`]: prost messages matching the IDL
//! - [`proto`]: tonic server and client stubs generated at build time
//! - [`EchoHandler`]: the server-side implementation
//! - [`serve`]: runs the service on a bound listener until shutdown

mod handler;
pub mod messages;

/// Generated tonic stubs for `portico.echo.v1.Echo`
pub mod proto {
    include!(concat!(env!("OUT_DIR"), "/portico.echo.v1.Echo.rs"));
}

pub use handler::EchoHandler;
pub use messages::{EchoReply, EchoRequest};
pub use proto::echo_client::EchoClient;
pub use proto::echo_server::{Echo, EchoServer};

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tracing::info;

/// Serve the echo service on `listener` until `shutdown` resolves
///
/// The caller keeps a clone of `handler` to read its call counter afterwards.
///
/// # Errors
///
/// Returns the transport error if the server fails while running
pub async fn serve<F>(
    listener: TcpListener,
    handler: Arc<EchoHandler>,
    shutdown: F,
) -> Result<(), tonic::transport::Error>
where
    F: Future<Output = ()> + Send,
{
    if let Ok(addr) = listener.local_addr() {
        info!(addr = %addr, "Starting gRPC server");
    }

    tonic::transport::Server::builder()
        .add_service(EchoServer::from_arc(handler))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
}
