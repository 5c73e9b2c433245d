//! Wire messages for the echo service
//!
//! Field tags match `proto/portico/echo/v1/echo.proto`. Keep the two in sync.

use portico_domain::Item;

/// Request carrying a user id and a piece of text
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EchoRequest {
    #[prost(int64, tag = "1")]
    pub user_id: i64,
    #[prost(string, tag = "2")]
    pub text: ::prost::alloc::string::String,
}

/// Reply carrying the request's fields unchanged
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EchoReply {
    #[prost(int64, tag = "1")]
    pub user_id: i64,
    #[prost(string, tag = "2")]
    pub text: ::prost::alloc::string::String,
}

impl From<EchoRequest> for EchoReply {
    fn from(request: EchoRequest) -> Self {
        Self {
            user_id: request.user_id,
            text: request.text,
        }
    }
}

impl From<&Item> for EchoRequest {
    fn from(item: &Item) -> Self {
        Self {
            user_id: item.user_id().get(),
            text: item.text().to_string(),
        }
    }
}

impl From<EchoReply> for Item {
    fn from(reply: EchoReply) -> Self {
        Item::new(reply.user_id, reply.text)
    }
}
