//! Generates the echo service stubs described by `proto/portico/echo/v1/echo.proto`.
//!
//! Messages are hand-derived with `prost::Message` in `src/messages.rs`, so only
//! the service plumbing is generated here. No `protoc` binary is required.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=proto/portico/echo/v1/echo.proto");

    let echo_service = tonic_build::manual::Service::builder()
        .name("Echo")
        .package("portico.echo.v1")
        .comment("Returns every request unchanged.")
        .method(
            tonic_build::manual::Method::builder()
                .name("echo")
                .route_name("Echo")
                .comment("Echo the user id and text back to the caller.")
                .input_type("crate::messages::EchoRequest")
                .output_type("crate::messages::EchoReply")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    tonic_build::manual::Builder::new().compile(&[echo_service]);
}
