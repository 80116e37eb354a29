//! Build script for compiling Protocol Buffer definitions.
//!
//! Uses `tonic-build` to generate Rust code from the `.proto` files for all
//! AI Finance Agency microservices, and emits a file descriptor set so
//! servers can offer gRPC reflection.

use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_files = [
        "proto/common.proto",
        "proto/health.proto",
        "proto/metrics.proto",
        "proto/signals.proto",
        "proto/payment.proto",
        "proto/user.proto",
        "proto/notification.proto",
        "proto/risk.proto",
        "proto/education.proto",
    ];

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .file_descriptor_set_path(out_dir.join("aifa_descriptor.bin"))
        .compile_protos(&proto_files, &["proto/"])?;

    // Re-run build if any proto file changes
    for proto in &proto_files {
        println!("cargo:rerun-if-changed={proto}");
    }

    Ok(())
}
