use std::fs;

use tonic_build::manual::Method;
use tonic_build::manual::Service;

const PROTO: &str = "../proto/sso.proto";

fn snake_case(name: &str) -> String {
    let mut out = String::new();
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Parse `rpc Name(Input) returns (Output);` into a unary method.
fn parse_rpc(line: &str) -> Option<Method> {
    let rest = line.trim().strip_prefix("rpc ")?;
    let (route, rest) = rest.split_once('(')?;
    let (input, rest) = rest.split_once(')')?;
    let (_, rest) = rest.split_once('(')?;
    let (output, _) = rest.split_once(')')?;
    let route = route.trim();

    Some(
        Method::builder()
            .name(snake_case(route))
            .route_name(route)
            .input_type(format!("crate::proto::{}", input.trim()))
            .output_type(format!("crate::proto::{}", output.trim()))
            .codec_path("tonic::codec::ProstCodec")
            .build(),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Server stubs for the Auth service; message types live in src/lib/proto.rs
    let proto = fs::read_to_string(PROTO)?;
    let methods: Vec<Method> = proto.lines().filter_map(parse_rpc).collect();
    if methods.is_empty() {
        return Err(format!("no rpc definitions found in {}", PROTO).into());
    }

    let auth_service = methods
        .into_iter()
        .fold(Service::builder().name("Auth").package("sso"), |builder, method| {
            builder.method(method)
        })
        .build();

    tonic_build::manual::Builder::new()
        .build_server(true)
        .build_client(false)
        .compile(&[auth_service]);

    println!("cargo:rerun-if-changed={}", PROTO);
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
