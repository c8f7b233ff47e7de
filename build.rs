use vergen_gitcl::{Build, Cargo, Emitter, Gitcl};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let build = Build::builder().build_timestamp(true).build();
    let cargo = Cargo::builder().build();
    let gitcl = Gitcl::builder().branch(true).sha(true).dirty(true).build();

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&gitcl)?
        .emit()?;

    // Service stubs only; message types are prost derives in src/server/proto.rs,
    // so no protoc is needed. Keep both in sync with proto/tempconv/v1/tempconv.proto.
    #[cfg(any(feature = "server", feature = "client"))]
    {
        println!("cargo:rerun-if-changed=proto/tempconv/v1/tempconv.proto");

        let service = tonic_build::manual::Service::builder()
            .name("TempConverter")
            .package("tempconv.v1")
            .method(
                tonic_build::manual::Method::builder()
                    .name("convert_temperature")
                    .route_name("ConvertTemperature")
                    .input_type("crate::server::proto::ConvertRequest")
                    .output_type("crate::server::proto::ConvertResponse")
                    .codec_path("tonic::codec::ProstCodec")
                    .build(),
            )
            .build();

        tonic_build::manual::Builder::new()
            .build_server(cfg!(feature = "server"))
            .build_client(cfg!(feature = "client"))
            .compile(&[service]);
    }

    // Encoded descriptor set served by gRPC reflection.
    #[cfg(feature = "server")]
    {
        let descriptor = protox::Compiler::new(["proto"])?
            .include_imports(true)
            .include_source_info(true)
            .open_files(["tempconv/v1/tempconv.proto"])?
            .encode_file_descriptor_set();
        let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR")?);
        std::fs::write(out_dir.join("tempconv_descriptor.bin"), descriptor)?;
    }

    Ok(())
}
