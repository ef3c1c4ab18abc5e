use std::io::{Error, ErrorKind, Read, Result, Write};

use prost::Message;
use prost_types::compiler::CodeGeneratorRequest;

fn main() -> Result<()> {
    env_logger::init();

    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;

    let request = CodeGeneratorRequest::decode(&*buf).map_err(|error| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("invalid CodeGeneratorRequest: {}", error),
        )
    })?;

    let response = protoc_gen_dts::run_plugin(request);

    buf.clear();
    response.encode(&mut buf).map_err(|error| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("invalid CodeGeneratorResponse: {}", error),
        )
    })?;
    std::io::stdout().write_all(&buf)?;

    Ok(())
}
