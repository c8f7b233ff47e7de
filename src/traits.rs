//! Core TemperatureConverter trait

use async_trait::async_trait;

use crate::Result;
use crate::types::{Conversion, ConvertRequest};

/// Something that can carry out a conversion request.
///
/// The HTTP gateway depends only on this trait, so it can sit in front of
/// the in-process service handler or a remote gRPC endpoint without
/// knowing which.
#[async_trait]
pub trait TemperatureConverter: Send + Sync {
    async fn convert(&self, request: ConvertRequest) -> Result<Conversion>;
}
