/// HTTP layer: request building, transport, status handling, errors.
pub mod errors;
pub mod pipeline;
pub mod transport;

pub use errors::{ClientError, CsvShape};
pub use pipeline::{ClientConfig, RequestPipeline};
pub use transport::{Method, ReqwestTransport};
