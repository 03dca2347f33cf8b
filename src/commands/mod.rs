/// Command execution: resolve the sink, run the pipeline, emit the body.
use crate::cli::{Cli, DebugTimer};
use crate::client::transport::Transport;
use crate::client::{ClientConfig, ClientError, ReqwestTransport, RequestPipeline};
use crate::sink::OutputTarget;

/// Run the parsed command line against the real network.
///
/// # Errors
///
/// Returns `ClientError` on any failure; nothing is retried.
pub fn dispatch(cli: &Cli) -> Result<(), ClientError> {
    run_with(cli, ReqwestTransport::new())
}

/// Run the parsed command line over `transport`.
///
/// The output target is resolved before the request goes out, so an
/// unsupported extension never costs a network call.
///
/// # Errors
///
/// Returns `ClientError` on any failure.
pub fn run_with<T: Transport>(cli: &Cli, transport: T) -> Result<(), ClientError> {
    let target = OutputTarget::from_path(cli.output.as_deref())?;
    let pipeline = RequestPipeline::new(ClientConfig::new(cli.base_url.clone()), transport);

    let _t_request = DebugTimer::start("request");
    let body = pipeline.execute(cli.method.into(), &cli.endpoint, cli.data.as_deref())?;
    drop(_t_request);

    let _t_emit = DebugTimer::start("emit");
    target.emit(&body)
}
