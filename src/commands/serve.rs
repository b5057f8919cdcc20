//! HTTP server command

use log::{info, warn};
use tiny_http::Server;

use regimed::config::Config;

use crate::server::tiny_http::handle_api_request;

/// Serve the API until the process is stopped
pub fn serve(config: &Config) -> anyhow::Result<()> {
    let server = Server::http(&config.bind)
        .map_err(|e| anyhow::anyhow!("Failed to start server on {}: {e}", config.bind))?;

    info!("regimed v{} listening on http://{}", regimed::VERSION, config.bind);
    info!("rules: {}", config.rule_source().path().display());
    info!("regulations: {}", config.regulation_store().path().display());

    for mut request in server.incoming_requests() {
        info!("{} {}", request.method(), request.url());
        let response = handle_api_request(&mut request, config);
        if let Err(e) = request.respond(response) {
            warn!("failed to send response: {e}");
        }
    }

    Ok(())
}
