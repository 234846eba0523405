//! HTTP server and request loop.

mod dispatch;
mod path;
mod response;
pub mod state;

pub use dispatch::{Outcome, Site, dispatch};

use crate::{config::SiteConfig, log};
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

/// Bind the server and run the request loop until shutdown.
pub fn run(config: &SiteConfig) -> Result<()> {
    let (server, addr) = bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    state::register_server(Arc::clone(&server));

    let site = Arc::new(Site::from_config(config));
    log!("serve"; "http://{}", addr);

    run_request_loop(&server, &site);
    Ok(())
}

/// Bind to the specified interface and port, with automatic port retry.
fn bind_with_retry(interface: std::net::IpAddr, base_port: u16) -> Result<(Server, SocketAddr)> {
    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < MAX_PORT_RETRIES => continue,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to bind after {} attempts (ports {}-{}): {}",
                    MAX_PORT_RETRIES,
                    base_port,
                    port,
                    e
                ));
            }
        }
    }
    unreachable!()
}

fn run_request_loop(server: &Server, site: &Arc<Site>) {
    // Use thread pool to handle requests concurrently; requests share only
    // the read-only Site, so they need no coordination
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        let site = Arc::clone(site);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &site) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, site: &Site) -> Result<()> {
    if state::is_shutdown() {
        return response::respond_unavailable(request);
    }

    match dispatch(site, request.url()) {
        Outcome::Page(html) => response::respond_page(request, html),
        Outcome::NotFound => response::respond_not_found(request),
    }
}
