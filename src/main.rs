use anyhow::{Context, Result};
use axum::Router;
use cloud_sdk_shapes::{
    config, models::describe_network_interfaces::DescribeNetworkInterfacesRequest, routes,
    services::shape_service::ShapeService,
};
use std::{fs, io::ErrorKind, path::Path};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // --- Parse config + marshal flag ---
    let (cfg, marshal) = config::AppConfig::from_env_and_args()?;

    let service = ShapeService::new();

    // --- Handle one-shot marshal mode ---
    if let Some(path) = marshal {
        let body = marshal_file(&service, &path)?;
        println!("{}", body);
        return Ok(()); // exit after printing
    }

    tracing::info!("Starting sdk shape preview with config: {:?}", cfg);

    // --- Build router ---
    let app: Router = routes::routes::routes().with_state(service);

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Read a request JSON file and return its form-encoded body.
fn marshal_file(service: &ShapeService, path: &Path) -> Result<String> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading request file {}", path.display()))?;
    let request: Option<DescribeNetworkInterfacesRequest> = serde_json::from_str(&json)
        .with_context(|| format!("parsing request JSON in {}", path.display()))?;
    tracing::debug!("Marshalling request from {}", path.display());

    let body = service.describe_network_interfaces_body(request.as_ref())?;
    Ok(String::from_utf8(body.to_vec())?)
}
