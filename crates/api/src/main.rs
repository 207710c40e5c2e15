use snappoll_config::AppConfig;

#[tokio::main]
async fn main() {
    snappoll_observability::init();
    snappoll_observability::restart_divider();

    // Configuration is fatal: no listener until every section is populated.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let common = config.common();
    tracing::info!(
        version = %common.version,
        run_mode = ?common.run_mode,
        "starting snappoll api"
    );

    let app = snappoll_api::app::build_app(&config);

    let addr = format!("0.0.0.0:{}", common.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    snappoll_api::app::serve(listener, app)
        .await
        .expect("server error");
}
