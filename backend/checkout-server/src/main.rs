use checkout_server::{self, app, configs, consts, logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[allow(clippy::expect_used)]
    let config = configs::Config::new().expect("Failed while parsing config");

    let _guard = logger::setup(
        &config.log,
        checkout_server::service_name!(),
        consts::WORKSPACE_CRATES
            .iter()
            .copied()
            .chain([checkout_server::service_name!(), "tower_http"])
            .collect::<Vec<_>>(),
    )?;

    let metrics_server = app::metrics_server_builder(config.clone());
    let server = app::server_builder(config);

    tokio::try_join!(metrics_server, server)?;

    Ok(())
}
