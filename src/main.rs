use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    middleware::Logger,
    web::{get, Data, JsonConfig, PathConfig},
    App, HttpResponse, HttpServer,
};
use rewards_accounts::{
    account::store::InMemoryAccountStore, config::Config, controller::AccountController,
    errors::AccountsError, routes, telemetry, version,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::get().expect("failed to parse config");
    telemetry::setup();

    let store =
        InMemoryAccountStore::from_file(&config.accounts_path).expect("failed to load accounts");
    tracing::info!(
        "loaded {} accounts from {}",
        store.len(),
        &config.accounts_path
    );

    let controller = Data::new(AccountController::new(Arc::new(store)));
    let config_data = Data::new(config.clone());

    let host = config.host.clone();
    let port = config.port;
    tracing::info!("starting webserver at http://{}:{}", &host, &port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allow_any_header()
            .max_age(3600);

        let json_config = JsonConfig::default()
            .error_handler(|err, _| AccountsError::BadRequest(err.to_string()).into());
        let path_config = PathConfig::default()
            .error_handler(|err, _| AccountsError::BadRequest(err.to_string()).into());

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(json_config)
            .app_data(path_config)
            .app_data(config_data.clone())
            .app_data(controller.clone())
            .route("/", get().to(|| HttpResponse::Ok()))
            .route("/version", get().to(version::version))
            .route("/accounts", get().to(routes::account_list))
            .route("/accounts/{id}", get().to(routes::account_details))
            .route(
                "/accounts/{id}/beneficiaries/{name}",
                get().to(routes::beneficiary),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
