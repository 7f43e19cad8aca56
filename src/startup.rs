use crate::configuration::Settings;
use crate::middleware;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let auth_http_client = reqwest::Client::builder()
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let auth_http_client = web::Data::new(auth_http_client);

    let auth_cache = web::Data::new(middleware::authentication::AuthCache::new(
        Duration::from_secs(60),
    ));

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::authentication::Manager::new())
            .wrap(Cors::permissive())
            .app_data(auth_http_client.clone())
            .app_data(auth_cache.clone())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/plans")
                    .service(routes::plan::anonymous_list_handler)
                    .service(routes::plan::upgrade_price_handler)
                    .service(routes::plan::admin_add_handler)
                    .service(routes::plan::admin_update_handler),
            )
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
