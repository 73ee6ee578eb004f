//! src/startup.rs
use crate::configuration::Settings;
use crate::routes::{
    health_check, health_check_options, health_check_redirect, method_not_allowed,
    HEALTH_CHECK_PATH,
};
use actix_web::dev::Server;
use actix_web::http::Method;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, std::io::Error> {
        let address = config.application.address();
        let tcp_listener = TcpListener::bind(&address)?;
        let port = tcp_listener.local_addr()?.port();
        tracing::info!(%address, port, "Bound HTTP listener");

        let server = run(tcp_listener, config.application.workers)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, workers: Option<usize>) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(
                web::resource(HEALTH_CHECK_PATH)
                    .route(web::get().to(health_check))
                    .route(web::head().to(health_check))
                    .route(web::method(Method::OPTIONS).to(health_check_options))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource(HEALTH_CHECK_PATH.trim_end_matches('/'))
                    .route(web::get().to(health_check_redirect))
                    .route(web::head().to(health_check_redirect))
                    .route(web::method(Method::OPTIONS).to(health_check_redirect))
                    .default_service(web::to(method_not_allowed)),
            )
    });

    let server = match workers {
        Some(workers) => server.workers(workers),
        None => server,
    };

    Ok(server.listen(listener)?.run())
}
