//! src/startup.rs

use crate::configuration::{DatabaseSettings, Settings};
use crate::confirmation::ConfirmationEmail;
use crate::email_client::EmailClient;
use crate::registration::Waitlist;
use crate::routes::{health_check, home, json_payload_error, register};
use crate::store::{PgRegistrantStore, RegistrantStore};
use actix_cors::Cors;
use actix_web::{dev::Server, http::header, web, web::Data, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Builds the application with the Postgres store and the SMTP client.
    /// Fails if the configuration misses the database or SMTP credentials.
    pub async fn build(configuration: Settings) -> anyhow::Result<Self> {
        configuration.validate()?;
        let connection_pool = get_connection_pool(&configuration.database)?;
        let store = Arc::new(PgRegistrantStore::new(connection_pool));
        let email_client = Arc::new(configuration.email.client()?);
        Self::build_with(configuration, store, email_client).await
    }

    /// Builds the application around the given service handles.
    pub async fn build_with(
        configuration: Settings,
        store: Arc<dyn RegistrantStore>,
        email_client: Arc<dyn EmailClient>,
    ) -> anyhow::Result<Self> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let waitlist = Waitlist::new(
            store,
            email_client,
            ConfirmationEmail::from_settings(&configuration.email),
        );
        let server = run(listener, waitlist, configuration.application.allowed_origin)?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_connection_pool(configuration: &DatabaseSettings) -> anyhow::Result<PgPool> {
    Ok(PgPoolOptions::new()
        .acquire_timeout(configuration.acquire_timeout())
        .connect_lazy_with(configuration.connect_options()?))
}

fn run(
    listener: TcpListener,
    waitlist: Waitlist,
    allowed_origin: String,
) -> Result<Server, std::io::Error> {
    // Wrap the workflow in a smart pointer
    let waitlist = Data::new(waitlist);
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);
        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_payload_error))
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/register", web::post().to(register))
            .app_data(waitlist.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
