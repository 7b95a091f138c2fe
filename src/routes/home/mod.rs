//! src/routes/home/mod.rs

use actix_web::HttpResponse;

pub const GREETING: &str = "Hello, world!";

pub async fn home() -> HttpResponse {
    HttpResponse::Ok().body(GREETING)
}
