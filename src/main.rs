use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use tracing_subscriber::EnvFilter;

mod auth;
mod catalog;
mod error;
mod models;
mod movie_handlers;
mod user_handlers;

use catalog::Catalog;

#[get("/")]
async fn index() -> impl Responder {
    let html = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>Filmoteca API</title>
        <style>
            body {
                background-color: #141414;
                color: #e8e8e8;
                font-family: monospace;
                padding: 40px;
            }
            h1 {
                color: #e50914;
            }
            ul {
                list-style-type: square;
            }
            li {
                margin-bottom: 10px;
            }
            code {
                background: #262626;
                padding: 2px 6px;
                border-radius: 4px;
                color: #f5c518;
            }
        </style>
    </head>
    <body>
        <h1>Filmoteca API</h1>
        <p>An in-memory movie catalog. Available endpoints:</p>
        <ul>
            <li><code>GET /</code> – This help page</li>
            <li><code>GET /health</code> – Health check (returns OK)</li>
            <li><code>POST /login</code> – Obtain a bearer token</li>
            <li><code>GET /movies</code> – Full catalog (token required)</li>
            <li><code>GET /movies/{id}</code> – Lookup a movie by id</li>
            <li><code>GET /movies/?category=</code> – Filter by category</li>
            <li><code>POST /movies</code> – Add a movie</li>
            <li><code>PUT /movies/{id}</code> – Update a movie</li>
            <li><code>DELETE /movies/{id}</code> – Remove a movie</li>
        </ul>
    </body>
    </html>
    "#;

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// Simple health check
#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    tracing::info!("Listening on: {}", addr);

    let catalog = Catalog::shared();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(catalog.clone()))
            .service(index)
            .service(health)
            .service(user_handlers::login)
            .service(movie_handlers::list_movies)
            .service(movie_handlers::get_movies_by_category)
            .service(movie_handlers::get_movie)
            .service(movie_handlers::create_movie)
            .service(movie_handlers::update_movie)
            .service(movie_handlers::delete_movie)
    })
    .bind(addr)?
    .run()
    .await
}
