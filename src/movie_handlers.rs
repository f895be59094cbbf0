use crate::auth;
use crate::catalog::SharedCatalog;
use crate::error::ApiError;
use crate::models::{MessageResponse, Movie};
use actix_web::{delete, get, post, put, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize)]
pub struct CategoryFilter {
    category: String,
}

/// Full catalog listing, restricted to the privileged identity.
#[get("/movies")]
pub async fn list_movies(
    credentials: BearerAuth,
    data: web::Data<SharedCatalog>,
) -> Result<HttpResponse, ApiError> {
    auth::authorize(credentials.token())?;
    let catalog = data.lock().await;
    Ok(HttpResponse::Ok().json(catalog.list_all()))
}

/// Lookup by id. The route contract pins the id to the range [3, 15].
#[get("/movies/{movie_id}")]
pub async fn get_movie(
    path: web::Path<i32>,
    data: web::Data<SharedCatalog>,
) -> Result<HttpResponse, ApiError> {
    let movie_id = path.into_inner();
    if !(3..=15).contains(&movie_id) {
        return Err(ApiError::validation("movie_id must be between 3 and 15"));
    }

    let catalog = data.lock().await;
    match catalog.get_by_id(movie_id) {
        Some(movie) => Ok(HttpResponse::Ok().json(movie)),
        None => Err(ApiError::MovieNotFound),
    }
}

/// Category filter. Registered on "/movies/" so it does not collide
/// with the guarded listing on "/movies".
#[get("/movies/")]
pub async fn get_movies_by_category(
    query: web::Query<CategoryFilter>,
    data: web::Data<SharedCatalog>,
) -> Result<HttpResponse, ApiError> {
    if query.category.chars().count() < 5 {
        return Err(ApiError::validation(
            "category must be at least 5 characters",
        ));
    }

    let catalog = data.lock().await;
    Ok(HttpResponse::Ok().json(catalog.filter_by_category(&query.category)))
}

#[post("/movies")]
pub async fn create_movie(
    movie: web::Json<Movie>,
    data: web::Data<SharedCatalog>,
) -> Result<HttpResponse, ApiError> {
    let movie = movie.into_inner();
    movie.validate()?;

    let mut catalog = data.lock().await;
    let created = catalog.insert(movie);
    Ok(HttpResponse::Ok().json(created))
}

#[put("/movies/{movie_id}")]
pub async fn update_movie(
    path: web::Path<i32>,
    movie: web::Json<Movie>,
    data: web::Data<SharedCatalog>,
) -> Result<HttpResponse, ApiError> {
    let movie_id = path.into_inner();
    let fields = movie.into_inner();
    fields.validate()?;

    let mut catalog = data.lock().await;
    match catalog.update_by_id(movie_id, &fields) {
        Some(updated) => Ok(HttpResponse::Ok().json(updated)),
        None => Err(ApiError::MovieNotFound),
    }
}

#[delete("/movies/{movie_id}")]
pub async fn delete_movie(
    path: web::Path<i32>,
    data: web::Data<SharedCatalog>,
) -> Result<HttpResponse, ApiError> {
    let movie_id = path.into_inner();

    let mut catalog = data.lock().await;
    if catalog.delete_by_id(movie_id) {
        Ok(HttpResponse::Ok().json(MessageResponse {
            message: "Movie deleted".to_string(),
        }))
    } else {
        Err(ApiError::MovieNotFound)
    }
}
