use crate::auth::{issue_token, ADMIN_EMAIL, ADMIN_PASSWORD};
use crate::error::ApiError;
use crate::models::{Claims, LoginResponse, User};
use actix_web::{post, web, HttpResponse};
use validator::Validate;

/// Issues a token for the single privileged credential.
#[post("/login")]
pub async fn login(user: web::Json<User>) -> Result<HttpResponse, ApiError> {
    let user = user.into_inner();
    user.validate()?;

    if user.email != ADMIN_EMAIL || user.password != ADMIN_PASSWORD {
        return Err(ApiError::InvalidCredentials);
    }

    let token = issue_token(&Claims::from(user))?;
    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login success".to_string(),
        token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::movie_handlers::list_movies;
    use crate::models::Movie;
    use actix_web::{test, App};
    use serde_json::json;

    #[actix_web::test]
    async fn login_issues_a_token_that_authorizes_the_listing() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Catalog::shared()))
                .service(login)
                .service(list_movies),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"email": "admin@admin.com", "password": "admin"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Login success");
        let token = body["token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/movies")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let movies: Vec<Movie> = test::read_body_json(resp).await;
        assert_eq!(movies.len(), 3);
    }

    #[actix_web::test]
    async fn login_rejects_other_credentials() {
        let app = test::init_service(App::new().service(login)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"email": "visitor@example.com", "password": "guessing"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid username or password");
    }

    #[actix_web::test]
    async fn login_applies_the_credential_defaults() {
        // both fields carry placeholder defaults, so an empty body logs in
        let app = test::init_service(App::new().service(login)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }
}
