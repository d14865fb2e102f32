pub mod body;
pub mod coffees;
pub mod health;
pub mod swagger;
pub mod users;

use actix_web::web;

/// The whole routing table, shared by the server and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::welcome))
        .route("/health", web::get().to(health::health_check))
        // Coffees
        .route("/coffees", web::get().to(coffees::list_coffees))
        .route("/coffees", web::post().to(coffees::create_coffee))
        .route("/coffee/{id}", web::get().to(coffees::get_coffee))
        .route("/coffee/{id}", web::put().to(coffees::replace_coffee))
        .route("/coffees/{id}", web::delete().to(coffees::delete_coffee))
        // Users
        .route("/users", web::get().to(users::list_users))
        .route("/users", web::post().to(users::create_user))
        .route("/users", web::patch().to(users::update_last_login))
        .route("/users/{id}", web::delete().to(users::delete_user));
}
