pub mod auth;
pub mod health;
pub mod todos;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::login)
            .service(auth::register)
            .service(auth::profile),
    )
    .service(
        web::scope("/todos")
            .service(todos::list_todos)
            .service(todos::create_todo)
            .service(todos::update_status)
            .service(todos::delete_todo),
    );
}
