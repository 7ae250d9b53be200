pub mod health;
pub mod users;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(users::list_users)
            .service(users::create_user)
            .service(users::get_user),
    );
}
