pub mod chart;
pub mod cli;
pub mod clock;
pub mod plot;
pub mod routes;
pub mod state;

use rocket::figment::Figment;
use rocket::fs::{relative, FileServer, Options};
use rocket::{routes, Build, Rocket};
use rocket_dyn_templates::Template;
use state::AppState;

/// Rocket with the default configuration sources.
pub fn build(state: AppState) -> Rocket<Build> {
    build_with(rocket::Config::figment(), state)
}

pub fn build_with(figment: Figment, state: AppState) -> Rocket<Build> {
    let figment = figment.merge(("template_dir", relative!("templates")));

    rocket::custom(figment)
        // add templating system
        .attach(Template::fairing())
        .manage(state)
        // serve content from disk
        .mount(
            "/static",
            FileServer::new(relative!("static"), Options::Missing | Options::NormalizeDirs),
        )
        // register routes
        .mount("/", routes![routes::index, routes::stock])
}
