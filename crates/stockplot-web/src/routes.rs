use crate::plot;
use crate::state::AppState;
use rocket::response::Debug;
use rocket::{get, State};
use rocket_dyn_templates::{context, Template};
use stockplot_client::series::Symbol;

pub const INSTRUCTIONS: &str = "Navigate to stock/<name> to see a chart for a given stock symbol";

// home
#[get("/")]
pub fn index() -> &'static str {
    INSTRUCTIONS
}

// provider errors are not translated; Rocket answers them with a 500
#[get("/stock/<name>")]
pub async fn stock(
    name: &str,
    state: &State<AppState>,
) -> Result<Template, Debug<anyhow::Error>> {
    let symbol = Symbol::new(name);
    let chart = plot::make_plot(&symbol, state.provider.as_ref(), state.clock.as_ref()).await?;
    let snippet = chart.snippet(&state.embed);

    Ok(Template::render(
        "stock",
        context! {
            name: symbol.as_str(),
            snippet: snippet.as_str(),
        },
    ))
}
