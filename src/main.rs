use std::env;

use anyhow::{bail, Context, Result};

use yeogiro::config::Config;
use yeogiro::controller::hospital::HospitalFinder;
use yeogiro::controller::safety::{NavParams, Navigator, SafetyCategoryScreen};
use yeogiro::kakao::KakaoLocalClient;
use yeogiro::location::FixedPosition;
use yeogiro::model::Coordinate;
use yeogiro::routing::RoutingClient;
use yeogiro::state::ScreenState;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("hospitals") => hospitals(&args[2..]).await,
        Some("categories") => categories(&args[2..]),
        _ => bail!("Usage: yeogiro hospitals <lat> <lon> [index] | yeogiro categories [index]"),
    }
}

/// Drives the hospital screen once from the command line, standing in for
/// the device GPS with the given coordinate. When an index is passed, that
/// entry is selected and the route lookup is driven to completion.
async fn hospitals(args: &[String]) -> Result<()> {
    let config = Config::from_env()?;

    let latitude: f64 = args
        .first()
        .context("Missing latitude")?
        .parse()
        .context("Invalid latitude")?;
    let longitude: f64 = args
        .get(1)
        .context("Missing longitude")?
        .parse()
        .context("Invalid longitude")?;

    let state = ScreenState::new();
    let mut finder = HospitalFinder::new(
        FixedPosition::new(Coordinate { latitude, longitude }),
        KakaoLocalClient::with_base_url(config.kakao_api_key, config.kakao_base_url),
        RoutingClient::new(config.routing_proxy_url),
        state.clone(),
    );

    finder.activate().await;

    let places = state.places();
    if places.is_empty() {
        println!("No hospitals found");
        return Ok(());
    }

    for (index, place) in places.iter().enumerate() {
        println!(
            "{index}. {} | {} | {}",
            place.name,
            place.display_address(),
            place.phone.as_deref().unwrap_or("-"),
        );
    }

    if let Some(index_arg) = args.get(2) {
        let index: usize = index_arg.parse().context("Invalid index")?;
        let place = places.get(index).context("Index out of range")?;

        if let Some(lookup) = finder.select_place(place) {
            lookup.await;
        }

        match state.route_path() {
            Some(path) => println!("{}", serde_json::to_string_pretty(path.as_value())?),
            None => println!("No route available"),
        }
    }

    Ok(())
}

/// Prints a navigation instead of pushing a screen.
struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn navigate(&mut self, route: &'static str, params: NavParams) {
        println!("-> {route} {{title: {}}}", params.title);
    }
}

fn categories(args: &[String]) -> Result<()> {
    let mut screen = SafetyCategoryScreen::new(StdoutNavigator);

    for category in screen.categories() {
        println!("{} {}", category.id, category.title);
    }

    if let Some(index_arg) = args.first() {
        let index: usize = index_arg.parse().context("Invalid index")?;
        let category = *screen
            .categories()
            .get(index)
            .context("Index out of range")?;
        screen.select_category(&category);
    }

    Ok(())
}
