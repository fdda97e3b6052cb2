use clap::Parser;
use eyre::{Context, Result};
use log::info;

use weekend_traveller::app::{App, AppOptions, LaunchOutcome};
use weekend_traveller::cli::{Cli, Command, ConfigCommand, TripsCommand};
use weekend_traveller::managers::trip_cache::TripCacheTrait;
use weekend_traveller::services::entry_point::{trip_url, LaunchIntent};
use weekend_traveller::services::map_synchronizer::MapSynchronizerTrait;
use weekend_traveller::services::settings_engine::{self, SettingsEngine, SettingsEngineTrait};
use weekend_traveller::services::share::SharePayload;
use weekend_traveller::types::landing::GeoLocation;
use weekend_traveller::types::map::Viewport;
use weekend_traveller::types::message::{Message, Role};
use weekend_traveller::types::trip::TripPlan;

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    Ok(())
}

fn print_message(message: &Message) {
    let who = match message.role {
        Role::User => "you",
        Role::Ai => "assistant",
    };
    println!("[{}] {}", who, message.content);
    if let Some(plan) = &message.data {
        print_plan(plan);
    }
}

fn print_plan(plan: &TripPlan) {
    println!();
    println!("  {}", plan.destination);
    println!("  Best time: {}", plan.best_time_to_visit);
    println!("  Budget:    {}", plan.budget_label());
    println!(
        "  Route:     {} ({})",
        plan.route_info.distance, plan.route_info.duration
    );
    for day in &plan.itinerary {
        println!("  Day {}", day.day);
        for activity in &day.activities {
            println!("    {:<10} {}", activity.time, activity.activity);
        }
    }
    if let Some(hotels) = plan.hotels.as_ref().filter(|h| !h.is_empty()) {
        println!("  Hotels");
        for hotel in hotels {
            println!("    {} ({})", hotel.name, hotel.price_range);
        }
    }
    println!();
}

fn print_map<C>(app: &App<C>) {
    match app.map.viewport() {
        Viewport::Center { center, zoom } => {
            println!("map: center {:.4},{:.4} zoom {}", center.lat, center.lng, zoom)
        }
        Viewport::Bounds {
            south_west,
            north_east,
            ..
        } => println!(
            "map: bounds {:.4},{:.4} to {:.4},{:.4}",
            south_west.lat, south_west.lng, north_east.lat, north_east.lng
        ),
    }
    println!("map: {} marker(s)", app.map.markers().len());
}

fn run_config(config_path: Option<String>, command: ConfigCommand) -> Result<()> {
    let mut engine = SettingsEngine::new(config_path);
    // Reset must still work when the file no longer parses
    if !matches!(command, ConfigCommand::Reset | ConfigCommand::Path) {
        engine.load().context("Failed to load settings")?;
    }

    match command {
        ConfigCommand::Show => {
            let json = serde_json::to_string_pretty(engine.get_settings())
                .context("Failed to render settings")?;
            println!("{}", json);
        }
        ConfigCommand::Path => println!("{}", engine.get_config_path()),
        ConfigCommand::Set { key, value } => {
            engine
                .set_value(&key, settings_engine::parse_value(&value))
                .with_context(|| format!("Failed to set {}", key))?;
            info!("updated {} in {}", key, engine.get_config_path());
            println!("{} = {}", key, value);
        }
        ConfigCommand::Reset => {
            engine.reset().context("Failed to reset settings")?;
            println!("Settings reset to defaults");
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config_path = cli.config.map(|p| p.to_string_lossy().to_string());

    // Settings commands edit the file as stored, without CLI or env overrides
    if let Command::Config { command } = cli.command {
        return run_config(config_path, command);
    }

    let mut app = App::new(AppOptions {
        config_path,
        api_url: cli.api_url,
        database_path: cli.database,
    })
    .context("Failed to start")?;

    info!("weekend traveller starting");

    match cli.command {
        Command::Search { query, save } => {
            let query = query.join(" ");
            let seen = app.session.messages().len();
            if app.submit(&query).await.is_none() {
                eyre::bail!("Query is empty");
            }
            app.session.messages()[seen..].iter().for_each(print_message);
            print_map(&app);
            if save {
                if let Some(trip) = app.save_current_plan() {
                    println!("Saved trip {}", trip.id);
                }
            }
        }
        Command::Open { url } => {
            let intent = LaunchIntent::from_url(&url);
            let outcome = app.launch(&intent).await;
            app.session.messages().iter().for_each(print_message);
            if outcome != LaunchOutcome::Landing {
                print_map(&app);
            }
        }
        Command::Trips { command } => match command {
            TripsCommand::List => {
                let trips = app.saved_trips();
                if trips.is_empty() {
                    println!("No saved trips");
                }
                for trip in trips {
                    println!(
                        "{}  {}  {}",
                        trip.id,
                        trip.date.format("%Y-%m-%d %H:%M"),
                        trip.plan.destination
                    );
                }
            }
            TripsCommand::Show { id } => {
                let trip = app
                    .context
                    .trips()
                    .get(&id)
                    .ok_or_else(|| eyre::eyre!("No saved trip with id {}", id))?;
                print_plan(&trip.plan);
            }
            TripsCommand::Share { id, base } => {
                let trip = app
                    .context
                    .trips()
                    .get(&id)
                    .ok_or_else(|| eyre::eyre!("No saved trip with id {}", id))?;
                let payload = SharePayload::for_plan(&trip.plan, &trip_url(&base, &trip.id));
                println!("{}", payload.clipboard_text());
            }
            TripsCommand::Delete { id } => {
                app.delete_trip(&id);
                println!("Deleted trip {}", id);
            }
            TripsCommand::Clear => {
                app.context.trips().clear();
                println!("Cleared saved trips");
            }
        },
        Command::Explore { lat, lng } => {
            let location = lat.zip(lng).map(|(latitude, longitude)| GeoLocation {
                latitude,
                longitude,
            });
            for card in app.landing_destinations(location).await {
                println!("{:<16} {}", card.name, card.desc);
            }
            let video = app.landing_video().await;
            println!("Background: {} ({} via {})", video.url, video.credit, video.source);
        }
        Command::Theme { mode } => {
            if let Some(mode) = mode {
                app.context.set_theme(mode.into());
            }
            println!("{}", app.context.theme().as_str());
        }
        Command::Config { .. } => unreachable!("handled before the app starts"),
    }

    Ok(())
}
