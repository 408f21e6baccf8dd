//! Terminal front for the HistMap gazetteer client.
//!
//! # Responsibility
//! - Wire `histmap_core` to a live API and print the resulting view models.
//! - Keep output deterministic for quick local sanity checks.

use histmap_core::{
    default_log_level, init_logging, render, ApiConfig, DetailView, GazetteerApi,
    HttpGazetteerApi, NavigationController,
};
use std::env;
use std::process::ExitCode;

const USAGE: &str = "usage: histmap_cli [places | place <id> | event <id> | person <id>]";

fn main() -> ExitCode {
    if let Ok(dir) = env::var("HISTMAP_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let api = HttpGazetteerApi::new(ApiConfig::from_env());
    let args: Vec<String> = env::args().skip(1).collect();

    let result = match args.first().map(String::as_str) {
        None | Some("places") => show_places(&api),
        Some("place") => match parse_id(args.get(1)) {
            Some(id) => show_place(&api, id),
            None => usage_error(),
        },
        Some("event") => match parse_id(args.get(1)) {
            Some(id) => show_event(&api, id),
            None => usage_error(),
        },
        Some("person") => match parse_id(args.get(1)) {
            Some(id) => show_person(&api, id),
            None => usage_error(),
        },
        Some(_) => usage_error(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn parse_id(arg: Option<&String>) -> Option<i64> {
    arg.and_then(|value| value.parse().ok())
}

fn usage_error() -> Result<(), String> {
    Err(USAGE.to_string())
}

fn show_places(api: &HttpGazetteerApi) -> Result<(), String> {
    let mut nav = NavigationController::new();
    let count = nav
        .load_places(api)
        .map_err(|err| err.user_message().to_string())?;

    println!("{count} places");
    for marker in nav.markers() {
        println!(
            "pin #{} @ ({:.6}, {:.6}) {}",
            marker.place_id, marker.lat, marker.lng, marker.tooltip_html
        );
    }
    println!();
    for row in nav.list_rows() {
        println!("[{}] {} - {}", row.place_id, row.name_html, row.brief_html);
    }
    Ok(())
}

fn show_place(api: &HttpGazetteerApi, id: i64) -> Result<(), String> {
    let mut nav = NavigationController::new();
    nav.open_place(api, id)
        .map_err(|err| err.user_message().to_string())?;

    let Some(modal) = nav.place_modal() else {
        return Err("place modal did not open".to_string());
    };
    println!("== {} ==", modal.title_html);
    if !modal.date_summary.is_empty() {
        println!("{}", modal.date_summary);
    }
    if !modal.history_html.is_empty() {
        println!("{}", modal.history_html);
    }

    let gallery = nav.gallery();
    if gallery.visible {
        println!(
            "photo {} {} {}",
            gallery.counter,
            gallery.image_url.as_deref().unwrap_or(""),
            gallery.caption_html
        );
    }

    println!("events:");
    print_links(modal.events.iter().map(|link| (link.event_id, &link.label_html)));
    println!("persons:");
    print_links(modal.persons.iter().map(|link| (link.person_id, &link.label_html)));
    Ok(())
}

fn show_event(api: &HttpGazetteerApi, id: i64) -> Result<(), String> {
    let detail = api
        .fetch_event_details(id)
        .map_err(|err| err.user_message().to_string())?;
    print_detail(&DetailView::Event(render::event_detail_view(&detail)));
    Ok(())
}

fn show_person(api: &HttpGazetteerApi, id: i64) -> Result<(), String> {
    let detail = api
        .fetch_person_details(id)
        .map_err(|err| err.user_message().to_string())?;
    print_detail(&DetailView::Person(render::person_detail_view(&detail)));
    Ok(())
}

fn print_detail(view: &DetailView) {
    println!("== {} ==", view.title_html());
    match view {
        DetailView::Event(event) => {
            if !event.meta_html.is_empty() {
                println!("{}", event.meta_html);
            }
            if !event.description_html.is_empty() {
                println!("{}", event.description_html);
            }
            if let Some(photo) = &event.photo {
                println!("photo {} {}", photo.url, photo.caption_html);
            }
            println!("people:");
            print_links(event.persons.iter().map(|link| (link.person_id, &link.label_html)));
        }
        DetailView::Person(person) => {
            if !person.meta_html.is_empty() {
                println!("{}", person.meta_html);
            }
            if let Some(url) = &person.profile_photo_url {
                println!("photo {url}");
            }
            println!("events:");
            print_links(person.events.iter().map(|link| (link.event_id, &link.label_html)));
            println!("places:");
            if person.places.is_empty() {
                println!("  None");
            }
            for place in &person.places {
                println!("  {place}");
            }
        }
    }
}

fn print_links<'a>(links: impl Iterator<Item = (i64, &'a String)>) {
    let mut any = false;
    for (id, label) in links {
        any = true;
        println!("  [{id}] {label}");
    }
    if !any {
        println!("  None");
    }
}
