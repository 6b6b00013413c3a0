use dioxus::prelude::*;
use shared_ui::{AppointmentForm, Card, SubmitHandler};

mod booking;
mod config;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Loaded after launch so the config log lines reach the installed subscriber.
    let config = use_hook(|| {
        config::load_booking_config();
        config::booking_config()
    });
    let handler: SubmitHandler = use_hook(|| booking::demo_handler(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        main { class: "booking-page",
            Card {
                title: config.title.clone(),
                description: "We'll confirm your visit by email.",
                AppointmentForm {
                    on_submit: handler,
                    class: config.form_class.clone(),
                }
            }
        }
    }
}
