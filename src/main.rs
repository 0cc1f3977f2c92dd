use taskboard_ui::app::App;
use taskboard_ui::core::{logging, services::storage};

fn main() {
    console_error_panic_hook::set_once();
    logging::init(&storage::load_settings());
    tracing::info!("starting task board");
    leptos::mount::mount_to_body(App);
}
