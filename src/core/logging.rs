//! Tracing layer that writes events to the browser console.

use std::fmt::{self, Write as _};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::field::Visit;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::core::config::AppConfig;

/// Collects an event's message and fields into one console line.
#[derive(Default)]
struct ConsoleVisitor {
    message: String,
    fields: String,
}

impl Visit for ConsoleVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

fn format_event(event: &Event<'_>) -> String {
    let mut visitor = ConsoleVisitor::default();
    event.record(&mut visitor);
    let meta = event.metadata();
    format!("[{}] {}{}", meta.target(), visitor.message, visitor.fields)
}

pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let line: wasm_bindgen::JsValue = format_event(event).into();
        match *event.metadata().level() {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            Level::DEBUG => web_sys::console::log_1(&line),
            Level::TRACE => web_sys::console::debug_1(&line),
        }
    }
}

/// Install the console subscriber. Later calls are ignored.
pub fn init(config: &AppConfig) {
    let _ = tracing_subscriber::registry()
        .with(ConsoleLayer.with_filter(config.level_filter()))
        .try_init();
}
