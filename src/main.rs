//! Browser entry point: sets up logging and mounts the app.

use leptos::prelude::*;
use org_chart_canvas::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App)
}
