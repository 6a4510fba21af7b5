use std::str::FromStr;

use dash_config::read_config;
use friendsdash::app::App;

fn main() {
    let level = log::Level::from_str(&read_config!(log.level))
        .unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));

    yew::Renderer::<App>::new().render();
}
