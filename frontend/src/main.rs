mod bootstrap;
mod components;
mod config;
mod dom;
mod error;
mod logger;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    bootstrap::start();
}
