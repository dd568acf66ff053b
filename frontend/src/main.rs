use crate::elements::app_root::app_root;
use crate::state::composer_init;

mod constants;
mod dialog;
mod editor;
mod elements;
mod state;
mod storage;
mod utils;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    composer_init();
    dominator::append_dom(&dominator::body(), app_root());
}
