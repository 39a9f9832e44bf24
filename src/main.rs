use claude_code_talk::{content, App};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("mounting \"{}\"", content::TITLE);

    yew::Renderer::<App>::new().render();
}
