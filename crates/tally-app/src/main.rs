//! Browser entry point, mounted by Trunk

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());
        leptos::mount::mount_to_body(tally_app::App);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("tally-app targets wasm32; build it with trunk");
    }
}
