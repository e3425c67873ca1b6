fn main() {
    #[cfg(target_arch = "wasm32")]
    workhub_frontend::run();
}
