#![forbid(unsafe_code)]

fn main() {
    palette_themes::util::init_tracing();
    if let Err(error) = palette_themes::run_from_env() {
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}
