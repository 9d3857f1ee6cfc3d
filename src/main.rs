fn main() {
    if let Err(err) = food_zone::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
