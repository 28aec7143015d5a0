fn main() {
    if let Err(err) = lazyvault::cli::run() {
        println!("{}", err);
        std::process::exit(2);
    }
}
