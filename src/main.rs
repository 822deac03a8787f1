fn main() {
    if let Err(e) = txlabel::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
