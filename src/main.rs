fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = credit_ledger::app::run(std::env::args()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
