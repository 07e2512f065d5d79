use serde_json::json;

fn main() {
    if let Err(err) = ayursutra_cli::run() {
        // Error payloads go to stderr as JSON; stdout carries only reports.
        eprintln!("{}", json!({ "error": err.to_string() }));
        std::process::exit(1);
    }
}
