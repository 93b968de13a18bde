#[tokio::main]
async fn main() {
    if let Err(e) = algo_app_harness::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
