#[tokio::main]
async fn main() {
    if let Err(e) = readme_updater::builder().await {
        eprintln!("failed to update README: {e}");
        std::process::exit(1);
    }
}
