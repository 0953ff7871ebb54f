use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    deed_cli::main_entry().await
}
