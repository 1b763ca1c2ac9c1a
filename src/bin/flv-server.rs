use anyhow::Result;
use file_line_validator::api::server::serve;

#[tokio::main]
async fn main() -> Result<()> {
    serve().await
}
