use env_logger::Env;
use log::info;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("trace")).init();
    info!("Starting Mock Server");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    mock_server::run(listener).await
}
