//! End-to-end tests driving the SDK against the mock server.

#[cfg(test)]
mod applicants;
#[cfg(test)]
mod batch;
#[cfg(test)]
mod dashboard;
#[cfg(test)]
mod responses;

use env_logger::Env;
use std::net::SocketAddr;
use tcu_sdk::{Client, ClientConfig, Endpoint, SdkError};

/// Starts the mock server on a random port of the current runtime.
pub async fn spawn_mock_server() -> Result<SocketAddr, std::io::Error> {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("trace"))
        .is_test(true)
        .try_init();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    tokio::spawn(mock_server::run(listener));

    Ok(address)
}

/// A client holding the mock server's credentials and pointing every endpoint at `address`.
pub fn mock_client(address: SocketAddr) -> Result<Client, SdkError> {
    let mut config = ClientConfig::new(mock_server::USERNAME, mock_server::SESSION_TOKEN);
    config.set_institution_code("UD01");
    config.set_base_url(Endpoint::Applicant, &format!("http://{address}/applicants/"))?;
    config.set_base_url(Endpoint::Admission, &format!("http://{address}/admission/"))?;
    config.set_base_url(Endpoint::Dashboard, &format!("http://{address}/dashboard/"))?;

    Ok(Client::with_config(config))
}
