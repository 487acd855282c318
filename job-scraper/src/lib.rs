pub mod hh;
pub mod superjob;
pub mod types;

use reqwest::Client;

pub use types::{Error, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by all job sites, hh.ru rejects requests without a user agent
pub fn client() -> Result<Client> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}
