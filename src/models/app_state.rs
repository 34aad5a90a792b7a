use crate::api::RestClient;
use crate::config::Settings;
use crate::soap::SoapClient;

/// Shared by every page handler. Holds no catalog data; each request loads fresh.
#[derive(Clone)]
pub struct AppState {
    pub api: RestClient,
    pub soap: SoapClient,
    pub api_base_url: String,
    pub soap_base_url: String,
}

impl AppState {
    pub fn new(client: reqwest::Client, settings: &Settings) -> Self {
        AppState {
            api: RestClient::new(client.clone(), settings.api_base_url.clone()),
            soap: SoapClient::new(client, settings.soap_base_url.clone()),
            api_base_url: settings.api_base_url.clone(),
            soap_base_url: settings.soap_base_url.clone(),
        }
    }
}
