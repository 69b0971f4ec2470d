use crate::config::Config;
use crate::error::DusupayError;
use crate::resources::{
    BanksResource, CollectionsResource, MerchantsResource, PayoutsResource, ProvidersResource,
    RefundsResource, Resource, WebhooksResource,
};
use crate::services::transport::Transport;
use log::info;
use std::sync::Arc;

/// Entry point to the DusuPay API.
///
/// Cheap to clone; all clones share one [`Transport`] and one [`Config`].
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<Transport>,
    config: Arc<Config>,
}

impl Client {
    /// Validates `config` and builds the shared transport. Pass `None` to use
    /// a default `reqwest::Client`.
    pub fn new(config: Config, http: Option<reqwest::Client>) -> Result<Self, DusupayError> {
        config.validate()?;

        let config = Arc::new(config);
        let transport = Transport::new(Arc::clone(&config), http.unwrap_or_default());
        info!(
            "DusuPay client ready for {} ({})",
            config.uri,
            if config.is_sandbox() { "sandbox" } else { "production" }
        );

        Ok(Self {
            transport: Arc::new(transport),
            config,
        })
    }

    /// Client configured from `DUSUPAY_*` environment variables.
    pub fn from_env() -> Result<Self, DusupayError> {
        Self::new(Config::from_env()?, None)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    fn resource(&self) -> Resource {
        Resource::new(Arc::clone(&self.transport))
    }

    pub fn collections(&self) -> CollectionsResource {
        CollectionsResource::new(self.resource())
    }

    pub fn payouts(&self) -> PayoutsResource {
        PayoutsResource::new(self.resource())
    }

    pub fn providers(&self) -> ProvidersResource {
        ProvidersResource::new(self.resource())
    }

    pub fn merchants(&self) -> MerchantsResource {
        MerchantsResource::new(self.resource())
    }

    pub fn refunds(&self) -> RefundsResource {
        RefundsResource::new(self.resource())
    }

    pub fn banks(&self) -> BanksResource {
        BanksResource::new(self.resource())
    }

    pub fn webhooks(&self) -> WebhooksResource {
        WebhooksResource::new(self.resource())
    }
}
