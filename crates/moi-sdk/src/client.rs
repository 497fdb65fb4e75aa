use moi_rest_client::{CatalogApi, ClientConfig, RawClient, Result};

/// High-level client layered over a [`CatalogApi`] implementation.
#[derive(Debug, Clone)]
pub struct SdkClient<C = RawClient> {
    raw: C,
}

impl SdkClient<RawClient> {
    /// Build a [`RawClient`] for `base_url` and wrap it.
    pub fn connect(base_url: impl AsRef<str>, api_key: impl AsRef<str>) -> Result<Self> {
        Ok(Self::new(RawClient::new(base_url, api_key)?))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(RawClient::from_config(config)?))
    }
}

impl<C: CatalogApi> SdkClient<C> {
    pub fn new(raw: C) -> Self {
        Self { raw }
    }

    /// The wrapped low-level client, for calls without a helper.
    pub fn raw(&self) -> &C {
        &self.raw
    }

    pub fn into_raw(self) -> C {
        self.raw
    }
}
