use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::error::LoadError;
use url::Url;

/// Where a container gets its collection from. One call is one load attempt.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    type Item: Send;

    async fn fetch(&self) -> Result<Vec<Self::Item>, LoadError>;
}

/// GET `url` and decode the body as a JSON array of `T`.
pub struct HttpCollectionSource<T> {
    http: Client,
    url: Url,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpCollectionSource<T> {
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(http: Client, url: Url) -> Self {
        Self {
            http,
            url,
            _item: PhantomData,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl<T> CollectionSource for HttpCollectionSource<T>
where
    T: DeserializeOwned + Send,
{
    type Item = T;

    async fn fetch(&self) -> Result<Vec<T>, LoadError> {
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|err| LoadError::NetworkFailure(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::ResponseError {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| LoadError::NetworkFailure(err.to_string()))?;
        Ok(serde_json::from_slice(&body)?)
    }
}
