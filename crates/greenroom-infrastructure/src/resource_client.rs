//! Typed HTTP client for one record kind.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use greenroom_core::error::Result;
use greenroom_core::gateway::RecordGateway;
use greenroom_core::record::{Draft, Resource};

use crate::api::{ApiContext, ensure_ok};

/// One instance per record kind, sharing the console's `ApiContext`.
///
/// No local caching: every call round-trips. Required-field validation is
/// run before dispatch; the server is trusted to enforce the same set.
pub struct HttpResourceClient<R> {
    ctx: Arc<ApiContext>,
    _kind: PhantomData<fn() -> R>,
}

impl<R: Resource> HttpResourceClient<R> {
    pub fn new(ctx: Arc<ApiContext>) -> Self {
        Self {
            ctx,
            _kind: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> RecordGateway<R> for HttpResourceClient<R> {
    async fn list(&self) -> Result<Vec<R>> {
        let url = self.ctx.kind_url(R::KIND);
        debug!(kind = R::KIND, "list records");
        let response = self
            .ctx
            .authorize(self.ctx.client().get(&url))
            .send()
            .await?;
        let records = ensure_ok(response, R::TITLE, None).await?.json().await?;
        Ok(records)
    }

    async fn fetch(&self, id: &str) -> Result<R> {
        let url = self.ctx.record_url(R::KIND, id);
        debug!(kind = R::KIND, id, "fetch record");
        let response = self
            .ctx
            .authorize(self.ctx.client().get(&url))
            .send()
            .await?;
        let record = ensure_ok(response, R::TITLE, Some(id)).await?.json().await?;
        Ok(record)
    }

    async fn create(&self, draft: &R::Draft) -> Result<R> {
        draft.validate()?;
        let url = self.ctx.kind_url(R::KIND);
        debug!(kind = R::KIND, "create record");
        let response = self
            .ctx
            .authorize(self.ctx.client().post(&url))
            .json(draft)
            .send()
            .await?;
        let record = ensure_ok(response, R::TITLE, None).await?.json().await?;
        Ok(record)
    }

    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R> {
        draft.validate()?;
        let url = self.ctx.record_url(R::KIND, id);
        debug!(kind = R::KIND, id, "update record");
        let response = self
            .ctx
            .authorize(self.ctx.client().put(&url))
            .json(draft)
            .send()
            .await?;
        let record = ensure_ok(response, R::TITLE, Some(id)).await?.json().await?;
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.ctx.record_url(R::KIND, id);
        debug!(kind = R::KIND, id, "delete record");
        let response = self
            .ctx
            .authorize(self.ctx.client().delete(&url))
            .send()
            .await?;
        ensure_ok(response, R::TITLE, Some(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenroom_core::record::Faq;
    use greenroom_core::session::TokenCell;

    use crate::config::ApiConfig;

    #[test]
    fn test_urls_follow_per_kind_base() {
        let mut api = ApiConfig::default();
        api.overrides.insert(
            "faqs".to_string(),
            "https://faq-backend.example/api".to_string(),
        );
        let ctx = Arc::new(ApiContext::new(api, TokenCell::new()).unwrap());
        let _client: HttpResourceClient<Faq> = HttpResourceClient::new(ctx.clone());

        assert_eq!(ctx.kind_url(Faq::KIND), "https://faq-backend.example/api/faqs");
        assert_eq!(
            ctx.record_url(Faq::KIND, "f1"),
            "https://faq-backend.example/api/faqs/f1"
        );
    }
}
