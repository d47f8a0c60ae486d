//! HTTP implementation of the [`Gateway`] contract.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use storedesk_core::{
    CatalogItem, CatalogKind, Gateway, GatewayError, GatewayResult, Inquiry, InquiryId,
    InquiryStatus, Seller, SellerId, UserId,
};

use crate::config::GatewayConfig;
use crate::error::{Error, Result};
use crate::query::TableQuery;
use crate::rows::{
    CATALOG_COLUMNS, CatalogRow, ErrorBody, INQUIRY_COLUMNS, InquiryRow, SELLER_COLUMNS,
    SellerRow, StatusPatch,
};

/// Media type asking for a single JSON object instead of an array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Header carrying the publishable API key.
const API_KEY_HEADER: &str = "apikey";

/// REST client for the hosted backend.
#[derive(Debug, Clone)]
pub struct RestGateway {
    config: GatewayConfig,
    http_client: Client,
}

impl RestGateway {
    /// Creates a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the key or token
    /// contain characters not allowed in headers.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, header_value(&config.api_key)?);
        headers.insert(
            AUTHORIZATION,
            header_value(&format!("Bearer {}", config.bearer_token()))?,
        );

        let http_client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// URL of a table with a query applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry a path.
    pub fn request_url(&self, table: &str, query: &TableQuery) -> Result<Url> {
        Ok(query.apply(self.config.table_url(table)?))
    }

    async fn fetch_rows<T: DeserializeOwned>(&self, table: &str, query: &TableQuery) -> Result<Vec<T>> {
        let url = self.request_url(table, query)?;
        debug!("GET {url}");
        let response = send(self.http_client.get(url)).await?;
        Ok(response.json().await?)
    }

    async fn fetch_one<T: DeserializeOwned>(&self, table: &str, query: &TableQuery) -> Result<T> {
        let url = self.request_url(table, query)?;
        debug!("GET {url} (single)");
        let response = send(self.http_client.get(url).header(ACCEPT, SINGLE_OBJECT)).await?;
        Ok(response.json().await?)
    }

    async fn count_rows(&self, table: &str, query: &TableQuery) -> Result<u64> {
        let url = self.request_url(table, query)?;
        debug!("HEAD {url} (count)");
        let response = send(self.http_client.head(url).header("Prefer", "count=exact")).await?;
        let range = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| Error::InvalidResponse("missing Content-Range header".to_string()))?;
        parse_content_range_total(range)
    }

    async fn patch_rows<B: serde::Serialize + Sync>(
        &self,
        table: &str,
        query: &TableQuery,
        body: &B,
    ) -> Result<()> {
        let url = self.request_url(table, query)?;
        debug!("PATCH {url}");
        send(
            self.http_client
                .patch(url)
                .header("Prefer", "return=minimal")
                .json(body),
        )
        .await?;
        Ok(())
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::InvalidResponse(format!("invalid header value: {e}")))
}

/// Send a request, turning non-success responses into API errors.
async fn send(request: RequestBuilder) -> Result<Response> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body: ErrorBody = serde_json::from_str(&text).unwrap_or_else(|_| ErrorBody {
        message: (!text.trim().is_empty()).then(|| text.trim().to_string()),
        ..ErrorBody::default()
    });
    Err(Error::Api(body.into_error(status.as_u16())))
}

/// Total from a `Content-Range` header such as `0-24/318` or `*/0`.
///
/// # Errors
///
/// Returns an error if the header has no numeric total.
pub fn parse_content_range_total(range: &str) -> Result<u64> {
    range
        .rsplit_once('/')
        .and_then(|(_, total)| total.trim().parse().ok())
        .ok_or_else(|| Error::InvalidResponse(format!("unexpected Content-Range '{range}'")))
}

#[async_trait]
impl Gateway for RestGateway {
    async fn find_seller(&self, user_id: &UserId) -> GatewayResult<Option<Seller>> {
        let query = TableQuery::new()
            .select(SELLER_COLUMNS)
            .eq("user_id", user_id.as_str());

        match self.fetch_one::<SellerRow>("sellers", &query).await {
            Ok(row) => Ok(Some(row.into())),
            Err(Error::Api(e)) if e.is_no_rows() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_inquiries(&self, seller_id: &SellerId) -> GatewayResult<Vec<Inquiry>> {
        let query = TableQuery::new()
            .select(INQUIRY_COLUMNS)
            .eq("seller_id", seller_id.as_str())
            .order_desc("created_at");

        let rows: Vec<InquiryRow> = self.fetch_rows("inquiries", &query).await?;
        Ok(rows.into_iter().map(Inquiry::from).collect())
    }

    async fn update_inquiry_status(
        &self,
        seller_id: &SellerId,
        inquiry_id: &InquiryId,
        status: InquiryStatus,
    ) -> GatewayResult<()> {
        let query = TableQuery::new()
            .eq("id", inquiry_id.as_str())
            .eq("seller_id", seller_id.as_str());

        self.patch_rows("inquiries", &query, &StatusPatch { status })
            .await
            .map_err(GatewayError::from)
    }

    async fn list_catalog(
        &self,
        seller_id: &SellerId,
        kind: CatalogKind,
    ) -> GatewayResult<Vec<CatalogItem>> {
        let query = TableQuery::new()
            .select(CATALOG_COLUMNS)
            .eq("seller_id", seller_id.as_str());

        let rows: Vec<CatalogRow> = self.fetch_rows(kind.collection(), &query).await?;
        Ok(rows.into_iter().map(CatalogItem::from).collect())
    }

    async fn count_inquiries(
        &self,
        seller_id: &SellerId,
        status: InquiryStatus,
    ) -> GatewayResult<u64> {
        let query = TableQuery::new()
            .select("id")
            .eq("seller_id", seller_id.as_str())
            .eq("status", status.as_str());

        Ok(self.count_rows("inquiries", &query).await?)
    }
}
