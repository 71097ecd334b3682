//! Kakao Local place search client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    domain::{CategoryQuery, KeywordQuery, Place, PlaceSearchClient, PlaceSearchError, SearchCenter},
    infrastructure::dto::kakao::KakaoPlaceSearchResponse,
};

pub const DEFAULT_KAKAO_BASE_URL: &str = "https://dapi.kakao.com";
const KEYWORD_ENDPOINT: &str = "/v2/local/search/keyword.json";
const CATEGORY_ENDPOINT: &str = "/v2/local/search/category.json";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct KakaoPlaceClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl KakaoPlaceClient {
    pub fn new(base_url: &str, api_key: String) -> Result<Self, PlaceSearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| PlaceSearchError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    async fn get(
        &self,
        endpoint: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<Vec<Place>, PlaceSearchError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, endpoint))
            .header("Authorization", format!("KakaoAK {}", self.api_key))
            .query(&params)
            .send()
            .await
            .map_err(|e| PlaceSearchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("Kakao {} answered {}: {}", endpoint, status, message);
            return Err(PlaceSearchError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body: KakaoPlaceSearchResponse = response
            .json()
            .await
            .map_err(|e| PlaceSearchError::Decode(e.to_string()))?;
        body.into_places()
    }
}

fn center_params(center: SearchCenter) -> [(&'static str, String); 2] {
    [
        ("x", center.longitude.to_string()),
        ("y", center.latitude.to_string()),
    ]
}

#[async_trait]
impl PlaceSearchClient for KakaoPlaceClient {
    async fn search_by_keyword(&self, query: KeywordQuery) -> Result<Vec<Place>, PlaceSearchError> {
        let mut params = vec![("query", query.query)];
        if let Some(center) = query.center {
            params.extend(center_params(center));
            params.push(("radius", query.radius.to_string()));
        }
        params.push(("size", query.size.to_string()));
        self.get(KEYWORD_ENDPOINT, params).await
    }

    async fn search_by_category(
        &self,
        query: CategoryQuery,
    ) -> Result<Vec<Place>, PlaceSearchError> {
        let mut params = vec![("category_group_code", query.category_code)];
        params.extend(center_params(query.center));
        params.push(("radius", query.radius.to_string()));
        params.push(("size", query.size.to_string()));
        self.get(CATEGORY_ENDPOINT, params).await
    }
}
