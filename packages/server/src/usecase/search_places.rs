//! UseCase: 場所検索
//!
//! 外部の場所検索 API への問い合わせ前に入力値を検証します。結果は保存しません。

use std::sync::Arc;

use crate::domain::{
    CategoryQuery, KeywordQuery, Place, PlaceCategory, PlaceSearchClient, SearchCenter,
    service::{DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_RADIUS, MAX_SEARCH_RADIUS},
};

use super::error::PlaceError;

/// キーワード検索の入力
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordSearchInput {
    pub query: String,
    /// 経度
    pub x: Option<f64>,
    /// 緯度
    pub y: Option<f64>,
    pub radius: Option<u32>,
}

/// カテゴリ検索の入力
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySearchInput {
    /// Kakao のカテゴリコード（`FD6` など）またはカテゴリ名（`CAFE` など）
    pub category: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub radius: Option<u32>,
}

/// 場所検索のユースケース
pub struct SearchPlacesUseCase {
    client: Arc<dyn PlaceSearchClient>,
}

impl SearchPlacesUseCase {
    pub fn new(client: Arc<dyn PlaceSearchClient>) -> Self {
        Self { client }
    }

    pub async fn by_keyword(&self, input: KeywordSearchInput) -> Result<Vec<Place>, PlaceError> {
        let query = input.query.trim();
        if query.is_empty() {
            return Err(PlaceError::EmptyQuery);
        }
        let places = self
            .client
            .search_by_keyword(KeywordQuery {
                query: query.to_string(),
                center: center(input.x, input.y)?,
                radius: radius(input.radius)?,
                size: DEFAULT_PAGE_SIZE,
            })
            .await?;
        tracing::debug!("Keyword search '{}' returned {} places", query, places.len());
        Ok(places)
    }

    pub async fn by_category(&self, input: CategorySearchInput) -> Result<Vec<Place>, PlaceError> {
        let category_code = category_code(&input.category)?;
        let center = center(input.x, input.y)?.ok_or(PlaceError::MissingCenter)?;
        let places = self
            .client
            .search_by_category(CategoryQuery {
                category_code: category_code.to_string(),
                center,
                radius: radius(input.radius)?,
                size: DEFAULT_PAGE_SIZE,
            })
            .await?;
        tracing::debug!(
            "Category search '{}' returned {} places",
            category_code,
            places.len()
        );
        Ok(places)
    }
}

fn center(x: Option<f64>, y: Option<f64>) -> Result<Option<SearchCenter>, PlaceError> {
    match (x, y) {
        (Some(longitude), Some(latitude)) => Ok(Some(SearchCenter {
            longitude,
            latitude,
        })),
        (None, None) => Ok(None),
        _ => Err(PlaceError::IncompleteCenter),
    }
}

fn radius(radius: Option<u32>) -> Result<u32, PlaceError> {
    let radius = radius.unwrap_or(DEFAULT_SEARCH_RADIUS);
    if radius > MAX_SEARCH_RADIUS {
        return Err(PlaceError::RadiusOutOfRange {
            max: MAX_SEARCH_RADIUS,
            actual: radius,
        });
    }
    Ok(radius)
}

/// Accept either a Kakao group code or one of our category names.
fn category_code(category: &str) -> Result<&'static str, PlaceError> {
    let category = category.trim();
    if let Some(code) = PlaceCategory::ALL
        .iter()
        .filter_map(PlaceCategory::kakao_code)
        .find(|code| code.eq_ignore_ascii_case(category))
    {
        return Ok(code);
    }
    let parsed = PlaceCategory::parse(Some(category))
        .map_err(|_| PlaceError::UnknownCategory(category.to_string()))?;
    parsed
        .kakao_code()
        .ok_or_else(|| PlaceError::CategoryNotSearchable(parsed.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlaceSearchError, service::MockPlaceSearchClient};

    fn place(name: &str) -> Place {
        Place {
            id: "1".to_string(),
            name: name.to_string(),
            category: "음식점 > 카페".to_string(),
            phone: None,
            address: "서울 중구".to_string(),
            road_address: None,
            latitude: 37.5665,
            longitude: 126.978,
            place_url: None,
        }
    }

    #[tokio::test]
    async fn test_keyword_search_applies_defaults() {
        // テスト項目: 半径とページサイズの既定値で検索される
        // given (前提条件):
        let mut client = MockPlaceSearchClient::new();
        client
            .expect_search_by_keyword()
            .withf(|q| {
                q.query == "coffee"
                    && q.radius == DEFAULT_SEARCH_RADIUS
                    && q.size == DEFAULT_PAGE_SIZE
                    && q.center
                        == Some(SearchCenter {
                            longitude: 126.978,
                            latitude: 37.5665,
                        })
            })
            .times(1)
            .returning(|_| Ok(vec![place("Cafe A")]));
        let usecase = SearchPlacesUseCase::new(Arc::new(client));

        // when (操作):
        let result = usecase
            .by_keyword(KeywordSearchInput {
                query: " coffee ".to_string(),
                x: Some(126.978),
                y: Some(37.5665),
                radius: None,
            })
            .await;

        // then (期待する結果):
        assert_eq!(result.unwrap()[0].name, "Cafe A");
    }

    #[tokio::test]
    async fn test_keyword_search_validation() {
        // テスト項目: 不正な入力では外部 API を呼ばない
        // given (前提条件):
        let mut client = MockPlaceSearchClient::new();
        client.expect_search_by_keyword().never();
        let usecase = SearchPlacesUseCase::new(Arc::new(client));

        // when (操作):
        let empty = usecase.by_keyword(KeywordSearchInput::default()).await;
        let too_far = usecase
            .by_keyword(KeywordSearchInput {
                query: "park".to_string(),
                radius: Some(20001),
                ..Default::default()
            })
            .await;
        let half_center = usecase
            .by_keyword(KeywordSearchInput {
                query: "park".to_string(),
                x: Some(126.9),
                ..Default::default()
            })
            .await;

        // then (期待する結果):
        assert_eq!(empty, Err(PlaceError::EmptyQuery));
        assert_eq!(
            too_far,
            Err(PlaceError::RadiusOutOfRange {
                max: 20000,
                actual: 20001
            })
        );
        assert_eq!(half_center, Err(PlaceError::IncompleteCenter));
    }

    #[tokio::test]
    async fn test_category_search_accepts_code_or_name() {
        // テスト項目: カテゴリはコードでも名前でも指定できる
        // given (前提条件):
        let mut client = MockPlaceSearchClient::new();
        client
            .expect_search_by_category()
            .withf(|q| q.category_code == "CE7")
            .times(2)
            .returning(|_| Ok(vec![]));
        let usecase = SearchPlacesUseCase::new(Arc::new(client));
        let input = |category: &str| CategorySearchInput {
            category: category.to_string(),
            x: Some(126.978),
            y: Some(37.5665),
            radius: Some(500),
        };

        // when (操作):
        let by_code = usecase.by_category(input("ce7")).await;
        let by_name = usecase.by_category(input("CAFE")).await;

        // then (期待する結果):
        assert_eq!(by_code, Ok(vec![]));
        assert_eq!(by_name, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_category_search_errors() {
        // テスト項目: 不明なカテゴリ・検索できないカテゴリ・中心なしはエラーになる
        // given (前提条件):
        let mut client = MockPlaceSearchClient::new();
        client.expect_search_by_category().never();
        let usecase = SearchPlacesUseCase::new(Arc::new(client));

        // when (操作):
        let unknown = usecase
            .by_category(CategorySearchInput {
                category: "XX9".to_string(),
                x: Some(1.0),
                y: Some(1.0),
                radius: None,
            })
            .await;
        let unsearchable = usecase
            .by_category(CategorySearchInput {
                category: "SPORTS".to_string(),
                x: Some(1.0),
                y: Some(1.0),
                radius: None,
            })
            .await;
        let no_center = usecase
            .by_category(CategorySearchInput {
                category: "FD6".to_string(),
                ..Default::default()
            })
            .await;

        // then (期待する結果):
        assert_eq!(unknown, Err(PlaceError::UnknownCategory("XX9".to_string())));
        assert_eq!(
            unsearchable,
            Err(PlaceError::CategoryNotSearchable("SPORTS".to_string()))
        );
        assert_eq!(no_center, Err(PlaceError::MissingCenter));
    }

    #[tokio::test]
    async fn test_upstream_error_is_propagated() {
        // テスト項目: 外部 API のエラーはそのまま返る
        // given (前提条件):
        let mut client = MockPlaceSearchClient::new();
        client.expect_search_by_keyword().returning(|_| {
            Err(PlaceSearchError::Upstream {
                status: 401,
                message: "unauthorized".to_string(),
            })
        });
        let usecase = SearchPlacesUseCase::new(Arc::new(client));

        // when (操作):
        let result = usecase
            .by_keyword(KeywordSearchInput {
                query: "coffee".to_string(),
                ..Default::default()
            })
            .await;

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(PlaceError::Upstream(PlaceSearchError::Upstream { status: 401, .. }))
        ));
    }
}
