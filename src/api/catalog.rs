use super::ApiClient;
use crate::config::ApiConfig;
use crate::error::AppResult;
use crate::request::HttpClient;
use service_desk_shared::{PATH_SERVICES, ServiceCatalogItem};

/// 服务目录
#[derive(Clone)]
pub struct CatalogApi<C: HttpClient> {
    api: ApiClient<C>,
}

impl<C: HttpClient> CatalogApi<C> {
    pub fn new(client: C, config: ApiConfig) -> Self {
        Self {
            api: ApiClient::new(client, config),
        }
    }

    pub async fn services(&self) -> AppResult<Vec<ServiceCatalogItem>> {
        self.api.get_json("catalog.services", PATH_SERVICES).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{HttpMethod, MockHttpClient};
    use serde_json::json;

    #[tokio::test]
    async fn test_services() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Get,
            "http://localhost:8765/api/services",
            200,
            json!([{ "id": "s1", "name": "AC Repair", "categoryName": "Appliances" }]),
        );
        let services = CatalogApi::new(&mock, ApiConfig::default())
            .services()
            .await
            .unwrap();
        assert_eq!(services[0].category_name.as_deref(), Some("Appliances"));
    }
}
