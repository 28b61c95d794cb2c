use super::ApiClient;
use crate::config::ApiConfig;
use crate::error::AppResult;
use crate::request::{HttpClient, HttpMethod};
use service_desk_shared::{AvailabilityStatus, PATH_TECHNICIANS, TechnicianDetail, TechnicianSummary};

/// 技师服务
#[derive(Clone)]
pub struct TechnicianApi<C: HttpClient> {
    api: ApiClient<C>,
}

impl<C: HttpClient> TechnicianApi<C> {
    pub fn new(client: C, config: ApiConfig) -> Self {
        Self {
            api: ApiClient::new(client, config),
        }
    }

    /// 当前可派单的技师
    pub async fn available(&self) -> AppResult<Vec<TechnicianSummary>> {
        let path = format!("{}/available", PATH_TECHNICIANS);
        self.api.get_json("technicians.available", &path).await
    }

    pub async fn by_user(&self, user_id: &str) -> AppResult<TechnicianDetail> {
        let path = format!("{}/by-user/{}", PATH_TECHNICIANS, user_id);
        self.api.get_json("technicians.by_user", &path).await
    }

    /// 请求体是一个 JSON 字符串，如 `"AVAILABLE"`
    pub async fn update_availability(
        &self,
        technician_id: &str,
        status: AvailabilityStatus,
    ) -> AppResult<()> {
        let path = format!("{}/{}/availability", PATH_TECHNICIANS, technician_id);
        self.api
            .send(
                "technicians.update_availability",
                HttpMethod::Patch,
                &path,
                Some(&status),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::MockHttpClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_availability_sends_json_string() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Patch,
            "http://localhost:8765/api/technicians/t-1/availability",
            200,
            json!({}),
        );
        let api = TechnicianApi::new(&mock, ApiConfig::default());

        api.update_availability("t-1", AvailabilityStatus::Unavailable)
            .await
            .unwrap();

        assert_eq!(
            mock.last_request().unwrap().body.as_deref(),
            Some("\"UNAVAILABLE\"")
        );
    }

    #[tokio::test]
    async fn test_by_user_accepts_either_id_field() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Get,
            "http://localhost:8765/api/technicians/by-user/u-3",
            200,
            json!({ "technicianId": "t-3", "name": "Asha", "skills": ["AC"] }),
        );
        let api = TechnicianApi::new(&mock, ApiConfig::default());
        let detail = api.by_user("u-3").await.unwrap();
        assert_eq!(detail.id, None);
        assert_eq!(detail.technician_id.as_deref(), Some("t-3"));
    }
}
