use super::ApiClient;
use crate::config::ApiConfig;
use crate::error::AppResult;
use crate::request::{HttpClient, HttpMethod};
use service_desk_shared::{
    BookingResponse, CreateBookingRequest, PATH_BOOKINGS, PATH_MY_BOOKINGS, RescheduleRequest,
};

/// 预约服务
#[derive(Clone)]
pub struct BookingApi<C: HttpClient> {
    api: ApiClient<C>,
}

impl<C: HttpClient> BookingApi<C> {
    pub fn new(client: C, config: ApiConfig) -> Self {
        Self {
            api: ApiClient::new(client, config),
        }
    }

    pub async fn create(&self, req: &CreateBookingRequest) -> AppResult<()> {
        self.api.call_discard("bookings.create", req).await
    }

    /// 当前客户的预约
    pub async fn my_bookings(&self) -> AppResult<Vec<BookingResponse>> {
        self.api
            .get_json("bookings.my_bookings", PATH_MY_BOOKINGS)
            .await
    }

    /// 全部预约（管理端）
    pub async fn all(&self) -> AppResult<Vec<BookingResponse>> {
        self.api.get_json("bookings.all", PATH_BOOKINGS).await
    }

    pub async fn reschedule(&self, booking_id: &str, req: &RescheduleRequest) -> AppResult<()> {
        let path = format!("{}/{}/reschedule", PATH_BOOKINGS, booking_id);
        self.api
            .send("bookings.reschedule", HttpMethod::Put, &path, Some(req))
            .await
    }

    pub async fn cancel(&self, booking_id: &str) -> AppResult<()> {
        let path = format!("{}/{}/cancel", PATH_BOOKINGS, booking_id);
        self.api
            .send::<()>("bookings.cancel", HttpMethod::Put, &path, None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::bookings::{CANCEL_FAILED, RESCHEDULE_FAILED};
    use crate::request::MockHttpClient;
    use serde_json::json;
    use service_desk_shared::BookingStatus;

    #[tokio::test]
    async fn test_my_bookings_parses_list() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Get,
            "http://localhost:8765/api/bookings/my-bookings",
            200,
            json!([{
                "bookingId": "b-1",
                "serviceName": "Plumbing",
                "categoryName": "Home",
                "scheduledDate": "2026-10-19",
                "timeSlot": "SLOT_14_16",
                "status": "PENDING"
            }]),
        );
        let api = BookingApi::new(&mock, ApiConfig::default());

        let list = api.my_bookings().await.unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn test_reschedule_puts_new_date_and_slot() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Put,
            "http://localhost:8765/api/bookings/b-9/reschedule",
            200,
            json!({}),
        );
        let api = BookingApi::new(&mock, ApiConfig::default());

        api.reschedule(
            "b-9",
            &RescheduleRequest {
                scheduled_date: "2026-10-20".into(),
                time_slot: "SLOT_9_11".into(),
            },
        )
        .await
        .unwrap();

        let body = mock.last_request().unwrap().body.unwrap();
        assert_eq!(
            body,
            "{\"scheduledDate\":\"2026-10-20\",\"timeSlot\":\"SLOT_9_11\"}"
        );
    }

    #[tokio::test]
    async fn test_cancel_without_body() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Put,
            "http://localhost:8765/api/bookings/b-9/cancel",
            204,
            json!(null),
        );
        let api = BookingApi::new(&mock, ApiConfig::default());
        api.cancel("b-9").await.unwrap();
        assert_eq!(mock.last_request().unwrap().body, None);
    }

    #[tokio::test]
    async fn test_cancel_rejection_surfaces_backend_message() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Put,
            "http://localhost:8765/api/bookings/b-9/cancel",
            409,
            json!({"message": "Cannot cancel within 24h"}),
        );
        let api = BookingApi::new(&mock, ApiConfig::default());

        let err = api.cancel("b-9").await.unwrap_err();

        assert_eq!(err.status, Some(409));
        assert_eq!(err.user_message_or(CANCEL_FAILED), "Cannot cancel within 24h");
    }

    #[tokio::test]
    async fn test_reschedule_rejection_without_message_falls_back() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Put,
            "http://localhost:8765/api/bookings/b-9/reschedule",
            409,
            json!({}),
        );
        let api = BookingApi::new(&mock, ApiConfig::default());

        let err = api
            .reschedule(
                "b-9",
                &RescheduleRequest {
                    scheduled_date: "2026-10-20".into(),
                    time_slot: "SLOT_9_11".into(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.user_message_or(RESCHEDULE_FAILED), RESCHEDULE_FAILED);
    }
}
