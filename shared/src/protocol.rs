use crate::{PATH_ASSIGNMENTS, PATH_AUTH_LOGIN, PATH_AUTH_REGISTER, PATH_BOOKINGS, Role};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for a
/// fixed-path API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

/// 后端不返回内容的接口
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

/// 后端错误响应体，`message` 用于展示
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =========================================================
// 认证 (Auth)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = PATH_AUTH_LOGIN;
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 登录响应，`role` 保留原始字符串，由调用方解析
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl ApiRequest for RegisterRequest {
    type Response = Empty;
    const PATH: &'static str = PATH_AUTH_REGISTER;
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// `GET /api/auth/me` 返回的权威用户记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub role: String,
}

// =========================================================
// 预约 (Bookings)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Assigned,
    InProgress,
    Rescheduled,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    pub const FILTERABLE: [BookingStatus; 7] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Assigned,
        BookingStatus::InProgress,
        BookingStatus::Rescheduled,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Assigned => "ASSIGNED",
            BookingStatus::InProgress => "IN_PROGRESS",
            BookingStatus::Rescheduled => "RESCHEDULED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::FILTERABLE.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAddress {
    pub address_line1: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

/// 预约记录
///
/// 管理端列表与客户 `my-bookings` 共用，客户侧额外带地址和技师信息。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: String,
    #[serde(default)]
    pub service_id: Option<String>,
    pub service_name: String,
    pub category_name: String,
    /// ISO 日期字符串
    pub scheduled_date: String,
    /// 时段编码，如 `SLOT_9_11`
    pub time_slot: String,
    pub status: BookingStatus,
    #[serde(default)]
    pub service_address: Option<ServiceAddress>,
    #[serde(default)]
    pub technician_name: Option<String>,
    #[serde(default)]
    pub technician_phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub service_name: String,
    pub category_name: String,
    pub scheduled_date: String,
    pub time_slot: String,
    pub address_line1: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub issue_description: String,
    pub payment_mode: String,
}

impl ApiRequest for CreateBookingRequest {
    type Response = serde_json::Value;
    const PATH: &'static str = PATH_BOOKINGS;
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    pub scheduled_date: String,
    pub time_slot: String,
}

/// 服务目录条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCatalogItem {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

// =========================================================
// 技师 (Technicians)
// =========================================================

/// `GET /api/technicians/available` 的列表项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianSummary {
    pub technician_id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub experience_years: u32,
}

/// `GET /api/technicians/by-user/{id}` 的响应
///
/// 后端有的版本返回 `id`，有的返回 `technicianId`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianDetail {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub technician_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub availability: Option<AvailabilityStatus>,
    #[serde(default)]
    pub documents: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    Available,
    Unavailable,
}

impl AvailabilityStatus {
    pub fn from_flag(available: bool) -> Self {
        if available {
            AvailabilityStatus::Available
        } else {
            AvailabilityStatus::Unavailable
        }
    }
}

// =========================================================
// 派单 (Assignments)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    Pending,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "PENDING",
            AssignmentStatus::Assigned => "ASSIGNED",
            AssignmentStatus::InProgress => "IN_PROGRESS",
            AssignmentStatus::Completed => "COMPLETED",
            AssignmentStatus::Cancelled => "CANCELLED",
            AssignmentStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResponse {
    pub assignment_id: String,
    pub booking_id: String,
    #[serde(default)]
    pub created_at: String,
    pub status: AssignmentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    pub booking_id: String,
    pub service_id: String,
    pub technician_id: String,
    pub scheduled_date: String,
    pub time_slot: String,
}

impl ApiRequest for CreateAssignmentRequest {
    type Response = serde_json::Value;
    const PATH: &'static str = PATH_ASSIGNMENTS;
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 技师对派单的操作，对应 `PUT /api/assignments/{id}/{action}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentAction {
    Accept,
    Reject,
    Start,
    Complete,
}

impl AssignmentAction {
    pub fn path_segment(&self) -> &'static str {
        match self {
            AssignmentAction::Accept => "accept",
            AssignmentAction::Reject => "reject",
            AssignmentAction::Start => "start",
            AssignmentAction::Complete => "complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_booking_parses_camel_case_payload() {
        let raw = json!({
            "bookingId": "b-1",
            "serviceName": "AC Repair",
            "categoryName": "Cooling",
            "scheduledDate": "2026-10-20",
            "timeSlot": "SLOT_9_11",
            "status": "RESCHEDULED",
            "serviceAddress": { "addressLine1": "12 MG Road", "city": "Pune" },
            "technicianName": "Ravi"
        });
        let booking: BookingResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(booking.status, BookingStatus::Rescheduled);
        assert_eq!(booking.service_address.unwrap().address_line1, "12 MG Road");
        assert_eq!(booking.technician_phone, None);
    }

    #[test]
    fn test_unknown_status_does_not_break_parsing() {
        let raw = json!({
            "assignmentId": "a-1",
            "bookingId": "b-1",
            "status": "ON_HOLD"
        });
        let assignment: AssignmentResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(assignment.status, AssignmentStatus::Unknown);
        assert_eq!(assignment.created_at, "");
    }

    #[test]
    fn test_register_request_serializes_role_in_wire_format() {
        let req = RegisterRequest {
            email: "a@b.com".into(),
            password: "secret1".into(),
            role: Role::Customer,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["role"], "CUSTOMER");
    }
}
