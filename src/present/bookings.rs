//! 客户侧预约：列表视图、改期/取消规则、新建预约表单

use super::slots::slot_label;
use crate::validation::{FieldErrors, is_blank};
use chrono::NaiveDate;
use service_desk_shared::date::{DateWindow, parse_date};
use service_desk_shared::{BookingResponse, BookingStatus, CreateBookingRequest, RescheduleRequest};

pub const NO_ADDRESS: &str = "No Address Provided";

pub const CANCEL_SUCCESS: &str = "Your booking has been successfully cancelled.";
pub const CANCEL_FAILED: &str = "Booking cannot be cancelled at this time.";
pub const RESCHEDULE_SUCCESS: &str = "Your booking has been successfully rescheduled.";
pub const RESCHEDULE_FAILED: &str = "Unable to reschedule booking.";
pub const RESCHEDULE_MISSING: &str = "Please select both date and time slot.";
pub const RESCHEDULE_OUT_OF_WINDOW: &str =
    "You can only reschedule between tomorrow and the next 3 days.";

pub const DEFAULT_PAYMENT_MODE: &str = "CASH";

// =========================================================
// 客户预约列表
// =========================================================

/// 客户预约列表项
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerBooking {
    pub id: String,
    pub service_name: String,
    pub category: String,
    pub scheduled_date: String,
    pub time_slot: String,
    pub address: String,
    pub status: BookingStatus,
    pub technician_name: Option<String>,
    pub technician_phone: Option<String>,
}

impl From<BookingResponse> for CustomerBooking {
    fn from(b: BookingResponse) -> Self {
        let address = match &b.service_address {
            Some(addr) => format!("{}, {}", addr.address_line1, addr.city),
            None => NO_ADDRESS.to_string(),
        };
        Self {
            time_slot: slot_label(&b.time_slot).into_owned(),
            id: b.booking_id,
            service_name: b.service_name,
            category: b.category_name,
            scheduled_date: b.scheduled_date,
            address,
            status: b.status,
            technician_name: b.technician_name.filter(|s| !s.is_empty()),
            technician_phone: b.technician_phone.filter(|s| !s.is_empty()),
        }
    }
}

impl CustomerBooking {
    /// 进行中或已完成的预约不显示操作按钮
    pub fn should_show_actions(&self) -> bool {
        !matches!(
            self.status,
            BookingStatus::Completed | BookingStatus::InProgress
        )
    }

    pub fn is_reschedule_disabled(&self) -> bool {
        matches!(
            self.status,
            BookingStatus::Cancelled | BookingStatus::Rescheduled | BookingStatus::Completed
        )
    }

    pub fn is_cancel_disabled(&self) -> bool {
        matches!(
            self.status,
            BookingStatus::Cancelled | BookingStatus::Completed
        )
    }
}

/// 状态筛选
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookingStatus),
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// 从下拉框的值解析，未知值视为全部
    pub fn parse(value: &str) -> Self {
        BookingStatus::parse(value)
            .map(StatusFilter::Only)
            .unwrap_or_default()
    }

    pub fn matches(&self, status: BookingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }

    pub fn apply<'a>(&self, bookings: &'a [CustomerBooking]) -> Vec<&'a CustomerBooking> {
        bookings.iter().filter(|b| self.matches(b.status)).collect()
    }
}

// =========================================================
// 改期
// =========================================================

/// 改期表单：日期必须在明天到今天+3 之间
pub fn validate_reschedule(
    date: &str,
    slot: &str,
    today: NaiveDate,
) -> Result<RescheduleRequest, &'static str> {
    if is_blank(date) || is_blank(slot) {
        return Err(RESCHEDULE_MISSING);
    }
    let parsed = parse_date(date).ok_or(RESCHEDULE_OUT_OF_WINDOW)?;
    if !DateWindow::reschedule(today).contains(parsed) {
        return Err(RESCHEDULE_OUT_OF_WINDOW);
    }
    Ok(RescheduleRequest {
        scheduled_date: date.trim().to_string(),
        time_slot: slot.trim().to_string(),
    })
}

// =========================================================
// 新建预约
// =========================================================

/// 新建预约表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
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

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            service_name: String::new(),
            category_name: String::new(),
            scheduled_date: String::new(),
            time_slot: String::new(),
            address_line1: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            issue_description: String::new(),
            payment_mode: DEFAULT_PAYMENT_MODE.to_string(),
        }
    }
}

impl BookingForm {
    /// 校验并生成请求
    pub fn validate(&self, today: NaiveDate) -> Result<CreateBookingRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("service_name", &self.service_name, "Service");
        errors.require("category_name", &self.category_name, "Category");
        errors.require("scheduled_date", &self.scheduled_date, "Date");
        errors.require("time_slot", &self.time_slot, "Time slot");
        errors.require("address_line1", &self.address_line1, "Address");
        errors.require("city", &self.city, "City");
        errors.require("state", &self.state, "State");
        errors.require("zip_code", &self.zip_code, "Zip code");
        errors.require("issue_description", &self.issue_description, "Issue description");
        errors.require("payment_mode", &self.payment_mode, "Payment mode");

        if !is_blank(&self.scheduled_date) {
            match parse_date(&self.scheduled_date) {
                Some(date) if DateWindow::booking(today).contains(date) => {}
                _ => errors.add(
                    "scheduled_date",
                    "Choose a date between today and the next 3 days",
                ),
            }
        }
        errors.into_result()?;

        Ok(CreateBookingRequest {
            service_name: self.service_name.trim().to_string(),
            category_name: self.category_name.trim().to_string(),
            scheduled_date: self.scheduled_date.trim().to_string(),
            time_slot: self.time_slot.trim().to_string(),
            address_line1: self.address_line1.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            zip_code: self.zip_code.trim().to_string(),
            issue_description: self.issue_description.trim().to_string(),
            payment_mode: self.payment_mode.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use service_desk_shared::ServiceAddress;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn response(status: BookingStatus) -> BookingResponse {
        BookingResponse {
            booking_id: "b-1".into(),
            service_id: None,
            service_name: "AC Repair".into(),
            category_name: "Appliances".into(),
            scheduled_date: "2026-10-19".into(),
            time_slot: "SLOT_9_11".into(),
            status,
            service_address: None,
            technician_name: Some(String::new()),
            technician_phone: None,
        }
    }

    #[test]
    fn test_mapping_formats_slot_and_address() {
        let mut raw = response(BookingStatus::Pending);
        let booking = CustomerBooking::from(raw.clone());
        assert_eq!(booking.time_slot, "9:00 AM - 11:00 AM");
        assert_eq!(booking.address, NO_ADDRESS);
        assert_eq!(booking.technician_name, None);

        raw.service_address = Some(ServiceAddress {
            address_line1: "12 MG Road".into(),
            city: "Pune".into(),
            state: None,
            zip_code: None,
        });
        raw.time_slot = "SLOT_X".into();
        let booking = CustomerBooking::from(raw);
        assert_eq!(booking.address, "12 MG Road, Pune");
        assert_eq!(booking.time_slot, "SLOT_X");
    }

    #[test]
    fn test_action_rules_by_status() {
        let b = |s| CustomerBooking::from(response(s));

        assert!(b(BookingStatus::Pending).should_show_actions());
        assert!(!b(BookingStatus::Completed).should_show_actions());
        assert!(!b(BookingStatus::InProgress).should_show_actions());

        assert!(b(BookingStatus::Rescheduled).is_reschedule_disabled());
        assert!(!b(BookingStatus::Rescheduled).is_cancel_disabled());
        assert!(b(BookingStatus::Cancelled).is_cancel_disabled());
        assert!(!b(BookingStatus::Confirmed).is_reschedule_disabled());
    }

    #[test]
    fn test_status_filter() {
        let list: Vec<CustomerBooking> = [
            BookingStatus::Pending,
            BookingStatus::Cancelled,
            BookingStatus::Pending,
        ]
        .into_iter()
        .map(|s| CustomerBooking::from(response(s)))
        .collect();

        assert_eq!(StatusFilter::All.apply(&list).len(), 3);
        assert_eq!(StatusFilter::parse("PENDING").apply(&list).len(), 2);
        assert_eq!(StatusFilter::parse("ALL"), StatusFilter::All);
        assert_eq!(StatusFilter::parse("CANCELLED").as_str(), "CANCELLED");
    }

    #[test]
    fn test_reschedule_window() {
        assert_eq!(
            validate_reschedule("", "SLOT_9_11", today()),
            Err(RESCHEDULE_MISSING)
        );
        assert_eq!(
            validate_reschedule("2026-10-18", "SLOT_9_11", today()),
            Err(RESCHEDULE_OUT_OF_WINDOW)
        );
        assert_eq!(
            validate_reschedule("2026-10-22", "SLOT_9_11", today()),
            Err(RESCHEDULE_OUT_OF_WINDOW)
        );
        let req = validate_reschedule("2026-10-21", "SLOT_16_18", today()).unwrap();
        assert_eq!(req.scheduled_date, "2026-10-21");
        assert_eq!(req.time_slot, "SLOT_16_18");
    }

    #[test]
    fn test_booking_form_requires_every_field() {
        let form = BookingForm::default();
        let errs = form.validate(today()).unwrap_err();
        assert_eq!(errs.len(), 9);
        assert!(!errs.has("payment_mode"));
    }

    #[test]
    fn test_booking_form_builds_request() {
        let form = BookingForm {
            service_name: "AC Repair".into(),
            category_name: "Appliances".into(),
            scheduled_date: "2026-10-18".into(),
            time_slot: "SLOT_14_16".into(),
            address_line1: "12 MG Road".into(),
            city: "Pune".into(),
            state: "MH".into(),
            zip_code: "411001".into(),
            issue_description: "Not cooling".into(),
            ..BookingForm::default()
        };
        let req = form.validate(today()).unwrap();
        assert_eq!(req.payment_mode, "CASH");

        let late = BookingForm {
            scheduled_date: "2026-10-25".into(),
            ..form
        };
        assert!(late.validate(today()).unwrap_err().has("scheduled_date"));
    }
}
