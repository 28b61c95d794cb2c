//! 预约表单状态
//!
//! 将零散的 signal 整合为 `FormState`，负责持有、重置，
//! 以及转换为核心库的 `BookingForm` 交给校验。

use leptos::prelude::*;
use service_desk::present::bookings::{BookingForm, DEFAULT_PAYMENT_MODE};
use service_desk_shared::ServiceCatalogItem;

/// 使用 `RwSignal` 因为它实现了 `Copy`，可以直接在闭包和子组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    // 服务
    pub service_name: RwSignal<String>,
    pub category_name: RwSignal<String>,

    // 时间
    pub scheduled_date: RwSignal<String>,
    pub time_slot: RwSignal<String>,

    // 地址
    pub address_line1: RwSignal<String>,
    pub city: RwSignal<String>,
    pub state: RwSignal<String>,
    pub zip_code: RwSignal<String>,

    pub issue_description: RwSignal<String>,
    pub payment_mode: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            service_name: RwSignal::new(String::new()),
            category_name: RwSignal::new(String::new()),
            scheduled_date: RwSignal::new(String::new()),
            time_slot: RwSignal::new(String::new()),
            address_line1: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            state: RwSignal::new(String::new()),
            zip_code: RwSignal::new(String::new()),
            issue_description: RwSignal::new(String::new()),
            payment_mode: RwSignal::new(DEFAULT_PAYMENT_MODE.to_string()),
        }
    }

    pub fn reset(&self) {
        self.service_name.set(String::new());
        self.category_name.set(String::new());
        self.scheduled_date.set(String::new());
        self.time_slot.set(String::new());
        self.address_line1.set(String::new());
        self.city.set(String::new());
        self.state.set(String::new());
        self.zip_code.set(String::new());
        self.issue_description.set(String::new());
        self.payment_mode.set(DEFAULT_PAYMENT_MODE.to_string());
    }

    /// 选择服务时同时带出其分类
    pub fn select_service(&self, service: &ServiceCatalogItem) {
        self.service_name.set(service.name.clone());
        self.category_name
            .set(service.category_name.clone().unwrap_or_default());
    }

    pub fn to_form(&self) -> BookingForm {
        BookingForm {
            service_name: self.service_name.get(),
            category_name: self.category_name.get(),
            scheduled_date: self.scheduled_date.get(),
            time_slot: self.time_slot.get(),
            address_line1: self.address_line1.get(),
            city: self.city.get(),
            state: self.state.get(),
            zip_code: self.zip_code.get(),
            issue_description: self.issue_description.get(),
            payment_mode: self.payment_mode.get(),
        }
    }
}
