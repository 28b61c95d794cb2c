//! 服务工厂
//!
//! 所有页面都通过 `Services` 获取 REST 服务，请求统一经过鉴权头附加。

use crate::auth::BrowserSession;
use crate::web::{BrowserStorage, FetchClient};
use leptos::prelude::*;
use service_desk::api::{AssignmentApi, AuthApi, BookingApi, CatalogApi, TechnicianApi};
use service_desk::{ApiConfig, AuthorizedClient};

pub type AppClient = AuthorizedClient<FetchClient, BrowserStorage>;

#[derive(Clone)]
pub struct Services {
    client: AppClient,
    config: ApiConfig,
    session: BrowserSession,
}

impl Services {
    pub fn new(config: ApiConfig, session: BrowserSession) -> Self {
        Self {
            client: AuthorizedClient::new(FetchClient, session.clone()),
            config,
            session,
        }
    }

    pub fn auth(&self) -> AuthApi<AppClient, BrowserStorage> {
        AuthApi::new(self.client.clone(), self.config.clone(), self.session.clone())
    }

    pub fn bookings(&self) -> BookingApi<AppClient> {
        BookingApi::new(self.client.clone(), self.config.clone())
    }

    pub fn catalog(&self) -> CatalogApi<AppClient> {
        CatalogApi::new(self.client.clone(), self.config.clone())
    }

    pub fn technicians(&self) -> TechnicianApi<AppClient> {
        TechnicianApi::new(self.client.clone(), self.config.clone())
    }

    pub fn assignments(&self) -> AssignmentApi<AppClient> {
        AssignmentApi::new(self.client.clone(), self.config.clone())
    }
}

pub fn use_services() -> Services {
    use_context::<Services>().expect("Services should be provided")
}
