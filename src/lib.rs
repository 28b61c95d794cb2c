//! Service Desk 前端核心
//!
//! 与浏览器无关的部分都在这里，可在原生目标上直接测试：
//! - `session` / `restore`: 会话存储与启动恢复
//! - `modal`: 登录/注册弹窗协调
//! - `route` / `guard`: 路由表与守卫
//! - `interceptor`: 请求鉴权头
//! - `api`: REST 服务
//! - `present` / `validation`: 视图模型与表单校验

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod interceptor;
pub mod modal;
pub mod observable;
pub mod present;
pub mod request;
pub mod restore;
pub mod route;
pub mod session;
pub mod storage;
pub mod validation;

pub use service_desk_shared as shared;

pub use config::ApiConfig;
pub use error::{AppError, AppResult, ErrorKind};
pub use guard::{GuardDecision, RouteGuard};
pub use interceptor::AuthorizedClient;
pub use modal::{AuthMode, AuthModal, ModalState};
pub use request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use restore::{RestoreOutcome, SessionRestorer};
pub use route::AppRoute;
pub use session::{Session, SessionStore, SessionUser};
pub use storage::{MemoryStorage, SessionStorage};
