//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑，不依赖 DOM。定义了应用的所有路由及其访问要求。

use service_desk_shared::Role;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 新建预约
    Booking,
    /// 客户的预约列表
    CustomerBookings,
    /// 技师入驻申请
    TechnicianOnboard,
    /// 技师工作台
    TechnicianDashboard,
    /// 技师个人资料
    TechnicianProfile,
    /// 管理端派单
    AdminAssignments,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    pub const ALL: [AppRoute; 8] = [
        AppRoute::Home,
        AppRoute::Booking,
        AppRoute::CustomerBookings,
        AppRoute::TechnicianOnboard,
        AppRoute::TechnicianDashboard,
        AppRoute::TechnicianProfile,
        AppRoute::AdminAssignments,
        AppRoute::NotFound,
    ];

    /// 将 URL path 解析为路由枚举，忽略查询串和末尾的 `/`
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Home,
            "/booking" => Self::Booking,
            "/customer/bookings" => Self::CustomerBookings,
            "/technician/onboard" => Self::TechnicianOnboard,
            "/technician/dashboard" => Self::TechnicianDashboard,
            "/technician/profile" => Self::TechnicianProfile,
            "/admin/assignments" => Self::AdminAssignments,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Booking => "/booking",
            Self::CustomerBookings => "/customer/bookings",
            Self::TechnicianOnboard => "/technician/onboard",
            Self::TechnicianDashboard => "/technician/dashboard",
            Self::TechnicianProfile => "/technician/profile",
            Self::AdminAssignments => "/admin/assignments",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫配置：该路由是否需要登录**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Booking | Self::CustomerBookings | Self::AdminAssignments
        )
    }

    /// 允许访问的角色；空集合表示登录即可
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Self::Booking | Self::CustomerBookings => &[Role::Customer],
            Self::AdminAssignments => &[Role::Admin, Role::ServiceManager],
            _ => &[],
        }
    }

    /// 角色被拒绝时的重定向目标
    pub fn forbidden_redirect() -> Self {
        Self::Home
    }

    /// 登录成功后按角色跳转的落地页
    pub fn landing_for(role: Role) -> Self {
        match role {
            Role::Customer => Self::CustomerBookings,
            Role::Technician => Self::TechnicianDashboard,
            Role::Admin | Role::ServiceManager => Self::AdminAssignments,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
