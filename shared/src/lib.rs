use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod date;
pub mod protocol;

pub use protocol::*;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const AUTH_SCHEME_BEARER: &str = "Bearer";

pub const PATH_AUTH_LOGIN: &str = "/api/auth/login";
pub const PATH_AUTH_REGISTER: &str = "/api/auth/register";
pub const PATH_AUTH_ME: &str = "/api/auth/me";
pub const PATH_BOOKINGS: &str = "/api/bookings";
pub const PATH_MY_BOOKINGS: &str = "/api/bookings/my-bookings";
pub const PATH_SERVICES: &str = "/api/services";
pub const PATH_TECHNICIANS: &str = "/api/technicians";
pub const PATH_ASSIGNMENTS: &str = "/api/assignments";
pub const PATH_MY_ASSIGNMENTS: &str = "/api/assignments/my-assignments";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 用户角色
///
/// 固定集合，没有层级关系：权限判断只看是否属于允许集合。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Technician,
    Admin,
    ServiceManager,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Customer,
        Role::Technician,
        Role::Admin,
        Role::ServiceManager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
            Role::Technician => "TECHNICIAN",
            Role::Admin => "ADMIN",
            Role::ServiceManager => "SERVICE_MANAGER",
        }
    }

    /// 解析后端返回的角色字符串，未知角色返回 None
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown role: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_wire_names() {
        assert_eq!(Role::parse("SERVICE_MANAGER"), Some(Role::ServiceManager));
        assert_eq!(Role::parse("customer"), None);
        assert_eq!(
            serde_json::to_string(&Role::ServiceManager).unwrap(),
            "\"SERVICE_MANAGER\""
        );
        assert_eq!("TECHNICIAN".parse::<Role>(), Ok(Role::Technician));
    }
}
