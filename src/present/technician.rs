//! 技师工作台与个人资料

use service_desk_shared::{
    AssignmentAction, AssignmentResponse, AssignmentStatus, AvailabilityStatus, TechnicianDetail,
};

// =========================================================
// 工作台
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    New,
    Ongoing,
    Completed,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::New,
        DashboardTab::Ongoing,
        DashboardTab::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::New => "NEW",
            DashboardTab::Ongoing => "ONGOING",
            DashboardTab::Completed => "COMPLETED",
        }
    }

    pub fn includes(&self, status: AssignmentStatus) -> bool {
        match self {
            DashboardTab::New => status == AssignmentStatus::Pending,
            DashboardTab::Ongoing => matches!(
                status,
                AssignmentStatus::Assigned | AssignmentStatus::InProgress
            ),
            DashboardTab::Completed => matches!(
                status,
                AssignmentStatus::Completed | AssignmentStatus::Cancelled
            ),
        }
    }
}

/// 工作台状态：派单列表与当前标签页
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechnicianBoard {
    pub assignments: Vec<AssignmentResponse>,
    pub active_tab: DashboardTab,
}

impl TechnicianBoard {
    pub fn new(assignments: Vec<AssignmentResponse>) -> Self {
        Self {
            assignments,
            active_tab: DashboardTab::New,
        }
    }

    pub fn list(&self, tab: DashboardTab) -> Vec<&AssignmentResponse> {
        self.assignments
            .iter()
            .filter(|a| tab.includes(a.status))
            .collect()
    }

    pub fn current(&self) -> Vec<&AssignmentResponse> {
        self.list(self.active_tab)
    }

    pub fn count(&self, tab: DashboardTab) -> usize {
        self.list(tab).len()
    }

    /// 后端确认操作成功后更新本地状态
    pub fn apply(&mut self, assignment_id: &str, action: AssignmentAction) {
        let (status, tab) = match action {
            AssignmentAction::Reject => {
                self.assignments.retain(|a| a.assignment_id != assignment_id);
                return;
            }
            AssignmentAction::Accept => (AssignmentStatus::Assigned, DashboardTab::Ongoing),
            AssignmentAction::Start => (AssignmentStatus::InProgress, DashboardTab::Ongoing),
            AssignmentAction::Complete => (AssignmentStatus::Completed, DashboardTab::Completed),
        };
        if let Some(item) = self
            .assignments
            .iter_mut()
            .find(|a| a.assignment_id == assignment_id)
        {
            item.status = status;
        }
        self.active_tab = tab;
    }
}

// =========================================================
// 个人资料
// =========================================================

pub const UNKNOWN_PHONE: &str = "N/A";
pub const UNKNOWN_CITY: &str = "Unknown";
pub const DEFAULT_SKILL: &str = "General Technician";
pub const AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Verified,
    Pending,
    Rejected,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Verified => "Verified",
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDocument {
    pub name: String,
    pub status: DocumentStatus,
    pub doc_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicianProfile {
    /// 为空时无法更新可接单状态
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub city: String,
    pub primary_skill: String,
    pub is_available: bool,
    pub documents: Vec<ProfileDocument>,
}

impl From<TechnicianDetail> for TechnicianProfile {
    fn from(d: TechnicianDetail) -> Self {
        let id = d
            .id
            .filter(|s| !s.is_empty())
            .or(d.technician_id)
            .filter(|s| !s.is_empty());
        let documents = d
            .documents
            .unwrap_or_default()
            .into_keys()
            .enumerate()
            .map(|(i, name)| ProfileDocument {
                name,
                status: DocumentStatus::Verified,
                doc_id: format!("DOC-{}", i + 1),
            })
            .collect();
        Self {
            id,
            phone: d
                .phone
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNKNOWN_PHONE.to_string()),
            city: d
                .city
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNKNOWN_CITY.to_string()),
            primary_skill: d
                .skills
                .into_iter()
                .next()
                .unwrap_or_else(|| DEFAULT_SKILL.to_string()),
            is_available: d.availability == Some(AvailabilityStatus::Available),
            name: d.name,
            documents,
        }
    }
}

impl TechnicianProfile {
    /// 头像地址，`encoded_name` 需由调用方做 URI 编码
    pub fn photo_url(encoded_name: &str) -> String {
        format!(
            "{}?name={}&background=c27843&color=fff&size=128",
            AVATAR_BASE_URL, encoded_name
        )
    }
}

/// 切换可接单状态的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityToggle {
    /// 发送该状态到后端
    Send {
        technician_id: String,
        status: AvailabilityStatus,
    },
    /// 缺少技师 ID，回退开关
    Revert,
}

/// 根据开关新值决定如何处理
pub fn toggle_availability(profile: &TechnicianProfile, now_available: bool) -> AvailabilityToggle {
    match &profile.id {
        Some(id) => AvailabilityToggle::Send {
            technician_id: id.clone(),
            status: AvailabilityStatus::from_flag(now_available),
        },
        None => AvailabilityToggle::Revert,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assignment(id: &str, status: AssignmentStatus) -> AssignmentResponse {
        AssignmentResponse {
            assignment_id: id.into(),
            booking_id: format!("b-{}", id),
            created_at: "2026-10-18T08:00:00".into(),
            status,
        }
    }

    fn board() -> TechnicianBoard {
        TechnicianBoard::new(vec![
            assignment("1", AssignmentStatus::Pending),
            assignment("2", AssignmentStatus::Assigned),
            assignment("3", AssignmentStatus::InProgress),
            assignment("4", AssignmentStatus::Cancelled),
            assignment("5", AssignmentStatus::Unknown),
        ])
    }

    #[test]
    fn test_tabs_partition_assignments() {
        let b = board();
        assert_eq!(b.count(DashboardTab::New), 1);
        assert_eq!(b.count(DashboardTab::Ongoing), 2);
        assert_eq!(b.count(DashboardTab::Completed), 1);
        assert_eq!(b.current().len(), 1);
    }

    #[test]
    fn test_transitions() {
        let mut b = board();

        b.apply("1", AssignmentAction::Accept);
        assert_eq!(b.assignments[0].status, AssignmentStatus::Assigned);
        assert_eq!(b.active_tab, DashboardTab::Ongoing);

        b.apply("1", AssignmentAction::Start);
        assert_eq!(b.assignments[0].status, AssignmentStatus::InProgress);

        b.apply("1", AssignmentAction::Complete);
        assert_eq!(b.assignments[0].status, AssignmentStatus::Completed);
        assert_eq!(b.active_tab, DashboardTab::Completed);

        b.apply("2", AssignmentAction::Reject);
        assert_eq!(b.assignments.len(), 4);
        assert!(b.assignments.iter().all(|a| a.assignment_id != "2"));
        assert_eq!(b.active_tab, DashboardTab::Completed);
    }

    #[test]
    fn test_profile_defaults() {
        let detail: TechnicianDetail = serde_json::from_value(json!({
            "technicianId": "t-1",
            "name": "Asha",
            "phone": "",
            "availability": "UNAVAILABLE"
        }))
        .unwrap();
        let profile = TechnicianProfile::from(detail);
        assert_eq!(profile.id.as_deref(), Some("t-1"));
        assert_eq!(profile.phone, "N/A");
        assert_eq!(profile.city, "Unknown");
        assert_eq!(profile.primary_skill, "General Technician");
        assert!(!profile.is_available);
        assert!(profile.documents.is_empty());
    }

    #[test]
    fn test_profile_prefers_id_and_lists_documents() {
        let detail: TechnicianDetail = serde_json::from_value(json!({
            "id": "t-7",
            "technicianId": "legacy",
            "name": "Ravi",
            "city": "Pune",
            "skills": ["AC", "Fridge"],
            "availability": "AVAILABLE",
            "documents": { "aadhaar": "a.pdf", "pan": "p.pdf" }
        }))
        .unwrap();
        let profile = TechnicianProfile::from(detail);
        assert_eq!(profile.id.as_deref(), Some("t-7"));
        assert_eq!(profile.primary_skill, "AC");
        assert!(profile.is_available);
        assert_eq!(profile.documents.len(), 2);
        assert_eq!(profile.documents[1].doc_id, "DOC-2");
        assert_eq!(profile.documents[0].status.as_str(), "Verified");
    }

    #[test]
    fn test_toggle_without_id_reverts() {
        let detail: TechnicianDetail =
            serde_json::from_value(json!({ "name": "Anon" })).unwrap();
        let mut profile = TechnicianProfile::from(detail);
        assert_eq!(toggle_availability(&profile, true), AvailabilityToggle::Revert);

        profile.id = Some("t-1".into());
        assert_eq!(
            toggle_availability(&profile, false),
            AvailabilityToggle::Send {
                technician_id: "t-1".into(),
                status: AvailabilityStatus::Unavailable
            }
        );
        assert!(TechnicianProfile::photo_url("Ravi%20K").contains("name=Ravi%20K&"));
    }
}
