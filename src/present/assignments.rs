//! 管理端派单看板

use service_desk_shared::{BookingResponse, BookingStatus, CreateAssignmentRequest, TechnicianSummary};

pub const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150?u=";
pub const ASSIGNMENT_FAILED: &str = "Failed to create assignment";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    Unassigned,
    Completed,
}

impl RowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::Unassigned => "UNASSIGNED",
            RowStatus::Completed => "COMPLETED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    Assign,
    Reassign,
}

impl ActionType {
    pub fn label(&self) -> &'static str {
        match self {
            ActionType::Assign => "Assign",
            ActionType::Reassign => "Reassign",
        }
    }
}

/// 看板行
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRow {
    pub booking_id: String,
    pub service_name: String,
    pub sub_category: String,
    pub scheduled_date: String,
    pub time_slot: String,
    pub status: RowStatus,
    pub action: ActionType,
}

impl From<BookingResponse> for AssignmentRow {
    fn from(b: BookingResponse) -> Self {
        let (status, action) = if b.status == BookingStatus::Confirmed {
            (RowStatus::Unassigned, ActionType::Assign)
        } else {
            (RowStatus::Completed, ActionType::Reassign)
        };
        Self {
            booking_id: b.booking_id,
            service_name: b.service_name,
            sub_category: b.category_name,
            scheduled_date: b.scheduled_date,
            time_slot: b.time_slot,
            status,
            action,
        }
    }
}

/// 派单弹窗中的候选技师
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableTechnician {
    pub id: String,
    pub name: String,
    pub skill: String,
    pub avatar: String,
}

impl From<TechnicianSummary> for AvailableTechnician {
    fn from(t: TechnicianSummary) -> Self {
        Self {
            avatar: format!("{}{}", AVATAR_BASE_URL, t.technician_id),
            skill: t.skills.join(", "),
            id: t.technician_id,
            name: t.name,
        }
    }
}

// =========================================================
// AssignmentBoard - 看板交互状态
// =========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentBoard {
    pub rows: Vec<AssignmentRow>,
    pub technicians: Vec<AvailableTechnician>,
    /// 当前打开的弹窗类型，None 表示关闭
    pub modal: Option<ActionType>,
    pub selected_booking: Option<AssignmentRow>,
    pub selected_technician: Option<String>,
}

impl AssignmentBoard {
    pub fn load(&mut self, bookings: Vec<BookingResponse>) {
        self.rows = bookings.into_iter().map(AssignmentRow::from).collect();
    }

    /// 点击行操作：打开对应弹窗，清空已选技师
    pub fn open_action(&mut self, booking_id: &str) -> bool {
        let Some(row) = self.rows.iter().find(|r| r.booking_id == booking_id) else {
            return false;
        };
        self.modal = Some(row.action);
        self.selected_booking = Some(row.clone());
        self.selected_technician = None;
        true
    }

    pub fn set_technicians(&mut self, technicians: Vec<TechnicianSummary>) {
        self.technicians = technicians.into_iter().map(Into::into).collect();
    }

    pub fn select_technician(&mut self, technician_id: &str) {
        self.selected_technician = Some(technician_id.to_string());
    }

    pub fn close(&mut self) {
        self.modal = None;
        self.selected_booking = None;
        self.selected_technician = None;
        self.technicians.clear();
    }

    /// 预约和技师都已选择时才生成请求
    pub fn assignment_request(&self) -> Option<CreateAssignmentRequest> {
        let booking = self.selected_booking.as_ref()?;
        let technician_id = self.selected_technician.as_ref()?;
        Some(CreateAssignmentRequest {
            booking_id: booking.booking_id.clone(),
            service_id: booking.sub_category.to_uppercase(),
            technician_id: technician_id.clone(),
            scheduled_date: booking.scheduled_date.clone(),
            time_slot: booking.time_slot.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: &str, status: BookingStatus) -> BookingResponse {
        BookingResponse {
            booking_id: id.into(),
            service_id: None,
            service_name: "Deep Cleaning".into(),
            category_name: "Home cleaning".into(),
            scheduled_date: "2026-10-20".into(),
            time_slot: "SLOT_11_1".into(),
            status,
            service_address: None,
            technician_name: None,
            technician_phone: None,
        }
    }

    fn technician() -> TechnicianSummary {
        TechnicianSummary {
            technician_id: "t-9".into(),
            user_id: "u-9".into(),
            name: "Asha".into(),
            skills: vec!["Cleaning".into(), "Plumbing".into()],
            city: "Pune".into(),
            experience_years: 4,
        }
    }

    #[test]
    fn test_row_status_follows_booking_status() {
        let row = AssignmentRow::from(booking("b-1", BookingStatus::Confirmed));
        assert_eq!(row.status, RowStatus::Unassigned);
        assert_eq!(row.action.label(), "Assign");

        let row = AssignmentRow::from(booking("b-2", BookingStatus::Pending));
        assert_eq!(row.status.as_str(), "COMPLETED");
        assert_eq!(row.action, ActionType::Reassign);
    }

    #[test]
    fn test_technician_mapping() {
        let tech = AvailableTechnician::from(technician());
        assert_eq!(tech.skill, "Cleaning, Plumbing");
        assert_eq!(tech.avatar, "https://i.pravatar.cc/150?u=t-9");
    }

    #[test]
    fn test_request_needs_booking_and_technician() {
        let mut board = AssignmentBoard::default();
        board.load(vec![booking("b-1", BookingStatus::Confirmed)]);

        assert!(!board.open_action("missing"));
        assert!(board.open_action("b-1"));
        assert_eq!(board.modal, Some(ActionType::Assign));
        assert_eq!(board.assignment_request(), None);

        board.set_technicians(vec![technician()]);
        board.select_technician("t-9");
        let req = board.assignment_request().unwrap();
        assert_eq!(req.service_id, "HOME CLEANING");
        assert_eq!(req.technician_id, "t-9");
        assert_eq!(req.time_slot, "SLOT_11_1");

        board.close();
        assert_eq!(board.modal, None);
        assert!(board.technicians.is_empty());
        assert_eq!(board.assignment_request(), None);
    }
}
