use std::borrow::Cow;

/// 可预约的时段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    Morning,
    Midday,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Midday,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "SLOT_9_11",
            TimeSlot::Midday => "SLOT_11_13",
            TimeSlot::Afternoon => "SLOT_14_16",
            TimeSlot::Evening => "SLOT_16_18",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "9:00 AM - 11:00 AM",
            TimeSlot::Midday => "11:00 AM - 1:00 PM",
            TimeSlot::Afternoon => "2:00 PM - 4:00 PM",
            TimeSlot::Evening => "4:00 PM - 6:00 PM",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            // 管理端历史数据中的旧编码
            "SLOT_11_1" => Some(TimeSlot::Midday),
            _ => Self::ALL.into_iter().find(|s| s.code() == code),
        }
    }
}

/// 时段编码转展示文本，未知编码原样返回
pub fn slot_label(code: &str) -> Cow<'_, str> {
    match TimeSlot::from_code(code) {
        Some(slot) => Cow::Borrowed(slot.label()),
        None => Cow::Borrowed(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_labels() {
        assert_eq!(slot_label("SLOT_9_11"), "9:00 AM - 11:00 AM");
        assert_eq!(slot_label("SLOT_11_13"), "11:00 AM - 1:00 PM");
        assert_eq!(slot_label("SLOT_11_1"), "11:00 AM - 1:00 PM");
        assert_eq!(slot_label("SLOT_14_16"), "2:00 PM - 4:00 PM");
        assert_eq!(slot_label("SLOT_16_18"), "4:00 PM - 6:00 PM");
        assert_eq!(slot_label("SLOT_20_22"), "SLOT_20_22");
        assert_eq!(slot_label(""), "");
    }

    #[test]
    fn test_selectable_slots_use_canonical_codes() {
        let codes: Vec<_> = TimeSlot::ALL.iter().map(TimeSlot::code).collect();
        assert_eq!(codes, ["SLOT_9_11", "SLOT_11_13", "SLOT_14_16", "SLOT_16_18"]);
    }
}
