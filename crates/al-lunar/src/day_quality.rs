//! Day quality (trực) classification.
//!
//! The twelve trực rotate through the days: the day whose branch matches the
//! month's branch is Kiến, the next Trừ, and so on. Each trực carries a fixed
//! rating and short lists of activities it favours or rules out.

use crate::can_chi::EarthlyBranch;

/// One of the twelve day categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Truc {
    /// Kiến
    Kien,
    /// Trừ
    Tru,
    /// Mãn
    Man,
    /// Bình
    Binh,
    /// Định
    Dinh,
    /// Chấp
    Chap,
    /// Phá
    Pha,
    /// Nguy
    Nguy,
    /// Thành
    Thanh,
    /// Thu
    Thu,
    /// Khai
    Khai,
    /// Bế
    Be,
}

/// Overall rating of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DayRating {
    /// tốt
    Good,
    /// xấu
    Bad,
    /// trung bình
    Neutral,
}

impl DayRating {
    /// Vietnamese label.
    pub fn label(&self) -> &'static str {
        match self {
            DayRating::Good => "tốt",
            DayRating::Bad => "xấu",
            DayRating::Neutral => "trung bình",
        }
    }
}

impl std::fmt::Display for DayRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Trực of a day together with its rating and guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayQuality {
    /// The day's trực.
    pub truc: Truc,
    /// Rating attached to the trực.
    pub rate: DayRating,
    /// Activities the trực favours.
    pub recommended: &'static [&'static str],
    /// Activities the trực rules out.
    pub avoid: &'static [&'static str],
}

struct Entry {
    name: &'static str,
    rate: DayRating,
    recommended: &'static [&'static str],
    avoid: &'static [&'static str],
}

#[rustfmt::skip]
static TABLE: [Entry; 12] = [
    Entry { name: "Kiến", rate: DayRating::Good, recommended: &["Khởi công", "Mở hàng", "Xuất hành"], avoid: &["An táng", "Động thổ lớn"] },
    Entry { name: "Trừ", rate: DayRating::Neutral, recommended: &["Trừ phục", "Chữa bệnh", "Dọn dẹp"], avoid: &["Cưới hỏi", "Khai trương"] },
    Entry { name: "Mãn", rate: DayRating::Good, recommended: &["Cầu tài", "Cầu phúc", "Thăng chức"], avoid: &["Mai táng"] },
    Entry { name: "Bình", rate: DayRating::Neutral, recommended: &["Gặp gỡ", "Hòa giải"], avoid: &["Tranh chấp", "Kiện tụng"] },
    Entry { name: "Định", rate: DayRating::Good, recommended: &["Ký kết", "Cưới hỏi", "An cư"], avoid: &["Khởi kiện"] },
    Entry { name: "Chấp", rate: DayRating::Neutral, recommended: &["Nhập học", "Bắt đầu công việc"], avoid: &["Khai trương lớn"] },
    Entry { name: "Phá", rate: DayRating::Bad, recommended: &["Phá dỡ", "Dọn kho"], avoid: &["Hôn lễ", "Mở hàng"] },
    Entry { name: "Nguy", rate: DayRating::Bad, recommended: &["Cúng lễ", "Cầu an"], avoid: &["Xuất hành", "Khai trương"] },
    Entry { name: "Thành", rate: DayRating::Good, recommended: &["Hoàn thiện", "Khánh thành", "Cưới hỏi"], avoid: &["Khởi tố"] },
    Entry { name: "Thu", rate: DayRating::Neutral, recommended: &["Thu nợ", "Thu hoạch"], avoid: &["Khai trương", "Mở hàng"] },
    Entry { name: "Khai", rate: DayRating::Good, recommended: &["Khai trương", "Mở kho", "Xuất hành"], avoid: &["An táng"] },
    Entry { name: "Bế", rate: DayRating::Bad, recommended: &["Đóng sổ", "Kết thúc dự án"], avoid: &["Bắt đầu việc lớn"] },
];

impl Truc {
    /// All trực in rotation order.
    pub const ALL: [Truc; 12] = [
        Truc::Kien,
        Truc::Tru,
        Truc::Man,
        Truc::Binh,
        Truc::Dinh,
        Truc::Chap,
        Truc::Pha,
        Truc::Nguy,
        Truc::Thanh,
        Truc::Thu,
        Truc::Khai,
        Truc::Be,
    ];

    /// Position in the rotation (0 = Kiến).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Vietnamese name.
    pub fn name(&self) -> &'static str {
        TABLE[self.index()].name
    }

    /// Rating, recommended and avoided activities of this trực.
    pub fn quality(&self) -> DayQuality {
        let entry = &TABLE[self.index()];
        DayQuality {
            truc: *self,
            rate: entry.rate,
            recommended: entry.recommended,
            avoid: entry.avoid,
        }
    }
}

impl std::fmt::Display for Truc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of the trực for a day branch in lunar month `lunar_month`.
pub fn truc_index(day_branch: EarthlyBranch, lunar_month: u8) -> usize {
    let month_branch = (lunar_month as usize + 1) % 12;
    (day_branch.index() + 12 - month_branch) % 12
}

/// Trực of a day with branch `day_branch` in lunar month `lunar_month`.
pub fn truc(day_branch: EarthlyBranch, lunar_month: u8) -> Truc {
    Truc::ALL[truc_index(day_branch, lunar_month)]
}

/// Full quality record of a day with branch `day_branch` in `lunar_month`.
pub fn day_quality(day_branch: EarthlyBranch, lunar_month: u8) -> DayQuality {
    truc(day_branch, lunar_month).quality()
}
