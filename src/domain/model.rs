
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStats {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: Option<&'static str>,
    pub challenges: &'static [&'static str],
    pub results: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub link: &'static str,
    pub demo_link: Option<&'static str>,
    pub category: &'static str,
    pub stats: Option<ProjectStats>,
}

impl Project {
    /// 詳細頁優先顯示長描述
    pub fn detail_text(&self) -> &'static str {
        self.long_description.unwrap_or(self.description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceKind {
    Work,
    Education,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub id: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub kind: ExperienceKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechSkill {
    pub name: &'static str,
    pub level: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSkill {
    pub subject: &'static str,
    pub level: u8,
    pub full_mark: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub url: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub verify_link: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub url: &'static str,
    pub title: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resume {
    pub id: &'static str,
    pub title: &'static str,
    pub file: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section_id: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationalStat {
    pub label: &'static str,
    pub value: u32,
    pub suffix: &'static str,
}

/// 畫面上可以放進燈箱的項目
pub trait LightboxItem {
    /// 用來辨識目前開啟的圖片
    fn key(&self) -> &str;
    fn category(&self) -> &str;
    fn title(&self) -> &str;
}

impl LightboxItem for GalleryImage {
    fn key(&self) -> &str {
        self.url
    }

    fn category(&self) -> &str {
        self.category
    }

    fn title(&self) -> &str {
        self.title
    }
}

impl LightboxItem for Certification {
    fn key(&self) -> &str {
        self.url
    }

    // 證照以發證單位分類
    fn category(&self) -> &str {
        self.issuer
    }

    fn title(&self) -> &str {
        self.title
    }
}
