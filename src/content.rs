//! Hard-coded site content. Everything here is read-only for the lifetime of the page.

use crate::domain::model::{
    Certification, DomainSkill, ExperienceEntry, ExperienceKind, GalleryImage, NavItem,
    OperationalStat, Project, ProjectStats, Resume, TechSkill,
};

pub const OWNER_NAME: &str = "Shyamsundar Dharwad";
pub const CONTACT_EMAIL: &str = "shyamsundardharwad@gmail.com";
pub const CONTACT_PHONE: &str = "+91 789 247 0215";
pub const CONTACT_LOCATION: &str = "Mundgod, Karnataka, India";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "About", section_id: "about" },
    NavItem { label: "Expertise", section_id: "expertise" },
    NavItem { label: "Experience", section_id: "experience" },
    NavItem { label: "Projects", section_id: "projects" },
    NavItem { label: "Certifications", section_id: "certifications" },
    NavItem { label: "Gallery", section_id: "gallery" },
    NavItem { label: "Resumes", section_id: "resumes" },
    NavItem { label: "Contact", section_id: "contact" },
];

/// 導覽列對應的區塊 id，依頁面順序
pub fn section_ids() -> Vec<&'static str> {
    NAV_ITEMS.iter().map(|item| item.section_id).collect()
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "p1",
        title: "Maintenance Analytics Dashboard",
        description: "Industrial IoT dashboard for tracking machine downtime, RCFA, and predictive maintenance schedules. Directly leverages manufacturing domain expertise.",
        long_description: None,
        challenges: &[],
        results: &[],
        tech: &["Python", "Streamlit", "Pandas", "Plotly"],
        link: "https://github.com/Shyams728/maintanance_analytics_dashboard",
        demo_link: Some("https://shyamsmaintananceanalyticsdashboard.streamlit.app/"),
        category: "Analytics",
        stats: Some(ProjectStats { label: "Utility", value: "High" }),
    },
    Project {
        id: "p3",
        title: "PhonePe Data Visualization",
        description: "Geo-spatial analysis of digital transaction data across India using PhonePe pulse data.",
        long_description: None,
        challenges: &[],
        results: &[],
        tech: &["Python", "GeoPandas", "Streamlit", "Plotly"],
        link: "https://github.com/Shyams728/phonepe_data_visualisation",
        demo_link: Some("https://shyamsphonepedatavisualisation.streamlit.app/"),
        category: "Analytics",
        stats: None,
    },
    Project {
        id: "p4",
        title: "RedBus Data Scraping",
        description: "Automated pipeline to scrape bus routes, pricing, and availability to analyze transport trends.",
        long_description: None,
        challenges: &[],
        results: &[],
        tech: &["Selenium", "Python", "SQL", "Automation"],
        link: "https://github.com/Shyams728/redbus-data-scraping",
        demo_link: None,
        category: "Web Scraping",
        stats: None,
    },
    Project {
        id: "p7",
        title: "Machine Learning Projects",
        description: "A comprehensive collection of various ML algorithms and experiments, demonstrating breadth of knowledge in predictive modeling.",
        long_description: None,
        challenges: &[],
        results: &[],
        tech: &["Python", "Scikit-Learn", "Jupyter", "Algorithms"],
        link: "https://github.com/Shyams728/machine_learning_projects",
        demo_link: None,
        category: "Machine Learning",
        stats: None,
    },
    Project {
        id: "p2",
        title: "Kannada LMV (LLM)",
        description: "A specialized Large Language Model fine-tuned for the Kannada language, enabling vernacular NLP applications.",
        long_description: None,
        challenges: &[],
        results: &[],
        tech: &["PyTorch", "Transformers", "NLP", "HuggingFace"],
        link: "https://github.com/Shyams728/kannada_lmv7",
        demo_link: None,
        category: "Machine Learning",
        stats: None,
    },
    Project {
        id: "p6",
        title: "Kannada MNIST",
        description: "Computer Vision model trained to recognize handwritten Kannada numerals, similar to the classic MNIST dataset.",
        long_description: None,
        challenges: &[],
        results: &[],
        tech: &["Scikit-Learn", "CNN", "Deep Learning"],
        link: "https://github.com/Shyams728/kannada_MNIST",
        demo_link: None,
        category: "Machine Learning",
        stats: None,
    },
    Project {
        id: "p5",
        title: "BizCard OCR",
        description: "Optical Character Recognition application to digitize business cards and store contact info in a database.",
        long_description: None,
        challenges: &[],
        results: &[],
        tech: &["EasyOCR", "OpenCV", "SQL", "Streamlit"],
        link: "https://github.com/Shyams728/bizcard_ocr_project",
        demo_link: Some("https://shyams-ocr-project.streamlit.app/"),
        category: "OCR",
        stats: None,
    },
    Project {
        id: "p8",
        title: "YouTube Data Dashboard",
        description: "End-to-end data pipeline to extract, store, and analyze YouTube channel data. Features NLP for comment sentiment and interactive Plotly visualizations.",
        long_description: None,
        challenges: &[],
        results: &[],
        tech: &["Python", "Streamlit", "SQL", "MongoDB", "YouTube API", "NLP"],
        link: "https://github.com/Shyams728/youtube_project",
        demo_link: Some("https://shyams-youtube-dashboard-project.streamlit.app/"),
        category: "Analytics",
        stats: None,
    },
    Project {
        id: "p9",
        title: "Clothing Customer Behavior Analytics",
        description: "Advanced Power BI dashboard for retail analytics, featuring RFM segmentation, cohort retention analysis, and executive KPI tracking.",
        long_description: None,
        challenges: &[],
        results: &[],
        tech: &["Power BI", "DAX", "Power Query", "Data Modeling"],
        link: "https://github.com/Shyams728/clothing_customer_behavior_analytics",
        demo_link: None,
        category: "Analytics",
        stats: None,
    },
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        id: "exp1",
        role: "Data Science Upskilling",
        organization: "IIT Madras (GUVI) & IIM Madras",
        period: "2023 - Present",
        location: "Remote / Hybrid",
        description: "Specialized training in predictive modeling and big data analytics.",
        achievements: &[
            "Advanced Professional Program in Master Data Science",
            "Advanced Python for Data Science certification",
            "Applied statistical models to manufacturing maintenance datasets",
        ],
        kind: ExperienceKind::Education,
    },
    ExperienceEntry {
        id: "exp2",
        role: "Service Engineer",
        organization: "Larsen & Toubro (Construction & Mining)",
        period: "Sep 2012 - Mar 2017",
        location: "Kanchipuram / Chennai",
        description: "Managed end-to-end service lifecycle for Heavy Earth Moving Machinery (HEMM).",
        achievements: &[
            "Analyzed breakdown data to improve machine availability to 20+ hours/day",
            "Used SAP (HANA) for service orders, spares tracking, and cost estimation",
            "Site In-Charge for large irrigation projects (Telangana)",
            "Received CEO Award for operational excellence",
        ],
        kind: ExperienceKind::Work,
    },
    ExperienceEntry {
        id: "exp3",
        role: "Diploma in Electrical & Electronics",
        organization: "Technical Board",
        period: "2010 - 2012",
        location: "Karnataka",
        description: "Foundation in electrical systems and electronics.",
        achievements: &[],
        kind: ExperienceKind::Education,
    },
];

pub const TECH_SKILLS: &[TechSkill] = &[
    TechSkill { name: "Python", level: 90, color: "#38bdf8" },
    TechSkill { name: "SQL/NoSQL", level: 80, color: "#818cf8" },
    TechSkill { name: "Power BI / Tableau", level: 85, color: "#34d399" },
    TechSkill { name: "Pandas", level: 95, color: "#f472b6" },
    TechSkill { name: "Machine Learning", level: 75, color: "#fbbf24" },
];

pub const DOMAIN_SKILLS: &[DomainSkill] = &[
    DomainSkill { subject: "Maintenance", level: 95, full_mark: 100 },
    DomainSkill { subject: "SAP/ERP", level: 85, full_mark: 100 },
    DomainSkill { subject: "RCFA", level: 90, full_mark: 100 },
    DomainSkill { subject: "Logistics", level: 75, full_mark: 100 },
    DomainSkill { subject: "Cost Control", level: 80, full_mark: 100 },
    DomainSkill { subject: "Safety", level: 85, full_mark: 100 },
];

pub const TECH_MARQUEE: &[&str] = &[
    "Python", "Pandas", "NumPy", "Scikit-Learn", "PyTorch", "TensorFlow", "Streamlit", "SQL",
    "MongoDB", "Power BI", "Tableau", "Git", "SAP HANA", "Excel/VBA",
];

pub const RESUMES: &[Resume] = &[
    Resume {
        id: "r1",
        title: "Data Science Resume",
        file: "docs/data science shyam resume.pdf",
        description: "Focused on ML, Python, and Predictive Analytics.",
    },
    Resume {
        id: "r2",
        title: "SAP & Operations Resume",
        file: "docs/sap shyam resume.pdf",
        description: "Highlighting 5+ years of industrial field experience & SAP.",
    },
    Resume {
        id: "r3",
        title: "HEMM Resume",
        file: "docs/shyam cement factory resume.pdf",
        description: "Specialized for Heavy Earth Moving Machinery & Cement Plant Operations.",
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        url: "photos/HCL GUVI Certification - 4N10712pv416Cz8m30.png",
        title: "Data Science Certification",
        issuer: "GUVI (IIT Madras)",
        verify_link: "https://www.guvi.in/verify-certificate?id=4N10712pv416Cz8m30",
    },
    Certification {
        url: "photos/Advanced Diploma in Python Programming .png",
        title: "Advanced Diploma in Python Programming",
        issuer: "Alison",
        verify_link: "https://alison.com/certification/check/4a40c55c78",
    },
    Certification {
        url: "photos/Diploma in Machine Learning with Python.png",
        title: "Diploma in Machine Learning with Python",
        issuer: "Alison",
        verify_link: "https://alison.com/certification/check/16010cd08f",
    },
    Certification {
        url: "photos/Python for Data Science From the Basics to Advanced.png",
        title: "Python for Data Science",
        issuer: "Alison",
        verify_link: "https://alison.com/certification/check/01b737a2f1",
    },
    Certification {
        url: "photos/Master the Pandas Library in Python Programming.png",
        title: "Mastering Pandas Library",
        issuer: "Alison",
        verify_link: "https://alison.com/certification/check/eaaf78d09b",
    },
    Certification {
        url: "photos/Diploma in Cognitive Behavioural Therapy.png",
        title: "Diploma in Cognitive Behavioural Therapy",
        issuer: "Alison",
        verify_link: "https://alison.com/certification/check/f4ff597b9a",
    },
    Certification {
        url: "photos/Mindful Meditation.png",
        title: "Mindful Meditation",
        issuer: "Alison",
        verify_link: "https://alison.com/certification/check/e85a44bdee",
    },
    Certification {
        url: "photos/Depression Treatment Therapies and Triggers.png",
        title: "Depression: Treatment & Therapies",
        issuer: "Alison",
        verify_link: "https://alison.com/certification/check/e2c5291f71",
    },
];

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage {
        url: "photos/award from CEO.jpg",
        title: "CEO Award for Excellence",
        category: "Achievement",
    },
    GalleryImage {
        url: "photos/national safety day photo.jpg",
        title: "National Safety Day",
        category: "Site",
    },
    GalleryImage {
        url: "photos/site photo.jpg",
        title: "On-site Operations",
        category: "Site",
    },
    GalleryImage {
        url: "photos/site photo with Colleague .jpg",
        title: "Collaborative Engineering",
        category: "Team",
    },
    GalleryImage {
        url: "photos/training period photo with batchmates.JPG",
        title: "L&T Training Period",
        category: "Training",
    },
];

pub const OPERATIONAL_STATS: &[OperationalStat] = &[
    OperationalStat { label: "OPTIMIZATION_UPLIFT", value: 18, suffix: "%" },
    OperationalStat { label: "DEPLOYED_PROJECTS", value: 45, suffix: "+" },
    OperationalStat { label: "PREDICTIVE_ACCURACY", value: 96, suffix: "%" },
    OperationalStat { label: "SAFETY_COMPLIANCE", value: 100, suffix: "%" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let project_ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(project_ids.len(), PROJECTS.len());

        let sections: HashSet<_> = section_ids().into_iter().collect();
        assert_eq!(sections.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(TECH_SKILLS.iter().all(|s| s.level <= 100));
        assert!(DOMAIN_SKILLS.iter().all(|s| s.level <= s.full_mark));
    }

    #[test]
    fn test_find_project() {
        assert_eq!(find_project("p5").map(|p| p.title), Some("BizCard OCR"));
        assert!(find_project("missing").is_none());
    }
}
