//! Display data for the page sections.

pub const SITE_NAME: &str = "DataViz";
pub const OWNER_NAME: &str = "Praveen Kumar Nagata";
pub const TAGLINE: &str = "Turning Data into Decisions";

pub struct TimelineItem {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const TIMELINE: &[TimelineItem] = &[
    TimelineItem {
        year: "2019",
        title: "SQL Mastery",
        description: "Database querying, data transformation, and advanced joins",
        icon: "🗄️",
    },
    TimelineItem {
        year: "2020",
        title: "Excel/Spreadsheets",
        description: "Advanced formulas, pivot tables, and data modeling",
        icon: "📑",
    },
    TimelineItem {
        year: "2021",
        title: "Python for Data",
        description: "Data analysis with pandas, numpy, and matplotlib",
        icon: "📊",
    },
    TimelineItem {
        year: "2022",
        title: "Tableau",
        description: "Dynamic dashboards and interactive visualizations",
        icon: "🥧",
    },
    TimelineItem {
        year: "2023",
        title: "Power BI",
        description: "Business intelligence dashboards and DAX mastery",
        icon: "📈",
    },
];

pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 to 100.
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub badge_class: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Data Manipulation",
        description: "Tools and languages for querying, cleaning, and transforming data",
        icon: "🗄️",
        badge_class: "skill-badge-data",
        skills: &[
            Skill { name: "SQL", level: 95 },
            Skill { name: "Excel", level: 90 },
            Skill { name: "Python", level: 85 },
            Skill { name: "R", level: 75 },
            Skill { name: "ETL Pipelines", level: 80 },
        ],
    },
    SkillCategory {
        title: "Visualization",
        description: "Creating impactful charts, dashboards, and interactive reports",
        icon: "🥧",
        badge_class: "skill-badge-viz",
        skills: &[
            Skill { name: "Tableau", level: 90 },
            Skill { name: "Power BI", level: 85 },
            Skill { name: "D3.js", level: 70 },
            Skill { name: "Looker Studio", level: 80 },
            Skill { name: "Data Storytelling", level: 95 },
        ],
    },
    SkillCategory {
        title: "Tools & Platforms",
        description: "Software and services for data storage, processing, and analysis",
        icon: "🛠️",
        badge_class: "skill-badge-tool",
        skills: &[
            Skill { name: "BigQuery", level: 85 },
            Skill { name: "Snowflake", level: 80 },
            Skill { name: "Alteryx", level: 75 },
            Skill { name: "Git", level: 80 },
            Skill { name: "Azure", level: 70 },
        ],
    },
];

pub const ALL_CATEGORY: &str = "all";

pub struct ProjectCategory {
    pub id: &'static str,
    pub name: &'static str,
}

pub const PROJECT_CATEGORIES: &[ProjectCategory] = &[
    ProjectCategory {
        id: ALL_CATEGORY,
        name: "All Projects",
    },
    ProjectCategory {
        id: "dashboard",
        name: "Dashboards",
    },
    ProjectCategory {
        id: "analysis",
        name: "Analysis",
    },
    ProjectCategory {
        id: "etl",
        name: "ETL",
    },
];

#[derive(Debug)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub categories: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub icon: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Sales Performance Dashboard",
        description: "Interactive dashboard with real-time KPI tracking, sales forecasting, and regional performance analysis.",
        image: "https://via.placeholder.com/600x400/0ea5e9/ffffff?text=Sales+Dashboard",
        categories: &["dashboard"],
        tags: &["Tableau", "SQL", "Sales Analytics"],
        icon: "📊",
    },
    Project {
        id: 2,
        title: "Customer Segmentation Analysis",
        description: "K-means clustering analysis to identify high-value customer segments and behavioral patterns.",
        image: "https://via.placeholder.com/600x400/8b5cf6/ffffff?text=Customer+Segmentation",
        categories: &["analysis"],
        tags: &["Python", "ML", "Clustering"],
        icon: "🥧",
    },
    Project {
        id: 3,
        title: "Automated ETL Pipeline",
        description: "Data integration system for merging CRM, ERP, and marketing data into a unified warehouse.",
        image: "https://via.placeholder.com/600x400/22c55e/ffffff?text=ETL+Pipeline",
        categories: &["etl"],
        tags: &["Python", "Airflow", "BigQuery"],
        icon: "🧮",
    },
    Project {
        id: 4,
        title: "Financial Performance Analytics",
        description: "Comprehensive financial dashboard with P&L analysis, budget variance, and forecasting.",
        image: "https://via.placeholder.com/600x400/f97316/ffffff?text=Financial+Analytics",
        categories: &["dashboard", "analysis"],
        tags: &["Power BI", "DAX", "Finance"],
        icon: "📊",
    },
    Project {
        id: 5,
        title: "Marketing Attribution Model",
        description: "Multi-touch attribution model to analyze campaign effectiveness and ROI across channels.",
        image: "https://via.placeholder.com/600x400/ec4899/ffffff?text=Marketing+Attribution",
        categories: &["analysis"],
        tags: &["R", "Marketing", "Analytics"],
        icon: "🥧",
    },
    Project {
        id: 6,
        title: "Supply Chain Optimization",
        description: "End-to-end supply chain analytics with inventory optimization and demand forecasting.",
        image: "https://via.placeholder.com/600x400/06b6d4/ffffff?text=Supply+Chain",
        categories: &["dashboard", "etl"],
        tags: &["Tableau", "Python", "Forecasting"],
        icon: "🧮",
    },
];

/// Projects shown under a category tab. Unknown categories match nothing.
pub fn filter_projects(category: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category == ALL_CATEGORY || p.categories.iter().any(|c| *c == category))
        .collect()
}

#[derive(Debug)]
pub struct Chart {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub embed_url: &'static str,
    pub filters: &'static [&'static str],
}

pub const CHARTS: &[Chart] = &[
    Chart {
        id: "sales",
        title: "Sales Performance",
        description: "Interactive sales performance dashboard by region and product category",
        icon: "📊",
        embed_url: "https://via.placeholder.com/1200x600/0ea5e9/ffffff?text=Interactive+Sales+Dashboard",
        filters: &["Region", "Time Period", "Product Category"],
    },
    Chart {
        id: "customer",
        title: "Customer Segments",
        description: "Customer segmentation analysis with interactive filtering",
        icon: "🥧",
        embed_url: "https://via.placeholder.com/1200x600/8b5cf6/ffffff?text=Customer+Segmentation+Dashboard",
        filters: &["Age Group", "Purchase Frequency", "Lifetime Value"],
    },
    Chart {
        id: "forecast",
        title: "Revenue Forecast",
        description: "Forecasting model with adjustable parameters",
        icon: "📈",
        embed_url: "https://via.placeholder.com/1200x600/22c55e/ffffff?text=Revenue+Forecast+Model",
        filters: &["Scenario", "Growth Rate", "Time Horizon"],
    },
];

/// The chart for a playground tab, falling back to the first chart.
pub fn chart_by_id(id: &str) -> &'static Chart {
    CHARTS.iter().find(|c| c.id == id).unwrap_or(&CHARTS[0])
}

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub hover_class: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/",
        icon: "devicon-github-plain",
        hover_class: "hover:bg-gray-800 hover:text-white",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/",
        icon: "devicon-linkedin-plain",
        hover_class: "hover:bg-blue-600 hover:text-white",
    },
    SocialLink {
        name: "Email",
        url: "mailto:hello@example.com",
        icon: "extra-email",
        hover_class: "hover:bg-red-500 hover:text-white",
    },
    SocialLink {
        name: "Tableau Public",
        url: "https://public.tableau.com/",
        icon: "extra-link",
        hover_class: "hover:bg-blue-500 hover:text-white",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_filter_all() {
        assert_eq!(ids(&filter_projects(ALL_CATEGORY)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filter_by_category() {
        assert_eq!(ids(&filter_projects("dashboard")), vec![1, 4, 6]);
        assert_eq!(ids(&filter_projects("analysis")), vec![2, 4, 5]);
        assert_eq!(ids(&filter_projects("etl")), vec![3, 6]);
        assert!(filter_projects("mobile").is_empty());
    }

    #[test]
    fn test_every_project_category_is_a_tab() {
        for project in PROJECTS {
            for category in project.categories {
                assert!(
                    PROJECT_CATEGORIES.iter().any(|c| c.id == *category),
                    "{} has untabbed category {category}",
                    project.title
                );
            }
        }
    }

    #[test]
    fn test_chart_fallback() {
        assert_eq!(chart_by_id("forecast").title, "Revenue Forecast");
        assert_eq!(chart_by_id("nope").id, "sales");
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILL_CATEGORIES
            .iter()
            .flat_map(|c| c.skills)
            .all(|s| s.level <= 100));
    }
}
