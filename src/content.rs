//! Static page content. Everything is built once at compile time and
//! borrowed for the lifetime of the page.

use crate::skills::{SkillCategory, SkillItem};

pub const OWNER_NAME: &str = "Sneha Sriram";
pub const OWNER_TITLE: &str = "Data Engineer";
pub const CONTACT_EMAIL: &str = "snehasriram.contact@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Dusk,
    Lagoon,
    Ember,
}

impl Backdrop {
    pub fn gradient_class(self) -> &'static str {
        match self {
            Backdrop::Dusk => "from-blue-600/30 via-purple-600/20 to-pink-600/30",
            Backdrop::Lagoon => "from-emerald-600/30 via-teal-600/20 to-cyan-600/30",
            Backdrop::Ember => "from-orange-600/30 via-amber-600/20 to-yellow-600/30",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub backdrop: Backdrop,
    pub tags: &'static [&'static str],
    pub metrics: &'static [Metric],
    pub demo_href: &'static str,
    pub source_href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A labelled link with an icon class, used for contact rows, socials and
/// the tech marquee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerStage {
    pub icon: &'static str,
    pub label: &'static str,
    pub gradient: &'static str,
}

pub const CAREER_PATH: &[CareerStage] = &[
    CareerStage {
        icon: "extra-code",
        label: "Software Engineer",
        gradient: "from-blue-500/20 to-blue-600/10",
    },
    CareerStage {
        icon: "extra-chart",
        label: "Data Analyst",
        gradient: "from-purple-500/20 to-purple-600/10",
    },
    CareerStage {
        icon: "extra-database",
        label: "Data Engineer",
        gradient: "from-lime/20 to-olive/10",
    },
];

pub const HERO_STATS: &[Stat] = &[
    Stat {
        value: "5+",
        label: "Years Experience",
    },
    Stat {
        value: "50+",
        label: "Projects Completed",
    },
    Stat {
        value: "99.9%",
        label: "Uptime Achieved",
    },
];

pub const SKILL_STATS: &[Stat] = &[
    Stat {
        value: "15+",
        label: "Technologies",
    },
    Stat {
        value: "5+",
        label: "Years Experience",
    },
    Stat {
        value: "50+",
        label: "Projects",
    },
];

pub const TECHNOLOGIES: &[LinkItem] = &[
    tech("devicon-amazonwebservices-plain", "AWS"),
    tech("devicon-postgresql-plain", "PostgreSQL"),
    tech("devicon-apachespark-original", "Apache Spark"),
    tech("devicon-python-plain", "Python"),
    tech("extra-layers", "Databricks"),
    tech("devicon-docker-plain", "Docker"),
    tech("devicon-apacheairflow-plain", "Airflow"),
    tech("devicon-git-plain", "Git"),
];

const fn tech(icon: &'static str, label: &'static str) -> LinkItem {
    LinkItem {
        icon,
        label,
        value: label,
        href: "#skills",
    }
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "extra-trending",
        title: "Data-Driven",
        description: "Every decision backed by insights and analytics",
    },
    Highlight {
        icon: "extra-bolt",
        title: "High Performance",
        description: "Optimized pipelines processing millions of records",
    },
    Highlight {
        icon: "extra-target",
        title: "Precision Focus",
        description: "Meticulous attention to data quality and accuracy",
    },
    Highlight {
        icon: "extra-award",
        title: "Best Practices",
        description: "Following industry standards and modern architectures",
    },
];

pub const EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry {
        role: "Data Engineer",
        organization: "General Mills",
        location: "Minneapolis, MN",
        period: "2024 - Present",
        description: "Leading data infrastructure initiatives, building real-time analytics pipelines processing 10M+ events daily. Architected cloud-native data platform on GCP reducing costs by 40%.",
        achievements: &[
            "Built and optimized 50+ Airflow (Composer) DAGs, reducing pipeline runtime and BigQuery query costs by ~30%",
            "Migrated legacy data warehouse to GCP, improving query performance by 5x",
            "Implemented data quality framework reducing bad data incidents by 90%",
            "Optimized BigQuery datasets and implemented delta-load mechanisms, reducing storage and processing costs by ~25%",
            "Adopted dbt for modular, testable data transformations with CI/CD integration, enhancing pipeline reliability",
            "Mentored peers on SQL, Python, dbt, and AI-assisted development tools like Copilot and Gemini",
        ],
        skills: &[
            "Python",
            "SQL",
            "BigQuery",
            "Airflow (Composer)",
            "dbt",
            "GCP",
            "Salesforce",
            "PostgreSQL",
            "Terraform",
            "Kubernetes",
            "Data Pipeline Optimization",
            "Monitoring & Observability",
        ],
    },
    TimelineEntry {
        role: "Data Analyst",
        organization: "General Mills",
        location: "Minneapolis, MN",
        period: "2023 - 2024",
        description: "Analyzed, transformed, and managed enterprise data to support reporting, dashboards, and analytics for cross-functional teams.",
        achievements: &[
            "Migrated 60+ operational tables from SAP/HANA, Oracle, and SFTP into GCP, creating enterprise-aligned data models",
            "Developed BigQuery models and optimized SQL queries to support Tableau and Power BI dashboards for stakeholders",
            "Automated data extraction workflows using Unix shell scripting and PowerShell, handling API rate limits and retries",
            "Validated and resolved data discrepancies across multiple sources, improving data accuracy and reliability",
            "Documented data lineage, ownership, and business definitions in Alation, supporting governance and audit readiness",
            "Converted legacy workflows to modern dbt models and integrated them into Airflow pipelines for scalable analytics",
        ],
        skills: &[
            "SQL",
            "BigQuery",
            "dbt",
            "Tableau",
            "Power BI",
            "Unix/Linux",
            "Shell Scripting",
            "Data Validation",
            "Data Modeling",
        ],
    },
    TimelineEntry {
        role: "Software Engineer",
        organization: "Cerner",
        location: "India",
        period: "2019 - 2021",
        description: "Built efficient PL/SQL procedures and Python/Java utilities to handle large-scale patient data.",
        achievements: &[
            "Developed and optimized ETL pipelines for patient record creation and management",
            "Implemented PL/SQL procedures, triggers, and complex joins to improve data processing efficiency",
            "Optimized database queries improving response time by 60%",
            "Mentored junior developers and conducted code reviews",
            "Automated repetitive code using Python and Java, reducing manual effort across projects",
            "Created and maintained database schemas using DDL/DML scripts with proper access controls",
        ],
        skills: &["Java", "SQL", "PL/SQL", "Oracle"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Real-Time Analytics Pipeline",
        subtitle: "Event Processing at Scale",
        description: "Built a high-throughput streaming pipeline processing 10M+ events daily. Uses Kafka for ingestion, Spark Streaming for processing, and Elasticsearch for real-time analytics.",
        backdrop: Backdrop::Dusk,
        tags: &["Apache Kafka", "Spark Streaming", "Elasticsearch", "AWS"],
        metrics: &[
            Metric {
                label: "Events/Day",
                value: "10M+",
            },
            Metric {
                label: "Latency",
                value: "<100ms",
            },
            Metric {
                label: "Uptime",
                value: "99.9%",
            },
        ],
        demo_href: "#",
        source_href: "#",
    },
    Project {
        title: "Cloud Data Warehouse Migration",
        subtitle: "Enterprise-Scale Transformation",
        description: "Led migration from on-premise data warehouse to Snowflake, reducing query costs by 60% and improving performance by 5x. Implemented dbt for data transformation.",
        backdrop: Backdrop::Lagoon,
        tags: &["Snowflake", "dbt", "Airflow", "Python"],
        metrics: &[
            Metric {
                label: "Cost Reduction",
                value: "60%",
            },
            Metric {
                label: "Performance",
                value: "5x",
            },
            Metric {
                label: "Tables Migrated",
                value: "500+",
            },
        ],
        demo_href: "#",
        source_href: "#",
    },
    Project {
        title: "ML Feature Store",
        subtitle: "Feature Management Platform",
        description: "Developed a feature store enabling data scientists to discover, share, and serve ML features. Reduced model training time and improved feature consistency across teams.",
        backdrop: Backdrop::Ember,
        tags: &["Python", "Redis", "PostgreSQL", "FastAPI"],
        metrics: &[
            Metric {
                label: "Features",
                value: "1000+",
            },
            Metric {
                label: "Teams",
                value: "5",
            },
            Metric {
                label: "Serving Latency",
                value: "<10ms",
            },
        ],
        demo_href: "#",
        source_href: "#",
    },
];

const fn skill(name: &'static str, category: SkillCategory, level: u8, icon: &'static str) -> SkillItem {
    SkillItem {
        name,
        category,
        level,
        icon,
    }
}

pub const SKILLS: &[SkillItem] = &[
    skill("Python", SkillCategory::Data, 95, "devicon-python-plain"),
    skill("SQL", SkillCategory::Data, 95, "extra-database"),
    skill("Apache Spark", SkillCategory::Data, 90, "devicon-apachespark-original"),
    skill("Kafka", SkillCategory::Data, 85, "devicon-apachekafka-original"),
    skill("Airflow", SkillCategory::Data, 88, "devicon-apacheairflow-plain"),
    skill("dbt", SkillCategory::Data, 85, "extra-layers"),
    skill("AWS", SkillCategory::Cloud, 90, "devicon-amazonwebservices-plain"),
    skill("Docker", SkillCategory::Cloud, 85, "devicon-docker-plain"),
    skill("Kubernetes", SkillCategory::Cloud, 80, "devicon-kubernetes-plain"),
    skill("Terraform", SkillCategory::Cloud, 82, "devicon-terraform-plain"),
    skill("Git", SkillCategory::Cloud, 92, "devicon-git-plain"),
    skill("CI/CD", SkillCategory::Cloud, 85, "extra-workflow"),
    skill("Snowflake", SkillCategory::Analytics, 88, "extra-database"),
    skill("Databricks", SkillCategory::Analytics, 85, "extra-cpu"),
    skill("Tableau", SkillCategory::Analytics, 80, "extra-chart"),
    skill("Pandas", SkillCategory::Analytics, 92, "devicon-pandas-plain"),
];

pub const CONTACT_CHANNELS: &[LinkItem] = &[
    LinkItem {
        icon: "extra-email",
        label: "Email",
        value: CONTACT_EMAIL,
        href: "mailto:snehasriram.contact@gmail.com",
    },
    LinkItem {
        icon: "extra-phone",
        label: "Phone",
        value: "+1(443) 593-4635",
        href: "tel:+14435934635",
    },
    LinkItem {
        icon: "extra-location",
        label: "Location",
        value: "Maryland, US",
        href: "https://maps.app.goo.gl/tCju9tsDZWD66kVN7",
    },
];

pub const SOCIAL_LINKS: &[LinkItem] = &[
    LinkItem {
        icon: "devicon-linkedin-plain",
        label: "LinkedIn",
        value: "/in/snehavarsha",
        href: "https://www.linkedin.com/in/snehavarsha/",
    },
    LinkItem {
        icon: "devicon-github-plain",
        label: "GitHub",
        value: "/snehassv",
        href: "https://github.com/snehassv",
    },
    LinkItem {
        icon: "devicon-twitter-original",
        label: "Twitter",
        value: "@GuptaHarini",
        href: "https://x.com/GuptaHarini",
    },
];

pub const SERVICES: &[&str] = &[
    "Data Engineering",
    "Cloud Architecture",
    "Analytics",
    "Consulting",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_are_percentages() {
        assert_eq!(SKILLS.len(), 16);
        for s in SKILLS {
            assert!(s.level <= 100, "{} has level {}", s.name, s.level);
        }
    }

    #[test]
    fn test_skill_names_unique() {
        let mut names = SKILLS.iter().map(|s| s.name).collect::<Vec<_>>();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SKILLS.len());
    }

    #[test]
    fn test_timeline_entries_complete() {
        assert_eq!(EXPERIENCE.len(), 3);
        for entry in EXPERIENCE {
            assert!(!entry.role.is_empty());
            assert!(!entry.period.is_empty());
            assert!(!entry.achievements.is_empty());
            assert!(!entry.skills.is_empty());
        }
    }

    #[test]
    fn test_projects_have_three_metrics() {
        assert!(PROJECTS.iter().all(|p| p.metrics.len() == 3));
    }
}
