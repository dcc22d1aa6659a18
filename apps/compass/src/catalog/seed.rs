//! Built-in role catalog: five roles, each with a three-phase roadmap.

use crate::catalog::CatalogEntry;
use crate::models::role::{
    DemandLevel, Difficulty, ExperienceRequirement, GrowthRate, RoleDefinition,
};
use crate::models::split_delimited;
use crate::roadmap::{Roadmap, RoadmapPhase, RoadmapTopic};

struct SeedRole {
    role_name: &'static str,
    category: &'static str,
    primary_specialization: &'static str,
    related_specializations: &'static str,
    description: &'static str,
    salary_range: &'static str,
    avg_salary: u32,
    demand_level: DemandLevel,
    growth_rate: GrowthRate,
    difficulty: Difficulty,
    entry_friendly: bool,
    remote_friendly: bool,
    experience_required: ExperienceRequirement,
    tech_stack: &'static str,
    related_internships: &'static str,
    transferable_skills: bool,
    specialization_heavy: bool,
    roadmap: &'static [SeedPhase],
}

struct SeedPhase {
    name: &'static str,
    description: &'static str,
    duration: &'static str,
    topics: &'static [(&'static str, &'static str)],
}

const SEED_ROLES: &[SeedRole] = &[
    SeedRole {
        role_name: "Software Engineer",
        category: "Software Engineering",
        primary_specialization: "Software Engineering",
        related_specializations: "CSE,IT",
        description: "Design, develop, and maintain software applications",
        salary_range: "60-110",
        avg_salary: 85_000,
        demand_level: DemandLevel::VeryHigh,
        growth_rate: GrowthRate::Steady,
        difficulty: Difficulty::Intermediate,
        entry_friendly: true,
        remote_friendly: true,
        experience_required: ExperienceRequirement::SomePreferred,
        tech_stack: "Java,Python,Git,SQL,Algorithms",
        related_internships: "Software Developer Intern,Engineering Intern",
        transferable_skills: true,
        specialization_heavy: false,
        roadmap: &[
            SeedPhase {
                name: "Foundation",
                description: "Master the basics of programming and computer science",
                duration: "2-3 months",
                topics: &[
                    ("CS Fundamentals", "Data Structures, Algorithms, OS, DBMS"),
                    ("Programming Basics", "Python/Java syntax, OOP concepts"),
                    ("Version Control", "Git, GitHub basics"),
                ],
            },
            SeedPhase {
                name: "Development Skills",
                description: "Build real-world applications",
                duration: "3-4 months",
                topics: &[
                    ("Web Basics", "HTML, CSS, JavaScript"),
                    ("Backend Dev", "APIs, Databases, Frameworks (Flask/Django/Spring)"),
                    ("System Design", "Basic architecture, Scalability"),
                ],
            },
            SeedPhase {
                name: "Advanced & Deployment",
                description: "Go to production",
                duration: "2-3 months",
                topics: &[
                    ("Testing", "Unit tests, Integration tests"),
                    ("Deployment", "Docker, CI/CD, Cloud basics"),
                    ("Advanced Topics", "Microservices, Security"),
                ],
            },
        ],
    },
    SeedRole {
        role_name: "Data Scientist",
        category: "AI/ML",
        primary_specialization: "Data Science",
        related_specializations: "AI-ML,Data Science,CSE",
        description: "Analyze data and build ML models to extract insights",
        salary_range: "75-135",
        avg_salary: 105_000,
        demand_level: DemandLevel::VeryHigh,
        growth_rate: GrowthRate::Fast,
        difficulty: Difficulty::Intermediate,
        entry_friendly: true,
        remote_friendly: true,
        experience_required: ExperienceRequirement::Preferred,
        tech_stack: "Python,Statistics,Machine Learning,SQL,Data Visualization",
        related_internships: "Data Science Intern,Analytics Intern",
        transferable_skills: true,
        specialization_heavy: true,
        roadmap: &[
            SeedPhase {
                name: "Data Foundation",
                description: "Math and Programming basics",
                duration: "3 months",
                topics: &[
                    ("Mathematics", "Linear Algebra, Calculus, Statistics"),
                    ("Python for Data", "NumPy, Pandas, Matplotlib"),
                    ("SQL", "Database querying and management"),
                ],
            },
            SeedPhase {
                name: "Machine Learning",
                description: "Core ML algorithms and techniques",
                duration: "4 months",
                topics: &[
                    ("Supervised Learning", "Regression, Classification"),
                    ("Unsupervised Learning", "Clustering, PCA"),
                    ("Model Evaluation", "Metrics, Validation strategies"),
                ],
            },
            SeedPhase {
                name: "Specialization",
                description: "Advanced AI/ML topics",
                duration: "3-4 months",
                topics: &[
                    ("Deep Learning", "Neural Networks, TensorFlow/PyTorch"),
                    ("NLP/CV", "Text or Image processing specific skills"),
                    ("Deployment", "Serving models, MLOps basics"),
                ],
            },
        ],
    },
    SeedRole {
        role_name: "Cloud Solutions Architect",
        category: "Cloud Computing",
        primary_specialization: "Cloud Computing",
        related_specializations: "Cloud Computing,CSE,IT",
        description: "Design cloud infrastructure and solutions",
        salary_range: "90-150",
        avg_salary: 120_000,
        demand_level: DemandLevel::VeryHigh,
        growth_rate: GrowthRate::Fast,
        difficulty: Difficulty::Advanced,
        entry_friendly: false,
        remote_friendly: true,
        experience_required: ExperienceRequirement::Required,
        tech_stack: "AWS,Azure,GCP,Architecture,Networking",
        related_internships: "Cloud Intern,Solutions Architect Intern",
        transferable_skills: true,
        specialization_heavy: true,
        roadmap: &[
            SeedPhase {
                name: "Cloud Basics",
                description: "Understanding cloud concepts",
                duration: "2 months",
                topics: &[
                    ("Networking", "DNS, TCP/IP, HTTP, VPN"),
                    ("Virtualization", "VMs, Containers, Hypervisors"),
                    ("Linux Basics", "Shell scripting, File systems"),
                ],
            },
            SeedPhase {
                name: "Cloud Provider Skills",
                description: "Mastering AWS/Azure/GCP",
                duration: "4 months",
                topics: &[
                    ("Core Services", "Compute (EC2), Storage (S3), Database (RDS)"),
                    ("IAM & Security", "Permissions, Roles, Best practices"),
                    ("Serverless", "Lambda, Cloud Functions"),
                ],
            },
            SeedPhase {
                name: "Architecture",
                description: "Designing scalable systems",
                duration: "3 months",
                topics: &[
                    ("High Availability", "Load balancing, Auto-scaling"),
                    ("Disaster Recovery", "Backup strategies, Multi-region"),
                    ("Cost Optimization", "Budgeting, monitoring"),
                ],
            },
        ],
    },
    SeedRole {
        role_name: "Cybersecurity Analyst",
        category: "Cybersecurity",
        primary_specialization: "Cyber Security",
        related_specializations: "Cyber Security,CSE,IT",
        description: "Monitor and protect systems from cyber threats",
        salary_range: "65-110",
        avg_salary: 87_500,
        demand_level: DemandLevel::VeryHigh,
        growth_rate: GrowthRate::VeryFast,
        difficulty: Difficulty::Intermediate,
        entry_friendly: true,
        remote_friendly: false,
        experience_required: ExperienceRequirement::SomePreferred,
        tech_stack: "Security,Networking,SIEM,Incident Response",
        related_internships: "Security Analyst Intern,SOC Intern",
        transferable_skills: true,
        specialization_heavy: false,
        roadmap: &[
            SeedPhase {
                name: "Security Fundamentals",
                description: "Core security concepts",
                duration: "2 months",
                topics: &[
                    ("Networking", "OSI Model, Ports, Protocols"),
                    ("OS Security", "Windows/Linux hardening"),
                    ("Threats & Attacks", "Malware, Phishing, Social Engineering"),
                ],
            },
            SeedPhase {
                name: "Defensive Security",
                description: "Protecting systems",
                duration: "3 months",
                topics: &[
                    ("SIEM Tools", "Splunk, ELK Stack"),
                    ("Incident Response", "Detection, Analysis, Containment"),
                    ("Vulnerability Mgmt", "Scanning, Patching"),
                ],
            },
            SeedPhase {
                name: "Advanced Analysis",
                description: "Deep dive into security",
                duration: "3 months",
                topics: &[
                    ("Forensics", "Digital evidence handling"),
                    ("Threat Hunting", "Proactive search for threats"),
                    ("Compliance", "GDPR, HIPAA, NIST standards"),
                ],
            },
        ],
    },
    SeedRole {
        role_name: "Network Engineer",
        category: "Computer Networks",
        primary_specialization: "Computer Networks",
        related_specializations: "Computer Networks,CSE,IT",
        description: "Design, implement, and maintain networks",
        salary_range: "65-110",
        avg_salary: 87_500,
        demand_level: DemandLevel::High,
        growth_rate: GrowthRate::Steady,
        difficulty: Difficulty::Intermediate,
        entry_friendly: true,
        remote_friendly: false,
        experience_required: ExperienceRequirement::SomePreferred,
        tech_stack: "Networking,Cisco,Routing,Switching,TCP/IP",
        related_internships: "Network Engineer Intern,IT Intern",
        transferable_skills: true,
        specialization_heavy: false,
        roadmap: &[
            SeedPhase {
                name: "Network Basics",
                description: "Understanding how networks work",
                duration: "2 months",
                topics: &[
                    ("Protocols", "TCP/IP, UDP, ICMP, DNS, DHCP"),
                    ("Hardware", "Routers, Switches, Cables"),
                    ("Subnetting", "IP addressing, CIDR"),
                ],
            },
            SeedPhase {
                name: "Routing & Switching",
                description: "Configuring network devices",
                duration: "3 months",
                topics: &[
                    ("Routing Protocols", "OSPF, EIGRP, BGP"),
                    ("VLANs", "Segmentation, Trunking"),
                    ("Network Security", "ACLs, Firewalls, VPNs"),
                ],
            },
            SeedPhase {
                name: "Advanced Networking",
                description: "Enterprise scale networking",
                duration: "3 months",
                topics: &[
                    ("SD-WAN", "Software Defined Networking"),
                    ("Automation", "Python for Network Engineers, Ansible"),
                    ("Cloud Networking", "VPCs, Direct Connect"),
                ],
            },
        ],
    },
];

/// Builds catalog entries from the built-in seed. Ids are not yet assigned.
pub(crate) fn seed_entries() -> Vec<CatalogEntry> {
    SEED_ROLES.iter().map(build_entry).collect()
}

fn build_entry(seed: &SeedRole) -> CatalogEntry {
    let role = RoleDefinition {
        role_name: seed.role_name.to_string(),
        category: seed.category.to_string(),
        primary_specialization: seed.primary_specialization.to_string(),
        related_specializations: split_delimited(seed.related_specializations),
        tech_stack: split_delimited(seed.tech_stack),
        demand_level: seed.demand_level,
        growth_rate: seed.growth_rate,
        entry_friendly: seed.entry_friendly,
        remote_friendly: seed.remote_friendly,
        experience_required: seed.experience_required,
        difficulty: seed.difficulty,
        description: seed.description.to_string(),
        salary_range: seed.salary_range.to_string(),
        avg_salary: seed.avg_salary,
        related_internships: split_delimited(seed.related_internships),
        transferable_skills: seed.transferable_skills,
        specialization_heavy: seed.specialization_heavy,
    };

    let phases = seed
        .roadmap
        .iter()
        .map(|phase| RoadmapPhase {
            phase_number: 0,
            phase_name: phase.name.to_string(),
            description: phase.description.to_string(),
            estimated_duration: phase.duration.to_string(),
            topics: phase
                .topics
                .iter()
                .map(|(name, description)| RoadmapTopic {
                    id: 0,
                    topic_name: name.to_string(),
                    topic_order: 0,
                    description: description.to_string(),
                    resource_link: None,
                })
                .collect(),
        })
        .collect();

    CatalogEntry {
        role,
        roadmap: Roadmap::new(phases),
    }
}
