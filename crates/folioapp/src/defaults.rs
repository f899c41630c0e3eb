//! The seeded portfolio content.
//!
//! This is what a fresh install shows and what every stored document is merged
//! over on load, so any top-level key added here reaches old stored documents.

use crate::model::{
    Achievement, Certification, PersonalInfo, ProfileDocument, Project, Record, Skill,
    SkillCategory, SocialLink,
};
use chrono::Utc;

pub const DEFAULT_STORAGE_KEY: &str = "portfolio-profile-data";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(id: &str, name: &str, category: SkillCategory, proficiency: u8) -> Record<Skill> {
    Record::new(id, Skill::new(name, category, proficiency))
}

fn certification(id: &str, name: &str, issuer: &str, date: &str) -> Record<Certification> {
    Record::new(
        id,
        Certification {
            name: name.to_string(),
            issuer: issuer.to_string(),
            date: date.to_string(),
            credential_id: None,
            credential_url: None,
        },
    )
}

fn achievement(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
) -> Record<Achievement> {
    Record::new(
        id,
        Achievement {
            title: title.to_string(),
            description: description.to_string(),
            date: "2024".to_string(),
            category: category.to_string(),
        },
    )
}

fn social_link(id: &str, platform: &str, url: &str, username: &str, icon: &str) -> Record<SocialLink> {
    Record::new(
        id,
        SocialLink {
            platform: platform.to_string(),
            url: url.to_string(),
            username: username.to_string(),
            icon: icon.to_string(),
        },
    )
}

pub fn default_personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Naveen Singh".to_string(),
        email: "navinit25@gmail.com".to_string(),
        phone: "+91 XXXXXXXXXX".to_string(),
        bio: "A passionate full-stack developer crafting scalable web applications with modern \
              technologies. Specialized in MERN stack development."
            .to_string(),
        location: "India".to_string(),
        title: "Full Stack Developer".to_string(),
        github_username: "piyusdev2006".to_string(),
        linkedin_username: "ns51".to_string(),
        leetcode_username: "Navi_2006".to_string(),
        profile_image: None,
        resume_url: None,
    }
}

pub fn default_skills() -> Vec<Record<Skill>> {
    use SkillCategory::*;
    vec![
        skill("1", "JavaScript", Languages, 90),
        skill("2", "C++", Languages, 85),
        skill("3", "HTML", Frontend, 95),
        skill("4", "CSS", Frontend, 90),
        skill("5", "Tailwind CSS", Frontend, 88),
        skill("6", "React.js", Frontend, 85),
        skill("7", "Express.js", Backend, 80),
        skill("8", "Node.js", Backend, 82),
        skill("9", "MongoDB", Databases, 78),
        skill("10", "MySQL", Databases, 75),
        skill("11", "Postman", Tools, 85),
        skill("12", "Git", Tools, 88),
        skill("13", "GitHub", Tools, 90),
        skill("14", "VS Code", Tools, 95),
    ]
}

pub fn default_projects() -> Vec<Record<Project>> {
    vec![
        Record::new(
            "1",
            Project {
                title: "DevTinder".to_string(),
                description: "A developer networking backend using Node.js, Express.js, and \
                              MongoDB with secure JWT authentication and RESTful APIs."
                    .to_string(),
                long_description: Some(
                    "DevTinder is a comprehensive backend solution for developer networking, \
                     built with modern technologies and best practices. It features secure user \
                     authentication, profile management, and social connection capabilities."
                        .to_string(),
                ),
                tech: strings(&["Express.js", "MongoDB", "Node.js", "JWT"]),
                date: "April 2025".to_string(),
                features: strings(&[
                    "User Authentication",
                    "Profile Management",
                    "Social Connections",
                    "JWT Security",
                ]),
                status: "Production Ready".to_string(),
                category: "Backend".to_string(),
                github_url: Some("https://github.com/piyusdev2006/devtinder".to_string()),
                live_url: None,
                image_url: None,
            },
        ),
        Record::new(
            "2",
            Project {
                title: "Chat Application".to_string(),
                description: "Real-time messaging app built with MERN stack and Socket.io, \
                              featuring live user status and instant messaging."
                    .to_string(),
                long_description: Some(
                    "A full-stack real-time chat application that demonstrates modern web \
                     development practices with real-time communication capabilities."
                        .to_string(),
                ),
                tech: strings(&[
                    "React.js",
                    "Express.js",
                    "Node.js",
                    "MongoDB",
                    "Socket.io",
                    "Tailwind CSS",
                ]),
                date: "April 2024".to_string(),
                features: strings(&[
                    "Real-time Messaging",
                    "JWT Authentication",
                    "Live User Status",
                    "Responsive UI",
                ]),
                status: "Live Demo".to_string(),
                category: "Full Stack".to_string(),
                github_url: Some("https://github.com/piyusdev2006/chat-app".to_string()),
                live_url: None,
                image_url: None,
            },
        ),
        Record::new(
            "3",
            Project {
                title: "Voting System".to_string(),
                description: "Secure backend voting system with Aadhar registration, single-vote \
                              casting, and comprehensive admin features."
                    .to_string(),
                long_description: Some(
                    "A secure and scalable voting system backend that ensures election integrity \
                     with advanced security measures and administrative controls."
                        .to_string(),
                ),
                tech: strings(&["Express.js", "MongoDB", "Node.js"]),
                date: "Dec 2024".to_string(),
                features: strings(&[
                    "Secure Authentication",
                    "Admin Panel",
                    "Vote Management",
                    "Real-time Data",
                ]),
                status: "Open Source".to_string(),
                category: "Backend".to_string(),
                github_url: Some("https://github.com/piyusdev2006/voting-system".to_string()),
                live_url: None,
                image_url: None,
            },
        ),
    ]
}

pub fn default_certifications() -> Vec<Record<Certification>> {
    vec![
        certification("1", "Google AI Study Jam Program", "Google", "2024"),
        certification(
            "2",
            "JavaScript Mastery - Namaste JavaScript",
            "Namaste Dev",
            "2024",
        ),
        certification("3", "API Fundamentals", "Postman", "2024"),
        certification("4", "GitHub Foundation", "GitHub", "2024"),
    ]
}

pub fn default_achievements() -> Vec<Record<Achievement>> {
    vec![
        achievement(
            "1",
            "GSSoC Contributor",
            "Ranked 937th in GSSoC for open source contributions",
            "Open Source",
        ),
        achievement(
            "2",
            "Google Cloud Facilitator",
            "Google Cloud Arcade Facilitator and Gen AI Study Jam Program",
            "Community",
        ),
        achievement(
            "3",
            "Open Source Contributor",
            "Hacktoberfest and DevFest AI open source contributions",
            "Open Source",
        ),
    ]
}

pub fn default_social_links() -> Vec<Record<SocialLink>> {
    vec![
        social_link(
            "1",
            "GitHub",
            "https://github.com/piyusdev2006",
            "piyusdev2006",
            "Github",
        ),
        social_link(
            "2",
            "LinkedIn",
            "https://www.linkedin.com/in/ns51/",
            "ns51",
            "Linkedin",
        ),
        social_link(
            "3",
            "Email",
            "mailto:navinit25@gmail.com",
            "navinit25@gmail.com",
            "Mail",
        ),
        social_link(
            "4",
            "LeetCode",
            "https://leetcode.com/u/Navi_2006/",
            "Navi_2006",
            "Code",
        ),
    ]
}

/// A complete default document, stamped with the current time.
pub fn default_document() -> ProfileDocument {
    ProfileDocument {
        personal_info: default_personal_info(),
        skills: default_skills(),
        projects: default_projects(),
        experience: Vec::new(),
        education: Vec::new(),
        certifications: default_certifications(),
        achievements: default_achievements(),
        social_links: default_social_links(),
        last_updated: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_collection_sizes() {
        let doc = default_document();
        assert_eq!(doc.skills.len(), 14);
        assert_eq!(doc.projects.len(), 3);
        assert_eq!(doc.certifications.len(), 4);
        assert_eq!(doc.achievements.len(), 3);
        assert_eq!(doc.social_links.len(), 4);
        assert!(doc.experience.is_empty());
        assert!(doc.education.is_empty());
    }

    #[test]
    fn test_default_ids_unique_per_collection() {
        let doc = default_document();
        let ids: HashSet<_> = doc.skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), doc.skills.len());
        let ids: HashSet<_> = doc.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), doc.projects.len());
    }

    #[test]
    fn test_default_project_one_is_devtinder() {
        let doc = default_document();
        assert_eq!(doc.find::<Project>("1").unwrap().title, "DevTinder");
    }

    #[test]
    fn test_default_serializes_with_storage_layout_keys() {
        let value = serde_json::to_value(default_document()).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        for key in [
            "personalInfo",
            "skills",
            "projects",
            "experience",
            "education",
            "certifications",
            "achievements",
            "socialLinks",
            "lastUpdated",
        ] {
            assert!(keys.contains(&key), "missing key {}", key);
        }
        assert_eq!(value["personalInfo"]["githubUsername"], "piyusdev2006");
    }
}
