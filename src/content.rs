//! Site copy. Everything here is compile-time data handed to the components by value.

pub const OWNER: &str = "Dhruv Kumar";
pub const HEADLINE: &str = "Frontend Web Developer";
pub const FOOTER_ROLE: &str = "Frontend Developer";
pub const INTRO: &str = "Fresher Frontend Web Developer skilled in HTML, CSS, JavaScript, and React, building responsive web applications with modern UI and authentication.";
pub const ABOUT: &str = "Computer Engineering student at J.C. Bose University of Science & Technology, YMCA (2022–2026). Passionate about crafting clean, responsive, and scalable frontend applications. Actively seeking frontend or React internship opportunities.";
pub const CONTACT_BLURB: &str = "Open for internships & collaborations";

/// Stamped by the build script.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

pub const RESUME_FILE: &str = "Dhruv_Kumar_Resume.pdf";
pub const RESUME_PATH: &str = "/Dhruv_Kumar_Resume.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
}

impl NavItem {
    /// In-page anchor id the label jumps to.
    pub fn anchor(&self) -> String {
        self.label.to_lowercase()
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "About" },
    NavItem { label: "Skills" },
    NavItem { label: "Projects" },
    NavItem { label: "Contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    /// Display text, never split.
    pub items: &'static str,
}

pub const SKILLS: [SkillGroup; 4] = [
    SkillGroup {
        title: "Frontend",
        items: "HTML5, CSS3, JavaScript, React, Tailwind CSS",
    },
    SkillGroup {
        title: "Concepts",
        items: "DSA, OOP, Responsive Design",
    },
    SkillGroup {
        title: "Tools",
        items: "Git, GitHub, VS Code, npm, Vite, Netlify, Vercel",
    },
    SkillGroup {
        title: "Coursework",
        items: "DBMS, Computer Networks, Operating Systems",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static str,
    pub demo_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
}

pub const PROJECTS: [ProjectEntry; 3] = [
    ProjectEntry {
        title: "Hotel Booking App",
        description: "Hotel booking platform with Clerk authentication, protected routes, and booking flows.",
        technologies: "React, Clerk Auth, JavaScript",
        demo_url: Some("#"),
        source_url: Some("#"),
    },
    ProjectEntry {
        title: "Employee Management System",
        description: "React-based EMS with reusable components and localStorage persistence.",
        technologies: "React, Tailwind CSS",
        demo_url: Some("#"),
        source_url: Some("#"),
    },
    ProjectEntry {
        title: "Gemini AI Clone",
        description: "Real-time AI chat app using Gemini API and async JavaScript.",
        technologies: "HTML, CSS, JavaScript",
        demo_url: Some("#"),
        source_url: Some("#"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: &'static str,
    pub href: &'static str,
    pub text: &'static str,
}

pub const CONTACTS: [ContactLink; 3] = [
    ContactLink {
        kind: "Email",
        href: "mailto:dhruvsingh200420@gmail.com",
        text: "dhruvsingh200420@gmail.com",
    },
    ContactLink {
        kind: "LinkedIn",
        href: "https://www.linkedin.com/in/dhruv077",
        text: "linkedin.com/in/dhruv077",
    },
    ContactLink {
        kind: "GitHub",
        href: "https://github.com/thedhruv-07",
        text: "github.com/thedhruv-07",
    },
];

/// Treats an empty URL the same as a missing one.
pub fn link_target(url: Option<&'static str>) -> Option<&'static str> {
    url.filter(|u| !u.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_anchors() {
        let anchors = NAV_ITEMS.iter().map(NavItem::anchor).collect::<Vec<_>>();
        assert_eq!(anchors, ["about", "skills", "projects", "contact"]);
        for item in NAV_ITEMS {
            let mut chars = item.anchor().chars().collect::<Vec<_>>();
            chars[0] = chars[0].to_ascii_uppercase();
            assert_eq!(chars.into_iter().collect::<String>(), item.label);
            assert_eq!(item.href(), format!("#{}", item.anchor()));
        }
    }

    #[test]
    fn test_content_required_fields() {
        assert!(SKILLS
            .iter()
            .all(|s| !s.title.is_empty() && !s.items.is_empty()));
        assert!(PROJECTS
            .iter()
            .all(|p| !p.title.is_empty() && !p.description.is_empty()));
    }

    #[test]
    fn test_link_target() {
        assert_eq!(link_target(Some("#")), Some("#"));
        assert_eq!(link_target(Some("")), None);
        assert_eq!(link_target(Some("  ")), None);
        assert_eq!(link_target(None), None);
    }

    #[test]
    fn test_resume_path_matches_file() {
        assert_eq!(RESUME_PATH.trim_start_matches('/'), RESUME_FILE);
    }
}
