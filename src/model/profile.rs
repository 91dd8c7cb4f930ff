//! Portfolio profile data.
//!
//! A [`Profile`] is immutable configuration for one page: it is loaded
//! once (from the built-in sample or a file) and handed to the state layer
//! at construction time. Nothing mutates it afterwards; a reload builds a
//! new profile and swaps it in whole.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Display name in the hero banner and footer.
    pub name: String,

    /// Line revealed by the typing effect. Missing means nothing to type.
    #[serde(default)]
    pub tagline: Option<String>,

    /// Free-form "About Me" paragraph.
    #[serde(default)]
    pub about: String,

    /// Skill names, shown as chips.
    #[serde(default)]
    pub skills: Vec<String>,

    /// Project cards, in display order.
    #[serde(default)]
    pub projects: Vec<Project>,

    /// Jobs, most recent first.
    #[serde(default)]
    pub experience: Vec<Experience>,

    /// Schools and degrees.
    #[serde(default)]
    pub education: Vec<Education>,

    /// Links shown under the tagline.
    #[serde(default)]
    pub social: Vec<SocialLink>,

    /// Year in the footer copyright line. Defaults to the current year.
    #[serde(default)]
    pub copyright_year: Option<i32>,

    /// Trailing footer text. Defaults to [`DEFAULT_FOOTER_NOTE`].
    #[serde(default)]
    pub footer_note: Option<String>,
}

/// Footer text used when a profile does not set one.
pub const DEFAULT_FOOTER_NOTE: &str = "Crafted with 💜";

/// A project card. Front shows title and description; back shows details and link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Card heading. Must not be blank.
    pub title: String,
    /// Summary on the front face.
    pub description: String,
    /// Tech stack or notes on the back face.
    #[serde(default)]
    pub details: String,
    /// URL shown on the back face.
    #[serde(default)]
    pub link: String,
}

/// One job in the Experience section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    /// Role held.
    pub title: String,
    /// Employer.
    pub company: String,
    /// Free-form period, e.g. "2023 - Present".
    pub duration: String,
    /// What the job involved.
    #[serde(default)]
    pub description: String,
}

/// One entry in the Education section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Education {
    /// School or university.
    pub institution: String,
    /// Degree or certificate.
    pub degree: String,
    /// Free-form period.
    pub duration: String,
    /// Grade or percentage. Only rendered when present.
    #[serde(default)]
    pub percentage: Option<String>,
}

/// A labelled link under the hero tagline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Short name, e.g. "GitHub".
    pub label: String,
    /// Target shown as text.
    pub url: String,
}

/// Reasons a profile is rejected after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidProfile {
    /// `name` is empty or whitespace.
    #[error("profile name must not be blank")]
    BlankName,

    /// A project has an empty or whitespace title.
    #[error("project #{index} has a blank title")]
    BlankProjectTitle {
        /// Position of the project in `projects`.
        index: usize,
    },
}

impl Profile {
    /// Check the invariants the renderers rely on.
    pub fn validate(&self) -> Result<(), InvalidProfile> {
        if self.name.trim().is_empty() {
            return Err(InvalidProfile::BlankName);
        }
        if let Some(index) = self.projects.iter().position(|p| p.title.trim().is_empty()) {
            return Err(InvalidProfile::BlankProjectTitle { index });
        }
        Ok(())
    }

    /// Footer copyright year, falling back to the current local year.
    pub fn copyright_year(&self) -> i32 {
        use chrono::Datelike;
        self.copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Footer note, falling back to [`DEFAULT_FOOTER_NOTE`].
    pub fn footer_note(&self) -> &str {
        self.footer_note.as_deref().unwrap_or(DEFAULT_FOOTER_NOTE)
    }

    /// Built-in sample profile shown when no profile file is given.
    pub fn sample() -> Self {
        Self {
            name: "Ananti".to_string(),
            tagline: Some("I build cool things for the web.".to_string()),
            about: "I'm a passionate Full Stack Developer with a love for creating intuitive, \
                    dynamic, and high-performance web applications. I thrive on solving complex \
                    problems and I'm always eager to dive into new technologies and frameworks. \
                    My goal is to build products that not only work flawlessly but also provide \
                    an exceptional user experience."
                .to_string(),
            skills: [
                "React",
                "Node.js",
                "Express",
                "MySQL",
                "JavaScript",
                "Next.js",
                "Tailwind CSS",
                "Git",
                "Figma",
                "Firebase",
                "Flask",
                "Hardhat",
                "Solidity",
                "GAMS Software",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            projects: vec![
                Project {
                    title: "Staybooker".to_string(),
                    description: "Developed my full stack skills by building a property listing \
                                  website where one can host and book properties"
                        .to_string(),
                    details: "Tech Stack: React.js, Flask, sqlite, stripe".to_string(),
                    link: "https://github.com/revyark/Property-listing-website".to_string(),
                },
                Project {
                    title: "Cars Only Website".to_string(),
                    description: "Cars gallery website for car enthusiasts".to_string(),
                    details: "Tech Stack: HTML5, CSS3, JavaScript (Vanilla), Unsplash API, \
                              Firebase"
                        .to_string(),
                    link: "https://revyark.github.io/CarsOnly-Website/".to_string(),
                },
                Project {
                    title: "Blockshield".to_string(),
                    description: "Hackathon project: a blockchain-based, tokenized rate-limiting \
                                  system that defends servers against bot abuse, spam, and DDoS \
                                  attacks. I worked on smart contracts and backend."
                        .to_string(),
                    details: "Tech Stack: React.js, Express.js, Solidity, Hardhat, Ethers.js, \
                              MongoDB, MetaMask"
                        .to_string(),
                    link: "https://github.com/revyark/vajra".to_string(),
                },
                Project {
                    title: "Feature Matching without the use of Machine Learning".to_string(),
                    description: "Using classical computer vision algorithms to find and connect \
                                  corresponding points of interest between two different images"
                        .to_string(),
                    details: "Tech Stack: Python, OpenCV-Python (feature detection/matching), \
                              NumPy (numerical operations), Matplotlib (visualization)"
                        .to_string(),
                    link: "https://github.com/revyark/Feature-Matching_Without-ML".to_string(),
                },
                Project {
                    title: "Cost Optimisation of power system networks".to_string(),
                    description: "Designing power system networks, running simulations and \
                                  optimising the cost of power flow while upholding the security \
                                  constraints"
                        .to_string(),
                    details: "Tech Stack: GAMS Software, PowerWorld Simulator".to_string(),
                    link: "https://github.com/revyark/GAMS-Cost_optimisation_project".to_string(),
                },
            ],
            experience: vec![
                Experience {
                    title: "Web Developer Intern".to_string(),
                    company: "Tycho-Tecnologies".to_string(),
                    duration: "May 2025 - June 2025".to_string(),
                    description: "Developing and maintaining web applications, contributing to \
                                  both front-end and back-end development cycles and \
                                  collaborating with a team to build scalable features."
                        .to_string(),
                },
                Experience {
                    title: "Joint Secretary".to_string(),
                    company: "Cloudops".to_string(),
                    duration: "August 2024 - Present".to_string(),
                    description: "Leveraging my technical background in cloud operations to \
                                  understand and guide projects"
                        .to_string(),
                },
                Experience {
                    title: "Project Intern".to_string(),
                    company: "GRID India".to_string(),
                    duration: "June 2024 - July 2024".to_string(),
                    description: "Cost optimisation of power system networks upholding the \
                                  security constraints in GAMS Software."
                        .to_string(),
                },
            ],
            education: vec![
                Education {
                    institution: "Vellore Institute of Technology".to_string(),
                    degree: "B.Tech in Computer Science".to_string(),
                    duration: "2023 - 2027".to_string(),
                    percentage: Some("9.27 cgpa".to_string()),
                },
                Education {
                    institution: "Delhi Public School RK Puram".to_string(),
                    degree: "Senior Secondary".to_string(),
                    duration: "2020 - 2022".to_string(),
                    percentage: Some("93.4%".to_string()),
                },
                Education {
                    institution: "Delhi Public School RK Puram".to_string(),
                    degree: "Secondary".to_string(),
                    duration: "2018 - 2020".to_string(),
                    percentage: Some("96.8%".to_string()),
                },
            ],
            social: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/revyark".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/ananti24/".to_string(),
                },
            ],
            copyright_year: Some(2024),
            footer_note: None,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::sample()
    }
}
