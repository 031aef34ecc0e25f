//! Seed profiles for a fresh editor session.

use crate::models::dates::ResumeDate;
use crate::models::profile::{
    Basics, Education, Highlight, Job, Profile, ProfileLink, Project, SkillGroup,
};

/// Empty profile with no records.
pub fn blank_profile() -> Profile {
    Profile::default()
}

/// A realistic full-stack engineer profile used as the editor's starting point.
pub fn sample_profile() -> Profile {
    Profile {
        basics: Basics {
            name: "Alex Johnson".to_string(),
            label: "Senior Full-Stack Engineer".to_string(),
            email: "alex.johnson@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            url: "https://alexjohnson.dev".to_string(),
            summary: "Full-stack engineer with 6+ years of experience building scalable web \
                      applications and distributed systems. Passionate about clean architecture, \
                      developer experience, and shipping products that make a real impact. Strong \
                      background in React, Node.js, and cloud infrastructure."
                .to_string(),
            profiles: vec![
                link("LinkedIn", "https://linkedin.com/in/alexjohnson"),
                link("GitHub", "https://github.com/alexjohnson"),
            ],
        },
        skills: vec![
            group("Languages", &["JavaScript", "TypeScript", "Python", "Go", "SQL"]),
            group(
                "Frontend",
                &["React", "Next.js", "Redux", "Tailwind CSS", "Webpack"],
            ),
            group(
                "Backend & Infra",
                &[
                    "Node.js",
                    "Express",
                    "PostgreSQL",
                    "Redis",
                    "Docker",
                    "AWS",
                    "Kubernetes",
                ],
            ),
            group(
                "Tools & Practices",
                &["Git", "CI/CD", "Jest", "Cypress", "Agile/Scrum"],
            ),
        ],
        work: vec![
            Job {
                company: "TechCorp Inc.".to_string(),
                position: "Senior Full-Stack Engineer".to_string(),
                url: "https://techcorp.com".to_string(),
                start_date: ResumeDate::parse("2022-03-01"),
                end_date: ResumeDate::Present,
                highlights: vec![
                    Highlight::new(
                        "Architected a microservices migration from a monolithic Node.js backend \
                         to Docker-ized services on Kubernetes, reducing deployment time by 70% \
                         and improving system reliability to 99.95% uptime.",
                        &["Node.js", "Docker", "Kubernetes"],
                        true,
                    ),
                    Highlight::new(
                        "Led the re-write of the customer-facing dashboard using React and \
                         Next.js, achieving a 45% improvement in Lighthouse performance scores \
                         and cutting page load times from 3.2s to 1.1s.",
                        &["React", "Next.js"],
                        true,
                    ),
                    Highlight::new(
                        "Implemented a real-time notification system using Redis pub/sub and \
                         WebSockets, serving 50K+ concurrent users with sub-100ms latency.",
                        &["Redis", "WebSockets"],
                        true,
                    ),
                    Highlight::new(
                        "Mentored a team of 4 junior engineers through code reviews, pair \
                         programming, and weekly architecture discussions, accelerating their \
                         ramp-up time by 40%.",
                        &[],
                        false,
                    ),
                ],
            },
            Job {
                company: "StartupXYZ".to_string(),
                position: "Full-Stack Developer".to_string(),
                url: "https://startupxyz.io".to_string(),
                start_date: ResumeDate::parse("2019-06-15"),
                end_date: ResumeDate::parse("2022-02-28"),
                highlights: vec![
                    Highlight::new(
                        "Built the entire frontend from scratch using React, Redux, and \
                         TypeScript, supporting 10K+ daily active users across web and mobile \
                         platforms.",
                        &["React", "Redux", "TypeScript"],
                        true,
                    ),
                    Highlight::new(
                        "Developed a RESTful API layer with Express and PostgreSQL, handling 2M+ \
                         requests per day with an average response time of 45ms.",
                        &["Express", "PostgreSQL"],
                        true,
                    ),
                    Highlight::new(
                        "Automated CI/CD pipelines using GitHub Actions and Docker, reducing \
                         release cycles from bi-weekly to daily deployments.",
                        &["CI/CD", "Docker", "GitHub Actions"],
                        true,
                    ),
                    Highlight::new(
                        "Designed and maintained comprehensive test suites with Jest and \
                         Cypress, achieving 92% code coverage across all services.",
                        &["Jest", "Cypress"],
                        false,
                    ),
                ],
            },
            Job {
                company: "WebAgency Co.".to_string(),
                position: "Junior Developer".to_string(),
                url: "https://webagency.co".to_string(),
                start_date: ResumeDate::parse("2018-01-10"),
                end_date: ResumeDate::parse("2019-05-30"),
                highlights: vec![
                    Highlight::new(
                        "Developed responsive client websites using React and Tailwind CSS, \
                         delivering 15+ projects on time and under budget.",
                        &["React", "Tailwind CSS"],
                        true,
                    ),
                    Highlight::new(
                        "Integrated third-party APIs (Stripe, SendGrid, Google Maps) into client \
                         applications, reducing manual workflows by 60%.",
                        &["Stripe", "SendGrid"],
                        true,
                    ),
                ],
            },
        ],
        projects: vec![
            Project {
                name: "DevMetrics".to_string(),
                description: "Open-source developer productivity dashboard that aggregates data \
                              from GitHub, Jira, and Slack to visualize team performance metrics."
                    .to_string(),
                url: "https://github.com/alexjohnson/devmetrics".to_string(),
                keywords: strings(&["React", "Node.js", "GraphQL", "D3.js"]),
                highlights: vec![
                    Highlight::new(
                        "Built with React and D3.js for interactive data visualization, backed \
                         by a Node.js GraphQL API aggregating data from 3+ sources.",
                        &["React", "D3.js", "Node.js", "GraphQL"],
                        true,
                    ),
                    Highlight::new(
                        "Gained 1.2K GitHub stars and 200+ forks, featured in JavaScript Weekly \
                         newsletter.",
                        &[],
                        true,
                    ),
                ],
            },
            Project {
                name: "CloudDeploy CLI".to_string(),
                description: "A command-line tool written in Go for simplified multi-cloud \
                              deployment to AWS, GCP, and Azure."
                    .to_string(),
                url: "https://github.com/alexjohnson/clouddeploy".to_string(),
                keywords: strings(&["Go", "AWS", "GCP", "Azure", "CLI"]),
                highlights: vec![
                    Highlight::new(
                        "Developed in Go with support for AWS ECS, GCP Cloud Run, and Azure \
                         Container Instances, unifying deployment under a single workflow.",
                        &["Go", "AWS", "GCP", "Azure"],
                        true,
                    ),
                    Highlight::new(
                        "Reduced average deployment setup time from 30 minutes to under 5 \
                         minutes for teams with multi-cloud infrastructure.",
                        &[],
                        true,
                    ),
                ],
            },
        ],
        education: vec![Education {
            institution: "State University".to_string(),
            area: "Computer Science".to_string(),
            study_type: "Bachelor of Science".to_string(),
            start_date: ResumeDate::parse("2014-09-01"),
            end_date: ResumeDate::parse("2018-05-15"),
            score: "3.8 / 4.0".to_string(),
        }],
    }
}

fn link(network: &str, url: &str) -> ProfileLink {
    ProfileLink {
        network: network.to_string(),
        url: url.to_string(),
    }
}

fn group(category: &str, items: &[&str]) -> SkillGroup {
    SkillGroup {
        category: category.to_string(),
        items: strings(items),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
