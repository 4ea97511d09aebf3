//! Built-in job board backed by a static table of sample postings per role.
//!
//! Stands in for a live scraper. The table is compiled into the binary and never
//! changes, so the board is trivially shareable across requests.

use async_trait::async_trait;
use tracing::debug;

use crate::jobs::models::{JobPosting, JobQuery, Role};
use crate::jobs::source::JobSource;

struct SamplePosting {
    job_id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    description: &'static str,
    url: &'static str,
}

impl SamplePosting {
    fn to_posting(&self) -> JobPosting {
        JobPosting {
            job_id: self.job_id.to_string(),
            title: self.title.to_string(),
            company: self.company.to_string(),
            location: self.location.to_string(),
            job_description: self.description.to_string(),
            external_url: self.url.to_string(),
        }
    }
}

const SOFTWARE_ENGINEER: &[SamplePosting] = &[SamplePosting {
    job_id: "se_001",
    title: "Senior Software Engineer",
    company: "Tech Innovations Corp",
    location: "San Francisco, CA",
    description: "Looking for a Senior Software Engineer to build scalable applications.

Requirements:
- 5+ years of software development experience
- Strong programming skills in Python, Java, or JavaScript
- Experience with cloud platforms (AWS, Azure, or GCP)
- Database design and optimization
- Agile development methodology
- Excellent problem-solving skills

Nice to have:
- Microservices architecture
- Container technologies (Docker, Kubernetes)
- CI/CD pipeline experience",
    url: "https://www.linkedin.com/jobs/view/software-engineer",
}];

const BACKEND_DEVELOPER: &[SamplePosting] = &[SamplePosting {
    job_id: "bd_001",
    title: "Senior Backend Developer",
    company: "Digital Solutions Inc",
    location: "Remote",
    description: "Join our team as a Senior Backend Developer to build robust APIs.

Core Requirements:
- 3+ years backend development experience
- Expertise in Python (FastAPI/Django) or Node.js
- RESTful API design and implementation
- PostgreSQL or MySQL database skills
- Redis caching experience
- Git and code review practices

Preferred:
- Microservices architecture
- Message queues (RabbitMQ, Kafka)
- Elasticsearch experience
- Docker deployment",
    url: "https://www.linkedin.com/jobs/view/backend-developer",
}];

const FRONTEND_DEVELOPER: &[SamplePosting] = &[SamplePosting {
    job_id: "fd_001",
    title: "Senior Frontend Developer",
    company: "Creative Digital Agency",
    location: "New York, NY",
    description: "We're looking for a talented Frontend Developer to create amazing UIs.

Must Have:
- 3+ years of frontend development
- Expert in React, Vue, or Angular
- HTML5, CSS3, JavaScript/TypeScript
- Responsive design and cross-browser compatibility
- State management (Redux, MobX, Vuex)
- RESTful API integration

Nice to Have:
- Next.js or Nuxt.js experience
- UI/UX design skills
- Animation libraries (GSAP, Framer Motion)
- Testing (Jest, Cypress)",
    url: "https://www.linkedin.com/jobs/view/frontend-developer",
}];

const FULL_STACK_DEVELOPER: &[SamplePosting] = &[SamplePosting {
    job_id: "fs_001",
    title: "Full Stack Developer",
    company: "Startup Ventures LLC",
    location: "Austin, TX",
    description: "Full Stack Developer needed for our growing startup.

Required Skills:
- Proficiency in JavaScript/TypeScript
- Experience with React and Node.js
- RESTful API development
- MongoDB or PostgreSQL
- Git version control
- Agile/Scrum methodology

Bonus:
- Docker containerization
- GraphQL experience
- Unit testing and TDD
- AWS or Azure cloud",
    url: "https://www.linkedin.com/jobs/view/fullstack-developer",
}];

const UI_UX_DESIGNER: &[SamplePosting] = &[
    SamplePosting {
        job_id: "ux_001",
        title: "Senior UI/UX Designer",
        company: "Design Studio Co",
        location: "Los Angeles, CA",
        description: "We're seeking a talented UI/UX Designer to create intuitive user experiences.

Requirements:
- 3+ years of UI/UX design experience
- Expert in Figma, Sketch, or Adobe XD
- Strong portfolio showcasing design work
- User research and usability testing
- Wireframing and prototyping
- Design systems and component libraries
- Understanding of accessibility standards

Nice to Have:
- HTML/CSS knowledge
- Animation and micro-interactions
- Mobile app design experience
- Design thinking methodology",
        url: "https://www.linkedin.com/jobs/view/uiux-designer",
    },
    SamplePosting {
        job_id: "ux_002",
        title: "Product Designer (UI/UX)",
        company: "Tech Startup Inc",
        location: "Remote",
        description: "Product Designer to shape user experiences for our SaaS platform.

Must Have:
- 2+ years UI/UX design experience
- Proficiency in Figma
- User-centered design approach
- Wireframing, prototyping, user flows
- Visual design skills (typography, color theory)
- Collaboration with developers

Preferred:
- Experience with design systems
- Front-end development skills (HTML/CSS)
- Motion design experience
- B2B SaaS product experience",
        url: "https://www.linkedin.com/jobs/view/product-designer",
    },
];

const DATA_SCIENTIST: &[SamplePosting] = &[SamplePosting {
    job_id: "ds_001",
    title: "Data Scientist",
    company: "Analytics Corp",
    location: "Boston, MA",
    description: "Data Scientist to derive insights from complex datasets.

Requirements:
- 3+ years data science experience
- Strong Python skills (Pandas, NumPy, Scikit-learn)
- Statistical analysis and hypothesis testing
- Machine learning algorithms
- Data visualization (Matplotlib, Seaborn, Plotly)
- SQL and database experience

Preferred:
- Deep learning (TensorFlow, PyTorch)
- Big data technologies (Spark, Hadoop)
- Cloud platforms (AWS, GCP)
- A/B testing experience",
    url: "https://www.linkedin.com/jobs/view/data-scientist",
}];

const MACHINE_LEARNING_ENGINEER: &[SamplePosting] = &[SamplePosting {
    job_id: "ml_001",
    title: "Machine Learning Engineer",
    company: "AI Innovations Lab",
    location: "Seattle, WA",
    description: "ML Engineer to build and deploy AI models at scale.

Must Have:
- Strong Python programming
- Experience with TensorFlow or PyTorch
- Deep learning and neural networks
- Data preprocessing with Pandas and NumPy
- Model deployment experience
- Computer vision or NLP expertise

Preferred:
- AWS SageMaker or similar
- MLOps and model monitoring
- Kubernetes for deployment
- Research publications",
    url: "https://www.linkedin.com/jobs/view/ml-engineer",
}];

const DEVOPS_ENGINEER: &[SamplePosting] = &[SamplePosting {
    job_id: "do_001",
    title: "DevOps Engineer",
    company: "Cloud Infrastructure Inc",
    location: "Denver, CO",
    description: "DevOps Engineer to manage cloud infrastructure and CI/CD.

Requirements:
- Strong Linux/Bash scripting
- Experience with AWS, Azure, or GCP
- Docker and Kubernetes expertise
- CI/CD pipelines (Jenkins, GitLab CI)
- Infrastructure as Code (Terraform, Ansible)
- Monitoring tools (Prometheus, Grafana)

Additional:
- Python scripting for automation
- Security best practices
- Microservices architecture",
    url: "https://www.linkedin.com/jobs/view/devops-engineer",
}];

const MOBILE_DEVELOPER: &[SamplePosting] = &[SamplePosting {
    job_id: "md_001",
    title: "Senior Mobile Developer (iOS/Android)",
    company: "Mobile Apps Studio",
    location: "Miami, FL",
    description: "Mobile Developer to create native mobile applications.

Requirements:
- 3+ years mobile development
- iOS (Swift) or Android (Kotlin) expertise
- React Native or Flutter experience
- RESTful API integration
- Mobile UI/UX best practices
- App Store/Play Store deployment

Nice to Have:
- Cross-platform development
- Push notifications
- In-app purchases
- Analytics integration",
    url: "https://www.linkedin.com/jobs/view/mobile-developer",
}];

const CLOUD_ARCHITECT: &[SamplePosting] = &[SamplePosting {
    job_id: "ca_001",
    title: "Cloud Solutions Architect",
    company: "Enterprise Cloud Services",
    location: "Chicago, IL",
    description: "Cloud Architect to design scalable cloud infrastructure.

Requirements:
- 5+ years cloud architecture experience
- Deep AWS, Azure, or GCP knowledge
- Infrastructure as Code (Terraform, CloudFormation)
- Security and compliance
- High availability and disaster recovery
- Cost optimization strategies

Certifications Preferred:
- AWS Solutions Architect
- Azure Solutions Architect
- Google Cloud Architect",
    url: "https://www.linkedin.com/jobs/view/cloud-architect",
}];

const DATA_ENGINEER: &[SamplePosting] = &[SamplePosting {
    job_id: "de_001",
    title: "Senior Data Engineer",
    company: "Big Data Solutions",
    location: "San Jose, CA",
    description: "Data Engineer to build and maintain data pipelines.

Must Have:
- 3+ years data engineering
- Python and SQL expertise
- ETL/ELT pipeline development
- Data warehousing (Snowflake, Redshift, BigQuery)
- Big data tools (Spark, Airflow, Kafka)
- Cloud platforms (AWS, GCP, Azure)

Nice to Have:
- Real-time streaming data
- Data modeling and architecture
- dbt (data build tool)
- Docker and Kubernetes",
    url: "https://www.linkedin.com/jobs/view/data-engineer",
}];

const PRODUCT_MANAGER: &[SamplePosting] = &[SamplePosting {
    job_id: "pm_001",
    title: "Product Manager",
    company: "SaaS Products Inc",
    location: "San Francisco, CA",
    description: "Product Manager to drive product strategy and execution.

Requirements:
- 3+ years product management
- Product roadmap and strategy
- User research and analytics
- Agile/Scrum methodology
- Stakeholder management
- Data-driven decision making

Skills:
- Product analytics (Mixpanel, Amplitude)
- A/B testing
- User stories and requirements
- Technical understanding",
    url: "https://www.linkedin.com/jobs/view/product-manager",
}];

const QA_ENGINEER: &[SamplePosting] = &[SamplePosting {
    job_id: "qa_001",
    title: "QA Automation Engineer",
    company: "Quality Assurance Corp",
    location: "Portland, OR",
    description: "QA Engineer to ensure software quality through automation.

Requirements:
- 2+ years QA automation experience
- Selenium, Cypress, or similar tools
- Programming skills (Python, JavaScript, Java)
- Test planning and execution
- Bug tracking (Jira, Bugzilla)
- CI/CD integration

Preferred:
- API testing (Postman, REST Assured)
- Performance testing (JMeter)
- Mobile testing
- Agile methodologies",
    url: "https://www.linkedin.com/jobs/view/qa-engineer",
}];

const SECURITY_ENGINEER: &[SamplePosting] = &[SamplePosting {
    job_id: "sec_001",
    title: "Cybersecurity Engineer",
    company: "SecureTech Solutions",
    location: "Washington, DC",
    description: "Security Engineer to protect systems and data.

Requirements:
- 3+ years cybersecurity experience
- Network security and firewalls
- Penetration testing and vulnerability assessment
- Security tools (SIEM, IDS/IPS)
- Incident response
- Security compliance (SOC2, ISO 27001)

Certifications Preferred:
- CISSP, CEH, or Security+
- Cloud security (AWS, Azure)",
    url: "https://www.linkedin.com/jobs/view/security-engineer",
}];

fn samples_for(role: Role) -> &'static [SamplePosting] {
    match role {
        Role::SoftwareEngineer => SOFTWARE_ENGINEER,
        Role::DataScientist => DATA_SCIENTIST,
        Role::MachineLearningEngineer => MACHINE_LEARNING_ENGINEER,
        Role::FullStackDeveloper => FULL_STACK_DEVELOPER,
        Role::BackendDeveloper => BACKEND_DEVELOPER,
        Role::FrontendDeveloper => FRONTEND_DEVELOPER,
        Role::DevOpsEngineer => DEVOPS_ENGINEER,
        Role::CloudArchitect => CLOUD_ARCHITECT,
        Role::MobileDeveloper => MOBILE_DEVELOPER,
        Role::QaEngineer => QA_ENGINEER,
        Role::ProductManager => PRODUCT_MANAGER,
        Role::UiUxDesigner => UI_UX_DESIGNER,
        Role::DataEngineer => DATA_ENGINEER,
        Role::SecurityEngineer => SECURITY_ENGINEER,
        Role::SystemAdministrator => &[],
    }
}

/// Serves postings from the built-in table.
///
/// Requested roles without samples contribute nothing; when no requested role
/// has samples the Software Engineer postings are returned instead. The remote
/// flag keeps only postings whose location mentions "remote".
#[derive(Debug, Default, Clone, Copy)]
pub struct MockJobBoard;

#[async_trait]
impl JobSource for MockJobBoard {
    async fn fetch(&self, query: &JobQuery) -> anyhow::Result<Vec<JobPosting>> {
        let mut samples: Vec<&SamplePosting> = query
            .roles
            .iter()
            .flat_map(|role| samples_for(*role))
            .collect();

        if samples.is_empty() {
            samples = SOFTWARE_ENGINEER.iter().collect();
        }

        let postings: Vec<JobPosting> = samples
            .into_iter()
            .filter(|s| !query.remote_only || s.location.to_lowercase().contains("remote"))
            .map(SamplePosting::to_posting)
            .collect();

        debug!(
            "Mock board returning {} postings for query '{}'",
            postings.len(),
            query.search_term
        );
        Ok(postings)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn query(roles: &[Role], remote_only: bool) -> JobQuery {
        JobQuery {
            roles: roles.to_vec(),
            search_term: String::new(),
            remote_only,
            experience: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_single_role() {
        let postings = MockJobBoard.fetch(&query(&[Role::BackendDeveloper], false)).await.unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].job_id, "bd_001");
    }

    #[tokio::test]
    async fn test_fetch_keeps_role_order() {
        let postings = MockJobBoard
            .fetch(&query(&[Role::UiUxDesigner, Role::DataScientist], false))
            .await
            .unwrap();
        let ids: Vec<&str> = postings.iter().map(|p| p.job_id.as_str()).collect();
        assert_eq!(ids, vec!["ux_001", "ux_002", "ds_001"]);
    }

    #[tokio::test]
    async fn test_roles_without_samples_fall_back_to_software_engineer() {
        let postings = MockJobBoard
            .fetch(&query(&[Role::SystemAdministrator], false))
            .await
            .unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].job_id, "se_001");

        let none = MockJobBoard.fetch(&query(&[], false)).await.unwrap();
        assert_eq!(none[0].job_id, "se_001");
    }

    #[tokio::test]
    async fn test_remote_only_filters_by_location() {
        let postings = MockJobBoard
            .fetch(&query(&[Role::UiUxDesigner, Role::DataScientist], true))
            .await
            .unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].job_id, "ux_002");
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let mut ids = HashSet::new();
        for role in Role::ALL {
            for sample in samples_for(role) {
                assert!(ids.insert(sample.job_id), "duplicate id {}", sample.job_id);
            }
        }
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn test_source_name() {
        assert_eq!(MockJobBoard.name(), "mock");
    }
}
