//! Precomputed fallback results, substituted when a live upstream call fails.
//! These must stay shape-compatible with the live paths: every fixture is a
//! value of the same type the corresponding handler returns.

use crate::models::guidance::{GuidanceCourse, JobPlatform, PersonalizedGuidance};
use crate::models::market::{
    AnalysisResult, CourseRef, GrowthTrend, MarketOverview, SkillTrend, TrendingJob,
};
use crate::models::recommendation::{
    CareerPathStep, DetailedRecommendation, GrowthPlan, GrowthPlanActionItem, GrowthPlanKpi,
    TargetCompany,
};

/// Message attached to a recommendation response when the sample result was
/// substituted for a failed stream.
pub const FALLBACK_NOTE: &str =
    "An error occurred while streaming. Displaying a sample result.";

pub fn sample_market_overview() -> MarketOverview {
    MarketOverview {
        trending_jobs: sample_trending_jobs(),
        top_skills: sample_top_skills(),
    }
}

pub fn sample_trending_jobs() -> Vec<TrendingJob> {
    vec![
        TrendingJob {
            title: "AI/ML Engineer".to_string(),
            salary_range: "₹15-25 LPA".to_string(),
            growth: GrowthTrend::Hot,
            top_industries: strings(&["SaaS", "FinTech", "HealthTech"]),
            key_skills: strings(&["Python", "TensorFlow", "Cloud (AWS/GCP)"]),
        },
        TrendingJob {
            title: "Full Stack Developer".to_string(),
            salary_range: "₹10-18 LPA".to_string(),
            growth: GrowthTrend::Growing,
            top_industries: strings(&["E-commerce", "SaaS", "Startups"]),
            key_skills: strings(&["React", "Node.js", "SQL/NoSQL"]),
        },
        TrendingJob {
            title: "Cloud Solutions Architect".to_string(),
            salary_range: "₹20-35 LPA".to_string(),
            growth: GrowthTrend::Hot,
            top_industries: strings(&["IT Services", "Enterprise Software", "Banking"]),
            key_skills: strings(&["AWS", "Azure", "Terraform"]),
        },
        TrendingJob {
            title: "Data Scientist".to_string(),
            salary_range: "₹12-22 LPA".to_string(),
            growth: GrowthTrend::Growing,
            top_industries: strings(&["Analytics", "Retail", "Consulting"]),
            key_skills: strings(&["SQL", "Python", "Machine Learning"]),
        },
        TrendingJob {
            title: "Cybersecurity Analyst".to_string(),
            salary_range: "₹8-15 LPA".to_string(),
            growth: GrowthTrend::Growing,
            top_industries: strings(&["Banking", "IT Services", "Government"]),
            key_skills: strings(&["SIEM", "Network Security", "Pen Testing"]),
        },
        TrendingJob {
            title: "Product Manager".to_string(),
            salary_range: "₹18-30 LPA".to_string(),
            growth: GrowthTrend::Stable,
            top_industries: strings(&["SaaS", "Consumer Tech", "B2B"]),
            key_skills: strings(&["Roadmapping", "Agile", "User Research"]),
        },
    ]
}

pub fn sample_top_skills() -> Vec<String> {
    strings(&[
        "Artificial Intelligence",
        "Cloud Computing",
        "Data Structures & Algorithms",
        "Cybersecurity",
        "UI/UX Design",
        "Product Management",
        "Communication",
        "Adaptability",
    ])
}

pub fn sample_analysis_result() -> AnalysisResult {
    AnalysisResult {
        job_title: "Software Engineer".to_string(),
        summary: "Software engineering remains one of the most resilient roles in the \
                  Indian market, with steady demand across services, product companies, \
                  and well-funded startups."
            .to_string(),
        trending_skills: vec![
            SkillTrend {
                name: "System Design".to_string(),
                description: "Interviews at product companies lean heavily on designing \
                              scalable services."
                    .to_string(),
                relevance: 9,
            },
            SkillTrend {
                name: "Cloud Platforms".to_string(),
                description: "Most postings expect hands-on AWS, Azure, or GCP experience."
                    .to_string(),
                relevance: 8,
            },
            SkillTrend {
                name: "Containers & Kubernetes".to_string(),
                description: "Deployment and orchestration skills show up across mid and \
                              senior listings."
                    .to_string(),
                relevance: 7,
            },
        ],
        recommended_courses: vec![
            CourseRef {
                title: "Grokking the System Design Interview".to_string(),
                platform: "Educative".to_string(),
                url: "https://www.educative.io/courses/grokking-the-system-design-interview"
                    .to_string(),
                description: "Structured walkthroughs of common large-scale design problems."
                    .to_string(),
            },
            CourseRef {
                title: "AWS Certified Solutions Architect".to_string(),
                platform: "Coursera".to_string(),
                url: "https://www.coursera.org/learn/aws-certified-solutions-architect-associate"
                    .to_string(),
                description: "Covers the cloud fundamentals most employers screen for."
                    .to_string(),
            },
        ],
    }
}

pub fn sample_detailed_recommendation() -> DetailedRecommendation {
    DetailedRecommendation {
        summary: "A progression from backend engineer to staff-level systems architect \
                  over the next eight years, anchored in distributed systems depth and \
                  steadily broader ownership."
            .to_string(),
        career_path: vec![
            CareerPathStep {
                title: "Backend Engineer".to_string(),
                duration: "Years 0-2".to_string(),
                summary: "Ship production services, own on-call for what you build, and \
                          get fluent in one cloud platform."
                    .to_string(),
                skills_to_master: strings(&["Rust or Go", "PostgreSQL", "Docker", "AWS"]),
                potential_salary: "₹8-14 LPA".to_string(),
                target_companies: Some(vec![
                    TargetCompany {
                        company_name: "Razorpay".to_string(),
                        roles: strings(&["Software Engineer", "Backend Engineer"]),
                        estimated_package_lpa: "₹12-18 LPA".to_string(),
                        required_skills: strings(&["APIs", "SQL", "Distributed Systems basics"]),
                    },
                    TargetCompany {
                        company_name: "Infosys".to_string(),
                        roles: strings(&["Systems Engineer"]),
                        estimated_package_lpa: "₹4-6 LPA".to_string(),
                        required_skills: strings(&["Java", "SQL", "Problem Solving"]),
                    },
                    TargetCompany {
                        company_name: "Zoho".to_string(),
                        roles: strings(&["Member Technical Staff"]),
                        estimated_package_lpa: "₹6-10 LPA".to_string(),
                        required_skills: strings(&["Java or C", "Data Structures", "Linux"]),
                    },
                ]),
            },
            CareerPathStep {
                title: "Senior Backend Engineer".to_string(),
                duration: "Years 2-5".to_string(),
                summary: "Lead the design of multi-service features, mentor juniors, and \
                          build a reputation for reliable delivery."
                    .to_string(),
                skills_to_master: strings(&[
                    "System Design",
                    "Kubernetes",
                    "Observability",
                    "Technical Writing",
                ]),
                potential_salary: "₹20-35 LPA".to_string(),
                target_companies: None,
            },
            CareerPathStep {
                title: "Staff Engineer / Systems Architect".to_string(),
                duration: "Years 5-8".to_string(),
                summary: "Own architecture across teams, set technical direction, and \
                          drive the hardest cross-cutting projects."
                    .to_string(),
                skills_to_master: strings(&[
                    "Architecture Reviews",
                    "Capacity Planning",
                    "Cross-team Leadership",
                ]),
                potential_salary: "₹45-70 LPA".to_string(),
                target_companies: None,
            },
        ],
        linkedin_enhancements: None,
        github_enhancements: None,
        linkedin_analysis: None,
        github_analysis: None,
        growth_plan: Some(GrowthPlan {
            readiness_score: 62,
            kpis: vec![
                GrowthPlanKpi {
                    name: "Technical Skill Alignment".to_string(),
                    score: 70,
                    summary: "Core language skills are in place; cloud and orchestration \
                              experience is the gap."
                        .to_string(),
                },
                GrowthPlanKpi {
                    name: "Project Experience Quality".to_string(),
                    score: 55,
                    summary: "Projects demonstrate breadth but lack deployed, user-facing \
                              evidence."
                        .to_string(),
                },
                GrowthPlanKpi {
                    name: "Professional Branding".to_string(),
                    score: 60,
                    summary: "Profiles exist but are not keyword-optimized for the target \
                              role."
                        .to_string(),
                },
            ],
            action_items: vec![
                GrowthPlanActionItem {
                    description: "Deploy one existing project publicly and link it from \
                                  your profiles."
                        .to_string(),
                },
                GrowthPlanActionItem {
                    description: "Earn an entry-level cloud certification (AWS CCP or \
                                  equivalent)."
                        .to_string(),
                },
                GrowthPlanActionItem {
                    description: "Write a short post-mortem or design write-up for your \
                                  strongest project."
                        .to_string(),
                },
            ],
        }),
    }
}

pub fn sample_personalized_guidance() -> PersonalizedGuidance {
    PersonalizedGuidance {
        recommended_courses: vec![
            GuidanceCourse {
                title: "Meta Back-End Developer Professional Certificate".to_string(),
                platform: "Coursera".to_string(),
                url: "https://www.coursera.org/professional-certificates/meta-back-end-developer"
                    .to_string(),
                reason: "Rounds out practical backend fundamentals with a recognized \
                         credential."
                    .to_string(),
            },
            GuidanceCourse {
                title: "Docker & Kubernetes: The Practical Guide".to_string(),
                platform: "Udemy".to_string(),
                url: "https://www.udemy.com/course/docker-kubernetes-the-practical-guide/"
                    .to_string(),
                reason: "Deployment skills multiply the value of every project you already \
                         have."
                    .to_string(),
            },
            GuidanceCourse {
                title: "CS50's Introduction to Databases".to_string(),
                platform: "edX".to_string(),
                url: "https://www.edx.org/learn/databases".to_string(),
                reason: "Deepens the data modeling skills most backend interviews probe."
                    .to_string(),
            },
        ],
        job_platforms: vec![
            JobPlatform {
                name: "LinkedIn".to_string(),
                url: "https://www.linkedin.com/jobs".to_string(),
                reason: "Largest volume of Indian tech postings and recruiter outreach."
                    .to_string(),
            },
            JobPlatform {
                name: "Naukri.com".to_string(),
                url: "https://www.naukri.com".to_string(),
                reason: "Strong coverage of services companies and mid-size Indian firms."
                    .to_string(),
            },
            JobPlatform {
                name: "Wellfound".to_string(),
                url: "https://wellfound.com".to_string(),
                reason: "Best reach into funded startups hiring for hands-on roles."
                    .to_string(),
            },
        ],
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_recommendation_satisfies_milestones() {
        let sample = sample_detailed_recommendation();
        assert!(!sample.summary.is_empty());
        assert!(!sample.career_path.is_empty());
        assert!(sample.growth_plan.is_some());
        // Target companies only on the first step.
        assert!(sample.career_path[0].target_companies.is_some());
        assert!(sample.career_path[1..]
            .iter()
            .all(|step| step.target_companies.is_none()));
    }

    #[test]
    fn test_sample_overview_counts() {
        let overview = sample_market_overview();
        assert_eq!(overview.trending_jobs.len(), 6);
        assert_eq!(overview.top_skills.len(), 8);
    }

    #[test]
    fn test_sample_recommendation_serializes_with_wire_keys() {
        let json = serde_json::to_value(sample_detailed_recommendation()).unwrap();
        assert!(json.get("careerPath").is_some());
        assert!(json.get("growthPlan").is_some());
        // Absent optional sections are omitted, not null.
        assert!(json.get("linkedinEnhancements").is_none());
    }

    #[test]
    fn test_sample_readiness_scores_in_range() {
        let plan = sample_detailed_recommendation().growth_plan.unwrap();
        assert!(plan.readiness_score <= 100);
        assert!(plan.kpis.iter().all(|kpi| kpi.score <= 100));
    }
}
