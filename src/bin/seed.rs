use anyhow::Context;
use tracing::info;

use portfolio_api::{
    db::postgres::{create_pool, run_migrations},
    entities::{
        project::NewProject,
        skill::{NewSkill, NewSkillCategory},
    },
    settings::AppConfig,
    AppState,
};

struct SeedCategory {
    name: &'static str,
    order: i32,
    skills: &'static [(&'static str, i32, i32)],
}

fn seed_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "E-commerce Platform".into(),
            description: "A fully responsive e-commerce platform with product filtering, user authentication, and payment integration.".into(),
            image_url: "https://images.unsplash.com/photo-1523206489230-c012c64b2b48?auto=format&fit=crop&w=600&h=400".into(),
            demo_url: "#".into(),
            github_url: "https://github.com".into(),
            technologies: vec!["React".into(), "Node.js".into(), "MongoDB".into()],
            featured: true,
        },
        NewProject {
            title: "Analytics Dashboard".into(),
            description: "Real-time analytics dashboard with customizable widgets, data visualization, and export features.".into(),
            image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=600&h=400".into(),
            demo_url: "#".into(),
            github_url: "https://github.com".into(),
            technologies: vec!["Vue.js".into(), "D3.js".into(), "Firebase".into()],
            featured: true,
        },
        NewProject {
            title: "Fitness Tracking App".into(),
            description: "Mobile application for tracking workouts, nutrition, and fitness progress with social features.".into(),
            image_url: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?auto=format&fit=crop&w=600&h=400".into(),
            demo_url: "#".into(),
            github_url: "https://github.com".into(),
            technologies: vec!["React Native".into(), "GraphQL".into(), "AWS".into()],
            featured: true,
        },
    ]
}

const SEED_CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        name: "Frontend Development",
        order: 1,
        skills: &[
            ("JavaScript / TypeScript", 95, 1),
            ("React / Vue.js", 90, 2),
            ("HTML5 / CSS3", 98, 3),
            ("Tailwind / SASS", 85, 4),
        ],
    },
    SeedCategory {
        name: "Backend Development",
        order: 2,
        skills: &[
            ("Node.js / Express", 92, 1),
            ("Python / Django", 80, 2),
            ("SQL / NoSQL Databases", 88, 3),
            ("GraphQL / REST APIs", 85, 4),
        ],
    },
    SeedCategory {
        name: "Other Skills & Tools",
        order: 3,
        skills: &[
            ("Git", 90, 1),
            ("Docker", 85, 2),
            ("AWS", 80, 3),
            ("Figma", 75, 4),
            ("Jest", 85, 5),
            ("CI/CD", 80, 6),
            ("Webpack", 70, 7),
            ("Redux", 85, 8),
            ("Firebase", 80, 9),
            ("WordPress", 70, 10),
        ],
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::new().context("Failed to load configuration")?;

    let pool = create_pool(&config.database_url)
        .await
        .context("Failed to create database connection pool")?;

    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let state = AppState::new(pool);

    info!("Starting to seed database...");

    if state.project_handler.count_projects().await? == 0 {
        for project in seed_projects() {
            state.project_handler.create_project(project).await?;
        }
        info!("Projects seeded successfully");
    } else {
        info!("Projects already exist, skipping seeding");
    }

    if state.skill_handler.count_categories().await? == 0 {
        for seed_category in SEED_CATEGORIES {
            let category = state
                .skill_handler
                .create_category(NewSkillCategory {
                    name: seed_category.name.into(),
                    order: seed_category.order,
                })
                .await?;

            for &(name, percentage, order) in seed_category.skills {
                state
                    .skill_handler
                    .create_skill(NewSkill {
                        name: name.into(),
                        percentage,
                        category_id: category.id,
                        order,
                    })
                    .await?;
            }
        }
        info!("Skill categories and skills seeded successfully");
    } else {
        info!("Skill categories already exist, skipping seeding");
    }

    info!("Seed completed successfully");
    Ok(())
}
