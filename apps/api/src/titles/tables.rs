//! Title banks and prompt color hints.

use crate::analysis::Category;

pub const FALLBACK_TITLE: &str = "The Constellation of Universal Code";

#[rustfmt::skip]
pub(super) static FULLSTACK_TITLES: [&str; 12] = [
    "The Architect of Two Worlds",
    "The Complete Constellation",
    "The Bridge Between the Stars",
    "The Perfect Balance of Code",
    "The Full-Stack Symphony",
    "The Weaver of Architectures",
    "The Master of Connected Galaxies",
    "The Fusion of Frontend and Backend",
    "The Oracle of Total Architecture",
    "The Keepers of the Universal Stack",
    "The Milky Way of Complete Code",
    "The Nexus of Infinite Skills",
];

pub(super) fn category_titles(category: Category) -> &'static [&'static str; 12] {
    match category {
        Category::Frontend => &FRONTEND_TITLES,
        Category::Backend => &BACKEND_TITLES,
        Category::Database => &DATABASE_TITLES,
        Category::DevOps => &DEVOPS_TITLES,
        Category::AiMl => &AI_ML_TITLES,
        Category::Mobile => &MOBILE_TITLES,
        Category::Testing => &TESTING_TITLES,
        Category::Cloud => &CLOUD_TITLES,
        Category::Other => &OTHER_TITLES,
    }
}

/// Palette phrase inserted into the background prompt.
pub(super) fn color_hint(category: Category) -> &'static str {
    match category {
        Category::Frontend => "warm colors (red, orange, gold)",
        Category::Backend => "cool colors (blue, teal, cyan)",
        Category::Database => "structured colors (blue, purple, silver)",
        Category::DevOps => "technical colors (blue, green, cyan)",
        Category::AiMl => "vibrant colors (purple, magenta, pink)",
        Category::Mobile => "dynamic colors (blue, green, orange)",
        Category::Testing => "precise colors (green, blue, white)",
        Category::Cloud => "ethereal colors (white, blue, cyan)",
        Category::Other => "multicolor spectrum",
    }
}

#[rustfmt::skip]
static FRONTEND_TITLES: [&str; 12] = [
    "The Constellation of the Perfect Pixel",
    "The Silver Star of Interfaces",
    "The Nebula of Visual Experience",
    "The Luminous Forges of the Frontend",
    "The Sanctuary of Enchanted Screens",
    "The Weavers of the Celestial Interface",
    "The Galaxy of Animated Pixels",
    "The Temple of User Experience",
    "The Magicians of Reactivity",
    "The Workshop of Interactive Screens",
    "The Constellation of Components",
    "The Artisans of Visual Rendering",
];

#[rustfmt::skip]
static BACKEND_TITLES: [&str; 12] = [
    "The Backend Forges of Orion",
    "The Nebula of Invisible Architectures",
    "The Keeper of the Server Constellation",
    "The Stellar Ring of APIs",
    "The Cosmic Pillars of Code",
    "The Architects of the Invisible",
    "The Citadel of Servers",
    "The Neural Network of Microservices",
    "The Keepers of the Cosmic Cache",
    "The Ecosystem of Endpoints",
    "The Builders of Server Logic",
    "The Matrix of Asynchronous Work",
];

#[rustfmt::skip]
static DATABASE_TITLES: [&str; 12] = [
    "The Sanctuary of Eternal Data",
    "The Constellation of Sacred Schemas",
    "The Stellar Vaults of Information",
    "The Nebula of Infinite Queries",
    "The Keeper of the Data Milky Way",
    "The Universe of ACID Transactions",
    "The Masters of Galactic Indexes",
    "The Temple of Eternal Relations",
    "The Cosmic Library of Storage",
    "The Architects of NoSQL Schemas",
    "The Fortress of Persistent Data",
    "The Network of Stellar Replicas",
];

#[rustfmt::skip]
static DEVOPS_TITLES: [&str; 12] = [
    "The Stellar DevOps Chain",
    "The Keeper of the Cosmic Paths",
    "The Constellation of Continuous Deployment",
    "The Sentinels of Infrastructure",
    "The Ring of Automatic Pipelines",
    "The Orchestrators of Space Containers",
    "The Nebula of Automation",
    "The Network of Instant Deployments",
    "The Keepers of Stellar Monitoring",
    "The Galactic CI/CD Ecosystem",
    "The Masters of Infrastructure as Code",
    "The Way of Continuous Delivery",
];

#[rustfmt::skip]
static AI_ML_TITLES: [&str; 12] = [
    "The Nebula of Artificial Intelligence",
    "The Forges of Quantum Algorithms",
    "The Constellation of Predictive Models",
    "The Sanctuary of Machine Learning",
    "The Scouts of Data Science",
    "The Architects of Neural Networks",
    "The Matrix of Cosmic Transformers",
    "The Temple of Deep Learning",
    "The Alchemists of Data",
    "The Galaxy of Generative Models",
    "The Masters of Gradient Descent",
    "The Universe of Augmented Intelligence",
];

#[rustfmt::skip]
static MOBILE_TITLES: [&str; 12] = [
    "The Constellation of Nomad Interfaces",
    "The Touch Star of Mobile",
    "The Navigators of Portable Space",
    "The Nebula of Mobile Applications",
    "The Sanctuary of Mobile Experiences",
    "The Artisans of Touch Screens",
    "The Galaxy of Native Apps",
    "The Network of Hybrid Experiences",
    "The Masters of Responsive Design",
    "The Universe of Progressive Web Apps",
    "The Cross-Platform Architects",
    "The Way of Gesture Interfaces",
];

#[rustfmt::skip]
static TESTING_TITLES: [&str; 12] = [
    "The Keeper of Stellar Quality",
    "The Constellation of Infallible Tests",
    "The Sentinels of Reliability",
    "The Ring of Continuous Validation",
    "The Scouts of Code Quality",
    "The Architects of Test Suites",
    "The Nebula of Test-Driven Development",
    "The Network of Cosmic Assertions",
    "The Masters of Total Coverage",
    "The Universe of End-to-End Tests",
    "The Keepers of Non-Regression",
    "The Way of Quality Assurance",
];

#[rustfmt::skip]
static CLOUD_TITLES: [&str; 12] = [
    "The Nebula of Infinite Clouds",
    "The Masters of Celestial Infrastructure",
    "The Constellation of Cosmic Scale",
    "The Keepers of the Cloud Vault",
    "The Ring of Distributed Services",
    "The Multi-Cloud Architects",
    "The Galaxy of Serverless Functions",
    "The Network of Elastic Instances",
    "The Orchestrators of Kubernetes Clusters",
    "The Universe of Cloud Abstraction",
    "The Masters of Infinite Scale",
    "The Way of Immutable Infrastructure",
];

#[rustfmt::skip]
static OTHER_TITLES: [&str; 12] = [
    "The Constellation of Universal Code",
    "The Forges of Digital Innovation",
    "The Nebula of Hybrid Solutions",
    "The Technological Sanctuary",
    "The Navigators of the Digital Cosmos",
    "The Pioneers of Emerging Technologies",
    "The Galaxy of Versatile Skills",
    "The Network of Connected Knowledge",
    "The Explorers of Multidisciplinary Code",
    "The Universe of Disruptive Innovation",
    "The Architects of the Digital Future",
    "The Way of Technical Mastery",
];
