//! Static technology dictionary: category → keywords + display color.
//!
//! A keyword listed under several categories belongs to the first one in
//! `Category::ALL` order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Frontend,
    Backend,
    Database,
    DevOps,
    #[serde(rename = "AI_ML")]
    AiMl,
    Mobile,
    Testing,
    Cloud,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Frontend,
        Category::Backend,
        Category::Database,
        Category::DevOps,
        Category::AiMl,
        Category::Mobile,
        Category::Testing,
        Category::Cloud,
        Category::Other,
    ];

    /// Hex color used for this category's stars and UI chips.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Frontend => "#DD0031",
            Category::Backend => "#009688",
            Category::Database => "#4479A1",
            Category::DevOps => "#326CE5",
            Category::AiMl => "#FF6F00",
            Category::Mobile => "#02569B",
            Category::Testing => "#99425B",
            Category::Cloud => "#FF9900",
            Category::Other => "#808080",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Frontend => FRONTEND,
            Category::Backend => BACKEND,
            Category::Database => DATABASE,
            Category::DevOps => DEVOPS,
            Category::AiMl => AI_ML,
            Category::Mobile => MOBILE,
            Category::Testing => TESTING,
            Category::Cloud => CLOUD,
            Category::Other => OTHER,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Keyword tables
// ────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
static FRONTEND: &[&str] = &[
    "angular", "react", "vue", "vuejs", "svelte", "nextjs", "next.js", "nuxt", "nuxtjs",
    "ember", "backbone", "jquery", "typescript", "javascript", "js", "ts", "html", "html5",
    "css", "css3", "sass", "scss", "less", "tailwind", "tailwindcss", "bootstrap",
    "material-ui", "mui", "chakra", "styled-components", "webpack", "vite", "parcel",
    "rollup", "esbuild", "rxjs", "ngrx", "redux", "mobx", "vuex", "pinia", "zustand",
    "webcomponents", "web components", "lit", "stencil",
];

#[rustfmt::skip]
static BACKEND: &[&str] = &[
    "fastapi", "django", "flask", "tornado", "pyramid", "bottle", "aiohttp", "sanic", "quart",
    "nodejs", "node.js", "express", "expressjs", "nestjs", "koa", "hapi", "fastify", "adonis",
    "adonisjs", "spring", "spring boot", "springboot", "java", "hibernate", "quarkus",
    "micronaut", "c#", "csharp", ".net", "dotnet", "asp.net", "aspnet", "php", "laravel",
    "symfony", "codeigniter", "yii", "cakephp", "ruby", "rails", "ruby on rails", "sinatra",
    "go", "golang", "gin", "echo", "fiber", "rust", "actix", "rocket", "axum", "graphql",
    "rest", "rest api", "grpc", "websocket",
];

#[rustfmt::skip]
static DATABASE: &[&str] = &[
    "postgresql", "postgres", "mysql", "mariadb", "sqlite", "sql server", "mssql", "oracle",
    "db2", "mongodb", "mongo", "couchdb", "couchbase", "redis", "memcached", "dynamodb",
    "cassandra", "hbase", "scylla", "neo4j", "arangodb", "dgraph", "elasticsearch",
    "opensearch", "solr", "influxdb", "timescaledb", "prometheus", "firebase", "firestore",
    "supabase",
];

#[rustfmt::skip]
static DEVOPS: &[&str] = &[
    "docker", "podman", "containerd", "kubernetes", "k8s", "openshift", "nomad",
    "docker swarm", "rancher", "helm", "kustomize", "jenkins", "gitlab ci", "github actions",
    "circleci", "travis", "bamboo", "teamcity", "azure devops", "argocd", "flux", "terraform",
    "terragrunt", "pulumi", "cloudformation", "ansible", "puppet", "chef", "salt", "saltstack",
    "aws", "azure", "gcp", "google cloud", "digitalocean", "heroku", "vercel", "netlify",
    "cloudflare", "grafana", "prometheus", "datadog", "new relic", "dynatrace", "elk",
    "elasticsearch", "logstash", "kibana", "splunk", "nginx", "apache", "traefik", "haproxy",
    "envoy", "linux", "ubuntu", "debian", "centos", "rhel", "alpine", "git", "github",
    "gitlab", "bitbucket", "ci/cd",
];

#[rustfmt::skip]
static AI_ML: &[&str] = &[
    "tensorflow", "pytorch", "keras", "scikit-learn", "sklearn", "jax", "mxnet", "caffe",
    "theano", "openai", "gpt", "llm", "gemini", "claude", "mistral", "langchain",
    "llamaindex", "huggingface", "transformers", "nlp", "natural language processing",
    "spacy", "nltk", "bert", "gpt-3", "gpt-4", "opencv", "computer vision", "yolo",
    "detectron", "pandas", "numpy", "scipy", "matplotlib", "seaborn", "plotly", "jupyter",
    "notebook", "mlflow", "kubeflow", "airflow", "prefect", "vertex ai", "sagemaker",
    "azure ml", "databricks", "deep learning", "machine learning", "reinforcement learning",
    "neural network", "gan",
];

#[rustfmt::skip]
static MOBILE: &[&str] = &[
    "flutter", "react native", "ionic", "cordova", "capacitor", "xamarin", "nativescript",
    "swift", "swiftui", "objective-c", "ios", "xcode", "kotlin", "android", "java",
    "jetpack compose", "dart", "mobile", "app development",
];

#[rustfmt::skip]
static TESTING: &[&str] = &[
    "jest", "jasmine", "mocha", "chai", "karma", "ava", "cypress", "playwright", "selenium",
    "puppeteer", "testcafe", "pytest", "unittest", "nose", "behave", "junit", "testng",
    "mockito", "testing", "test automation", "tdd", "bdd", "sonarqube", "sonar", "eslint",
    "prettier", "black",
];

#[rustfmt::skip]
static CLOUD: &[&str] = &[
    "s3", "ec2", "lambda", "rds", "dynamodb", "cloudfront", "route53", "elb", "ecs", "eks",
    "fargate", "cloud run", "cloud functions", "bigquery", "cloud storage", "app engine",
    "compute engine", "gke", "azure functions", "cosmos db", "blob storage", "aks",
    "serverless", "cloud computing", "iaas", "paas", "saas",
];

#[rustfmt::skip]
static OTHER: &[&str] = &[
    "git", "svn", "mercurial", "scrum", "agile", "kanban", "jira", "confluence", "trello",
    "asana", "notion", "microservices", "monolith", "event-driven", "cqrs",
    "domain-driven design", "ddd", "clean architecture", "http", "https", "tcp", "udp",
    "mqtt", "amqp", "oauth", "jwt", "ssl", "tls", "authentication", "authorization", "api",
    "sdk", "cli",
];
