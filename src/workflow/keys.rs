//! Selection keys
//!
//! The three enumerations that address a workflow template: source
//! language, deployment platform, and framework (or service flavour).
//! Their lowercase serialized forms are the stable wire and storage
//! representation, so renaming a variant is a breaking change.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source language (or container tooling) a workflow targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python applications.
    Python,
    /// Node.js applications.
    Nodejs,
    /// Java applications.
    Java,
    /// Go applications.
    Go,
    /// Container image builds.
    Docker,
}

impl Language {
    /// All languages, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Python,
        Self::Nodejs,
        Self::Java,
        Self::Go,
        Self::Docker,
    ];

    /// Lowercase key used in tokens, records, and filenames.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Nodejs => "nodejs",
            Self::Java => "java",
            Self::Go => "go",
            Self::Docker => "docker",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment platform a workflow targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Azure App Service, Static Web Apps, Container Apps, ACR.
    Azure,
    /// AWS Elastic Beanstalk, Lambda, EC2, S3, ECR, ECS.
    Aws,
    /// Heroku.
    Heroku,
    /// Docker Hub registry. Only legal for [`Language::Docker`].
    Dockerhub,
}

impl Platform {
    /// Lowercase key used in tokens, records, and filenames.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Azure => "azure",
            Self::Aws => "aws",
            Self::Heroku => "heroku",
            Self::Dockerhub => "dockerhub",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Framework or service flavour within a (language, platform) pair.
///
/// The set of legal values is conditional on the full pair, never on the
/// language alone; see [`frameworks_for`](crate::workflow::frameworks_for).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Python: Flask.
    Flask,
    /// Python: Django.
    Django,
    /// Python: FastAPI.
    Fastapi,
    /// Node.js: Express.
    Express,
    /// Node.js: Next.js.
    Nextjs,
    /// Node.js: React.
    React,
    /// Java: Spring Boot.
    Springboot,
    /// Java: plain Maven build.
    Maven,
    /// Java: plain Gradle build.
    Gradle,
    /// Go: web application deployment.
    Webapp,
    /// Go or Docker: container app deployment.
    Containerapp,
    /// Go on AWS: Lambda function.
    Lambda,
    /// Go on AWS: EC2 host.
    Ec2,
    /// Docker: Azure Container Registry push.
    Acr,
    /// Docker: AWS ECR push.
    Ecr,
    /// Docker: AWS ECS deployment.
    Ecs,
    /// Docker on Docker Hub: image build and push.
    Build,
}

impl Framework {
    /// Lowercase key used in tokens, records, and filenames.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flask => "flask",
            Self::Django => "django",
            Self::Fastapi => "fastapi",
            Self::Express => "express",
            Self::Nextjs => "nextjs",
            Self::React => "react",
            Self::Springboot => "springboot",
            Self::Maven => "maven",
            Self::Gradle => "gradle",
            Self::Webapp => "webapp",
            Self::Containerapp => "containerapp",
            Self::Lambda => "lambda",
            Self::Ec2 => "ec2",
            Self::Acr => "acr",
            Self::Ecr => "ecr",
            Self::Ecs => "ecs",
            Self::Build => "build",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_serializes_lowercase() {
        let json = serde_json::to_string(&Language::Nodejs).unwrap();
        assert_eq!(json, "\"nodejs\"");
    }

    #[test]
    fn test_platform_round_trips() {
        for platform in [
            Platform::Azure,
            Platform::Aws,
            Platform::Heroku,
            Platform::Dockerhub,
        ] {
            let json = serde_json::to_string(&platform).unwrap();
            let back: Platform = serde_json::from_str(&json).unwrap();
            assert_eq!(back, platform);
        }
    }

    #[test]
    fn test_display_matches_serialized_form() {
        let json = serde_json::to_string(&Framework::Springboot).unwrap();
        assert_eq!(json, format!("\"{}\"", Framework::Springboot));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result: Result<Language, _> = serde_json::from_str("\"cobol\"");
        assert!(result.is_err());
    }
}
