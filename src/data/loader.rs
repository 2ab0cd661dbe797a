use std::convert::Infallible;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::Question;

pub const DEFAULT_QUESTIONS_SOURCE: &str = "quiz.json";

/// Errors that can occur while loading the question set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(StatusCode),
    #[error("invalid question data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("loading stopped before producing a result")]
    Interrupted,
}

/// Where the question set is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    File(PathBuf),
    Url(String),
}

impl FromStr for QuestionSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(Self::Url(s.to_string()))
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl Default for QuestionSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_QUESTIONS_SOURCE))
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Fetch and parse the question set, in file order.
pub async fn fetch_questions(source: &QuestionSource) -> Result<Vec<Question>, LoadError> {
    debug!(%source, "fetching questions");

    let body = match source {
        QuestionSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|err| LoadError::Read {
                    path: path.clone(),
                    source: err,
                })?
        }
        QuestionSource::Url(url) => {
            let response = reqwest::get(url).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status(status));
            }
            response.text().await?
        }
    };

    let questions = parse_questions(&body)?;
    info!(%source, count = questions.len(), "loaded questions");
    Ok(questions)
}

/// Parse a JSON array of question records.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    Ok(serde_json::from_str(json)?)
}
