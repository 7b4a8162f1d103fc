//! The GitHub client: one REST/GraphQL accessor per upstream source.

use crate::config::GithubConfig;
use crate::models::{
    CommitDetailResponse, CommitSearchResponse, GraphqlResponse, SearchCountResponse,
};
use async_trait::async_trait;
use devpulse_core::ports::ActivitySource;
use devpulse_core::snapshot::ContributionCalendar;
use devpulse_core::upstream::{
    CommitRecord, CommitSearchHit, EventRecord, Profile, RepoRecord, SourceResult,
};
use devpulse_core::{Error, Identity, Result};
use tracing::{debug, warn};

const CALENDAR_QUERY: &str = "query($login: String!) {
  user(login: $login) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
            weekday
          }
        }
      }
    }
  }
}";

/// Upstream client set backed by the GitHub REST and GraphQL APIs.
pub struct GithubClient {
    config: GithubConfig,
    client: reqwest::Client,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_default();
        Self { config, client }
    }

    fn get(&self, identity: &Identity, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{}", self.config.api_url, path))
            .bearer_auth(identity.token())
            .header("Accept", "application/vnd.github+json")
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        source: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::upstream(source, e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream(source, format!("{}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| Error::invalid_response(source, e.to_string()))
    }

    async fn try_events(&self, identity: &Identity) -> Result<Vec<EventRecord>> {
        let path = format!("/users/{}/events?per_page=100", identity.login);
        self.fetch_json("events", self.get(identity, &path)).await
    }

    async fn try_search_commits(&self, identity: &Identity) -> Result<Vec<CommitSearchHit>> {
        let path = format!(
            "/search/commits?q=author:{}&sort=author-date&order=desc&per_page=100",
            identity.login
        );
        let request = self
            .get(identity, &path)
            .header("Accept", "application/vnd.github.cloak-preview");
        let response: CommitSearchResponse = self.fetch_json("commit-search", request).await?;
        Ok(response.items)
    }

    async fn try_calendar(&self, identity: &Identity) -> Result<Option<ContributionCalendar>> {
        let body = serde_json::json!({
            "query": CALENDAR_QUERY,
            "variables": { "login": identity.login },
        });
        let request = self
            .client
            .post(&self.config.graphql_url)
            .bearer_auth(identity.token())
            .json(&body);
        let envelope: GraphqlResponse = self.fetch_json("calendar", request).await?;

        if !envelope.errors.is_empty() {
            warn!(errors = ?envelope.errors, "calendar query returned errors");
        }
        Ok(envelope.into_calendar())
    }

    async fn try_search_count(&self, identity: &Identity, query: &str) -> Result<u64> {
        let request = self
            .get(identity, "/search/issues")
            .query(&[("q", query), ("per_page", "1")]);
        let response: SearchCountResponse = self.fetch_json("issue-search", request).await?;
        Ok(response.total_count)
    }

    fn degrade<T>(source: &'static str, fallback: T, result: Result<T>) -> SourceResult<T> {
        match result {
            Ok(value) => SourceResult::Fetched(value),
            Err(e) => {
                warn!(source, error = %e, "optional source degraded to default");
                SourceResult::degraded(fallback, e.to_string())
            }
        }
    }
}

#[async_trait]
impl ActivitySource for GithubClient {
    async fn profile(&self, identity: &Identity) -> Result<Profile> {
        self.fetch_json("profile", self.get(identity, "/user")).await
    }

    async fn repositories(&self, identity: &Identity) -> Result<Vec<RepoRecord>> {
        // visibility + affiliation, not the deprecated `type` parameter
        let path = "/user/repos?per_page=100&sort=updated&visibility=all\
                    &affiliation=owner,collaborator,organization_member";
        let body: serde_json::Value = self
            .fetch_json("repositories", self.get(identity, path))
            .await?;

        if !body.is_array() {
            let mut detail = body.to_string();
            detail.truncate(200);
            return Err(Error::invalid_response(
                "repositories",
                format!("expected a list, got: {}", detail),
            ));
        }

        let repos: Vec<RepoRecord> = serde_json::from_value(body)
            .map_err(|e| Error::invalid_response("repositories", e.to_string()))?;
        debug!(count = repos.len(), "repositories fetched");
        Ok(repos)
    }

    async fn events(&self, identity: &Identity) -> SourceResult<Vec<EventRecord>> {
        Self::degrade("events", Vec::new(), self.try_events(identity).await)
    }

    async fn search_commits(&self, identity: &Identity) -> SourceResult<Vec<CommitSearchHit>> {
        Self::degrade(
            "commit-search",
            Vec::new(),
            self.try_search_commits(identity).await,
        )
    }

    async fn commit_detail(&self, identity: &Identity, url: &str) -> Result<CommitRecord> {
        let request = self
            .client
            .get(url)
            .bearer_auth(identity.token())
            .header("Accept", "application/vnd.github+json");
        let detail: CommitDetailResponse = self.fetch_json("commit-detail", request).await?;
        detail
            .into_record()
            .ok_or_else(|| Error::invalid_response("commit-detail", "missing sha".to_string()))
    }

    async fn contribution_calendar(
        &self,
        identity: &Identity,
    ) -> SourceResult<Option<ContributionCalendar>> {
        Self::degrade("calendar", None, self.try_calendar(identity).await)
    }

    async fn prs_reviewed(&self, identity: &Identity) -> SourceResult<u64> {
        let query = format!(
            "reviewed-by:{login} is:pr -author:{login}",
            login = identity.login
        );
        Self::degrade(
            "prs-reviewed",
            0,
            self.try_search_count(identity, &query).await,
        )
    }

    async fn issues_commented(&self, identity: &Identity) -> SourceResult<u64> {
        let query = format!(
            "commenter:{login} is:issue -author:{login}",
            login = identity.login
        );
        Self::degrade(
            "issues-commented",
            0,
            self.try_search_count(identity, &query).await,
        )
    }

    async fn prs_authored(&self, identity: &Identity) -> SourceResult<u64> {
        let query = format!("author:{} is:pr", identity.login);
        Self::degrade(
            "prs-authored",
            0,
            self.try_search_count(identity, &query).await,
        )
    }
}
