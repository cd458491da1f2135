#[cfg(feature = "ssr")]
pub mod errors;
mod model;

#[cfg(feature = "ssr")]
pub use errors::{Error, Result};
pub use model::{
    BlogPost, PersonalInfo, ProfileData, Project, Section, SocialDetails, WorkEntry,
};

// Where the five profile documents are hosted; the page has no other
// configuration.
pub const PROFILE_BASE_URL: &str = "https://shraddhagite.github.io/public";

#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct Store {
    base_url: String,
    client: reqwest::Client,
}

#[cfg(feature = "ssr")]
impl Store {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    // The join is all-or-nothing: the first failed or undecodable document
    // fails the whole load and no partial result is ever returned. No retry,
    // no timeout.
    pub async fn load(&self) -> Result<ProfileData> {
        let (personal_info, projects, blogs, skills, work) = tokio::try_join!(
            self.fetch::<PersonalInfo>("personalinfo.json"),
            self.fetch::<Vec<Project>>("projects.json"),
            self.fetch::<Vec<BlogPost>>("blogs.json"),
            self.fetch::<Vec<String>>("skills.json"),
            self.fetch::<Vec<WorkEntry>>("work.json"),
        )?;
        log::info!(
            "loaded profile data for \"{}\" from {}",
            personal_info.name,
            self.base_url
        );
        Ok(ProfileData {
            personal_info,
            projects,
            blogs,
            skills,
            work,
        })
    }

    async fn fetch<T>(&self, document: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, document);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|error| Error::Fetch {
                error,
                url: url.clone(),
            })?;
        response
            .json()
            .await
            .map_err(|error| Error::Fetch { error, url })
    }
}
