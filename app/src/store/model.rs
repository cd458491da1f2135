use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub role: String,
    pub summary: String,
    pub profile_image_url: String,
    pub social_details: SocialDetails,
    pub portfolio_source_code: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SocialDetails {
    pub github: String,
    pub linkedin: String,
    pub mail: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Project {
    pub title: String,
    pub period: String,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct WorkEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub domain: String,
    pub achievements: Vec<String>,
}

// The date is whatever display string the source document carries; it is
// never parsed or sorted on.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct BlogPost {
    pub title: String,
    pub date: String,
    pub description: String,
    pub link: String,
}

// The aggregate of the five documents. Collections keep their source order.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ProfileData {
    pub personal_info: PersonalInfo,
    pub projects: Vec<Project>,
    pub blogs: Vec<BlogPost>,
    pub skills: Vec<String>,
    pub work: Vec<WorkEntry>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    About,
    Experience,
    Projects,
    Blog,
    Skills,
}

impl Section {
    // The `id=` of the section element, doubling as its nav anchor target.
    pub fn id(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Blog => "blog",
            Section::Skills => "skills",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Blog => "Blog",
            Section::Skills => "Skills",
        }
    }
}

impl ProfileData {
    pub fn has_work(&self) -> bool {
        !self.work.is_empty()
    }

    pub fn has_projects(&self) -> bool {
        !self.projects.is_empty()
    }

    pub fn has_blogs(&self) -> bool {
        !self.blogs.is_empty()
    }

    pub fn has_skills(&self) -> bool {
        !self.skills.is_empty()
    }

    // Menu order. `About` is always present; the rest only when populated.
    pub fn nav_sections(&self) -> Vec<Section> {
        let mut sections = vec![Section::About];
        if self.has_work() {
            sections.push(Section::Experience);
        }
        if self.has_projects() {
            sections.push(Section::Projects);
        }
        if self.has_blogs() {
            sections.push(Section::Blog);
        }
        if self.has_skills() {
            sections.push(Section::Skills);
        }
        sections
    }
}
