use anyhow::Result;
use leptos::prelude::*;
use leptos::server_fn::error::NoCustomError;
use leptos_meta::Title;

use crate::components::{Footer, NavBar};
use crate::store;
use crate::store::Section;

#[component]
pub fn Index() -> impl IntoView {
    // One aggregate load per page view; the unit source means nothing ever
    // retriggers it, and the menu signal lives entirely outside of it.
    let profile = Resource::new_blocking(|| (), move |_| async { fetch_profile().await });

    view! {
        {move || match profile.get() {
            None => leptos::either::EitherOf3::A(view! {
                <div class="status">"Fetching data..."</div>
            }.into_view()),
            Some(Ok(data)) => leptos::either::EitherOf3::B(view! {
                <Title text=data.personal_info.name.clone() />
                <ProfileView profile=data />
            }.into_view()),
            Some(Err(_)) => leptos::either::EitherOf3::C(view! {
                <div class="status status-error">
                    "Error fetching data. Please try again later!"
                </div>
            }.into_view()),
        }}
    }
}

#[server(FetchProfile, "/api", "GetJson", "profile")]
pub async fn fetch_profile() -> Result<store::ProfileData, ServerFnError> {
    let store = use_context::<store::Store>().ok_or_else(|| {
        ServerFnError::<NoCustomError>::ServerError(String::from("profile store is missing from context"))
    })?;
    store
        .load()
        .await
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}

// The full layout once all five documents are in. Everything below is a
// plain function of the loaded data.
#[component]
pub fn ProfileView(profile: store::ProfileData) -> impl IntoView {
    let has_projects = profile.has_projects();
    let has_work = profile.has_work();
    let has_blogs = profile.has_blogs();
    let has_skills = profile.has_skills();
    let personal_info = profile.personal_info.clone();
    let projects = profile.projects.clone();
    let work = profile.work.clone();
    let blogs = profile.blogs.clone();
    let skills = profile.skills.clone();

    view! {
        <NavBar profile=profile />
        <main>
            <AboutSection personal_info=personal_info.clone() />
            {has_projects.then(|| view! { <ProjectsSection projects=projects /> })}
            {has_work.then(|| view! { <ExperienceSection work=work /> })}
            {has_blogs.then(|| view! { <BlogSection blogs=blogs /> })}
            {has_skills.then(|| view! { <SkillsSection skills=skills /> })}
        </main>
        <Footer personal_info=personal_info />
    }
}

#[component]
pub fn AboutSection(personal_info: store::PersonalInfo) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="hero">
            <div class="hero-text">
                <h1>{personal_info.role}</h1>
                <p>{personal_info.summary}</p>
            </div>
            <div class="hero-portrait">
                <img src=personal_info.profile_image_url alt=personal_info.name />
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection(projects: Vec<store::Project>) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="band">
            <h2>"Featured Projects"</h2>
            <div class="card-grid">
                {projects
                    .into_iter()
                    .map(|project| {
                        view! {
                            <div class="card">
                                <h3>{project.title}</h3>
                                <p class="period">{project.period}</p>
                                <p>{project.description}</p>
                                <ul class="badges">
                                    {project
                                        .highlights
                                        .into_iter()
                                        .map(|highlight| view! { <li>{highlight}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection(work: Vec<store::WorkEntry>) -> impl IntoView {
    view! {
        <section id=Section::Experience.id()>
            <h2>"Work Experience"</h2>
            <div class="entries">
                {work
                    .into_iter()
                    .map(|job| {
                        view! {
                            <div class="card">
                                <div class="entry-head">
                                    <div>
                                        <h3>{job.role}</h3>
                                        <p class="company">{job.company}</p>
                                    </div>
                                    <div class="entry-where">
                                        <p>{job.period}</p>
                                        <p>{job.location}</p>
                                    </div>
                                </div>
                                <p>"Domain: " {job.domain}</p>
                                <ul class="bullets">
                                    {job.achievements
                                        .into_iter()
                                        .map(|achievement| view! { <li>{achievement}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn BlogSection(blogs: Vec<store::BlogPost>) -> impl IntoView {
    view! {
        <section id=Section::Blog.id() class="band">
            <h2>"Technical Writing"</h2>
            <div class="card-grid">
                {blogs
                    .into_iter()
                    .map(|post| {
                        view! {
                            <a class="card card-link" href=post.link target="_blank" rel="noopener noreferrer">
                                <h3>{post.title}</h3>
                                <p class="period">{post.date}</p>
                                <p>{post.description}</p>
                                <span class="read-more">"Read article \u{2192}"</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection(skills: Vec<String>) -> impl IntoView {
    view! {
        <section id=Section::Skills.id()>
            <h2>"Technical Skills"</h2>
            <ul class="badges">
                {skills
                    .into_iter()
                    .map(|skill| view! { <li>{skill}</li> })
                    .collect_view()}
            </ul>
        </section>
    }
}
