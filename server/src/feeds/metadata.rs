const BASE_URL: &str = "https://shraddhagite.github.io";

// The blog lives on the single profile page, behind its section anchor.
pub const BLOG_ANCHOR: &str = "/#blog";
pub const LANGUAGE: &str = "en";

pub fn link(path: &str) -> String {
    String::from(BASE_URL) + path
}

// The channel metadata is data-driven: the owner's name is only known once
// the profile documents are loaded.
pub fn title(name: &str) -> String {
    format!("{} :: Blog", name)
}

pub fn description(name: &str) -> String {
    title(name)
}

pub fn copyright(name: &str) -> String {
    format!("\u{a9} 2025 {}. All rights reserved", name)
}
