use leptos::prelude::*;

use crate::store::{PersonalInfo, ProfileData, SocialDetails};

// The one piece of client state on the page. An even number of flips always
// lands back on the hidden panel.
pub fn toggle_menu(open: &mut bool) {
    *open = !*open;
}

#[component]
pub fn NavBar(profile: ProfileData) -> impl IntoView {
    let is_menu_open = RwSignal::new(false);
    // Both menus render from the same list, so a section can never appear in
    // one and not the other.
    let sections = profile.nav_sections();
    let mobile_sections = sections.clone();
    let name = profile.personal_info.name.clone();
    let socials = profile.personal_info.social_details.clone();

    view! {
        <nav class="topbar">
            <div class="topbar-row">
                <span class="brand">{name}</span>
                <button
                    class="menu-toggle"
                    on:click=move |_| is_menu_open.update(toggle_menu)
                >
                    {move || if is_menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
                <ul class="nav-links">
                    {sections
                        .iter()
                        .map(|section| {
                            view! {
                                <li><a href=format!("#{}", section.id())>{section.label()}</a></li>
                            }
                        })
                        .collect_view()}
                    <li class="nav-socials"><SocialLinks details=socials /></li>
                </ul>
            </div>
            <Show when=move || is_menu_open.get()>
                <ul class="mobile-links">
                    {mobile_sections
                        .iter()
                        .map(|section| {
                            view! {
                                <li><a href=format!("#{}", section.id())>{section.label()}</a></li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </nav>
    }
}

#[component]
pub fn SocialLinks(details: SocialDetails) -> impl IntoView {
    view! {
        <a href=details.github target="_blank" rel="noopener noreferrer">"GitHub"</a>
        <a href=details.linkedin target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
        <a href=details.mail target="_blank" rel="noopener noreferrer">"Mail"</a>
    }
}

#[component]
pub fn Footer(personal_info: PersonalInfo) -> impl IntoView {
    let socials = personal_info.social_details.clone();
    view! {
        <footer>
            <div class="footer-socials">
                <SocialLinks details=socials />
            </div>
            <p>
                <small>
                    {"\u{a9}"} " 2025 " {personal_info.name} ". All rights reserved | "
                    <a href=personal_info.portfolio_source_code target="_blank" rel="noopener noreferrer">
                        "<Source Code/>"
                    </a>
                </small>
            </p>
        </footer>
    }
}
