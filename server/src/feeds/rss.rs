use axum::response::IntoResponse;

use super::metadata::{BLOG_ANCHOR, LANGUAGE, copyright, description, link, title};

pub const URL_PATH: &str = "/blog/feed.rss";

pub async fn handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
    _request: axum::extract::Request<axum::body::Body>,
) -> Result<axum::response::Response, app::store::Error> {
    let profile = ctx.store.load().await?;
    let response = (
        axum::http::StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "application/rss+xml")],
        channel(&profile).to_string(),
    ).into_response();
    Ok(response)
}

fn channel(profile: &app::store::ProfileData) -> rss::Channel {
    let name = &profile.personal_info.name;
    let mut items: Vec<rss::Item> = vec![];
    for post in &profile.blogs {
        let mut entry = rss::Item::default();
        entry.set_title(post.title.clone());
        entry.set_link(post.link.clone());
        entry.set_description(post.description.clone());
        items.push(entry);
    }
    rss::ChannelBuilder::default()
        .title(title(name))
        .link(link(BLOG_ANCHOR))
        .description(description(name))
        .language(String::from(LANGUAGE))
        .copyright(copyright(name))
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    #[test]
    fn channel_carries_owner_and_articles() {
        let profile = crate::feeds::fixtures::profile();
        let channel = super::channel(&profile);
        assert_eq!("Ada Lovelace :: Blog", channel.title());
        assert_eq!("https://shraddhagite.github.io/#blog", channel.link());
        assert_eq!(
            Some("\u{a9} 2025 Ada Lovelace. All rights reserved"),
            channel.copyright()
        );
        assert_eq!(2, channel.items().len());
        assert_eq!(Some("Notes on engines"), channel.items()[0].title());
        assert_eq!(
            Some("https://dev.to/ada/bernoulli"),
            channel.items()[1].link()
        );
    }
}
