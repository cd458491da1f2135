use super::metadata::{BLOG_ANCHOR, LANGUAGE, description, link, title};

pub const URL_PATH: &str = "/blog/feed.json";

pub async fn handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
    _request: axum::extract::Request<axum::body::Body>,
) -> Result<axum::Json<json_feed_model::Feed>, app::store::Error> {
    let profile = ctx.store.load().await?;
    Ok(axum::Json(feed(&profile)))
}

fn feed(profile: &app::store::ProfileData) -> json_feed_model::Feed {
    let name = &profile.personal_info.name;
    let mut feed = json_feed_model::Feed::new();
    feed.set_title(title(name));
    feed.set_home_page_url(link(BLOG_ANCHOR));
    feed.set_feed_url(link(URL_PATH));
    feed.set_description(description(name));
    feed.set_language(LANGUAGE);
    let mut items: Vec<json_feed_model::Item> = vec![];
    for post in &profile.blogs {
        let mut entry = json_feed_model::Item::new();
        // Articles live on external platforms, so the canonical link doubles
        // as the id.
        entry.set_id(&post.link);
        entry.set_url(&post.link);
        entry.set_title(&post.title);
        entry.set_content_text(&post.description);
        items.push(entry);
    }
    feed.set_items(items);
    feed
}

#[cfg(test)]
mod tests {
    #[test]
    fn feed_lists_articles_in_document_order() {
        let profile = crate::feeds::fixtures::profile();
        let feed = super::feed(&profile);
        let value = serde_json::to_value(&feed).unwrap();
        assert_eq!("Ada Lovelace :: Blog", value["title"]);
        assert_eq!("https://shraddhagite.github.io/#blog", value["home_page_url"]);
        let items = value["items"].as_array().unwrap();
        assert_eq!(2, items.len());
        assert_eq!("Notes on engines", items[0]["title"]);
        assert_eq!("https://dev.to/ada/bernoulli", items[1]["url"]);
        assert_eq!(items[1]["id"], items[1]["url"]);
    }
}
