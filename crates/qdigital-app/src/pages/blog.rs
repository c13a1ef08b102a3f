//! Blog index and blog post pages

use super::{card, not_found};
use qdigital_core::{Content, Control, Cta, Node, Page, Route, ViewTree};
use tracing::debug;

pub(super) fn render_index(content: &Content) -> ViewTree {
    let posts = content
        .blog_posts
        .iter()
        .enumerate()
        .map(|(index, post)| {
            let builder = card(&post.title)
                .subtitle(format!("{} · {} · {}", post.date, post.category, post.author))
                .body(&post.excerpt)
                .image(&post.image);
            match Page::for_blog_post(index) {
                Some(page) => builder.control(Control::Navigate(page.into())).build(),
                None => builder.build(),
            }
        })
        .collect();

    ViewTree::new(
        Page::Blog.into(),
        "Blog",
        vec![Node::Section {
            eyebrow: Some("Blog".to_string()),
            title: Some("Insights & Ideas".to_string()),
            subtitle: None,
            children: vec![Node::grid(3, posts)],
        }],
    )
}

/// A single post; renders the not-found view when the content has no post
/// for this page.
pub(super) fn render_post(page: Page, content: &Content) -> ViewTree {
    let Some(post) = content.blog_post(page) else {
        debug!("No blog post content for {}", page);
        return not_found::render(Route::Page(page), page.id());
    };

    let mut children = vec![
        Node::badge(&post.category),
        Node::paragraph(format!("{} · {}", post.date, post.author)),
    ];
    if !post.image.is_empty() {
        children.push(Node::image(&post.image, &post.title));
    }
    children.extend(post.body.iter().map(Node::paragraph));

    ViewTree::new(
        page.into(),
        post.title.clone(),
        vec![
            Node::section(&post.title, children),
            Node::link(&Cta::new("Back to blog", Page::Blog)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_links_each_post() {
        let view = render_index(&Content::reference());
        assert_eq!(
            view.controls(),
            vec![
                Control::Navigate(Page::BlogPostOne.into()),
                Control::Navigate(Page::BlogPostTwo.into()),
                Control::Navigate(Page::BlogPostThree.into()),
            ]
        );
    }

    #[test]
    fn test_post_pages_show_their_post() {
        let content = Content::reference();
        for (index, post) in content.blog_posts.iter().enumerate() {
            let page = Page::for_blog_post(index).unwrap();
            let view = render_post(page, &content);
            assert_eq!(view.title, post.title);
            assert!(view.contains_text(&post.body[0]));
        }
    }

    #[test]
    fn test_missing_post_renders_not_found() {
        let mut content = Content::reference();
        content.blog_posts.truncate(1);

        let view = render_post(Page::BlogPostThree, &content);
        assert!(view.is_not_found());
        assert_eq!(view.route, Route::Page(Page::BlogPostThree));
    }
}
