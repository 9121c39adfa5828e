use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::components::Link;
use web_sys::HtmlInputElement;

use crate::blog::filter::{filter_posts, Category};
use crate::blog::posts::{all_posts, find_post, Post};
use crate::config;
use crate::dom::scroll_to_top;
use crate::Route;

/// Jumps to the top once when a page mounts.
#[hook]
fn use_scroll_to_top_on_mount() {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );
}

#[derive(Properties, PartialEq)]
struct BlogCardProps {
    post: &'static Post,
}

#[function_component(BlogCard)]
fn blog_card(props: &BlogCardProps) -> Html {
    let post = props.post;
    let to_post = Route::BlogPost {
        slug: post.slug.clone(),
    };

    html! {
        <article class="blog-card">
            <Link<Route> to={to_post.clone()} classes="blog-card-cover">
                <img src={post.cover.clone()} alt={post.title.clone()} loading="lazy" />
            </Link<Route>>
            <div class="blog-card-body">
                <div class="blog-card-meta">
                    { for post.tags.iter().map(|tag| html! {
                        <span class="blog-tag">{tag}</span>
                    }) }
                    <span class="blog-date">{post.formatted_date()}</span>
                </div>
                <h2>
                    <Link<Route> to={to_post.clone()}>{&post.title}</Link<Route>>
                </h2>
                <p>{&post.summary}</p>
                <Link<Route> to={to_post} classes="blog-read-more">
                    <span aria-label={format!("Čítať: {}", post.title)}>{"Čítať viac →"}</span>
                </Link<Route>>
            </div>
        </article>
    }
}

#[function_component(BlogIndex)]
pub fn blog_index() -> Html {
    use_title(config::page_title("Blog"));
    use_scroll_to_top_on_mount();

    let query = use_state(String::new);
    let category = use_state(|| Category::All);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let posts = filter_posts(all_posts(), &query, *category);

    html! {
        <div class="blog-page">
            <div class="blog-header">
                <h1>{"Blog, ktorý má energiu"}</h1>
                <div class="blog-search">
                    <span aria-hidden="true">{"🔍"}</span>
                    <input
                        type="search"
                        value={(*query).clone()}
                        oninput={on_search}
                        placeholder="Hľadať v článkoch"
                        aria-label="Vyhľadávanie v blogu"
                    />
                </div>
                <div class="blog-filters">
                    { for Category::ALL.iter().map(|&option| {
                        let category_handle = category.clone();
                        let onclick = Callback::from(move |_: MouseEvent| category_handle.set(option));
                        let pressed = *category == option;
                        html! {
                            <button
                                type="button"
                                class={classes!("blog-filter", pressed.then(|| "active"))}
                                aria-pressed={pressed.to_string()}
                                {onclick}
                            >
                                {option.label()}
                            </button>
                        }
                    }) }
                </div>
            </div>

            if posts.is_empty() {
                <p class="blog-empty">{"Žiadne výsledky. Skúste upraviť hľadanie alebo filter."}</p>
            } else {
                <div class="blog-grid">
                    { for posts.into_iter().map(|post| html! {
                        <BlogCard key={post.slug.clone()} {post} />
                    }) }
                </div>
            }
            <style>{BLOG_STYLE}</style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    let post = find_post(all_posts(), &props.slug);
    use_title(match post {
        Some(post) => config::page_title(&post.title),
        None => config::page_title("Článok nenájdený"),
    });
    use_scroll_to_top_on_mount();

    let Some(post) = post else {
        return html! {
            <div class="blog-page">
                <div class="blog-not-found">
                    <h1>{"Článok nenájdený"}</h1>
                    <p>{"Skontrolujte adresu alebo sa vráťte na prehľad blogu."}</p>
                    <Link<Route> to={Route::Blog} classes="blog-back">{"← Späť na blog"}</Link<Route>>
                </div>
                <style>{BLOG_STYLE}</style>
            </div>
        };
    };

    html! {
        <div class="blog-page">
            <article class="blog-article">
                <Link<Route> to={Route::Blog} classes="blog-back">{"← Späť na blog"}</Link<Route>>
                <h1>{&post.title}</h1>
                <div class="blog-card-meta">
                    { for post.tags.iter().map(|tag| html! {
                        <span class="blog-tag">{tag}</span>
                    }) }
                    <span class="blog-date">{post.formatted_date()}</span>
                </div>
                <img class="blog-article-cover" src={post.cover.clone()} alt={post.title.clone()} />
                { for post.content.iter().map(|paragraph| html! { <p>{paragraph}</p> }) }
                <Link<Route> to={Route::Blog} classes="blog-back">{"← Späť na blog"}</Link<Route>>
            </article>
            <style>{BLOG_STYLE}</style>
        </div>
    }
}

const BLOG_STYLE: &str = r#"
.blog-page {
    max-width: 80rem;
    margin: 0 auto;
    padding: 2.5rem 1rem 4rem 1rem;
    min-height: 60vh;
}
.blog-header {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 1.5rem;
    margin-bottom: 2rem;
}
.blog-header h1 {
    margin: 0;
    font-size: 2.25rem;
    color: #111827;
}
.blog-search {
    flex: 1;
    display: flex;
    align-items: center;
    gap: 0.5rem;
    border-bottom: 2px solid #15803d;
}
.blog-search input {
    flex: 1;
    border: none;
    padding: 0.5rem;
    font: inherit;
    outline: none;
}
.blog-filters {
    display: flex;
    gap: 0.5rem;
    flex-wrap: nowrap;
}
.blog-filter {
    padding: 0.35rem 0.9rem;
    border: 1px solid #d1d5db;
    border-radius: 999px;
    background: #ffffff;
    color: #374151;
    cursor: pointer;
    white-space: nowrap;
}
.blog-filter.active {
    background: #15803d;
    border-color: #15803d;
    color: #ffffff;
}
.blog-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}
.blog-card {
    border: 1px solid #e5e7eb;
    border-radius: 0.75rem;
    overflow: hidden;
    background: #ffffff;
}
.blog-card-cover img {
    width: 100%;
    aspect-ratio: 16 / 9;
    object-fit: cover;
}
.blog-card-body {
    padding: 1.25rem;
}
.blog-card-body h2 {
    font-size: 1.15rem;
    margin: 0.5rem 0;
}
.blog-card-body h2 a {
    color: #111827;
    text-decoration: none;
}
.blog-card-meta {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    align-items: center;
    font-size: 0.8rem;
}
.blog-tag {
    padding: 0.1rem 0.5rem;
    border-radius: 999px;
    background: #dcfce7;
    color: #166534;
}
.blog-date {
    color: #6b7280;
}
.blog-read-more,
.blog-back {
    color: #15803d;
    font-weight: 500;
    text-decoration: none;
}
.blog-empty {
    text-align: center;
    color: #4b5563;
    padding: 3rem 0;
}
.blog-article {
    max-width: 48rem;
    margin: 0 auto;
    line-height: 1.75;
    color: #374151;
}
.blog-article h1 {
    color: #111827;
}
.blog-article-cover {
    width: 100%;
    border-radius: 0.75rem;
    margin: 1.5rem 0;
}
.blog-not-found {
    text-align: center;
    padding: 4rem 0;
}
@media (max-width: 1024px) {
    .blog-grid {
        grid-template-columns: 1fr;
    }
}
"#;
