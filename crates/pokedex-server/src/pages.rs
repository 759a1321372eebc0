//! HTML rendering of query results

use chrono::{DateTime, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Response, StatusCode};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use pokedex_core::{Category, CategoryName, Creature};
use pokedex_db::{CategoryListing, CreatureDetail, QueryResult, SortMode, StoreStats};

const FOOTER: &str = "<hr>\n<p><em>Pokedex Server</em></p>\n";

/// Escape text for inclusion in HTML
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Encode a value for use inside a query string
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

fn link(href: &str, text: &str) -> String {
    format!("<a href=\"{}\">{}</a>", escape(href), escape(text))
}

fn page(title: &str, body: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(title)));
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    html.push_str(FOOTER);
    html.push_str("</body>\n</html>");
    html
}

fn join_names(names: &[CategoryName]) -> String {
    names
        .iter()
        .map(|n| escape(n.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render any query result as a full page
pub fn render(result: &QueryResult<'_>) -> String {
    match result {
        QueryResult::CategoryIndex(categories) => category_index(categories),
        QueryResult::CategoryNavigation(categories) => category_navigation(categories),
        QueryResult::CategoryDetail(category) => category_detail(*category),
        QueryResult::CategoryListing(listing) => category_listing(listing),
        QueryResult::CreatureIndex(creatures) => creature_index(creatures),
        QueryResult::CreatureDetail(detail) => creature_detail(detail.as_ref()),
    }
}

/// Static navigation page. `stats` is shown when a shared store is loaded.
pub fn index_page(stats: Option<(StoreStats, DateTime<Utc>)>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Pokedex</h1>\n");
    body.push_str(&format!("<p>{}</p>\n", link("/entity", "See all creatures")));
    body.push_str(&format!(
        "<p>{}</p>\n",
        link("/entities", "See all creatures in a category")
    ));
    body.push_str(&format!(
        "<p>{}</p>\n",
        link("/categories", "See all features of a category")
    ));

    if let Some((stats, loaded_at)) = stats {
        body.push_str(&format!(
            "<p>{} categories, {} creatures, {} moves loaded at {}</p>\n",
            stats.categories,
            stats.creatures,
            stats.moves,
            loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    page("Pokedex", &body)
}

fn category_index(categories: &[Category]) -> String {
    let mut body = String::new();
    body.push_str(&format!("<p>{}</p>\n", link("/", "Go to main section")));
    body.push_str("<h1>Categories</h1>\n<ul>\n");
    for category in categories {
        let name = category.name.as_str();
        body.push_str(&format!(
            "<li>{}</li>\n",
            link(&format!("/categories?name={}", encode(name)), name)
        ));
    }
    body.push_str("</ul>\n");
    page("Categories", &body)
}

fn category_navigation(categories: &[Category]) -> String {
    let mut body = String::new();
    body.push_str(&format!("<p>{}</p>\n", link("/", "Go to main section")));
    body.push_str("<h1>Choose a category</h1>\n<ul>\n");
    for category in categories {
        let name = category.name.as_str();
        body.push_str(&format!(
            "<li>{}</li>\n",
            link(&format!("/entities?type={}", encode(name)), name)
        ));
    }
    body.push_str("</ul>\n");
    page("Creatures by category", &body)
}

fn category_detail(category: Option<&Category>) -> String {
    let mut body = String::new();
    body.push_str(&format!("<p>{}</p>\n", link("/categories", "Go to list of categories")));
    body.push_str("<pre>\n");
    if let Some(category) = category {
        body.push_str(&format!("Name : {}\n", escape(category.name.as_str())));
        body.push_str("Effective Against :\n");
        for name in &category.effective_against {
            body.push_str(&format!("- {}\n", escape(name.as_str())));
        }
        body.push_str("Weak Against :\n");
        for name in &category.weak_against {
            body.push_str(&format!("- {}\n", escape(name.as_str())));
        }
    }
    body.push_str("</pre>\n");
    page(
        category.map(|c| c.name.as_str()).unwrap_or("Category"),
        &body,
    )
}

fn category_listing(listing: &CategoryListing<'_>) -> String {
    let category = listing.category();
    let mut body = String::new();
    body.push_str(&format!("<p>{} | ", link("/entities", "Category list")));
    match listing.sort() {
        SortMode::BaseAttack => body.push_str(&link(
            &format!("/entities?type={}", encode(category)),
            "Go to unsorted list",
        )),
        SortMode::Unsorted => body.push_str(&link(
            &format!("/entities?type={}&sortby=BaseAttack", encode(category)),
            "Sort by Base Attack",
        )),
    }
    body.push_str("</p>\n<pre>\n");
    for creature in listing.iter() {
        write_creature(&mut body, creature);
        body.push('\n');
    }
    body.push_str("</pre>\n");
    page(category, &body)
}

fn creature_index(creatures: &[Creature]) -> String {
    let mut body = String::new();
    body.push_str(&format!("<p>{}</p>\n", link("/", "Go to main section")));
    body.push_str("<h1>Choose a creature</h1>\n<ul>\n");
    for creature in creatures {
        body.push_str(&format!(
            "<li>{}</li>\n",
            link(&format!("/entity?name={}", encode(&creature.name)), &creature.name)
        ));
    }
    body.push_str("</ul>\n");
    page("Creatures", &body)
}

fn creature_detail(detail: Option<&CreatureDetail<'_>>) -> String {
    let mut body = String::new();
    body.push_str(&format!("<p>{}</p>\n", link("/entity", "Go to creature list")));
    body.push_str("<pre>\n");

    if let Some(detail) = detail {
        write_creature(&mut body, detail.creature());

        for category in detail.category_details() {
            body.push_str(&format!("\n  Category : {}\n", escape(category.name.as_str())));
            if !category.effective_against.is_empty() {
                body.push_str("    Effective Against :\n");
                for name in &category.effective_against {
                    body.push_str(&format!("      {}\n", escape(name.as_str())));
                }
            }
            if !category.weak_against.is_empty() {
                body.push_str("    Weak Against :\n");
                for name in &category.weak_against {
                    body.push_str(&format!("      {}\n", escape(name.as_str())));
                }
            }
        }

        body.push_str("\n  Example Creatures :\n");
        for peer in detail.example_peers() {
            body.push_str(&format!(
                "    {}\n",
                link(&format!("/entity?name={}", encode(&peer.name)), &peer.name)
            ));
        }

        body.push_str("\n  Moves :\n");
        for mv in detail.applicable_moves() {
            body.push_str(&format!("    Move ID : {}\n", mv.id));
            body.push_str(&format!("    Move Name : {}\n", escape(&mv.name)));
            body.push_str(&format!("    Move Category : {}\n", escape(mv.category.as_str())));
            body.push_str(&format!("    Move Damage : {}\n", mv.damage));
            body.push_str(&format!("    Move Energy : {}\n", mv.energy));
            body.push_str(&format!("    Move Dps : {}\n", mv.dps));
            body.push_str(&format!("    Move Duration : {}\n\n", mv.duration));
        }
    }

    body.push_str("</pre>\n");
    page(
        detail.map(|d| d.creature().name.as_str()).unwrap_or("Creature"),
        &body,
    )
}

/// Append the full field listing of one creature
fn write_creature(body: &mut String, creature: &Creature) {
    body.push_str(&format!("{}\n", escape(&creature.name)));
    body.push_str(&format!("  Number : {}\n", escape(&creature.number)));
    body.push_str(&format!("  Weight : {}\n", escape(&creature.weight)));
    body.push_str(&format!("  Height : {}\n", escape(&creature.height)));
    body.push_str(&format!("  Base Attack : {}\n", creature.base_attack));
    body.push_str(&format!("  Base Defense : {}\n", creature.base_defense));
    body.push_str(&format!("  Base Stamina : {}\n", creature.base_stamina));
    body.push_str(&format!("  Classification : {}\n", escape(&creature.classification)));
    body.push_str(&format!("  Capture Rate : {}\n", creature.capture_rate));
    body.push_str(&format!("  Flee Rate : {}\n", creature.flee_rate));
    body.push_str(&format!(
        "  Buddy Distance Needed : {}\n",
        creature.buddy_distance_needed
    ));
    body.push_str(&format!(
        "  Primary Category : {}\n",
        escape(creature.primary_category.as_str())
    ));
    if let Some(secondary) = &creature.secondary_category {
        body.push_str(&format!("  Secondary Category : {}\n", escape(secondary.as_str())));
    }
    body.push_str(&format!("  Weaknesses : {}\n", join_names(&creature.weaknesses)));

    body.push_str("  Special Attack(s) :\n");
    for name in &creature.special_attacks {
        body.push_str(&format!("    {}\n", escape(name)));
    }
    body.push_str("  Fast Attack(s) :\n");
    for name in &creature.fast_attacks {
        body.push_str(&format!("    {}\n", escape(name)));
    }

    body.push_str("  Candy :\n");
    body.push_str(&format!("    Family ID : {}\n", creature.candy.family_id));
    body.push_str(&format!("    Name : {}\n", escape(&creature.candy.name)));

    if !creature.next_evolutions.is_empty() {
        body.push_str("  Next evolution(s) :\n");
        for evolution in &creature.next_evolutions {
            body.push_str(&format!(
                "    {} ({})\n",
                escape(&evolution.name),
                escape(&evolution.number)
            ));
        }
    }
    if let Some(requirement) = &creature.evolution_requirement {
        body.push_str("  Next Evolution Requirements :\n");
        body.push_str(&format!("    Family : {}\n", requirement.family));
        body.push_str(&format!("    Name : {}\n", escape(&requirement.name)));
        body.push_str(&format!("    Amount : {}\n", requirement.amount));
    }
    if !creature.previous_evolutions.is_empty() {
        body.push_str("  Previous evolution(s) :\n");
        for evolution in &creature.previous_evolutions {
            body.push_str(&format!(
                "    {} ({})\n",
                escape(&evolution.name),
                escape(&evolution.number)
            ));
        }
    }
}

/// Create an error page
pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{} {}</h1>\n<p>{}</p>\n",
        status.as_u16(),
        reason,
        escape(message)
    );
    page(&format!("{} {}", status.as_u16(), reason), &body)
}

/// Wrap an HTML body in a response
pub fn html_response(status: StatusCode, html: String) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(html)));
    *response.status_mut() = status;
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}

/// Create an error response
pub fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    html_response(status, error_page(status, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::{Dataset, Move};
    use pokedex_db::{Query, Store};

    fn store() -> Store {
        Store::new(Dataset {
            categories: vec![
                Category::new("Fire").effective_against(["Grass"]).weak_against(["Water"]),
                Category::new("Water").effective_against(["Fire"]),
            ],
            creatures: vec![
                Creature::new("006", "Charizard", "Fire").with_base_attack(100),
                Creature::new("004", "Charmander", "Fire").with_base_attack(50),
                Creature::new("122", "Mr. Mime", "Psychic").with_secondary("Fairy"),
            ],
            moves: vec![Move::new(1, "Ember", "Fire")],
        })
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
        assert_eq!(encode("Mr. Mime"), "Mr%2E%20Mime");
    }

    #[test]
    fn test_render_category_detail() {
        let store = store();
        let html = render(&store.execute(Query::Categories { name: Some("Fire") }));

        assert!(html.contains("Name : Fire"));
        assert!(html.contains("- Grass"));
        assert!(html.contains("- Water"));
    }

    #[test]
    fn test_render_missing_category_is_empty() {
        let store = store();
        let html = render(&store.execute(Query::Categories { name: Some("Dragon") }));

        assert!(html.contains("<pre>\n</pre>"));
        assert!(!html.contains("Effective Against"));
    }

    #[test]
    fn test_render_sorted_listing() {
        let store = store();
        let html = render(&store.execute(Query::Creatures {
            category: Some("Fire"),
            sort: SortMode::BaseAttack,
        }));

        let charmander = html.find("Charmander").unwrap();
        let charizard = html.find("Charizard").unwrap();
        assert!(charmander < charizard);
        assert!(html.contains("Go to unsorted list"));
        assert!(html.contains("/entities?type=Fire\""));
    }

    #[test]
    fn test_render_unsorted_listing_links_sort() {
        let store = store();
        let html = render(&store.execute(Query::Creatures {
            category: Some("Fire"),
            sort: SortMode::Unsorted,
        }));

        assert!(html.contains("/entities?type=Fire&amp;sortby=BaseAttack"));
        assert!(html.find("Charizard").unwrap() < html.find("Charmander").unwrap());
    }

    #[test]
    fn test_render_navigation_views() {
        let store = store();

        let html = render(&store.execute(Query::Creatures { category: None, sort: SortMode::Unsorted }));
        assert!(html.contains("/entities?type=Fire"));
        assert!(html.contains("/entities?type=Water"));

        let html = render(&store.execute(Query::Categories { name: None }));
        assert!(html.contains("/categories?name=Fire"));

        let html = render(&store.execute(Query::Creature { name: Some("") }));
        assert!(html.contains("/entity?name=Mr%2E%20Mime"));
        assert!(html.contains(">Mr. Mime</a>"));
    }

    #[test]
    fn test_render_creature_detail() {
        let store = store();
        let html = render(&store.execute(Query::Creature { name: Some("Charizard") }));

        assert!(html.contains("Category : Fire"));
        assert!(html.contains("Effective Against :\n      Grass"));
        assert!(html.contains("Example Creatures :"));
        assert!(html.contains(">Charmander</a>"));
        assert!(html.contains("Move Name : Ember"));
        assert!(!html.contains("Next Evolution Requirements"));
    }

    #[test]
    fn test_index_page() {
        let html = index_page(None);
        assert!(html.contains("/entities"));
        assert!(!html.contains("loaded at"));

        let stats = StoreStats {
            categories: 2,
            creatures: 3,
            moves: 1,
        };
        let html = index_page(Some((stats, Utc::now())));
        assert!(html.contains("2 categories, 3 creatures, 1 moves loaded at"));
    }

    #[test]
    fn test_error_response() {
        let response = error_response(StatusCode::INTERNAL_SERVER_ERROR, "dataset <unavailable>");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
