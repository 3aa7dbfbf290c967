//! HTML page bodies.
//!
//! # Responsibilities
//! - Render the home page (with the visitor number captured at dispatch)
//! - Render the highscores table page, including the degraded empty form
//! - Render the not-found and schema-seed result bodies
//!
//! # Design Decisions
//! - Plain string assembly, no templating engine
//! - Every page shares one head block so metadata stays consistent
//! - Row values are rendered as-is; the store is the only writer of row data

use crate::config::SiteConfig;
use crate::store::ScoreRow;

/// Shared `<head>` block for the site pages.
fn head_block(site: &SiteConfig, title: &str) -> String {
    format!(
        "<head>\n\
         <title>{title}</title>\n\
         <meta name='description' content='{description}'>\n\
         <meta name='author' content='{author}'>\n\
         <meta property='og:title' content='{title}'>\n\
         <meta property='og:type' content='website'>\n\
         <meta property='og:url' content='{base_url}'>\n\
         <meta property='og:description' content='{description}'>\n\
         <link rel='stylesheet' href='{stylesheet}'>\n\
         </head>",
        title = title,
        description = site.description,
        author = site.author,
        base_url = site.base_url,
        stylesheet = site.stylesheet_href,
    )
}

/// The home page, showing the visitor number claimed for this request.
pub fn home(site: &SiteConfig, visitor: u64) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         {head}\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <p>You are visitor {visitor}!</p>\n\
         <a href='{base_url}'>Reload</a>\n\
         <a href='/highscores'>Highscores</a>\n\
         <a href='/create'>Seed the score table</a>\n\
         </body>\n\
         </html>",
        head = head_block(site, &site.title),
        title = site.title,
        visitor = visitor,
        base_url = site.base_url,
    )
}

/// The highscores page. An empty `rows` slice renders the page shell with
/// an empty table body rather than failing.
pub fn highscores(site: &SiteConfig, rows: &[ScoreRow]) -> String {
    let mut table_body = String::new();
    for row in rows {
        table_body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row.name, row.mass, row.rank, row.lifetime_secs, row.started_at,
        ));
    }

    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         {head}\n\
         <body>\n\
         <h1>High Scores</h1>\n\
         <a href='{base_url}'>Back to main page</a>\n\
         <a href='/highscores'>Reload</a>\n\
         <table>\n\
         <thead>\n\
         <tr><th>Name</th><th>Mass</th><th>Rank</th><th>Lifetime</th><th>Start time</th></tr>\n\
         </thead>\n\
         <tbody>\n\
         {table_body}</tbody>\n\
         </table>\n\
         </body>\n\
         </html>",
        head = head_block(site, &format!("{} - High Scores", site.title)),
        base_url = site.base_url,
        table_body = table_body,
    )
}

/// Minimal not-found body, paired with a 404 status line by the assembler.
pub fn not_found() -> String {
    "<!doctype html>\n\
     <html lang=\"en\">\n\
     <head><title>Page Not Found</title></head>\n\
     <body>\n\
     <h1>404 - Page Not Found</h1>\n\
     <p>No page lives at that address.</p>\n\
     </body>\n\
     </html>"
        .to_string()
}

/// Result page for the `/create` schema-and-seed route. The detail text is
/// always rendered, success or failure.
pub fn seed_result(success: bool, detail: &str) -> String {
    let heading = if success {
        "Score table ready"
    } else {
        "Score table setup failed"
    };

    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head><title>{heading}</title></head>\n\
         <body>\n\
         <h1>{heading}</h1>\n\
         <p>{detail}</p>\n\
         <a href='/highscores'>Highscores</a>\n\
         </body>\n\
         </html>",
        heading = heading,
        detail = detail,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn home_renders_visitor_number_and_links() {
        let body = home(&site(), 7);
        assert!(body.contains("You are visitor 7!"));
        assert!(body.contains("href='/highscores'"));
        assert!(body.contains("href='/create'"));
    }

    #[test]
    fn highscores_renders_rows_in_order() {
        let rows = vec![
            ScoreRow {
                name: "Jim".to_string(),
                mass: 100.2,
                rank: 1,
                lifetime_secs: 412.5,
                started_at: "2022-04-12 18:30:00".to_string(),
            },
            ScoreRow {
                name: "Ada".to_string(),
                mass: 88.6,
                rank: 2,
                lifetime_secs: 305.0,
                started_at: "2022-04-13 09:12:00".to_string(),
            },
        ];

        let body = highscores(&site(), &rows);
        let jim = body.find("<td>Jim</td>").unwrap();
        let ada = body.find("<td>Ada</td>").unwrap();
        assert!(jim < ada);
    }

    #[test]
    fn empty_highscores_keeps_table_shell() {
        let body = highscores(&site(), &[]);
        assert!(body.contains("<table>"));
        assert!(body.contains("<tbody>\n</tbody>"));
        assert!(!body.contains("<td>"));
    }

    #[test]
    fn seed_result_renders_failure_detail() {
        let body = seed_result(false, "score store unavailable: offline");
        assert!(body.contains("Score table setup failed"));
        assert!(body.contains("score store unavailable: offline"));
    }
}
