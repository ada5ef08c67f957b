use crate::config::SiteConfig;
use crate::naming::APK_SUFFIX;
use crate::types::{CatalogEntry, Category};

const PAGE_TITLE: &str = "MoonBit Raylib Android Games";
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const SOURCE_REPO: &str = "moonbit-community/tonyfettes-raylib-android-games";

/// Splits entries into (classic, current), keeping input order.
#[must_use]
pub fn partition(entries: &[CatalogEntry]) -> (Vec<&CatalogEntry>, Vec<&CatalogEntry>) {
    entries
        .iter()
        .partition(|e| e.category() == Category::Classic)
}

#[must_use]
pub fn render_catalog(entries: &[CatalogEntry], config: &SiteConfig) -> String {
    let (classics, games) = partition(entries);

    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("  <title>{PAGE_TITLE}</title>\n"));
    html.push_str(&format!("  <link href=\"{BOOTSTRAP_CSS}\" rel=\"stylesheet\">\n"));
    html.push_str(&render_styles());
    html.push_str("</head>\n<body>\n");

    html.push_str(&render_hero(entries.len()));

    html.push_str("  <div class=\"container py-4\">\n");
    html.push_str(&render_section(
        "Classic Ports",
        "classics-grid",
        &classics,
        config,
    ));
    html.push_str(&render_section(
        "2026 Original Games",
        "games-grid",
        &games,
        config,
    ));
    html.push_str(&render_footer());
    html.push_str("  </div>\n");

    html.push_str(&render_search_script());
    html.push_str("</body>\n</html>\n");

    html
}

fn render_styles() -> String {
    r#"  <style>
    body { background: #0d1117; color: #e6edf3; }
    .hero { background: linear-gradient(135deg,#1f2a3c,#0d1117); padding: 3rem 0; }
    .hero h1 { font-size: 2.5rem; font-weight: 700; }
    .hero p { color: #8b949e; }
    .section-title { color: #58a6ff; border-bottom: 1px solid #30363d; padding-bottom: .5rem; margin: 2rem 0 1rem; }
    .card { background: #161b22; border: 1px solid #30363d; border-radius: 8px; overflow: hidden; display: flex; flex-direction: column; }
    .card-body { padding: .75rem; flex: 1; }
    .card-title { color: #e6edf3; font-size: .85rem; margin: 0 0 .25rem; line-height: 1.3; }
    .card-footer { background: transparent; border-top: 1px solid #30363d; padding: .5rem; }
    .btn-primary { background: #238636; border-color: #238636; font-size: .78rem; }
    .btn-primary:hover { background: #2ea043; border-color: #2ea043; }
    .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: .75rem; }
    .badge-count { background: #21262d; color: #8b949e; font-size: .8rem; padding: .2rem .6rem; border-radius: 12px; }
    input#search { background: #21262d; border: 1px solid #30363d; color: #e6edf3; border-radius: 6px; padding: .4rem .8rem; width: 100%; max-width: 400px; }
    input#search::placeholder { color: #8b949e; }
    input#search:focus { outline: none; border-color: #58a6ff; }
  </style>
"#
    .to_string()
}

fn render_hero(total: usize) -> String {
    format!(
        r#"  <div class="hero text-center">
    <div class="container">
      <h1>&#x1F3AE; {PAGE_TITLE}</h1>
      <p class="lead"><span id="total-count">{total}</span> games built with <strong>MoonBit</strong> + <strong>Raylib</strong> for Android</p>
      <input id="search" type="text" placeholder="&#x1F50D; Search games..." oninput="filterCards(this.value)">
    </div>
  </div>
"#
    )
}

fn render_section(
    title: &str,
    grid_id: &str,
    entries: &[&CatalogEntry],
    config: &SiteConfig,
) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "    <h5 class=\"section-title\">{} <span class=\"badge-count\">{}</span></h5>\n",
        title,
        entries.len()
    ));
    html.push_str(&format!("    <div class=\"grid\" id=\"{grid_id}\">\n"));
    for entry in entries {
        html.push_str(&render_card(entry, config));
    }
    html.push_str("    </div>\n");

    html
}

fn render_card(entry: &CatalogEntry, config: &SiteConfig) -> String {
    let file_name = format!("{}{}", entry.name, APK_SUFFIX);

    format!(
        r#"      <div class="card">
        <div class="card-body">
          <h6 class="card-title">{}</h6>
          <small class="text-muted">{} MB</small>
        </div>
        <div class="card-footer">
          <a href="{}" class="btn btn-sm btn-primary w-100" download="{}">
            &#x2B07; Download APK
          </a>
        </div>
      </div>
"#,
        escape_html(&entry.display_name()),
        entry.size_mb(),
        escape_html(&config.download_url(&entry.name)),
        escape_html(&file_name)
    )
}

fn render_footer() -> String {
    format!(
        r#"    <p class="text-center mt-5" style="color:#8b949e;font-size:.8rem">
      Built from <a href="https://github.com/{SOURCE_REPO}" style="color:#58a6ff">{SOURCE_REPO}</a>
    </p>
"#
    )
}

fn render_search_script() -> String {
    r"  <script>
    function filterCards(q) {
      q = q.toLowerCase();
      document.querySelectorAll('.card').forEach(c => {
        const title = c.querySelector('.card-title').textContent.toLowerCase();
        c.style.display = title.includes(q) ? '' : 'none';
      });
    }
  </script>
"
    .to_string()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, size_bytes: u64) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            size_bytes,
        }
    }

    fn sample_entries() -> Vec<CatalogEntry> {
        vec![
            entry("RaylibAsteroids2026", 3_145_728),
            entry("RaylibBattleCity", 15_728_640),
            entry("RaylibFoo2026", 10_485_760),
            entry("RaylibMinesweeper", 1_048_576),
            entry("RaylibSuperMario1985Lite", 5_242_880),
        ]
    }

    /// Text between the opening tag of `grid_id` and its closing `</div>` line.
    fn grid<'a>(html: &'a str, grid_id: &str) -> &'a str {
        let open = format!("<div class=\"grid\" id=\"{grid_id}\">");
        let start = html.find(&open).unwrap() + open.len();
        let end = start + html[start..].find("\n    </div>").unwrap();
        &html[start..end]
    }

    #[test]
    fn test_partition_is_exhaustive_and_disjoint() {
        let entries = sample_entries();
        let (classics, games) = partition(&entries);

        assert_eq!(classics.len() + games.len(), entries.len());
        assert!(classics.iter().all(|c| !games.contains(c)));
        assert!(classics.iter().all(|e| e.category() == Category::Classic));
        assert!(games.iter().all(|e| e.category() == Category::Current));
    }

    #[test]
    fn test_partition_keeps_order() {
        let entries = sample_entries();
        let (classics, games) = partition(&entries);

        let classic_names: Vec<&str> = classics.iter().map(|e| e.name.as_str()).collect();
        let game_names: Vec<&str> = games.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            classic_names,
            vec!["RaylibBattleCity", "RaylibMinesweeper", "RaylibSuperMario1985Lite"]
        );
        assert_eq!(game_names, vec!["RaylibAsteroids2026", "RaylibFoo2026"]);
    }

    #[test]
    fn test_render_counts_and_cards() {
        let html = render_catalog(&sample_entries(), &SiteConfig::default());

        assert!(html.contains(r#"<span id="total-count">5</span> games"#));
        assert!(html.contains(r#"Classic Ports <span class="badge-count">3</span>"#));
        assert!(html.contains(r#"2026 Original Games <span class="badge-count">2</span>"#));
        assert_eq!(html.matches(r#"<div class="card">"#).count(), 5);

        let games = grid(&html, "games-grid");
        assert!(games.contains(r#"<h6 class="card-title">Foo</h6>"#));
        assert!(games.contains("<small class=\"text-muted\">10.0 MB</small>"));
        assert!(games.contains(
            r#"href="https://moonbit-raylib-android-games.s3.us-west-2.amazonaws.com/RaylibFoo2026.apk""#
        ));
        assert!(games.contains(r#"download="RaylibFoo2026.apk""#));
        assert!(!games.contains("Battle City"));

        let classics = grid(&html, "classics-grid");
        assert!(classics.contains(r#"<h6 class="card-title">Super Mario1985</h6>"#));
        assert!(classics.contains("15.0 MB"));
    }

    #[test]
    fn test_render_card_order_follows_names() {
        let html = render_catalog(&sample_entries(), &SiteConfig::default());
        let classics = grid(&html, "classics-grid");

        let battle = classics.find("Battle City").unwrap();
        let mines = classics.find("Minesweeper").unwrap();
        let mario = classics.find("Super Mario1985").unwrap();
        assert!(battle < mines && mines < mario);

        let games = grid(&html, "games-grid");
        assert!(games.find(">Asteroids<").unwrap() < games.find(">Foo<").unwrap());
    }

    #[test]
    fn test_render_empty_catalog() {
        let html = render_catalog(&[], &SiteConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains(r#"<span id="total-count">0</span> games"#));
        assert!(html.contains(r#"Classic Ports <span class="badge-count">0</span>"#));
        assert!(html.contains(r#"2026 Original Games <span class="badge-count">0</span>"#));
        assert!(grid(&html, "classics-grid").trim().is_empty());
        assert!(grid(&html, "games-grid").trim().is_empty());
        assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
    }

    #[test]
    fn test_render_is_deterministic() {
        let cfg = SiteConfig::new("bucket", "eu-west-1", "out");
        assert_eq!(
            render_catalog(&sample_entries(), &cfg),
            render_catalog(&sample_entries(), &cfg)
        );
    }

    #[test]
    fn test_render_includes_search_filter() {
        let html = render_catalog(&sample_entries(), &SiteConfig::default());
        assert!(html.contains(r#"oninput="filterCards(this.value)""#));
        assert!(html.contains("function filterCards(q)"));
        assert!(html.contains("q.toLowerCase()"));
    }

    #[test]
    fn test_render_uses_configured_bucket() {
        let cfg = SiteConfig::new("my-games", "ap-south-1", "out");
        let html = render_catalog(&[entry("RaylibFoo2026", 1)], &cfg);
        assert!(html.contains("https://my-games.s3.ap-south-1.amazonaws.com/RaylibFoo2026.apk"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }
}
