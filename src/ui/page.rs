//! Static HTML page generator.
//!
//! Serialises a [`MemoryView`] into a self-contained page: tab triggers,
//! tab panels with the three result tables, summary cards, and a small inline
//! script so the tabs keep working when the file is opened in a browser.

use std::fmt::Write;

use super::escape::escape_html;
use super::tabs::Tab;
use super::view::{Content, ElementId, MemoryView};

const STYLES: &str = r#"
    <style>
        :root {
            --bg-color: #1e1e2e;
            --text-color: #cdd6f4;
            --accent-color: #89b4fa;
            --buy-color: #a6e3a1;
            --exit-color: #f38ba8;
            --border-color: #45475a;
            --card-bg: #313244;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background-color: var(--bg-color);
            color: var(--text-color);
            margin: 0;
            padding: 20px;
            line-height: 1.6;
        }

        .container { max-width: 1200px; margin: 0 auto; }
        h1 { color: var(--accent-color); }
        .header { border-bottom: 2px solid var(--border-color); padding-bottom: 20px; margin-bottom: 30px; }

        .summary-cards {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
            margin-bottom: 30px;
        }
        .card { background-color: var(--card-bg); border-radius: 8px; padding: 20px; border: 1px solid var(--border-color); }
        .card-title { font-size: 0.9em; color: #a6adc8; margin-bottom: 10px; }
        .card-value { font-size: 2em; font-weight: bold; }

        .tabs { display: flex; border-bottom: 2px solid var(--border-color); margin-bottom: 20px; }
        .tab-button {
            background: none;
            border: none;
            color: var(--text-color);
            padding: 10px 20px;
            cursor: pointer;
            font-size: 1em;
            border-bottom: 2px solid transparent;
            margin-bottom: -2px;
        }
        .tab-button.active { border-bottom-color: var(--accent-color); color: var(--accent-color); }
        .tab-content { display: none; }
        .tab-content.active { display: block; }

        table { width: 100%; border-collapse: collapse; background-color: var(--card-bg); border-radius: 8px; overflow: hidden; }
        th, td { padding: 12px 15px; text-align: left; border-bottom: 1px solid var(--border-color); }
        th { background-color: #45475a; font-weight: 600; }
        .no-data { text-align: center; color: #a6adc8; font-style: italic; }

        .signal-badge, .score-badge { display: inline-block; padding: 2px 8px; border-radius: 4px; font-size: 0.85em; font-weight: 500; }
        .signal-s1-buy, .signal-s2-buy { background-color: rgba(166, 227, 161, 0.2); color: var(--buy-color); }
        .signal-s1-exit, .signal-s2-exit { background-color: rgba(243, 139, 168, 0.2); color: var(--exit-color); }
        .score-badge { background-color: rgba(137, 180, 250, 0.2); color: var(--accent-color); }

        .error-message { background-color: rgba(243, 139, 168, 0.2); color: var(--exit-color); padding: 20px; border-radius: 8px; }
    </style>
"#;

const TAB_SCRIPT: &str = r#"
    <script>
        document.querySelectorAll('.tab-button').forEach(button => {
            button.addEventListener('click', () => {
                const tabName = button.dataset.tab;
                document.querySelectorAll('.tab-button').forEach(btn => btn.classList.remove('active'));
                button.classList.add('active');
                document.querySelectorAll('.tab-content').forEach(panel => panel.classList.remove('active'));
                document.getElementById(tabName + 'Tab').classList.add('active');
            });
        });
    </script>
"#;

/// HTML page writer
pub struct HtmlPage {
    title: String,
    include_script: bool,
}

impl HtmlPage {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            include_script: true,
        }
    }

    /// Leave out the inline tab-switching script
    pub fn without_script(mut self) -> Self {
        self.include_script = false;
        self
    }

    pub fn render(&self, view: &MemoryView) -> Result<String, std::fmt::Error> {
        let mut html = String::new();

        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(html, "    <title>{}</title>", escape_html(&self.title))?;
        writeln!(html, "{}", STYLES)?;
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"container\">")?;

        writeln!(html, "<div class=\"header\">")?;
        writeln!(html, "    <h1>{}</h1>", escape_html(&self.title))?;
        writeln!(
            html,
            "    <p id=\"{}\">{}</p>",
            ElementId::LastUpdated.as_str(),
            element_markup(view, ElementId::LastUpdated)
        )?;
        writeln!(html, "</div>")?;

        if let Some(message) = view.error() {
            writeln!(html, "<div class=\"error-message\" id=\"errorMessage\">{}</div>", escape_html(message))?;
        } else {
            self.write_summary(&mut html, view)?;
            self.write_tabs(&mut html, view)?;
        }

        writeln!(
            html,
            "<p class=\"footer\">Generated by screener-ui v{} on {}</p>",
            env!("CARGO_PKG_VERSION"),
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(html, "</div>")?;
        if self.include_script && view.error().is_none() {
            writeln!(html, "{}", TAB_SCRIPT)?;
        }
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html)
    }

    fn write_summary(&self, html: &mut String, view: &MemoryView) -> std::fmt::Result {
        let cards = [
            ("CANSL Passed", ElementId::CanslCount),
            ("Buy Signals", ElementId::BuyCount),
            ("Exit Signals", ElementId::ExitCount),
        ];

        writeln!(html, "<div class=\"summary-cards\">")?;
        for (title, id) in cards {
            writeln!(html, "    <div class=\"card\">")?;
            writeln!(html, "        <div class=\"card-title\">{}</div>", title)?;
            writeln!(
                html,
                "        <div class=\"card-value\" id=\"{}\">{}</div>",
                id.as_str(),
                element_markup(view, id)
            )?;
            writeln!(html, "    </div>")?;
        }
        writeln!(html, "</div>")?;
        Ok(())
    }

    fn write_tabs(&self, html: &mut String, view: &MemoryView) -> std::fmt::Result {
        writeln!(html, "<div class=\"tabs\">")?;
        for (marker, active) in view.triggers() {
            let title = marker.parse::<Tab>().map(|t| t.title()).unwrap_or(marker.as_str());
            writeln!(
                html,
                "    <button class=\"tab-button{}\" data-tab=\"{}\">{}</button>",
                if *active { " active" } else { "" },
                escape_html(marker),
                escape_html(title)
            )?;
        }
        writeln!(html, "</div>")?;

        for (panel_id, active) in view.panels() {
            writeln!(
                html,
                "<div class=\"tab-content{}\" id=\"{}\">",
                if *active { " active" } else { "" },
                escape_html(panel_id)
            )?;

            let marker = panel_id.strip_suffix("Tab").unwrap_or(panel_id.as_str());
            match marker.parse::<Tab>() {
                Ok(tab) => write_table(html, view, tab)?,
                Err(_) => writeln!(html, "    <p class=\"no-data\">Nothing to show</p>")?,
            }
            writeln!(html, "</div>")?;
        }
        Ok(())
    }
}

static CANSL_HEADERS: [&str; 4] = ["Ticker", "Company", "Close Price", "CANSLIM Score"];
static SIGNAL_HEADERS: [&str; 5] = ["Ticker", "Company", "Close Price", "Signal", "CANSLIM Score"];

fn write_table(html: &mut String, view: &MemoryView, tab: Tab) -> std::fmt::Result {
    let (headers, body) = match tab {
        Tab::Cansl => (&CANSL_HEADERS[..], ElementId::CanslTableBody),
        Tab::Buy => (&SIGNAL_HEADERS[..], ElementId::BuyTableBody),
        Tab::Exit => (&SIGNAL_HEADERS[..], ElementId::ExitTableBody),
    };

    writeln!(html, "    <table>")?;
    writeln!(html, "        <thead>")?;
    writeln!(html, "            <tr>")?;
    for header in headers {
        writeln!(html, "                <th>{}</th>", header)?;
    }
    writeln!(html, "            </tr>")?;
    writeln!(html, "        </thead>")?;
    writeln!(html, "        <tbody id=\"{}\">", body.as_str())?;
    writeln!(html, "{}", element_markup(view, body))?;
    writeln!(html, "        </tbody>")?;
    writeln!(html, "    </table>")?;
    Ok(())
}

/// Text content is escaped here; markup was escaped by the renderer
fn element_markup(view: &MemoryView, id: ElementId) -> String {
    match view.content(id) {
        Some(Content::Text(text)) => escape_html(text),
        Some(Content::Html(markup)) => markup.clone(),
        None => String::new(),
    }
}
