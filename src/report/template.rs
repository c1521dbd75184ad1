use chrono::NaiveDate;
use minijinja::{context, Environment};

use crate::error::Result;
use crate::report::options::ReportStyle;

const TEMPLATE_NAME: &str = "report.html";

// Style values and the title are auto-escaped; the two sections are already
// translated markup and go in verbatim.
const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="{{ encoding }}">
    <title>{{ style.title }}</title>
    <style>
        body { font-family: {{ style.font_family }}; line-height: {{ style.line_height }}; color: {{ style.text_color }}; }
        h1 { color: {{ style.title_color }}; text-align: center; }
        h2 { color: {{ style.section_color }}; }
        h3 { color: {{ style.subsection_color }}; }
        .section { margin-bottom: {{ style.section_spacing }}; }
        .generated { text-align: center; font-size: 0.85em; }
        ul { padding-left: 20px; }
    </style>
</head>
<body>
    <h1>{{ style.title }}</h1>
    <p class="generated">Generated on {{ generated_on }}</p>

    <div class="section">
        <h2>Financial Summary</h2>
        {{ summary|safe }}
    </div>

    <div class="section">
        <h2>Personalized Financial Advice</h2>
        {{ advice|safe }}
    </div>
</body>
</html>
"#;

pub struct ReportTemplate {
    env: Environment<'static>,
}

impl ReportTemplate {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, REPORT_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Embeds the already-translated `summary` and `advice` fragments.
    pub fn render(
        &self,
        style: &ReportStyle,
        encoding: &str,
        generated_on: NaiveDate,
        summary: &str,
        advice: &str,
    ) -> Result<String> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        let html = template.render(context! {
            style => style,
            encoding => encoding,
            generated_on => generated_on.format("%B %-d, %Y").to_string(),
            summary => summary,
            advice => advice,
        })?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(style: &ReportStyle, summary: &str, advice: &str) -> String {
        ReportTemplate::new()
            .unwrap()
            .render(
                style,
                "UTF-8",
                NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                summary,
                advice,
            )
            .unwrap()
    }

    #[test]
    fn test_sections_in_order() {
        let html = render(&ReportStyle::default(), "SUMMARY-BODY", "ADVICE-BODY");

        let summary_heading = html.find("<h2>Financial Summary</h2>").unwrap();
        let summary_body = html.find("SUMMARY-BODY").unwrap();
        let advice_heading = html.find("<h2>Personalized Financial Advice</h2>").unwrap();
        let advice_body = html.find("ADVICE-BODY").unwrap();

        assert!(summary_heading < summary_body);
        assert!(summary_body < advice_heading);
        assert!(advice_heading < advice_body);
        assert!(html.contains("<h1>Financial Report</h1>"));
        assert!(html.contains("Generated on March 5, 2024"));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
    }

    #[test]
    fn test_style_is_applied() {
        let html = render(&ReportStyle::default(), "", "");
        assert!(html.contains("font-family: Arial, sans-serif"));
        assert!(html.contains("line-height: 1.6"));
        assert!(html.contains("h3 { color: #2980b9; }"));
    }

    #[test]
    fn test_fragments_are_not_escaped_but_title_is() {
        let style = ReportStyle {
            title: "Budget <Q1>".to_string(),
            ..ReportStyle::default()
        };
        let html = render(&style, "<h3>Overview</h3><br>", "Save more.");

        assert!(html.contains("<h3>Overview</h3><br>"));
        assert!(html.contains("<h1>Budget &lt;Q1&gt;</h1>"));
    }
}
