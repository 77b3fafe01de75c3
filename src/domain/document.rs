use crate::domain::branch::BranchList;
use crate::domain::change::ChangeSet;
use crate::domain::commit::CommitInfo;
use crate::domain::metadata::{CheckinMetadata, MetadataField};

const CONTAINER_STYLE: &str = "margin-bottom: 10px;";
const HEADER_STYLE: &str = "text-align:left;color:#f2f2f2;font-weight:200;line-height:1.5;text-transform:uppercase;position:relative;font-size:18px;padding:15px;margin-bottom:0;background-color:#303F9F;";
const BODY_STYLE: &str = "padding:10px;background:#e5e5e5;box-sizing:border-box;border-top:0 solid #d8d8d8;border-right:1px solid #d8d8d8;border-bottom:2px solid #d8d8d8;border-left:1px solid #d8d8d8;font:Roboto,arial,sans-serif";
const SIGN_OFF: &str = "Regards,";

/// Everything rendered into the check-in email.
pub struct CheckinDocument<'a> {
    pub commit: &'a CommitInfo,
    pub metadata: &'a CheckinMetadata,
    pub branches: &'a BranchList,
    pub changes: &'a ChangeSet,
}

impl CheckinDocument<'_> {
    pub fn render(&self) -> String {
        let mut html = String::new();

        html.push_str(&format!("<div style=\"{CONTAINER_STYLE}\">"));
        html.push_str(&format!(
            "<h2 style=\"{HEADER_STYLE}\">{}</h2>",
            escape_html(&self.commit.message)
        ));
        html.push_str(&format!("<div style=\"{BODY_STYLE}\">"));

        for (label, value) in self.rows() {
            html.push_str(&format!(
                "<div><b>{label}:</b>&nbsp;{}</div><br/>",
                escape_html(&value)
            ));
        }

        for (category, records) in self.changes.sections() {
            html.push_str(&format!("<div><b>{} Files:</b></div><ul>", category.as_str()));
            for record in records {
                html.push_str("<li>");
                html.push_str(&escape_html(&record.path));
                if let Some(destination) = &record.destination {
                    html.push_str(" -> ");
                    html.push_str(&escape_html(destination));
                }
                html.push_str("</li>");
            }
            html.push_str("</ul>");
        }

        html.push_str("</div></div>");
        html.push_str(SIGN_OFF);
        html
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        let row = |field: MetadataField| (field.label(), self.metadata.get(field).to_string());

        vec![
            row(MetadataField::Project),
            ("Task", self.commit.task().to_string()),
            row(MetadataField::ReviewedBy),
            row(MetadataField::QatBy),
            row(MetadataField::Summary),
            row(MetadataField::Impacts),
            row(MetadataField::Notes),
            ("Git Branch", self.branches.joined()),
            ("Commit Hash", self.commit.hash.clone()),
        ]
    }
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
