//! HTML and CSV rendering for the digest.

use std::fmt::Write;

use jobwatch_search::Posting;

/// Base URL for apply links; the posting id is appended as the last segment.
const JOB_URL_BASE: &str = "https://www.amazon.jobs/en/jobs";

/// Filename of the CSV attachment.
pub const ATTACHMENT_FILENAME: &str = "new_jobs.csv";

/// Placeholder for optional fields the listing does not carry.
const NOT_AVAILABLE: &str = "N/A";

/// Apply link for a posting id.
pub fn apply_link(id: &str) -> String {
    format!("{JOB_URL_BASE}/{id}")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the HTML body, one card per posting in input order.
pub fn render_html(postings: &[Posting]) -> String {
    let mut html = String::from(
        "<html>\n<head>\n<style>\n\
         body { font-family: Arial, sans-serif; }\n\
         .job { margin: 20px 0; padding: 15px; border: 1px solid #ddd; border-radius: 5px; }\n\
         .job-title { color: #232f3e; font-size: 18px; font-weight: bold; }\n\
         .job-details { margin: 10px 0; }\n\
         .apply-button { background-color: #ff9900; color: white; padding: 10px 20px; \
         text-decoration: none; border-radius: 3px; display: inline-block; }\n\
         </style>\n</head>\n<body>\n\
         <h2>New Amazon entry-level software postings</h2>\n",
    );

    for posting in postings {
        let level = posting.level.as_deref().unwrap_or(NOT_AVAILABLE);
        let quals = posting
            .basic_qualifications
            .as_deref()
            .unwrap_or(NOT_AVAILABLE);

        write!(
            html,
            "<div class=\"job\">\n\
             <div class=\"job-title\">{title}</div>\n\
             <div class=\"job-details\">\n\
             <p><strong>Location:</strong> {location}</p>\n\
             <p><strong>Posted:</strong> {posted}</p>\n\
             <p><strong>Level:</strong> {level}</p>\n\
             <p><strong>Basic qualifications:</strong> {quals}</p>\n\
             </div>\n\
             <a href=\"{link}\" class=\"apply-button\">Apply</a>\n\
             </div>\n",
            title = escape_html(&posting.title),
            location = escape_html(&posting.location),
            posted = escape_html(&posting.posted_date),
            level = escape_html(level),
            quals = escape_html(quals),
            link = apply_link(&posting.id),
        )
        .expect("writing to a String cannot fail");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render the CSV attachment: a fixed header then one quoted row per posting
/// in input order, six fields each.
pub fn render_csv(postings: &[Posting]) -> String {
    let mut csv = String::from("Title,Location,Posted Date,Level,Job ID,Apply Link\n");

    for posting in postings {
        let fields = [
            posting.title.as_str(),
            posting.location.as_str(),
            posting.posted_date.as_str(),
            posting.level.as_deref().unwrap_or(NOT_AVAILABLE),
            posting.id.as_str(),
            &apply_link(&posting.id),
        ];
        let row: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    csv
}
