use crate::utils::fetcher::TextItem;
use crate::workflow::tally::Tally;

/// Most cards the content area shows at once.
const MAX_CARDS: usize = 3;

pub fn render_cards(items: &[TextItem]) -> String {
    let mut html = String::new();
    for item in items.iter().take(MAX_CARDS) {
        html.push_str(&format!(
            "<div class=\"card\"><h3>{}</h3><p class=\"card-meta\">{} | {}</p><p>{}</p></div>",
            item.title, item.author, item.genre, item.content
        ));
    }
    html
}

pub fn render_results_table(tally: &Tally) -> String {
    let mut rows = String::new();
    for (option, count) in tally.entries() {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{:.1}%</td></tr>",
            option,
            count,
            tally.percentage(option)
        ));
    }
    format!(
        "<table class=\"results-table\"><thead><tr><th>Product</th><th>Votes</th><th>%</th></tr></thead><tbody>{}</tbody></table>",
        rows
    )
}

pub fn render_results_error(message: &str) -> String {
    format!("<p class=\"results-error\">{}</p>", message)
}
