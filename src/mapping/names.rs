use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Ordered vocabulary rewrites applied after PascalCase conversion.
///
/// Order matters: every rule runs against the output of the previous one.
/// Patterns ending in `$` only match at the end of the name.
const VOCABULARY: [(&str, &str); 20] = [
    ("address$", "Address"),
    ("assignment$", "Assignment"),
    ("by", "By"),
    ("category", "Category"),
    ("certificate$", "Certificate"),
    ("code", "Code"),
    ("company", "Company"),
    ("date", "Date"),
    ("industry", "Industry"),
    ("lesson", "Lesson"),
    ("method", "Method"),
    ("modified", "Modified"),
    ("name", "Name"),
    ("phone", "Phone"),
    ("progress", "Progress"),
    ("project", "Project"),
    ("section", "Section"),
    ("status", "Status"),
    ("topic", "Topic"),
    ("url$", "URL"),
];

static VOCABULARY_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    VOCABULARY
        .iter()
        .map(|(pattern, canonical)| {
            let regex = Regex::new(&format!("(?i){pattern}"))
                .expect("vocabulary patterns are valid regular expressions");
            (regex, *canonical)
        })
        .collect()
});

/// Normalize a raw table or column name into its display form.
///
/// The result is used both as a label and as a document key, so two raw names
/// that normalize to the same string share one key.
///
/// Examples:
/// - `"id"` -> `"ID"`
/// - `"user_id"` -> `"UserID"`
/// - `"created_date"` -> `"CreatedDate"`
/// - `"website_url"` -> `"WebsiteURL"`
pub fn normalize(identifier: &str) -> String {
    if identifier.to_lowercase() == "id" {
        return "ID".to_string();
    }

    let mut normalized = snake_to_pascal(&identifier.to_lowercase());

    let len = normalized.len();
    if len >= 2
        && normalized.is_char_boundary(len - 2)
        && normalized[len - 2..].eq_ignore_ascii_case("id")
    {
        normalized.truncate(len - 2);
        normalized.push_str("ID");
    }

    for (pattern, canonical) in VOCABULARY_RULES.iter() {
        normalized = pattern
            .replace_all(&normalized, NoExpand(*canonical))
            .into_owned();
    }

    normalized
}

/// Upper-case the first character and every character following an underscore,
/// dropping those underscores.
///
/// A trailing underscore has nothing to capitalize and is kept.
fn snake_to_pascal(lower: &str) -> String {
    let mut out = String::with_capacity(lower.len());
    let mut chars = lower.chars();

    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }

    while let Some(ch) = chars.next() {
        if ch != '_' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(next) => out.extend(next.to_uppercase()),
            None => out.push('_'),
        }
    }

    out
}

/// Naive plural used for collection routes: append `s` unless the name
/// already ends in `s`.
///
/// `"category"` becomes `"categorys"` and `"status"` stays `"status"`.
pub fn pluralize(name: &str) -> String {
    if name.ends_with('s') {
        name.to_string()
    } else {
        format!("{name}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_special_case_ignores_case() {
        assert_eq!(normalize("id"), "ID");
        assert_eq!(normalize("ID"), "ID");
        assert_eq!(normalize("Id"), "ID");
    }

    #[test]
    fn id_suffix_is_upper_cased_after_pascal_conversion() {
        assert_eq!(normalize("user_id"), "UserID");
        assert_eq!(normalize("userid"), "UserID");
        assert_eq!(normalize("paid"), "PaID");
    }

    #[test]
    fn snake_case_becomes_pascal_case() {
        assert_eq!(normalize("widget"), "Widget");
        assert_eq!(normalize("order_line_item"), "OrderLineItem");
        assert_eq!(normalize("ORDER_LINE"), "OrderLine");
    }

    #[test]
    fn pascal_conversion_edge_cases() {
        assert_eq!(snake_to_pascal(""), "");
        assert_eq!(snake_to_pascal("a__b"), "A_b");
        assert_eq!(snake_to_pascal("abc_"), "Abc_");
        assert_eq!(snake_to_pascal("_abc"), "_abc");
    }

    #[test]
    fn vocabulary_rules_capitalize_known_words() {
        assert_eq!(normalize("created_date"), "CreatedDate");
        assert_eq!(normalize("createddate"), "CreatedDate");
        assert_eq!(normalize("modifiedby"), "ModifiedBy");
        assert_eq!(normalize("companyname"), "CompanyName");
        assert_eq!(normalize("projectstatus"), "ProjectStatus");
        assert_eq!(normalize("homephone"), "HomePhone");
    }

    #[test]
    fn anchored_rules_only_match_at_the_end() {
        assert_eq!(normalize("websiteurl"), "WebsiteURL");
        assert_eq!(normalize("urlpath"), "Urlpath");
        assert_eq!(normalize("homeaddress"), "HomeAddress");
        assert_eq!(normalize("addressline"), "Addressline");
    }

    #[test]
    fn unanchored_by_rule_rewrites_inside_words() {
        assert_eq!(normalize("lobby"), "LobBy");
    }

    #[test]
    fn distinct_names_may_collide() {
        assert_eq!(normalize("created_by"), normalize("createdby"));
    }

    #[test]
    fn pluralize_appends_s_unless_present() {
        assert_eq!(pluralize("widget"), "widgets");
        assert_eq!(pluralize("items"), "items");
        assert_eq!(pluralize("status"), "status");
        assert_eq!(pluralize("category"), "categorys");
    }
}
