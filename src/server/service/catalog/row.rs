//! CSV row shape shared by the export and import transforms.
//!
//! The structured description JSON is flattened into three sub-columns
//! (`description_short`, `description_html`, `description_detailed`);
//! media references travel as `disk/name` relative paths and product
//! relations as a semicolon-joined list of service slugs.

use super::CatalogKind;

const BASE_HEADERS: [&str; 14] = [
    "id",
    "name",
    "slug",
    "description_short",
    "description_html",
    "description_detailed",
    "seo_title",
    "seo_description",
    "seo_keywords",
    "chapter",
    "order",
    "is_active",
    "image",
    "icon",
];

const SERVICES_HEADER: &str = "services";

/// Column headers for the given entity type; products carry the extra
/// related-services column.
pub fn headers(kind: CatalogKind) -> Vec<&'static str> {
    let mut headers = BASE_HEADERS.to_vec();
    if kind == CatalogKind::Product {
        headers.push(SERVICES_HEADER);
    }
    headers
}

/// One parsed CSV row of catalog data.
#[derive(Debug, Clone, Default)]
pub struct CatalogRow {
    pub id: Option<i32>,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<serde_json::Value>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    /// Chapter name; resolved to an id (creating the chapter when new)
    /// during import.
    pub chapter: Option<String>,
    pub order: Option<i32>,
    pub is_active: bool,
    /// Media relative path `disk/name`.
    pub image: Option<String>,
    pub icon: Option<String>,
    /// Related service slugs (products only).
    pub services: Vec<String>,
}

impl CatalogRow {
    /// Parses a CSV record against its header row.
    ///
    /// Returns a row-level error message when a required value is missing
    /// or a typed column fails to parse; the import skips such rows and
    /// keeps going.
    pub fn from_record(
        headers: &csv::StringRecord,
        record: &csv::StringRecord,
    ) -> Result<Self, String> {
        let get = |column: &str| -> Option<String> {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column))
                .and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let name = get("name").ok_or("missing required value in column 'name'")?;

        let id = get("id")
            .map(|v| v.parse::<i32>())
            .transpose()
            .map_err(|e| format!("invalid id: {}", e))?;

        let order = get("order")
            .map(|v| v.parse::<i32>())
            .transpose()
            .map_err(|e| format!("invalid order: {}", e))?;

        let is_active = get("is_active")
            .map(|v| parse_bool(&v))
            .transpose()?
            .unwrap_or(true);

        let services = get(SERVICES_HEADER)
            .map(|v| {
                v.split(';')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            id,
            name,
            slug: get("slug"),
            description: description_from_parts(
                get("description_short"),
                get("description_html"),
                get("description_detailed"),
            ),
            seo_title: get("seo_title"),
            seo_description: get("seo_description"),
            seo_keywords: get("seo_keywords"),
            chapter: get("chapter"),
            order,
            is_active,
            image: get("image"),
            icon: get("icon"),
            services,
        })
    }

    /// Serializes the row into CSV fields matching `headers(kind)`.
    pub fn to_fields(&self, kind: CatalogKind) -> Vec<String> {
        let (short, html, detailed) = description_parts(&self.description);

        let mut fields = vec![
            self.id.map(|v| v.to_string()).unwrap_or_default(),
            self.name.clone(),
            self.slug.clone().unwrap_or_default(),
            short,
            html,
            detailed,
            self.seo_title.clone().unwrap_or_default(),
            self.seo_description.clone().unwrap_or_default(),
            self.seo_keywords.clone().unwrap_or_default(),
            self.chapter.clone().unwrap_or_default(),
            self.order.map(|v| v.to_string()).unwrap_or_default(),
            if self.is_active { "1" } else { "0" }.to_string(),
            self.image.clone().unwrap_or_default(),
            self.icon.clone().unwrap_or_default(),
        ];

        if kind == CatalogKind::Product {
            fields.push(self.services.join(";"));
        }

        fields
    }
}

/// Assembles the structured description JSON from its flattened columns;
/// `None` when every part is empty.
pub fn description_from_parts(
    short: Option<String>,
    html: Option<String>,
    detailed: Option<String>,
) -> Option<serde_json::Value> {
    if short.is_none() && html.is_none() && detailed.is_none() {
        return None;
    }

    let mut map = serde_json::Map::new();
    if let Some(short) = short {
        map.insert("short".to_string(), serde_json::Value::String(short));
    }
    if let Some(html) = html {
        map.insert("html".to_string(), serde_json::Value::String(html));
    }
    if let Some(detailed) = detailed {
        map.insert("detailed".to_string(), serde_json::Value::String(detailed));
    }

    Some(serde_json::Value::Object(map))
}

/// Flattens the structured description JSON back into its three columns.
pub fn description_parts(description: &Option<serde_json::Value>) -> (String, String, String) {
    let part = |key: &str| -> String {
        description
            .as_ref()
            .and_then(|d| d.get(key))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };

    (part("short"), part("html"), part("detailed"))
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(format!("invalid boolean '{}'", other)),
    }
}
