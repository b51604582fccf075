use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use litematic::SchematicMetadata;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Tsv,
}

const TSV_COLUMNS: [&str; 13] = [
    "path",
    "version",
    "sub_version",
    "data_version",
    "regions",
    "name",
    "author",
    "created",
    "modified",
    "total_blocks",
    "total_volume",
    "size",
    "preview_pixels",
];

impl OutputFormat {
    pub fn header(&self) -> Option<String> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Tsv => Some(TSV_COLUMNS.join("\t")),
        }
    }

    pub fn render(&self, meta: &SchematicMetadata) -> String {
        match self {
            OutputFormat::Text => render_text(meta),
            OutputFormat::Tsv => render_tsv(meta),
        }
    }
}

/// RFC 3339 when chrono can represent the instant, raw epoch millis otherwise.
fn timestamp(millis: Option<i64>) -> String {
    match millis {
        Some(ms) => DateTime::<Utc>::from_timestamp_millis(ms)
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
            .unwrap_or_else(|| format!("{ms} ms")),
        None => String::new(),
    }
}

fn size(meta: &SchematicMetadata) -> String {
    meta.enclosing_size()
        .map(|s| format!("{}x{}x{}", s.x, s.y, s.z))
        .unwrap_or_default()
}

fn render_text(meta: &SchematicMetadata) -> String {
    let mut out = String::new();
    let mut line = |key: &str, value: &dyn std::fmt::Display| {
        out.push_str(&format!("{key:<14} {value}\n"));
    };

    line("file", &meta.source().display());
    line(
        "version",
        &format!("{}.{}", meta.version(), meta.sub_version()),
    );
    line("data version", &meta.data_version());
    line("regions", &meta.region_count());
    if let Some(name) = meta.name() {
        line("name", &name);
    }
    if let Some(author) = meta.author() {
        line("author", &author);
    }
    if let Some(description) = meta.description() {
        line("description", &description);
    }
    if meta.time_created_millis().is_some() {
        line("created", &timestamp(meta.time_created_millis()));
    }
    if meta.time_modified_millis().is_some() {
        line("modified", &timestamp(meta.time_modified_millis()));
    }
    line("total blocks", &meta.total_blocks());
    line("total volume", &meta.total_volume());
    if let Some(s) = meta.enclosing_size() {
        line("size", &format!("{}x{}x{} ({} blocks)", s.x, s.y, s.z, s.volume()));
    }
    if let Some(preview) = meta.preview_image() {
        line("preview", &format!("{} pixels", preview.len()));
    }
    out
}

fn render_tsv(meta: &SchematicMetadata) -> String {
    // Tabs and newlines inside free-text fields would break the row.
    let clean = |s: Option<&str>| s.unwrap_or_default().replace(['\t', '\n', '\r'], " ");

    let fields = [
        meta.source().display().to_string(),
        meta.version().to_string(),
        meta.sub_version().to_string(),
        meta.data_version().to_string(),
        meta.region_count().to_string(),
        clean(meta.name()),
        clean(meta.author()),
        timestamp(meta.time_created_millis()),
        timestamp(meta.time_modified_millis()),
        meta.total_blocks().to_string(),
        meta.total_volume().to_string(),
        size(meta),
        meta.preview_image()
            .map(|p| p.len().to_string())
            .unwrap_or_default(),
    ];
    format!("{}\n", fields.join("\t"))
}
