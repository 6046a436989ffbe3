use serde::Deserialize;

/// One mad-lib story: a title, the blank prompts, and the fixed text
/// fragments the responses are woven into.
///
/// Decoded from a JSON object `{title, blanks, value}`; all three fields are
/// required, so a record missing any of them fails decoding eagerly at load
/// time. `blanks` and `value` are independently ordered sequences — the only
/// structural link between them is array position.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Template {
    pub title: String,
    pub blanks: Vec<String>,
    #[serde(rename = "value")]
    pub fixed_segments: Vec<String>,
}

/// Ordered set of templates; the zero-based index is the user-facing
/// selector, in the exact order the data file listed them.
#[derive(Debug, Clone, Default)]
pub struct TemplateCollection(Vec<Template>);

impl TemplateCollection {
    pub fn new(templates: Vec<Template>) -> Self {
        Self(templates)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Template> {
        self.0.get(index)
    }

    /// Titles in collection order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|template| template.title.as_str())
    }
}
