use super::errors::{PromptError, PromptResult};
use super::multi_axis::{self, MultiAxisTemplate};
use super::templates::{library, PromptTemplate};

/// Anything a registry can look up by id
pub trait RegistryEntry {
    fn id(&self) -> &str;
}

/// Ordered collection of templates with a fallback entry
///
/// Lookups never fail: unknown ids resolve to the fallback. Ids are unique
/// within a registry.
#[derive(Debug, Clone)]
pub struct TemplateRegistry<T> {
    templates: Vec<T>,
    fallback: T,
}

impl<T: RegistryEntry + Clone> TemplateRegistry<T> {
    /// Create a registry from its templates and the fallback entry
    ///
    /// Later templates with an id already present are dropped so the
    /// first registration wins, matching lookup order.
    pub fn new(templates: Vec<T>, fallback: T) -> Self {
        let mut registry = Self {
            templates: Vec::with_capacity(templates.len()),
            fallback,
        };
        for template in templates {
            if let Err(err) = registry.register(template) {
                tracing::warn!("Skipping template: {}", err);
            }
        }
        registry
    }

    /// Add a template, rejecting empty and duplicate ids
    pub fn register(&mut self, template: T) -> PromptResult<()> {
        if template.id().trim().is_empty() {
            return Err(PromptError::InvalidTemplate(
                "template id must not be empty".to_string(),
            ));
        }
        if self.find(template.id()).is_some() {
            return Err(PromptError::DuplicateTemplate(template.id().to_string()));
        }

        self.templates.push(template);
        Ok(())
    }

    /// Exact lookup
    pub fn find(&self, id: &str) -> Option<&T> {
        self.templates.iter().find(|template| template.id() == id)
    }

    /// Lookup with fallback to the default entry
    pub fn get(&self, id: &str) -> &T {
        self.find(id).unwrap_or(&self.fallback)
    }

    pub fn templates(&self) -> &[T] {
        &self.templates
    }

    pub fn fallback(&self) -> &T {
        &self.fallback
    }
}

impl TemplateRegistry<PromptTemplate> {
    /// Built-in single-axis templates, falling back to `academic`
    pub fn builtin() -> Self {
        Self::new(library::all(), library::academic())
    }
}

impl TemplateRegistry<MultiAxisTemplate> {
    /// Built-in multi-axis templates, falling back to SPAR
    pub fn builtin() -> Self {
        Self::new(multi_axis::templates::all(), multi_axis::templates::spar())
    }
}

/// Single-axis and multi-axis registries served together
#[derive(Debug, Clone)]
pub struct PromptLibrary {
    pub single: TemplateRegistry<PromptTemplate>,
    pub multi_axis: TemplateRegistry<MultiAxisTemplate>,
}

impl PromptLibrary {
    pub fn builtin() -> Self {
        Self {
            single: TemplateRegistry::<PromptTemplate>::builtin(),
            multi_axis: TemplateRegistry::<MultiAxisTemplate>::builtin(),
        }
    }
}

impl Default for PromptLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolve a single-axis template by id against the built-in library
pub fn get_template(template_id: &str) -> PromptTemplate {
    TemplateRegistry::<PromptTemplate>::builtin()
        .get(template_id)
        .clone()
}

/// Resolve a multi-axis template by id; empty or unknown ids yield SPAR
pub fn get_multi_axis_template(template_id: &str) -> MultiAxisTemplate {
    TemplateRegistry::<MultiAxisTemplate>::builtin()
        .get(template_id)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(id: &str, keyword: &str) -> PromptTemplate {
        PromptTemplate {
            id: id.to_string(),
            name: format!("{id} template"),
            description: String::new(),
            system_message: "{criteria_string} -> {ranking_keyword}".to_string(),
            ranking_keyword: keyword.to_string(),
            additional_instructions: None,
        }
    }

    #[test]
    fn every_builtin_template_resolves_to_itself() {
        let registry = TemplateRegistry::<PromptTemplate>::builtin();

        for entry in registry.templates() {
            assert_eq!(registry.get(&entry.id), entry);
            assert_eq!(&get_template(&entry.id), entry);
        }
    }

    #[test]
    fn unknown_ids_fall_back_to_academic() {
        let academic = library::academic();

        assert_eq!(get_template("does-not-exist"), academic);
        assert_eq!(get_template(""), academic);
        assert_eq!(get_template("  \u{0}garbage "), academic);
    }

    #[test]
    fn find_does_not_fall_back() {
        let registry = TemplateRegistry::<PromptTemplate>::builtin();

        assert!(registry.find("academic").is_some());
        assert!(registry.find("nope").is_none());
    }

    #[test]
    fn register_adds_lookupable_template() {
        let mut registry = TemplateRegistry::<PromptTemplate>::builtin();
        registry.register(template("scholarship", "SCORE")).unwrap();

        assert_eq!(registry.get("scholarship").ranking_keyword, "SCORE");
        assert_eq!(registry.templates().len(), 2);
    }

    #[test]
    fn register_rejects_duplicate_id() {
        let mut registry = TemplateRegistry::<PromptTemplate>::builtin();
        let result = registry.register(template("academic", "OTHER"));

        assert_eq!(
            result,
            Err(PromptError::DuplicateTemplate("academic".to_string()))
        );
        assert_eq!(registry.get("academic").ranking_keyword, "FINAL_RANKING");
    }

    #[test]
    fn register_rejects_empty_id() {
        let mut registry = TemplateRegistry::<PromptTemplate>::builtin();

        assert!(matches!(
            registry.register(template("  ", "X")),
            Err(PromptError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn first_registration_wins_on_construction() {
        let registry = TemplateRegistry::new(
            vec![template("a", "FIRST"), template("a", "SECOND")],
            template("fallback", "FALLBACK"),
        );

        assert_eq!(registry.templates().len(), 1);
        assert_eq!(registry.get("a").ranking_keyword, "FIRST");
        assert_eq!(registry.get("b").ranking_keyword, "FALLBACK");
    }

    #[test]
    fn multi_axis_lookup_defaults_to_spar() {
        assert_eq!(get_multi_axis_template("").id, "multi_axis_spar");
        assert_eq!(get_multi_axis_template("unknown").id, "multi_axis_spar");
        assert_eq!(
            get_multi_axis_template("multi_axis_academic").id,
            "multi_axis_academic"
        );
    }
}
