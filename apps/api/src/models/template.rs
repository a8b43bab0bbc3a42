use serde::Serialize;

/// A selectable resume visual layout. Static — compiled into the service,
/// never mutated or persisted.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The full template catalog.
pub const TEMPLATES: &[TemplateDescriptor] = &[
    TemplateDescriptor {
        id: "modern-1",
        name: "Modern Professional",
        description: "Clean and professional template with a modern design",
    },
    TemplateDescriptor {
        id: "creative-1",
        name: "Creative Design",
        description: "Stand out with this creative and unique template",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_exactly_two_templates() {
        assert_eq!(TEMPLATES.len(), 2);
        assert_eq!(TEMPLATES[0].id, "modern-1");
        assert_eq!(TEMPLATES[1].id, "creative-1");
    }

    #[test]
    fn test_every_template_has_nonempty_name_and_description() {
        for template in TEMPLATES {
            assert!(!template.name.is_empty());
            assert!(!template.description.is_empty());
        }
    }
}
