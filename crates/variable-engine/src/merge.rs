use tracing::debug;

use promptstash_core_types::VariableConfig;

use crate::discover::parse_variables;

/// Merge previously stored configs with freshly discovered names.
///
/// Output order: surviving prior configs first (in their prior relative
/// order), then newly discovered names in discovery order, defaulted to
/// kind text. Configs whose name no longer appears are dropped entirely.
/// Idempotent for unchanged content.
pub fn merge_variable_configs(
    discovered: &[String],
    prior: &[VariableConfig],
) -> Vec<VariableConfig> {
    let mut merged: Vec<VariableConfig> = prior
        .iter()
        .filter(|config| discovered.iter().any(|name| *name == config.name))
        .cloned()
        .collect();
    for name in discovered {
        if !merged.iter().any(|config| &config.name == name) {
            merged.push(VariableConfig::text(name.clone()));
        }
    }
    merged
}

/// Re-derive a prompt's variable configs after a content edit.
pub fn sync_configs(content: &str, prior: &[VariableConfig]) -> Vec<VariableConfig> {
    let discovered = parse_variables(content);
    let merged = merge_variable_configs(&discovered, prior);
    if merged.len() != prior.len() {
        debug!(
            before = prior.len(),
            after = merged.len(),
            "variable configs changed with content edit"
        );
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptstash_core_types::VariableKind;

    fn config(name: &str, kind: VariableKind) -> VariableConfig {
        VariableConfig {
            kind,
            ..VariableConfig::text(name)
        }
    }

    #[test]
    fn preserves_surviving_configs_then_appends_new() {
        let prior = vec![
            config("tone", VariableKind::Select),
            config("topic", VariableKind::Textarea),
        ];
        let merged = sync_configs("{{topic}} {{tone}} {{audience}}", &prior);

        let names: Vec<&str> = merged.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["tone", "topic", "audience"]);
        assert_eq!(merged[0].kind, VariableKind::Select);
        assert_eq!(merged[1].kind, VariableKind::Textarea);
        assert_eq!(merged[2].kind, VariableKind::Text);
    }

    #[test]
    fn drops_configs_for_vanished_names() {
        let prior = vec![config("gone", VariableKind::Preset)];
        assert!(sync_configs("no placeholders here", &prior).is_empty());
    }

    #[test]
    fn idempotent_for_unchanged_content() {
        let content = "{{a}} {{b}}";
        let once = sync_configs(content, &[]);
        let twice = sync_configs(content, &once);
        assert_eq!(once, twice);
    }
}
